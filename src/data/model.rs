use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::PipelineError;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the raw table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell mirroring the dtypes a CSV reader would infer.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.4}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Interpret the value as an `f64` when it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// RawTable – the loader's output, before projection
// ---------------------------------------------------------------------------

/// Every column of the source file, rows kept in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    /// Column names in file order.
    pub headers: Vec<String>,
    /// One `Vec` per row, same length as `headers`.
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of null cells in `name`, or `None` if the column is absent.
    pub fn null_count(&self, name: &str) -> Option<usize> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .filter(|row| row.get(idx).map_or(true, CellValue::is_null))
                .count(),
        )
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Analysed columns
// ---------------------------------------------------------------------------

/// The seven columns the analysis keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Genres,
    Numeric(NumericColumn),
}

impl Column {
    pub const ALL: [Column; 7] = [
        Column::Genres,
        Column::Numeric(NumericColumn::Popularity),
        Column::Numeric(NumericColumn::VoteAverage),
        Column::Numeric(NumericColumn::Runtime),
        Column::Numeric(NumericColumn::BudgetAdj),
        Column::Numeric(NumericColumn::RevenueAdj),
        Column::Numeric(NumericColumn::ReleaseYear),
    ];

    /// Header name in the source file.
    pub fn name(self) -> &'static str {
        match self {
            Column::Genres => "genres",
            Column::Numeric(col) => col.name(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The numeric columns, in the order the genre table reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumericColumn {
    BudgetAdj,
    Popularity,
    RevenueAdj,
    Runtime,
    ReleaseYear,
    VoteAverage,
}

impl NumericColumn {
    pub const ALL: [NumericColumn; 6] = [
        NumericColumn::BudgetAdj,
        NumericColumn::Popularity,
        NumericColumn::RevenueAdj,
        NumericColumn::Runtime,
        NumericColumn::ReleaseYear,
        NumericColumn::VoteAverage,
    ];

    /// Every column compared against popularity.
    pub const FACTORS: [NumericColumn; 5] = [
        NumericColumn::BudgetAdj,
        NumericColumn::RevenueAdj,
        NumericColumn::ReleaseYear,
        NumericColumn::Runtime,
        NumericColumn::VoteAverage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NumericColumn::BudgetAdj => "budget_adj",
            NumericColumn::Popularity => "popularity",
            NumericColumn::RevenueAdj => "revenue_adj",
            NumericColumn::Runtime => "runtime",
            NumericColumn::ReleaseYear => "release_year",
            NumericColumn::VoteAverage => "vote_average",
        }
    }

    /// Human readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::BudgetAdj => "Adjusted Budget",
            NumericColumn::Popularity => "Popularity",
            NumericColumn::RevenueAdj => "Adjusted Revenue",
            NumericColumn::Runtime => "Runtime",
            NumericColumn::ReleaseYear => "Release Year",
            NumericColumn::VoteAverage => "Vote Average",
        }
    }

    /// Position in [`NumericColumn::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericColumn {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumericColumn::ALL
            .into_iter()
            .find(|col| col.name() == s)
            .ok_or_else(|| PipelineError::UnknownColumn(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Movie – one projected row
// ---------------------------------------------------------------------------

/// One movie restricted to the analysed columns.
///
/// Float fields hold `NaN` when the source cell was empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Pipe-delimited genre names, e.g. `Action|Adventure`.
    pub genres: String,
    pub popularity: f64,
    pub vote_average: f64,
    /// Minutes.
    pub runtime: f64,
    pub budget_adj: f64,
    pub revenue_adj: f64,
    pub release_year: i32,
}

impl Movie {
    pub fn value(&self, column: NumericColumn) -> f64 {
        match column {
            NumericColumn::BudgetAdj => self.budget_adj,
            NumericColumn::Popularity => self.popularity,
            NumericColumn::RevenueAdj => self.revenue_adj,
            NumericColumn::Runtime => self.runtime,
            NumericColumn::ReleaseYear => f64::from(self.release_year),
            NumericColumn::VoteAverage => self.vote_average,
        }
    }
}

// ---------------------------------------------------------------------------
// GenreMovie – one exploded record
// ---------------------------------------------------------------------------

/// A movie paired with exactly one of its genres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenreMovie<'a> {
    pub genre: &'a str,
    pub movie: &'a Movie,
}

impl GenreMovie<'_> {
    pub fn value(&self, column: NumericColumn) -> f64 {
        self.movie.value(column)
    }
}

// ---------------------------------------------------------------------------
// Genre aggregates
// ---------------------------------------------------------------------------

/// Per-genre means of every numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreAggregate {
    pub genre: String,
    /// Number of exploded records carrying this genre.
    pub movies: usize,
    pub budget_adj: f64,
    pub popularity: f64,
    pub revenue_adj: f64,
    pub runtime: f64,
    pub release_year: f64,
    pub vote_average: f64,
}

impl GenreAggregate {
    pub fn value(&self, column: NumericColumn) -> f64 {
        match column {
            NumericColumn::BudgetAdj => self.budget_adj,
            NumericColumn::Popularity => self.popularity,
            NumericColumn::RevenueAdj => self.revenue_adj,
            NumericColumn::Runtime => self.runtime,
            NumericColumn::ReleaseYear => self.release_year,
            NumericColumn::VoteAverage => self.vote_average,
        }
    }
}

/// All genre aggregates, ordered by genre name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreTable {
    /// Sorted by `genre`; `get` relies on it.
    rows: Vec<GenreAggregate>,
}

impl GenreTable {
    /// Build a table from aggregates in any order.
    pub fn new(mut rows: Vec<GenreAggregate>) -> Self {
        rows.sort_by(|a, b| a.genre.cmp(&b.genre));
        Self { rows }
    }

    pub fn rows(&self) -> &[GenreAggregate] {
        &self.rows
    }

    pub fn get(&self, genre: &str) -> Option<&GenreAggregate> {
        self.rows
            .binary_search_by(|row| row.genre.as_str().cmp(genre))
            .ok()
            .map(|idx| &self.rows[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GenreAggregate> {
        self.rows.iter()
    }

    /// Rows sorted by `column`, largest first. Equal values (and `NaN`s,
    /// which sort last) fall back to genre name order.
    pub fn ranked_by(&self, column: NumericColumn) -> Vec<&GenreAggregate> {
        let mut ranked: Vec<&GenreAggregate> = self.rows.iter().collect();
        ranked.sort_by(|a, b| {
            let (va, vb) = (a.value(column), b.value(column));
            match (va.is_nan(), vb.is_nan()) {
                (false, false) => vb.total_cmp(&va),
                (a_nan, b_nan) => a_nan.cmp(&b_nan),
            }
            .then_with(|| a.genre.cmp(&b.genre))
        });
        ranked
    }

    /// The column's values in genre order.
    pub fn column_values(&self, column: NumericColumn) -> Vec<f64> {
        self.rows.iter().map(|row| row.value(column)).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(genre: &str, popularity: f64) -> GenreAggregate {
        GenreAggregate {
            genre: genre.to_string(),
            movies: 1,
            budget_adj: 1.0,
            popularity,
            revenue_adj: 1.0,
            runtime: 90.0,
            release_year: 2000.0,
            vote_average: 6.0,
        }
    }

    #[test]
    fn numeric_column_parses_header_names() {
        for col in NumericColumn::ALL {
            assert_eq!(col.name().parse::<NumericColumn>().unwrap(), col);
        }
        assert!(matches!(
            "genres".parse::<NumericColumn>(),
            Err(PipelineError::UnknownColumn(name)) if name == "genres"
        ));
    }

    #[test]
    fn numeric_column_index_matches_all_order() {
        for (i, col) in NumericColumn::ALL.into_iter().enumerate() {
            assert_eq!(col.index(), i);
        }
    }

    #[test]
    fn null_count_counts_null_and_short_rows() {
        let table = RawTable {
            headers: vec!["a".into(), "b".into()],
            rows: vec![
                vec![CellValue::Integer(1), CellValue::Null],
                vec![CellValue::Null],
                vec![CellValue::Integer(3), CellValue::String("x".into())],
            ],
        };
        assert_eq!(table.null_count("a"), Some(1));
        assert_eq!(table.null_count("b"), Some(2));
        assert_eq!(table.null_count("c"), None);
    }

    #[test]
    fn ranked_by_sorts_descending_with_name_tiebreak() {
        let table = GenreTable::new(vec![
            aggregate("Action", 2.0),
            aggregate("Drama", f64::NAN),
            aggregate("Foreign", 0.2),
            aggregate("Horror", 2.0),
            aggregate("Science Fiction", 3.5),
        ]);
        let order: Vec<&str> = table
            .ranked_by(NumericColumn::Popularity)
            .iter()
            .map(|row| row.genre.as_str())
            .collect();
        assert_eq!(
            order,
            ["Science Fiction", "Action", "Horror", "Foreign", "Drama"]
        );
    }

    #[test]
    fn get_finds_rows_by_genre() {
        let table = GenreTable::new(vec![aggregate("Action", 1.0), aggregate("Comedy", 2.0)]);
        assert_eq!(table.get("Comedy").map(|r| r.popularity), Some(2.0));
        assert!(table.get("Western").is_none());
    }

    #[test]
    fn new_sorts_rows_so_lookups_hold() {
        let table = GenreTable::new(vec![
            aggregate("Western", 0.4),
            aggregate("Action", 1.0),
            aggregate("Drama", 0.7),
        ]);
        let names: Vec<&str> = table.iter().map(|r| r.genre.as_str()).collect();
        assert_eq!(names, ["Action", "Drama", "Western"]);
        for name in names {
            assert_eq!(table.get(name).map(|r| r.genre.as_str()), Some(name));
        }
    }
}
