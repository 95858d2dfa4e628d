use std::path::Path;

use anyhow::Result;

use super::aggregate::aggregate_by_genre;
use super::error::PipelineError;
use super::explode::explode_genres;
use super::filter::{drop_zero_rows, duplicate_count};
use super::loader::load_file;
use super::model::{Column, GenreMovie, GenreTable, Movie, RawTable};
use super::select::select_columns;

/// Shape and cleaning figures gathered along the way.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub raw_rows: usize,
    pub raw_columns: usize,
    /// Null cells per analysed column, before any cleaning.
    pub null_counts: Vec<(Column, usize)>,
    /// Rows identical to an earlier one after projection (kept).
    pub duplicate_rows: usize,
    /// Rows left after the zero-value filter.
    pub retained_rows: usize,
    /// Movie-genre records produced by the explosion.
    pub exploded_rows: usize,
}

/// Everything one run derives from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub summary: DatasetSummary,
    /// Projected movies that passed the zero-value filter.
    pub movies: Vec<Movie>,
    pub genres: GenreTable,
}

impl Analysis {
    /// The movie-genre records behind [`Analysis::genres`].
    pub fn exploded(&self) -> impl Iterator<Item = GenreMovie<'_>> + Clone + '_ {
        explode_genres(&self.movies)
    }
}

/// Load → select → filter → explode → aggregate.
pub fn analyze_file(path: &Path) -> Result<Analysis> {
    let raw = load_file(path)?;
    Ok(analyze(&raw)?)
}

/// Run the pipeline on an already loaded table.
pub fn analyze(raw: &RawTable) -> Result<Analysis, PipelineError> {
    let null_counts = Column::ALL
        .into_iter()
        .map(|col| {
            raw.null_count(col.name())
                .map(|n| (col, n))
                .ok_or(PipelineError::MissingColumn(col.name()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let projected = select_columns(raw)?;
    let duplicate_rows = duplicate_count(&projected);
    if duplicate_rows > 0 {
        log::info!("{duplicate_rows} duplicate rows found; keeping them");
    }

    let movies = drop_zero_rows(projected);
    let exploded_rows = explode_genres(&movies).count();
    let genres = aggregate_by_genre(explode_genres(&movies));

    log::info!(
        "{} of {} rows kept, {} movie-genre records, {} genres",
        movies.len(),
        raw.len(),
        exploded_rows,
        genres.len()
    );

    Ok(Analysis {
        summary: DatasetSummary {
            raw_rows: raw.len(),
            raw_columns: raw.headers.len(),
            null_counts,
            duplicate_rows,
            retained_rows: movies.len(),
            exploded_rows,
        },
        movies,
        genres,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn raw() -> RawTable {
        let headers = [
            "genres",
            "popularity",
            "vote_average",
            "runtime",
            "budget_adj",
            "revenue_adj",
            "release_year",
        ];
        let row = |genres: Option<&str>, popularity: f64, budget: f64| {
            vec![
                genres.map_or(CellValue::Null, |g| CellValue::String(g.into())),
                CellValue::Float(popularity),
                CellValue::Float(6.0),
                CellValue::Integer(100),
                CellValue::Float(budget),
                CellValue::Float(5.0e7),
                CellValue::Integer(2010),
            ]
        };
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: vec![
                row(Some("Action|Comedy"), 2.0, 1.0e7),
                row(Some("Action"), 4.0, 0.0),
                row(None, 1.0, 1.0e7),
                row(Some("Comedy"), 1.0, 2.0e7),
                row(Some("Comedy"), 1.0, 2.0e7),
            ],
        }
    }

    #[test]
    fn summary_tracks_each_stage() {
        let analysis = analyze(&raw()).unwrap();
        let summary = &analysis.summary;

        assert_eq!(summary.raw_rows, 5);
        assert_eq!(summary.raw_columns, 7);
        assert_eq!(summary.null_counts[0], (Column::Genres, 1));
        assert_eq!(summary.duplicate_rows, 1);
        assert_eq!(summary.retained_rows, 4);
        assert_eq!(summary.exploded_rows, 4);
        assert_eq!(analysis.exploded().count(), summary.exploded_rows);
    }

    #[test]
    fn zero_budget_row_does_not_reach_the_aggregate() {
        let analysis = analyze(&raw()).unwrap();
        let action = analysis.genres.get("Action").unwrap();
        assert_eq!(action.movies, 1);
        assert_eq!(action.popularity, 2.0);
        assert_eq!(analysis.genres.get("Comedy").unwrap().movies, 3);
    }

    #[test]
    fn missing_column_is_reported() {
        let mut table = raw();
        table.headers[6] = "year".into();
        assert_eq!(
            analyze(&table).unwrap_err(),
            PipelineError::MissingColumn("release_year")
        );
    }
}
