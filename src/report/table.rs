use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::{GenreAggregate, NumericColumn};

/// Arrow batch with one row per genre: `genre`, `movies`, then every mean in
/// [`NumericColumn::ALL`] order.
pub fn genre_batch<'a, I>(rows: I) -> Result<RecordBatch>
where
    I: IntoIterator<Item = &'a GenreAggregate>,
{
    let rows: Vec<&GenreAggregate> = rows.into_iter().collect();

    let mut fields = vec![
        Field::new("genre", DataType::Utf8, false),
        Field::new("movies", DataType::UInt64, false),
    ];
    let mut columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.genre.as_str()))),
        Arc::new(UInt64Array::from_iter_values(rows.iter().map(|r| r.movies as u64))),
    ];
    for col in NumericColumn::ALL {
        fields.push(Field::new(col.name(), DataType::Float64, false));
        columns.push(Arc::new(Float64Array::from_iter_values(
            rows.iter().map(|r| r.value(col)),
        )));
    }

    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
        .context("building genre record batch")
}

/// The genre rows as an ASCII table.
pub fn format_genre_table<'a, I>(rows: I) -> Result<String>
where
    I: IntoIterator<Item = &'a GenreAggregate>,
{
    let batch = genre_batch(rows)?;
    let table = pretty_format_batches(&[batch]).context("formatting genre table")?;
    Ok(table.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregate(genre: &str, popularity: f64) -> GenreAggregate {
        GenreAggregate {
            genre: genre.to_string(),
            movies: 3,
            budget_adj: 4.4e7,
            popularity,
            revenue_adj: 1.2e8,
            runtime: 107.5,
            release_year: 2002.0,
            vote_average: 6.1,
        }
    }

    #[test]
    fn batch_has_one_row_per_genre() {
        let rows = [aggregate("Adventure", 1.8), aggregate("Foreign", 0.2)];
        let batch = genre_batch(&rows).unwrap();
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.num_columns(), 8);
        assert_eq!(batch.schema().field(3).name(), "popularity");
    }

    #[test]
    fn formatted_table_names_columns_and_genres() {
        let rows = [aggregate("Science Fiction", 2.5)];
        let text = format_genre_table(&rows).unwrap();
        assert!(text.contains("Science Fiction"));
        assert!(text.contains("budget_adj"));
        assert!(text.contains("vote_average"));
    }
}
