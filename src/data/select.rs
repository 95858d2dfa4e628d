use super::error::PipelineError;
use super::model::{CellValue, Column, Movie, NumericColumn, RawTable};

static NULL_CELL: CellValue = CellValue::Null;

/// Project the raw table onto the seven analysed columns.
///
/// Empty `genres` cells become an empty string and empty float cells become
/// `NaN`; `release_year` must always be present.
pub fn select_columns(table: &RawTable) -> Result<Vec<Movie>, PipelineError> {
    let idx = |column: Column| {
        table
            .column_index(column.name())
            .ok_or(PipelineError::MissingColumn(column.name()))
    };
    let genres_idx = idx(Column::Genres)?;
    let mut numeric_idx = [0usize; 6];
    for col in NumericColumn::ALL {
        numeric_idx[col.index()] = idx(Column::Numeric(col))?;
    }

    table
        .rows
        .iter()
        .enumerate()
        .map(|(row_no, row)| -> Result<Movie, PipelineError> {
            let cell = |i: usize| row.get(i).unwrap_or(&NULL_CELL);
            let float = |col: NumericColumn| read_float(cell(numeric_idx[col.index()]), row_no, col);

            Ok(Movie {
                genres: read_genres(cell(genres_idx)),
                popularity: float(NumericColumn::Popularity)?,
                vote_average: float(NumericColumn::VoteAverage)?,
                runtime: float(NumericColumn::Runtime)?,
                budget_adj: float(NumericColumn::BudgetAdj)?,
                revenue_adj: float(NumericColumn::RevenueAdj)?,
                release_year: read_year(cell(numeric_idx[NumericColumn::ReleaseYear.index()]), row_no)?,
            })
        })
        .collect()
}

/// The genre text as stored. Non-text cells (a JSON number, say) use their
/// plain value form, never the rounded display form.
fn read_genres(cell: &CellValue) -> String {
    match cell {
        CellValue::Null => String::new(),
        CellValue::String(s) => s.clone(),
        CellValue::Integer(i) => i.to_string(),
        CellValue::Float(f) => f.to_string(),
        CellValue::Bool(b) => b.to_string(),
    }
}

fn read_float(cell: &CellValue, row: usize, column: NumericColumn) -> Result<f64, PipelineError> {
    match cell {
        CellValue::Null => Ok(f64::NAN),
        other => other.as_f64().ok_or_else(|| invalid(other, row, column, "a number")),
    }
}

fn read_year(cell: &CellValue, row: usize) -> Result<i32, PipelineError> {
    let column = NumericColumn::ReleaseYear;
    match cell {
        CellValue::Integer(i) => i32::try_from(*i).map_err(|_| invalid(cell, row, column, "a year")),
        // Parquet files written from pandas sometimes store whole years as floats.
        CellValue::Float(f) if f.fract() == 0.0 && f.abs() <= f64::from(i32::MAX) => Ok(*f as i32),
        other => Err(invalid(other, row, column, "a year")),
    }
}

fn invalid(cell: &CellValue, row: usize, column: NumericColumn, expected: &'static str) -> PipelineError {
    PipelineError::InvalidValue {
        row,
        column: column.name(),
        value: cell.to_string(),
        expected,
    }
}
