use thiserror::Error;

/// Schema problems found while projecting the raw table onto the analysed
/// columns. I/O and parse failures travel as `anyhow` errors instead.
#[derive(Debug, Error, PartialEq)]
pub enum PipelineError {
    #[error("input is missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}, column '{column}': cannot read '{value}' as {expected}")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unknown numeric column '{0}'")]
    UnknownColumn(String),
}
