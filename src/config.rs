use std::path::PathBuf;

use crate::data::model::NumericColumn;

/// Dataset file name the analysis looks for by default.
pub const DEFAULT_INPUT: &str = "tmdb-movies.csv";

/// Knobs shared by the console report and the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub input: PathBuf,
    /// Column the genre ranking is sorted by, largest first.
    pub rank_by: NumericColumn,
    /// Limit the ranking to the first N genres.
    pub top: Option<usize>,
    /// Bins for the popularity distribution.
    pub popularity_bins: usize,
    /// Bins for every other factor's distribution.
    pub factor_bins: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            rank_by: NumericColumn::Popularity,
            top: None,
            popularity_bins: 8,
            factor_bins: 6,
        }
    }
}

impl AnalysisConfig {
    pub fn bins_for(&self, column: NumericColumn) -> usize {
        match column {
            NumericColumn::Popularity => self.popularity_bins,
            _ => self.factor_bins,
        }
    }
}
