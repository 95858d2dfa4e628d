use std::path::Path;

use genre_lens::config::AnalysisConfig;
use genre_lens::data::{analyze_file, Analysis, NumericColumn};

use crate::color::GenreColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Per-genre averages as a table.
    GenreTable,
    /// Mean popularity per genre, most popular first.
    PopularityBars,
    /// Distribution of the per-genre popularity means.
    PopularityHistogram,
    /// One factor against popularity, plus its own distribution.
    Factor(NumericColumn),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Pipeline output (None until user loads a file).
    pub analysis: Option<Analysis>,

    /// Colour per genre for the scatter plots.
    pub colors: GenreColors,

    pub view: View,

    /// Draw the least-squares line in factor scatter plots.
    pub show_fit_line: bool,

    /// Histogram bin counts.
    pub config: AnalysisConfig,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            analysis: None,
            colors: GenreColors::default(),
            view: View::PopularityBars,
            show_fit_line: true,
            config: AnalysisConfig::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a finished analysis and colour its genres.
    pub fn set_analysis(&mut self, analysis: Analysis) {
        self.colors = GenreColors::new(&analysis.genres);
        self.analysis = Some(analysis);
        self.status_message = None;
    }

    /// Run the pipeline on `path`; failures end up in the status line.
    pub fn open_path(&mut self, path: &Path) {
        match analyze_file(path) {
            Ok(analysis) => {
                log::info!(
                    "Analysed {} movies into {} genres",
                    analysis.movies.len(),
                    analysis.genres.len()
                );
                self.config.input = path.to_path_buf();
                self.set_analysis(analysis);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn failed_load_sets_status_message() {
        let mut state = AppState::default();
        state.open_path(Path::new("no/such/tmdb-movies.csv"));
        assert!(state.analysis.is_none());
        assert!(state
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Error:")));
    }

    #[test]
    fn successful_load_clears_status() {
        let mut tmp = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        write!(
            tmp,
            "genres,popularity,vote_average,runtime,budget_adj,revenue_adj,release_year\n\
             Action|Comedy,2.0,6.0,100,1e7,3e7,2010\n"
        )
        .unwrap();

        let mut state = AppState {
            status_message: Some("Error: earlier".into()),
            ..AppState::default()
        };
        state.open_path(tmp.path());

        assert!(state.status_message.is_none());
        assert_eq!(state.config.input, tmp.path());
        let analysis = state.analysis.as_ref().unwrap();
        assert_eq!(analysis.genres.len(), 2);
        assert_ne!(
            state.colors.color_for("Action"),
            state.colors.color_for("Comedy")
        );
    }
}
