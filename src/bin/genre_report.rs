//! Console report: genre averages, rankings and distributions.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use genre_lens::config::{AnalysisConfig, DEFAULT_INPUT};
use genre_lens::data::{analyze_file, NumericColumn};
use genre_lens::report::console::write_report;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "What contributes to making a movie genre popular?",
    long_about = "Loads the TMDb movie export, drops rows holding zero values, splits \
                  the pipe-delimited genres and prints per-genre averages, rankings \
                  and distributions.\n\n\
                  Set RUST_LOG=info to see row counts for each pipeline stage."
)]
struct Args {
    /// Movie table to analyse (.csv, .json or .parquet)
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Numeric column the genre ranking is sorted by
    #[arg(long, default_value = "popularity")]
    rank_by: NumericColumn,

    /// Only show the first N genres of the ranking
    #[arg(long)]
    top: Option<usize>,

    /// Bins for the popularity histogram
    #[arg(long, default_value_t = 8)]
    popularity_bins: usize,

    /// Bins for every other factor's histogram
    #[arg(long, default_value_t = 6)]
    factor_bins: usize,

    /// Print the genre table as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl From<Args> for AnalysisConfig {
    fn from(args: Args) -> Self {
        AnalysisConfig {
            input: args.input,
            rank_by: args.rank_by,
            top: args.top,
            popularity_bins: args.popularity_bins,
            factor_bins: args.factor_bins,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let json = args.json;
    let config = AnalysisConfig::from(args);

    let analysis = analyze_file(&config.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, analysis.genres.rows())
            .context("writing genre table as JSON")?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &analysis, &config)?;
    }
    Ok(())
}
