use std::io::Write;

use anyhow::Result;

use super::stats::{fit_line, histogram};
use super::table::format_genre_table;
use crate::config::AnalysisConfig;
use crate::data::model::{GenreTable, NumericColumn};
use crate::data::pipeline::{Analysis, DatasetSummary};

const BAR_WIDTH: usize = 40;

/// Print the whole report: overview, genre table, ranking, distributions
/// and factor-vs-popularity lines.
pub fn write_report<W: Write>(out: &mut W, analysis: &Analysis, config: &AnalysisConfig) -> Result<()> {
    write_summary(out, &analysis.summary)?;

    writeln!(out, "\nGenre averages")?;
    writeln!(out, "{}", format_genre_table(analysis.genres.rows())?)?;

    write_ranking(out, &analysis.genres, config.rank_by, config.top)?;

    for col in NumericColumn::ALL {
        write_histogram(out, &analysis.genres, col, config.bins_for(col))?;
    }

    write_factor_fits(out, &analysis.genres)?;
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, summary: &DatasetSummary) -> Result<()> {
    writeln!(
        out,
        "Dataset: {} rows x {} columns",
        summary.raw_rows, summary.raw_columns
    )?;
    writeln!(out, "Null values per analysed column:")?;
    for (col, n) in &summary.null_counts {
        writeln!(out, "  {:<14} {n}", col.name())?;
    }
    writeln!(out, "Duplicate rows: {} (kept)", summary.duplicate_rows)?;
    writeln!(out, "Rows after zero-value filter: {}", summary.retained_rows)?;
    writeln!(out, "Movie-genre records: {}", summary.exploded_rows)?;
    Ok(())
}

/// Genres sorted by `column`, largest first.
pub fn write_ranking<W: Write>(
    out: &mut W,
    genres: &GenreTable,
    column: NumericColumn,
    top: Option<usize>,
) -> Result<()> {
    writeln!(out, "\nGenres ranked by {column}")?;
    let ranked = genres.ranked_by(column);
    let shown = top.unwrap_or(ranked.len());
    for (rank, row) in ranked.iter().take(shown).enumerate() {
        writeln!(out, "{:>3}. {:<16} {:.6}", rank + 1, row.genre, row.value(column))?;
    }
    Ok(())
}

/// Text histogram of the per-genre means of `column`.
pub fn write_histogram<W: Write>(
    out: &mut W,
    genres: &GenreTable,
    column: NumericColumn,
    bins: usize,
) -> Result<()> {
    writeln!(out, "\nDistribution of {} ({bins} bins)", column.label())?;
    let bins = histogram(&genres.column_values(column), bins);
    let max = bins.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    for bin in &bins {
        let bar = "#".repeat(bin.count * BAR_WIDTH / max);
        writeln!(
            out,
            "  {:>14.4} .. {:<14.4} {:<width$} {}",
            bin.lower,
            bin.upper,
            bar,
            bin.count,
            width = BAR_WIDTH
        )?;
    }
    Ok(())
}

/// Least-squares line of popularity against each factor.
pub fn write_factor_fits<W: Write>(out: &mut W, genres: &GenreTable) -> Result<()> {
    writeln!(out, "\nPopularity against each factor (least squares)")?;
    let popularity = genres.column_values(NumericColumn::Popularity);
    for col in NumericColumn::FACTORS {
        let points: Vec<[f64; 2]> = genres
            .column_values(col)
            .into_iter()
            .zip(popularity.iter().copied())
            .map(|(x, y)| [x, y])
            .collect();
        match fit_line(&points) {
            Some(fit) => writeln!(
                out,
                "  {:<16} slope {:>12.4e}  intercept {:>12.4}",
                col.label(),
                fit.slope,
                fit.intercept
            )?,
            None => writeln!(out, "  {:<16} not enough spread to fit", col.label())?,
        }
    }
    Ok(())
}
