use eframe::egui::{Color32, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use genre_lens::data::{Analysis, GenreTable, NumericColumn};
use genre_lens::report::stats::{fit_line, histogram};

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Central panel
// ---------------------------------------------------------------------------

/// Render the selected view in the central panel.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    let analysis = match &state.analysis {
        Some(analysis) => analysis,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a movie table to start  (File → Open…)");
            });
            return;
        }
    };

    match state.view {
        View::GenreTable => genre_table(ui, analysis, state.config.rank_by),
        View::PopularityBars => popularity_bars(ui, &analysis.genres),
        View::PopularityHistogram => column_histogram(
            ui,
            &analysis.genres,
            NumericColumn::Popularity,
            state.config.popularity_bins,
        ),
        View::Factor(col) => {
            let half = ui.available_height() / 2.0;
            factor_scatter(ui, state, &analysis.genres, col, half);
            column_histogram(ui, &analysis.genres, col, state.config.factor_bins);
        }
    }
}

// ---------------------------------------------------------------------------
// Genre table
// ---------------------------------------------------------------------------

fn genre_table(ui: &mut Ui, analysis: &Analysis, sort_by: NumericColumn) {
    ui.heading(format!("Genre averages, sorted by {}", sort_by.label()));

    TableBuilder::new(ui)
        .striped(true)
        .column(TableColumn::auto().at_least(130.0))
        .columns(TableColumn::auto().at_least(90.0), NumericColumn::ALL.len() + 1)
        .header(22.0, |mut header| {
            header.col(|ui: &mut Ui| {
                ui.strong("genre");
            });
            header.col(|ui: &mut Ui| {
                ui.strong("movies");
            });
            for col in NumericColumn::ALL {
                header.col(|ui: &mut Ui| {
                    ui.strong(col.name());
                });
            }
        })
        .body(|mut body| {
            for row in analysis.genres.ranked_by(sort_by) {
                body.row(18.0, |mut table_row| {
                    table_row.col(|ui: &mut Ui| {
                        ui.label(&row.genre);
                    });
                    table_row.col(|ui: &mut Ui| {
                        ui.label(row.movies.to_string());
                    });
                    for col in NumericColumn::ALL {
                        table_row.col(|ui: &mut Ui| {
                            ui.monospace(format_value(row.value(col)));
                        });
                    }
                });
            }
        });
}

fn format_value(v: f64) -> String {
    if v.abs() >= 1.0e5 {
        format!("{v:.4e}")
    } else {
        format!("{v:.4}")
    }
}

// ---------------------------------------------------------------------------
// Average popularity per genre
// ---------------------------------------------------------------------------

fn popularity_bars(ui: &mut Ui, genres: &GenreTable) {
    let ranked = genres.ranked_by(NumericColumn::Popularity);
    let names: Vec<String> = ranked.iter().map(|row| row.genre.clone()).collect();

    let bars: Vec<Bar> = ranked
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64, row.popularity)
                .name(&row.genre)
                .width(0.8)
        })
        .collect();

    Plot::new("popularity_bars")
        .x_axis_label("Genre")
        .y_axis_label("Popularity")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            names.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("Average Popularity of Genres")
                    .color(Color32::LIGHT_BLUE),
            );
        });
}

// ---------------------------------------------------------------------------
// Histograms
// ---------------------------------------------------------------------------

fn column_histogram(ui: &mut Ui, genres: &GenreTable, column: NumericColumn, bins: usize) {
    let bars: Vec<Bar> = histogram(&genres.column_values(column), bins)
        .iter()
        .map(|bin| {
            Bar::new(bin.center(), bin.count as f64)
                .width(bin.width())
                .name(format!("{:.4} to {:.4}", bin.lower, bin.upper))
        })
        .collect();

    Plot::new(("histogram", column.name()))
        .x_axis_label(column.label())
        .y_axis_label("Frequency of Occurrence")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name(format!("Distribution of {}", column.label()))
                    .color(Color32::from_rgb(100, 149, 237)),
            );
        });
}

// ---------------------------------------------------------------------------
// Factor vs popularity scatter
// ---------------------------------------------------------------------------

fn factor_scatter(
    ui: &mut Ui,
    state: &AppState,
    genres: &GenreTable,
    column: NumericColumn,
    height: f32,
) {
    let points: Vec<[f64; 2]> = genres
        .iter()
        .map(|row| [row.value(column), row.popularity])
        .collect();
    let fit = if state.show_fit_line {
        fit_line(&points)
    } else {
        None
    };

    Plot::new(("scatter", column.name()))
        .height(height)
        .legend(Legend::default())
        .x_axis_label(column.label())
        .y_axis_label("Popularity")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One series per genre so the legend doubles as the hue key.
            for (row, point) in genres.iter().zip(&points) {
                plot_ui.points(
                    Points::new(PlotPoints::new(vec![*point]))
                        .name(&row.genre)
                        .color(state.colors.color_for(&row.genre))
                        .radius(5.0),
                );
            }

            if let Some(fit) = fit {
                let (lo, hi) = points
                    .iter()
                    .map(|p| p[0])
                    .filter(|x| x.is_finite())
                    .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                        (lo.min(x), hi.max(x))
                    });
                let line: PlotPoints = [lo, hi].iter().map(|&x| [x, fit.predict(x)]).collect();
                plot_ui.line(Line::new(line).name("Line of fit").color(Color32::WHITE).width(2.0));
            }
        });
}
