use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use genre_lens::data::NumericColumn;

use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – view selection
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Views");
    ui.separator();

    if state.analysis.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            view_button(ui, state, View::GenreTable, "Genre averages");
            view_button(ui, state, View::PopularityBars, "Average popularity");
            view_button(ui, state, View::PopularityHistogram, "Popularity distribution");

            ui.separator();
            ui.strong("vs. popularity");
            for col in NumericColumn::FACTORS {
                view_button(ui, state, View::Factor(col), col.label());
            }

            ui.separator();

            // ---- Sort-by selector for the table ----
            ui.strong("Sort table by");
            let current = state.config.rank_by;
            egui::ComboBox::from_id_salt("rank_by")
                .selected_text(current.label())
                .show_ui(ui, |ui: &mut Ui| {
                    for col in NumericColumn::ALL {
                        if ui.selectable_label(current == col, col.label()).clicked() {
                            state.config.rank_by = col;
                        }
                    }
                });
        });
}

fn view_button(ui: &mut Ui, state: &mut AppState, view: View, label: &str) {
    if ui.selectable_label(state.view == view, label).clicked() {
        state.view = view;
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(analysis) = &state.analysis {
            let summary = &analysis.summary;
            ui.label(format!(
                "{} movies loaded, {} kept, {} genres",
                summary.raw_rows,
                summary.retained_rows,
                analysis.genres.len()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_fit_line, "Line of fit")
            .clicked()
        {
            state.show_fit_line = !state.show_fit_line;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open movie data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}
