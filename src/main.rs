mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::GenreLensApp;
use clap::Parser;
use eframe::egui;
use genre_lens::config::DEFAULT_INPUT;

#[derive(Parser, Debug)]
#[command(version, about = "Explore what makes a movie genre popular")]
struct Args {
    /// Movie table to open on start; defaults to ./tmdb-movies.csv when present
    input: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init();

    let args = Args::parse();
    let input = args.input.or_else(|| {
        let default = PathBuf::from(DEFAULT_INPUT);
        default.exists().then_some(default)
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Genre Lens – TMDb Genre Popularity",
        options,
        Box::new(move |_cc| Ok(Box::new(GenreLensApp::new(input.as_deref())))),
    )
}
