// Entry point: parses the CLI, loads config, and launches the dashboard.
use std::path::{Path, PathBuf};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use filmscope::app::App;
use filmscope::cli::Args;
use filmscope::config::AppConfig;
use filmscope::data::aggregate::{director_means, subject_counts};
use filmscope::data::filter::{apply_filters, FilterState};
use filmscope::data::loader::load_dataset;
use filmscope::data::DataError;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = AppConfig::load_or_default(&args.config);

    if args.nogui {
        if let Err(err) = run_headless(&args, &cfg) {
            error!(%err, "headless run failed");
            std::process::exit(1);
        }
        return Ok(());
    }

    let stop_flag = Arc::new(AtomicBool::new(false));
    let stop_flag_for_ctrlc = stop_flag.clone();
    ctrlc::set_handler(move || {
        stop_flag_for_ctrlc.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 900.0]),
        ..Default::default()
    };

    let data_path = PathBuf::from(&args.data);
    eframe::run_native(
        "Filmscope",
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, cfg, data_path, stop_flag)))),
    )
}

/// Load the dataset and print the same aggregates the views would show.
/// Exercises the whole pipeline without a window.
fn run_headless(args: &Args, cfg: &AppConfig) -> Result<(), DataError> {
    let dataset = load_dataset(Path::new(&args.data))?;
    let filtered = apply_filters(&dataset.records, &FilterState::default());

    println!(
        "{} records ({} subjects, {} directors)",
        dataset.records.len(),
        dataset.subjects.len(),
        dataset.directors.len()
    );

    println!("\nTop directors by average popularity:");
    for m in director_means(&filtered, cfg.charts.top_directors) {
        println!(
            "  {:<24} {:>5.1}  ({} films)",
            m.director, m.mean_popularity, m.films
        );
    }

    println!("\nFilms by genre:");
    for c in subject_counts(&dataset.records) {
        println!("  {:<24} {:>4}", c.subject, c.films);
    }

    Ok(())
}
