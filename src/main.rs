mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use app::TuningReportApp;
use data::loader::load_runs;
use data::model::RunConfig;
use eframe::egui;
use state::AppState;

fn main() -> ExitCode {
    env_logger::init();

    // Static run configuration: one calibration log per argument.
    let configs: Vec<RunConfig> = std::env::args_os()
        .skip(1)
        .map(|arg| RunConfig::from_path(PathBuf::from(arg)))
        .collect();

    if configs.is_empty() {
        eprintln!("usage: tuning-report <calibration-log.csv>...");
        return ExitCode::FAILURE;
    }

    // All runs load before any plotting begins; a missing file or malformed
    // row aborts here so a partial grid is never displayed.
    let runs = match load_runs(&configs) {
        Ok(runs) => runs,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "Tuning Report – Calibration Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(TuningReportApp::new(AppState::new(runs))))),
    );

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
