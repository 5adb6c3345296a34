use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TuningReportApp {
    pub state: AppState,
}

impl TuningReportApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for TuningReportApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: voice legend / visibility ----
        egui::SidePanel::left("voice_panel")
            .default_width(140.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: comparison grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::calibration_grid(ui, &self.state);
        });
    }
}
