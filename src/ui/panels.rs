use eframe::egui::{RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – figure-level voice legend
// ---------------------------------------------------------------------------

/// Render the voice legend panel. This is the single figure-level legend for
/// the whole grid: one swatched entry per voice, doubling as a visibility
/// toggle for that voice's series in every subplot.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Voices");
    ui.separator();

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.show_all_voices();
        }
        if ui.small_button("None").clicked() {
            state.hide_all_voices();
        }
    });
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (voice, (label, color)) in
                state.palette.legend_entries().into_iter().enumerate()
            {
                let mut checked = state.voice_visible[voice];
                let text = RichText::new(label).color(color);
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_voice(voice as u8);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar: configured runs and total sample count.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Tuning Report");
        ui.separator();
        ui.label(format!(
            "{} runs, {} records",
            state.runs.len(),
            state.total_records()
        ));
    });
}
