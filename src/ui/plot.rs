use eframe::egui::Ui;
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::data::filter::select;
use crate::data::model::{Mode, Record, Run, VOICE_COUNT};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Comparison grid (central panel)
// ---------------------------------------------------------------------------

/// Render the full comparison grid: one row per run, one column per mode.
pub fn calibration_grid(ui: &mut Ui, state: &AppState) {
    if state.runs.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No runs configured");
        });
        return;
    }

    let n_rows = state.runs.len();
    let n_cols = Mode::ALL.len();

    let spacing = ui.spacing().item_spacing;
    let cell_width = (ui.available_width() - spacing.x * n_cols as f32) / n_cols as f32;
    // One title line per row sits above each pair of plots.
    let title_height = 22.0;
    let cell_height = ((ui.available_height() - (spacing.y + title_height) * n_rows as f32)
        / n_rows as f32)
        .max(120.0);

    for (row, run) in state.runs.iter().enumerate() {
        ui.horizontal(|ui: &mut Ui| {
            for mode in Mode::ALL {
                ui.vertical(|ui: &mut Ui| {
                    ui.strong(format!("{} ({mode})", run.label));
                    mode_cell(ui, state, row, run, mode, cell_width, cell_height);
                });
            }
        });
    }
}

/// One subplot: requested vs. measured semitones for every visible voice of
/// a single (run, mode) pair. An empty selection is a valid empty series.
fn mode_cell(
    ui: &mut Ui,
    state: &AppState,
    row: usize,
    run: &Run,
    mode: Mode,
    width: f32,
    height: f32,
) {
    Plot::new(format!("cell_{row}_{mode}"))
        .width(width)
        .height(height)
        .x_axis_label("played semitones")
        .y_axis_label("measured semitones")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for voice in 0..VOICE_COUNT {
                if !state.voice_visible[voice as usize] {
                    continue;
                }

                let points: PlotPoints = series_points(&run.records, mode, voice).into();
                let series = Points::new(points)
                    .name(format!("voice {voice}"))
                    .color(state.palette.color_for(voice))
                    .shape(MarkerShape::Cross)
                    .radius(3.0);

                plot_ui.points(series);
            }
        });
}

/// Pair each selected record's requested and measured semitones into plot
/// coordinates, preserving record order.
pub fn series_points(records: &[Record], mode: Mode, voice: u8) -> Vec<[f64; 2]> {
    select(records, mode, voice)
        .map(|r| [r.test_semis, r.actual_semis])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(kind: &str, voice: u8, test_semis: f64, actual_semis: f64) -> Record {
        Record {
            kind: kind.to_string(),
            voice,
            test_semis,
            actual_semis,
        }
    }

    #[test]
    fn pairs_requested_with_measured_per_voice() {
        let records = vec![
            record("pitch.osc1", 0, 0.0, 0.05),
            record("pitch.osc1", 1, 12.0, 11.98),
            record("cutoff.filter", 0, 0.0, -0.1),
        ];

        assert_eq!(series_points(&records, Mode::Pitch, 0), vec![[0.0, 0.05]]);
        assert_eq!(series_points(&records, Mode::Pitch, 1), vec![[12.0, 11.98]]);
        assert_eq!(series_points(&records, Mode::Cutoff, 0), vec![[0.0, -0.1]]);
        assert!(series_points(&records, Mode::Cutoff, 1).is_empty());
    }

    #[test]
    fn empty_selection_is_an_empty_series_not_an_error() {
        assert!(series_points(&[], Mode::Pitch, 0).is_empty());

        let records = vec![record("pitch.osc1", 0, 1.0, 1.0)];
        assert!(series_points(&records, Mode::Pitch, 9).is_empty());
    }
}
