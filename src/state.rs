use crate::color::VoicePalette;
use crate::data::model::{Run, VOICE_COUNT};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. Runs are loaded before the
/// window opens and never change afterwards; only voice visibility is
/// interactive.
pub struct AppState {
    /// All configured runs, fully loaded, in configuration order.
    pub runs: Vec<Run>,

    /// Which voice series are drawn; index = voice.
    pub voice_visible: [bool; VOICE_COUNT as usize],

    /// Fixed per-voice colours shared by plots and legend.
    pub palette: VoicePalette,
}

impl AppState {
    pub fn new(runs: Vec<Run>) -> Self {
        Self {
            runs,
            voice_visible: [true; VOICE_COUNT as usize],
            palette: VoicePalette::default(),
        }
    }

    /// Total record count across all runs, for the status bar.
    pub fn total_records(&self) -> usize {
        self.runs.iter().map(|r| r.len()).sum()
    }

    /// Toggle a single voice series on or off.
    pub fn toggle_voice(&mut self, voice: u8) {
        if let Some(v) = self.voice_visible.get_mut(voice as usize) {
            *v = !*v;
        }
    }

    /// Show every voice series.
    pub fn show_all_voices(&mut self) {
        self.voice_visible = [true; VOICE_COUNT as usize];
    }

    /// Hide every voice series.
    pub fn hide_all_voices(&mut self) {
        self.voice_visible = [false; VOICE_COUNT as usize];
    }
}
