use std::fmt;
use std::path::PathBuf;

/// Number of independent sound-generation channels on the synthesizer
/// under test. Voice indices in the logs run 0..VOICE_COUNT.
pub const VOICE_COUNT: u8 = 8;

// ---------------------------------------------------------------------------
// Mode – which calibrated parameter is being inspected
// ---------------------------------------------------------------------------

/// The calibrated parameter a record belongs to.
///
/// The log's `type` column is a compound category such as `pitch.osc1` or
/// `cutoff.filter`; a record belongs to a mode when its stripped `type`
/// *starts with* the mode name. This is an anchored prefix test, not full
/// equality and not a substring search: `pitch.osc1` matches [`Mode::Pitch`],
/// `repitch` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Pitch,
    Cutoff,
}

impl Mode {
    /// The fixed set of modes, in grid column order.
    pub const ALL: [Mode; 2] = [Mode::Pitch, Mode::Cutoff];

    /// Lower-case name as it appears at the start of the `type` column.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Pitch => "pitch",
            Mode::Cutoff => "cutoff",
        }
    }

    /// Anchored-prefix test against a record's `type` field.
    ///
    /// The field is stripped before testing so the check holds for records
    /// that did not pass through this crate's loader (which already strips).
    pub fn matches(self, kind: &str) -> bool {
        kind.trim().starts_with(self.name())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Record – one measured calibration sample
// ---------------------------------------------------------------------------

/// One logged sample pairing a requested and a measured value for a given
/// voice and parameter type. Immutable once parsed; order within a run is
/// file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Category string from the `type` column, surrounding whitespace
    /// stripped (e.g. `pitch.osc1`).
    pub kind: String,
    /// Voice channel index, expected range 0..VOICE_COUNT.
    pub voice: u8,
    /// Requested offset in semitones.
    pub test_semis: f64,
    /// Measured offset in semitones.
    pub actual_semis: f64,
}

// ---------------------------------------------------------------------------
// Run – one calibration session's log
// ---------------------------------------------------------------------------

/// A configured data source: where to read a run from and how to title it.
/// Fixed at configuration time, read once, never mutated.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub path: PathBuf,
    pub label: String,
}

impl RunConfig {
    /// Build a config from a path, deriving the label from the file name.
    pub fn from_path(path: PathBuf) -> Self {
        let label = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        RunConfig { path, label }
    }
}

/// A fully loaded run: its display label and its records in file order.
#[derive(Debug, Clone)]
pub struct Run {
    pub label: String,
    pub records: Vec<Record>,
}

impl Run {
    /// Number of records in the run.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the run holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_match_is_an_anchored_prefix() {
        assert!(Mode::Pitch.matches("pitch"));
        assert!(Mode::Pitch.matches("pitch.osc1"));
        assert!(Mode::Cutoff.matches("cutoff.filter"));

        // Not a substring search: the prefix must sit at the start.
        assert!(!Mode::Pitch.matches("repitch"));
        assert!(!Mode::Pitch.matches("osc1.pitch"));
        assert!(!Mode::Cutoff.matches("pitch.osc1"));
    }

    #[test]
    fn mode_match_strips_surrounding_whitespace() {
        assert!(Mode::Pitch.matches("  pitch.osc1 "));
        assert!(!Mode::Pitch.matches("  repitch "));
    }

    #[test]
    fn run_label_derives_from_file_name() {
        let cfg = RunConfig::from_path(PathBuf::from("test/50_samples.csv"));
        assert_eq!(cfg.label, "50_samples.csv");
    }
}
