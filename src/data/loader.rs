use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;
use thiserror::Error;

use super::model::{Record, Run, RunConfig};

/// Columns every calibration log must name in its header row.
/// Additional columns are permitted and ignored.
pub const REQUIRED_COLUMNS: [&str; 4] = ["type", "voice", "test_semis", "actual_semis"];

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Fatal loading failures. Loading is all-or-nothing: a single malformed row
/// aborts the whole run rather than silently skipping it, so downstream plots
/// are never silently partial.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// `row` is the 1-based line number in the file (row 1 is the header).
    #[error("row {row}: {reason}")]
    MalformedRecord { row: u64, reason: String },
}

// ---------------------------------------------------------------------------
// Raw CSV row
// ---------------------------------------------------------------------------

/// One CSV row as serde sees it; extra columns are dropped by name-based
/// header matching.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    kind: String,
    voice: u8,
    test_semis: f64,
    actual_semis: f64,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load one configured run from disk. Records come back in file order.
pub fn load_run(config: &RunConfig) -> Result<Run, LoadError> {
    let file = File::open(&config.path).map_err(|source| LoadError::MissingFile {
        path: config.path.clone(),
        source,
    })?;

    let records = parse_records(file)?;
    Ok(Run {
        label: config.label.clone(),
        records,
    })
}

/// Load every configured run, in order, before any plotting begins.
/// The first failure aborts the whole batch.
pub fn load_runs(configs: &[RunConfig]) -> anyhow::Result<Vec<Run>> {
    let mut runs = Vec::with_capacity(configs.len());
    for config in configs {
        let run = load_run(config)
            .with_context(|| format!("loading run '{}'", config.label))?;
        log::info!("Loaded {} records from {}", run.len(), config.path.display());
        runs.push(run);
    }
    Ok(runs)
}

/// Parse calibration records from any reader. This is the core of the
/// loader; [`load_run`] adds the file handling on top.
pub fn parse_records<R: io::Read>(reader: R) -> Result<Vec<Record>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers().map_err(row_error)?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == col) {
            return Err(LoadError::MalformedRecord {
                row: 1,
                reason: format!("missing required column '{col}'"),
            });
        }
    }

    let mut records = Vec::new();
    for result in rdr.deserialize::<RawRecord>() {
        let raw = result.map_err(row_error)?;
        records.push(Record {
            kind: raw.kind.trim().to_string(),
            voice: raw.voice,
            test_semis: raw.test_semis,
            actual_semis: raw.actual_semis,
        });
    }
    Ok(records)
}

/// Map a csv error onto [`LoadError::MalformedRecord`], keeping the line
/// number the csv reader reports.
fn row_error(err: csv::Error) -> LoadError {
    let row = err.position().map(|p| p.line()).unwrap_or(0);
    LoadError::MalformedRecord {
        row,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Mode;

    const WELL_FORMED: &str = "\
type,voice,test_semis,actual_semis,elapsed_ms
pitch.osc1,0,0.0,0.05,12
 pitch.osc1 ,1,12.0,11.98,25
cutoff.filter,0,0.0,-0.1,40
";

    #[test]
    fn yields_one_record_per_row_in_file_order() {
        let records = parse_records(WELL_FORMED.as_bytes()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].kind, "pitch.osc1");
        assert_eq!(records[0].voice, 0);
        assert_eq!(records[1].test_semis, 12.0);
        assert_eq!(records[1].actual_semis, 11.98);
        assert_eq!(records[2].kind, "cutoff.filter");
    }

    #[test]
    fn strips_whitespace_around_type() {
        let records = parse_records(WELL_FORMED.as_bytes()).unwrap();
        assert_eq!(records[1].kind, "pitch.osc1");
        assert!(Mode::Pitch.matches(&records[1].kind));
    }

    #[test]
    fn loading_is_idempotent() {
        let a = parse_records(WELL_FORMED.as_bytes()).unwrap();
        let b = parse_records(WELL_FORMED.as_bytes()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let with_extras = "extra,type,voice,test_semis,actual_semis\nx,pitch.osc1,3,1.0,0.9\n";
        let records = parse_records(with_extras.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].voice, 3);
    }

    #[test]
    fn missing_required_column_is_malformed() {
        let no_voice = "type,test_semis,actual_semis\npitch.osc1,0.0,0.1\n";
        let err = parse_records(no_voice.as_bytes()).unwrap_err();
        match err {
            LoadError::MalformedRecord { row, reason } => {
                assert_eq!(row, 1);
                assert!(reason.contains("voice"), "reason was: {reason}");
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_numeric_field_is_malformed() {
        let bad = "type,voice,test_semis,actual_semis\npitch.osc1,0,not_a_number,0.1\n";
        let err = parse_records(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MalformedRecord { .. }));
    }

    #[test]
    fn malformed_row_aborts_the_whole_run() {
        // Two good rows around one bad row: nothing survives.
        let mixed = "\
type,voice,test_semis,actual_semis
pitch.osc1,0,0.0,0.05
pitch.osc1,oops,12.0,11.98
cutoff.filter,0,0.0,-0.1
";
        assert!(parse_records(mixed.as_bytes()).is_err());
    }

    #[test]
    fn nonexistent_path_is_missing_file() {
        let config = RunConfig::from_path(
            std::env::temp_dir().join("tuning_report_no_such_run.csv"),
        );
        let err = load_run(&config).unwrap_err();
        match &err {
            LoadError::MissingFile { path, .. } => {
                assert!(path.ends_with("tuning_report_no_such_run.csv"));
            }
            other => panic!("expected MissingFile, got {other:?}"),
        }
        assert!(err.to_string().contains("tuning_report_no_such_run.csv"));
    }

    #[test]
    fn load_run_reads_a_real_file() {
        let path = std::env::temp_dir().join(format!(
            "tuning_report_load_run_{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, WELL_FORMED).unwrap();

        let config = RunConfig::from_path(path.clone());
        let run = load_run(&config).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(run.len(), 3);
        assert_eq!(run.label, path.file_name().unwrap().to_string_lossy());
    }
}
