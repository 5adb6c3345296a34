/// Data layer: core types, loading, and selection.
///
/// Architecture:
/// ```text
///  calibration log (.csv)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Run (ordered Vec<Record>)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  (Mode, voice) predicate → ordered selection
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
