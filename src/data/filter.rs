use super::model::{Mode, Record};

// ---------------------------------------------------------------------------
// Selection: mode + voice predicate over one run's records
// ---------------------------------------------------------------------------

/// Return the subsequence of `records` whose `type` matches `mode` and whose
/// voice equals `voice`, in input order.
///
/// A pure view: nothing is copied or cached, the input is not mutated, and
/// selections are recomputed on demand. No range validation is performed on
/// `voice` — an index outside the declared 0..VOICE_COUNT range simply
/// selects nothing.
pub fn select(records: &[Record], mode: Mode, voice: u8) -> impl Iterator<Item = &Record> {
    records
        .iter()
        .filter(move |r| r.voice == voice && mode.matches(&r.kind))
}
