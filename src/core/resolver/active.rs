use crate::schedule::Schedule;
use chrono::{NaiveDate, NaiveDateTime};

/// Which schedule row is active for `now`, by whole-day offset from the
/// epoch anchor (the calendar date of row 0).
///
/// Out-of-range instants (before the epoch or past the last row) return 0.
/// That fallback means "no row is authoritatively active, default to the
/// first"; callers that need to tell the two cases apart should look at
/// `ResolvedState::in_window` instead of this value.
///
/// Total and deterministic: never panics, same input gives same output.
pub fn resolve_active_index(
    schedule: &Schedule,
    epoch_start: NaiveDate,
    now: NaiveDateTime,
) -> usize {
    let offset = (now.date() - epoch_start).num_days();

    if offset >= 0 && (offset as usize) < schedule.len() {
        offset as usize
    } else {
        0
    }
}
