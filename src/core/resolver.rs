//! Time/event resolver: which schedule row is active for an instant, and
//! how long until the next sehri/iftar mark.
//!
//! Pure functions of `(schedule, now)` with no hidden globals: the caller
//! reads the clock (or a test override) and passes the instant in, so the
//! same logic is driven by the one-second watch loop and by tests alike.

use crate::models::resolved::ResolvedState;
use crate::schedule::Schedule;
use chrono::{NaiveDate, NaiveDateTime};

pub mod active;
pub mod countdown;

pub use active::resolve_active_index;
pub use countdown::resolve_countdown;

pub struct Resolver;

impl Resolver {
    /// Resolve the full derived state for one instant.
    pub fn resolve(
        schedule: &Schedule,
        epoch_start: NaiveDate,
        now: NaiveDateTime,
    ) -> ResolvedState {
        let offset = (now.date() - epoch_start).num_days();
        let in_window = offset >= 0 && (offset as usize) < schedule.len();

        let active = resolve_active_index(schedule, epoch_start, now);
        let countdown = resolve_countdown(schedule, active, now);

        ResolvedState {
            active,
            in_window,
            countdown,
        }
    }
}
