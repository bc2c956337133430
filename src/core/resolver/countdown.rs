use crate::models::resolved::{Countdown, EventLabel};
use crate::schedule::Schedule;
use chrono::NaiveDateTime;

/// Remaining time until the next mark of the active row.
///
/// Branch rule, evaluated in order at second granularity:
/// 1. strictly after iftar  -> sehri of the following row (wrapping to
///    row 0 after the last), anchored to the next calendar date;
/// 2. strictly before sehri -> sehri of the active row, same date;
/// 3. otherwise             -> iftar of the active row.
///
/// The boundaries use strict inequalities only: an instant exactly equal
/// to a mark falls into branch 3, so the rollover to the next sehri
/// happens one second after iftar, not at it. Each branch's target is at
/// or after `now`, so the remaining duration is never negative.
pub fn resolve_countdown(
    schedule: &Schedule,
    active_index: usize,
    now: NaiveDateTime,
) -> Countdown {
    let entry = schedule.entry(active_index);
    let date = now.date();
    let sehri_at = date.and_time(entry.sehri);
    let iftar_at = date.and_time(entry.iftar);

    let (label, target) = if now > iftar_at {
        let next = schedule.entry((active_index + 1) % schedule.len());
        let tomorrow = date.succ_opt().unwrap_or(date);
        (EventLabel::Sehri, tomorrow.and_time(next.sehri))
    } else if now < sehri_at {
        (EventLabel::Sehri, sehri_at)
    } else {
        (EventLabel::Iftar, iftar_at)
    };

    let secs = (target - now).num_seconds();
    let (hours, minutes, seconds) = crate::utils::time::split_hms(secs);

    Countdown {
        label,
        hours,
        minutes,
        seconds,
        target,
    }
}
