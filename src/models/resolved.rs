use chrono::NaiveDateTime;
use serde::Serialize;

/// Which of the two daily marks is upcoming.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventLabel {
    Sehri,
    Iftar,
}

impl EventLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventLabel::Sehri => "sehri",
            EventLabel::Iftar => "iftar",
        }
    }

    /// Bengali display name, matching the schedule data language.
    pub fn as_bengali(&self) -> &'static str {
        match self {
            EventLabel::Sehri => "সেহরি",
            EventLabel::Iftar => "ইফতার",
        }
    }

    pub fn is_sehri(&self) -> bool {
        matches!(self, EventLabel::Sehri)
    }
}

/// Remaining time until the next mark, split into whole units.
/// Non-negative by construction of the resolver branch rule.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Countdown {
    pub label: EventLabel,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// Absolute instant of the targeted mark.
    pub target: NaiveDateTime,
}

impl Countdown {
    pub fn total_seconds(&self) -> i64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Zero-padded HH:MM:SS rendering of the remaining duration.
    pub fn display(&self) -> String {
        crate::utils::formatting::secs2hms(self.total_seconds())
    }
}

/// Full derived state for one instant: recomputed on every query,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedState {
    pub active: usize,
    /// False when `now` fell outside the covered window and the active
    /// index is only the documented fallback of 0.
    pub in_window: bool,
    pub countdown: Countdown,
}
