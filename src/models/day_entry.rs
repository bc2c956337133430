use chrono::NaiveTime;
use serde::Serialize;

/// One row of the fixed month schedule.
///
/// The two clock marks are parsed once at load time and kept as numeric
/// types; the raw source strings (possibly in Bengali numerals) are kept
/// verbatim for display only and never enter any computation.
#[derive(Debug, Clone, Serialize)]
pub struct DayEntry {
    pub index: usize,       // 0-based ordinal, contiguous, fixed at load
    pub day: u32,           // 1-based display ordinal ("Ramadan day N")
    pub sehri: NaiveTime,   // morning mark (end of sehri)
    pub iftar: NaiveTime,   // evening mark (start of iftar)
    pub date_label: String, // opaque display string, e.g. "০১ মার্চ"
    pub weekday_label: String,
    pub hijri_label: String,
    pub sehri_label: String, // raw source string for display
    pub iftar_label: String,
}

impl DayEntry {
    pub fn sehri_str(&self) -> String {
        self.sehri.format("%H:%M").to_string()
    }

    pub fn iftar_str(&self) -> String {
        self.iftar.format("%H:%M").to_string()
    }
}
