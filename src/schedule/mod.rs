//! Schedule loading and one-time validation.
//!
//! The schedule is immutable reference data: it is loaded and validated
//! exactly once at startup and never re-checked per tick. A mark that does
//! not parse as HH:MM (after digit normalization) is a fatal configuration
//! error, not a per-query failure.

use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::utils::digits::to_ascii_digits;
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod builtin;

/// One row as it appears in the YAML schedule file. Clock marks are
/// strings here and may use Bengali numerals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDay {
    pub day: u32,
    pub date: String,
    pub weekday: String,
    pub sehri: String,
    pub iftar: String,
    pub hijri: String,
}

/// Non-empty, ordered, immutable sequence of day entries.
#[derive(Debug, Clone)]
pub struct Schedule {
    entries: Vec<DayEntry>,
}

impl Schedule {
    /// Validate raw rows into a schedule. Indices are assigned by position,
    /// so they are contiguous from 0 by construction.
    pub fn from_raw(rows: &[RawDay]) -> AppResult<Self> {
        if rows.is_empty() {
            return Err(AppError::Schedule("schedule has no rows".to_string()));
        }

        let mut entries = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let sehri = parse_mark(&row.sehri, row.day, "sehri")?;
            let iftar = parse_mark(&row.iftar, row.day, "iftar")?;

            entries.push(DayEntry {
                index,
                day: row.day,
                sehri,
                iftar,
                date_label: row.date.clone(),
                weekday_label: row.weekday.clone(),
                hijri_label: row.hijri.clone(),
                sehri_label: row.sehri.clone(),
                iftar_label: row.iftar.clone(),
            });
        }

        Ok(Self { entries })
    }

    /// Load and validate a YAML schedule file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let rows: Vec<RawDay> = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Schedule(format!("{}: {}", path.display(), e)))?;
        Self::from_raw(&rows)
    }

    /// The builtin Dhaka fixture (Ramadan 2025), validated through the same
    /// path as user-provided files.
    pub fn builtin() -> Self {
        Self::from_raw(&builtin::rows()).expect("builtin schedule is valid")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        // a constructed schedule is never empty; kept for clippy symmetry
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DayEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> &DayEntry {
        &self.entries[index]
    }
}

fn parse_mark(raw: &str, day: u32, field: &str) -> AppResult<chrono::NaiveTime> {
    let ascii = to_ascii_digits(raw.trim());
    parse_time(&ascii).ok_or_else(|| {
        AppError::Schedule(format!(
            "day {}: invalid {} mark '{}' (expected HH:MM)",
            day, field, raw
        ))
    })
}

/// Resolve the schedule for a run: an explicit path (CLI override or
/// config) wins when the file exists; otherwise fall back to the builtin
/// fixture.
pub fn load_or_builtin(path: Option<&Path>) -> AppResult<Schedule> {
    match path {
        Some(p) if p.exists() => Schedule::load(p),
        _ => Ok(Schedule::builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn raw(day: u32, sehri: &str, iftar: &str) -> RawDay {
        RawDay {
            day,
            date: format!("{:02} March", day),
            weekday: "Saturday".to_string(),
            sehri: sehri.to_string(),
            iftar: iftar.to_string(),
            hijri: format!("{} Ramadan, 1446", day),
        }
    }

    #[test]
    fn builtin_has_thirty_contiguous_rows() {
        let s = Schedule::builtin();
        assert_eq!(s.len(), 30);
        for (i, e) in s.entries().iter().enumerate() {
            assert_eq!(e.index, i);
            assert_eq!(e.day, i as u32 + 1);
        }
    }

    #[test]
    fn builtin_marks_are_normalized() {
        let s = Schedule::builtin();
        assert_eq!(s.entry(0).sehri, NaiveTime::from_hms_opt(5, 6, 0).unwrap());
        assert_eq!(s.entry(0).iftar, NaiveTime::from_hms_opt(6, 3, 0).unwrap());
        assert_eq!(
            s.entry(29).iftar,
            NaiveTime::from_hms_opt(6, 18, 0).unwrap()
        );
    }

    #[test]
    fn bengali_marks_parse() {
        let s = Schedule::from_raw(&[raw(1, "০৫:০৬", "০৬:০৩")]).unwrap();
        assert_eq!(s.entry(0).sehri, NaiveTime::from_hms_opt(5, 6, 0).unwrap());
        // the raw string stays available for display
        assert_eq!(s.entry(0).sehri_label, "০৫:০৬");
    }

    #[test]
    fn malformed_mark_is_fatal_at_load() {
        let err = Schedule::from_raw(&[raw(1, "05:06", "sunset")]).unwrap_err();
        assert!(err.to_string().contains("invalid iftar mark"));
    }

    #[test]
    fn empty_schedule_is_rejected() {
        assert!(Schedule::from_raw(&[]).is_err());
    }
}
