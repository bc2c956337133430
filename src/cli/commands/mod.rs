pub mod ask;
pub mod calendar;
pub mod chat;
pub mod config;
pub mod duas;
pub mod init;
pub mod next;
pub mod quote;
pub mod tasbih;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::schedule::{self, Schedule};
use crate::utils::date;
use chrono::NaiveDateTime;
use std::path::Path;

/// The instant commands resolve against: the hidden `--at` override when
/// present, otherwise the local wall clock truncated to whole seconds.
pub fn resolve_now(cli: &Cli) -> AppResult<NaiveDateTime> {
    match &cli.at {
        Some(s) => date::parse_instant(s).ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::now()),
    }
}

/// Load the schedule once per run. An explicit `--schedule` must exist;
/// the configured path falls back to the builtin fixture when the file is
/// not there (e.g. before `init` has run).
pub fn load_schedule(cli: &Cli, cfg: &Config) -> AppResult<Schedule> {
    if let Some(p) = &cli.schedule {
        let path = Path::new(p);
        if !path.exists() {
            return Err(AppError::Schedule(format!("schedule file not found: {}", p)));
        }
        return Schedule::load(path);
    }
    schedule::load_or_builtin(Some(Path::new(&cfg.schedule)))
}
