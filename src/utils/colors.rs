/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Sehri lines render warm (pre-dawn), iftar lines render green (sunset).
pub fn color_for_mark(is_sehri: bool) -> &'static str {
    if is_sehri { YELLOW } else { GREEN }
}

/// Highlight wrapper for the active calendar row.
pub fn highlight_active(value: &str) -> String {
    format!("{GREEN}\x1b[1m{value}{RESET}")
}
