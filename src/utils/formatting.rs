//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// Render a non-negative number of seconds as a zero-padded HH:MM:SS string.
///
/// es: 1980 → "00:33:00"
pub fn secs2hms(total_secs: i64) -> String {
    let (h, m, s) = crate::utils::time::split_hms(total_secs);
    format!("{:02}:{:02}:{:02}", h, m, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded() {
        assert_eq!(secs2hms(0), "00:00:00");
        assert_eq!(secs2hms(1980), "00:33:00");
        assert_eq!(secs2hms(11 * 3600 + 2 * 60 + 59), "11:02:59");
    }
}
