//! Digit-system normalization.
//!
//! Schedule data and display strings may use Bengali numerals (০–৯). All
//! conversion goes through the explicit mapping table below: ASCII is the
//! canonical internal representation, Bengali is produced only at the
//! display boundary. Nothing else in the crate knows about digit glyphs.

/// Bengali digits indexed by their numeric value.
const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];

/// Replace every Bengali digit in `s` with its ASCII equivalent.
/// Non-digit characters pass through untouched.
pub fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match BENGALI_DIGITS.iter().position(|&b| b == c) {
            Some(v) => char::from(b'0' + v as u8),
            None => c,
        })
        .collect()
}

/// Replace every ASCII digit in `s` with its Bengali equivalent.
pub fn to_bengali_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(v) => BENGALI_DIGITS[v as usize],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bengali_to_ascii() {
        assert_eq!(to_ascii_digits("০৫:০৬"), "05:06");
        assert_eq!(to_ascii_digits("১২৩৪৫৬৭৮৯০"), "1234567890");
    }

    #[test]
    fn ascii_to_bengali() {
        assert_eq!(to_bengali_digits("06:03"), "০৬:০৩");
    }

    #[test]
    fn mixed_and_non_digits_pass_through() {
        assert_eq!(to_ascii_digits("Day ৩০ (30)"), "Day 30 (30)");
        assert_eq!(to_ascii_digits("abc"), "abc");
    }

    #[test]
    fn round_trip() {
        assert_eq!(to_ascii_digits(&to_bengali_digits("00:33:00")), "00:33:00");
    }
}
