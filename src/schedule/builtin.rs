//! Builtin schedule fixture: Dhaka, Bangladesh, Ramadan 2025 (1446 AH),
//! starting March 1st. Source strings use Bengali numerals on purpose so
//! the normal load path exercises digit normalization.

use super::RawDay;

// (date, weekday, sehri, iftar, hijri)
const ROWS: [(&str, &str, &str, &str, &str); 30] = [
    ("০১ মার্চ", "শনিবার", "০৫:০৬", "০৬:০৩", "১ রমজান, ১৪৪৬"),
    ("০২ মার্চ", "রবিবার", "০৫:০৫", "০৬:০৪", "২ রমজান, ১৪৪৬"),
    ("০৩ মার্চ", "সোমবার", "০৫:০৪", "০৬:০৪", "৩ রমজান, ১৪৪৬"),
    ("০৪ মার্চ", "মঙ্গলবার", "০৫:০৩", "০৬:০৫", "৪ রমজান, ১৪৪৬"),
    ("০৫ মার্চ", "বুধবার", "০৫:০২", "০৬:০৫", "৫ রমজান, ১৪৪৬"),
    ("০৬ মার্চ", "বৃহস্পতিবার", "০৫:০১", "০৬:০৬", "৬ রমজান, ১৪৪৬"),
    ("০৭ মার্চ", "শুক্রবার", "০৫:০০", "০৬:০৬", "৭ রমজান, ১৪৪৬"),
    ("০৮ মার্চ", "শনিবার", "০৪:৫৯", "০৬:০৭", "৮ রমজান, ১৪৪৬"),
    ("০৯ মার্চ", "রবিবার", "০৪:৫৮", "০৬:০৭", "৯ রমজান, ১৪৪৬"),
    ("১০ মার্চ", "সোমবার", "০৪:৫৭", "০৬:০৮", "১০ রমজান, ১৪৪৬"),
    ("১১ মার্চ", "মঙ্গলবার", "০৪:৫৬", "০৬:০৮", "১১ রমজান, ১৪৪৬"),
    ("১২ মার্চ", "বুধবার", "০৪:৫৫", "০৬:০৯", "১২ রমজান, ১৪৪৬"),
    ("১৩ মার্চ", "বৃহস্পতিবার", "০৪:৫৪", "০৬:০৯", "১৩ রমজান, ১৪৪৬"),
    ("১৪ মার্চ", "শুক্রবার", "০৪:৫৩", "০৬:১০", "১৪ রমজান, ১৪৪৬"),
    ("১৫ মার্চ", "শনিবার", "০৪:৫২", "০৬:১০", "১৫ রমজান, ১৪৪৬"),
    ("১৬ মার্চ", "রবিবার", "০৪:৫১", "০৬:১১", "১৬ রমজান, ১৪৪৬"),
    ("১৭ মার্চ", "সোমবার", "০৪:৫০", "০৬:১১", "১৭ রমজান, ১৪৪৬"),
    ("১৮ মার্চ", "মঙ্গলবার", "০৪:৪৮", "০৬:১২", "১৮ রমজান, ১৪৪৬"),
    ("১৯ মার্চ", "বুধবার", "০৪:৪৭", "০৬:১২", "১৯ রমজান, ১৪৪৬"),
    ("২০ মার্চ", "বৃহস্পতিবার", "০৪:৪৬", "০৬:১৩", "২০ রমজান, ১৪৪৬"),
    ("২১ মার্চ", "শুক্রবার", "০৪:৪৫", "০৬:১৩", "২১ রমজান, ১৪৪৬"),
    ("২২ মার্চ", "শনিবার", "০৪:৪৪", "০৬:১৪", "২২ রমজান, ১৪৪৬"),
    ("২৩ মার্চ", "রবিবার", "০৪:৪৩", "০৬:১৪", "২৩ রমজান, ১৪৪৬"),
    ("২৪ মার্চ", "সোমবার", "০৪:৪২", "০৬:১৫", "২৪ রমজান, ১৪৪৬"),
    ("২৫ মার্চ", "মঙ্গলবার", "০৪:৪১", "০৬:১৫", "২৫ রমজান, ১৪৪৬"),
    ("২৬ মার্চ", "বুধবার", "০৪:৪০", "০৬:১৬", "২৬ রমজান, ১৪৪৬"),
    ("২৭ মার্চ", "বৃহস্পতিবার", "০৪:৩৯", "০৬:১৬", "২৭ রমজান, ১৪৪৬"),
    ("২৮ মার্চ", "শুক্রবার", "০৪:৩৮", "০৬:১৭", "২৮ রমজান, ১৪৪৬"),
    ("২৯ মার্চ", "শনিবার", "০৪:৩৭", "০৬:১৭", "২৯ রমজান, ১৪৪৬"),
    ("৩০ মার্চ", "রবিবার", "০৪:৩৬", "০৬:১৮", "৩০ রমজান, ১৪৪৬"),
];

pub fn rows() -> Vec<RawDay> {
    ROWS.iter()
        .enumerate()
        .map(|(i, (date, weekday, sehri, iftar, hijri))| RawDay {
            day: i as u32 + 1,
            date: date.to_string(),
            weekday: weekday.to_string(),
            sehri: sehri.to_string(),
            iftar: iftar.to_string(),
            hijri: hijri.to_string(),
        })
        .collect()
}
