pub mod colors;
pub mod date;
pub mod digits;
pub mod formatting;
pub mod table;
pub mod time;

// Re-exports kept for the most commonly used helpers
pub use digits::{to_ascii_digits, to_bengali_digits};
pub use formatting::secs2hms;
