pub mod chat;
pub mod day_entry;
pub mod dua;
pub mod resolved;
