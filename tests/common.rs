#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn siyam() -> Command {
    let mut cmd = cargo_bin_cmd!("siyam");
    // keep assistant-backed commands offline and deterministic
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

/// Write a schedule YAML file inside the system temp dir and return its path
pub fn write_schedule(name: &str, yaml: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_siyam_schedule.yaml", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, yaml).expect("write schedule fixture");
    p
}

/// Two-row schedule with Bengali-numeral marks, matching the builtin
/// fixture's first rows
pub const TWO_DAY_SCHEDULE: &str = r#"
- day: 1
  date: "০১ মার্চ"
  weekday: "শনিবার"
  sehri: "০৫:০৬"
  iftar: "০৬:০৩"
  hijri: "১ রমজান, ১৪৪৬"
- day: 2
  date: "০২ মার্চ"
  weekday: "রবিবার"
  sehri: "০৫:০৫"
  iftar: "০৬:০৪"
  hijri: "২ রমজান, ১৪৪৬"
"#;

pub const BROKEN_SCHEDULE: &str = r#"
- day: 1
  date: "০১ মার্চ"
  weekday: "শনিবার"
  sehri: "০৫:০৬"
  iftar: "sunset"
  hijri: "১ রমজান, ১৪৪৬"
"#;
