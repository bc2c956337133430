use predicates::str::contains;

mod common;
use common::{BROKEN_SCHEDULE, TWO_DAY_SCHEDULE, siyam, write_schedule};

#[test]
fn test_next_between_marks() {
    siyam()
        .args(["--at", "2025-03-01 05:30", "next"])
        .assert()
        .success()
        .stdout(contains("Next iftar in 00:33:00"));
}

#[test]
fn test_next_before_sehri() {
    siyam()
        .args(["--at", "2025-03-01 04:50", "next"])
        .assert()
        .success()
        .stdout(contains("Next sehri in 00:16:00"));
}

#[test]
fn test_next_one_second_after_iftar_rolls_to_next_day() {
    siyam()
        .args(["--at", "2025-03-01 06:03:01", "next"])
        .assert()
        .success()
        .stdout(contains("Next sehri in 23:01:59"));
}

#[test]
fn test_next_exactly_at_iftar_mark() {
    siyam()
        .args(["--at", "2025-03-01 06:03:00", "next"])
        .assert()
        .success()
        .stdout(contains("Next iftar in 00:00:00"));
}

#[test]
fn test_next_outside_window_warns_and_shows_day_one() {
    siyam()
        .args(["--at", "2026-01-15 12:00", "next"])
        .assert()
        .success()
        .stdout(contains("outside the schedule window"))
        .stdout(contains("রমজান ১"));
}

#[test]
fn test_next_with_custom_schedule_file() {
    let path = write_schedule("next_custom", TWO_DAY_SCHEDULE);

    siyam()
        .args(["--schedule", &path, "--at", "2025-03-02 05:30", "next"])
        .assert()
        .success()
        .stdout(contains("Next iftar in 00:34:00")); // day 2 iftar 06:04
}

#[test]
fn test_broken_schedule_fails_at_load() {
    let path = write_schedule("broken", BROKEN_SCHEDULE);

    siyam()
        .args(["--schedule", &path, "--at", "2025-03-01 05:30", "next"])
        .assert()
        .failure()
        .stderr(contains("invalid iftar mark"));
}

#[test]
fn test_missing_schedule_override_fails() {
    siyam()
        .args(["--schedule", "/no/such/file.yaml", "next"])
        .assert()
        .failure()
        .stderr(contains("❌"))
        .stderr(contains("schedule file not found"));
}

#[test]
fn test_calendar_lists_whole_month() {
    siyam()
        .args(["--at", "2025-03-10 12:00", "calendar"])
        .assert()
        .success()
        .stdout(contains("০১ মার্চ"))
        .stdout(contains("৩০ মার্চ"))
        .stdout(contains("১০ মার্চ"));
}

#[test]
fn test_calendar_marks_active_day() {
    siyam()
        .args(["--at", "2025-03-10 12:00", "calendar"])
        .assert()
        .success()
        .stdout(contains("▶"));
}

#[test]
fn test_calendar_single_day() {
    siyam()
        .args(["--at", "2025-03-01 05:30", "calendar", "--day", "10"])
        .assert()
        .success()
        .stdout(contains("১০ মার্চ"))
        .stdout(contains("০৪:৫৭"));
}

#[test]
fn test_calendar_unknown_day_fails() {
    siyam()
        .args(["calendar", "--day", "31"])
        .assert()
        .failure()
        .stderr(contains("not in schedule"));
}

#[test]
fn test_duas_prints_builtin_texts() {
    siyam()
        .arg("duas")
        .assert()
        .success()
        .stdout(contains("\u{1b}[1mরোজার নিয়ত"))
        .stdout(contains("ইফতারের দোয়া"));
}

#[test]
fn test_init_in_test_mode() {
    siyam()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("siyam is ready"));
}
