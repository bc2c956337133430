//! Offline behaviour of the assistant-backed commands: with no API key in
//! the environment, every surface must print its fallback string instead
//! of failing.

use predicates::str::contains;

mod common;
use common::siyam;

#[test]
fn test_quote_without_api_key_prints_default_quote() {
    siyam()
        .arg("quote")
        .assert()
        .success()
        .stdout(contains("রমজান মোবারক! আপনার ইবাদত কবুল হোক।"));
}

#[test]
fn test_ask_without_api_key_prints_connection_fallback() {
    siyam()
        .args(["ask", "রোজার", "ফজিলত", "কী?"])
        .assert()
        .success()
        .stdout(contains("দুঃখিত, এআই সংযোগে সমস্যা হয়েছে"));
}

#[test]
fn test_chat_session_exits_cleanly() {
    siyam()
        .arg("chat")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(contains("রমজান এআই গাইড"))
        .stdout(contains("Session ended (0 messages)"));
}

#[test]
fn test_chat_records_transcript_even_on_fallback() {
    siyam()
        .arg("chat")
        .write_stdin("রোজা কী?\nexit\n")
        .assert()
        .success()
        .stdout(contains("দুঃখিত, এআই সংযোগে সমস্যা হয়েছে"))
        .stdout(contains("Session ended (2 messages)"));
}
