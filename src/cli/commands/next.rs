use crate::assistant::{Assistant, FALLBACK_QUOTE, GeminiAssistant, QUOTE_PROMPT};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::resolver::Resolver;
use crate::errors::AppResult;
use crate::models::resolved::ResolvedState;
use crate::schedule::Schedule;
use crate::ui::messages;
use crate::utils::colors::{RESET, color_for_mark};
use crate::utils::date;
use crate::utils::digits::to_bengali_digits;
use std::io::Write;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Next { watch } = &cli.command {
        let schedule = super::load_schedule(cli, cfg)?;
        let epoch = cfg.epoch()?;
        let now = super::resolve_now(cli)?;

        let state = Resolver::resolve(&schedule, epoch, now);
        print_state(&schedule, &state);

        // --watch only makes sense against the real clock
        if *watch && cli.at.is_none() {
            watch_loop(&schedule, cfg)?;
        }
    }
    Ok(())
}

fn print_state(schedule: &Schedule, state: &ResolvedState) {
    let entry = schedule.entry(state.active);

    if !state.in_window {
        messages::warning("Current date is outside the schedule window; showing day 1.");
    }

    messages::banner(format!(
        "রমজান {} — {} ({})",
        to_bengali_digits(&entry.day.to_string()),
        entry.date_label,
        entry.hijri_label
    ));

    let cd = &state.countdown;
    println!(
        "Next {} in {} ({} {})",
        cd.label.as_str(),
        cd.display(),
        cd.label.as_bengali(),
        cd.target.format("%H:%M")
    );
}

/// Re-resolve against the wall clock once per second. Each tick is an
/// independent pure computation over the immutable schedule; the quote
/// fetch runs on its own thread and its result is picked up whenever it
/// lands, so a network failure or timeout never delays a tick.
fn watch_loop(schedule: &Schedule, cfg: &Config) -> AppResult<()> {
    let epoch = cfg.epoch()?;

    let (tx, rx) = mpsc::channel::<String>();
    match GeminiAssistant::from_config(cfg) {
        Ok(assistant) => {
            thread::spawn(move || {
                // receiver may be gone if the loop ended; discard the result
                let _ = tx.send(assistant.complete(QUOTE_PROMPT));
            });
        }
        Err(_) => {
            let _ = tx.send(FALLBACK_QUOTE.to_string());
        }
    }

    let mut quote_shown = false;
    loop {
        if !quote_shown
            && let Ok(quote) = rx.try_recv()
        {
            println!("\n“{}”\n", quote.trim());
            quote_shown = true;
        }

        let state = Resolver::resolve(schedule, epoch, date::now());
        let cd = &state.countdown;
        print!(
            "\r⏳ {}{} {}{}  ({})   ",
            color_for_mark(cd.label.is_sehri()),
            cd.label.as_bengali(),
            cd.display(),
            RESET,
            cd.label.as_str()
        );
        let _ = std::io::stdout().flush();

        thread::sleep(Duration::from_secs(1));
    }
}
