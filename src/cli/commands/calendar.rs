use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::resolver::resolve_active_index;
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::ui::messages;
use crate::utils::colors::highlight_active;
use crate::utils::digits::to_bengali_digits;
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { day } = &cli.command {
        let schedule = super::load_schedule(cli, cfg)?;
        let now = super::resolve_now(cli)?;
        let active = resolve_active_index(&schedule, cfg.epoch()?, now);

        match day {
            Some(d) => {
                let entry = schedule
                    .entries()
                    .iter()
                    .find(|e| e.day == *d)
                    .ok_or_else(|| {
                        AppError::Schedule(format!(
                            "day {} not in schedule (1..={})",
                            d,
                            schedule.len()
                        ))
                    })?;
                print_day_card(entry, entry.index == active);
            }
            None => {
                messages::banner(format!("রমজান ক্যালেন্ডার — {}", cfg.city));
                print_month(schedule.entries(), active);
            }
        }
    }
    Ok(())
}

fn print_month(entries: &[DayEntry], active: usize) {
    let mut table = Table::new(vec![
        Column {
            header: "".into(),
            width: 2,
        },
        Column {
            header: "DAY".into(),
            width: 4,
        },
        Column {
            header: "DATE".into(),
            width: 10,
        },
        Column {
            header: "WEEKDAY".into(),
            width: 14,
        },
        Column {
            header: "SEHRI".into(),
            width: 7,
        },
        Column {
            header: "IFTAR".into(),
            width: 7,
        },
        Column {
            header: "HIJRI".into(),
            width: 18,
        },
    ]);

    for e in entries {
        let marker = if e.index == active { "▶" } else { "" };
        table.add_row(vec![
            marker.to_string(),
            to_bengali_digits(&e.day.to_string()),
            e.date_label.clone(),
            e.weekday_label.clone(),
            e.sehri_label.clone(),
            e.iftar_label.clone(),
            e.hijri_label.clone(),
        ]);
    }

    print!("{}", table.render());
}

fn print_day_card(entry: &DayEntry, is_active: bool) {
    messages::banner(format!(
        "রমজান {} — {} ({})",
        to_bengali_digits(&entry.day.to_string()),
        entry.date_label,
        entry.weekday_label
    ));
    println!("  {}", entry.hijri_label);
    println!("  সেহরি শেষ:  {} ({})", entry.sehri_label, entry.sehri_str());
    println!("  ইফতার শুরু: {} ({})", entry.iftar_label, entry.iftar_str());
    if is_active {
        println!("  {}", highlight_active("আজকের রোজা (today)"));
    }
}
