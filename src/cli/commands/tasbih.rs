use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::digits::to_bengali_digits;
use std::io::{self, BufRead};

/// Digital tasbih: a manual tally counter over stdin. Count lives only in
/// memory and resets when the program exits.
pub fn handle(cli: &Cli, _cfg: &Config) -> AppResult<()> {
    if let Commands::Tasbih { target } = &cli.command {
        messages::banner("ডিজিটাল তসবিহ");
        println!("Enter = count, r = reset, q = quit\n");

        let mut count: u32 = 0;
        let stdin = io::stdin();

        for line in stdin.lock().lines() {
            let line = line?;
            match line.trim() {
                "" => {
                    count += 1;
                    println!("মোট জিকির: {}", display_count(count));
                    if count == *target {
                        messages::success(format!(
                            "{} complete!",
                            to_bengali_digits(&target.to_string())
                        ));
                    }
                }
                "r" | "R" => {
                    count = 0;
                    println!("মোট জিকির: {}", display_count(count));
                }
                "q" | "Q" => break,
                _ => println!("(Enter = count, r = reset, q = quit)"),
            }
        }

        println!("\nFinal count: {}", display_count(count));
    }
    Ok(())
}

fn display_count(count: u32) -> String {
    to_bengali_digits(&format!("{:03}", count))
}
