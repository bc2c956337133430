use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::dua;
use crate::ui::messages;
use crate::utils::formatting::{bold, italic};

const WRAP_WIDTH: usize = 72;

pub fn handle(_cli: &Cli, _cfg: &Config) -> AppResult<()> {
    messages::banner("জরুরি দোয়া ও আমল");

    for d in dua::builtin() {
        println!("\n── {} ──\n", bold(d.title));
        println!("{}\n", d.arabic);
        println!("উচ্চারণ:\n{}\n", textwrap::fill(d.transliteration, WRAP_WIDTH));
        println!("বাংলা অর্থ:\n{}", italic(&textwrap::fill(d.translation, WRAP_WIDTH)));
    }
    Ok(())
}
