use crate::assistant::{Assistant, GeminiAssistant};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

const WRAP_WIDTH: usize = 72;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Ask { prompt } = &cli.command {
        let question = prompt.join(" ");
        let assistant = GeminiAssistant::from_config(cfg)?;
        let answer = assistant.complete(&question);
        println!("{}", textwrap::fill(answer.trim(), WRAP_WIDTH));
    }
    Ok(())
}
