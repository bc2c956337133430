use crate::assistant::{Assistant, FALLBACK_ERROR, FALLBACK_QUOTE, GeminiAssistant, QUOTE_PROMPT};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(_cli: &Cli, cfg: &Config) -> AppResult<()> {
    let assistant = GeminiAssistant::from_config(cfg)?;
    let text = assistant.complete(QUOTE_PROMPT);

    // the quote surface stays inspirational even when the call failed
    let text = if text == FALLBACK_ERROR {
        FALLBACK_QUOTE.to_string()
    } else {
        text
    };

    println!("“{}”", text.trim());
    Ok(())
}
