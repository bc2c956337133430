use crate::assistant::{Assistant, GeminiAssistant};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::chat::ChatMessage;
use crate::ui::messages;
use std::io::{self, BufRead, Write};

const WRAP_WIDTH: usize = 72;

/// Interactive chat session. The transcript is an in-memory append-only
/// list that lives only for this session; nothing is persisted.
pub fn handle(_cli: &Cli, cfg: &Config) -> AppResult<()> {
    let assistant = GeminiAssistant::from_config(cfg)?;
    let mut transcript: Vec<ChatMessage> = Vec::new();

    messages::banner("রমজান এআই গাইড");
    println!("আসসালামু আলাইকুম! রোজা, আমল, দোয়া বা স্বাস্থ্য নিয়ে প্রশ্ন করুন।");
    println!("(type 'exit' to quit)\n");

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            break;
        }

        transcript.push(ChatMessage::user(input));
        let reply = assistant.complete(input);
        println!("{}\n", textwrap::fill(reply.trim(), WRAP_WIDTH));
        transcript.push(ChatMessage::model(reply));
    }

    println!("\nSession ended ({} messages).", transcript.len());
    Ok(())
}
