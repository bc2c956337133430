use clap::{Parser, Subcommand};

/// Command-line interface definition for siyam
/// CLI companion for the Ramadan month
#[derive(Parser)]
#[command(
    name = "siyam",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ramadan companion CLI: sehri/iftar countdown, prayer-time calendar, duas, tasbih counter, and an AI assistant",
    long_about = None
)]
pub struct Cli {
    /// Override schedule file path (useful for tests or another city's times)
    #[arg(global = true, long = "schedule")]
    pub schedule: Option<String>,

    /// Override the current instant, "YYYY-MM-DD HH:MM[:SS]" (for tests)
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory and schedule file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration and schedule for errors")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show the full month schedule
    Calendar {
        /// Show a single day instead of the whole month (1-based)
        #[arg(long = "day")]
        day: Option<u32>,
    },

    /// Countdown to the next sehri or iftar mark
    Next {
        #[arg(long = "watch", help = "Keep ticking once per second")]
        watch: bool,
    },

    /// Print the builtin devotional texts
    Duas,

    /// Fetch a short inspirational line from the assistant
    Quote,

    /// Ask the assistant a single question
    Ask {
        /// The question to ask (remaining words are joined)
        #[arg(required = true)]
        prompt: Vec<String>,
    },

    /// Interactive chat session with the assistant
    Chat,

    /// Digital tasbih counter (Enter counts, 'r' resets, 'q' quits)
    Tasbih {
        #[arg(long = "target", default_value_t = 33, help = "Completion target")]
        target: u32,
    },
}
