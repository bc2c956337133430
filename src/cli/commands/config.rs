use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::env;
use std::fs;
use std::process::Command as ProcessCommand;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = &cli.command
    {
        if *print_config {
            print_current(cfg)?;
        }

        if *check {
            run_check(cli, cfg)?;
        }

        if *edit_config {
            edit(editor.as_deref())?;
        }
    }
    Ok(())
}

fn print_current(cfg: &Config) -> AppResult<()> {
    let path = Config::config_file();
    if path.exists() {
        let content = fs::read_to_string(&path)?;
        println!("{}", content);
    } else {
        // no file yet: show the effective defaults
        let yaml =
            serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("# (defaults, no config file at {:?})\n{}", path, yaml);
    }
    Ok(())
}

fn run_check(cli: &Cli, cfg: &Config) -> AppResult<()> {
    cfg.check()?;
    // schedule validation is part of the check: a malformed mark must
    // surface here, at load time, not during countdown ticks
    let schedule = super::load_schedule(cli, cfg)?;
    messages::success(format!(
        "Configuration OK — schedule covers {} days from {}",
        schedule.len(),
        cfg.epoch_start
    ));
    Ok(())
}

fn edit(editor: Option<&str>) -> AppResult<()> {
    let path = Config::config_file();
    if !path.exists() {
        return Err(AppError::Config(
            "no configuration file found, run `siyam init` first".to_string(),
        ));
    }

    let editor = editor
        .map(str::to_string)
        .or_else(|| env::var("EDITOR").ok())
        .unwrap_or_else(|| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let status = ProcessCommand::new(&editor).arg(&path).status()?;
    if !status.success() {
        return Err(AppError::Config(format!("editor '{}' exited with error", editor)));
    }
    Ok(())
}
