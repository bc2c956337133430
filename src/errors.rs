//! Unified application error type.
//! All modules (schedule, core, cli, assistant, utils) return AppError to
//! keep the error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Schedule errors (fatal at load time, never per tick)
    // ---------------------------
    #[error("Schedule error: {0}")]
    Schedule(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Assistant errors (client construction only; completions never fail)
    // ---------------------------
    #[error("Assistant error: {0}")]
    Assistant(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
