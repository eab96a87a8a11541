//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

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
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid date-time format: {0}")]
    InvalidDateTime(String),

    #[error("Malformed time value (expected zero-padded 24h HH:MM): {0}")]
    MalformedTime(String),

    #[error("Invalid day of the week: {0}")]
    UnknownDay(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No subscription found matching '{0}'")]
    UnknownSubscription(String),

    #[error("Subscription already exists: {0}")]
    SubscriptionExists(String),

    #[error("Window error: {0}")]
    Window(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
