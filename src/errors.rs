//! Unified application error type.
//! All modules (db, core, cli, storage) return AppError to keep the error
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

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Unknown record field: {0}")]
    UnknownField(String),

    // ---------------------------
    // Validation and capabilities
    // ---------------------------
    #[error("Validation: {0}")]
    Validation(String),

    #[error("Camera cancelled: no picture was taken")]
    CaptureCancelled,

    #[error("Camera error: {0}")]
    CaptureFailed(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Not logged in: run `tankerlog login <username> <password>` first")]
    NotLoggedIn,

    #[error("Not authorized: {0}")]
    Unauthorized(String),

    #[error("Shift not started: please start your shift first.")]
    ShiftNotStarted,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
