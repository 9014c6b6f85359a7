//! Unified application error type.
//! Parser, renderer, exporters and the database layer all return AppError
//! so the CLI can report every failure the same way.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Input
    // ---------------------------
    #[error("Cannot read log file: {0}")]
    FileAccess(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Log parsing
    // ---------------------------
    #[error("Malformed log header: {0}")]
    MalformedHeader(String),

    #[error("Missing session metadata: {0}")]
    MissingMetadata(String),

    #[error("Invalid clock reading: {0}")]
    InvalidClockReading(String),

    // ---------------------------
    // Presentation
    // ---------------------------
    #[error("Unknown weapon code: {0}")]
    UnknownWeaponCode(String),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Match could not be stored, nothing was written: {0}")]
    PersistenceConflict(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
