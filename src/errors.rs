//! Unified application error type.
//! Snapshot loader, config, session store and export all return AppError so the CLI
//! can report every failure the same way. The view logic in `core` never fails.

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
    // Snapshot / serialization
    // ---------------------------
    #[error("Invalid snapshot data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Snapshot file not found: {0}")]
    SnapshotMissing(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid age bracket: {0} (expected one of 0, 2, 4, 6, 8, 10)")]
    InvalidAge(u8),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No such user: {0}")]
    UnknownUser(i64),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
