//! Error types for daylog core operations.
//!
//! This module defines the error taxonomy shared by all core operations.
//! Errors are descriptive at the core level; the CLI layer maps these to
//! user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for daylog operations.
pub type Result<T> = std::result::Result<T, DaylogError>;

/// Core error type for daylog operations.
///
/// Record store operations return `IoRead`, `IoWrite`, `NotFound`, or
/// `Structure`. The config kinds belong to the configuration collaborator
/// outside the core but share this taxonomy. `InvalidId` is codec-level
/// only; store operations receive an already-validated [`EntryId`].
///
/// [`EntryId`]: crate::id::EntryId
#[derive(Debug, Error)]
pub enum DaylogError {
    /// Log file could not be opened or read
    #[error("Unable to read from log file: {0}")]
    IoRead(String),

    /// Log file could not be written or replaced
    #[error("Unable to write to log file: {0}")]
    IoWrite(String),

    /// Target entry ID absent from the log
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// A required marker is missing or out of order
    #[error("Structure fault in log file: {0}")]
    Structure(String),

    /// Config file could not be read
    #[error("Unable to read from config file: {0}")]
    ConfigRead(String),

    /// Config file could not be written
    #[error("Unable to write to config file: {0}")]
    ConfigWrite(String),

    /// Malformed entry identifier
    #[error("Invalid entry ID: {0}")]
    InvalidId(String),
}

impl DaylogError {
    /// Wrap an I/O failure from the read side of the log.
    pub fn io_read(err: std::io::Error) -> Self {
        DaylogError::IoRead(err.to_string())
    }

    /// Wrap an I/O failure from the write side of the log.
    pub fn io_write(err: std::io::Error) -> Self {
        DaylogError::IoWrite(err.to_string())
    }
}
