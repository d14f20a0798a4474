//! Error types for Scout operations.
//!
//! This module defines [`ScoutError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ScoutError` for configuration-level errors that abort a command
//! - Expected operational failures (missing keys, missing packages,
//!   unreachable server processes) are never errors; they become report
//!   entries and reach the operator as rendered lines
//! - Use `anyhow::Error` (via `ScoutError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Scout operations.
#[derive(Debug, Error)]
pub enum ScoutError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A probe spec the orchestrator cannot evaluate. Fatal to the whole
    /// run: no partial report is produced.
    #[error("Invalid probe '{name}': {message}")]
    InvalidProbe { name: String, message: String },

    /// Server name not present in the built-in catalog.
    #[error("Unknown server: {name}")]
    UnknownServer { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Scout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;
