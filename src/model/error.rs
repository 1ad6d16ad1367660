//! Error types for dropselect.
//!
//! This module defines the error taxonomy using `thiserror`. The select core
//! itself never returns errors: every failure inside the state machine
//! resolves to a well-defined, still-interactive widget state. Errors here
//! belong to the edges: the injected options loader and the host shell.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error for the demo binary
//!   - [`ItemsError`] - Reading the item list from a JSON file
//!   - [`crate::config::ConfigError`] - Configuration file failures
//!   - [`crate::logging::LoggingError`] - Tracing subscriber setup
//!   - `std::io::Error` - Terminal failures
//! - [`LoadError`] - Options loader rejection, surfaced to the host only as
//!   an `Error` notification
//!
//! # Recovery Strategy
//!
//! Loader failures are **non-fatal**: the controller clears raw items and the
//! loading flag, queues `SelectEvent::Error`, and the next filter change
//! retries. Shell errors are fatal and propagate to `main`.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for the demo binary.
///
/// Domain-specific errors convert via `From`, so `main` can use `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The item list could not be read.
    #[error("Failed to read items: {0}")]
    Items(#[from] ItemsError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors reading an item list from disk.
#[derive(Debug, Error)]
pub enum ItemsError {
    /// The file does not exist.
    #[error("Items file not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// The file is not a JSON array of strings or objects.
    #[error("Invalid items JSON in {path}: {message}")]
    InvalidJson {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message from `serde_json`.
        message: String,
    },

    /// Generic I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rejection from an options loader.
///
/// The `Display` text is what reaches the host as `ErrorEvent::details`, so
/// `Failed` renders its message verbatim.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The loader failed with a message.
    ///
    /// # Examples
    ///
    /// ```
    /// use dropselect::model::LoadError;
    ///
    /// let err = LoadError::Failed("error 123".to_string());
    /// assert_eq!(err.to_string(), "error 123");
    /// ```
    #[error("{0}")]
    Failed(String),

    /// The loader's backing store could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The loader's response could not be decoded.
    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoadError {
    /// Convenience constructor for message-only failures.
    pub fn failed(message: impl Into<String>) -> Self {
        LoadError::Failed(message.into())
    }
}
