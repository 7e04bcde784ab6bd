//! # Error Handling
//!
//! This module defines the centralized error type for `cromwell-hpc`. It uses
//! the `thiserror` library to create an `Error` enum that covers every way
//! configuration generation can fail, with messages aimed at the person who
//! launched the run.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. Each variant corresponds to one failure mode
//!   and carries the context needed to fix the input that caused it.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Every error is raised before the output file is touched, so a failed
//! generation never leaves a partially written configuration behind.
//!
//! Malformed resource override tokens are deliberately absent from this
//! taxonomy: the scheduler translator skips them instead of failing.

use thiserror::Error;

/// Main error type for configuration generation
#[derive(Error, Debug)]
pub enum Error {
    /// The requested scheduler is not one of the supported backends.
    #[error("Scheduler not yet supported by Cromwell: {scheduler}")]
    UnsupportedScheduler { scheduler: String },

    /// The scheduler needs a queue (`-q`) but none was supplied.
    #[error("Need to set queue (-q) for running with the {scheduler} scheduler")]
    MissingQueue { scheduler: String },

    /// The custom Cromwell configuration document could not be read or parsed.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A configuration fragment referenced a placeholder with no bound value.
    #[error("Template processing error: {message}{}", variable.as_ref().map(|v| format!(" (variable: {})", v)).unwrap_or_default())]
    Template {
        message: String,
        /// The placeholder that could not be resolved, if applicable
        variable: Option<String>,
    },

    /// The sample manifest was readable but not usable.
    #[error("Sample manifest error for {path}: {message}")]
    Manifest { path: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
