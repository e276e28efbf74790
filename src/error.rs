//! Error types for the Claimcheck library.
//!
//! All fallible operations in the library return [`Result`], whose error
//! type is the [`ClaimcheckError`] enum. Recoverable conditions (a missing
//! corpus file, a malformed remote reply) are handled internally and never
//! reach callers as errors; what remains here are genuine failures such as
//! degenerate training data or invalid input.
//!
//! # Examples
//!
//! ```
//! use claimcheck::error::{ClaimcheckError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ClaimcheckError::invalid_input("claim must not be empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Claimcheck operations.
#[derive(Error, Debug)]
pub enum ClaimcheckError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus-related errors (missing files, schema mismatch)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Training-related errors (degenerate training data, dimension mismatch)
    #[error("Training error: {0}")]
    Training(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid caller-supplied input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Remote endpoint errors (unexpected reply shape, API failures)
    #[error("Remote error: {0}")]
    Remote(String),

    /// CSV parse errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP transport errors from the remote strategy
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ClaimcheckError.
pub type Result<T> = std::result::Result<T, ClaimcheckError>;

impl ClaimcheckError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        ClaimcheckError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        ClaimcheckError::Corpus(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        ClaimcheckError::Training(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ClaimcheckError::Config(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ClaimcheckError::InvalidInput(msg.into())
    }

    /// Create a new remote endpoint error.
    pub fn remote<S: Into<String>>(msg: S) -> Self {
        ClaimcheckError::Remote(msg.into())
    }
}
