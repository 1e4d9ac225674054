//! Error types for sitebot.
//!
//! Every fallible library operation returns [`Result`], whose error side is
//! the [`SitebotError`] enum. Component-level degradations (a page that
//! cannot be fetched, an absent corpus) are not errors and never show up
//! here; only genuinely unexpected conditions do.
//!
//! # Examples
//!
//! ```
//! use sitebot::error::{Result, SitebotError};
//!
//! fn load() -> Result<()> {
//!     Err(SitebotError::snapshot("bad header"))
//! }
//!
//! assert_eq!(load().unwrap_err().to_string(), "Snapshot error: bad header");
//! ```

use std::io;

use thiserror::Error;

/// The main error type for sitebot operations.
#[derive(Error, Debug)]
pub enum SitebotError {
    /// I/O errors (snapshot files, training data files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Text analysis errors (tokenizer construction and the like).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Corpus errors: empty training input, inconsistent pattern/response tables.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Persisted snapshot errors: bad magic, version, checksum.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Page fetching errors. Fetchers absorb these before they reach callers.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Binary serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SitebotError.
pub type Result<T> = std::result::Result<T, SitebotError>;

impl SitebotError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SitebotError::Analysis(msg.into())
    }

    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        SitebotError::Corpus(msg.into())
    }

    /// Create a new snapshot error.
    pub fn snapshot<S: Into<String>>(msg: S) -> Self {
        SitebotError::Snapshot(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SitebotError::Config(msg.into())
    }

    /// Create a new fetch error.
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        SitebotError::Fetch(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        SitebotError::Serialization(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SitebotError::Other(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        SitebotError::Other(format!("Internal error: {}", msg.into()))
    }
}

impl From<bincode::Error> for SitebotError {
    fn from(err: bincode::Error) -> Self {
        SitebotError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SitebotError::corpus("no patterns");
        assert_eq!(error.to_string(), "Corpus error: no patterns");

        let error = SitebotError::config("timeout must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: timeout must be positive"
        );

        let error = SitebotError::internal("boom");
        assert_eq!(error.to_string(), "Error: Internal error: boom");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SitebotError::from(io_error);

        match error {
            SitebotError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
