//! Error types for the Tanager library.
//!
//! All fallible operations in the library return [`TanagerError`] through the
//! crate-wide [`Result`] alias. Construction-time invariant violations
//! (invalid fold counts, inverted length ranges, mismatched array lengths)
//! fail fast with a descriptive [`TanagerError::InvalidArgument`] instead of
//! being silently coerced.
//!
//! # Examples
//!
//! ```
//! use tanager::error::{Result, TanagerError};
//!
//! fn check(n_folds: usize) -> Result<()> {
//!     if n_folds < 2 {
//!         return Err(TanagerError::invalid_argument("n_folds must be at least 2"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(1).is_err());
//! assert!(check(5).is_ok());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Tanager operations.
#[derive(Error, Debug)]
pub enum TanagerError {
    /// I/O errors (reading sample files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An argument violated a documented invariant.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was called in a state that does not allow it.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Model-related errors (language models, classifiers).
    #[error("Model error: {0}")]
    Model(String),

    /// Evaluation-related errors (metrics, cross-validation).
    #[error("Evaluation error: {0}")]
    Eval(String),

    /// Sample stream errors (malformed records, exhausted streams).
    #[error("Stream error: {0}")]
    Stream(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with [`TanagerError`].
pub type Result<T> = std::result::Result<T, TanagerError>;

impl TanagerError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TanagerError::InvalidArgument(msg.into())
    }

    /// Create a new invalid operation error.
    pub fn invalid_operation<S: Into<String>>(msg: S) -> Self {
        TanagerError::InvalidOperation(msg.into())
    }

    /// Create a new model error.
    pub fn model<S: Into<String>>(msg: S) -> Self {
        TanagerError::Model(msg.into())
    }

    /// Create a new evaluation error.
    pub fn eval<S: Into<String>>(msg: S) -> Self {
        TanagerError::Eval(msg.into())
    }

    /// Create a new stream error.
    pub fn stream<S: Into<String>>(msg: S) -> Self {
        TanagerError::Stream(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TanagerError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TanagerError::invalid_argument("n must be at least 1");
        assert_eq!(error.to_string(), "Invalid argument: n must be at least 1");

        let error = TanagerError::model("model has no trained parameters");
        assert_eq!(error.to_string(), "Model error: model has no trained parameters");

        let error = TanagerError::eval("no folds remaining");
        assert_eq!(error.to_string(), "Evaluation error: no folds remaining");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TanagerError::from(io_error);

        match error {
            TanagerError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
