//! Shared error types for the engine and its adapters

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for dvtriage operations.
///
/// Scoring and matching are total functions and never produce one of these;
/// errors come from loading inputs, reading configuration, or dispatching an
/// analysis request that the case cannot satisfy.
#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be read or decoded into case records
    #[error("Input error in {path}: {message}")]
    Input { path: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Analysis request cannot be served for this case
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Requested case id is not present in the supplied collection
    #[error("Case not found: {0}")]
    CaseNotFound(u64),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an input error with path context
    pub fn input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Input {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_mentions_path() {
        let err = Error::input("cases.json", "expected an array");
        assert_eq!(err.to_string(), "Input error in cases.json: expected an array");
    }

    #[test]
    fn test_context_wraps_message() {
        let result: Result<()> = Err(Error::CaseNotFound(42));
        let err = result.context("loading target case").unwrap_err();
        assert_eq!(err.to_string(), "loading target case: Case not found: 42");
    }
}
