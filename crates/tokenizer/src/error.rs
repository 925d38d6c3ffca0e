//! Tokenization Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a document into tokens or text
#[derive(Debug, Error)]
pub enum TokenizeError {
    /// Source cannot be used by the requesting consumer
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File could not be opened or read
    #[error("Cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File contents are not valid for the requested encoding
    #[error("{} is not valid {encoding}", path.display())]
    InvalidEncoding { path: PathBuf, encoding: String },
}

impl TokenizeError {
    /// Wrap an I/O failure for the given path
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TokenizeError::Unreadable {
            path: path.into(),
            source,
        }
    }
}
