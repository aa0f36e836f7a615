//! Error types for gdocs-markdown.
//!
//! Rendering itself never fails; only loading a document from JSON can.

use std::io;
use thiserror::Error;

/// Result type alias for gdocs-markdown operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading the document source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid Docs API JSON.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.to_string().starts_with("Invalid document JSON:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "I/O error: file not found");
    }
}
