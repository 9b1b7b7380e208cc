//! Error types for the Ranseur library.
//!
//! Searches never fail because nothing matched; an empty collection is the
//! answer in that case. Errors are reserved for precondition violations
//! (searching an empty BK-tree), bad input at the edges (vocabulary files,
//! configuration) and I/O.
//!
//! # Examples
//!
//! ```
//! use ranseur::error::{RanseurError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(RanseurError::invalid_input("pattern is malformed"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Ranseur operations.
#[derive(Error, Debug)]
pub enum RanseurError {
    /// I/O errors (vocabulary or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input that violates a structural requirement of an operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A BK-tree was queried before any word was inserted
    #[error("BK-tree is empty: insert at least one word before searching")]
    EmptyTree,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with RanseurError.
pub type Result<T> = std::result::Result<T, RanseurError>;

impl RanseurError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        RanseurError::InvalidInput(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        RanseurError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = RanseurError::invalid_input("bad pattern");
        assert_eq!(error.to_string(), "Invalid input: bad pattern");

        let error = RanseurError::config("max_distance missing");
        assert_eq!(error.to_string(), "Configuration error: max_distance missing");
    }

    #[test]
    fn test_empty_tree_message() {
        let error = RanseurError::EmptyTree;
        assert!(error.to_string().contains("empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let ranseur_error = RanseurError::from(io_error);

        match ranseur_error {
            RanseurError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
