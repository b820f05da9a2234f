//! Error types for the lexnorm library.
//!
//! Every fallible operation in lexnorm happens at startup: loading resource
//! files, reading configuration and opening the input table. Per-record
//! processing is total and never produces an error. All errors are
//! represented by the [`LexnormError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexnorm::error::{LexnormError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexnormError::config("prefix_length must exceed max_edit_distance"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for lexnorm operations.
#[derive(Error, Debug)]
pub enum LexnormError {
    /// I/O errors not tied to a named resource
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration (bad constants, missing input column, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A resource file could not be opened or read
    #[error("Resource error in {}: {message}", path.display())]
    Resource { path: PathBuf, message: String },

    /// A malformed row in a resource file
    #[error("Malformed entry in {} at line {line}: {message}", path.display())]
    Dictionary {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input table errors wrapped with the row or file they occurred at
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexnormError.
pub type Result<T> = std::result::Result<T, LexnormError>;

impl LexnormError {
    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        LexnormError::Config(msg.into())
    }

    /// Create a new resource error naming the offending file.
    pub fn resource<P: AsRef<Path>, S: Into<String>>(path: P, msg: S) -> Self {
        LexnormError::Resource {
            path: path.as_ref().to_path_buf(),
            message: msg.into(),
        }
    }

    /// Create a new malformed-entry error naming the file and 1-based line.
    pub fn dictionary<P: AsRef<Path>, S: Into<String>>(path: P, line: usize, msg: S) -> Self {
        LexnormError::Dictionary {
            path: path.as_ref().to_path_buf(),
            line,
            message: msg.into(),
        }
    }

    /// Create a new missing-column error.
    pub fn missing_column<S: AsRef<str>>(column: S) -> Self {
        LexnormError::Config(format!(
            "column '{}' is not present in the input",
            column.as_ref()
        ))
    }
}
