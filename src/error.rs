//! Error types for the Nomina library.
//!
//! The name-processing core is made of total functions and never fails; errors
//! only arise while building a [`Normalizer`](crate::analysis::normalizer::Normalizer),
//! loading vocabulary files, or reading and writing record files.
//! All of them are represented by the [`NominaError`] enum.
//!
//! # Examples
//!
//! ```
//! use nomina::error::{NominaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NominaError::vocabulary("empty title entry"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Nomina operations.
///
/// Uses the `thiserror` crate for the `Error` implementation and provides
/// constructor helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum NominaError {
    /// I/O errors (vocabulary files, record files, output)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reading/writing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Invalid vocabulary entries or tables
    #[error("Vocabulary error: {0}")]
    Vocabulary(String),

    /// Analysis pipeline construction errors
    #[error("Analysis error: {0}")]
    Analysis(String),
}

/// Result type alias for operations that may fail with NominaError.
pub type Result<T> = std::result::Result<T, NominaError>;

impl NominaError {
    /// Create a new vocabulary error.
    pub fn vocabulary<S: Into<String>>(msg: S) -> Self {
        NominaError::Vocabulary(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        NominaError::Analysis(msg.into())
    }
}
