//! Error types for the recx-core library.
//!
//! Extraction itself is total: every input string produces an
//! `ExtractionResult`, so no extractor returns an error. Errors only occur at
//! the edges (reading configuration files, I/O done by callers).

use thiserror::Error;

/// Main error type for the recx library.
#[derive(Error, Debug)]
pub enum RecxError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the recx library.
pub type Result<T> = std::result::Result<T, RecxError>;
