//! Data models for receipt extraction.

pub mod config;
pub mod receipt;

pub use config::{ExtractionConfig, RecxConfig};
pub use receipt::{ConfidenceSet, ExtractionResult};
