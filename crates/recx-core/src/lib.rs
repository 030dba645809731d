//! Core library for receipt OCR text processing.
//!
//! This crate provides:
//! - Line segmentation of raw OCR text
//! - Heuristic receipt field extraction (merchant, amount, date, tax, currency)
//! - Per-field and overall confidence scoring
//!
//! The extraction pipeline is a pure, synchronous computation: given the raw
//! text an OCR provider recovered from a receipt image, it returns one
//! [`ExtractionResult`] and never fails. It performs no I/O and holds no
//! state across calls.

pub mod error;
pub mod models;
pub mod receipt;

pub use error::{RecxError, Result};
pub use models::config::{ExtractionConfig, RecxConfig};
pub use models::receipt::{ConfidenceSet, ExtractionResult};
pub use receipt::{ReceiptParser, RuleReceiptParser, segment_lines};
