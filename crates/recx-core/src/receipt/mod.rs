//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::{ReceiptParser, RuleReceiptParser};

/// Split raw OCR text into trimmed lines.
///
/// Empty lines are retained; downstream extractors filter as needed. Empty
/// input yields an empty sequence.
pub fn segment_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).collect()
}
