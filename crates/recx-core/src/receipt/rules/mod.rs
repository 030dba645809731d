//! Rule-based field extractors for receipt OCR text.

pub mod amounts;
pub mod currency;
pub mod dates;
pub mod merchant;
pub mod patterns;
pub mod tax;

pub use amounts::{AmountExtractor, ReceiptAmounts, extract_amounts};
pub use currency::{CurrencyExtractor, identify_currency};
pub use dates::DateExtractor;
pub use merchant::MerchantExtractor;
pub use patterns::*;
pub use tax::TaxExtractor;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// An extracted value with its heuristic confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0), determined by which pattern matched.
    pub confidence: f32,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
