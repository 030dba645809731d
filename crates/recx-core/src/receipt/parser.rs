//! Rule-based receipt parser tying the field extractors together.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::receipt::{ConfidenceSet, ExtractionResult};

use super::rules::{
    FieldExtractor, amounts::extract_amounts, currency::identify_currency, dates::DateExtractor,
    merchant::MerchantExtractor, tax::TaxExtractor,
};
use super::segment_lines;

/// Trait for receipt parsing.
///
/// Parsing is total: every input, including the empty string, produces a
/// well-formed `ExtractionResult`. A field the heuristics cannot find is an
/// expected outcome, represented as `None` with zero confidence, never as an
/// error.
pub trait ReceiptParser {
    /// Parse receipt fields from raw OCR text.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based receipt parser.
///
/// Runs the line segmenter once, then the five field extractors
/// independently over the same data (only the currency step wants to know
/// whether amounts were found), and aggregates confidence last. Holds no
/// state across calls.
pub struct RuleReceiptParser {
    /// Currency assumed when amounts exist but no code or symbol does.
    default_currency: String,
    /// Leading non-empty lines examined for the merchant name.
    header_window: usize,
    /// Maximum header lines joined into the merchant name.
    max_merchant_lines: usize,
}

impl RuleReceiptParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        let defaults = ExtractionConfig::default();
        Self::from_config(&defaults)
    }

    /// Create a parser from an extraction configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            default_currency: config.default_currency.clone(),
            header_window: config.header_window,
            max_merchant_lines: config.max_merchant_lines,
        }
    }

    /// Set the fallback currency.
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }

    /// Set how many leading lines the merchant scan examines.
    pub fn with_header_window(mut self, window: usize) -> Self {
        self.header_window = window;
        self
    }

    /// Set how many header lines may join into the merchant name.
    pub fn with_max_merchant_lines(mut self, max_lines: usize) -> Self {
        self.max_merchant_lines = max_lines;
        self
    }
}

impl Default for RuleReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for RuleReceiptParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        info!("Extracting receipt fields from {} characters", text.len());

        let lines = segment_lines(text);

        let merchant = MerchantExtractor::new()
            .with_header_window(self.header_window)
            .with_max_lines(self.max_merchant_lines)
            .extract_from_lines(&lines);
        if merchant.is_none() {
            debug!("No merchant name found in header");
        }

        let amounts = extract_amounts(text);
        debug!(
            "Found {} candidate amounts",
            amounts.all_amounts.len()
        );

        let date = DateExtractor::new().extract(text);
        let tax = TaxExtractor::new().extract(text);
        let currency = identify_currency(
            text,
            !amounts.all_amounts.is_empty(),
            &self.default_currency,
        );

        let confidence = ConfidenceSet::aggregate(
            merchant.as_ref().map(|m| m.confidence).unwrap_or(0.0),
            amounts.total.as_ref().map(|m| m.confidence).unwrap_or(0.0),
            date.as_ref().map(|m| m.confidence).unwrap_or(0.0),
            tax.as_ref().map(|m| m.confidence).unwrap_or(0.0),
            currency.as_ref().map(|m| m.confidence).unwrap_or(0.0),
        );

        debug!(
            "Extraction finished in {:?} with overall confidence {:.2}",
            start.elapsed(),
            confidence.overall
        );

        ExtractionResult {
            merchant: merchant.map(|m| m.value),
            amount: amounts.total.map(|m| m.value),
            date: date.map(|m| m.value),
            tax: tax.map(|m| m.value),
            currency: currency.map(|m| m.value),
            raw_text: text.to_string(),
            confidence,
        }
    }
}
