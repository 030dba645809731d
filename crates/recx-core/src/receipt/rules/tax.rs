//! Tax amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::{AMOUNT, TAX_KEYWORD};
use super::{ExtractionMatch, FieldExtractor};

/// Tax line extractor.
///
/// The first line containing the `tax` keyword is final: if it carries no
/// currency-shaped token, the result is none rather than falling through to a
/// later tax line. A receipt usually prints one tax line, and when OCR splits
/// it across lines the safer answer is no tax at all.
pub struct TaxExtractor;

impl TaxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TaxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for TaxExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for line in text.lines().map(str::trim) {
            if !TAX_KEYWORD.is_match(line) {
                continue;
            }

            let caps = AMOUNT.captures(line)?;
            let amount = Decimal::from_str(&caps[1]).ok()?;
            return Some(ExtractionMatch::new(amount, 0.7, &caps[0]));
        }

        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}
