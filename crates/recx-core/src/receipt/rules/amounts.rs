//! Amount extraction: finding the transaction total among lookalike tokens.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::AMOUNT;
use super::{ExtractionMatch, FieldExtractor};

/// Values at or above this bound are treated as OCR noise (phone numbers,
/// timestamps, loyalty card fragments misread as currency) and discarded.
const MAX_PLAUSIBLE_AMOUNT: u32 = 10_000;

/// Currency-shaped amount extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let max = Decimal::from(MAX_PLAUSIBLE_AMOUNT);
        let mut results = Vec::new();

        for caps in AMOUNT.captures_iter(text) {
            if let Ok(amount) = Decimal::from_str(&caps[1]) {
                if amount <= Decimal::ZERO || amount >= max {
                    continue;
                }
                let full_match = caps.get(0).unwrap();
                results.push(
                    ExtractionMatch::new(amount, 0.75, full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                );
            }
        }

        results
    }
}

/// Amounts found on a receipt.
#[derive(Debug, Clone, Default)]
pub struct ReceiptAmounts {
    /// The presumed transaction total.
    pub total: Option<ExtractionMatch<Decimal>>,
    /// All surviving candidate amounts.
    pub all_amounts: Vec<ExtractionMatch<Decimal>>,
}

/// Extract amounts from receipt text.
///
/// Every currency-shaped token on the receipt becomes a candidate; values
/// outside `(0, 10000)` are discarded during collection. The total is the
/// maximum surviving candidate, on the assumption that the grand total is the
/// largest currency figure printed on a receipt.
pub fn extract_amounts(text: &str) -> ReceiptAmounts {
    let all_amounts = AmountExtractor::new().extract_all(text);

    let total = all_amounts
        .iter()
        .max_by(|a, b| a.value.cmp(&b.value))
        .cloned();

    ReceiptAmounts { total, all_amounts }
}
