//! Receipt extraction result models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured fields extracted from one receipt's OCR text.
///
/// Every field is independently nullable: failing to find one field never
/// blocks extraction of the others. The original input is retained in
/// `raw_text` for audit and debugging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Merchant/business name, assembled from the receipt header.
    pub merchant: Option<String>,

    /// Transaction total in the receipt's native currency.
    pub amount: Option<Decimal>,

    /// Transaction date. Serializes as canonical `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,

    /// Tax amount.
    pub tax: Option<Decimal>,

    /// ISO 4217 currency code (e.g. `USD`).
    pub currency: Option<String>,

    /// The original OCR text, verbatim.
    pub raw_text: String,

    /// Per-field and overall confidence scores.
    pub confidence: ConfidenceSet,
}

impl ExtractionResult {
    /// An empty result for the given input: all fields absent, zero confidence.
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self {
            merchant: None,
            amount: None,
            date: None,
            tax: None,
            currency: None,
            raw_text: raw_text.into(),
            confidence: ConfidenceSet::default(),
        }
    }
}

/// Heuristic confidence scores, one per field plus an overall score.
///
/// Scores are in `[0, 1]` and reflect which pattern matched, not statistical
/// calibration. A score of `0` means the field was not extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceSet {
    pub merchant: f32,
    pub amount: f32,
    pub date: f32,
    pub tax: f32,
    pub currency: f32,
    pub overall: f32,
}

impl ConfidenceSet {
    /// Build a confidence set from per-field scores, computing `overall` as
    /// the arithmetic mean of the scores that are greater than zero.
    ///
    /// Fields that were not extracted are excluded from the mean rather than
    /// counted as zero. When no field was extracted the overall score is `0`;
    /// the empty set is guarded explicitly so the mean never divides by zero.
    pub fn aggregate(merchant: f32, amount: f32, date: f32, tax: f32, currency: f32) -> Self {
        let scores = [merchant, amount, date, tax, currency];
        let extracted: Vec<f32> = scores.iter().copied().filter(|s| *s > 0.0).collect();

        let overall = if extracted.is_empty() {
            0.0
        } else {
            extracted.iter().sum::<f32>() / extracted.len() as f32
        };

        Self {
            merchant,
            amount,
            date,
            tax,
            currency,
            overall,
        }
    }
}
