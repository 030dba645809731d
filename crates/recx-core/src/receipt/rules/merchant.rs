//! Merchant name extraction from the receipt header.

use super::patterns::{
    ADDRESS_LINE, DATE_TOKEN, EMAIL, ITEM_LINE, LABELED_META_LINE, LEADING_AMOUNT, ORDER_NUMBER,
    PHONE, PURELY_NUMERIC, STORE_META_LINE, STORE_NUMBER, TIME_TOKEN, TRANSACTION_KEYWORD, URL,
};
use super::{ExtractionMatch, FieldExtractor};
use crate::receipt::segment_lines;

/// Longest header line that can contribute to the merchant name.
const MAX_LINE_LENGTH: usize = 50;

/// Merchant name extractor.
///
/// The business name conventionally occupies one or more of the first lines
/// of a receipt, interleaved with store/terminal/cashier metadata. Known
/// metadata lines are skipped without ending the scan; stop-pattern lines
/// (addresses, dates, phone numbers, transaction rows) end it.
pub struct MerchantExtractor {
    /// How many leading non-empty lines are examined.
    header_window: usize,
    /// Maximum number of accepted lines joined into the name.
    max_lines: usize,
}

impl MerchantExtractor {
    pub fn new() -> Self {
        Self {
            header_window: 5,
            max_lines: 3,
        }
    }

    /// Set how many leading non-empty lines are examined.
    pub fn with_header_window(mut self, window: usize) -> Self {
        self.header_window = window;
        self
    }

    /// Set the maximum number of lines joined into the name.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Extract the merchant name from already-segmented lines.
    pub fn extract_from_lines(&self, lines: &[&str]) -> Option<ExtractionMatch<String>> {
        let non_empty: Vec<&str> = lines.iter().copied().filter(|l| !l.is_empty()).collect();

        let mut accepted: Vec<&str> = Vec::new();
        for line in non_empty.iter().take(self.header_window).copied() {
            if is_skip_line(line) {
                continue;
            }
            if is_stop_line(line) {
                break;
            }
            if line.chars().count() <= MAX_LINE_LENGTH && !PURELY_NUMERIC.is_match(line) {
                accepted.push(line);
            }
            if accepted.len() == self.max_lines {
                break;
            }
        }

        let joined = accepted.join(" ");
        let name = clean_merchant_name(&joined);

        if name.is_empty() {
            // Nothing usable in the header; take the first non-empty line
            // verbatim at reduced confidence.
            let first = non_empty.first()?;
            return Some(ExtractionMatch::new((*first).to_string(), 0.6, *first));
        }

        let confidence = if accepted.len() == 1 { 0.85 } else { 0.8 };
        Some(ExtractionMatch::new(name, confidence, joined))
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MerchantExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let lines = segment_lines(text);
        self.extract_from_lines(&lines)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}

/// Known header metadata: ignored, scanning continues.
fn is_skip_line(line: &str) -> bool {
    STORE_META_LINE.is_match(line) || LABELED_META_LINE.is_match(line)
}

/// Line shapes that signal the merchant-name section has ended.
fn is_stop_line(line: &str) -> bool {
    ADDRESS_LINE.is_match(line)
        || DATE_TOKEN.is_match(line)
        || TIME_TOKEN.is_match(line)
        || PHONE.is_match(line)
        || TRANSACTION_KEYWORD.is_match(line)
        || LEADING_AMOUNT.is_match(line)
        || ORDER_NUMBER.is_match(line)
        || STORE_NUMBER.is_match(line)
        || ITEM_LINE.is_match(line)
        || URL.is_match(line)
        || EMAIL.is_match(line)
}

/// Strip decoration characters and collapse whitespace runs.
fn clean_merchant_name(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| *c != '*' && *c != '#').collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(text: &str) -> Option<ExtractionMatch<String>> {
        MerchantExtractor::new().extract(text)
    }

    #[test]
    fn test_single_line_merchant() {
        let text = "SHELL GAS STATION\n123 MAIN ST\n05/12/2024  14:32";
        let m = extract(text).unwrap();
        assert_eq!(m.value, "SHELL GAS STATION");
        assert_eq!(m.confidence, 0.85);
    }

    #[test]
    fn test_multi_line_merchant_joined() {
        let text = "JOE'S\nDINER\n123 MAIN ST";
        let m = extract(text).unwrap();
        assert_eq!(m.value, "JOE'S DINER");
        assert_eq!(m.confidence, 0.8);
    }

    #[test]
    fn test_metadata_skipped_without_stopping() {
        let text = "STORE #1234\nWALGREENS\nCASHIER: ANNA\n456 OAK AVE";
        let m = extract(text).unwrap();
        assert_eq!(m.value, "WALGREENS");
        assert_eq!(m.confidence, 0.85);
    }

    #[test]
    fn test_decoration_stripped_and_whitespace_collapsed() {
        let text = "*** TARGET ***\n#STORE\n789 ELM ST";
        let m = extract(text).unwrap();
        assert_eq!(m.value, "TARGET STORE");
    }

    #[test]
    fn test_overlong_line_not_accepted() {
        let long_line = "X".repeat(51);
        let text = format!("{long_line}\nCORNER SHOP\n12 HIGH ST");
        let m = extract(&text).unwrap();
        assert_eq!(m.value, "CORNER SHOP");
        assert_eq!(m.confidence, 0.85);
    }

    #[test]
    fn test_purely_numeric_line_not_accepted() {
        let text = "0042\nCORNER SHOP";
        let m = extract(text).unwrap();
        assert_eq!(m.value, "CORNER SHOP");
    }

    #[test]
    fn test_fallback_first_line_verbatim() {
        // Every header line hits a stop pattern, so the scan accepts nothing
        // and the first non-empty line is used as-is.
        let text = "123 MAIN ST\nTOTAL $5.00";
        let m = extract(text).unwrap();
        assert_eq!(m.value, "123 MAIN ST");
        assert_eq!(m.confidence, 0.6);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract("").is_none());
        assert!(extract("\n\n  \n").is_none());
    }

    #[test]
    fn test_at_most_three_lines_joined() {
        let text = "ALPHA\nBRAVO\nCHARLIE\nDELTA\nECHO";
        let m = extract(text).unwrap();
        assert_eq!(m.value, "ALPHA BRAVO CHARLIE");
        assert_eq!(m.confidence, 0.8);
    }
}
