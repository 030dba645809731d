//! Currency identification (ISO 4217 codes).

use super::{ExtractionMatch, FieldExtractor};

/// Currency keyword -> ISO code, tried in order over the whole text.
const CURRENCY_KEYWORDS: &[(&str, &str)] = &[
    ("USD", "USD"),
    ("EUR", "EUR"),
    ("GBP", "GBP"),
    ("EURO", "EUR"),
    ("DOLLAR", "USD"),
    ("POUND", "GBP"),
];

/// Currency symbol -> ISO code, tried in order. `$` is listed first, so the
/// multi-character symbols (`R$`, `C$`, `A$`) are shadowed by it; inherited
/// tie-break order, kept because downstream confidence expectations are
/// calibrated to it.
const CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("$", "USD"),
    ("€", "EUR"),
    ("£", "GBP"),
    ("¥", "JPY"),
    ("R$", "BRL"),
    ("C$", "CAD"),
    ("A$", "AUD"),
];

/// Currency extractor: keywords first, symbols second.
pub struct CurrencyExtractor;

impl CurrencyExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CurrencyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for CurrencyExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let upper = text.to_uppercase();

        for (keyword, code) in CURRENCY_KEYWORDS {
            if upper.contains(keyword) {
                return Some(ExtractionMatch::new((*code).to_string(), 0.9, *keyword));
            }
        }

        for (symbol, code) in CURRENCY_SYMBOLS {
            if text.contains(symbol) {
                return Some(ExtractionMatch::new((*code).to_string(), 0.85, *symbol));
            }
        }

        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.extract(text).into_iter().collect()
    }
}

/// Identify the receipt's currency.
///
/// Keyword and symbol searches run over the raw text; when neither finds
/// anything but at least one plausible amount was extracted, the default
/// currency is assumed at low confidence.
pub fn identify_currency(
    text: &str,
    has_amounts: bool,
    default_currency: &str,
) -> Option<ExtractionMatch<String>> {
    if let Some(m) = CurrencyExtractor::new().extract(text) {
        return Some(m);
    }

    if has_amounts {
        return Some(ExtractionMatch::new(
            default_currency.to_string(),
            0.5,
            "amount present",
        ));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keyword_beats_symbol() {
        // "EUR" keyword wins even though "$" also appears.
        let m = CurrencyExtractor::new()
            .extract("PAID 12.50 EUR ($13.40)")
            .unwrap();
        assert_eq!(m.value, "EUR");
        assert_eq!(m.confidence, 0.9);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let m = CurrencyExtractor::new().extract("Euro Bistro").unwrap();
        assert_eq!(m.value, "EUR");
    }

    #[test]
    fn test_symbol_match() {
        let m = CurrencyExtractor::new().extract("TOTAL £9.99").unwrap();
        assert_eq!(m.value, "GBP");
        assert_eq!(m.confidence, 0.85);
    }

    #[test]
    fn test_dollar_shadows_multichar_symbols() {
        // R$ contains $, which is tried first.
        let m = CurrencyExtractor::new().extract("TOTAL R$ 20.00").unwrap();
        assert_eq!(m.value, "USD");
    }

    #[test]
    fn test_default_when_amounts_found() {
        let m = identify_currency("TOTAL 48.87", true, "USD").unwrap();
        assert_eq!(m.value, "USD");
        assert_eq!(m.confidence, 0.5);
    }

    #[test]
    fn test_none_without_amounts() {
        assert!(identify_currency("CALL US (555) 123-4567", false, "USD").is_none());
    }
}
