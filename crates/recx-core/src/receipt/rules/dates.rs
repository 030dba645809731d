//! Transaction date extraction and normalization.

use chrono::{Datelike, Local, NaiveDate};

use super::patterns::{DATE_DASH, DATE_ISO, DATE_MONTH_NAME, DATE_SLASH};
use super::{ExtractionMatch, FieldExtractor};

/// Formats tried when the structured component parse of a matched token fails.
const FALLBACK_FORMATS: &[&str] = &[
    "%m/%d/%Y",
    "%m/%d/%y",
    "%m-%d-%Y",
    "%Y-%m-%d",
    "%b %d, %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%B %d %Y",
];

/// Transaction date extractor.
///
/// Lines are tried in original order and, within a line, the patterns in
/// fixed priority: slash-delimited `M/D/YY(YY)`, dash-delimited `MM-DD-YYYY`,
/// ISO `YYYY-MM-DD`, then English month names. The first token that matches
/// any pattern decides the outcome: scanning never resumes on later lines,
/// even when normalization of that token fails. Receipts rarely carry two
/// dates, so later candidates are not competing alternatives.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Match one line against the date patterns in priority order.
    fn match_line(&self, line: &str) -> Option<Option<ExtractionMatch<NaiveDate>>> {
        if let Some(caps) = DATE_SLASH.captures(line) {
            let month: u32 = caps[1].parse().unwrap_or(0);
            let day: u32 = caps[2].parse().unwrap_or(0);
            let year = expand_two_digit_year(caps[3].parse().unwrap_or(0));
            return Some(normalize(year, month, day, &caps[0]));
        }

        if let Some(caps) = DATE_DASH.captures(line) {
            let month: u32 = caps[1].parse().unwrap_or(0);
            let day: u32 = caps[2].parse().unwrap_or(0);
            let year: i32 = caps[3].parse().unwrap_or(0);
            return Some(normalize(year, month, day, &caps[0]));
        }

        if let Some(caps) = DATE_ISO.captures(line) {
            let year: i32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let day: u32 = caps[3].parse().unwrap_or(0);
            return Some(normalize(year, month, day, &caps[0]));
        }

        if let Some(caps) = DATE_MONTH_NAME.captures(line) {
            let month = month_from_name(&caps[1]);
            let day: u32 = caps[2].parse().unwrap_or(0);
            let year: i32 = caps[3].parse().unwrap_or(0);
            return Some(normalize(year, month, day, &caps[0]));
        }

        None
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = ExtractionMatch<NaiveDate>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for line in text.lines().map(str::trim) {
            if let Some(outcome) = self.match_line(line) {
                // First matched token wins, whether or not it normalized.
                return outcome;
            }
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        text.lines()
            .map(str::trim)
            .filter_map(|line| self.match_line(line))
            .flatten()
            .collect()
    }
}

/// Build the canonical date, falling back to a generic parse of the matched
/// token (never of arbitrary free text) when the components are not a real
/// calendar date.
fn normalize(year: i32, month: u32, day: u32, token: &str) -> Option<ExtractionMatch<NaiveDate>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| parse_token(token))
        .map(|date| ExtractionMatch::new(date, 0.8, token))
}

fn parse_token(token: &str) -> Option<NaiveDate> {
    FALLBACK_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}

/// Expand a two-digit year using the current century.
///
/// `floor(currentYear/100)*100 + yy` silently misdates receipts from another
/// century; inherited behavior, kept because receipts are always recent.
fn expand_two_digit_year(year: i32) -> i32 {
    if year < 100 {
        (Local::now().year() / 100) * 100 + year
    } else {
        year
    }
}

/// Map an English month name (abbreviated or full) by its 3-letter prefix.
fn month_from_name(name: &str) -> u32 {
    let lower = name.to_lowercase();
    match lower.get(..3).unwrap_or("") {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_date_slash() {
        let result = DateExtractor::new().extract("05/12/2024  14:32");
        assert_eq!(
            result.unwrap().value,
            NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
        );
    }

    #[test]
    fn test_extract_date_dash() {
        let result = DateExtractor::new().extract("05-12-2024");
        assert_eq!(
            result.unwrap().value,
            NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
        );
    }

    #[test]
    fn test_extract_date_iso() {
        let result = DateExtractor::new().extract("2024-01-03");
        assert_eq!(
            result.unwrap().value,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_extract_date_month_name() {
        let extractor = DateExtractor::new();

        let result = extractor.extract("May 12, 2024");
        assert_eq!(
            result.unwrap().value,
            NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
        );

        let result = extractor.extract("January 3 2024");
        assert_eq!(
            result.unwrap().value,
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
        );
    }

    #[test]
    fn test_two_digit_year_expands_with_current_century() {
        let result = DateExtractor::new().extract("03/04/23").unwrap();
        let century = (Local::now().year() / 100) * 100;
        assert_eq!(
            result.value,
            NaiveDate::from_ymd_opt(century + 23, 3, 4).unwrap()
        );
    }

    #[test]
    fn test_first_line_match_wins() {
        let text = "05/12/2024\n2023-01-01";
        let result = DateExtractor::new().extract(text);
        assert_eq!(
            result.unwrap().value,
            NaiveDate::from_ymd_opt(2024, 5, 12).unwrap()
        );
    }

    #[test]
    fn test_invalid_date_yields_none_not_a_guess() {
        // Matches the slash pattern but is not a real calendar date, and the
        // generic token parse cannot rescue it. Scanning does not resume on
        // the later valid line.
        let text = "13/45/2024\n2024-01-03";
        assert!(DateExtractor::new().extract(text).is_none());
    }

    #[test]
    fn test_phone_number_is_not_a_date() {
        assert!(DateExtractor::new().extract("(555) 123-4567").is_none());
    }

    #[test]
    fn test_fixed_confidence() {
        let result = DateExtractor::new().extract("2024-01-03").unwrap();
        assert_eq!(result.confidence, 0.8);
    }

    #[test]
    fn test_extract_all_collects_valid_dates() {
        let text = "05/12/2024\n2023-01-01";
        let all = DateExtractor::new().extract_all(text);
        assert_eq!(all.len(), 2);
    }
}
