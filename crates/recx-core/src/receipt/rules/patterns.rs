//! Common regex patterns for receipt field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Currency-shaped numeric token: optional dollar sign, digits, exactly
    // two decimals. Unit prices, subtotals, tax, and totals all match this.
    pub static ref AMOUNT: Regex = Regex::new(
        r"\$?(\d+\.\d{2})"
    ).unwrap();

    // Merchant stop patterns: line shapes that end the header scan.
    pub static ref ADDRESS_LINE: Regex = Regex::new(
        r"^\d+\s+\S+"
    ).unwrap();

    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"\d{1,2}/\d{1,2}/\d{2,4}"
    ).unwrap();

    pub static ref TIME_TOKEN: Regex = Regex::new(
        r"\d{1,2}:\d{2}"
    ).unwrap();

    pub static ref PHONE: Regex = Regex::new(
        r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"
    ).unwrap();

    pub static ref TRANSACTION_KEYWORD: Regex = Regex::new(
        r"(?i)^(subtotal|total|tax|cash|credit|debit|change|amount|balance|qty|item|price)\b"
    ).unwrap();

    pub static ref LEADING_AMOUNT: Regex = Regex::new(
        r"^\$\s*\d"
    ).unwrap();

    pub static ref ORDER_NUMBER: Regex = Regex::new(
        r"^#\s*\d+"
    ).unwrap();

    pub static ref STORE_NUMBER: Regex = Regex::new(
        r"(?i)(store|loc(ation)?)\s*#\s*\d+"
    ).unwrap();

    pub static ref ITEM_LINE: Regex = Regex::new(
        r"(?i)\d+\s*x\s*\$?\d+\.\d{2}"
    ).unwrap();

    pub static ref URL: Regex = Regex::new(
        r"(?i)(https?://|www\.|\.com\b|\.net\b|\.org\b)"
    ).unwrap();

    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Merchant skip patterns: known header metadata, ignored without ending
    // the scan. Anchored so they only swallow standalone metadata lines.
    pub static ref STORE_META_LINE: Regex = Regex::new(
        r"(?i)^(store|location|terminal|register)\s*#?\s*\d+$"
    ).unwrap();

    pub static ref LABELED_META_LINE: Regex = Regex::new(
        r"(?i)^(cashier|server|trans(action)?)\s*[:#]"
    ).unwrap();

    pub static ref PURELY_NUMERIC: Regex = Regex::new(
        r"^[\d\s.,#*-]+$"
    ).unwrap();

    // Date patterns, in match priority order.
    pub static ref DATE_SLASH: Regex = Regex::new(
        r"\b(\d{1,2})/(\d{1,2})/(\d{2,4})\b"
    ).unwrap();

    pub static ref DATE_DASH: Regex = Regex::new(
        r"\b(\d{1,2})-(\d{1,2})-(\d{4})\b"
    ).unwrap();

    pub static ref DATE_ISO: Regex = Regex::new(
        r"\b(\d{4})-(\d{1,2})-(\d{1,2})\b"
    ).unwrap();

    pub static ref DATE_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2}),?\s+(\d{4})"
    ).unwrap();

    // Tax keyword (substring match anywhere in a line).
    pub static ref TAX_KEYWORD: Regex = Regex::new(
        r"(?i)tax"
    ).unwrap();
}
