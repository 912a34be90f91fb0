//! Standalone helpers for callers that post-process parsed addresses

use regex::Regex;
use std::sync::LazyLock;

static NUMERIC_STREET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\d+(?:/\d*)?(?:ST|ND|RD|TH)?").unwrap());

static ORDINAL_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d+(?:/\d*)?)(?:ST|ND|RD|TH)").unwrap());

static NON_LETTER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z]").unwrap());

static NYC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)NYC|NEWYORK(?:CITY)?").unwrap());

/// Check if a street name is a number, optionally ordinal ("42", "42ND")
#[must_use]
pub fn is_numeric_street_name(name: &str) -> bool {
    NUMERIC_STREET_REGEX.is_match(name)
}

/// Strip the ordinal suffix from a numeric street name ("42ND" → "42").
///
/// Names that are not numeric come back unchanged.
#[must_use]
pub fn extract_numeric_street_name(name: &str) -> String {
    if !is_numeric_street_name(name) {
        return name.to_string();
    }

    ORDINAL_SUFFIX_REGEX
        .replace(name, "$1")
        .trim()
        .to_string()
}

/// Check if a city name mentions New York City ("NYC", "New York, NY")
///
/// Punctuation and spaces are ignored, and the name may appear anywhere.
#[must_use]
pub fn is_new_york_city(city: &str) -> bool {
    let letters = NON_LETTER_REGEX.replace_all(city, "");
    NYC_REGEX.is_match(&letters)
}

/// Split a raw ZIP code into the five-digit ZIP and the +4 extension.
///
/// Non-digits are discarded first; anything beyond five digits is the
/// extension.
#[must_use]
pub fn parse_zip_code(raw: &str) -> (String, String) {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if digits.len() <= 5 {
        (digits, String::new())
    } else {
        let (zip5, plus4) = digits.split_at(5);
        (zip5.to_string(), plus4.to_string())
    }
}
