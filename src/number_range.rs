//! Parsing for the numeric id filter box.
//!
//! The filter box accepts pure numeric syntax only: a single id ("100"), a
//! range ("1-100", "1 to 100"), or a comma-separated list ("1, 2, 3"). Mixed
//! free text like "cat 1-100" is not this parser's problem — the search
//! engine extracts embedded numbers from free-text queries on its own.
//!
//! Parse failure is `None`, never an error: the filter engine treats an
//! unparseable filter string as "match nothing" (fail-closed).

use crate::types::NumericRange;
use regex::Regex;
use std::sync::OnceLock;

/// Range pattern: `<int> (-|to) <int>`, case-insensitive, optional whitespace.
fn range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(\d+)\s*(?:-|to)\s*(\d+)").unwrap())
}

/// Comma-separated list of integers with optional whitespace around commas.
fn list_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(?:\s*,\s*\d+)*$").unwrap())
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").unwrap())
}

/// Parse a numeric filter query into inclusive id ranges.
///
/// Tried in order:
/// 1. A range-shaped substring anywhere in the input. An inverted range
///    (min > max) fails the whole parse — no fallback to the other forms.
/// 2. Pure digits → one exact range `{n, n}`. Zero is rejected.
/// 3. A comma-separated integer list → one exact range per positive number,
///    in input order.
///
/// Everything else — letters, malformed punctuation, negative numbers,
/// empty input — parses to `None`.
pub fn parse_id_query(query: &str) -> Option<Vec<NumericRange>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut ranges: Vec<NumericRange> = Vec::new();

    if let Some(caps) = range_re().captures(trimmed) {
        let min: u32 = caps[1].parse().ok()?;
        let max: u32 = caps[2].parse().ok()?;
        if min <= max {
            ranges.push(NumericRange { min, max });
        }
    } else if trimmed.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = trimmed.parse::<u32>() {
            if n > 0 {
                ranges.push(NumericRange { min: n, max: n });
            }
        }
    } else if list_re().is_match(trimmed) {
        for m in digits_re().find_iter(trimmed) {
            if let Ok(n) = m.as_str().parse::<u32>() {
                if n > 0 {
                    ranges.push(NumericRange { min: n, max: n });
                }
            }
        }
    }

    if ranges.is_empty() {
        None
    } else {
        Some(ranges)
    }
}

/// Whether `id` falls inside any of the parsed ranges. An empty slice
/// matches nothing.
pub fn matches_id(id: u32, ranges: &[NumericRange]) -> bool {
    ranges.iter().any(|range| range.contains(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: u32, max: u32) -> NumericRange {
        NumericRange { min, max }
    }

    #[test]
    fn parses_single_number() {
        assert_eq!(parse_id_query("100"), Some(vec![range(100, 100)]));
    }

    #[test]
    fn parses_hyphen_range() {
        assert_eq!(parse_id_query("1-100"), Some(vec![range(1, 100)]));
    }

    #[test]
    fn parses_to_range_case_insensitive() {
        assert_eq!(parse_id_query("1 to 100"), Some(vec![range(1, 100)]));
        assert_eq!(parse_id_query("1 TO 100"), Some(vec![range(1, 100)]));
    }

    #[test]
    fn parses_range_with_extra_whitespace() {
        assert_eq!(parse_id_query("1 - 100"), Some(vec![range(1, 100)]));
        assert_eq!(parse_id_query("  1-100  "), Some(vec![range(1, 100)]));
    }

    #[test]
    fn parses_comma_separated_list() {
        assert_eq!(
            parse_id_query("1,2,3"),
            Some(vec![range(1, 1), range(2, 2), range(3, 3)])
        );
        assert_eq!(
            parse_id_query("100, 200 ,300"),
            Some(vec![range(100, 100), range(200, 200), range(300, 300)])
        );
    }

    #[test]
    fn inverted_range_fails_without_fallback() {
        // "100-1" is range-shaped, so the pure-number and list forms are
        // never consulted.
        assert_eq!(parse_id_query("100-1"), None);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_id_query("abc"), None);
        assert_eq!(parse_id_query(""), None);
        assert_eq!(parse_id_query("   "), None);
        assert_eq!(parse_id_query("1,,2"), None);
        assert_eq!(parse_id_query("-5"), None);
    }

    #[test]
    fn range_substring_is_found_amid_text() {
        // The filter box only ever receives numeric syntax, but the range
        // scan is a substring match, not anchored.
        assert_eq!(parse_id_query("cat 1-100"), Some(vec![range(1, 100)]));
    }

    #[test]
    fn rejects_zero_exact_but_not_zero_range_min() {
        assert_eq!(parse_id_query("0"), None);
        assert_eq!(parse_id_query("0,0"), None);
        assert_eq!(parse_id_query("0,5"), Some(vec![range(5, 5)]));
        // Range bounds are not zero-checked.
        assert_eq!(parse_id_query("0-5"), Some(vec![range(0, 5)]));
    }

    #[test]
    fn matches_id_over_ranges() {
        let single = vec![range(1, 100)];
        assert!(matches_id(50, &single));
        assert!(matches_id(1, &single));
        assert!(matches_id(100, &single));
        assert!(!matches_id(101, &single));
        assert!(!matches_id(0, &single));

        let split = vec![range(1, 10), range(90, 100)];
        assert!(matches_id(5, &split));
        assert!(matches_id(95, &split));
        assert!(!matches_id(50, &split));

        assert!(!matches_id(5, &[]));
    }
}
