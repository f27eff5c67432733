//! Calendar validation for untrusted candidate values.
//!
//! Validation is component-wise and independent of any permissive parser,
//! so an impossible day like April 31 is rejected rather than rolled over
//! into the next month.

use crate::consts::{MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR};
use crate::types::days_in_month;
use crate::Date;

/// A value whose calendar validity can be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateCandidate {
    /// A textual candidate, expected in `YYYY-MM-DD` shape
    Text(String),
    /// A Unix timestamp in milliseconds
    Timestamp(i64),
    /// An already-constructed date value
    Value(Date),
}

impl From<&str> for DateCandidate {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateCandidate {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for DateCandidate {
    fn from(value: i64) -> Self {
        Self::Timestamp(value)
    }
}

impl From<Date> for DateCandidate {
    fn from(value: Date) -> Self {
        Self::Value(value)
    }
}

/// Returns true when the candidate denotes a real calendar date within the
/// supported year range (1900..=9999).
///
/// Never fails or panics; any malformed or out-of-range input yields false.
pub fn is_valid_date(candidate: impl Into<DateCandidate>) -> bool {
    match candidate.into() {
        DateCandidate::Text(text) => is_valid_text(&text),
        DateCandidate::Timestamp(millis) => Date::from_unix_millis(millis).is_ok(),
        // Construction already enforced every component
        DateCandidate::Value(_) => true,
    }
}

fn is_valid_text(text: &str) -> bool {
    let Some((year, month, day)) = split_iso_components(text) else {
        return false;
    };
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }
    if month < 1 || month > MAX_MONTH {
        return false;
    }
    day >= MIN_DAY && day <= days_in_month(year, month)
}

/// Splits strict `YYYY-MM-DD` text into numeric components, rejecting any
/// other shape.
fn split_iso_components(text: &str) -> Option<(u16, u8, u8)> {
    let bytes = text.as_bytes();
    if !text.is_ascii() || bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let year = parse_digits_u16(&text[0..4])?;
    let month = parse_digits_u8(&text[5..7])?;
    let day = parse_digits_u8(&text[8..10])?;
    Some((year, month, day))
}

fn parse_digits_u16(s: &str) -> Option<u16> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn parse_digits_u8(s: &str) -> Option<u8> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::d;

    #[test]
    fn test_leap_year_boundaries() {
        struct TestCase {
            input:       &'static str,
            valid:       bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2024-02-29",
                valid:       true,
                description: "leap year",
            },
            TestCase {
                input:       "2023-02-29",
                valid:       false,
                description: "not a leap year",
            },
            TestCase {
                input:       "2000-02-29",
                valid:       true,
                description: "divisible by 400",
            },
            TestCase {
                input:       "2100-02-29",
                valid:       false,
                description: "century not divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_valid_date(case.input),
                case.valid,
                "{} ({})",
                case.input,
                case.description
            );
        }
    }

    #[test]
    fn test_impossible_days_rejected_not_rolled_over() {
        assert!(!is_valid_date("2024-04-31"));
        assert!(!is_valid_date("2024-06-31"));
        assert!(!is_valid_date("2024-02-30"));
        assert!(!is_valid_date("2024-01-32"));
        assert!(!is_valid_date("2024-01-00"));
    }

    #[test]
    fn test_year_window() {
        assert!(is_valid_date("1900-01-01"));
        assert!(is_valid_date("9999-12-31"));
        assert!(!is_valid_date("1899-12-31"));
        assert!(!is_valid_date("10000-01-01"));
        assert!(!is_valid_date("0000-01-01"));
    }

    #[test]
    fn test_month_bounds() {
        assert!(is_valid_date("2024-01-15"));
        assert!(is_valid_date("2024-12-15"));
        assert!(!is_valid_date("2024-00-15"));
        assert!(!is_valid_date("2024-13-15"));
    }

    #[test]
    fn test_non_date_tokens_rejected() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("invalid-date"));
        assert!(!is_valid_date("null"));
        assert!(!is_valid_date("undefined"));
        assert!(!is_valid_date("2024-3-5"));
        assert!(!is_valid_date("2024/03/05"));
        assert!(!is_valid_date("15-03-2024"));
        assert!(!is_valid_date("2024-03-15T00:00:00Z"));
        assert!(!is_valid_date("2024-03-15 "));
    }

    #[test]
    fn test_timestamp_candidates() {
        // 2024-03-15T12:30:00Z
        assert!(is_valid_date(1_710_505_800_000_i64));
        // Epoch itself
        assert!(is_valid_date(0_i64));
        // Far outside the supported window
        assert!(!is_valid_date(i64::MAX));
        assert!(!is_valid_date(i64::MIN));
    }

    #[test]
    fn test_date_values_always_valid() {
        assert!(is_valid_date(d(2024, 2, 29)));
        assert!(is_valid_date(d(1900, 1, 1)));
    }

    #[test]
    fn test_owned_string_candidate() {
        assert!(is_valid_date(String::from("2024-03-15")));
        assert!(!is_valid_date(String::from("2024-03-32")));
    }
}
