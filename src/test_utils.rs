//! Shared helpers for unit tests.

use crate::Date;

/// Builds a date from components, panicking on invalid test input.
pub(crate) fn d(year: u16, month: u8, day: u8) -> Date {
    Date::from_ymd(year, month, day).expect("valid test date")
}
