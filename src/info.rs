//! Calendar fact sheets for a reference date.

use serde::Serialize;

use crate::consts::DAYS_PER_WEEK;
use crate::tables::{MonthAbbreviation, WEEKDAYS, months_for_year};
use crate::types::is_leap_year;
use crate::{Date, ParseError};

/// Snapshot of calendar facts for one date.
///
/// Value object, freshly computed on every call; nothing is cached across
/// calls, so two resolutions for different reference dates never share
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInfo {
    /// Calendar year
    pub year:                 u16,
    /// Zero-padded two-digit month, e.g. "03"
    pub month:                String,
    /// Full weekday name of the observed date
    pub day_of_week:          &'static str,
    /// Day of month of the observed date (1..=31)
    pub day_of_month:         u8,
    /// Days in the month, leap-year aware
    pub month_length:         u8,
    /// Full English month name
    pub month_name:           &'static str,
    /// Fixed abbreviation casings of the month name
    pub month_abbreviation:   MonthAbbreviation,
    /// Calendar quarter (1..=4)
    pub quarter:              u8,
    /// First day of the month
    pub first_day_of_month:   Date,
    /// Last day of the month, leap-year aware
    pub last_day_of_month:    Date,
    /// Whether the year is a leap year
    pub is_leap_year:         bool,
    /// ISO-8601 week-of-year
    pub week_number:          u8,
    /// Week rows the month spans on a Sunday-first calendar grid
    pub total_weeks_in_month: u8,
}

/// Resolves the calendar fact sheet for `reference`.
///
/// Pure function of the argument; the month entry is looked up in a table
/// built for the reference's own year.
pub fn date_info(reference: Date) -> DateInfo {
    build_info(reference, reference, reference)
}

/// Resolves the fact sheet for the month before the reference's month.
///
/// January wraps to December of the prior year. The weekday and day-of-month
/// fields still describe the reference date itself; the week number is taken
/// at the previous month's last day.
///
/// # Errors
/// Returns `ParseError::InvalidYear` when the reference sits in the first
/// supported month (January 1900).
pub fn previous_month_info(reference: Date) -> Result<DateInfo, ParseError> {
    let last_of_previous = reference.first_of_month().add_days(-1)?;
    Ok(build_info(last_of_previous, reference, last_of_previous))
}

fn build_info(month_anchor: Date, observed: Date, week_anchor: Date) -> DateInfo {
    let year = month_anchor.year();
    let month_ordinal = month_anchor.month();
    let months = months_for_year(year);
    let month = months[usize::from(month_ordinal - 1)];

    let first_day_of_month = month_anchor.first_of_month();
    let last_day_of_month = month_anchor.last_of_month();
    let first_weekday = first_day_of_month.weekday();

    DateInfo {
        year,
        month: format!("{month_ordinal:02}"),
        day_of_week: WEEKDAYS[usize::from(observed.weekday())].name,
        day_of_month: observed.day(),
        month_length: month.days,
        month_name: month.name,
        month_abbreviation: month.abbreviation,
        quarter: month.quarter,
        first_day_of_month,
        last_day_of_month,
        is_leap_year: is_leap_year(year),
        week_number: week_anchor.iso_week_number(),
        total_weeks_in_month: (month.days + first_weekday).div_ceil(DAYS_PER_WEEK),
    }
}
