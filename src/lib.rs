mod clock;
mod consts;
mod format;
mod info;
mod prelude;
mod range;
mod report;
mod tables;
#[cfg(test)]
mod test_utils;
mod types;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use format::format_date;
pub use info::{DateInfo, date_info, previous_month_info};
pub use range::{
    DateLabel, DateRange, RangeError, build_label, custom_range, last_n_days, last_n_months,
    preset_range,
};
pub use report::{Report, ReportRequest, build_report};
pub use tables::{
    CalendarMonth, MonthAbbreviation, RangePreset, RangeUnit, Weekday, months_for_year,
    range_presets, weekdays,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year, quarter_of};

use crate::consts::{
    DATE_SEPARATOR, DAYS_PER_ERA, DAYS_PER_WEEK, EPOCH_ERA_OFFSET, JANUARY, MAX_YEAR,
    MILLIS_PER_DAY, MIN_DAY, MIN_YEAR, MONTHS_PER_YEAR, SUNDAY, THURSDAY,
};
use crate::prelude::*;
use std::str::FromStr;

/// A civil calendar date in the supported window (1900-01-01 to 9999-12-31).
///
/// All components are validated at construction, so a `Date` always denotes
/// a real day on the proleptic Gregorian calendar. Arithmetic steps by whole
/// calendar days, never by fixed millisecond increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct Date {
    year:  types::Year,
    month: types::Month,
    day:   types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl Date {
    /// Creates a date from already-validated components.
    pub const fn new(year: types::Year, month: types::Month, day: types::Day) -> Self {
        Self { year, month, day }
    }

    /// Creates a date from raw components, validating each of them.
    ///
    /// # Errors
    /// Returns the matching `ParseError` variant for the first component
    /// that fails validation. February days are checked against the
    /// leap-year-correct count for the given year.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_v = types::Year::new(year)?;
        let month_v = types::Month::new(month)?;
        let day_v = types::Day::new(day, year, month)?;
        Ok(Self {
            year:  year_v,
            month: month_v,
            day:   day_v,
        })
    }

    /// Returns the year (1900..=9999)
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month ordinal (1..=12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1..=31)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> types::Day {
        self.day
    }

    /// Canonical `YYYY-MM-DD` rendering, independent of locale.
    pub fn iso_date(&self) -> String {
        self.to_string()
    }

    /// Number of whole days since the Unix epoch (1970-01-01 is day 0).
    pub fn day_number(&self) -> i64 {
        days_from_civil(
            i64::from(self.year.get()),
            self.month.get(),
            self.day.get(),
        )
    }

    /// Reconstructs a date from a day number (days since the Unix epoch).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the day number falls outside
    /// the supported year window.
    pub fn from_day_number(days: i64) -> Result<Self, ParseError> {
        let (year, month, day) = civil_from_days(days);
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            return Err(ParseError::InvalidYear(
                year.clamp(0, i64::from(u16::MAX)) as u16
            ));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self::from_ymd(year as u16, month, day)
    }

    /// Interprets a Unix timestamp in milliseconds as a UTC calendar date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the instant falls outside the
    /// supported year window.
    pub fn from_unix_millis(millis: i64) -> Result<Self, ParseError> {
        Self::from_day_number(millis.div_euclid(MILLIS_PER_DAY))
    }

    /// Adds (or subtracts, for negative `days`) whole calendar days.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the result leaves the supported
    /// year window.
    pub fn add_days(&self, days: i64) -> Result<Self, ParseError> {
        Self::from_day_number(self.day_number() + days)
    }

    /// Signed whole days from `self` to `other` (positive when `other` is later).
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Returns the next calendar day, or `None` past the last supported date.
    pub fn next(self) -> Option<Self> {
        next_day(self.year.get(), self.month.get(), self.day.get()).and_then(|(y, m, d)| {
            Self::from_ymd(y, m, d).ok()
        })
    }

    /// Weekday ordinal, Sunday-first: 0=Sunday .. 6=Saturday.
    pub fn weekday(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (self.day_number() + i64::from(THURSDAY)).rem_euclid(i64::from(DAYS_PER_WEEK)) as u8
        }
    }

    /// ISO-8601 week-of-year (1..=53).
    ///
    /// Shifts the date to the Thursday of its week, then counts weeks from
    /// January 1 of that Thursday's year. Week 1 is the week containing the
    /// year's first Thursday.
    pub fn iso_week_number(&self) -> u8 {
        let day_number = self.day_number();
        let weekday = self.weekday();
        // ISO weekdays run Monday=1 .. Sunday=7
        let iso_weekday = if weekday == SUNDAY { 7 } else { i64::from(weekday) };
        let thursday = day_number + (i64::from(THURSDAY) - iso_weekday);
        let (iso_year, _, _) = civil_from_days(thursday);
        let jan_first = days_from_civil(iso_year, JANUARY, MIN_DAY);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            ((thursday - jan_first) / i64::from(DAYS_PER_WEEK) + 1) as u8
        }
    }

    /// First day of this date's month.
    pub const fn first_of_month(&self) -> Self {
        Self {
            year:  self.year,
            month: self.month,
            day:   types::Day::MIN,
        }
    }

    /// Last day of this date's month, leap-year aware.
    pub const fn last_of_month(&self) -> Self {
        let length = days_in_month(self.year.get(), self.month.get());
        Self {
            year:  self.year,
            month: self.month,
            day:   types::Day::from_month_length(length),
        }
    }

    /// Shifts the date back by `months` whole months, keeping the day of
    /// month where it exists and clamping to the target month's last valid
    /// day otherwise (e.g. March 31 back one month lands on February 29
    /// in a leap year, February 28 otherwise).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` when the shift leaves the
    /// supported year window.
    pub fn months_back(&self, months: u32) -> Result<Self, ParseError> {
        let month_index = i64::from(self.year.get()) * MONTHS_PER_YEAR
            + i64::from(self.month.get())
            - 1
            - i64::from(months);
        let target_year = month_index.div_euclid(MONTHS_PER_YEAR);
        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&target_year) {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            return Err(ParseError::InvalidYear(
                target_year.clamp(0, i64::from(u16::MAX)) as u16,
            ));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let target_year = target_year as u16;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let target_month = (month_index.rem_euclid(MONTHS_PER_YEAR) + 1) as u8;
        let clamped_day = self
            .day
            .get()
            .min(days_in_month(target_year, target_month));
        Self::from_ymd(target_year, target_month, clamped_day)
    }
}

// --- helpers for bounds / day stepping ---
fn next_month(year: u16, month: u8) -> Option<(u16, u8)> {
    debug_assert!(month != 0 && month <= MAX_MONTH);
    if month == DECEMBER {
        // Check both overflow and our MAX_YEAR limit
        if year >= MAX_YEAR {
            None
        } else {
            Some((year + 1, JANUARY))
        }
    } else {
        Some((year, month + 1))
    }
}

fn next_day(year: u16, month: u8, day: u8) -> Option<(u16, u8, u8)> {
    let max = days_in_month(year, month);
    if day < max {
        Some((year, month, day + 1))
    } else {
        // roll to first of next month (respects MAX_YEAR limit)
        next_month(year, month).map(|(ny, nm)| (ny, nm, MIN_DAY))
    }
}

// Proleptic Gregorian <-> day number conversions, after Howard Hinnant's
// civil calendar algorithms. Day 0 is 1970-01-01.

fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = (if year >= 0 { year } else { year - 399 }) / 400;
    let year_of_era = year - era * 400;
    let month = i64::from(month);
    let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5
        + i64::from(day)
        - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_ERA_OFFSET
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn civil_from_days(days: i64) -> (i64, u8, u8) {
    let shifted = days + EPOCH_ERA_OFFSET;
    let era = (if shifted >= 0 {
        shifted
    } else {
        shifted - (DAYS_PER_ERA - 1)
    }) / DAYS_PER_ERA;
    let day_of_era = shifted - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let year = year_of_era + era * 400;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_shifted = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * month_shifted + 2) / 5 + 1) as u8;
    let month = if month_shifted < 10 {
        month_shifted + 3
    } else {
        month_shifted - 9
    } as u8;
    (if month <= 2 { year + 1 } else { year }, month, day)
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // Strict ISO shape only: YYYY-MM-DD, parsed component-wise so a
        // day like April 31 is rejected instead of rolled into May.
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }
        if parts[0].len() != 4 || parts[1].len() != 2 || parts[2].len() != 2 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let year = Self::parse_u16(parts[0])?;
        let month = Self::parse_u8(parts[1])?;
        let day = Self::parse_u8(parts[2])?;

        Self::from_ymd(year, month, day)
    }
}

impl Date {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::d;

    #[test]
    fn test_parse_iso_date() {
        let date = "1991-08-15".parse::<Date>().unwrap();
        assert_eq!(date.year(), 1991);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_parse_with_whitespace() {
        let date = " 1991-08-15 ".parse::<Date>().unwrap();
        assert_eq!(date, d(1991, 8, 15));
    }

    #[test]
    fn test_parse_empty() {
        let result = "".parse::<Date>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));

        let result = "   ".parse::<Date>();
        assert!(matches!(result, Err(ParseError::EmptyInput)));
    }

    #[test]
    fn test_parse_rejects_loose_shapes() {
        // Missing zero padding
        assert!("2024-3-05".parse::<Date>().is_err());
        assert!("2024-03-5".parse::<Date>().is_err());
        // Wrong separators or part counts
        assert!("2024/03/05".parse::<Date>().is_err());
        assert!("2024-03".parse::<Date>().is_err());
        assert!("2024-03-05-01".parse::<Date>().is_err());
        // Month-first order
        assert!("03-05-2024".parse::<Date>().is_err());
    }

    #[test]
    fn test_parse_bad_tokens() {
        let result = "199A-08-15".parse::<Date>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "1991-XX-15".parse::<Date>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "1991-08-XX".parse::<Date>();
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));

        let result = "invalid-date".parse::<Date>();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_invalid_components() {
        let result = "2024-13-01".parse::<Date>();
        assert!(matches!(result, Err(ParseError::InvalidMonth(13))));

        let result = "2024-04-31".parse::<Date>();
        assert!(matches!(result, Err(ParseError::InvalidDay { .. })));

        let result = "1899-12-31".parse::<Date>();
        assert!(matches!(result, Err(ParseError::InvalidYear(1899))));
    }

    #[test]
    fn test_leap_year_parsing() {
        assert!("2024-02-29".parse::<Date>().is_ok());
        assert!("2023-02-29".parse::<Date>().is_err());
        assert!("2000-02-29".parse::<Date>().is_ok());
        assert!("2100-02-29".parse::<Date>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(d(1991, 8, 15).to_string(), "1991-08-15");
        assert_eq!(d(2024, 3, 5).to_string(), "2024-03-05");
        assert_eq!(d(2024, 3, 5).iso_date(), "2024-03-05");
    }

    #[test]
    fn test_ordering() {
        assert!(d(2024, 3, 14) < d(2024, 3, 15));
        assert!(d(2024, 2, 29) < d(2024, 3, 1));
        assert!(d(2023, 12, 31) < d(2024, 1, 1));
        assert_eq!(d(2024, 3, 15), d(2024, 3, 15));
    }

    #[test]
    fn test_day_number_round_trip() {
        let cases = [
            d(1900, 1, 1),
            d(1970, 1, 1),
            d(2000, 2, 29),
            d(2024, 3, 15),
            d(9999, 12, 31),
        ];
        for date in cases {
            let restored = Date::from_day_number(date.day_number()).unwrap();
            assert_eq!(date, restored, "round trip failed for {date}");
        }
    }

    #[test]
    fn test_day_number_epoch() {
        assert_eq!(d(1970, 1, 1).day_number(), 0);
        assert_eq!(d(1970, 1, 2).day_number(), 1);
        assert_eq!(d(1969, 12, 31).day_number(), -1);
    }

    #[test]
    fn test_from_day_number_out_of_window() {
        // Day before 1900-01-01
        let first = d(1900, 1, 1).day_number();
        assert!(Date::from_day_number(first - 1).is_err());
        // Day after 9999-12-31
        let last = d(9999, 12, 31).day_number();
        assert!(Date::from_day_number(last + 1).is_err());
    }

    #[test]
    fn test_from_unix_millis() {
        // 2024-03-15T12:30:00Z
        let date = Date::from_unix_millis(1_710_505_800_000).unwrap();
        assert_eq!(date, d(2024, 3, 15));

        // Midnight exactly
        let date = Date::from_unix_millis(0).unwrap();
        assert_eq!(date, d(1970, 1, 1));

        // Negative (before epoch) still floors to the previous day
        let date = Date::from_unix_millis(-1).unwrap();
        assert_eq!(date, d(1969, 12, 31));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(d(2024, 3, 15).add_days(1).unwrap(), d(2024, 3, 16));
        assert_eq!(d(2024, 2, 28).add_days(1).unwrap(), d(2024, 2, 29));
        assert_eq!(d(2023, 2, 28).add_days(1).unwrap(), d(2023, 3, 1));
        assert_eq!(d(2024, 1, 1).add_days(-1).unwrap(), d(2023, 12, 31));
        assert_eq!(d(2024, 3, 15).add_days(-14).unwrap(), d(2024, 3, 1));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(d(2024, 3, 1).days_until(&d(2024, 3, 15)), 14);
        assert_eq!(d(2024, 3, 15).days_until(&d(2024, 3, 1)), -14);
        assert_eq!(d(2024, 1, 1).days_until(&d(2024, 12, 31)), 365);
        assert_eq!(d(2023, 1, 1).days_until(&d(2023, 12, 31)), 364);
    }

    #[test]
    fn test_next_day() {
        assert_eq!(d(2024, 3, 15).next(), Some(d(2024, 3, 16)));
        assert_eq!(d(2024, 1, 31).next(), Some(d(2024, 2, 1)));
        assert_eq!(d(2024, 2, 29).next(), Some(d(2024, 3, 1)));
        assert_eq!(d(2023, 12, 31).next(), Some(d(2024, 1, 1)));
        assert_eq!(d(9999, 12, 31).next(), None);
    }

    #[test]
    fn test_weekday() {
        struct TestCase {
            date:    Date,
            weekday: u8,
        }

        let cases = [
            TestCase {
                date:    d(2024, 3, 15),
                weekday: 5, // Friday
            },
            TestCase {
                date:    d(2024, 3, 16),
                weekday: 6, // Saturday
            },
            TestCase {
                date:    d(2024, 3, 17),
                weekday: 0, // Sunday
            },
            TestCase {
                date:    d(1970, 1, 1),
                weekday: 4, // Thursday
            },
            TestCase {
                date:    d(1900, 1, 1),
                weekday: 1, // Monday
            },
            TestCase {
                date:    d(2000, 1, 1),
                weekday: 6, // Saturday
            },
        ];

        for case in &cases {
            assert_eq!(
                case.date.weekday(),
                case.weekday,
                "wrong weekday for {}",
                case.date
            );
        }
    }

    #[test]
    fn test_iso_week_number() {
        // Week 1 contains the year's first Thursday
        assert_eq!(d(2024, 1, 1).iso_week_number(), 1); // Monday
        assert_eq!(d(2024, 1, 7).iso_week_number(), 1); // Sunday of week 1
        assert_eq!(d(2024, 1, 8).iso_week_number(), 2);
        // 2023-01-01 is a Sunday, part of 2022's week 52
        assert_eq!(d(2023, 1, 1).iso_week_number(), 52);
        assert_eq!(d(2023, 1, 2).iso_week_number(), 1);
        // 2021-01-01 is a Friday, part of 2020's week 53
        assert_eq!(d(2021, 1, 1).iso_week_number(), 53);
        // Mid-year sanity
        assert_eq!(d(2024, 3, 15).iso_week_number(), 11);
        // Year-end of a long year
        assert_eq!(d(2020, 12, 31).iso_week_number(), 53);
    }

    #[test]
    fn test_first_and_last_of_month() {
        assert_eq!(d(2024, 3, 15).first_of_month(), d(2024, 3, 1));
        assert_eq!(d(2024, 3, 15).last_of_month(), d(2024, 3, 31));
        assert_eq!(d(2024, 2, 10).last_of_month(), d(2024, 2, 29));
        assert_eq!(d(2023, 2, 10).last_of_month(), d(2023, 2, 28));
        assert_eq!(d(2024, 4, 1).last_of_month(), d(2024, 4, 30));
    }

    #[test]
    fn test_months_back_simple() {
        assert_eq!(d(2024, 3, 15).months_back(0).unwrap(), d(2024, 3, 15));
        assert_eq!(d(2024, 3, 15).months_back(1).unwrap(), d(2024, 2, 15));
        assert_eq!(d(2024, 3, 15).months_back(2).unwrap(), d(2024, 1, 15));
    }

    #[test]
    fn test_months_back_year_boundary() {
        assert_eq!(d(2024, 1, 15).months_back(1).unwrap(), d(2023, 12, 15));
        assert_eq!(d(2024, 2, 15).months_back(14).unwrap(), d(2022, 12, 15));
    }

    #[test]
    fn test_months_back_clamps_to_shorter_month() {
        // March 31 back one month clamps to February's length
        assert_eq!(d(2024, 3, 31).months_back(1).unwrap(), d(2024, 2, 29));
        assert_eq!(d(2023, 3, 31).months_back(1).unwrap(), d(2023, 2, 28));
        // May 31 back one month clamps to April 30
        assert_eq!(d(2023, 5, 31).months_back(1).unwrap(), d(2023, 4, 30));
    }

    #[test]
    fn test_months_back_below_window() {
        let result = d(1900, 3, 1).months_back(3);
        assert!(matches!(result, Err(ParseError::InvalidYear(_))));
    }

    #[test]
    fn test_serde_string_format() {
        let date = d(2024, 3, 15);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-03-15""#);

        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }

    #[test]
    fn test_serde_validation() {
        // Impossible day is rejected, not rolled over
        let result: Result<Date, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(result.is_err());

        let result: Result<Date, _> = serde_json::from_str(r#""10000-01-01""#);
        assert!(result.is_err());

        let result: Result<Date, _> = serde_json::from_str(r#""2024-02-29""#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_constants() {
        assert_eq!(MIN_YEAR, 1900);
        assert_eq!(MAX_YEAR, 9999);
    }
}
