//! Static calendar tables: month metadata, Sunday-first weekdays, and the
//! built-in range presets.
//!
//! Month entries are constructed fresh for the queried year so February's
//! length always reflects that year's leap-year status; no shared table is
//! ever mutated in place.

use serde::Serialize;

use crate::consts::{MAX_MONTH, SATURDAY, SUNDAY};
use crate::prelude::*;
use crate::types::{days_in_month, quarter_of};

/// The three fixed abbreviation casings of a month name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MonthAbbreviation {
    /// Title case, e.g. "Jan"
    pub title_case: &'static str,
    /// Upper case, e.g. "JAN"
    pub upper_case: &'static str,
    /// Lower case, e.g. "jan"
    pub lower_case: &'static str,
}

/// Calendar facts for one month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarMonth {
    /// 1-based month ordinal (1=January .. 12=December)
    pub ordinal:      u8,
    /// Full English name
    pub name:         &'static str,
    /// Fixed abbreviation casings
    pub abbreviation: MonthAbbreviation,
    /// Day count for the queried year (February is leap-year aware)
    pub days:         u8,
    /// Calendar quarter (1..=4)
    pub quarter:      u8,
}

/// One day of the week, Sunday-first (ordinal 0=Sunday .. 6=Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Weekday {
    pub ordinal:    u8,
    pub name:       &'static str,
    pub short_name: &'static str,
}

impl Weekday {
    /// True for Saturday and Sunday.
    pub const fn is_weekend(&self) -> bool {
        self.ordinal == SUNDAY || self.ordinal == SATURDAY
    }
}

/// Span unit a range preset is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum RangeUnit {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

/// A named trailing-window preset, e.g. "Last 7 days".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RangePreset {
    pub label: &'static str,
    pub value: u32,
    pub unit:  RangeUnit,
}

struct MonthText {
    name:  &'static str,
    title: &'static str,
    upper: &'static str,
    lower: &'static str,
}

const MONTH_TEXT: [MonthText; MAX_MONTH as usize] = [
    MonthText {
        name:  "January",
        title: "Jan",
        upper: "JAN",
        lower: "jan",
    },
    MonthText {
        name:  "February",
        title: "Feb",
        upper: "FEB",
        lower: "feb",
    },
    MonthText {
        name:  "March",
        title: "Mar",
        upper: "MAR",
        lower: "mar",
    },
    MonthText {
        name:  "April",
        title: "Apr",
        upper: "APR",
        lower: "apr",
    },
    MonthText {
        name:  "May",
        title: "May",
        upper: "MAY",
        lower: "may",
    },
    MonthText {
        name:  "June",
        title: "Jun",
        upper: "JUN",
        lower: "jun",
    },
    MonthText {
        name:  "July",
        title: "Jul",
        upper: "JUL",
        lower: "jul",
    },
    MonthText {
        name:  "August",
        title: "Aug",
        upper: "AUG",
        lower: "aug",
    },
    MonthText {
        name:  "September",
        title: "Sep",
        upper: "SEP",
        lower: "sep",
    },
    MonthText {
        name:  "October",
        title: "Oct",
        upper: "OCT",
        lower: "oct",
    },
    MonthText {
        name:  "November",
        title: "Nov",
        upper: "NOV",
        lower: "nov",
    },
    MonthText {
        name:  "December",
        title: "Dec",
        upper: "DEC",
        lower: "dec",
    },
];

/// The seven weekdays, Sunday-first, matching native weekday numbering.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday {
        ordinal:    0,
        name:       "Sunday",
        short_name: "Sun",
    },
    Weekday {
        ordinal:    1,
        name:       "Monday",
        short_name: "Mon",
    },
    Weekday {
        ordinal:    2,
        name:       "Tuesday",
        short_name: "Tue",
    },
    Weekday {
        ordinal:    3,
        name:       "Wednesday",
        short_name: "Wed",
    },
    Weekday {
        ordinal:    4,
        name:       "Thursday",
        short_name: "Thu",
    },
    Weekday {
        ordinal:    5,
        name:       "Friday",
        short_name: "Fri",
    },
    Weekday {
        ordinal:    6,
        name:       "Saturday",
        short_name: "Sat",
    },
];

/// Built-in trailing-window presets for pickers.
pub const RANGE_PRESETS: [RangePreset; 5] = [
    RangePreset {
        label: "Last 7 days",
        value: 7,
        unit:  RangeUnit::Day,
    },
    RangePreset {
        label: "Last 30 days",
        value: 30,
        unit:  RangeUnit::Day,
    },
    RangePreset {
        label: "Last 3 months",
        value: 3,
        unit:  RangeUnit::Month,
    },
    RangePreset {
        label: "Last 6 months",
        value: 6,
        unit:  RangeUnit::Month,
    },
    RangePreset {
        label: "Last 12 months",
        value: 12,
        unit:  RangeUnit::Month,
    },
];

/// Builds the 12 month entries for the given year.
///
/// A fresh array is returned on every call; February's day count is derived
/// from the argument year, so interleaved queries for different years never
/// see stale leap-year data.
pub fn months_for_year(year: u16) -> [CalendarMonth; MAX_MONTH as usize] {
    std::array::from_fn(|index| {
        #[allow(clippy::cast_possible_truncation)]
        let ordinal = index as u8 + 1;
        let text = &MONTH_TEXT[index];
        CalendarMonth {
            ordinal,
            name: text.name,
            abbreviation: MonthAbbreviation {
                title_case: text.title,
                upper_case: text.upper,
                lower_case: text.lower,
            },
            days: days_in_month(year, ordinal),
            quarter: quarter_of(ordinal),
        }
    })
}

/// Returns the Sunday-first weekday table.
pub const fn weekdays() -> &'static [Weekday; 7] {
    &WEEKDAYS
}

/// Returns the built-in range presets, in display order.
pub const fn range_presets() -> &'static [RangePreset; 5] {
    &RANGE_PRESETS
}
