use serde::Serialize;

use crate::tables::{RangePreset, RangeUnit, WEEKDAYS, months_for_year};
use crate::{Date, ParseError};

/// Per-day annotation inside a [`DateRange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateLabel {
    /// Short display label, e.g. "15 March"
    pub label:          String,
    /// The day itself
    pub date:           Date,
    /// Full weekday name, e.g. "Friday"
    pub weekday_name:   &'static str,
    /// Three-letter weekday name, e.g. "Fri"
    pub weekday_abbrev: &'static str,
    /// Full month name, e.g. "March"
    pub month_name:     &'static str,
    /// Title-case month abbreviation, e.g. "Mar"
    pub month_abbrev:   &'static str,
    /// Canonical `YYYY-MM-DD` rendering
    pub iso_date:       String,
    /// True for Saturday and Sunday
    pub is_weekend:     bool,
}

/// An inclusive day-by-day span with one label per calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start_date:  Date,
    end_date:    Date,
    range_label: String,
    labels:      Vec<DateLabel>,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// End date precedes start date; bounds are never silently swapped.
    #[error("Invalid date range: end date ({end}) must be greater than or equal to start date ({start})")]
    InvalidRange { start: Date, end: Date },

    /// A trailing window of zero days or months was requested.
    #[error("Range span must cover at least 1 {unit}")]
    ZeroSpan { unit: RangeUnit },

    /// The preset names a unit no generator exists for.
    #[error("No range generator for preset unit '{unit}'")]
    UnsupportedPreset { unit: RangeUnit },

    /// A range bound could not be resolved to a supported date.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl DateRange {
    /// Returns the first day of the span
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the last day of the span
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the human label for the whole span
    pub fn range_label(&self) -> &str {
        &self.range_label
    }

    /// Returns the per-day labels in ascending date order
    pub fn labels(&self) -> &[DateLabel] {
        &self.labels
    }

    /// Number of calendar days covered (always `labels().len()`)
    pub fn day_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of Saturdays and Sundays in the span
    pub fn weekend_day_count(&self) -> usize {
        self.labels.iter().filter(|label| label.is_weekend).count()
    }

    /// Number of Monday-to-Friday days in the span
    pub fn week_day_count(&self) -> usize {
        self.labels.len() - self.weekend_day_count()
    }
}

/// Builds the annotation for a single day.
///
/// The month entry is looked up in a table built for the label date's own
/// year, so spans crossing a year boundary report each year's February
/// correctly.
pub fn build_label(date: Date) -> DateLabel {
    let weekday = WEEKDAYS[usize::from(date.weekday())];
    let months = months_for_year(date.year());
    let month = months[usize::from(date.month() - 1)];

    DateLabel {
        label: format!("{} {}", date.day(), month.name),
        date,
        weekday_name: weekday.name,
        weekday_abbrev: weekday.short_name,
        month_name: month.name,
        month_abbrev: month.abbreviation.title_case,
        iso_date: date.iso_date(),
        is_weekend: weekday.is_weekend(),
    }
}

/// Expands an explicit `[start, end]` span into a labeled range.
///
/// The span is inclusive on both ends; `start == end` yields exactly one
/// label. When no label is given the range is labeled `"{start}/{end}"`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` when `end < start`. The bounds are
/// never reordered on the caller's behalf.
pub fn custom_range(start: Date, end: Date, label: Option<&str>) -> Result<DateRange, RangeError> {
    let range_label = label.map_or_else(|| format!("{start}/{end}"), str::to_owned);
    expand(start, end, range_label)
}

/// Builds the trailing window of exactly `days` calendar days ending at
/// `reference` (inclusive).
///
/// # Errors
/// Returns `RangeError::ZeroSpan` for `days == 0`, or a `Parse` error when
/// the window's start falls before the supported year range.
pub fn last_n_days(days: u32, reference: Date, label: Option<&str>) -> Result<DateRange, RangeError> {
    if days == 0 {
        return Err(RangeError::ZeroSpan {
            unit: RangeUnit::Day,
        });
    }
    let start = reference.add_days(-i64::from(days - 1))?;
    let range_label = label.map_or_else(|| format!("Last {days} days"), str::to_owned);
    expand(start, reference, range_label)
}

/// Builds the trailing window ending at `reference` whose start is
/// `months - 1` whole months earlier, with the day of month clamped to the
/// target month's last valid day where needed.
///
/// # Errors
/// Returns `RangeError::ZeroSpan` for `months == 0`, or a `Parse` error
/// when the shift leaves the supported year range.
pub fn last_n_months(
    months: u32,
    reference: Date,
    label: Option<&str>,
) -> Result<DateRange, RangeError> {
    if months == 0 {
        return Err(RangeError::ZeroSpan {
            unit: RangeUnit::Month,
        });
    }
    let start = reference.months_back(months - 1)?;
    let range_label = label.map_or_else(|| format!("Last {months} months"), str::to_owned);
    expand(start, reference, range_label)
}

/// Builds the range described by a preset, defaulting the label to the
/// preset's own.
///
/// # Errors
/// Returns `RangeError::UnsupportedPreset` for the week and year units,
/// which exist in the preset list but have no generator.
pub fn preset_range(
    preset: &RangePreset,
    reference: Date,
    label: Option<&str>,
) -> Result<DateRange, RangeError> {
    let label = label.or(Some(preset.label));
    match preset.unit {
        RangeUnit::Day => last_n_days(preset.value, reference, label),
        RangeUnit::Month => last_n_months(preset.value, reference, label),
        RangeUnit::Week | RangeUnit::Year => Err(RangeError::UnsupportedPreset {
            unit: preset.unit,
        }),
    }
}

fn expand(start: Date, end: Date, range_label: String) -> Result<DateRange, RangeError> {
    if end < start {
        return Err(RangeError::InvalidRange { start, end });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let mut labels = Vec::with_capacity(start.days_until(&end) as usize + 1);
    let mut current = start;
    loop {
        labels.push(build_label(current));
        if current == end {
            break;
        }
        // Advance by calendar day, never by a fixed millisecond step
        current = current.add_days(1)?;
    }

    Ok(DateRange {
        start_date: start,
        end_date: end,
        range_label,
        labels,
    })
}
