//! Pattern-based date formatting.
//!
//! A thin collaborator over the calendar tables; the core never depends on
//! it. Substitution is single-pass and longest-token-first, so the "M" in a
//! substituted month name like "May" is never re-expanded.

use crate::tables::{WEEKDAYS, months_for_year};
use crate::types::quarter_of;
use crate::Date;

/// Formats a date using the supported tokens:
///
/// | Token  | Meaning                         | Example   |
/// |--------|---------------------------------|-----------|
/// | `YYYY` | Full year                       | `2024`    |
/// | `YY`   | Two-digit year                  | `24`      |
/// | `MMMM` | Full month name                 | `March`   |
/// | `MMM`  | Short month name                | `Mar`     |
/// | `MM`   | Zero-padded month               | `03`      |
/// | `M`    | Month                           | `3`       |
/// | `DDDD` | Full weekday name               | `Friday`  |
/// | `DDD`  | Short weekday name              | `Fri`     |
/// | `DD`   | Zero-padded day of month        | `15`      |
/// | `D`    | Day of month                    | `15`      |
/// | `QQ`   | Zero-padded quarter             | `01`      |
/// | `Q`    | Quarter                         | `1`       |
/// | `WW`   | Zero-padded ISO week            | `11`      |
/// | `W`    | ISO week                        | `11`      |
///
/// Any other text in the pattern passes through unchanged.
pub fn format_date(date: Date, pattern: &str) -> String {
    let months = months_for_year(date.year());
    let month = months[usize::from(date.month() - 1)];
    let weekday = WEEKDAYS[usize::from(date.weekday())];
    let quarter = quarter_of(date.month());
    let week = date.iso_week_number();

    // Longest tokens first so shorter ones never clip them
    let tokens: [(&str, String); 14] = [
        ("YYYY", format!("{:04}", date.year())),
        ("MMMM", month.name.to_owned()),
        ("DDDD", weekday.name.to_owned()),
        ("MMM", month.abbreviation.title_case.to_owned()),
        ("DDD", weekday.short_name.to_owned()),
        ("YY", format!("{:02}", date.year() % 100)),
        ("MM", format!("{:02}", date.month())),
        ("DD", format!("{:02}", date.day())),
        ("QQ", format!("{quarter:02}")),
        ("WW", format!("{week:02}")),
        ("M", date.month().to_string()),
        ("D", date.day().to_string()),
        ("Q", quarter.to_string()),
        ("W", week.to_string()),
    ];

    let mut output = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while !rest.is_empty() {
        if let Some((token, value)) = tokens.iter().find(|(token, _)| rest.starts_with(token)) {
            output.push_str(value);
            rest = &rest[token.len()..];
        } else if let Some(ch) = rest.chars().next() {
            output.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }
    output
}
