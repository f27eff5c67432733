/// Earliest supported year (inclusive)
pub const MIN_YEAR: u16 = 1900;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Days per week
pub const DAYS_PER_WEEK: u8 = 7;
/// Months per quarter
pub(crate) const MONTHS_PER_QUARTER: u8 = 3;
/// Months per year, for month-index arithmetic
pub(crate) const MONTHS_PER_YEAR: i64 = 12;

/// Weekday ordinal for Sunday (weekdays are Sunday-first, 0..=6)
pub const SUNDAY: u8 = 0;
/// Weekday ordinal for Thursday, anchor of ISO week numbering
pub(crate) const THURSDAY: u8 = 4;
/// Weekday ordinal for Saturday
pub const SATURDAY: u8 = 6;

/// Milliseconds per day, for timestamp conversion
pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;
/// Seconds per day, for system clock conversion
pub(crate) const SECS_PER_DAY: i64 = 86_400;

/// Offset between day 0 of the Gregorian era scheme (0000-03-01)
/// and the Unix epoch (1970-01-01)
pub(crate) const EPOCH_ERA_OFFSET: i64 = 719_468;
/// Days in one 400-year Gregorian era
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
