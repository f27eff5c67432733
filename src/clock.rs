//! Injectable "today" provider.
//!
//! All range and info entry points take an explicit reference date; callers
//! who want "now" read it from a clock exactly once per call, so every fact
//! derived in that call agrees even across a midnight boundary. Tests pin a
//! date with [`FixedClock`] instead of touching the real clock.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::SECS_PER_DAY;
use crate::{Date, ParseError};

/// Source of the current calendar date.
pub trait Clock {
    /// Returns today's date.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the clock reads an instant
    /// outside the supported year window.
    fn today(&self) -> Result<Date, ParseError>;
}

/// Reads the real system clock (UTC).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Result<Date, ParseError> {
        let seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            // Clock set before 1970: count backwards
            Err(err) => -i64::try_from(err.duration().as_secs()).unwrap_or(i64::MAX),
        };
        Date::from_day_number(seconds.div_euclid(SECS_PER_DAY))
    }
}

/// Always reports the same date; for deterministic tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Result<Date, ParseError> {
        Ok(self.0)
    }
}
