//! Gregorian dates to day counts and back, for any integer year width.
//!
//! A [`Calendar`] is built once per year type and epoch. Its constructor
//! solves the biases that keep every intermediate of the conversion
//! non-negative and inside an unsigned working integer, or rejects the
//! configuration. After that, [`Calendar::from_epoch`] and
//! [`Calendar::to_epoch`] are a handful of multiplications, shifts and one
//! conditional, with no loops and no tables.
//!
//! ```
//! use eat_date::{Calendar, Date, Duration, Month, Weekday};
//!
//! let calendar = Calendar::<i16>::unix().unwrap();
//! let date = calendar.from_epoch(0);
//! assert_eq!(date, Date::new(1970, Month::January, 1));
//! assert_eq!(calendar.weekday(date), Weekday::Thursday);
//!
//! let later = calendar.add(date, Duration::new(1, 13, 32));
//! assert_eq!(later, Date::new(1972, Month::March, 4));
//! assert_eq!(calendar.to_epoch(later), 793);
//! ```

mod calendar;
mod computational;
mod consts;
mod duration;
mod engine;
mod int;
mod prelude;
mod span;
mod types;

pub use calendar::{Calendar, ConfigError};
pub use consts::*;
pub use duration::Duration;
pub use int::{WorkInt, YearInt};
pub use span::days_since;
pub use types::{Month, Weekday, days_in_month, is_leap};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A proleptic Gregorian calendar date.
///
/// Construction with [`Date::new`] is unchecked; conversions treat a day
/// that does not exist in its month as a broken precondition. Use
/// [`Date::try_new`] to validate input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Date<Y> {
    pub year: Y,
    pub month: Month,
    pub day: u8,
}

/// Error type for date construction and conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month number outside 1-12.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Weekday number outside 1-7.
    #[error("Invalid weekday: {0} (must be 1-{max})", max = DAYS_IN_WEEK)]
    InvalidWeekday(u8),

    /// Day that does not exist in its month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i128, month: u8, day: u8 },

    /// Epoch day outside the domain of the calendar.
    #[error("Epoch day {epoch_day} is outside {min}..={max}")]
    EpochDayOutOfRange { epoch_day: i128, min: i128, max: i128 },

    /// Year that the year type cannot hold.
    #[error("Year {0} is not representable")]
    YearOutOfRange(i128),

    /// Duration components overflowed the epoch day type.
    #[error("Duration arithmetic overflowed")]
    DurationOverflow,
}

impl<Y> Date<Y> {
    /// Creates a date without validating it.
    #[inline]
    pub const fn new(year: Y, month: Month, day: u8) -> Self {
        Self { year, month, day }
    }
}

impl<Y: YearInt> Date<Y> {
    /// Creates a date, validating the month number and the day of month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` or `DateError::InvalidDay`.
    pub fn try_new(year: Y, month: u8, day: u8) -> Result<Self, DateError> {
        let date = Self::new(year, Month::new(month)?, day);
        date.validate()?;
        Ok(date)
    }

    /// Whether the year of this date is a leap year
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        is_leap(self.year)
    }

    /// Number of days in the month of this date
    #[inline]
    pub fn days_in_month(&self) -> u8 {
        self.month.days(self.is_leap_year())
    }

    /// Whether the day exists in its month
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// 1-based day of the year
    pub fn day_of_year(&self) -> u16 {
        self.month.days_before(self.is_leap_year()) + u16::from(self.day)
    }

    pub(crate) fn validate(&self) -> Result<(), DateError> {
        if self.day < MIN_DAY || self.day > self.days_in_month() {
            return Err(DateError::InvalidDay {
                year: self.year.as_(),
                month: self.month.number(),
                day: self.day,
            });
        }
        Ok(())
    }
}

impl<Y: fmt::Display> fmt::Display for Date<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month.number(), self.day)
    }
}
