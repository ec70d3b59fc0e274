use crate::DateError;
use crate::consts::{DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY_DAYS_LEAP, MAX_MONTH};
use crate::int::YearInt;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A month of the Gregorian year, January = 1 through December = 12.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Creates a Month from its number, validating that it's in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        if value == 0 || value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the month number, January being 1
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Number of days in this month
    #[inline]
    pub const fn days(self, is_leap: bool) -> u8 {
        if is_leap && matches!(self, Self::February) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self as usize]
        }
    }

    /// Number of days in the months preceding this one in a January-based year
    pub const fn days_before(self, is_leap: bool) -> u16 {
        let mut total = 0;
        let mut index = 0;
        while index + 1 < self as usize {
            total += Self::ALL[index].days(is_leap) as u16;
            index += 1;
        }
        total
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

/// A day of the week, Monday = 1 through Sunday = 7 (ISO 8601).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Monday = 1,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays starting from Monday
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Creates a Weekday from its ISO number, Monday being 1
    ///
    /// # Errors
    /// Returns `DateError::InvalidWeekday` if the value is 0 or > 7.
    pub const fn new(value: u8) -> Result<Self, DateError> {
        if value == 0 || value > DAYS_IN_WEEK {
            return Err(DateError::InvalidWeekday(value));
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the ISO weekday number, Monday being 1
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Zero-based index, must be below 7.
    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        debug_assert!(index < DAYS_IN_WEEK as u32);
        Self::ALL[index as usize]
    }
}

impl TryFrom<u8> for Weekday {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.number()
    }
}

// Helper functions

/// Whether `year` is a leap year of the proleptic Gregorian calendar.
///
/// Uses the reduced form of the rule: a year that is not a multiple of 25
/// is leap when it is a multiple of 4; a multiple of 25 is leap when it is a
/// multiple of 16. Every multiple of 100 is a multiple of 25, and of those
/// only the multiples of 400 are multiples of 16.
#[inline]
pub fn is_leap<Y: YearInt>(year: Y) -> bool {
    year.is_leap()
}

/// Number of days in `month` of `year`.
#[inline]
pub fn days_in_month<Y: YearInt>(year: Y, month: Month) -> u8 {
    month.days(is_leap(year))
}
