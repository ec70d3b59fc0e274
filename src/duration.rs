use crate::consts::{MAX_MONTH, MIN_DAY};
use crate::int::{WorkInt, YearInt};
use crate::prelude::*;
use crate::types::Month;
use crate::{Calendar, Date, DateError};
use num_traits::{AsPrimitive, CheckedAdd, Euclid, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use std::ops::Neg;

/// A calendar offset of years, months and days.
///
/// Each component is signed and independent: this is not a length of time,
/// since the number of days a month adds depends on where it is added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
pub struct Duration<E> {
    pub year: E,
    pub month: E,
    pub day: E,
}

impl<E> Duration<E> {
    #[inline]
    pub const fn new(year: E, month: E, day: E) -> Self {
        Self { year, month, day }
    }
}

impl<E: Zero> Duration<E> {
    pub fn years(year: E) -> Self {
        Self::new(year, E::zero(), E::zero())
    }

    pub fn months(month: E) -> Self {
        Self::new(E::zero(), month, E::zero())
    }

    pub fn days(day: E) -> Self {
        Self::new(E::zero(), E::zero(), day)
    }
}

impl<E: Neg<Output = E>> Neg for Duration<E> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.year, -self.month, -self.day)
    }
}

impl<Y: YearInt, W: WorkInt<Y, Y::EpochDay>> Calendar<Y, W> {
    /// Adds `duration` to `date`.
    ///
    /// Months carry into years with floor division, so a negative month
    /// count borrows from the year. Days are added last, on top of the
    /// first of the resulting month.
    ///
    /// # Panics
    /// If `date` is not valid or the result is outside the calendar.
    pub fn add(&self, date: Date<Y>, duration: Duration<Y::EpochDay>) -> Date<Y> {
        match self.checked_add(date, duration) {
            Ok(sum) => sum,
            Err(err) => panic!("cannot add {duration:?} to {date}: {err}"),
        }
    }

    /// Adds `duration` to `date`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` for an invalid `date`,
    /// `DateError::YearOutOfRange` or `DateError::EpochDayOutOfRange` if the
    /// result cannot be represented, and `DateError::DurationOverflow` if
    /// the components overflow the epoch day type.
    pub fn checked_add(
        &self,
        date: Date<Y>,
        duration: Duration<Y::EpochDay>,
    ) -> Result<Date<Y>, DateError> {
        date.validate()?;

        let months_per_year = <Y::EpochDay as From<u8>>::from(MAX_MONTH);
        // zero-based month, may be negative or exceed a year
        let month_index = duration
            .month
            .checked_add(&<Y::EpochDay as From<u8>>::from(date.month.number() - 1))
            .ok_or(DateError::DurationOverflow)?;

        let year = <Y::EpochDay as From<Y>>::from(date.year)
            .checked_add(&duration.year)
            .and_then(|year| year.checked_add(&month_index.div_euclid(&months_per_year)))
            .ok_or(DateError::DurationOverflow)?;
        let year =
            num_traits::cast::<_, Y>(year).ok_or_else(|| DateError::YearOutOfRange(year.as_()))?;

        let month = month_index
            .rem_euclid(&months_per_year)
            .to_u8()
            .ok_or(DateError::DurationOverflow)?;
        let first = self.to_epoch(Date::new(year, Month::new(month + 1)?, MIN_DAY));

        let epoch_day = duration
            .day
            .checked_add(&<Y::EpochDay as From<u8>>::from(date.day - MIN_DAY))
            .and_then(|offset| first.checked_add(&offset))
            .ok_or(DateError::DurationOverflow)?;
        self.checked_from_epoch(epoch_day)
    }
}
