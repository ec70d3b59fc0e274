//! The Euclidean affine transforms between epoch days and dates.
//!
//! Every division below is either by a constant the working integer can
//! hold, or a multiply-and-shift whose exactness only depends on its input
//! staying below one era, which holds for every `N` by construction.
//!
//! Ref: Neri & Schneider, "Euclidean affine functions and their application
//! to calendar algorithms" (2022).

use crate::computational::ComputationalDate;
use crate::consts::{
    DAYS_IN_ERA, DAYS_IN_QUAD, DAYS_IN_WEEK, JANUARY_DAY_OF_YEAR, MONTH_INTERCEPT,
    MONTH_MULTIPLIER, MONTH_STAR_INTERCEPT, MONTH_STAR_MULTIPLIER, YEAR_OF_CENTURY_MULTIPLIER,
};
use crate::int::{WorkInt, YearInt};
use crate::types::Weekday;
use crate::{Calendar, Date, DateError};
use num_traits::AsPrimitive;

impl<Y: YearInt, W: WorkInt<Y, Y::EpochDay>> Calendar<Y, W> {
    /// Converts an epoch day to a date.
    ///
    /// # Panics
    /// If `epoch_day` is outside `min_epoch_day()..=max_epoch_day()`.
    #[inline]
    pub fn from_epoch(&self, epoch_day: Y::EpochDay) -> Date<Y> {
        assert!(
            self.contains_epoch_day(epoch_day),
            "epoch day {epoch_day} is outside {}..={}",
            self.min_epoch_day(),
            self.max_epoch_day(),
        );
        self.date_from_days(self.biased(epoch_day))
    }

    /// Converts an epoch day to a date.
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` if `epoch_day` is outside
    /// `min_epoch_day()..=max_epoch_day()`.
    pub fn checked_from_epoch(&self, epoch_day: Y::EpochDay) -> Result<Date<Y>, DateError> {
        if !self.contains_epoch_day(epoch_day) {
            return Err(DateError::EpochDayOutOfRange {
                epoch_day: epoch_day.as_(),
                min: self.min_epoch_day().as_(),
                max: self.max_epoch_day().as_(),
            });
        }
        Ok(self.date_from_days(self.biased(epoch_day)))
    }

    /// Converts a date to its epoch day.
    ///
    /// # Panics
    /// If the day does not exist in its month.
    #[inline]
    pub fn to_epoch(&self, date: Date<Y>) -> Y::EpochDay {
        if let Err(err) = date.validate() {
            panic!("{err}");
        }
        self.days_from_date(date)
            .wrapping_sub(&self.day_bias)
            .to_epoch_day()
    }

    /// Converts a date to its epoch day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in its month.
    pub fn checked_to_epoch(&self, date: Date<Y>) -> Result<Y::EpochDay, DateError> {
        date.validate()?;
        Ok(self
            .days_from_date(date)
            .wrapping_sub(&self.day_bias)
            .to_epoch_day())
    }

    /// Day of the week of `date`.
    ///
    /// # Panics
    /// If the day does not exist in its month.
    pub fn weekday(&self, date: Date<Y>) -> Weekday {
        if let Err(err) = date.validate() {
            panic!("{err}");
        }
        self.weekday_from_days(self.days_from_date(date))
    }

    /// Day of the week of `date`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in its month.
    pub fn checked_weekday(&self, date: Date<Y>) -> Result<Weekday, DateError> {
        date.validate()?;
        Ok(self.weekday_from_days(self.days_from_date(date)))
    }

    /// Day of the week of an epoch day.
    ///
    /// # Panics
    /// If `epoch_day` is outside `min_epoch_day()..=max_epoch_day()`.
    pub fn weekday_of_epoch_day(&self, epoch_day: Y::EpochDay) -> Weekday {
        assert!(
            self.contains_epoch_day(epoch_day),
            "epoch day {epoch_day} is outside {}..={}",
            self.min_epoch_day(),
            self.max_epoch_day(),
        );
        self.weekday_from_days(self.biased(epoch_day))
    }

    /// `N`, the epoch day shifted by `K`. Non-negative for every valid day.
    #[inline(always)]
    fn biased(&self, epoch_day: Y::EpochDay) -> W {
        W::from_epoch_day(epoch_day).wrapping_add(&self.day_bias)
    }

    #[inline(always)]
    fn weekday_from_days(&self, n: W) -> Weekday {
        let week = u32::from(DAYS_IN_WEEK);
        let index = (n % W::from_u32(week)).low_u32() + self.weekday_bias;
        Weekday::from_index(index % week)
    }

    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    fn date_from_days(&self, n: W) -> Date<Y> {
        let era = W::from_u32(DAYS_IN_ERA);

        // centuries
        let n_1 = W::from_u32(4) * n + W::from_u32(3);
        let century = n_1 / era;
        let n_c = (n_1 % era).low_u32() / 4;

        // years of the century, exact for n_c below one era
        let n_2 = 4 * n_c + 3;
        let p_2 = u64::from(YEAR_OF_CENTURY_MULTIPLIER) * u64::from(n_2);
        let year_of_century = (p_2 >> 32) as u32;
        let day_of_year = (p_2 as u32) / YEAR_OF_CENTURY_MULTIPLIER / 4;
        debug_assert!(year_of_century < 100 && day_of_year < 366);

        // months and days
        let n_3 = MONTH_MULTIPLIER * day_of_year + MONTH_INTERCEPT;
        let month = n_3 >> 16;
        let day = (n_3 & 0xFFFF) / MONTH_MULTIPLIER;

        let j = day_of_year >= JANUARY_DAY_OF_YEAR;
        ComputationalDate {
            year: W::from_u32(100) * century + W::from_u32(year_of_century),
            month,
            day,
        }
        .to_gregorian(j, self.year_bias)
    }

    #[inline(always)]
    fn days_from_date(&self, date: Date<Y>) -> W {
        let ComputationalDate { year, month, day } =
            ComputationalDate::from_gregorian(date, self.year_bias);

        let four = W::from_u32(4);
        let century = year / W::from_u32(100);
        let year_star = W::from_u32(DAYS_IN_QUAD) * year / four - century + century / four;
        let month_star = (MONTH_STAR_MULTIPLIER * month - MONTH_STAR_INTERCEPT) / 32;
        year_star + W::from_u32(month_star + day)
    }
}
