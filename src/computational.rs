//! The computational calendar: years start on March 1, so the variable
//! length of February falls at the end of the year.

use crate::consts::MAX_MONTH;
use crate::int::{WorkInt, YearInt};
use crate::types::Month;
use crate::Date;

/// A date in the computational calendar.
///
/// `year` is shifted up by the year bias so it is never negative, `month`
/// is in `3..=14` (January and February being 13 and 14 of the previous
/// year) and `day` is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ComputationalDate<W> {
    pub(crate) year: W,
    pub(crate) month: u32,
    pub(crate) day: u32,
}

impl<W> ComputationalDate<W> {
    #[inline(always)]
    pub(crate) fn from_gregorian<Y>(date: Date<Y>, year_bias: W) -> Self
    where
        Y: YearInt,
        W: WorkInt<Y, Y::EpochDay>,
    {
        let month = u32::from(date.month.number());
        let j = month <= 2;
        let year = W::from_year(date.year)
            .wrapping_add(&year_bias)
            .wrapping_sub(&W::from_u32(u32::from(j)));
        Self {
            year,
            month: if j { month + u32::from(MAX_MONTH) } else { month },
            day: u32::from(date.day) - 1,
        }
    }

    /// `j` is set when the day of year is in January or February.
    #[inline(always)]
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn to_gregorian<Y>(self, j: bool, year_bias: W) -> Date<Y>
    where
        Y: YearInt,
        W: WorkInt<Y, Y::EpochDay>,
    {
        let year = self
            .year
            .wrapping_add(&W::from_u32(u32::from(j)))
            .wrapping_sub(&year_bias)
            .to_year();
        let month = if j { self.month - u32::from(MAX_MONTH) } else { self.month };
        Date::new(year, Month::ALL[month as usize - 1], self.day as u8 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const L: u32 = 32_800;

    #[test]
    fn test_march_starts_the_year() {
        let date = Date::new(1970i16, Month::March, 1);
        let comp = ComputationalDate::<u32>::from_gregorian(date, L);
        assert_eq!(
            comp,
            ComputationalDate {
                year: 1970 + L,
                month: 3,
                day: 0
            }
        );
        assert_eq!(comp.to_gregorian::<i16>(false, L), date);
    }

    #[test]
    fn test_january_belongs_to_previous_year() {
        let date = Date::new(1970i16, Month::January, 1);
        let comp = ComputationalDate::<u32>::from_gregorian(date, L);
        assert_eq!(
            comp,
            ComputationalDate {
                year: 1969 + L,
                month: 13,
                day: 0
            }
        );
        assert_eq!(comp.to_gregorian::<i16>(true, L), date);
    }

    #[test]
    fn test_negative_year() {
        let date = Date::new(-32768i16, Month::February, 29);
        let comp = ComputationalDate::<u32>::from_gregorian(date, L);
        assert_eq!(comp.year, 31);
        assert_eq!((comp.month, comp.day), (14, 28));
        assert_eq!(comp.to_gregorian::<i16>(true, L), date);
    }
}
