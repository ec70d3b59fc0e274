use crate::consts::{
    DAYS_IN_ERA, DAYS_IN_QUAD, DAYS_IN_WEEK, ERA_YEARS, UNIX_EPOCH_WEEKDAY_INDEX, UNIX_EPOCH_YEAR,
};
use crate::int::{WorkInt, YearInt};
use crate::span::ordinal;
use crate::types::Month;
use crate::{Date, DateError};
use num_traits::Zero;

/// Error type for calendar configurations that cannot be made overflow-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The epoch is not a valid date.
    #[error("Invalid epoch: {0}")]
    InvalidEpoch(#[source] DateError),

    /// Some representable date is too far from the epoch for the epoch day type.
    #[error("Epoch days {min}..={max} do not fit the epoch day type")]
    EpochDayRange { min: i128, max: i128 },

    /// The shifted computational years or day counts overflow the working
    /// width.
    #[error("Year bias for shift {shift} does not fit the working width")]
    YearBias { shift: i128 },
}

/// Converts between [`Date<Y>`] and epoch days for one epoch.
///
/// `W` is the unsigned working integer of the affine transforms. It
/// defaults to `Y::Wide`, which always works; a narrower width is accepted
/// only if the solved biases prove it cannot overflow.
///
/// The biases are:
/// - `K`, the day bias, added to an epoch day to give the number of days
///   since March 1 of computational year zero;
/// - `L = 400 * shift`, the year bias, added to a year so that every
///   representable year (minus one, for January and February) is
///   non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Calendar<Y: YearInt, W: WorkInt<Y, Y::EpochDay> = <Y as YearInt>::Wide> {
    pub(crate) day_bias: W,
    pub(crate) year_bias: W,
    min_epoch_day: Y::EpochDay,
    max_epoch_day: Y::EpochDay,
    /// Added to `N mod 7` to give a Monday-based weekday index.
    pub(crate) weekday_bias: u32,
}

impl<Y: YearInt, W: WorkInt<Y, Y::EpochDay>> Calendar<Y, W> {
    /// Calendar counting days from the Unix epoch, 1970-01-01.
    ///
    /// # Errors
    /// Returns a `ConfigError` if `W` is too narrow for `Y`.
    pub fn unix() -> Result<Self, ConfigError> {
        Self::new(Date::new(1970i16, Month::January, 1))
    }

    /// Calendar counting days from `epoch`.
    ///
    /// The epoch may use any year type and may lie outside the range of `Y`.
    ///
    /// # Errors
    /// Returns a `ConfigError` if the epoch is not a valid date, or if no
    /// bias keeps every conversion of this configuration inside `W`.
    pub fn new<E: YearInt>(epoch: Date<E>) -> Result<Self, ConfigError> {
        epoch.validate().map_err(ConfigError::InvalidEpoch)?;

        let result = Self::solve(ordinal(epoch.year.as_(), epoch.month, epoch.day));
        match &result {
            Ok(calendar) => log::debug!(
                "calendar for epoch {epoch}: K = {}, L = {}, epoch days {}..={}",
                calendar.day_bias,
                calendar.year_bias,
                calendar.min_epoch_day,
                calendar.max_epoch_day,
            ),
            Err(err) => log::warn!("rejected calendar for epoch {epoch}: {err}"),
        }
        result
    }

    fn solve(epoch_ordinal: i128) -> Result<Self, ConfigError> {
        let min_year: i128 = Y::min_value().as_();
        let max_year: i128 = Y::max_value().as_();

        let min_day = ordinal(min_year, Month::January, 1) - epoch_ordinal;
        let max_day = ordinal(max_year, Month::December, 31) - epoch_ordinal;
        let range_error = ConfigError::EpochDayRange {
            min: min_day,
            max: max_day,
        };
        let min_epoch_day = num_traits::cast::<_, Y::EpochDay>(min_day).ok_or(range_error)?;
        let max_epoch_day = num_traits::cast::<_, Y::EpochDay>(max_day).ok_or(range_error)?;

        // Every working value is non-negative, so `W::MAX` beyond `i128::MAX`
        // is never reached.
        let limit = W::max_value().to_i128().unwrap_or(i128::MAX);

        let shift = max_year / i128::from(ERA_YEARS) + 1;
        let year_bias = i128::from(ERA_YEARS) * shift;
        // January and February belong to the previous computational year.
        let lowest_year = min_year + year_bias - 1;
        let highest_year = max_year + year_bias;
        if lowest_year < 0 || highest_year * i128::from(DAYS_IN_QUAD) > limit {
            return Err(ConfigError::YearBias { shift });
        }

        // `K` shifts by the same whole eras as `L`, so `N` stays within a
        // year of `1461 * year / 4` and fails only alongside the year bias.
        let day_bias = epoch_ordinal - ordinal(0, Month::March, 1) + i128::from(DAYS_IN_ERA) * shift;
        if min_day + day_bias < 0 || 4 * (max_day + day_bias) + 3 > limit {
            return Err(ConfigError::YearBias { shift });
        }

        let unix_ordinal = ordinal(UNIX_EPOCH_YEAR, Month::January, 1);
        let weekday_bias = (UNIX_EPOCH_WEEKDAY_INDEX + epoch_ordinal - unix_ordinal - day_bias)
            .rem_euclid(i128::from(DAYS_IN_WEEK));

        Ok(Self {
            day_bias: num_traits::cast::<_, W>(day_bias).ok_or(ConfigError::YearBias { shift })?,
            year_bias: num_traits::cast::<_, W>(year_bias).ok_or(ConfigError::YearBias { shift })?,
            min_epoch_day,
            max_epoch_day,
            // in 0..7
            weekday_bias: weekday_bias as u32,
        })
    }

    /// Smallest valid epoch day, that of `Y::MIN-01-01`.
    #[inline]
    pub const fn min_epoch_day(&self) -> Y::EpochDay {
        self.min_epoch_day
    }

    /// Largest valid epoch day, that of `Y::MAX-12-31`.
    #[inline]
    pub const fn max_epoch_day(&self) -> Y::EpochDay {
        self.max_epoch_day
    }

    /// Earliest representable date.
    pub fn min_date(&self) -> Date<Y> {
        Date::new(Y::min_value(), Month::January, 1)
    }

    /// Latest representable date.
    pub fn max_date(&self) -> Date<Y> {
        Date::new(Y::max_value(), Month::December, 31)
    }

    /// Whether `epoch_day` is in `min_epoch_day()..=max_epoch_day()`.
    #[inline]
    pub fn contains_epoch_day(&self, epoch_day: Y::EpochDay) -> bool {
        self.min_epoch_day <= epoch_day && epoch_day <= self.max_epoch_day
    }

    /// The epoch itself, if `Y` can represent it.
    pub fn epoch(&self) -> Option<Date<Y>> {
        self.checked_from_epoch(<Y::EpochDay as Zero>::zero()).ok()
    }

    /// The day bias `K`.
    #[inline]
    pub const fn day_bias(&self) -> W {
        self.day_bias
    }

    /// The year bias `L`.
    #[inline]
    pub const fn year_bias(&self) -> W {
        self.year_bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unix_i16_biases() {
        let calendar = Calendar::<i16>::unix().unwrap();
        assert_eq!(calendar.day_bias(), 719_468 + 146_097 * 82);
        assert_eq!(calendar.year_bias(), 400 * 82);
        assert_eq!(calendar.min_epoch_day(), -12_687_794);
        assert_eq!(calendar.max_epoch_day(), 11_248_737);
    }

    #[test]
    fn test_unix_bounds_per_width() {
        let c = Calendar::<i8>::unix().unwrap();
        assert_eq!((c.min_epoch_day(), c.max_epoch_day()), (-766_279, -672_778));
        assert_eq!(c.year_bias(), 400);

        let c = Calendar::<u8>::unix().unwrap();
        assert_eq!((c.min_epoch_day(), c.max_epoch_day()), (-719_528, -626_027));

        let c = Calendar::<u16>::unix().unwrap();
        assert_eq!((c.min_epoch_day(), c.max_epoch_day()), (-719_528, 23_217_003));
        assert_eq!(c.day_bias(), 24_679_376);

        let c = Calendar::<i32>::unix().unwrap();
        assert_eq!(
            (c.min_epoch_day(), c.max_epoch_day()),
            (-784_353_015_833, 784_351_576_776)
        );
        assert_eq!(c.year_bias(), 2_147_484_000);

        let c = Calendar::<u32>::unix().unwrap();
        assert_eq!((c.min_epoch_day(), c.max_epoch_day()), (-719_528, 1_568_703_873_081));

        let c = Calendar::<i64>::unix().unwrap();
        assert_eq!(
            (c.min_epoch_day(), c.max_epoch_day()),
            (
                -3_368_767_461_170_931_172_581,
                3_368_767_461_170_929_733_524
            )
        );
        assert_eq!(c.day_bias(), 3_368_767_461_170_931_242_648);

        let c = Calendar::<u64>::unix().unwrap();
        assert_eq!((c.min_epoch_day(), c.max_epoch_day()), (-719_528, 6_737_534_922_341_860_186_578));
        assert_eq!(c.year_bias(), 18_446_744_073_709_552_000);
    }

    #[test]
    fn test_rejects_narrow_working_width() {
        assert!(matches!(
            Calendar::<i16, u16>::unix(),
            Err(ConfigError::YearBias { shift: 82 })
        ));
        assert!(matches!(
            Calendar::<i32, u32>::unix(),
            Err(ConfigError::YearBias { .. })
        ));
        assert!(matches!(
            Calendar::<i64, u64>::unix(),
            Err(ConfigError::YearBias { .. })
        ));
    }

    #[test]
    fn test_narrow_width_rejection_is_epoch_independent() {
        struct TestCase {
            result: Result<(), ConfigError>,
            shift: i128,
        }

        let cases = [
            TestCase {
                result: Calendar::<u8, u16>::unix().map(|_| ()),
                shift: 1,
            },
            TestCase {
                result: Calendar::<i8, u16>::new(Date::new(i8::MIN, Month::January, 1)).map(|_| ()),
                shift: 1,
            },
            TestCase {
                result: Calendar::<i16, u16>::new(Date::new(i16::MAX, Month::December, 31))
                    .map(|_| ()),
                shift: 82,
            },
            TestCase {
                result: Calendar::<u32, u32>::unix().map(|_| ()),
                shift: 10_737_419,
            },
        ];

        for case in cases {
            assert_eq!(case.result, Err(ConfigError::YearBias { shift: case.shift }));
        }
    }

    #[test]
    fn test_wider_working_width_is_accepted() {
        let narrow = Calendar::<i16>::unix().unwrap();
        let wide = Calendar::<i16, u64>::unix().unwrap();
        assert_eq!(u64::from(narrow.day_bias()), wide.day_bias());
        assert_eq!(narrow.min_epoch_day(), wide.min_epoch_day());
        assert_eq!(narrow.max_epoch_day(), wide.max_epoch_day());
    }

    #[test]
    fn test_rejects_invalid_epoch() {
        let result = Calendar::<i16>::new(Date::new(2023i16, Month::February, 29));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEpoch(DateError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            }))
        ));
    }

    #[test]
    fn test_rejects_epoch_too_far_for_epoch_day_type() {
        // i8 epoch days are i32; an epoch near the end of u64 years is too far.
        let result = Calendar::<i8>::new(Date::new(u64::MAX, Month::January, 1));
        assert!(matches!(result, Err(ConfigError::EpochDayRange { .. })));
    }

    #[test]
    fn test_epoch_outside_year_range() {
        let calendar = Calendar::<u8>::unix().unwrap();
        assert_eq!(calendar.epoch(), None);
        assert!(!calendar.contains_epoch_day(0));

        let calendar = Calendar::<i16>::unix().unwrap();
        assert_eq!(calendar.epoch(), Some(Date::new(1970, Month::January, 1)));
    }

    #[test]
    fn test_min_max_dates() {
        let calendar = Calendar::<u16>::unix().unwrap();
        assert_eq!(calendar.min_date(), Date::new(0, Month::January, 1));
        assert_eq!(calendar.max_date(), Date::new(u16::MAX, Month::December, 31));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConfigError::YearBias { shift: 82 }.to_string(),
            "Year bias for shift 82 does not fit the working width"
        );
    }
}
