//! Exact day distances between calendar dates.
//!
//! This is the slow, obviously-correct counterpart of the affine engine. It
//! is only used to derive the bounds and biases of a [`crate::Calendar`].

use crate::Date;
use crate::consts::{DAYS_IN_COMMON_YEAR, DAYS_IN_ERA, ERA_YEARS};
use crate::int::YearInt;
use crate::types::{Month, is_leap};

/// Number of days from `from` to `to`, negative when `to` is earlier.
///
/// Both dates are assumed valid. Every span between 64-bit years fits `i128`.
pub fn days_since<Y: YearInt>(from: &Date<Y>, to: &Date<Y>) -> i128 {
    ordinal(to.year.as_(), to.month, to.day) - ordinal(from.year.as_(), from.month, from.day)
}

/// Days from 0000-01-01 to the given date.
pub(crate) fn ordinal(year: i128, month: Month, day: u8) -> i128 {
    let leap = is_leap(year.rem_euclid(i128::from(ERA_YEARS)) as u16);
    days_before_year(year) + i128::from(month.days_before(leap)) + i128::from(day) - 1
}

/// Days from 0000-01-01 to `year`-01-01.
fn days_before_year(year: i128) -> i128 {
    let eras = year.div_euclid(i128::from(ERA_YEARS));
    // in 0..400, so the narrowing is lossless
    let year_of_era = year.rem_euclid(i128::from(ERA_YEARS)) as u16;

    let mut days = eras * i128::from(DAYS_IN_ERA);
    for y in 0..year_of_era {
        days += i128::from(DAYS_IN_COMMON_YEAR) + i128::from(is_leap(y));
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u8, day: u8) -> Date<i32> {
        Date::try_new(year, month, day).unwrap()
    }

    #[test]
    fn test_leap_year_span() {
        assert_eq!(days_since(&date(2000, 1, 1), &date(2001, 1, 1)), 366);
        assert_eq!(days_since(&date(2001, 1, 1), &date(2002, 1, 1)), 365);
    }

    #[test]
    fn test_era_span() {
        assert_eq!(days_since(&date(0, 1, 1), &date(400, 1, 1)), 146_097);
        assert_eq!(days_since(&date(0, 1, 1), &date(401, 1, 1)), 146_097 + 366);
    }

    #[test]
    fn test_span_is_antisymmetric() {
        let a = date(1970, 1, 1);
        let b = date(2024, 2, 29);
        assert_eq!(days_since(&a, &b), 19_782);
        assert_eq!(days_since(&b, &a), -19_782);
        assert_eq!(days_since(&a, &a), 0);
    }

    #[test]
    fn test_span_across_negative_years() {
        assert_eq!(days_since(&date(-1, 1, 1), &date(0, 1, 1)), 365);
        assert_eq!(days_since(&date(-400, 1, 1), &date(0, 1, 1)), 146_097);
        assert_eq!(days_since(&date(-1, 12, 31), &date(0, 1, 1)), 1);
        assert_eq!(days_since(&date(-4, 3, 1), &date(-4, 2, 28)), -2);
    }

    #[test]
    fn test_span_within_a_year() {
        assert_eq!(days_since(&date(2023, 1, 1), &date(2023, 12, 31)), 364);
        assert_eq!(days_since(&date(2024, 1, 1), &date(2024, 12, 31)), 365);
        assert_eq!(days_since(&date(2024, 2, 28), &date(2024, 3, 1)), 2);
    }

    #[test]
    fn test_span_between_extreme_64_bit_years() {
        let min = Date::new(i64::MIN, Month::January, 1);
        let max = Date::new(i64::MAX, Month::December, 31);
        let unix = Date::new(1970i64, Month::January, 1);
        assert_eq!(days_since(&unix, &min), -3_368_767_461_170_931_172_581);
        assert_eq!(days_since(&unix, &max), 3_368_767_461_170_929_733_524);
    }

    #[test]
    fn test_ordinal_of_computational_origin() {
        assert_eq!(ordinal(0, Month::March, 1), 60);
        assert_eq!(ordinal(1970, Month::January, 1) - ordinal(0, Month::March, 1), 719_468);
    }
}
