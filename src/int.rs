//! Integer plumbing that lets one engine serve every year width.
//!
//! A year type `Y` names the signed type its epoch days live in and the
//! unsigned working type the affine transforms run in. Both are the
//! smallest power-of-two width that covers every day reachable from
//! `Y::MIN-01-01` to `Y::MAX-12-31`.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use num_traits::{AsPrimitive, Euclid, PrimInt, Signed, Unsigned, WrappingAdd, WrappingSub};

use crate::consts::{CENTURY_FACTOR, GREGORIAN_FACTOR, LEAP_YEAR_CYCLE};

/// An unsigned working integer for a calendar over years `Y` with epoch
/// days `E`.
///
/// Every conversion is a plain `as` cast. Widening goes through two's
/// complement and narrowing truncates, so as long as the true value of a
/// computation is non-negative and fits `Self`, wrapping arithmetic yields
/// the right bits on both sides.
pub trait WorkInt<Y, E>:
    PrimInt + Unsigned + WrappingAdd + WrappingSub + Hash + Debug + Display + Send + Sync + 'static
{
    fn from_year(year: Y) -> Self;
    fn to_year(self) -> Y;
    fn from_epoch_day(epoch_day: E) -> Self;
    fn to_epoch_day(self) -> E;
    fn from_u32(value: u32) -> Self;
    /// The low 32 bits; only called on values below one era.
    fn low_u32(self) -> u32;
}

impl<Y, E, W> WorkInt<Y, E> for W
where
    Y: AsPrimitive<W>,
    E: AsPrimitive<W>,
    u32: AsPrimitive<W>,
    W: PrimInt
        + Unsigned
        + WrappingAdd
        + WrappingSub
        + Hash
        + Debug
        + Display
        + Send
        + Sync
        + 'static
        + AsPrimitive<Y>
        + AsPrimitive<E>
        + AsPrimitive<u32>,
{
    #[inline(always)]
    fn from_year(year: Y) -> Self {
        <Y as AsPrimitive<Self>>::as_(year)
    }

    #[inline(always)]
    fn to_year(self) -> Y {
        <Self as AsPrimitive<Y>>::as_(self)
    }

    #[inline(always)]
    fn from_epoch_day(epoch_day: E) -> Self {
        <E as AsPrimitive<Self>>::as_(epoch_day)
    }

    #[inline(always)]
    fn to_epoch_day(self) -> E {
        <Self as AsPrimitive<E>>::as_(self)
    }

    #[inline(always)]
    fn from_u32(value: u32) -> Self {
        <u32 as AsPrimitive<Self>>::as_(value)
    }

    #[inline(always)]
    fn low_u32(self) -> u32 {
        <Self as AsPrimitive<u32>>::as_(self)
    }
}

/// A primitive integer usable as a calendar year.
pub trait YearInt:
    PrimInt + Hash + Debug + Display + Send + Sync + AsPrimitive<i128> + 'static
{
    /// Signed day count relative to an epoch.
    type EpochDay: PrimInt
        + Signed
        + Euclid
        + Hash
        + Debug
        + Display
        + Send
        + Sync
        + From<Self>
        + From<u8>
        + AsPrimitive<i128>
        + 'static;

    /// Default unsigned working width of the affine transforms.
    type Wide: WorkInt<Self, Self::EpochDay>;

    /// Gregorian leap year test, see [`crate::is_leap`].
    fn is_leap(self) -> bool;
}

macro_rules! year_int {
    ($($year:ty => $epoch_day:ty, $wide:ty;)*) => {$(
        impl YearInt for $year {
            type EpochDay = $epoch_day;
            type Wide = $wide;

            #[inline(always)]
            #[allow(clippy::unnecessary_cast, clippy::cast_possible_wrap)]
            fn is_leap(self) -> bool {
                // Divisibility only, so truncating `%` agrees with floor mod
                // for negative years.
                if self % (CENTURY_FACTOR as $year) == 0 {
                    self % (GREGORIAN_FACTOR as $year) == 0
                } else {
                    self % (LEAP_YEAR_CYCLE as $year) == 0
                }
            }
        }
    )*};
}

year_int! {
    i8 => i32, u32;
    u8 => i32, u32;
    i16 => i32, u32;
    u16 => i32, u32;
    i32 => i64, u64;
    u32 => i64, u64;
    i64 => i128, u128;
    u64 => i128, u128;
}
