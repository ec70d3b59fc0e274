/// Years in one Gregorian era, after which the calendar repeats exactly
pub const ERA_YEARS: u32 = 400;

/// Days in one Gregorian era (97 leap years out of 400)
pub const DAYS_IN_ERA: u32 = 146_097;

/// Days in a year that is not a leap year
pub const DAYS_IN_COMMON_YEAR: u32 = 365;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in a week
pub const DAYS_IN_WEEK: u8 = 7;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap check)
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

/// Leap year occurs every 4 years...
pub(crate) const LEAP_YEAR_CYCLE: u8 = 4;
/// ...century years are the multiples of 100 that are also multiples of 25...
pub(crate) const CENTURY_FACTOR: u8 = 25;
/// ...and among those only multiples of 400 are multiples of 16
pub(crate) const GREGORIAN_FACTOR: u8 = 16;

/// Proleptic year, month and day of the Unix epoch
pub(crate) const UNIX_EPOCH_YEAR: i128 = 1970;
/// 1970-01-01 was a Thursday (Monday-based index 3)
pub(crate) const UNIX_EPOCH_WEEKDAY_INDEX: i128 = 3;

// Euclidean affine transform constants.

/// Computational day of year of January 1 (the year starts on March 1)
pub(crate) const JANUARY_DAY_OF_YEAR: u32 = 306;
/// Days in four years, 1461 / 4 being the Julian mean year
pub(crate) const DAYS_IN_QUAD: u32 = 1_461;
/// `2^32 / 1461`, rounded up
pub(crate) const YEAR_OF_CENTURY_MULTIPLIER: u32 = 2_939_745;
/// Month slope of the 5-month pattern, scaled by `2^16`
pub(crate) const MONTH_MULTIPLIER: u32 = 2_141;
/// Month intercept of the 5-month pattern, scaled by `2^16`
pub(crate) const MONTH_INTERCEPT: u32 = 197_913;
/// Slope of the inverse month transform, scaled by `2^5`
pub(crate) const MONTH_STAR_MULTIPLIER: u32 = 979;
/// Intercept of the inverse month transform, scaled by `2^5`
pub(crate) const MONTH_STAR_INTERCEPT: u32 = 2_919;
