//! Parking charges.
//!
//! The tariff is fixed: a flat base charge covers the first hours, and every
//! hour after that is billed at the hourly rate.

/// Charge for any stay up to [`BASE_HOURS`].
pub const BASE_FEE: u64 = 10;

/// Hours covered by [`BASE_FEE`].
pub const BASE_HOURS: i64 = 2;

/// Charge for each hour beyond [`BASE_HOURS`].
pub const HOURLY_RATE: u64 = 10;

/// Computes the charge for a stay of `hours`.
///
/// Zero and negative durations are billed at the base fee.
///
/// # Examples
///
/// ```
/// use parkade::lot::fee::charge_for;
///
/// assert_eq!(charge_for(1), 10);
/// assert_eq!(charge_for(2), 10);
/// assert_eq!(charge_for(3), 20);
/// assert_eq!(charge_for(6), 50);
/// assert_eq!(charge_for(-4), 10);
/// ```
#[must_use]
pub const fn charge_for(hours: i64) -> u64 {
    if hours <= BASE_HOURS {
        return BASE_FEE;
    }
    // hours > BASE_HOURS >= 0, so the difference is positive and fits in u64
    let extra = hours.abs_diff(BASE_HOURS);
    BASE_FEE.saturating_add(extra.saturating_mul(HOURLY_RATE))
}
