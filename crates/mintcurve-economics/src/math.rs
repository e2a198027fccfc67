//! Integer helpers shared by the generator and the reporter.

use crate::constants::PERCENT_DENOMINATOR;

/// `floor(amount × percent / 100)` without a wide intermediate.
///
/// Splits `amount = 100·q + s` so the product only overflows when the
/// result itself does; in that case the value saturates at `u128::MAX`.
pub fn percent_of(amount: u128, percent: u64) -> u128 {
    let denom = PERCENT_DENOMINATOR as u128;
    let percent = percent as u128;
    let quotient = amount / denom;
    let remainder = amount % denom;

    // remainder < 100, so this product fits for any u64 percent
    let tail = remainder * percent / denom;
    quotient.saturating_mul(percent).saturating_add(tail)
}

/// Product of two counts, saturating at `u64::MAX`.
pub fn mul_counts(a: u64, b: u64) -> u64 {
    a.saturating_mul(b)
}
