//! # Parameter Normalizer
//!
//! Turns free-text form input into typed quantities.
//!
//! | Field kind | Alphabet | Result |
//! |------------|----------|--------|
//! | counts, percents | digits | `u64` |
//! | mint sizes, fee rate | digits + one `.` | `u128` base units (× 10^9) |
//!
//! Scaling is pure integer arithmetic: the whole part is multiplied by
//! [`ONE_TOKEN`] and the first nine fractional digits are added as-is.
//! Digits past the ninth are truncated. Empty input is the zero sentinel.

use crate::constants::{BASE_UNIT_DECIMALS, ONE_TOKEN};
use crate::error::NormalizeError;

/// Keep only ASCII digits.
pub fn sanitize_integer(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Keep only ASCII digits and decimal points.
pub fn sanitize_decimal(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Parse a count or percent field.
///
/// Separators and whitespace are stripped (`"1,000"` → `1000`). A decimal
/// point is rejected because integer fields never carry a fraction.
pub fn parse_integer(raw: &str) -> Result<u64, NormalizeError> {
    if raw.contains('.') {
        return Err(NormalizeError::InvalidNumberFormat(raw.to_string()));
    }

    let digits = sanitize_integer(raw);
    if digits.is_empty() {
        return Ok(0);
    }

    // Only digits remain, so a parse failure can only be width overflow
    digits
        .parse::<u64>()
        .map_err(|_| NormalizeError::ArithmeticOverflow(digits))
}

/// Scale a display-unit decimal into base units.
pub fn to_base_units(raw: &str) -> Result<u128, NormalizeError> {
    let cleaned = sanitize_decimal(raw);

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((_, rest)) if rest.contains('.') => {
            return Err(NormalizeError::InvalidNumberFormat(raw.to_string()));
        }
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    let overflow = || NormalizeError::ArithmeticOverflow(cleaned.clone());

    let whole_units = if whole.is_empty() {
        0
    } else {
        whole.parse::<u128>().map_err(|_| overflow())?
    };

    let kept = &fraction[..fraction.len().min(BASE_UNIT_DECIMALS as usize)];
    let fraction_units = if kept.is_empty() {
        0
    } else {
        let digits = kept.parse::<u128>().map_err(|_| overflow())?;
        digits * 10u128.pow(BASE_UNIT_DECIMALS - kept.len() as u32)
    };

    whole_units
        .checked_mul(ONE_TOKEN)
        .and_then(|units| units.checked_add(fraction_units))
        .ok_or_else(overflow)
}

/// Canonical base-unit integer string for a display-unit decimal.
pub fn normalize_scaled(raw: &str) -> Result<String, NormalizeError> {
    to_base_units(raw).map(|units| units.to_string())
}
