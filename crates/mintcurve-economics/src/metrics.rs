//! # Metrics Reporter
//!
//! Aggregate figures for the launch preview, derived from the same
//! schedule the validator checks.
//!
//! ```text
//! total_supply      = Σ era_supply
//! liquidity_supply  = floor(total_supply × liquidity_ratio / 100)
//! community_supply  = total_supply − liquidity_supply
//! total_fee_revenue = total_epochs × fee_rate
//! ```

use crate::config::EmissionConfig;
use crate::constants::{BASE_UNIT_DECIMALS, ONE_TOKEN};
use crate::math::percent_of;
use crate::schedule::EmissionSchedule;
use serde::{Deserialize, Serialize};

/// Aggregate tokenomics of a schedule
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Tokens minted over every era (base units)
    pub total_supply: u128,
    /// Wall-clock length of the schedule
    pub total_duration_seconds: u64,
    /// Share reserved for market liquidity
    pub liquidity_supply: u128,
    /// Share distributed to minters
    pub community_supply: u128,
    /// Epochs across all eras
    pub total_epochs: u64,
    /// Fees collected assuming one charge per epoch
    pub total_fee_revenue: u128,
    /// Mints of the initial size that fit in the first epoch
    pub max_mints_in_first_epoch: u128,
}

/// Aggregate a schedule.
pub fn report(config: &EmissionConfig, schedule: &EmissionSchedule) -> AggregateMetrics {
    let total_supply = schedule
        .iter()
        .fold(0u128, |acc, era| acc.saturating_add(era.era_supply));
    let liquidity_supply = percent_of(total_supply, config.liquidity_tokens_ratio_percent);
    let total_epochs = config.total_epochs();

    AggregateMetrics {
        total_supply,
        total_duration_seconds: config.total_duration_seconds(),
        liquidity_supply,
        community_supply: total_supply.saturating_sub(liquidity_supply),
        total_epochs,
        total_fee_revenue: (total_epochs as u128).saturating_mul(config.fee_rate),
        max_mints_in_first_epoch: config
            .initial_target_mint_size_per_epoch
            .checked_div(config.initial_mint_size)
            .unwrap_or(0),
    }
}

/// Render base units as a display-unit decimal.
///
/// Keeps up to nine fractional digits and drops trailing zeros, the exact
/// inverse of [`to_base_units`](crate::normalize::to_base_units).
pub fn format_base_units(amount: u128) -> String {
    let whole = amount / ONE_TOKEN;
    let fraction = amount % ONE_TOKEN;
    if fraction == 0 {
        return whole.to_string();
    }

    let digits = format!("{:0width$}", fraction, width = BASE_UNIT_DECIMALS as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}
