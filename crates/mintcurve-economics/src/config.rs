//! Launch parameter types
//!
//! [`LaunchForm`] holds the raw text the user typed; [`EmissionConfig`] is
//! the normalized value every computation runs on. A new config is built on
//! every edit, never patched.

use crate::error::{EconomicsError, NormalizeError, Result};
use crate::math::mul_counts;
use crate::normalize::{parse_integer, to_base_units};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Normalized emission parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionConfig {
    /// Number of decay eras
    pub target_eras: u64,
    /// Epochs within one era
    pub epoches_per_era: u64,
    /// Target wall-clock duration of one epoch
    pub target_seconds_per_epoch: u64,
    /// Percent of the previous era's epoch ceiling kept in the next era
    pub reduce_ratio_percent: u64,
    /// Size of a single mint operation (base units)
    pub initial_mint_size: u128,
    /// Mint ceiling of every epoch in era 0 (base units)
    pub initial_target_mint_size_per_epoch: u128,
    /// Fee charged per mint, in the chain's native base unit
    pub fee_rate: u128,
    /// Percent of total supply reserved for liquidity
    pub liquidity_tokens_ratio_percent: u64,
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            target_eras: 1,
            epoches_per_era: 250,
            target_seconds_per_epoch: 10_000,
            reduce_ratio_percent: 75,
            initial_mint_size: 100_000_000_000,                        // 100 tokens
            initial_target_mint_size_per_epoch: 1_000_000_000_000_000, // 1M tokens
            fee_rate: 100_000_000,                                     // 0.1 native
            liquidity_tokens_ratio_percent: 20,
        }
    }
}

impl EmissionConfig {
    /// Epochs across the whole schedule
    pub fn total_epochs(&self) -> u64 {
        mul_counts(self.target_eras, self.epoches_per_era)
    }

    /// Wall-clock length of one era
    pub fn era_duration_seconds(&self) -> u64 {
        mul_counts(self.epoches_per_era, self.target_seconds_per_epoch)
    }

    /// Wall-clock length of the whole schedule
    pub fn total_duration_seconds(&self) -> u64 {
        mul_counts(self.total_epochs(), self.target_seconds_per_epoch)
    }
}

/// Raw launch form as typed by the user
///
/// Counts and percents are digit strings; mint sizes and the fee rate are
/// display-unit decimals scaled by 10^9 on normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchForm {
    pub target_eras: String,
    pub epoches_per_era: String,
    pub target_seconds_per_epoch: String,
    pub reduce_ratio: String,
    pub initial_mint_size: String,
    pub initial_target_mint_size_per_epoch: String,
    pub fee_rate: String,
    pub liquidity_tokens_ratio: String,
}

impl Default for LaunchForm {
    fn default() -> Self {
        Self {
            target_eras: "1".to_string(),
            epoches_per_era: "250".to_string(),
            target_seconds_per_epoch: "10000".to_string(),
            reduce_ratio: "75".to_string(),
            initial_mint_size: "100".to_string(),
            initial_target_mint_size_per_epoch: "1000000".to_string(),
            fee_rate: "0.1".to_string(),
            liquidity_tokens_ratio: "20".to_string(),
        }
    }
}

impl LaunchForm {
    /// Normalize every field into an [`EmissionConfig`].
    ///
    /// Malformed text leaves its field at zero so the validator reports it
    /// as incomplete. Overflow is returned as an error.
    pub fn to_config(&self) -> Result<EmissionConfig> {
        Ok(EmissionConfig {
            target_eras: recover("target_eras", parse_integer(&self.target_eras))?,
            epoches_per_era: recover("epoches_per_era", parse_integer(&self.epoches_per_era))?,
            target_seconds_per_epoch: recover(
                "target_seconds_per_epoch",
                parse_integer(&self.target_seconds_per_epoch),
            )?,
            reduce_ratio_percent: recover("reduce_ratio", parse_integer(&self.reduce_ratio))?,
            initial_mint_size: recover(
                "initial_mint_size",
                to_base_units(&self.initial_mint_size),
            )?,
            initial_target_mint_size_per_epoch: recover(
                "initial_target_mint_size_per_epoch",
                to_base_units(&self.initial_target_mint_size_per_epoch),
            )?,
            fee_rate: recover("fee_rate", to_base_units(&self.fee_rate))?,
            liquidity_tokens_ratio_percent: recover(
                "liquidity_tokens_ratio",
                parse_integer(&self.liquidity_tokens_ratio),
            )?,
        })
    }
}

fn recover<T: Default>(
    field: &'static str,
    parsed: std::result::Result<T, NormalizeError>,
) -> Result<T> {
    match parsed {
        Ok(value) => Ok(value),
        Err(source) if source.is_recoverable() => {
            debug!(field, error = %source, "treating field as incomplete");
            Ok(T::default())
        }
        Err(source) => Err(EconomicsError::Normalize { field, source }),
    }
}
