//! # Emission Schedule
//!
//! Geometric per-era decay of the epoch mint ceiling.
//!
//! ## Decay Example (reduce ratio 75%, 250 epochs per era)
//!
//! ```text
//! Era 0: 1,000,000 tokens/epoch → 250,000,000 tokens
//! Era 1:   750,000 tokens/epoch → 187,500,000 tokens
//! Era 2:   562,500 tokens/epoch → 140,625,000 tokens
//! Era 3:   421,875 tokens/epoch → 105,468,750 tokens
//! ...floor decay continues, possibly down to zero...
//! ```
//!
//! Decay uses floor division on base units, the same truncation the
//! launch program applies on chain. Eras that decay to zero are still
//! emitted; flagging them is the validator's job.

use crate::config::EmissionConfig;
use crate::constants::MAX_SCHEDULE_ERAS;
use crate::math::percent_of;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One era of the schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EraRecord {
    /// Era number (0 = launch era)
    pub era_index: u64,
    /// Seconds from launch start to the first epoch of this era
    pub start_offset_seconds: u64,
    /// Mint ceiling of each epoch in this era (base units)
    pub target_mint_size_per_epoch: u128,
    /// Wall-clock length of the era
    pub era_duration_seconds: u64,
    /// Tokens minted over the era (base units)
    pub era_supply: u128,
    /// Tokens minted from launch through the end of this era
    pub cumulative_supply: u128,
}

/// Ordered per-era minting parameters
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmissionSchedule {
    eras: Vec<EraRecord>,
}

impl EmissionSchedule {
    /// Expand a config into its full era sequence.
    ///
    /// Never fails. Products saturate at `u128::MAX` and the row count is
    /// bounded by [`MAX_SCHEDULE_ERAS`]; the validator rejects both cases.
    pub fn generate(config: &EmissionConfig) -> Self {
        let era_count = config.target_eras.min(MAX_SCHEDULE_ERAS);
        if era_count < config.target_eras {
            warn!(
                target_eras = config.target_eras,
                materialized = era_count,
                "schedule truncated to the era ceiling"
            );
        }

        let era_duration_seconds = config.era_duration_seconds();
        let epochs = config.epoches_per_era as u128;

        let mut eras = Vec::with_capacity(era_count as usize);
        let mut target = config.initial_target_mint_size_per_epoch;
        let mut cumulative: u128 = 0;

        for era_index in 0..era_count {
            if era_index > 0 {
                target = decay(target, config.reduce_ratio_percent);
            }

            let era_supply = target.saturating_mul(epochs);
            cumulative = cumulative.saturating_add(era_supply);

            eras.push(EraRecord {
                era_index,
                start_offset_seconds: era_index.saturating_mul(era_duration_seconds),
                target_mint_size_per_epoch: target,
                era_duration_seconds,
                era_supply,
                cumulative_supply: cumulative,
            });
        }

        debug!(eras = eras.len(), total_supply = cumulative, "generated emission schedule");
        Self { eras }
    }

    /// All eras in order
    pub fn eras(&self) -> &[EraRecord] {
        &self.eras
    }

    /// Iterate over eras in order
    pub fn iter(&self) -> std::slice::Iter<'_, EraRecord> {
        self.eras.iter()
    }

    /// Number of materialized eras
    pub fn len(&self) -> usize {
        self.eras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }

    /// Era information by index
    pub fn era(&self, era_index: u64) -> Option<&EraRecord> {
        usize::try_from(era_index).ok().and_then(|i| self.eras.get(i))
    }

    /// Sum of all era supplies (saturating)
    pub fn total_supply(&self) -> u128 {
        self.eras.last().map_or(0, |era| era.cumulative_supply)
    }

    /// First era whose epoch ceiling decayed to zero
    pub fn first_exhausted_era(&self) -> Option<u64> {
        self.eras
            .iter()
            .find(|era| era.target_mint_size_per_epoch == 0)
            .map(|era| era.era_index)
    }

    /// Check that no era mints more per epoch than the one before it
    pub fn is_monotonic(&self) -> bool {
        self.eras
            .windows(2)
            .all(|pair| pair[1].target_mint_size_per_epoch <= pair[0].target_mint_size_per_epoch)
    }
}

impl<'a> IntoIterator for &'a EmissionSchedule {
    type Item = &'a EraRecord;
    type IntoIter = std::slice::Iter<'a, EraRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.eras.iter()
    }
}

/// Expand a config into its schedule
pub fn generate(config: &EmissionConfig) -> EmissionSchedule {
    EmissionSchedule::generate(config)
}

/// Next era's epoch ceiling: `floor(previous × reduce_ratio / 100)`
pub fn decay(previous: u128, reduce_ratio_percent: u64) -> u128 {
    percent_of(previous, reduce_ratio_percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ONE_TOKEN;

    fn config(eras: u64, ratio: u64, target: u128) -> EmissionConfig {
        EmissionConfig {
            target_eras: eras,
            epoches_per_era: 250,
            target_seconds_per_epoch: 10_000,
            reduce_ratio_percent: ratio,
            initial_target_mint_size_per_epoch: target,
            ..Default::default()
        }
    }

    #[test]
    fn test_decay_schedule() {
        let schedule = generate(&config(4, 75, 1_000_000 * ONE_TOKEN));
        let targets: Vec<u128> = schedule.iter().map(|e| e.target_mint_size_per_epoch).collect();

        assert_eq!(
            targets,
            vec![
                1_000_000 * ONE_TOKEN,
                750_000 * ONE_TOKEN,
                562_500 * ONE_TOKEN,
                421_875 * ONE_TOKEN,
            ]
        );
    }

    #[test]
    fn test_decay_floors_each_step() {
        // 10 → 7 (7.5) → 5 (5.25) → 3 (3.75)
        let schedule = generate(&config(4, 75, 10));
        let targets: Vec<u128> = schedule.iter().map(|e| e.target_mint_size_per_epoch).collect();
        assert_eq!(targets, vec![10, 7, 5, 3]);
    }

    #[test]
    fn test_era_supply_and_cumulative() {
        let schedule = generate(&config(3, 50, 1_000));
        let supplies: Vec<u128> = schedule.iter().map(|e| e.era_supply).collect();
        assert_eq!(supplies, vec![250_000, 125_000, 62_500]);
        assert_eq!(schedule.total_supply(), 437_500);
        assert_eq!(schedule.era(1).unwrap().cumulative_supply, 375_000);
    }

    #[test]
    fn test_era_timeline() {
        let schedule = generate(&config(3, 75, 1_000));
        for era in &schedule {
            assert_eq!(era.era_duration_seconds, 2_500_000);
            assert_eq!(era.start_offset_seconds, era.era_index * 2_500_000);
        }
    }

    #[test]
    fn test_zero_eras_are_kept() {
        let schedule = generate(&config(6, 50, 4));
        assert_eq!(schedule.len(), 6);
        let targets: Vec<u128> = schedule.iter().map(|e| e.target_mint_size_per_epoch).collect();
        assert_eq!(targets, vec![4, 2, 1, 0, 0, 0]);
        assert_eq!(schedule.first_exhausted_era(), Some(3));
        assert!(schedule.is_monotonic());
    }

    #[test]
    fn test_empty_config_yields_empty_schedule() {
        let schedule = generate(&config(0, 75, 1_000));
        assert!(schedule.is_empty());
        assert_eq!(schedule.total_supply(), 0);
        assert_eq!(schedule.first_exhausted_era(), None);
    }

    #[test]
    fn test_era_ceiling() {
        let schedule = generate(&config(u64::MAX, 99, 1_000));
        assert_eq!(schedule.len() as u64, MAX_SCHEDULE_ERAS);
    }

    #[test]
    fn test_supply_saturates() {
        let schedule = generate(&config(2, 99, u128::MAX / 2));
        assert_eq!(schedule.era(0).unwrap().era_supply, u128::MAX);
        assert_eq!(schedule.total_supply(), u128::MAX);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let cfg = config(12, 83, 987_654_321_123);
        assert_eq!(generate(&cfg), generate(&cfg));
    }
}
