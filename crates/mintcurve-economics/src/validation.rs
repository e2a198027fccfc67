//! # Launch Validation
//!
//! Ordered rule chain run before a launch may be submitted. The first
//! failing rule is reported, so error precedence is stable.
//!
//! | # | Rule | Violation |
//! |---|------|-----------|
//! | 1 | liquidity ratio in (0, 50] | `LiquidityRatio` |
//! | 2 | reduce ratio in [50, 100) | `ReduceRatio` |
//! | 3 | epoches per era > 0 | `EpochesPerEra` |
//! | 4 | target eras > 0 | `TargetEras` |
//! | 5 | seconds per epoch > 0 | `TargetSecondsPerEpoch` |
//! | 6 | initial mint size > 0 | `InitialMintSize` |
//! | 7 | initial epoch target > 0 | `InitialTargetMintSize` |
//! | 8 | epoch target ≥ 10 × mint size | `TargetBelowMintFloor` |
//! | 9 | target eras ≤ era ceiling | `TooManyEras` |
//! | 10 | no era decays to zero | `DecayExhausted` |
//! | 11 | total supply fits a u64 token amount | `SupplyExceedsTokenLimit` |

use crate::config::EmissionConfig;
use crate::constants::*;
use crate::schedule::EmissionSchedule;
use crate::error::{EconomicsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason a launch configuration is rejected
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleViolation {
    LiquidityRatio,
    ReduceRatio,
    EpochesPerEra,
    TargetEras,
    TargetSecondsPerEpoch,
    InitialMintSize,
    InitialTargetMintSize,
    TargetBelowMintFloor,
    TooManyEras,
    DecayExhausted,
    SupplyExceedsTokenLimit,
}

impl RuleViolation {
    /// Stable code for host applications
    pub fn code(&self) -> u32 {
        match self {
            Self::LiquidityRatio => 1001,
            Self::ReduceRatio => 1002,
            Self::EpochesPerEra => 1003,
            Self::TargetEras => 1004,
            Self::TargetSecondsPerEpoch => 1005,
            Self::InitialMintSize => 1006,
            Self::InitialTargetMintSize => 1007,
            Self::TargetBelowMintFloor => 1008,
            Self::TooManyEras => 1009,
            Self::DecayExhausted => 1010,
            Self::SupplyExceedsTokenLimit => 1011,
        }
    }

    /// Short description of the broken rule
    pub fn description(&self) -> &'static str {
        match self {
            Self::LiquidityRatio => "liquidity tokens ratio must be greater than 0% and at most 50%",
            Self::ReduceRatio => "reduce ratio must be at least 50% and less than 100%",
            Self::EpochesPerEra => "epoches per era must be greater than 0",
            Self::TargetEras => "target eras must be greater than 0",
            Self::TargetSecondsPerEpoch => "target seconds per epoch must be greater than 0",
            Self::InitialMintSize => "initial mint size must be greater than 0",
            Self::InitialTargetMintSize => "initial target mint size per epoch must be greater than 0",
            Self::TargetBelowMintFloor => {
                "initial target mint size per epoch must be at least 10 times the initial mint size"
            }
            Self::TooManyEras => "target eras exceeds the supported era count",
            Self::DecayExhausted => "target mint size per epoch decays to zero before the last era",
            Self::SupplyExceedsTokenLimit => "total supply exceeds the token program's amount limit",
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of the rule chain
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    Valid,
    Invalid { kind: RuleViolation, message: String },
}

impl ValidationResult {
    fn invalid(kind: RuleViolation, message: impl Into<String>) -> Self {
        Self::Invalid { kind, message: message.into() }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failing rule, if any
    pub fn violation(&self) -> Option<RuleViolation> {
        match self {
            Self::Valid => None,
            Self::Invalid { kind, .. } => Some(*kind),
        }
    }

    /// Convert into a `Result` for `?` propagation
    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid { kind, .. } => Err(EconomicsError::InvalidLaunch(kind)),
        }
    }
}

/// Run the rule chain over a config and the schedule generated from it.
pub fn validate(config: &EmissionConfig, schedule: &EmissionSchedule) -> ValidationResult {
    if let Some(result) = check_parameters(config) {
        return result;
    }
    if let Some(result) = check_schedule(config, schedule) {
        return result;
    }
    ValidationResult::Valid
}

fn check_parameters(config: &EmissionConfig) -> Option<ValidationResult> {
    use RuleViolation::*;

    let liquidity = config.liquidity_tokens_ratio_percent;
    if liquidity == 0 || liquidity > MAX_LIQUIDITY_RATIO_PERCENT {
        return Some(reject(LiquidityRatio, format!("got {liquidity}%")));
    }

    let reduce = config.reduce_ratio_percent;
    if !(MIN_REDUCE_RATIO_PERCENT..MAX_REDUCE_RATIO_PERCENT).contains(&reduce) {
        return Some(reject(ReduceRatio, format!("got {reduce}%")));
    }

    if config.epoches_per_era == 0 {
        return Some(reject(EpochesPerEra, "field is empty or zero"));
    }
    if config.target_eras == 0 {
        return Some(reject(TargetEras, "field is empty or zero"));
    }
    if config.target_seconds_per_epoch == 0 {
        return Some(reject(TargetSecondsPerEpoch, "field is empty or zero"));
    }
    if config.initial_mint_size == 0 {
        return Some(reject(InitialMintSize, "field is empty or zero"));
    }
    if config.initial_target_mint_size_per_epoch == 0 {
        return Some(reject(InitialTargetMintSize, "field is empty or zero"));
    }

    let floor = config.initial_mint_size.saturating_mul(MIN_MINTS_PER_EPOCH);
    if config.initial_target_mint_size_per_epoch < floor {
        return Some(reject(
            TargetBelowMintFloor,
            format!(
                "{} < {} × {}",
                config.initial_target_mint_size_per_epoch,
                MIN_MINTS_PER_EPOCH,
                config.initial_mint_size
            ),
        ));
    }

    None
}

fn check_schedule(
    config: &EmissionConfig,
    schedule: &EmissionSchedule,
) -> Option<ValidationResult> {
    use RuleViolation::*;

    if config.target_eras > MAX_SCHEDULE_ERAS {
        return Some(reject(
            TooManyEras,
            format!("{} > {}", config.target_eras, MAX_SCHEDULE_ERAS),
        ));
    }

    if let Some(era) = schedule.first_exhausted_era() {
        return Some(reject(DecayExhausted, format!("era {era} mints nothing")));
    }

    let total = schedule.total_supply();
    if total > TOKEN_AMOUNT_LIMIT {
        return Some(reject(
            SupplyExceedsTokenLimit,
            format!("{total} > {TOKEN_AMOUNT_LIMIT}"),
        ));
    }

    None
}

fn reject(kind: RuleViolation, detail: impl fmt::Display) -> ValidationResult {
    ValidationResult::invalid(kind, format!("{}: {}", capitalize(kind.description()), detail))
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::generate;

    fn check(config: EmissionConfig) -> ValidationResult {
        validate(&config, &generate(&config))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(check(EmissionConfig::default()), ValidationResult::Valid);
    }

    #[test]
    fn test_liquidity_ratio_bounds() {
        for ratio in [0, 51, 60, 100] {
            let config = EmissionConfig { liquidity_tokens_ratio_percent: ratio, ..Default::default() };
            assert_eq!(check(config).violation(), Some(RuleViolation::LiquidityRatio), "ratio {ratio}");
        }
        for ratio in [1, 50] {
            let config = EmissionConfig { liquidity_tokens_ratio_percent: ratio, ..Default::default() };
            assert!(check(config).is_valid(), "ratio {ratio}");
        }
    }

    #[test]
    fn test_reduce_ratio_bounds() {
        for ratio in [0, 49, 100, 150] {
            let config = EmissionConfig { reduce_ratio_percent: ratio, ..Default::default() };
            assert_eq!(check(config).violation(), Some(RuleViolation::ReduceRatio), "ratio {ratio}");
        }
        for ratio in [50, 99] {
            let config = EmissionConfig { reduce_ratio_percent: ratio, ..Default::default() };
            assert!(check(config).is_valid(), "ratio {ratio}");
        }
    }

    #[test]
    fn test_zero_fields_in_rule_order() {
        let cases = [
            (EmissionConfig { epoches_per_era: 0, ..Default::default() }, RuleViolation::EpochesPerEra),
            (EmissionConfig { target_eras: 0, ..Default::default() }, RuleViolation::TargetEras),
            (
                EmissionConfig { target_seconds_per_epoch: 0, ..Default::default() },
                RuleViolation::TargetSecondsPerEpoch,
            ),
            (EmissionConfig { initial_mint_size: 0, ..Default::default() }, RuleViolation::InitialMintSize),
            (
                EmissionConfig { initial_target_mint_size_per_epoch: 0, ..Default::default() },
                RuleViolation::InitialTargetMintSize,
            ),
        ];
        for (config, expected) in cases {
            assert_eq!(check(config).violation(), Some(expected));
        }
    }

    #[test]
    fn test_first_failure_wins() {
        let config = EmissionConfig {
            liquidity_tokens_ratio_percent: 60,
            reduce_ratio_percent: 100,
            epoches_per_era: 0,
            ..Default::default()
        };
        assert_eq!(check(config).violation(), Some(RuleViolation::LiquidityRatio));

        let config = EmissionConfig { epoches_per_era: 0, target_eras: 0, ..Default::default() };
        assert_eq!(check(config).violation(), Some(RuleViolation::EpochesPerEra));
    }

    #[test]
    fn test_target_below_mint_floor() {
        let config = EmissionConfig {
            initial_mint_size: 1_000,
            initial_target_mint_size_per_epoch: 9_999,
            ..Default::default()
        };
        assert_eq!(check(config).violation(), Some(RuleViolation::TargetBelowMintFloor));

        let config = EmissionConfig {
            initial_mint_size: 1_000,
            initial_target_mint_size_per_epoch: 10_000,
            ..Default::default()
        };
        assert!(check(config).is_valid());
    }

    #[test]
    fn test_decay_exhausted() {
        let config = EmissionConfig {
            target_eras: 8,
            reduce_ratio_percent: 50,
            initial_mint_size: 1,
            initial_target_mint_size_per_epoch: 10,
            ..Default::default()
        };
        // 10, 5, 2, 1, 0 ...
        match check(config) {
            ValidationResult::Invalid { kind, message } => {
                assert_eq!(kind, RuleViolation::DecayExhausted);
                assert!(message.contains("era 4"));
            }
            ValidationResult::Valid => panic!("exhausted schedule accepted"),
        }
    }

    #[test]
    fn test_too_many_eras() {
        let config = EmissionConfig { target_eras: MAX_SCHEDULE_ERAS + 1, ..Default::default() };
        assert_eq!(check(config).violation(), Some(RuleViolation::TooManyEras));
    }

    #[test]
    fn test_era_ceiling_is_inclusive() {
        // 10_000 eras at 75% decay run dry long before the last era
        let config = EmissionConfig { target_eras: MAX_SCHEDULE_ERAS, ..Default::default() };
        assert_eq!(check(config).violation(), Some(RuleViolation::DecayExhausted));
    }

    #[test]
    fn test_supply_exceeds_token_limit() {
        // 10^18 base units per epoch × 250 epochs > u64::MAX
        let config = EmissionConfig {
            initial_target_mint_size_per_epoch: 1_000_000_000 * ONE_TOKEN,
            ..Default::default()
        };
        assert_eq!(check(config).violation(), Some(RuleViolation::SupplyExceedsTokenLimit));
    }

    #[test]
    fn test_message_is_human_readable() {
        let config = EmissionConfig { liquidity_tokens_ratio_percent: 60, ..Default::default() };
        match check(config) {
            ValidationResult::Invalid { message, .. } => {
                assert!(message.starts_with("Liquidity tokens ratio"));
                assert!(message.contains("60%"));
            }
            ValidationResult::Valid => panic!("invalid ratio accepted"),
        }
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationResult::Valid.into_result().is_ok());
        let err = check(EmissionConfig { reduce_ratio_percent: 100, ..Default::default() })
            .into_result()
            .unwrap_err();
        assert_eq!(err, EconomicsError::InvalidLaunch(RuleViolation::ReduceRatio));
    }
}
