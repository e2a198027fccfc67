//! Launch preview: config, schedule, validation and metrics computed together
//! so the preview table and the submit guard always agree.

use crate::config::{EmissionConfig, LaunchForm};
use crate::error::{EconomicsError, Result};
use crate::metrics::{report, AggregateMetrics};
use crate::schedule::EmissionSchedule;
use crate::validation::{validate, ValidationResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the launch page shows for one set of parameters
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPreview {
    pub config: EmissionConfig,
    pub schedule: EmissionSchedule,
    pub validation: ValidationResult,
    pub metrics: AggregateMetrics,
}

impl LaunchPreview {
    /// Build a preview from normalized parameters
    pub fn from_config(config: EmissionConfig) -> Self {
        let schedule = EmissionSchedule::generate(&config);
        let validation = validate(&config, &schedule);
        let metrics = report(&config, &schedule);

        debug!(
            valid = validation.is_valid(),
            total_supply = metrics.total_supply,
            "computed launch preview"
        );

        Self {
            config,
            schedule,
            validation,
            metrics,
        }
    }

    /// Normalize a raw form and build its preview
    pub fn from_form(form: &LaunchForm) -> Result<Self> {
        Ok(Self::from_config(form.to_config()?))
    }

    pub fn is_valid(&self) -> bool {
        self.validation.is_valid()
    }

    /// Arguments for the launch transaction; only available when valid
    pub fn instruction_args(&self) -> Result<LaunchInstructionArgs> {
        self.validation.clone().into_result()?;
        LaunchInstructionArgs::try_from(&self.config)
    }
}

/// Scaled integers handed to the external launch transaction builder
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchInstructionArgs {
    pub target_eras: u64,
    pub epoches_per_era: u64,
    pub target_seconds_per_epoch: u64,
    pub reduce_ratio: u8,
    pub initial_mint_size: u64,
    pub initial_target_mint_size_per_epoch: u64,
    pub fee_rate: u64,
    pub liquidity_tokens_ratio: u8,
}

impl TryFrom<&EmissionConfig> for LaunchInstructionArgs {
    type Error = EconomicsError;

    fn try_from(config: &EmissionConfig) -> Result<Self> {
        Ok(Self {
            target_eras: config.target_eras,
            epoches_per_era: config.epoches_per_era,
            target_seconds_per_epoch: config.target_seconds_per_epoch,
            reduce_ratio: narrow("reduce_ratio", config.reduce_ratio_percent)?,
            initial_mint_size: narrow("initial_mint_size", config.initial_mint_size)?,
            initial_target_mint_size_per_epoch: narrow(
                "initial_target_mint_size_per_epoch",
                config.initial_target_mint_size_per_epoch,
            )?,
            fee_rate: narrow("fee_rate", config.fee_rate)?,
            liquidity_tokens_ratio: narrow("liquidity_tokens_ratio", config.liquidity_tokens_ratio_percent)?,
        })
    }
}

fn narrow<T, U>(field: &'static str, value: T) -> Result<U>
where
    U: TryFrom<T>,
{
    U::try_from(value).map_err(|_| EconomicsError::InstructionOverflow { field })
}
