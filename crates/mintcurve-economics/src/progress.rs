//! # Launch Progress
//!
//! Where a running launch should be on its schedule, assuming every epoch
//! lasts exactly its target duration. Display only; the chain tracks the
//! real epoch boundaries.

use crate::config::EmissionConfig;
use crate::schedule::EmissionSchedule;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Basis points in 100%
const FULL_BPS: u32 = 10_000;

/// Expected position of a launch at a point in time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchProgress {
    /// Seconds since launch start (0 before start)
    pub elapsed_seconds: u64,
    /// Era the launch is in
    pub current_era: u64,
    /// Epoch index within the current era
    pub epoch_in_era: u64,
    /// Epochs fully completed since launch
    pub completed_epochs: u64,
    /// Supply minted if every completed epoch hit its target (base units)
    pub expected_minted_supply: u128,
    /// Elapsed share of the total duration, in basis points
    pub percent_complete_bps: u32,
    /// Schedule has run to completion
    pub finished: bool,
}

/// Progress at an explicit instant.
pub fn progress_at(
    config: &EmissionConfig,
    schedule: &EmissionSchedule,
    start: DateTime<Utc>,
    now: DateTime<Utc>,
) -> LaunchProgress {
    let total_epochs = config.total_epochs();
    if config.target_seconds_per_epoch == 0 || config.epoches_per_era == 0 || total_epochs == 0 {
        return LaunchProgress::default();
    }

    let elapsed_seconds = now.signed_duration_since(start).num_seconds().max(0) as u64;
    let total_duration = config.total_duration_seconds();
    let finished = elapsed_seconds >= total_duration;

    let completed_epochs = (elapsed_seconds / config.target_seconds_per_epoch).min(total_epochs);
    let (current_era, epoch_in_era) = if finished {
        (config.target_eras - 1, config.epoches_per_era - 1)
    } else {
        (
            completed_epochs / config.epoches_per_era,
            completed_epochs % config.epoches_per_era,
        )
    };

    let percent_complete_bps = if finished {
        FULL_BPS
    } else {
        (elapsed_seconds as u128 * FULL_BPS as u128 / total_duration as u128) as u32
    };

    LaunchProgress {
        elapsed_seconds,
        current_era,
        epoch_in_era,
        completed_epochs,
        expected_minted_supply: expected_supply(config, schedule, completed_epochs),
        percent_complete_bps,
        finished,
    }
}

/// Progress right now.
pub fn progress_now(
    config: &EmissionConfig,
    schedule: &EmissionSchedule,
    start: DateTime<Utc>,
) -> LaunchProgress {
    progress_at(config, schedule, start, Utc::now())
}

fn expected_supply(config: &EmissionConfig, schedule: &EmissionSchedule, completed_epochs: u64) -> u128 {
    let full_eras = completed_epochs / config.epoches_per_era;
    let partial_epochs = completed_epochs % config.epoches_per_era;

    let settled = match full_eras.checked_sub(1).and_then(|era| schedule.era(era)) {
        Some(era) => era.cumulative_supply,
        None if full_eras == 0 => 0,
        None => schedule.total_supply(),
    };
    let running = schedule
        .era(full_eras)
        .map_or(0, |era| era.target_mint_size_per_epoch.saturating_mul(partial_epochs as u128));

    settled.saturating_add(running)
}
