//! # MintCurve Economics - Fair-Mint Emission Engine
//!
//! Deterministic tokenomics calculator for a fair-mint token launch.
//! Reproduces the on-chain program's integer decay arithmetic so that the
//! launch preview never disagrees with what the chain will enforce.
//!
//! ## Pipeline
//!
//! ```text
//! ┌────────────┐   ┌────────────────┐   ┌──────────────────┐   ┌──────────────────┐
//! │ LaunchForm │──▶│ EmissionConfig │──▶│ EmissionSchedule │──▶│ ValidationResult │
//! │ (raw text) │   │  (base units)  │   │  (per-era rows)  │──▶│ AggregateMetrics │
//! └────────────┘   └────────────────┘   └──────────────────┘   └──────────────────┘
//! ```
//!
//! ## Decay
//!
//! | Era | Target mint size per epoch |
//! |-----|----------------------------|
//! | 0 | `initial_target_mint_size_per_epoch` |
//! | 1 | `floor(era0 × reduce_ratio / 100)` |
//! | 2 | `floor(era1 × reduce_ratio / 100)` |
//! | ... | (floor decay continues) |
//!
//! Amounts are `u128` base units. One display token is `10^9` base units.

pub mod error;
pub mod math;
pub mod normalize;
pub mod config;
pub mod schedule;
pub mod validation;
pub mod metrics;
pub mod progress;
pub mod preview;

// Re-exports
pub use error::{EconomicsError, NormalizeError, Result};
pub use normalize::{normalize_scaled, parse_integer, sanitize_decimal, sanitize_integer, to_base_units};
pub use config::{EmissionConfig, LaunchForm};
pub use schedule::{generate, EmissionSchedule, EraRecord};
pub use validation::{validate, RuleViolation, ValidationResult};
pub use metrics::{format_base_units, report, AggregateMetrics};
pub use progress::{progress_at, progress_now, LaunchProgress};
pub use preview::{LaunchInstructionArgs, LaunchPreview};

/// Fair-mint launch constants
pub mod constants {
    /// Decimal places of a token amount
    pub const BASE_UNIT_DECIMALS: u32 = 9;

    /// One display token in base units
    pub const ONE_TOKEN: u128 = 1_000_000_000; // 10^9

    /// Denominator for every percent-valued parameter
    pub const PERCENT_DENOMINATOR: u64 = 100;

    /// Lowest accepted reduce ratio (inclusive)
    pub const MIN_REDUCE_RATIO_PERCENT: u64 = 50;

    /// Reduce ratio upper bound (exclusive)
    pub const MAX_REDUCE_RATIO_PERCENT: u64 = 100;

    /// Highest accepted liquidity ratio (inclusive)
    pub const MAX_LIQUIDITY_RATIO_PERCENT: u64 = 50;

    /// Epoch 0 ceiling must cover at least this many initial mints
    pub const MIN_MINTS_PER_EPOCH: u128 = 10;

    /// Largest amount the on-chain token program can hold (u64 amounts)
    pub const TOKEN_AMOUNT_LIMIT: u128 = u64::MAX as u128;

    /// Eras materialized by the generator before it stops expanding rows
    pub const MAX_SCHEDULE_ERAS: u64 = 10_000;
}

pub use constants::*;
