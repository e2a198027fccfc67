//! Launch form loading
//!
//! Layers, lowest priority first: built-in defaults, the TOML launch file,
//! `MINTCURVE_*` environment variables, command-line overrides.

use anyhow::{Context, Result};
use clap::Args;
use config::{Config, Environment, File as ConfigFile};
use mintcurve_economics::LaunchForm;
use std::path::Path;

/// Environment variable prefix for form fields
pub const ENV_PREFIX: &str = "MINTCURVE";

/// Per-field overrides taken from the command line
#[derive(Args, Debug, Default, Clone)]
pub struct FormOverrides {
    /// Number of decay eras
    #[arg(long)]
    pub target_eras: Option<String>,

    /// Epochs per era
    #[arg(long)]
    pub epoches_per_era: Option<String>,

    /// Target seconds per epoch
    #[arg(long)]
    pub target_seconds_per_epoch: Option<String>,

    /// Percent of the epoch ceiling kept each era (50-99)
    #[arg(long)]
    pub reduce_ratio: Option<String>,

    /// Size of one mint, in tokens
    #[arg(long)]
    pub initial_mint_size: Option<String>,

    /// Era 0 mint ceiling per epoch, in tokens
    #[arg(long)]
    pub initial_target_mint_size_per_epoch: Option<String>,

    /// Fee per mint, in native tokens
    #[arg(long)]
    pub fee_rate: Option<String>,

    /// Percent of supply reserved for liquidity (1-50)
    #[arg(long)]
    pub liquidity_tokens_ratio: Option<String>,
}

impl FormOverrides {
    pub fn apply(&self, form: &mut LaunchForm) {
        let fields = [
            (&self.target_eras, &mut form.target_eras),
            (&self.epoches_per_era, &mut form.epoches_per_era),
            (&self.target_seconds_per_epoch, &mut form.target_seconds_per_epoch),
            (&self.reduce_ratio, &mut form.reduce_ratio),
            (&self.initial_mint_size, &mut form.initial_mint_size),
            (
                &self.initial_target_mint_size_per_epoch,
                &mut form.initial_target_mint_size_per_epoch,
            ),
            (&self.fee_rate, &mut form.fee_rate),
            (&self.liquidity_tokens_ratio, &mut form.liquidity_tokens_ratio),
        ];

        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
    }
}

/// Load the launch form from every configured layer
pub fn load_form(path: &Path, env_prefix: &str, overrides: &FormOverrides) -> Result<LaunchForm> {
    let mut builder = Config::builder()
        .add_source(Config::try_from(&LaunchForm::default()).context("encoding default form")?);

    if path.exists() {
        tracing::debug!("Loading launch file {:?}", path);
        builder = builder.add_source(ConfigFile::from(path));
    } else {
        tracing::info!("Launch file {:?} not found, using defaults", path);
    }

    builder = builder.add_source(Environment::with_prefix(env_prefix));

    let mut form: LaunchForm = builder
        .build()
        .with_context(|| format!("reading launch parameters from {:?}", path))?
        .try_deserialize()
        .context("launch parameters have an unexpected shape")?;

    overrides.apply(&mut form);
    Ok(form)
}
