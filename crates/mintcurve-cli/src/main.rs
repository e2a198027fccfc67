//! MintCurve CLI
//!
//! Preview and validate fair-mint launch parameters from the command line.

mod launch_file;

use anyhow::{bail, Context};
use chrono::{TimeZone, Utc};
use clap::{Parser, Subcommand};
use launch_file::{load_form, FormOverrides, ENV_PREFIX};
use mintcurve_economics::{
    format_base_units, progress_at, LaunchForm, LaunchInstructionArgs, LaunchPreview,
    ValidationResult,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "mintcurve")]
#[command(version)]
#[command(about = "MintCurve - fair-mint emission schedule preview", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Launch parameter file (TOML)
    #[arg(short, long, global = true, default_value = "launch.toml")]
    config: PathBuf,

    /// Print JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full emission schedule and aggregate metrics
    Preview {
        #[command(flatten)]
        overrides: FormOverrides,
    },

    /// Check launch parameters; exits non-zero when they are rejected
    Validate {
        #[command(flatten)]
        overrides: FormOverrides,
    },

    /// Expected position of a running launch
    Progress {
        /// Launch start (unix seconds)
        #[arg(long)]
        start: i64,

        /// Point in time to evaluate (unix seconds, default: now)
        #[arg(long)]
        now: Option<i64>,

        #[command(flatten)]
        overrides: FormOverrides,
    },

    /// Print the default launch file
    Defaults,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_writer(std::io::stderr))
        .init();
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_preview(preview: &LaunchPreview) {
    let metrics = &preview.metrics;

    println!("{:>5}  {:>14}  {:>24}  {:>24}  {:>24}", "era", "start (s)", "mint/epoch", "era supply", "cumulative");
    for era in &preview.schedule {
        println!(
            "{:>5}  {:>14}  {:>24}  {:>24}  {:>24}",
            era.era_index,
            era.start_offset_seconds,
            format_base_units(era.target_mint_size_per_epoch),
            format_base_units(era.era_supply),
            format_base_units(era.cumulative_supply),
        );
    }

    println!();
    println!("Total supply:      {}", format_base_units(metrics.total_supply));
    println!("Liquidity supply:  {}", format_base_units(metrics.liquidity_supply));
    println!("Community supply:  {}", format_base_units(metrics.community_supply));
    println!("Total duration:    {} s", metrics.total_duration_seconds);
    println!("Total epochs:      {}", metrics.total_epochs);
    println!("Fee revenue:       {}", format_base_units(metrics.total_fee_revenue));
    println!("Mints in epoch 0:  {}", metrics.max_mints_in_first_epoch);
    println!();
    print_validation(&preview.validation);
}

fn print_validation(validation: &ValidationResult) {
    match validation {
        ValidationResult::Valid => println!("Validation: OK"),
        ValidationResult::Invalid { kind, message } => {
            println!("Validation: REJECTED [{}] {}", kind.code(), message)
        }
    }
}

/// Print the validation outcome; rejected parameters become an error
fn check_launch(form: &LaunchForm, json: bool) -> anyhow::Result<LaunchInstructionArgs> {
    let preview = LaunchPreview::from_form(form)?;

    if json {
        print_json(&preview.validation)?;
    } else {
        print_validation(&preview.validation);
    }

    if let ValidationResult::Invalid { kind, .. } = &preview.validation {
        bail!("launch parameters rejected: {kind}");
    }

    Ok(preview.instruction_args()?)
}

fn timestamp(seconds: i64) -> anyhow::Result<chrono::DateTime<Utc>> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .with_context(|| format!("{seconds} is not a valid unix timestamp"))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Preview { overrides } => {
            let form = load_form(&cli.config, ENV_PREFIX, &overrides)?;
            let preview = LaunchPreview::from_form(&form)?;

            if cli.json {
                print_json(&preview)?;
            } else {
                print_preview(&preview);
            }
        }

        Commands::Validate { overrides } => {
            let form = load_form(&cli.config, ENV_PREFIX, &overrides)?;
            let args = check_launch(&form, cli.json)?;
            tracing::info!(?args, "launch instruction arguments ready");
        }

        Commands::Progress { start, now, overrides } => {
            let form = load_form(&cli.config, ENV_PREFIX, &overrides)?;
            let preview = LaunchPreview::from_form(&form)?;
            preview.validation.clone().into_result()?;

            let start = timestamp(start)?;
            let now = match now {
                Some(seconds) => timestamp(seconds)?,
                None => Utc::now(),
            };
            let progress = progress_at(&preview.config, &preview.schedule, start, now);

            if cli.json {
                print_json(&progress)?;
            } else {
                println!("Elapsed:          {} s", progress.elapsed_seconds);
                println!("Era:              {}", progress.current_era);
                println!("Epoch in era:     {}", progress.epoch_in_era);
                println!("Completed epochs: {}", progress.completed_epochs);
                println!("Expected minted:  {}", format_base_units(progress.expected_minted_supply));
                println!(
                    "Complete:         {}.{:02}%",
                    progress.percent_complete_bps / 100,
                    progress.percent_complete_bps % 100
                );
                if progress.finished {
                    println!("Launch finished");
                }
            }
        }

        Commands::Defaults => {
            print!("{}", toml::to_string(&LaunchForm::default())?);
        }
    }

    Ok(())
}
