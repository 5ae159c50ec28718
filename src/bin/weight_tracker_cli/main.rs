// ABOUTME: Weight Tracker CLI - validation, BMI, and dashboard commands against the backend
// ABOUTME: Parses arguments, applies configuration overrides, and dispatches to command modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the validation limits in effect (remote if the backend answers)
//! weight-tracker limits
//!
//! # Check single values
//! weight-tracker check height 1.75
//! weight-tracker check birth-date 1990-01-15
//!
//! # Compute and classify a BMI without the backend
//! weight-tracker --offline bmi --weight 70 --height 1.75
//!
//! # Check a weight change over two days
//! weight-tracker variation --last 70 --new 80 --days 2
//!
//! # Show the dashboard, save the profile, record a weight
//! weight-tracker dashboard
//! weight-tracker profile --first-name Ana --last-name García --birth-date 1990-01-15 --height 1.70
//! weight-tracker weight 70.5
//! weight-tracker weight 72 --last 70.5 --last-date 2024-06-13
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use weight_tracker::{config::ClientConfig, errors::AppResult, logging::LoggingConfig};

type Result<T> = AppResult<T>;
use tracing::debug;

use commands::Context;

#[derive(Parser)]
#[command(
    name = "weight-tracker",
    about = "Weight and BMI tracker client",
    long_about = "Command-line client for the Weight Tracker backend: validation limits, BMI classification, and weight recording."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    backend_url: Option<String>,

    /// UI language override (e.g. es, en)
    #[arg(long, global = true)]
    language: Option<String>,

    /// Do not contact the backend; use defaults and bundled translations
    #[arg(long, global = true)]
    offline: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the validation limits in effect
    Limits,

    /// Check a single value against the validation limits
    Check {
        #[command(subcommand)]
        target: CheckCommand,
    },

    /// Compute and classify a BMI
    Bmi {
        /// Weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Height in meters
        #[arg(long, allow_negative_numbers = true)]
        height: f64,
    },

    /// Check a weight change against the daily variation limit
    Variation {
        /// Previous weight in kilograms
        #[arg(long)]
        last: f64,

        /// New weight in kilograms
        #[arg(long)]
        new: f64,

        /// Days elapsed between the two weights
        #[arg(long, default_value = "1")]
        days: u32,
    },

    /// Show greeting, BMI, and weight statistics
    Dashboard,

    /// Create or update the user profile
    Profile {
        /// Given name
        #[arg(long)]
        first_name: String,

        /// Family names
        #[arg(long)]
        last_name: String,

        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: String,

        /// Height in meters
        #[arg(long)]
        height: String,
    },

    /// Record a new weight
    Weight {
        /// Weight in kilograms
        value: String,

        /// Previous weight in kilograms, checked against the variation limit
        #[arg(long, requires = "last_date")]
        last: Option<f64>,

        /// Date of the previous weight (YYYY-MM-DD)
        #[arg(long, requires = "last")]
        last_date: Option<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CheckCommand {
    /// Height in meters
    Height {
        /// Value as typed
        value: String,
    },

    /// Weight in kilograms
    Weight {
        /// Value as typed
        value: String,
    },

    /// Birth date (YYYY-MM-DD)
    BirthDate {
        /// Value as typed
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    LoggingConfig::from_env()
        .with_log_level(config.log_level_for(cli.verbose))
        .init()?;

    if let Some(backend_url) = cli.backend_url.as_deref() {
        config = config.with_backend_url(backend_url);
    }
    if let Some(language) = cli.language.as_deref() {
        config = config.with_language(language);
    }
    config.validate()?;
    debug!("{}", config.summary());

    let ctx = Context::new(config, cli.offline);

    match cli.command {
        Command::Limits => commands::check::limits(&ctx).await?,
        Command::Check { target } => match target {
            CheckCommand::Height { value } => commands::check::height(&ctx, &value).await?,
            CheckCommand::Weight { value } => commands::check::weight(&ctx, &value).await?,
            CheckCommand::BirthDate { value } => {
                commands::check::birth_date(&ctx, &value).await?;
            }
        },
        Command::Bmi { weight, height } => commands::check::bmi(&ctx, weight, height).await?,
        Command::Variation { last, new, days } => {
            commands::check::variation(&ctx, last, new, days).await?;
        }
        Command::Dashboard => commands::tracker::dashboard(&ctx).await?,
        Command::Profile {
            first_name,
            last_name,
            birth_date,
            height,
        } => {
            commands::tracker::profile(&ctx, first_name, last_name, birth_date, height).await?;
        }
        Command::Weight {
            value,
            last,
            last_date,
        } => {
            commands::tracker::weight(&ctx, value, last.zip(last_date)).await?;
        }
    }

    Ok(())
}
