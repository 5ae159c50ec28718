// ABOUTME: Backend-backed commands for the weight-tracker CLI
// ABOUTME: Handles dashboard display, profile saving, and weight recording through a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use weight_tracker::{
    errors::{AppError, AppResult},
    forms::{ProfileForm, WeightForm},
    models::WeightEntry,
    session::TrackerSession,
};

type Result<T> = AppResult<T>;
use tracing::info;

use super::Context;
use crate::helpers::display::display_dashboard;

async fn start_session(ctx: &Context) -> Result<TrackerSession> {
    if ctx.offline {
        return Err(AppError::invalid_input(
            "This command needs the backend; remove --offline",
        ));
    }
    let session = TrackerSession::start(&ctx.config).await?;
    let remote = session.wait_for_limits().await;
    info!(remote_limits = remote, "Session ready");
    Ok(session)
}

/// Show the dashboard
pub async fn dashboard(ctx: &Context) -> Result<()> {
    let session = start_session(ctx).await?;
    let view = session.load_dashboard().await?;
    display_dashboard(&view);
    Ok(())
}

/// Save the user profile
pub async fn profile(
    ctx: &Context,
    first_name: String,
    last_name: String,
    birth_date: String,
    height_m: String,
) -> Result<()> {
    let session = start_session(ctx).await?;
    let form = ProfileForm {
        first_name,
        last_name,
        birth_date,
        height_m,
    };
    let profile = session.submit_profile(&form).await?;
    println!("{}", session.messages().greeting(&profile.first_name));
    Ok(())
}

/// Record a weight and show the refreshed dashboard
///
/// `previous` is the last recorded weight and its date, used for the
/// variation check since the backend cannot list past entries.
pub async fn weight(ctx: &Context, value: String, previous: Option<(f64, String)>) -> Result<()> {
    let session = start_session(ctx).await?;
    if let Some((value_kg, date)) = previous {
        let recorded_at = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .ok()
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|midnight| midnight.and_utc())
            .ok_or_else(|| {
                AppError::invalid_input(format!("Invalid --last-date '{date}', expected YYYY-MM-DD"))
            })?;
        session.seed_history(&[WeightEntry::new(value_kg, recorded_at)]);
    }
    let recorded = session.submit_weight(&WeightForm::new(value)).await?;
    info!(weight_kg = recorded, "Weight submitted");
    let view = session.load_dashboard().await?;
    display_dashboard(&view);
    Ok(())
}
