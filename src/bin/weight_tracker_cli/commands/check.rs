// ABOUTME: Validation and BMI commands for the weight-tracker CLI
// ABOUTME: Handles limits display, single-value checks, BMI classification, and variation checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use weight_tracker::{
    constants::message_keys,
    errors::{AppError, AppResult},
    forms::{parse_decimal, FieldError, FormField},
    intelligence::{classify, compute_bmi, describe, validation},
};

type Result<T> = AppResult<T>;
use chrono::Local;
use tracing::info;

use super::Context;
use crate::helpers::display::{display_limits, display_verdict};

/// Show the limits in effect
pub async fn limits(ctx: &Context) -> Result<()> {
    let provider = ctx.limits().await?;
    display_limits(&provider.get_limits(), provider.origin());
    Ok(())
}

/// Check a height
pub async fn height(ctx: &Context, raw: &str) -> Result<()> {
    let provider = ctx.limits().await?;
    let messages = ctx.messages().await?;
    let height_m = parse_decimal(raw)
        .ok_or_else(|| FieldError::InvalidNumber(FormField::Height).to_app_error(&messages))?;

    let valid = provider.is_height_valid(height_m);
    display_verdict(&format!("height {height_m} m"), valid);
    if valid {
        Ok(())
    } else {
        Err(FieldError::HeightOutOfRange.to_app_error(&messages))
    }
}

/// Check a weight
pub async fn weight(ctx: &Context, raw: &str) -> Result<()> {
    let provider = ctx.limits().await?;
    let messages = ctx.messages().await?;
    let weight_kg = parse_decimal(raw)
        .ok_or_else(|| FieldError::InvalidNumber(FormField::Weight).to_app_error(&messages))?;

    let valid = provider.is_weight_valid(weight_kg);
    display_verdict(&format!("weight {weight_kg} kg"), valid);
    if valid {
        Ok(())
    } else {
        Err(FieldError::WeightOutOfRange.to_app_error(&messages))
    }
}

/// Check a birth date against today's local date
pub async fn birth_date(ctx: &Context, raw: &str) -> Result<()> {
    let provider = ctx.limits().await?;
    let messages = ctx.messages().await?;
    let limits = provider.get_limits();

    let valid = validation::is_birth_date_str_valid(&limits, raw);
    display_verdict(&format!("birth date {}", raw.trim()), valid);
    if valid {
        Ok(())
    } else {
        info!(today = %Local::now().date_naive(), min = %limits.birth_date_min, "Birth date rejected");
        Err(FieldError::BirthDateOutOfRange.to_app_error(&messages))
    }
}

/// Compute, classify, and describe a BMI
pub async fn bmi(ctx: &Context, weight_kg: f64, height_m: f64) -> Result<()> {
    let messages = ctx.messages().await?;
    let value = compute_bmi(weight_kg, height_m);

    if value.abs() < f64::EPSILON {
        println!("BMI: 0");
        println!("{}", messages.text(message_keys::NO_WEIGHT_RECORDS));
        return Ok(());
    }

    println!("BMI: {value}");
    println!("Band: {}", classify(value));
    println!("{}", describe(value, &messages));
    Ok(())
}

/// Check a weight change over `days`
pub async fn variation(ctx: &Context, last_kg: f64, new_kg: f64, days: u32) -> Result<()> {
    let provider = ctx.limits().await?;
    let messages = ctx.messages().await?;
    let limits = provider.get_limits();
    let max_kg = validation::max_allowed_variation(&limits, days);

    let allowed = validation::is_weight_variation_allowed(&limits, last_kg, new_kg, days);
    display_verdict(
        &format!(
            "change of {:.2} kg over {days} day(s) (max {max_kg} kg)",
            (new_kg - last_kg).abs()
        ),
        allowed,
    );
    if allowed {
        Ok(())
    } else {
        Err(AppError::value_out_of_range(
            messages.weight_variation_exceeded(max_kg, days),
        ))
    }
}
