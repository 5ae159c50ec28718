// ABOUTME: Range predicates for height, weight and birth date plus the daily variation limiter
// ABOUTME: Pure functions over a ValidationLimits snapshot; only the birth-date check reads the clock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation Module
//!
//! All bounds are inclusive. NaN inputs fail every comparison and are
//! therefore reported as invalid without special-casing.

use chrono::{Local, NaiveDate};
use weight_tracker_core::constants::limits::VARIATION_TOLERANCE_KG;
use weight_tracker_core::models::ValidationLimits;

/// Accepted birth date wire format
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

/// `height_min <= height_m <= height_max`
#[must_use]
pub fn is_height_valid(limits: &ValidationLimits, height_m: f64) -> bool {
    (limits.height_min..=limits.height_max).contains(&height_m)
}

/// `weight_min <= weight_kg <= weight_max`
#[must_use]
pub fn is_weight_valid(limits: &ValidationLimits, weight_kg: f64) -> bool {
    (limits.weight_min..=limits.weight_max).contains(&weight_kg)
}

/// `birth_date_min <= date <= today`, with `today` supplied by the caller
#[must_use]
pub fn is_birth_date_valid_on(limits: &ValidationLimits, date: NaiveDate, today: NaiveDate) -> bool {
    limits.birth_date_min <= date && date <= today
}

/// Birth-date check against the current local date
///
/// Reads the clock on every call, so the same input can flip from invalid
/// to valid at local midnight.
#[must_use]
pub fn is_birth_date_valid(limits: &ValidationLimits, date: NaiveDate) -> bool {
    is_birth_date_valid_on(limits, date, Local::now().date_naive())
}

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace
#[must_use]
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), BIRTH_DATE_FORMAT).ok()
}

/// Birth-date check for raw form input; unparseable text is invalid
#[must_use]
pub fn is_birth_date_str_valid(limits: &ValidationLimits, raw: &str) -> bool {
    parse_birth_date(raw).is_some_and(|date| is_birth_date_valid(limits, date))
}

/// Largest weight change allowed over `days` elapsed days
#[must_use]
pub fn max_allowed_variation(limits: &ValidationLimits, days: u32) -> f64 {
    f64::from(days) * limits.weight_variation_per_day
}

/// Whether moving from `last_kg` to `new_kg` within `days` stays within the limit
///
/// A change exactly equal to the limit is accepted, including one-decimal
/// inputs whose difference carries floating point noise (`64.4 - 54.4`).
#[must_use]
pub fn is_weight_variation_allowed(
    limits: &ValidationLimits,
    last_kg: f64,
    new_kg: f64,
    days: u32,
) -> bool {
    (new_kg - last_kg).abs() <= max_allowed_variation(limits, days) + VARIATION_TOLERANCE_KG
}
