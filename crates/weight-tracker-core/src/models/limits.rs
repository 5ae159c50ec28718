// ABOUTME: Validation limits value object and the backend configuration payload
// ABOUTME: Hardcoded defaults plus invariant checking for remotely supplied limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Numeric bounds applied to profile and weight form values
///
/// Treated as an immutable value: providers replace the whole object rather
/// than mutating fields in place.
///
/// # Examples
///
/// ```rust
/// use weight_tracker_core::models::ValidationLimits;
///
/// let limits = ValidationLimits::default();
/// assert!(limits.validate().is_ok());
/// assert!((limits.weight_variation_per_day - 5.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationLimits {
    /// Minimum height (meters, inclusive)
    pub height_min: f64,
    /// Maximum height (meters, inclusive)
    pub height_max: f64,
    /// Minimum weight (kilograms, inclusive)
    pub weight_min: f64,
    /// Maximum weight (kilograms, inclusive)
    pub weight_max: f64,
    /// Earliest accepted birth date (inclusive)
    pub birth_date_min: NaiveDate,
    /// Allowed weight change per elapsed day (kilograms)
    pub weight_variation_per_day: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        let (year, month, day) = limits::BIRTH_DATE_MIN;
        Self {
            height_min: limits::HEIGHT_MIN_M,
            height_max: limits::HEIGHT_MAX_M,
            weight_min: limits::WEIGHT_MIN_KG,
            weight_max: limits::WEIGHT_MAX_KG,
            birth_date_min: NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN),
            weight_variation_per_day: limits::WEIGHT_VARIATION_PER_DAY_KG,
        }
    }
}

impl ValidationLimits {
    /// Check the ordering invariants between bounds
    ///
    /// NaN bounds never compare as ordered and are rejected.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` naming the first violated invariant
    pub fn validate(&self) -> AppResult<()> {
        if self.height_min.partial_cmp(&self.height_max) != Some(Ordering::Less) {
            return Err(AppError::config_invalid(format!(
                "height_min ({}) must be < height_max ({})",
                self.height_min, self.height_max
            )));
        }
        if self.weight_min.partial_cmp(&self.weight_max) != Some(Ordering::Less) {
            return Err(AppError::config_invalid(format!(
                "weight_min ({}) must be < weight_max ({})",
                self.weight_min, self.weight_max
            )));
        }
        if self.weight_variation_per_day.partial_cmp(&0.0) != Some(Ordering::Greater) {
            return Err(AppError::config_invalid(format!(
                "weight_variation_per_day ({}) must be > 0",
                self.weight_variation_per_day
            )));
        }
        Ok(())
    }
}

/// Body of `GET /api/config`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Limits the backend wants the client to enforce
    pub validation_limits: ValidationLimits,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_backend_fallback() {
        let limits = ValidationLimits::default();
        assert!((limits.height_min - 0.4).abs() < f64::EPSILON);
        assert!((limits.height_max - 2.72).abs() < f64::EPSILON);
        assert!((limits.weight_min - 2.0).abs() < f64::EPSILON);
        assert!((limits.weight_max - 650.0).abs() < f64::EPSILON);
        assert_eq!(
            limits.birth_date_min,
            NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let limits = ValidationLimits {
            height_min: 2.0,
            height_max: 1.0,
            ..ValidationLimits::default()
        };
        assert!(limits.validate().is_err());

        let limits = ValidationLimits {
            weight_min: 650.0,
            ..ValidationLimits::default()
        };
        assert!(limits.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_variation() {
        for variation in [0.0, -1.0, f64::NAN] {
            let limits = ValidationLimits {
                weight_variation_per_day: variation,
                ..ValidationLimits::default()
            };
            assert!(limits.validate().is_err(), "variation {variation} accepted");
        }
    }

    #[test]
    fn test_remote_config_deserialization() {
        let payload = serde_json::json!({
            "validation_limits": {
                "height_min": 0.5,
                "height_max": 2.5,
                "weight_min": 3,
                "weight_max": 500,
                "birth_date_min": "1910-06-01",
                "weight_variation_per_day": 4
            }
        });
        let config: RemoteConfig = serde_json::from_value(payload).unwrap();
        assert!((config.validation_limits.weight_max - 500.0).abs() < f64::EPSILON);
        assert_eq!(
            config.validation_limits.birth_date_min,
            NaiveDate::from_ymd_opt(1910, 6, 1).unwrap()
        );
    }
}
