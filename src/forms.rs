// ABOUTME: Validation of raw profile and weight form input against the current limits
// ABOUTME: Turns strings into validated models or field errors with localized messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Form validation
//!
//! Forms hold exactly what the user typed. Validation parses each field,
//! applies the range predicates from the intelligence crate and either
//! returns the model to send to the backend or the failing fields.

use crate::constants::message_keys;
use crate::errors::{AppError, ErrorCode};
use crate::i18n::Messages;
use crate::models::{UserProfile, ValidationLimits, WeightEntry};
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;
use weight_tracker_intelligence::validation;

/// Input fields known to the forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Given name
    FirstName,
    /// Family names
    LastName,
    /// Date of birth
    BirthDate,
    /// Height in meters
    Height,
    /// Weight in kilograms
    Weight,
}

impl FormField {
    /// Stable field name used in logs and error context
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::BirthDate => "birth_date",
            Self::Height => "height_m",
            Self::Weight => "weight_kg",
        }
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Field left empty
    #[error("{} is required", .0.as_str())]
    Required(FormField),
    /// Field is not a finite number
    #[error("{} is not a valid number", .0.as_str())]
    InvalidNumber(FormField),
    /// Height outside the current limits
    #[error("height is outside the allowed range")]
    HeightOutOfRange,
    /// Weight outside the current limits
    #[error("weight is outside the allowed range")]
    WeightOutOfRange,
    /// Birth date unparseable, too early, or in the future
    #[error("birth date is outside the allowed range")]
    BirthDateOutOfRange,
    /// Weight changed faster than the daily limit allows
    #[error("weight changed by more than {max_kg} kg in {days} day(s)")]
    VariationExceeded {
        /// Largest change allowed over `days`
        max_kg: f64,
        /// Days since the previous entry
        days: u32,
    },
}

impl FieldError {
    /// Field the error belongs to
    #[must_use]
    pub const fn field(&self) -> FormField {
        match self {
            Self::Required(field) | Self::InvalidNumber(field) => *field,
            Self::HeightOutOfRange => FormField::Height,
            Self::WeightOutOfRange | Self::VariationExceeded { .. } => FormField::Weight,
            Self::BirthDateOutOfRange => FormField::BirthDate,
        }
    }

    /// Translation key of the message shown to the user
    #[must_use]
    pub const fn message_key(&self) -> &'static str {
        match self {
            Self::Required(_) => message_keys::REQUIRED_FIELD,
            Self::InvalidNumber(_) => message_keys::INVALID_NUMBER,
            Self::HeightOutOfRange => message_keys::HEIGHT_OUT_OF_RANGE,
            Self::WeightOutOfRange => message_keys::WEIGHT_OUT_OF_RANGE,
            Self::BirthDateOutOfRange => message_keys::BIRTH_DATE_OUT_OF_RANGE,
            Self::VariationExceeded { .. } => message_keys::WEIGHT_VARIATION_EXCEEDED,
        }
    }

    /// Localized message
    #[must_use]
    pub fn message(&self, messages: &Messages) -> String {
        match self {
            Self::VariationExceeded { max_kg, days } => {
                messages.weight_variation_exceeded(*max_kg, *days)
            }
            _ => messages.error(self.message_key()).to_owned(),
        }
    }

    /// Application error carrying the localized message
    #[must_use]
    pub fn to_app_error(&self, messages: &Messages) -> AppError {
        let code = match self {
            Self::Required(_) => ErrorCode::MissingRequiredField,
            Self::InvalidNumber(_) => ErrorCode::InvalidInput,
            _ => ErrorCode::ValueOutOfRange,
        };
        AppError::new(code, self.message(messages))
            .with_resource_id(self.field().as_str())
            .with_details(serde_json::json!({ "reason": self.to_string() }))
    }
}

/// Parse a user-typed decimal, accepting a comma as decimal separator
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Whole days between `last` and `now`, never less than one
///
/// Two entries on the same day are checked against a single day's allowance.
#[must_use]
pub fn elapsed_days(last: &WeightEntry, now: DateTime<Utc>) -> u32 {
    u32::try_from(last.days_until(now).max(1)).unwrap_or(u32::MAX)
}

fn parse_number_field(raw: &str, field: FormField) -> Result<f64, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::Required(field));
    }
    parse_decimal(raw).ok_or(FieldError::InvalidNumber(field))
}

/// Raw profile form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Given name as typed
    pub first_name: String,
    /// Family names as typed
    pub last_name: String,
    /// Birth date as typed (`YYYY-MM-DD`)
    pub birth_date: String,
    /// Height as typed (meters)
    pub height_m: String,
}

impl ProfileForm {
    /// Validate every field against `limits`, with `today` as the latest birth date
    ///
    /// # Errors
    ///
    /// Returns all failing fields in form order
    pub fn validate(
        &self,
        limits: &ValidationLimits,
        today: NaiveDate,
    ) -> Result<UserProfile, Vec<FieldError>> {
        let mut errors = Vec::new();

        let first_name = self.first_name.trim();
        if first_name.is_empty() {
            errors.push(FieldError::Required(FormField::FirstName));
        }
        let last_name = self.last_name.trim();
        if last_name.is_empty() {
            errors.push(FieldError::Required(FormField::LastName));
        }

        let birth_date = if self.birth_date.trim().is_empty() {
            errors.push(FieldError::Required(FormField::BirthDate));
            None
        } else {
            let parsed = validation::parse_birth_date(&self.birth_date)
                .filter(|&date| validation::is_birth_date_valid_on(limits, date, today));
            if parsed.is_none() {
                errors.push(FieldError::BirthDateOutOfRange);
            }
            parsed
        };

        let height_m = match parse_number_field(&self.height_m, FormField::Height) {
            Ok(height) if validation::is_height_valid(limits, height) => Some(height),
            Ok(_) => {
                errors.push(FieldError::HeightOutOfRange);
                None
            }
            Err(e) => {
                errors.push(e);
                None
            }
        };

        match (birth_date, height_m) {
            (Some(birth_date), Some(height_m)) if errors.is_empty() => Ok(UserProfile {
                first_name: first_name.to_owned(),
                last_name: last_name.to_owned(),
                birth_date,
                height_m,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw weight form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightForm {
    /// Weight as typed (kilograms)
    pub value_kg: String,
}

impl WeightForm {
    /// Form holding `value_kg`
    #[must_use]
    pub fn new(value_kg: impl Into<String>) -> Self {
        Self {
            value_kg: value_kg.into(),
        }
    }

    /// Validate the weight, and its change since `last` when there is one
    ///
    /// # Errors
    ///
    /// Returns the first failing check: presence, number, range, variation
    pub fn validate(
        &self,
        limits: &ValidationLimits,
        last: Option<&WeightEntry>,
        now: DateTime<Utc>,
    ) -> Result<f64, FieldError> {
        let value_kg = parse_number_field(&self.value_kg, FormField::Weight)?;
        if !validation::is_weight_valid(limits, value_kg) {
            return Err(FieldError::WeightOutOfRange);
        }

        if let Some(last) = last {
            let days = elapsed_days(last, now);
            if !validation::is_weight_variation_allowed(limits, last.value_kg, value_kg, days) {
                return Err(FieldError::VariationExceeded {
                    max_kg: validation::max_allowed_variation(limits, days),
                    days,
                });
            }
        }
        Ok(value_kg)
    }
}
