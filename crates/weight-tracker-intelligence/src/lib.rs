// ABOUTME: BMI computation, classification, and validation predicates
// ABOUTME: Pure functions consuming a ValidationLimits snapshot and raw form values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Tracker Intelligence
//!
//! The validation-and-classification core of the weight tracker:
//!
//! - **bmi**: BMI formula, six-band classification, localized description
//! - **validation**: height, weight, birth-date, and weight-variation checks
//!
//! Everything here is a pure function of its explicit inputs, except the
//! birth-date check that reads the current local date.

/// BMI computation and classification
pub mod bmi;

/// Range predicates over validation limits
pub mod validation;

pub use bmi::{classify, compute_bmi, describe, BmiCategory, DescriptionLookup};
pub use validation::{
    is_birth_date_str_valid, is_birth_date_valid, is_birth_date_valid_on, is_height_valid,
    is_weight_valid, is_weight_variation_allowed, max_allowed_variation, parse_birth_date,
};
