// ABOUTME: Body-mass-index classification thresholds
// ABOUTME: Lower bounds of each band, ordered from lowest to highest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Lower bound of the `normal` band (kg/m²)
pub const NORMAL_MIN: f64 = 18.5;
/// Lower bound of the `overweight` band (kg/m²)
pub const OVERWEIGHT_MIN: f64 = 25.0;
/// Lower bound of the `obese_class_i` band (kg/m²)
pub const OBESE_CLASS_I_MIN: f64 = 30.0;
/// Lower bound of the `obese_class_ii` band (kg/m²)
pub const OBESE_CLASS_II_MIN: f64 = 35.0;
/// Lower bound of the `obese_class_iii` band (kg/m²)
pub const OBESE_CLASS_III_MIN: f64 = 40.0;

/// BMI values are reported with one decimal digit
pub const ROUNDING_FACTOR: f64 = 10.0;

/// Prefix of the description used when no translation is available
pub const FALLBACK_DESCRIPTION_PREFIX: &str = "IMC";
