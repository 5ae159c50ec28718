// ABOUTME: Body-mass-index computation and six-band classification
// ABOUTME: Resolves band keys to localized descriptions through a caller-supplied lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! BMI Module
//!
//! `BMI = weight_kg / height_m²`, rounded to one decimal, classified with the
//! WHO adult bands:
//!
//! | Band | Range |
//! |---|---|
//! | `underweight` | `bmi < 18.5` |
//! | `normal` | `18.5 <= bmi < 25` |
//! | `overweight` | `25 <= bmi < 30` |
//! | `obese_class_i` | `30 <= bmi < 35` |
//! | `obese_class_ii` | `35 <= bmi < 40` |
//! | `obese_class_iii` | `bmi >= 40` |
//!
//! Rounding uses [`f64::round`], i.e. half away from zero (`-32.5` rounds to
//! `-33`, where a JavaScript `Math.round` would give `-32`).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use weight_tracker_core::constants::bmi as thresholds;

/// Compute BMI rounded to one decimal digit
///
/// Returns `0.0` when `height_m <= 0`. That value is a "cannot compute"
/// sentinel, not a legitimate index. The weight sign is not checked: a
/// negative weight yields a negative BMI.
///
/// # Examples
///
/// ```rust
/// use weight_tracker_intelligence::compute_bmi;
///
/// assert!((compute_bmi(70.0, 1.75) - 22.9).abs() < 1e-9);
/// assert!(compute_bmi(70.0, 0.0).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    if height_m <= 0.0 {
        return 0.0;
    }
    (weight_kg / height_m.powi(2) * thresholds::ROUNDING_FACTOR).round()
        / thresholds::ROUNDING_FACTOR
}

/// BMI classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// `bmi < 18.5`
    #[serde(rename = "underweight")]
    Underweight,
    /// `18.5 <= bmi < 25`
    #[serde(rename = "normal")]
    Normal,
    /// `25 <= bmi < 30`
    #[serde(rename = "overweight")]
    Overweight,
    /// `30 <= bmi < 35`
    #[serde(rename = "obese_class_i")]
    ObeseClassI,
    /// `35 <= bmi < 40`
    #[serde(rename = "obese_class_ii")]
    ObeseClassII,
    /// `bmi >= 40`
    #[serde(rename = "obese_class_iii")]
    ObeseClassIII,
}

impl BmiCategory {
    /// All bands, ordered by increasing lower bound
    pub const ALL: [Self; 6] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::ObeseClassI,
        Self::ObeseClassII,
        Self::ObeseClassIII,
    ];

    /// Stable key used by translation catalogs
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::ObeseClassI => "obese_class_i",
            Self::ObeseClassII => "obese_class_ii",
            Self::ObeseClassIII => "obese_class_iii",
        }
    }

    /// Parse a translation key back into a band
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }

    /// Inclusive lower bound of the band; `None` for the unbounded first band
    #[must_use]
    pub const fn lower_bound(self) -> Option<f64> {
        match self {
            Self::Underweight => None,
            Self::Normal => Some(thresholds::NORMAL_MIN),
            Self::Overweight => Some(thresholds::OVERWEIGHT_MIN),
            Self::ObeseClassI => Some(thresholds::OBESE_CLASS_I_MIN),
            Self::ObeseClassII => Some(thresholds::OBESE_CLASS_II_MIN),
            Self::ObeseClassIII => Some(thresholds::OBESE_CLASS_III_MIN),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Classify a BMI value
///
/// Lower edges are inclusive, upper edges exclusive. NaN compares false
/// against every threshold and lands in the last band.
#[must_use]
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < thresholds::NORMAL_MIN {
        BmiCategory::Underweight
    } else if bmi < thresholds::OVERWEIGHT_MIN {
        BmiCategory::Normal
    } else if bmi < thresholds::OBESE_CLASS_I_MIN {
        BmiCategory::Overweight
    } else if bmi < thresholds::OBESE_CLASS_II_MIN {
        BmiCategory::ObeseClassI
    } else if bmi < thresholds::OBESE_CLASS_III_MIN {
        BmiCategory::ObeseClassII
    } else {
        BmiCategory::ObeseClassIII
    }
}

/// Source of localized BMI descriptions keyed by [`BmiCategory::key`]
pub trait DescriptionLookup {
    /// Description for a band key, if one is loaded
    fn bmi_description(&self, key: &str) -> Option<&str>;
}

impl DescriptionLookup for HashMap<String, String> {
    fn bmi_description(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Describe a BMI value through the given lookup
///
/// Falls back to `"IMC: {bmi}"` when the band has no description, e.g.
/// before translations are loaded.
#[must_use]
pub fn describe<L>(bmi: f64, lookup: &L) -> String
where
    L: DescriptionLookup + ?Sized,
{
    let category = classify(bmi);
    lookup.bmi_description(category.key()).map_or_else(
        || {
            tracing::debug!(bmi, band = category.key(), "No BMI description loaded");
            format!("{}: {bmi}", thresholds::FALLBACK_DESCRIPTION_PREFIX)
        },
        str::to_owned,
    )
}
