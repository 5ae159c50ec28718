// ABOUTME: User profile model exchanged with the backend user endpoint
// ABOUTME: Maps English field names onto the backend's wire names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profile of the single tracked user
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use weight_tracker_core::models::UserProfile;
///
/// let profile = UserProfile {
///     first_name: "Ana".into(),
///     last_name: "García".into(),
///     birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
///     height_m: 1.70,
/// };
/// let json = serde_json::to_value(&profile).unwrap();
/// assert_eq!(json["talla_m"], 1.70);
/// assert_eq!(json["fecha_nacimiento"], "1990-01-15");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Given name
    #[serde(rename = "nombre")]
    pub first_name: String,
    /// Family names
    #[serde(rename = "apellidos")]
    pub last_name: String,
    /// Date of birth
    #[serde(rename = "fecha_nacimiento")]
    pub birth_date: NaiveDate,
    /// Height in meters
    #[serde(rename = "talla_m")]
    pub height_m: f64,
}
