// ABOUTME: Weight entry, weight statistics, and BMI report models
// ABOUTME: Aggregates entries into count/max/min statistics like the backend stats endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded weight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Weight in kilograms
    #[serde(rename = "peso_kg")]
    pub value_kg: f64,
    /// When the weight was recorded
    #[serde(rename = "fecha_registro")]
    pub recorded_at: DateTime<Utc>,
}

impl WeightEntry {
    /// Create an entry recorded at the given instant
    #[must_use]
    pub const fn new(value_kg: f64, recorded_at: DateTime<Utc>) -> Self {
        Self {
            value_kg,
            recorded_at,
        }
    }

    /// Whole days elapsed between this entry and `now` (negative if `now` is earlier)
    #[must_use]
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        (now - self.recorded_at).num_days()
    }
}

/// Body of `GET /api/imc`
///
/// An `imc` of `0` means the backend had no weight records or could not
/// compute an index; it is never a legitimate BMI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiReport {
    /// BMI rounded to one decimal
    #[serde(rename = "imc")]
    pub bmi: f64,
    /// Backend-side description (may be a plain classification label)
    #[serde(default)]
    pub description: String,
}

impl BmiReport {
    /// Whether the backend returned the "cannot compute" sentinel
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.bmi.abs() < f64::EPSILON
    }
}

/// Aggregated weight statistics (body of `GET /api/stats`)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WeightStats {
    /// Number of recorded weights
    #[serde(rename = "num_pesajes")]
    pub count: u64,
    /// Heaviest recorded weight (0 when there are no entries)
    #[serde(rename = "peso_max")]
    pub max_kg: f64,
    /// Lightest recorded weight (0 when there are no entries)
    #[serde(rename = "peso_min")]
    pub min_kg: f64,
}

impl WeightStats {
    /// Summarize a set of entries; empty input yields all zeros
    #[must_use]
    pub fn from_entries(entries: &[WeightEntry]) -> Self {
        let Some(first) = entries.first() else {
            return Self::default();
        };
        let (min_kg, max_kg) = entries
            .iter()
            .fold((first.value_kg, first.value_kg), |(min, max), entry| {
                (min.min(entry.value_kg), max.max(entry.value_kg))
            });
        Self {
            count: entries.len() as u64,
            max_kg,
            min_kg,
        }
    }

    /// Most recently recorded entry, if any
    #[must_use]
    pub fn latest_entry(entries: &[WeightEntry]) -> Option<&WeightEntry> {
        entries.iter().max_by_key(|entry| entry.recorded_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_stats_empty() {
        let stats = WeightStats::from_entries(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.max_kg.abs() < f64::EPSILON);
        assert!(stats.min_kg.abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_and_latest() {
        let now = Utc::now();
        let entries = [
            WeightEntry::new(72.5, now - Duration::days(3)),
            WeightEntry::new(70.1, now),
            WeightEntry::new(74.0, now - Duration::days(10)),
        ];

        let stats = WeightStats::from_entries(&entries);
        assert_eq!(stats.count, 3);
        assert!((stats.max_kg - 74.0).abs() < f64::EPSILON);
        assert!((stats.min_kg - 70.1).abs() < f64::EPSILON);

        let latest = WeightStats::latest_entry(&entries).unwrap();
        assert!((latest.value_kg - 70.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_days_until() {
        let now = Utc::now();
        let entry = WeightEntry::new(70.0, now - Duration::hours(49));
        assert_eq!(entry.days_until(now), 2);
    }

    #[test]
    fn test_stats_wire_names() {
        let stats: WeightStats = serde_json::from_value(serde_json::json!({
            "num_pesajes": 4,
            "peso_max": 80.5,
            "peso_min": 77
        }))
        .unwrap();
        assert_eq!(stats.count, 4);
        assert!((stats.min_kg - 77.0).abs() < f64::EPSILON);
    }
}
