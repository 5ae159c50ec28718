// ABOUTME: Core data models for the Weight Tracker client
// ABOUTME: Re-exports validation limits, weight entries, profile, and backend payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Wire-compatible representations of the backend payloads plus the
//! [`ValidationLimits`] value object shared by every validator.
//!
//! Field names on the wire follow the backend (`peso_kg`, `talla_m`, ...);
//! Rust field names are English and mapped with `serde(rename)`.

mod limits;
mod user;
mod weight;

pub use limits::{RemoteConfig, ValidationLimits};
pub use user::UserProfile;
pub use weight::{BmiReport, WeightEntry, WeightStats};
