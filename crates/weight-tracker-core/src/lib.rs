// ABOUTME: Core types and constants for the Weight Tracker client
// ABOUTME: Foundation crate with error handling, validation limits, and wire models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Tracker Core
//!
//! Foundation crate providing shared types and constants for the weight
//! tracker client. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default limits, BMI thresholds, endpoints, and env names
//! - **models**: `ValidationLimits`, `WeightEntry`, and backend payloads

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (limits, weight entries, profile, backend payloads)
pub mod models;
