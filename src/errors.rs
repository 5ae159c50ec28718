// ABOUTME: Unified error handling re-exported from the core crate
// ABOUTME: Keeps `crate::errors` as the single import path for application code
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Error codes, the `AppError` type and the `ErrorResponse` wire shape are
//! defined in `weight-tracker-core` so the engine crates can return them
//! without depending on the client.

pub use weight_tracker_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
