// ABOUTME: External API client modules (Weight Tracker backend)
// ABOUTME: Provides the REST client used for limits, translations, and user data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

/// Backend REST client
pub mod backend_client;

pub use backend_client::{BackendClient, REQUEST_ID_HEADER};
