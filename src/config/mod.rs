// ABOUTME: Configuration module for client settings and validation limits
// ABOUTME: Exposes environment configuration and the live limits provider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Weight Tracker client
//!
//! - **Environment**: client settings read from environment variables
//! - **Limits**: validation limits with defaults and a one-shot remote refresh

/// Environment and client configuration
pub mod environment;
/// Live validation limits
pub mod limits;

pub use environment::{ClientConfig, Environment, LogLevel};
pub use limits::{LimitsOrigin, LimitsProvider, LimitsSource};
