// ABOUTME: Main library entry point for the Weight Tracker client
// ABOUTME: Wires validation limits, translations, backend access, and form validation together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Weight Tracker
//!
//! Client for a personal weight and BMI tracking backend. The backend owns
//! persistence; this crate owns what happens before data is sent and after
//! it comes back.
//!
//! ## Features
//!
//! - **Validation limits**: hardcoded defaults, replaced wholesale by the
//!   backend's `/api/config` payload when it is available
//! - **Validators**: inclusive range checks for height, weight and birth
//!   date, plus a per-day weight variation limiter
//! - **BMI**: one-decimal computation and six-band classification with
//!   localized descriptions
//! - **Translations**: local `es`/`en` catalogs merged with backend strings
//!
//! ## Architecture
//!
//! - **Config**: environment configuration and the [`config::LimitsProvider`]
//! - **External**: `reqwest` client for the backend REST API
//! - **I18n**: message catalogs and the translation loader
//! - **Forms**: raw input to validated models
//! - **Session**: dashboard assembly and submission flows
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use weight_tracker::config::{ClientConfig, LimitsProvider};
//! use weight_tracker::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ClientConfig::from_env()?;
//!     let limits = LimitsProvider::new();
//!
//!     println!(
//!         "Backend {} (height {}..={} m)",
//!         config.backend_url,
//!         limits.get_limits().height_min,
//!         limits.get_limits().height_max
//!     );
//!     Ok(())
//! }
//! ```

/// Environment configuration and the validation limits provider
pub mod config;

/// Unified error handling
pub mod errors;

/// Backend REST client
pub mod external;

/// Form input validation
pub mod forms;

/// Message catalogs and translation loading
pub mod i18n;

/// Structured logging setup
pub mod logging;

/// Dashboard and submission flows
pub mod session;

/// Constants shared with the engine crates
pub use weight_tracker_core::constants;

/// Wire models
pub use weight_tracker_core::models;

/// BMI and validation engine
pub use weight_tracker_intelligence as intelligence;
