// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Default validation limits, endpoints, environment names, and languages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat namespace.

/// BMI classification thresholds and rounding
pub mod bmi;

/// Hardcoded validation limits used until the backend supplies its own
pub mod limits {
    /// Minimum accepted height (meters)
    pub const HEIGHT_MIN_M: f64 = 0.4;
    /// Maximum accepted height (meters)
    pub const HEIGHT_MAX_M: f64 = 2.72;
    /// Minimum accepted weight (kilograms)
    pub const WEIGHT_MIN_KG: f64 = 2.0;
    /// Maximum accepted weight (kilograms)
    pub const WEIGHT_MAX_KG: f64 = 650.0;
    /// Earliest accepted birth date (year, month, day)
    pub const BIRTH_DATE_MIN: (i32, u32, u32) = (1900, 1, 1);
    /// Allowed weight change per elapsed day (kilograms)
    pub const WEIGHT_VARIATION_PER_DAY_KG: f64 = 5.0;
    /// Slack added to the variation limit when comparing weight deltas (kilograms)
    pub const VARIATION_TOLERANCE_KG: f64 = 1e-9;
}

/// Backend API endpoints
pub mod endpoints {
    /// Validation limits payload
    pub const CONFIG: &str = "/api/config";
    /// Translated UI strings
    pub const MESSAGES: &str = "/api/messages";
    /// User profile (GET and POST)
    pub const USER: &str = "/api/user";
    /// Weight entry creation (POST)
    pub const WEIGHT: &str = "/api/weight";
    /// Current BMI computed by the backend
    pub const BMI: &str = "/api/imc";
    /// Weight statistics
    pub const STATS: &str = "/api/stats";
}

/// Environment variable names read by the client configuration
pub mod env_config {
    /// Backend base URL
    pub const BACKEND_URL: &str = "WEIGHT_TRACKER_BACKEND_URL";
    /// Active UI language
    pub const LANGUAGE: &str = "WEIGHT_TRACKER_LANGUAGE";
    /// Comma separated list of available languages
    pub const AVAILABLE_LANGUAGES: &str = "WEIGHT_TRACKER_AVAILABLE_LANGUAGES";
    /// HTTP request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "WEIGHT_TRACKER_REQUEST_TIMEOUT_SECS";
    /// Client log level (error, warn, info, debug, trace)
    pub const LOG_LEVEL: &str = "WEIGHT_TRACKER_LOG_LEVEL";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Client defaults
pub mod defaults {
    /// Backend base URL when none is configured
    pub const BACKEND_URL: &str = "http://localhost:5000";
    /// HTTP request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
    /// Log level when none is configured; the CLI stays quiet unless asked
    pub const LOG_LEVEL: &str = "warn";
    /// User agent sent with every backend request
    pub const USER_AGENT: &str = concat!("weight-tracker/", env!("CARGO_PKG_VERSION"));
}

/// UI languages
pub mod languages {
    /// Language used when nothing else is configured
    pub const DEFAULT: &str = "es";
    /// Languages with a bundled local catalog
    pub const BUNDLED: &[&str] = &["es", "en"];
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of this client
    pub const WEIGHT_TRACKER: &str = "weight-tracker";
    /// Name of the backend in error messages
    pub const BACKEND: &str = "Weight Tracker backend";
}

/// Translation keys shared between catalogs and the form layer
pub mod message_keys {
    /// Saving a weight entry failed
    pub const SAVE_WEIGHT: &str = "save_weight";
    /// Saving the profile failed
    pub const SAVE_USER: &str = "save_user";
    /// Height outside limits
    pub const HEIGHT_OUT_OF_RANGE: &str = "height_out_of_range";
    /// Weight outside limits
    pub const WEIGHT_OUT_OF_RANGE: &str = "weight_out_of_range";
    /// Birth date outside limits or unparseable
    pub const BIRTH_DATE_OUT_OF_RANGE: &str = "birth_date_out_of_range";
    /// Non-numeric value in a numeric field
    pub const INVALID_NUMBER: &str = "invalid_number";
    /// Required field left empty
    pub const REQUIRED_FIELD: &str = "required_field";
    /// Weight changed faster than allowed
    pub const WEIGHT_VARIATION_EXCEEDED: &str = "weight_variation_exceeded";
    /// Profile must exist before weights are recorded
    pub const USER_MUST_BE_CONFIGURED: &str = "user_must_be_configured";
    /// Dashboard text when there are no weight records
    pub const NO_WEIGHT_RECORDS: &str = "no_weight_records";
}
