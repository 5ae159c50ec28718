// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, mock backend helpers, and client configuration builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `weight_tracker`

use serde_json::{json, Value};
use std::sync::Once;
use std::time::Duration;
use weight_tracker::config::ClientConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Client configuration pointing at `backend_url`
pub fn test_config(backend_url: &str) -> ClientConfig {
    ClientConfig {
        request_timeout: Duration::from_secs(2),
        ..ClientConfig::default()
    }
    .with_backend_url(backend_url)
}

/// Configuration pointing at a port nothing listens on
pub fn unreachable_config() -> ClientConfig {
    test_config("http://127.0.0.1:9")
}

/// A well-formed `/api/config` payload
pub fn limits_payload(weight_max: f64, variation: f64) -> Value {
    json!({
        "validation_limits": {
            "height_min": 0.5,
            "height_max": 2.5,
            "weight_min": 3,
            "weight_max": weight_max,
            "birth_date_min": "1920-01-01",
            "weight_variation_per_day": variation
        }
    })
}

/// Mount a JSON GET response on `server`
pub async fn mount_get(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
