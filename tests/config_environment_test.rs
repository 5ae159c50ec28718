// ABOUTME: Tests for loading the client configuration from environment variables
// ABOUTME: Runs serially since every test mutates the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serial_test::serial;
use std::env;
use std::time::Duration;
use weight_tracker::config::{ClientConfig, Environment, LogLevel};
use weight_tracker::constants::env_config;

const VARS: &[&str] = &[
    env_config::BACKEND_URL,
    env_config::LANGUAGE,
    env_config::AVAILABLE_LANGUAGES,
    env_config::REQUEST_TIMEOUT_SECS,
    env_config::LOG_LEVEL,
    env_config::ENVIRONMENT,
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.backend_url, "http://localhost:5000");
    assert_eq!(config.language, "es");
    assert_eq!(config.available_languages, vec!["es", "en"]);
    assert_eq!(config.request_timeout, Duration::from_secs(10));
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Warn);
}

#[test]
#[serial]
fn test_configured_log_level_reaches_logging() {
    clear_env();
    env::set_var(env_config::LOG_LEVEL, "ERROR");
    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Error);
    assert_eq!(config.log_level_for(false), LogLevel::Error);
    assert_eq!(config.log_level_for(true), LogLevel::Debug);

    let logging = weight_tracker::logging::LoggingConfig::default()
        .with_log_level(config.log_level_for(false));
    assert_eq!(logging.level, "error");
    clear_env();
}

#[test]
#[serial]
fn test_values_are_read_and_normalized() {
    clear_env();
    env::set_var(env_config::BACKEND_URL, " https://peso.example.com/ ");
    env::set_var(env_config::LANGUAGE, " EN ");
    env::set_var(env_config::AVAILABLE_LANGUAGES, "es, en,,es,fr");
    env::set_var(env_config::REQUEST_TIMEOUT_SECS, "30");
    env::set_var(env_config::ENVIRONMENT, "production");

    let config = ClientConfig::from_env().unwrap();
    assert_eq!(config.backend_url, "https://peso.example.com");
    assert_eq!(config.language, "en");
    assert_eq!(config.available_languages, vec!["es", "en", "fr"]);
    assert_eq!(config.request_timeout, Duration::from_secs(30));
    assert!(config.environment.is_production());
    assert!(config.is_language_available("fr"));

    clear_env();
}

#[test]
#[serial]
fn test_unparseable_timeout_is_rejected() {
    clear_env();
    env::set_var(env_config::REQUEST_TIMEOUT_SECS, "soon");
    let error = ClientConfig::from_env().unwrap_err();
    assert!(error.to_string().contains(env_config::REQUEST_TIMEOUT_SECS));

    env::set_var(env_config::REQUEST_TIMEOUT_SECS, "0");
    assert!(ClientConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_language_must_be_available() {
    clear_env();
    env::set_var(env_config::LANGUAGE, "de");
    let error = ClientConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("'de'"));
    clear_env();
}

#[test]
#[serial]
fn test_backend_url_needs_http_scheme() {
    clear_env();
    env::set_var(env_config::BACKEND_URL, "localhost:5000");
    assert!(ClientConfig::from_env().is_err());

    env::set_var(env_config::BACKEND_URL, "   ");
    assert!(ClientConfig::from_env().is_err());
    clear_env();
}

#[test]
fn test_summary_lists_settings() {
    let summary = ClientConfig::default()
        .with_backend_url("http://backend:5000/")
        .summary();
    assert!(summary.contains("Backend: http://backend:5000"));
    assert!(summary.contains("Language: es (available: es, en)"));
}
