// ABOUTME: Environment configuration management for the Weight Tracker client
// ABOUTME: Parses backend URL, language selection, timeouts and deployment mode from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use crate::constants::{defaults, env_config, languages};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Client configuration loaded from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub backend_url: String,
    /// Active UI language
    pub language: String,
    /// Languages the user may switch to
    pub available_languages: Vec<String>,
    /// Timeout applied to every backend request
    pub request_timeout: Duration,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: defaults::BACKEND_URL.to_owned(),
            language: languages::DEFAULT.to_owned(),
            available_languages: languages::BUNDLED
                .iter()
                .map(|&language| language.to_owned())
                .collect(),
            request_timeout: Duration::from_secs(defaults::REQUEST_TIMEOUT_SECS),
            environment: Environment::default(),
            log_level: LogLevel::from_str_or_default(defaults::LOG_LEVEL),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable cannot be parsed or the resulting
    /// configuration fails [`ClientConfig::validate`]
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let timeout_secs: u64 = env_var_or(
            env_config::REQUEST_TIMEOUT_SECS,
            &defaults::REQUEST_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .with_context(|| format!("Invalid {} value", env_config::REQUEST_TIMEOUT_SECS))?;

        let config = Self {
            backend_url: normalize_base_url(&env_var_or(
                env_config::BACKEND_URL,
                defaults::BACKEND_URL,
            )),
            language: env_var_or(env_config::LANGUAGE, languages::DEFAULT)
                .trim()
                .to_lowercase(),
            available_languages: parse_language_list(&env_var_or(
                env_config::AVAILABLE_LANGUAGES,
                &languages::BUNDLED.join(","),
            )),
            request_timeout: Duration::from_secs(timeout_secs),
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(
                env_config::LOG_LEVEL,
                defaults::LOG_LEVEL,
            )),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid setting
    pub fn validate(&self) -> Result<()> {
        if self.backend_url.is_empty() {
            return Err(anyhow::anyhow!("{} cannot be empty", env_config::BACKEND_URL));
        }
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://"))
        {
            return Err(anyhow::anyhow!(
                "{} must start with http:// or https:// (got {})",
                env_config::BACKEND_URL,
                self.backend_url
            ));
        }
        if self.request_timeout.is_zero() {
            return Err(anyhow::anyhow!(
                "{} must be greater than 0",
                env_config::REQUEST_TIMEOUT_SECS
            ));
        }
        if self.available_languages.is_empty() {
            return Err(anyhow::anyhow!(
                "{} must list at least one language",
                env_config::AVAILABLE_LANGUAGES
            ));
        }
        if !self.available_languages.contains(&self.language) {
            return Err(anyhow::anyhow!(
                "Language '{}' is not one of the available languages ({})",
                self.language,
                self.available_languages.join(", ")
            ));
        }

        if self.environment.is_production() && self.backend_url.starts_with("http://") {
            warn!(
                backend_url = %self.backend_url,
                "Production environment is using a plain HTTP backend URL"
            );
        }
        Ok(())
    }

    /// Override the backend URL
    #[must_use]
    pub fn with_backend_url(mut self, backend_url: &str) -> Self {
        self.backend_url = normalize_base_url(backend_url);
        self
    }

    /// Override the active language
    #[must_use]
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.trim().to_lowercase();
        self
    }

    /// Level to log at; `verbose` forces debug output
    #[must_use]
    pub const fn log_level_for(&self, verbose: bool) -> LogLevel {
        if verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }

    /// Whether `language` is one of the available languages
    #[must_use]
    pub fn is_language_available(&self, language: &str) -> bool {
        self.available_languages.iter().any(|l| l == language)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Weight Tracker Configuration:\n\
             - Backend: {}\n\
             - Language: {} (available: {})\n\
             - Request Timeout: {}s\n\
             - Environment: {}\n\
             - Log Level: {}",
            self.backend_url,
            self.language,
            self.available_languages.join(", "),
            self.request_timeout.as_secs(),
            self.environment,
            self.log_level,
        )
    }
}

/// Read an environment variable, falling back to `default` when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Split a comma separated language list, dropping blanks and duplicates
fn parse_language_list(raw: &str) -> Vec<String> {
    let mut list: Vec<String> = Vec::new();
    for language in raw.split(',').map(|l| l.trim().to_lowercase()) {
        if !language.is_empty() && !list.contains(&language) {
            list.push(language);
        }
    }
    list
}
