// ABOUTME: REST client for the Weight Tracker backend (limits, messages, user, weights, BMI, stats)
// ABOUTME: Maps transport and HTTP failures onto AppError and logs every request with its request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Backend API client
//!
//! # Example
//!
//! ```rust,no_run
//! use weight_tracker::config::ClientConfig;
//! use weight_tracker::external::BackendClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = BackendClient::new(&ClientConfig::default())?;
//! let stats = client.get_stats().await?;
//! println!("{} weigh-ins, max {} kg", stats.count, stats.max_kg);
//! # Ok(())
//! # }
//! ```

use crate::config::{ClientConfig, LimitsSource};
use crate::constants::{defaults, endpoints, service_names};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::i18n::{RemoteMessages, TranslationSource};
use crate::logging::AppLogger;
use crate::models::{BmiReport, RemoteConfig, UserProfile, WeightStats};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Error body returned by the backend on failures
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: String,
}

/// Body of `POST /api/weight`
#[derive(Debug, Serialize)]
struct NewWeight {
    #[serde(rename = "peso_kg")]
    value_kg: f64,
}

/// HTTP client for the backend REST API
#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl BackendClient {
    /// Create a client for the backend named in `config`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the underlying HTTP client cannot be built
    pub fn new(config: &ClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(defaults::USER_AGENT)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.backend_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    /// Backend base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the validation limits payload
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or an
    /// undecodable body
    pub async fn fetch_limits(&self) -> AppResult<RemoteConfig> {
        self.get_json(endpoints::CONFIG).await
    }

    /// Fetch the translated strings payload
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or an
    /// undecodable body
    pub async fn fetch_messages(&self) -> AppResult<RemoteMessages> {
        self.get_json(endpoints::MESSAGES).await
    }

    /// Fetch the user profile; `None` when no profile exists yet
    ///
    /// # Errors
    ///
    /// Returns an error for any failure other than a 404
    pub async fn get_user(&self) -> AppResult<Option<UserProfile>> {
        let (response, request_id) = self.send(Method::GET, endpoints::USER, None::<&()>).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("No user profile configured on the backend");
            return Ok(None);
        }
        Self::decode(response, endpoints::USER, &request_id)
            .await
            .map(Some)
    }

    /// Create or update the user profile
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the profile or is unreachable
    pub async fn save_user(&self, profile: &UserProfile) -> AppResult<()> {
        let (response, request_id) = self
            .send(Method::POST, endpoints::USER, Some(profile))
            .await?;
        Self::ensure_success(response, endpoints::USER, &request_id).await
    }

    /// Record a new weight
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the entry (for example when
    /// no user is configured) or is unreachable
    pub async fn add_weight(&self, value_kg: f64) -> AppResult<()> {
        let body = NewWeight { value_kg };
        let (response, request_id) = self
            .send(Method::POST, endpoints::WEIGHT, Some(&body))
            .await?;
        Self::ensure_success(response, endpoints::WEIGHT, &request_id).await
    }

    /// Fetch the backend's BMI for the latest weight
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` when no user is configured, or any
    /// transport or decoding error
    pub async fn get_bmi(&self) -> AppResult<BmiReport> {
        self.get_json(endpoints::BMI).await
    }

    /// Fetch weight statistics
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status or an
    /// undecodable body
    pub async fn get_stats(&self) -> AppResult<WeightStats> {
        self.get_json(endpoints::STATS).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let (response, request_id) = self.send(Method::GET, path, None::<&()>).await?;
        Self::decode(response, path, &request_id).await
    }

    /// Send a request and log its outcome; any HTTP status is returned as `Ok`
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> AppResult<(reqwest::Response, String)> {
        let url = format!("{}{path}", self.base_url);
        let request_id = Uuid::new_v4().to_string();
        let mut request = self
            .http_client
            .request(method.clone(), &url)
            .header(REQUEST_ID_HEADER, &request_id);
        if let Some(body) = body {
            request = request.json(body);
        }

        let started = Instant::now();
        let result = request.send().await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Ok(response) => {
                AppLogger::log_api_request(
                    method.as_str(),
                    path,
                    response.status().as_u16(),
                    duration_ms,
                    Some(&request_id),
                );
                Ok((response, request_id))
            }
            Err(e) => {
                AppLogger::log_api_failure(method.as_str(), path, duration_ms, &e.to_string());
                Err(AppError::from(e)
                    .with_resource_id(path)
                    .with_request_id(request_id))
            }
        }
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
        path: &str,
        request_id: &str,
    ) -> AppResult<T> {
        if !response.status().is_success() {
            return Err(Self::status_error(response, path, request_id).await);
        }
        response.json::<T>().await.map_err(|e| {
            AppError::new(
                ErrorCode::SerializationError,
                format!("{}: JSON parse error: {e}", service_names::BACKEND),
            )
            .with_resource_id(path)
            .with_request_id(request_id)
        })
    }

    async fn ensure_success(
        response: reqwest::Response,
        path: &str,
        request_id: &str,
    ) -> AppResult<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::status_error(response, path, request_id).await)
        }
    }

    /// Turn a non-success response into an error, keeping the backend's message
    async fn status_error(response: reqwest::Response, path: &str, request_id: &str) -> AppError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<BackendErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("HTTP {status}"));

        let code = match status {
            StatusCode::NOT_FOUND => ErrorCode::ResourceNotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ErrorCode::InvalidInput,
            StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
                ErrorCode::ExternalServiceUnavailable
            }
            _ => ErrorCode::ExternalServiceError,
        };

        AppError::new(code, format!("{}: {message}", service_names::BACKEND))
            .with_resource_id(path)
            .with_request_id(request_id)
            .with_details(serde_json::json!({ "status": status.as_u16() }))
    }
}

#[async_trait]
impl LimitsSource for BackendClient {
    async fn fetch_limits(&self) -> AppResult<RemoteConfig> {
        Self::fetch_limits(self).await
    }
}

#[async_trait]
impl TranslationSource for BackendClient {
    async fn fetch_messages(&self) -> AppResult<RemoteMessages> {
        Self::fetch_messages(self).await
    }
}
