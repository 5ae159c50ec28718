// ABOUTME: Tracker session tying the backend client, live limits, and loaded translations together
// ABOUTME: Assembles the dashboard view and validates profile and weight submissions before posting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session
//!
//! A [`TrackerSession`] is created once per run. Starting it spawns the
//! single background refresh of the validation limits and loads the
//! translations, which are then passed explicitly to everything that renders
//! text.

use crate::config::{ClientConfig, LimitsProvider, LimitsSource};
use crate::constants::message_keys;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::external::BackendClient;
use crate::forms::{FieldError, ProfileForm, WeightForm};
use crate::i18n::{Messages, TranslationLoader};
use crate::logging::AppLogger;
use crate::models::{UserProfile, WeightEntry, WeightStats};
use chrono::{Local, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use weight_tracker_intelligence::describe;

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Greeting for the configured user
    pub greeting: Option<String>,
    /// No profile exists yet; the profile form should be shown
    pub needs_profile: bool,
    /// Latest BMI, `0` when there is nothing to compute
    pub bmi_value: f64,
    /// Localized BMI description, or the "no records" text
    pub bmi_description: String,
    /// Weight statistics
    pub stats: WeightStats,
}

/// One run of the tracker against a backend
pub struct TrackerSession {
    client: Arc<BackendClient>,
    limits: Arc<LimitsProvider>,
    loader: TranslationLoader,
    messages: Messages,
    limits_refresh: Mutex<Option<JoinHandle<bool>>>,
    last_entry: Mutex<Option<WeightEntry>>,
}

impl TrackerSession {
    /// Build the client, start the limits refresh and load translations
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built
    pub async fn start(config: &ClientConfig) -> AppResult<Self> {
        let client = Arc::new(BackendClient::new(config)?);
        let limits = Arc::new(LimitsProvider::new());
        let refresh = limits.spawn_refresh(Arc::clone(&client) as Arc<dyn LimitsSource>);

        let loader = TranslationLoader::new(config);
        let messages = loader.load(&config.language, client.as_ref()).await;

        info!(
            backend = %client.base_url(),
            language = %messages.language(),
            "Tracker session started"
        );

        Ok(Self {
            client,
            limits,
            loader,
            messages,
            limits_refresh: Mutex::new(Some(refresh)),
            last_entry: Mutex::new(None),
        })
    }

    /// Loaded translations
    #[must_use]
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Live validation limits
    #[must_use]
    pub fn limits(&self) -> &LimitsProvider {
        &self.limits
    }

    /// Backend client
    #[must_use]
    pub fn client(&self) -> &BackendClient {
        &self.client
    }

    /// Wait for the startup limits refresh; `true` if remote limits were installed
    ///
    /// Later calls return `false` without waiting.
    pub async fn wait_for_limits(&self) -> bool {
        let handle = self
            .limits_refresh
            .lock()
            .unwrap_or_else(|poisoned| {
                warn!("Limits refresh lock was poisoned, recovering");
                poisoned.into_inner()
            })
            .take();
        match handle {
            Some(handle) => handle.await.unwrap_or_else(|e| {
                warn!(error = %e, "Limits refresh task failed");
                false
            }),
            None => false,
        }
    }

    /// Reload translations for another language
    pub async fn switch_language(&mut self, language: &str) {
        self.messages = self.loader.load(language, self.client.as_ref()).await;
    }

    /// Localized description for a BMI value
    #[must_use]
    pub fn describe_bmi(&self, bmi: f64) -> String {
        describe(bmi, &self.messages)
    }

    /// Most recent weight recorded through this session
    #[must_use]
    pub fn last_entry(&self) -> Option<WeightEntry> {
        *self.lock_last_entry()
    }

    /// Set the entry new weights are compared against
    pub fn record_last_entry(&self, entry: WeightEntry) {
        *self.lock_last_entry() = Some(entry);
    }

    /// Seed the variation check with weights recorded before this session
    ///
    /// The newest of `entries` replaces the held entry only if it is more
    /// recent. Returns the entry new weights will be compared against.
    pub fn seed_history(&self, entries: &[WeightEntry]) -> Option<WeightEntry> {
        let stats = WeightStats::from_entries(entries);
        let mut held = self.lock_last_entry();
        if let Some(latest) = WeightStats::latest_entry(entries) {
            if !matches!(*held, Some(current) if current.recorded_at >= latest.recorded_at) {
                *held = Some(*latest);
            }
        }
        info!(
            entries = stats.count,
            max_kg = stats.max_kg,
            min_kg = stats.min_kg,
            "Weight history seeded"
        );
        *held
    }

    /// Gather profile, BMI and statistics for display
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached
    pub async fn load_dashboard(&self) -> AppResult<DashboardView> {
        let no_records = self.messages.text(message_keys::NO_WEIGHT_RECORDS).to_owned();
        let stats = self.client.get_stats().await?;

        let Some(user) = self.client.get_user().await? else {
            return Ok(DashboardView {
                greeting: None,
                needs_profile: true,
                bmi_value: 0.0,
                bmi_description: no_records,
                stats,
            });
        };

        let report = self.client.get_bmi().await?;
        let bmi_description = if report.is_unavailable() {
            no_records
        } else {
            self.describe_bmi(report.bmi)
        };

        Ok(DashboardView {
            greeting: Some(self.messages.greeting(&user.first_name)),
            needs_profile: false,
            bmi_value: report.bmi,
            bmi_description,
            stats,
        })
    }

    /// Validate and save the profile
    ///
    /// # Errors
    ///
    /// Returns a validation error with the localized message of the first
    /// failing field, or a backend error localized as `save_user`
    pub async fn submit_profile(&self, form: &ProfileForm) -> AppResult<UserProfile> {
        let limits = self.limits.get_limits();
        let profile = form
            .validate(&limits, Local::now().date_naive())
            .map_err(|errors| self.rejection("profile", &errors))?;

        self.client.save_user(&profile).await.map_err(|e| {
            AppError::new(e.code, self.messages.error(message_keys::SAVE_USER)).with_source(e)
        })?;
        info!(user = %profile.first_name, "Profile saved");
        Ok(profile)
    }

    /// Validate and record a weight
    ///
    /// # Errors
    ///
    /// Returns a validation error with the localized message, or a backend
    /// error localized as `user_must_be_configured` or `save_weight`
    pub async fn submit_weight(&self, form: &WeightForm) -> AppResult<f64> {
        let limits = self.limits.get_limits();
        let now = Utc::now();
        let last = self.last_entry();
        let value_kg = form
            .validate(&limits, last.as_ref(), now)
            .map_err(|error| self.rejection("weight", std::slice::from_ref(&error)))?;

        self.client.add_weight(value_kg).await.map_err(|e| {
            let key = if e.code == ErrorCode::InvalidInput {
                message_keys::USER_MUST_BE_CONFIGURED
            } else {
                message_keys::SAVE_WEIGHT
            };
            AppError::new(e.code, self.messages.error(key)).with_source(e)
        })?;

        self.record_last_entry(WeightEntry::new(value_kg, now));
        info!(weight_kg = value_kg, "Weight recorded");
        Ok(value_kg)
    }

    fn rejection(&self, form: &str, errors: &[FieldError]) -> AppError {
        for error in errors {
            AppLogger::log_validation_rejected(form, error.field().as_str(), &error.to_string());
        }
        let fields: Vec<&str> = errors.iter().map(|e| e.field().as_str()).collect();
        errors.first().map_or_else(
            || AppError::invalid_input(form.to_owned()),
            |first| {
                let mut error = first.to_app_error(&self.messages);
                if let Some(details) = error.context.details.as_object_mut() {
                    details.insert("fields".into(), serde_json::json!(fields));
                }
                error
            },
        )
    }

    fn lock_last_entry(&self) -> std::sync::MutexGuard<'_, Option<WeightEntry>> {
        self.last_entry.lock().unwrap_or_else(|poisoned| {
            warn!("Last entry lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}
