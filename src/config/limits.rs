// ABOUTME: Process-wide holder of the current validation limits with a one-shot remote refresh
// ABOUTME: Seeds hardcoded defaults and swaps in backend-supplied limits wholesale on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Validation limits provider
//!
//! Readers always get a complete [`ValidationLimits`] value. A refresh either
//! replaces the whole value or leaves it untouched; fields are never updated
//! one by one. Limits may change between two reads, so callers that need a
//! consistent view across several checks should take one snapshot with
//! [`LimitsProvider::get_limits`] and use it throughout.

use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::models::{RemoteConfig, ValidationLimits};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::{Arc, RwLock};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use weight_tracker_intelligence::validation;

/// Anything that can supply the backend's limits payload
#[async_trait]
pub trait LimitsSource: Send + Sync {
    /// Fetch the `/api/config` payload
    async fn fetch_limits(&self) -> AppResult<RemoteConfig>;
}

/// Where the current limits came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitsOrigin {
    /// Hardcoded defaults
    Defaults,
    /// Backend payload accepted by a refresh
    Remote,
    /// Set explicitly through [`LimitsProvider::replace`]
    Manual,
}

impl LimitsOrigin {
    /// Label used in logs and CLI output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Defaults => "defaults",
            Self::Remote => "remote",
            Self::Manual => "manual",
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Snapshot {
    limits: ValidationLimits,
    origin: LimitsOrigin,
}

/// Holder of the live [`ValidationLimits`]
#[derive(Debug)]
pub struct LimitsProvider {
    current: RwLock<Snapshot>,
}

impl Default for LimitsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LimitsProvider {
    /// Provider seeded with the hardcoded defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Snapshot {
                limits: ValidationLimits::default(),
                origin: LimitsOrigin::Defaults,
            }),
        }
    }

    /// Current limits (defaults until a refresh or replace succeeds)
    #[must_use]
    pub fn get_limits(&self) -> ValidationLimits {
        self.snapshot().limits
    }

    /// Origin of the current limits
    #[must_use]
    pub fn origin(&self) -> LimitsOrigin {
        self.snapshot().origin
    }

    /// Replace the limits after checking their invariants
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` and keeps the current limits if `limits`
    /// violates an ordering invariant
    pub fn replace(&self, limits: ValidationLimits) -> AppResult<()> {
        limits.validate()?;
        self.store(limits, LimitsOrigin::Manual);
        Ok(())
    }

    /// Fetch limits from `source` and install them if they are usable
    ///
    /// Returns `true` only when new limits were installed. Transport errors,
    /// non-success statuses, undecodable bodies and payloads violating the
    /// limit invariants all return `false` and keep the current limits.
    pub async fn refresh_from_remote<S>(&self, source: &S) -> bool
    where
        S: LimitsSource + ?Sized,
    {
        let remote = match source.fetch_limits().await {
            Ok(remote) => remote,
            Err(e) => {
                warn!(error = %e, "Could not fetch validation limits, keeping current limits");
                AppLogger::log_limits_refresh(false, self.origin().as_str());
                return false;
            }
        };

        if let Err(e) = remote.validation_limits.validate() {
            warn!(error = %e, "Backend sent invalid validation limits, keeping current limits");
            AppLogger::log_limits_refresh(false, self.origin().as_str());
            return false;
        }

        self.store(remote.validation_limits, LimitsOrigin::Remote);
        AppLogger::log_limits_refresh(true, LimitsOrigin::Remote.as_str());
        true
    }

    /// Run a single refresh in the background
    ///
    /// There is no retry: if this attempt fails the current limits stay in
    /// place for the lifetime of the provider.
    pub fn spawn_refresh(self: &Arc<Self>, source: Arc<dyn LimitsSource>) -> JoinHandle<bool> {
        let provider = Arc::clone(self);
        tokio::spawn(async move { provider.refresh_from_remote(source.as_ref()).await })
    }

    /// Height check against the current limits
    #[must_use]
    pub fn is_height_valid(&self, height_m: f64) -> bool {
        validation::is_height_valid(&self.get_limits(), height_m)
    }

    /// Weight check against the current limits
    #[must_use]
    pub fn is_weight_valid(&self, weight_kg: f64) -> bool {
        validation::is_weight_valid(&self.get_limits(), weight_kg)
    }

    /// Birth-date check against the current limits and today's local date
    #[must_use]
    pub fn is_birth_date_valid(&self, date: NaiveDate) -> bool {
        validation::is_birth_date_valid(&self.get_limits(), date)
    }

    /// Largest weight change allowed over `days` under the current limits
    #[must_use]
    pub fn max_allowed_variation(&self, days: u32) -> f64 {
        validation::max_allowed_variation(&self.get_limits(), days)
    }

    fn snapshot(&self) -> Snapshot {
        *self.current.read().unwrap_or_else(|poisoned| {
            warn!("Limits lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn store(&self, limits: ValidationLimits, origin: LimitsOrigin) {
        let mut current = self.current.write().unwrap_or_else(|poisoned| {
            warn!("Limits lock was poisoned, recovering");
            poisoned.into_inner()
        });
        *current = Snapshot { limits, origin };
        debug!(origin = origin.as_str(), ?limits, "Validation limits replaced");
    }
}
