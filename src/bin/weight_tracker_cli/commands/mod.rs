// ABOUTME: Command modules for the weight-tracker CLI and their shared context
// ABOUTME: Context resolves limits and translations online or from bundled defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod check;
pub mod tracker;

use weight_tracker::{
    config::{ClientConfig, LimitsProvider},
    errors::AppResult,
    external::BackendClient,
    i18n::{local_catalog, Messages, TranslationLoader},
};

/// Configuration shared by every command
pub struct Context {
    pub config: ClientConfig,
    pub offline: bool,
}

impl Context {
    pub const fn new(config: ClientConfig, offline: bool) -> Self {
        Self { config, offline }
    }

    /// Limits provider, refreshed once from the backend unless offline
    pub async fn limits(&self) -> AppResult<LimitsProvider> {
        let provider = LimitsProvider::new();
        if !self.offline {
            let client = BackendClient::new(&self.config)?;
            provider.refresh_from_remote(&client).await;
        }
        Ok(provider)
    }

    /// Translations for the configured language
    pub async fn messages(&self) -> AppResult<Messages> {
        if self.offline {
            let language = self.config.language.as_str();
            return Ok(local_catalog(language)
                .map_or_else(|| Messages::empty(language), Messages::from_catalog));
        }
        let client = BackendClient::new(&self.config)?;
        let loader = TranslationLoader::new(&self.config);
        Ok(loader.load(&self.config.language, &client).await)
    }
}
