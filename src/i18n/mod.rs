// ABOUTME: Message catalogs, remote/local translation merging, and the translation loader
// ABOUTME: Provides the explicit description lookup handed to BMI rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Translations
//!
//! Two sources feed a [`Messages`] value:
//!
//! - the backend's `/api/messages` payload (plain strings only)
//! - a catalog bundled with the client, which also carries the
//!   parameterized templates the backend cannot send
//!
//! When both are available, backend strings win key by key and the bundled
//! templates are kept.

mod en;
mod es;

use crate::config::ClientConfig;
use crate::constants::message_keys;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, warn};
use weight_tracker_intelligence::DescriptionLookup;

/// Body of `GET /api/messages`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMessages {
    /// Error strings by key
    #[serde(default)]
    pub errors: HashMap<String, String>,
    /// General UI texts by key
    #[serde(default)]
    pub texts: HashMap<String, String>,
    /// BMI band descriptions keyed by band key
    #[serde(default)]
    pub bmi_descriptions: HashMap<String, String>,
}

/// Anything that can supply the backend's translation payload
#[async_trait]
pub trait TranslationSource: Send + Sync {
    /// Fetch the `/api/messages` payload
    async fn fetch_messages(&self) -> AppResult<RemoteMessages>;
}

/// Catalog bundled with the client
#[derive(Debug)]
pub struct Catalog {
    /// Language code
    pub language: &'static str,
    /// Error strings
    pub errors: &'static [(&'static str, &'static str)],
    /// General UI texts
    pub texts: &'static [(&'static str, &'static str)],
    /// BMI band descriptions
    pub bmi_descriptions: &'static [(&'static str, &'static str)],
    /// Variation message, singular for one day
    pub weight_variation_exceeded: fn(f64, u32) -> String,
    /// Dashboard greeting
    pub greeting: fn(&str) -> String,
}

/// Bundled catalog for `language`, if one exists
#[must_use]
pub fn local_catalog(language: &str) -> Option<&'static Catalog> {
    match language {
        "es" => Some(&es::CATALOG),
        "en" => Some(&en::CATALOG),
        _ => None,
    }
}

/// Which source a [`Messages`] value was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagesOrigin {
    /// Backend strings merged over the bundled catalog
    Remote,
    /// Bundled catalog only
    Local,
    /// Nothing could be loaded
    Empty,
}

impl MessagesOrigin {
    /// Label used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
            Self::Empty => "empty",
        }
    }
}

fn to_owned_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|&(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}

/// Loaded translations for one language
#[derive(Debug, Clone)]
pub struct Messages {
    language: String,
    origin: MessagesOrigin,
    errors: HashMap<String, String>,
    texts: HashMap<String, String>,
    bmi_descriptions: HashMap<String, String>,
    templates: Option<&'static Catalog>,
}

impl Messages {
    /// Messages with no strings at all; every lookup falls back
    #[must_use]
    pub fn empty(language: &str) -> Self {
        Self {
            language: language.to_owned(),
            origin: MessagesOrigin::Empty,
            errors: HashMap::new(),
            texts: HashMap::new(),
            bmi_descriptions: HashMap::new(),
            templates: None,
        }
    }

    /// Messages taken entirely from a bundled catalog
    #[must_use]
    pub fn from_catalog(catalog: &'static Catalog) -> Self {
        Self {
            language: catalog.language.to_owned(),
            origin: MessagesOrigin::Local,
            errors: to_owned_map(catalog.errors),
            texts: to_owned_map(catalog.texts),
            bmi_descriptions: to_owned_map(catalog.bmi_descriptions),
            templates: Some(catalog),
        }
    }

    /// Overlay backend strings on a bundled catalog
    ///
    /// Remote strings replace local ones with the same key; local-only keys
    /// and the catalog templates survive.
    #[must_use]
    pub fn merge(remote: RemoteMessages, local: Option<&'static Catalog>, language: &str) -> Self {
        let mut merged = local.map_or_else(|| Self::empty(language), Self::from_catalog);
        merged.errors.extend(remote.errors);
        merged.texts.extend(remote.texts);
        merged.bmi_descriptions.extend(remote.bmi_descriptions);
        language.clone_into(&mut merged.language);
        merged.origin = MessagesOrigin::Remote;
        merged
    }

    /// Language code
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Source these messages were built from
    #[must_use]
    pub const fn origin(&self) -> MessagesOrigin {
        self.origin
    }

    /// Total number of plain strings
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len() + self.texts.len() + self.bmi_descriptions.len()
    }

    /// Whether no strings are loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Error string for `key`, or the key itself
    #[must_use]
    pub fn error<'a>(&'a self, key: &'a str) -> &'a str {
        self.errors.get(key).map_or(key, String::as_str)
    }

    /// UI text for `key`, or the key itself
    #[must_use]
    pub fn text<'a>(&'a self, key: &'a str) -> &'a str {
        self.texts.get(key).map_or(key, String::as_str)
    }

    /// Variation message for `max_kg` over `days`
    ///
    /// Without a template the plain `weight_variation_exceeded` string is used.
    #[must_use]
    pub fn weight_variation_exceeded(&self, max_kg: f64, days: u32) -> String {
        self.templates.map_or_else(
            || self.error(message_keys::WEIGHT_VARIATION_EXCEEDED).to_owned(),
            |catalog| (catalog.weight_variation_exceeded)(max_kg, days),
        )
    }

    /// Greeting for `name`; the bare name without a template
    #[must_use]
    pub fn greeting(&self, name: &str) -> String {
        self.templates
            .map_or_else(|| name.to_owned(), |catalog| (catalog.greeting)(name))
    }
}

impl DescriptionLookup for Messages {
    fn bmi_description(&self, key: &str) -> Option<&str> {
        self.bmi_descriptions.get(key).map(String::as_str)
    }
}

/// Resolves the messages for a language from the backend and bundled catalogs
#[derive(Debug, Clone)]
pub struct TranslationLoader {
    active_language: String,
    available_languages: Vec<String>,
}

impl TranslationLoader {
    /// Loader for the languages named in `config`
    #[must_use]
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            active_language: config.language.clone(),
            available_languages: config.available_languages.clone(),
        }
    }

    /// Configured active language
    #[must_use]
    pub fn active_language(&self) -> &str {
        &self.active_language
    }

    /// Load messages for `language`
    ///
    /// Unavailable languages are replaced by the active one. The backend is
    /// tried first; if it fails the bundled catalog is used, then the active
    /// language's catalog. When nothing is available the result is empty and
    /// every lookup falls back to its key.
    pub async fn load<S>(&self, language: &str, source: &S) -> Messages
    where
        S: TranslationSource + ?Sized,
    {
        let language = if self.available_languages.iter().any(|l| l == language) {
            language
        } else {
            warn!(
                requested = %language,
                active = %self.active_language,
                "Language not available, using the active language"
            );
            self.active_language.as_str()
        };
        let local = local_catalog(language);

        let messages = match source.fetch_messages().await {
            Ok(remote) => Messages::merge(remote, local, language),
            Err(e) => {
                warn!(error = %e, language, "Could not load translations from the backend");
                self.local_fallback(language, local)
            }
        };

        AppLogger::log_translations_loaded(
            messages.language(),
            messages.origin().as_str(),
            messages.len(),
        );
        messages
    }

    fn local_fallback(&self, language: &str, local: Option<&'static Catalog>) -> Messages {
        if let Some(catalog) = local {
            return Messages::from_catalog(catalog);
        }
        error!(language, "No translations found");
        if language != self.active_language {
            if let Some(catalog) = local_catalog(&self.active_language) {
                return Messages::from_catalog(catalog);
            }
        }
        Messages::empty(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogs_share_keys() {
        let keys = |pairs: &[(&str, &str)]| {
            let mut keys: Vec<String> = pairs.iter().map(|(k, _)| (*k).to_owned()).collect();
            keys.sort();
            keys
        };
        assert_eq!(keys(es::CATALOG.errors), keys(en::CATALOG.errors));
        assert_eq!(keys(es::CATALOG.texts), keys(en::CATALOG.texts));
        assert_eq!(
            keys(es::CATALOG.bmi_descriptions),
            keys(en::CATALOG.bmi_descriptions)
        );
    }

    #[test]
    fn test_catalogs_describe_every_band() {
        for catalog in [&es::CATALOG, &en::CATALOG] {
            let messages = Messages::from_catalog(catalog);
            for category in weight_tracker_intelligence::BmiCategory::ALL {
                assert!(
                    messages.bmi_description(category.key()).is_some(),
                    "{} missing {}",
                    catalog.language,
                    category.key()
                );
            }
        }
    }

    #[test]
    fn test_singular_day_template() {
        let messages = Messages::from_catalog(&es::CATALOG);
        assert_eq!(
            messages.weight_variation_exceeded(5.0, 1),
            "El peso no puede variar más de 5 kg en 1 día"
        );
        assert_eq!(
            messages.weight_variation_exceeded(10.0, 2),
            "El peso no puede variar más de 10 kg en 2 días"
        );
    }
}
