// ABOUTME: Tests for message merging and the translation loader fallbacks
// ABOUTME: Covers remote-over-local precedence, template survival, and language fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use serde_json::json;
use std::collections::HashMap;
use weight_tracker::errors::{AppError, AppResult};
use weight_tracker::external::BackendClient;
use weight_tracker::i18n::{
    local_catalog, Messages, MessagesOrigin, RemoteMessages, TranslationLoader, TranslationSource,
};
use weight_tracker::intelligence::DescriptionLookup;
use wiremock::MockServer;

struct OfflineSource;

#[async_trait]
impl TranslationSource for OfflineSource {
    async fn fetch_messages(&self) -> AppResult<RemoteMessages> {
        Err(AppError::external_unavailable("backend", "offline"))
    }
}

struct FixedSource(RemoteMessages);

#[async_trait]
impl TranslationSource for FixedSource {
    async fn fetch_messages(&self) -> AppResult<RemoteMessages> {
        Ok(self.0.clone())
    }
}

fn remote_with(error_key: &str, error_text: &str) -> RemoteMessages {
    RemoteMessages {
        errors: HashMap::from([(error_key.to_owned(), error_text.to_owned())]),
        texts: HashMap::new(),
        bmi_descriptions: HashMap::from([("normal".to_owned(), "Normal (remoto)".to_owned())]),
    }
}

fn loader(language: &str, available: &[&str]) -> TranslationLoader {
    let mut config = common::test_config("http://localhost:5000").with_language(language);
    config.available_languages = available.iter().map(|&l| l.to_owned()).collect();
    TranslationLoader::new(&config)
}

// ============================================================================
// Merge
// ============================================================================

#[test]
fn test_remote_strings_win_and_templates_survive() {
    let merged = Messages::merge(
        remote_with("save_weight", "No se pudo guardar"),
        local_catalog("es"),
        "es",
    );

    assert_eq!(merged.origin(), MessagesOrigin::Remote);
    assert_eq!(merged.error("save_weight"), "No se pudo guardar");
    // local-only key
    assert_eq!(merged.error("save_user"), "Error al guardar usuario");
    assert_eq!(merged.bmi_description("normal"), Some("Normal (remoto)"));
    assert!(merged
        .bmi_description("underweight")
        .unwrap()
        .starts_with("Peso Bajo"));
    assert_eq!(merged.greeting("Ana"), "¡Hola, Ana!");
    assert_eq!(
        merged.weight_variation_exceeded(15.0, 3),
        "El peso no puede variar más de 15 kg en 3 días"
    );
}

#[test]
fn test_merge_without_local_catalog() {
    let merged = Messages::merge(remote_with("save_weight", "Could not save"), None, "fr");
    assert_eq!(merged.language(), "fr");
    assert_eq!(merged.error("save_weight"), "Could not save");
    assert_eq!(merged.greeting("Ana"), "Ana");
    assert_eq!(
        merged.weight_variation_exceeded(5.0, 1),
        "weight_variation_exceeded"
    );
}

#[test]
fn test_lookups_fall_back_to_key() {
    let messages = Messages::empty("es");
    assert!(messages.is_empty());
    assert_eq!(messages.error("save_weight"), "save_weight");
    assert_eq!(messages.text("no_weight_records"), "no_weight_records");
    assert_eq!(messages.bmi_description("normal"), None);
}

#[test]
fn test_remote_payload_sections_are_optional() {
    let remote: RemoteMessages =
        serde_json::from_value(json!({ "texts": { "no_weight_records": "Nada" } })).unwrap();
    assert!(remote.errors.is_empty());
    assert!(remote.bmi_descriptions.is_empty());
    assert_eq!(remote.texts["no_weight_records"], "Nada");
}

// ============================================================================
// Loader
// ============================================================================

#[tokio::test]
async fn test_loader_merges_remote_messages() {
    common::init_test_logging();
    let source = FixedSource(remote_with("save_weight", "Remoto"));
    let messages = loader("es", &["es", "en"]).load("es", &source).await;
    assert_eq!(messages.origin(), MessagesOrigin::Remote);
    assert_eq!(messages.error("save_weight"), "Remoto");
}

#[tokio::test]
async fn test_loader_uses_local_catalog_when_backend_fails() {
    common::init_test_logging();
    let messages = loader("es", &["es", "en"]).load("en", &OfflineSource).await;
    assert_eq!(messages.origin(), MessagesOrigin::Local);
    assert_eq!(messages.language(), "en");
    assert_eq!(messages.text("no_weight_records"), "No weight records");
}

#[tokio::test]
async fn test_loader_replaces_unavailable_language() {
    common::init_test_logging();
    let messages = loader("es", &["es"]).load("en", &OfflineSource).await;
    assert_eq!(messages.language(), "es");
    assert_eq!(messages.text("no_weight_records"), "Sin registros de peso");
}

#[tokio::test]
async fn test_loader_falls_back_to_active_catalog() {
    common::init_test_logging();
    let messages = loader("es", &["es", "fr"]).load("fr", &OfflineSource).await;
    assert_eq!(messages.origin(), MessagesOrigin::Local);
    assert_eq!(messages.language(), "es");
}

#[tokio::test]
async fn test_loader_with_nothing_available_is_empty() {
    common::init_test_logging();
    let messages = loader("fr", &["fr"]).load("fr", &OfflineSource).await;
    assert_eq!(messages.origin(), MessagesOrigin::Empty);
    assert!(messages.is_empty());
}

#[tokio::test]
async fn test_loader_against_mock_backend() {
    common::init_test_logging();
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/messages",
        200,
        json!({
            "errors": { "save_user": "Fallo al guardar" },
            "texts": { "no_weight_records": "Todavía no hay pesajes" },
            "bmi_descriptions": { "overweight": "Sobrepeso" }
        }),
    )
    .await;

    let client = BackendClient::new(&common::test_config(&server.uri())).unwrap();
    let messages = loader("es", &["es", "en"]).load("es", &client).await;

    assert_eq!(messages.error("save_user"), "Fallo al guardar");
    assert_eq!(messages.text("no_weight_records"), "Todavía no hay pesajes");
    assert_eq!(messages.bmi_description("overweight"), Some("Sobrepeso"));
    assert_eq!(messages.greeting("Ana"), "¡Hola, Ana!");
}
