// ABOUTME: Integration tests for the validation limits provider against a mock backend
// ABOUTME: Covers successful refresh, every failure path keeping defaults, and the background refresh
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;
use weight_tracker::config::{LimitsOrigin, LimitsProvider, LimitsSource};
use weight_tracker::external::BackendClient;
use weight_tracker::models::ValidationLimits;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn assert_defaults(provider: &LimitsProvider) {
    let limits = provider.get_limits();
    assert!((limits.height_min - 0.4).abs() < f64::EPSILON);
    assert!((limits.height_max - 2.72).abs() < f64::EPSILON);
    assert!((limits.weight_min - 2.0).abs() < f64::EPSILON);
    assert!((limits.weight_max - 650.0).abs() < f64::EPSILON);
    assert!((limits.weight_variation_per_day - 5.0).abs() < f64::EPSILON);
    assert_eq!(provider.origin(), LimitsOrigin::Defaults);
}

#[test]
fn test_new_provider_serves_defaults() {
    let provider = LimitsProvider::new();
    assert_defaults(&provider);
    assert_eq!(provider.get_limits(), ValidationLimits::default());
}

#[tokio::test]
async fn test_refresh_replaces_limits_wholesale() {
    common::init_test_logging();
    let server = MockServer::start().await;
    common::mount_get(&server, "/api/config", 200, common::limits_payload(300.0, 2.5)).await;

    let client = BackendClient::new(&common::test_config(&server.uri())).unwrap();
    let provider = LimitsProvider::new();

    assert!(provider.refresh_from_remote(&client).await);

    let limits = provider.get_limits();
    assert!((limits.height_min - 0.5).abs() < f64::EPSILON);
    assert!((limits.height_max - 2.5).abs() < f64::EPSILON);
    assert!((limits.weight_min - 3.0).abs() < f64::EPSILON);
    assert!((limits.weight_max - 300.0).abs() < f64::EPSILON);
    assert_eq!(limits.birth_date_min, NaiveDate::from_ymd_opt(1920, 1, 1).unwrap());
    assert!((limits.weight_variation_per_day - 2.5).abs() < f64::EPSILON);
    assert_eq!(provider.origin(), LimitsOrigin::Remote);

    assert!(!provider.is_weight_valid(301.0));
    assert!((provider.max_allowed_variation(2) - 5.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_network_error_keeps_defaults() {
    common::init_test_logging();
    let client = BackendClient::new(&common::unreachable_config()).unwrap();
    let provider = LimitsProvider::new();

    assert!(!provider.refresh_from_remote(&client).await);
    assert_defaults(&provider);
}

#[tokio::test]
async fn test_non_success_status_keeps_defaults() {
    common::init_test_logging();
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/config",
        500,
        json!({ "error": "boom" }),
    )
    .await;

    let client = BackendClient::new(&common::test_config(&server.uri())).unwrap();
    let provider = LimitsProvider::new();

    assert!(!provider.refresh_from_remote(&client).await);
    assert_defaults(&provider);
}

#[tokio::test]
async fn test_malformed_payload_keeps_defaults() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = BackendClient::new(&common::test_config(&server.uri())).unwrap();
    let provider = LimitsProvider::new();
    assert!(!provider.refresh_from_remote(&client).await);
    assert_defaults(&provider);
}

#[tokio::test]
async fn test_partial_payload_is_not_merged() {
    common::init_test_logging();
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/config",
        200,
        json!({ "validation_limits": { "weight_max": 300 } }),
    )
    .await;

    let client = BackendClient::new(&common::test_config(&server.uri())).unwrap();
    let provider = LimitsProvider::new();
    assert!(!provider.refresh_from_remote(&client).await);
    assert_defaults(&provider);
}

#[tokio::test]
async fn test_payload_violating_invariants_keeps_defaults() {
    common::init_test_logging();
    let server = MockServer::start().await;
    common::mount_get(&server, "/api/config", 200, common::limits_payload(1.0, 5.0)).await;

    let client = BackendClient::new(&common::test_config(&server.uri())).unwrap();
    let provider = LimitsProvider::new();
    assert!(!provider.refresh_from_remote(&client).await);
    assert_defaults(&provider);

    let server = MockServer::start().await;
    common::mount_get(&server, "/api/config", 200, common::limits_payload(300.0, 0.0)).await;
    let client = BackendClient::new(&common::test_config(&server.uri())).unwrap();
    assert!(!provider.refresh_from_remote(&client).await);
    assert_defaults(&provider);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_remote_limits() {
    common::init_test_logging();
    let server = MockServer::start().await;
    common::mount_get(&server, "/api/config", 200, common::limits_payload(300.0, 2.5)).await;
    let client = BackendClient::new(&common::test_config(&server.uri())).unwrap();
    let provider = LimitsProvider::new();
    assert!(provider.refresh_from_remote(&client).await);
    let installed = provider.get_limits();

    let down = BackendClient::new(&common::unreachable_config()).unwrap();
    assert!(!provider.refresh_from_remote(&down).await);
    assert_eq!(provider.get_limits(), installed);
    assert_eq!(provider.origin(), LimitsOrigin::Remote);
}

#[tokio::test]
async fn test_spawned_refresh_runs_once() {
    common::init_test_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/config"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::limits_payload(300.0, 2.5)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = Arc::new(BackendClient::new(&common::test_config(&server.uri())).unwrap());
    let provider = Arc::new(LimitsProvider::new());

    let handle = provider.spawn_refresh(client as Arc<dyn LimitsSource>);
    // Reads during the refresh see a complete limits value
    let during = provider.get_limits();
    assert!(during.validate().is_ok());

    assert!(handle.await.unwrap());
    assert_eq!(provider.origin(), LimitsOrigin::Remote);
}

#[test]
fn test_replace_validates() {
    let provider = LimitsProvider::new();
    let custom = ValidationLimits {
        weight_max: 200.0,
        ..ValidationLimits::default()
    };
    provider.replace(custom).unwrap();
    assert_eq!(provider.get_limits(), custom);
    assert_eq!(provider.origin(), LimitsOrigin::Manual);

    let broken = ValidationLimits {
        weight_variation_per_day: -1.0,
        ..ValidationLimits::default()
    };
    assert!(provider.replace(broken).is_err());
    assert_eq!(provider.get_limits(), custom);
}
