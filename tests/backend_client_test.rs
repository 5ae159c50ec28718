// ABOUTME: Integration tests for the backend REST client against a mock server
// ABOUTME: Covers wire field names, 404 handling, error mapping, and request id headers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use serde_json::json;
use weight_tracker::errors::ErrorCode;
use weight_tracker::external::{BackendClient, REQUEST_ID_HEADER};
use weight_tracker::models::UserProfile;
use wiremock::matchers::{body_json, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> BackendClient {
    common::init_test_logging();
    BackendClient::new(&common::test_config(&server.uri())).unwrap()
}

fn sample_profile() -> UserProfile {
    UserProfile {
        first_name: "Ana".into(),
        last_name: "García López".into(),
        birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
        height_m: 1.70,
    }
}

// ============================================================================
// User
// ============================================================================

#[tokio::test]
async fn test_get_user_decodes_backend_names() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/user",
        200,
        json!({
            "nombre": "Ana",
            "apellidos": "García López",
            "fecha_nacimiento": "1990-01-15",
            "talla_m": 1.7
        }),
    )
    .await;

    let user = client_for(&server).await.get_user().await.unwrap();
    assert_eq!(user, Some(sample_profile()));
}

#[tokio::test]
async fn test_get_user_not_found_is_none() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/user",
        404,
        json!({ "error": "Usuario no encontrado" }),
    )
    .await;

    let user = client_for(&server).await.get_user().await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_save_user_posts_backend_names() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/user"))
        .and(body_json(json!({
            "nombre": "Ana",
            "apellidos": "García López",
            "fecha_nacimiento": "1990-01-15",
            "talla_m": 1.7
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "Usuario guardado" })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .await
        .save_user(&sample_profile())
        .await
        .unwrap();
}

// ============================================================================
// Weights, BMI and stats
// ============================================================================

#[tokio::test]
async fn test_add_weight_posts_value() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/weight"))
        .and(body_json(json!({ "peso_kg": 72.5 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "message": "Peso registrado" })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).await.add_weight(72.5).await.unwrap();
}

#[tokio::test]
async fn test_add_weight_without_user_is_invalid_input() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/weight"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(json!({ "error": "Debe configurar el usuario primero" })),
        )
        .mount(&server)
        .await;

    let error = client_for(&server).await.add_weight(72.5).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("Debe configurar el usuario primero"));
    assert_eq!(error.context.resource_id.as_deref(), Some("/api/weight"));
    assert!(error.context.request_id.is_some());
}

#[tokio::test]
async fn test_get_bmi_and_sentinel() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/imc",
        200,
        json!({ "imc": 0, "description": "Sin registros de peso" }),
    )
    .await;

    let report = client_for(&server).await.get_bmi().await.unwrap();
    assert!(report.is_unavailable());
    assert_eq!(report.description, "Sin registros de peso");
}

#[tokio::test]
async fn test_get_bmi_without_user_is_not_found() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/imc",
        404,
        json!({ "error": "Usuario no configurado" }),
    )
    .await;

    let error = client_for(&server).await.get_bmi().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert_eq!(error.http_status(), 404);
}

#[tokio::test]
async fn test_get_stats() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/stats",
        200,
        json!({ "num_pesajes": 3, "peso_max": 74.0, "peso_min": 70.1 }),
    )
    .await;

    let stats = client_for(&server).await.get_stats().await.unwrap();
    assert_eq!(stats.count, 3);
    assert!((stats.max_kg - 74.0).abs() < f64::EPSILON);
    assert!((stats.min_kg - 70.1).abs() < f64::EPSILON);
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_requests_carry_request_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .and(header_exists(REQUEST_ID_HEADER))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "num_pesajes": 0, "peso_max": 0, "peso_min": 0 })),
        )
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server).await.get_stats().await.unwrap();
}

#[tokio::test]
async fn test_server_error_maps_to_external_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let error = client_for(&server).await.get_stats().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("HTTP 500"));
}

#[tokio::test]
async fn test_unreachable_backend_is_unavailable() {
    common::init_test_logging();
    let client = BackendClient::new(&common::unreachable_config()).unwrap();
    let error = client.get_stats().await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert_eq!(error.context.resource_id.as_deref(), Some("/api/stats"));
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let server = MockServer::start().await;
    common::mount_get(
        &server,
        "/api/stats",
        200,
        json!({ "num_pesajes": 1, "peso_max": 70, "peso_min": 70 }),
    )
    .await;

    let config = common::test_config(&format!("{}/", server.uri()));
    let client = BackendClient::new(&config).unwrap();
    assert_eq!(client.base_url(), server.uri());
    assert_eq!(client.get_stats().await.unwrap().count, 1);
}
