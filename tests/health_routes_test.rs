// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Tests liveness and readiness endpoints on the assembled router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use chrono::DateTime;
use helpers::axum_test::AxumTestRequest;
use helpers::test_app;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint_success() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/health").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint_success() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/ready").send(app).await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_is_outside_api_prefix() {
    let (app, _) = test_app();

    let response = AxumTestRequest::get("/api/health").send(app).await;

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_health_rejects_post() {
    let (app, _) = test_app();

    let response = AxumTestRequest::post("/health").send(app).await;

    assert_eq!(response.status(), 405);
}
