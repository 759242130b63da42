// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use agentrs::config::settings::{DomainSettings, Settings};
use axum::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::{create_test_app, create_test_app_with};

#[tokio::test]
async fn context_classifies_technical_text() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/context")
        .json(&json!({ "text": "debugging the algorithm in this software code" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["domain"], "technical");
    assert_eq!(body["fallback"], false);
    assert_eq!(body["capabilities"]["code_generation"], 0.8);
    assert!(body["scores"].as_array().unwrap().len() >= 5);
}

#[tokio::test]
async fn context_empty_text_falls_back_to_general() {
    let app = create_test_app();

    let response = app.server.post("/v1/context").json(&json!({ "text": "" })).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["domain"], "general");
    assert_eq!(body["fallback"], true);
}

#[tokio::test]
async fn context_accepts_text_longer_than_100000_chars() {
    let app = create_test_app();
    let text = "software code ".repeat(10_000);
    assert!(text.len() > 100_000);

    let response = app.server.post("/v1/context").json(&json!({ "text": text })).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["domain"], "technical");
}

#[tokio::test]
async fn context_uses_configured_catalog() {
    let mut settings = Settings::default();
    settings.classifier.domains = Some(vec![
        DomainSettings {
            name: "technical".to_string(),
            keywords: vec!["code".to_string(), "software".to_string()],
        },
        DomainSettings {
            name: "creative".to_string(),
            keywords: vec!["art".to_string(), "music".to_string()],
        },
        DomainSettings {
            name: "general".to_string(),
            keywords: vec![],
        },
    ]);
    let app = create_test_app_with(settings, false, false);

    let creative = app
        .server
        .post("/v1/context")
        .json(&json!({ "text": "I love writing poetry and music" }))
        .await;
    assert_eq!(creative.json::<Value>()["domain"], "creative");

    let unrelated = app
        .server
        .post("/v1/context")
        .json(&json!({ "text": "quantum mechanics thermodynamics" }))
        .await;
    assert_eq!(unrelated.json::<Value>()["domain"], "general");
}

#[tokio::test]
async fn context_rejects_missing_text_field() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/context")
        .json(&json!({ "content": "wrong field" }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn domains_lists_catalog_in_order() {
    let app = create_test_app();

    let response = app.server.get("/v1/domains").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["fallback"], "general");
    let names: Vec<&str> = body["domains"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["technical", "creative", "business", "scientific", "general"]
    );
}

#[tokio::test]
async fn capabilities_for_unknown_domain_use_default_profile() {
    let app = create_test_app();

    let unknown: Value = app.server.get("/v1/capabilities/astrology").await.json();
    let general: Value = app.server.get("/v1/capabilities/general").await.json();

    assert_eq!(unknown["domain"], "astrology");
    assert_eq!(unknown["capabilities"], general["capabilities"]);
}
