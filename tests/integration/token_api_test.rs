// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::helpers::{create_test_app, WALLET};

#[tokio::test]
async fn create_token_returns_transaction_hash() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/tokens")
        .json(&json!({ "owner": WALLET, "metadata": { "name": "Agent Token" } }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["transaction_hash"], "0xfeed1234");
}

#[tokio::test]
async fn create_token_contract_failure_is_bad_gateway() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/tokens")
        .json(&json!({ "owner": WALLET, "metadata": null }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn create_token_rejects_invalid_owner() {
    let app = create_test_app();

    let response = app
        .server
        .post("/v1/tokens")
        .json(&json!({ "owner": "alice", "metadata": {} }))
        .expect_failure()
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_token_details() {
    let app = create_test_app();

    let response = app.server.get("/v1/tokens/1").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["owner"], WALLET);
    assert_eq!(body["creation_timestamp"], 1_700_000_000u64);
}

#[tokio::test]
async fn unknown_token_is_not_found() {
    let app = create_test_app();

    let response = app.server.get("/v1/tokens/42").expect_failure().await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"], "token 42 not found");
}
