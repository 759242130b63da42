// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use agentrs::config::settings::LlmSettings;
use agentrs::domain::services::llm_service::{LLMService, LLMServiceTrait};
use agentrs::utils::errors::LlmError;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> LLMService {
    LLMService::new_with_config(
        "test-key".to_string(),
        "gpt-4".to_string(),
        server.uri(),
    )
}

#[tokio::test]
async fn test_complete_parses_content_and_usage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Use a HashMap." } }],
            "usage": { "total_tokens": 42 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let completion = service_for(&server)
        .complete("You are a technical assistant.", "How do I count words?")
        .await
        .unwrap();

    assert_eq!(completion.text, "Use a HashMap.");
    assert_eq!(completion.token_count, 42);
}

#[tokio::test]
async fn test_complete_saturates_oversized_token_usage() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "ok" } }],
            "usage": { "total_tokens": 5_000_000_000u64 }
        })))
        .mount(&server)
        .await;

    let completion = service_for(&server)
        .complete("system", "query")
        .await
        .unwrap();

    assert_eq!(completion.token_count, u32::MAX);
}

#[tokio::test]
async fn test_complete_without_usage_counts_zero_tokens() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "ok" } }]
        })))
        .mount(&server)
        .await;

    let completion = service_for(&server)
        .complete("system", "query")
        .await
        .unwrap();

    assert_eq!(completion.token_count, 0);
}

#[tokio::test]
async fn test_complete_maps_429_to_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .complete("system", "query")
        .await
        .unwrap_err();

    match err {
        LlmError::RateLimited(body) => assert_eq!(body, "slow down"),
        other => panic!("expected RateLimited, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_maps_server_error_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .complete("system", "query")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Api { status: 500, .. }));
}

#[tokio::test]
async fn test_complete_rejects_missing_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .complete("system", "query")
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_missing_api_key_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let settings = LlmSettings {
        api_key: Some("   ".to_string()),
        api_base_url: server.uri(),
        ..LlmSettings::default()
    };
    let service = LLMService::from_settings(&settings).unwrap();

    let err = service.complete("system", "query").await.unwrap_err();
    assert!(matches!(err, LlmError::NotConfigured));
    assert_eq!(service.model(), "gpt-4");
}
