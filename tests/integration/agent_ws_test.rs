// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use agentrs::config::settings::Settings;
use chrono::DateTime;
use serde_json::Value;

use super::helpers::create_test_app_with;

#[tokio::test]
async fn agent_status_stream_pushes_periodic_frames() {
    let mut settings = Settings::default();
    settings.agent_status.interval_ms = 20;
    let app = create_test_app_with(settings, false, false);

    let mut websocket = app
        .server
        .get_websocket("/ws/agent/agent-7")
        .await
        .into_websocket()
        .await;

    let first: Value = websocket.receive_json().await;
    assert_eq!(first["agent_id"], "agent-7");
    assert_eq!(first["status"], "active");
    assert_eq!(first["context_depth"], 0.75);
    assert_eq!(first["blockchain_sync"], true);
    assert!(DateTime::parse_from_rfc3339(first["last_updated"].as_str().unwrap()).is_ok());

    let second: Value = websocket.receive_json().await;
    assert_eq!(second["agent_id"], "agent-7");

    websocket.close().await;
}

#[tokio::test]
async fn agent_status_stream_uses_configured_values() {
    let mut settings = Settings::default();
    settings.agent_status.interval_ms = 20;
    settings.agent_status.status = "syncing".to_string();
    settings.agent_status.blockchain_sync = false;
    let app = create_test_app_with(settings, false, false);

    let mut websocket = app
        .server
        .get_websocket("/ws/agent/agent-9")
        .await
        .into_websocket()
        .await;

    let frame: Value = websocket.receive_json().await;
    assert_eq!(frame["status"], "syncing");
    assert_eq!(frame["blockchain_sync"], false);

    websocket.close().await;
}
