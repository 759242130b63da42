// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Extension, Path,
    },
    response::Response,
};
use metrics::gauge;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::{
    config::settings::Settings, domain::services::agent_status_service::AgentStatusProvider,
};

/// 代理状态 WebSocket 端点
///
/// 连接建立后按 `agent_status.interval_ms` 周期推送 JSON 文本帧，
/// 直到对端关闭、连接出错或发送失败。
pub async fn agent_status_ws(
    ws: WebSocketUpgrade,
    Path(agent_id): Path<String>,
    Extension(provider): Extension<Arc<dyn AgentStatusProvider>>,
    Extension(settings): Extension<Arc<Settings>>,
) -> Response {
    let period = Duration::from_millis(settings.agent_status.interval_ms.max(1));
    ws.on_upgrade(move |socket| stream_agent_status(socket, agent_id, provider, period))
}

async fn stream_agent_status(
    mut socket: WebSocket,
    agent_id: String,
    provider: Arc<dyn AgentStatusProvider>,
    period: Duration,
) {
    gauge!("agent_status_streams_active").increment(1.0);
    info!(agent_id = %agent_id, "Agent status stream opened");

    // The first tick completes immediately, so clients get a frame on connect
    let mut ticker = tokio::time::interval(period);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let status = provider.status(&agent_id).await;
                let payload = match serde_json::to_string(&status) {
                    Ok(payload) => payload,
                    Err(e) => {
                        error!(agent_id = %agent_id, "Failed to serialize agent status: {}", e);
                        break;
                    }
                };
                if let Err(e) = socket.send(Message::Text(payload.into())).await {
                    debug!(agent_id = %agent_id, "Agent status send failed: {}", e);
                    break;
                }
            }
            incoming = socket.recv() => {
                match incoming {
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(e)) => {
                        warn!(agent_id = %agent_id, "Agent status socket error: {}", e);
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    gauge!("agent_status_streams_active").decrement(1.0);
    info!(agent_id = %agent_id, "Agent status stream closed");
}
