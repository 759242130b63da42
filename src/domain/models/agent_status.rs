// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 代理实时状态
///
/// 通过 WebSocket 周期性推送给仪表盘
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    pub agent_id: String,
    pub status: String,
    pub last_updated: DateTime<Utc>,
    pub context_depth: f64,
    pub blockchain_sync: bool,
}
