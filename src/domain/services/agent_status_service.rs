// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chrono::Utc;

use crate::config::settings::AgentStatusSettings;
use crate::domain::models::agent_status::AgentStatus;

/// 代理状态提供者特质
#[async_trait]
pub trait AgentStatusProvider: Send + Sync {
    async fn status(&self, agent_id: &str) -> AgentStatus;
}

/// 模拟状态提供者
///
/// 返回配置中的固定状态值，`last_updated` 为当前时间。
/// 接入真实的代理监控后替换此实现。
#[derive(Debug, Clone)]
pub struct SimulatedStatusProvider {
    status: String,
    context_depth: f64,
    blockchain_sync: bool,
}

impl Default for SimulatedStatusProvider {
    fn default() -> Self {
        Self::from_settings(&AgentStatusSettings::default())
    }
}

impl SimulatedStatusProvider {
    pub fn from_settings(settings: &AgentStatusSettings) -> Self {
        Self {
            status: settings.status.clone(),
            context_depth: settings.context_depth,
            blockchain_sync: settings.blockchain_sync,
        }
    }
}

#[async_trait]
impl AgentStatusProvider for SimulatedStatusProvider {
    async fn status(&self, agent_id: &str) -> AgentStatus {
        AgentStatus {
            agent_id: agent_id.to_string(),
            status: self.status.clone(),
            last_updated: Utc::now(),
            context_depth: self.context_depth,
            blockchain_sync: self.blockchain_sync,
        }
    }
}
