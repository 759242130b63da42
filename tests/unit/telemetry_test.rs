// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use agentrs::utils::telemetry;

#[test]
fn test_telemetry_initialization() {
    // 初始化遥测系统，重复调用不应 panic
    telemetry::init_telemetry();
    telemetry::init_telemetry();

    tracing::debug!(domain = "technical", score = 0.42, "Classified text");
    tracing::info!(agent_id = "agent-1", "Agent status stream opened");
    tracing::error!(error = "node unreachable", "Error retrieving wallet balance");
}
