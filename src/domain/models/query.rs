// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::capability::CapabilityProfile;

/// 语言模型补全结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub token_count: u32,
}

/// 用户查询的处理结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub response: String,
    pub domain: String,
    pub tokens_used: u32,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<CapabilityProfile>,
}
