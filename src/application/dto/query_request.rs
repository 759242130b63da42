// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct QueryRequestDto {
    #[validate(length(min = 1, message = "Query cannot be empty"))]
    pub query: String,
    /// 附加到系统提示词中的智能体上下文
    pub agent_context: Option<Value>,
}
