// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 创建代币请求
///
/// `metadata` 为任意 JSON，序列化为字符串后写入合约
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateTokenDto {
    pub owner: String,
    pub metadata: Value,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTokenResponseDto {
    pub transaction_hash: String,
}
