// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::models::wallet::{Address, TokenDetails};
use crate::utils::errors::BlockchainError;

/// 代币注册合约特质
///
/// 定义代币的创建和查询接口
#[async_trait]
pub trait TokenRegistry: Send + Sync {
    /// 为 `owner` 创建代币，返回交易哈希
    async fn create_token(&self, owner: &Address, metadata: &Value) -> Result<String, BlockchainError>;

    /// 查询代币详情
    async fn get_token_details(&self, token_id: u128) -> Result<TokenDetails, BlockchainError>;
}
