// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;

use crate::domain::models::wallet::{Address, TokenTransaction};
use crate::utils::errors::BlockchainError;

/// 钱包仓库特质
///
/// 定义链上余额和代币交易的读取接口
#[async_trait]
pub trait WalletRepository: Send + Sync {
    /// 查询原生代币余额（以 ether 为单位）
    async fn native_balance(&self, address: &Address) -> Result<f64, BlockchainError>;

    /// 查询 ERC-20 代币余额（已按 decimals 换算）
    async fn token_balance(&self, address: &Address, token: &Address) -> Result<f64, BlockchainError>;

    /// 查询指定代币的最近交易
    async fn token_transactions(
        &self,
        address: &Address,
        token: &Address,
        limit: u32,
    ) -> Result<Vec<TokenTransaction>, BlockchainError>;
}
