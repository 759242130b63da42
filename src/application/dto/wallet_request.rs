// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::wallet::{Address, TokenTransaction};
use crate::utils::errors::BlockchainError;

/// 余额查询参数，不指定 token 时查询原生代币
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BalanceQueryDto {
    pub token: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponseDto {
    pub address: String,
    pub token: Option<String>,
    pub balance: f64,
}

/// 交易查询参数
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct TransactionsQueryDto {
    pub token: String,
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionsResponseDto {
    pub transactions: Vec<TokenTransaction>,
}

/// 活跃度分析参数
///
/// `tokens` 为逗号分隔的代币合约地址，缺省时使用配置中的跟踪列表
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ActivityQueryDto {
    pub tokens: Option<String>,
}

impl ActivityQueryDto {
    pub fn token_addresses(&self) -> Result<Option<Vec<Address>>, BlockchainError> {
        let Some(raw) = self.tokens.as_deref() else {
            return Ok(None);
        };

        raw.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(Address::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}
