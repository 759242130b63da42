// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

use crate::config::settings::BlockchainSettings;
use crate::domain::models::wallet::{Address, TokenTransaction};
use crate::domain::repositories::wallet_repository::WalletRepository;
use crate::infrastructure::blockchain::abi::{self, Token};
use crate::infrastructure::blockchain::rpc_client::JsonRpcClient;
use crate::utils::errors::BlockchainError;

const WEI_PER_ETHER: f64 = 1e18;

#[derive(Debug, Deserialize)]
struct TransactionsResponse {
    #[serde(default)]
    transactions: Vec<TokenTransaction>,
}

/// 钱包仓库实现
///
/// 余额通过节点 JSON-RPC 读取，交易历史通过区块浏览器 REST API 读取
pub struct WalletRepositoryImpl {
    rpc: Arc<JsonRpcClient>,
    http: reqwest::Client,
    api_base_url: String,
    api_key: Option<String>,
}

impl WalletRepositoryImpl {
    pub fn new(
        rpc: Arc<JsonRpcClient>,
        api_base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, BlockchainError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            rpc,
            http,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    pub fn from_settings(rpc: Arc<JsonRpcClient>, settings: &BlockchainSettings) -> Result<Self, BlockchainError> {
        Self::new(
            rpc,
            &settings.api_base_url,
            settings.api_key.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }
}

#[async_trait]
impl WalletRepository for WalletRepositoryImpl {
    async fn native_balance(&self, address: &Address) -> Result<f64, BlockchainError> {
        let wei = self.rpc.get_balance(address).await?;
        Ok(wei as f64 / WEI_PER_ETHER)
    }

    async fn token_balance(&self, address: &Address, token: &Address) -> Result<f64, BlockchainError> {
        let balance_call = abi::encode_call(abi::BALANCE_OF, &[Token::Address(address.clone())])?;
        let raw_balance = abi::decode_uint(&self.rpc.eth_call(token, &balance_call).await?, 0)?;

        let decimals_call = abi::encode_call(abi::DECIMALS, &[])?;
        let decimals = abi::decode_uint(&self.rpc.eth_call(token, &decimals_call).await?, 0)?;
        let decimals = i32::try_from(decimals)
            .map_err(|_| BlockchainError::Decode(format!("unreasonable decimals: {}", decimals)))?;

        Ok(raw_balance as f64 / 10f64.powi(decimals))
    }

    async fn token_transactions(
        &self,
        address: &Address,
        token: &Address,
        limit: u32,
    ) -> Result<Vec<TokenTransaction>, BlockchainError> {
        let endpoint = format!(
            "{}/wallets/{}/tokens/{}/transactions",
            self.api_base_url, address, token
        );

        let mut request = self
            .http
            .get(endpoint)
            .header("Content-Type", "application/json")
            .query(&[("limit", limit)]);
        if let Some(api_key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(BlockchainError::Connection(format!(
                "explorer API returned status {}",
                response.status()
            )));
        }

        let body: TransactionsResponse = response
            .json()
            .await
            .map_err(|e| BlockchainError::Decode(e.to_string()))?;
        Ok(body.transactions)
    }
}
