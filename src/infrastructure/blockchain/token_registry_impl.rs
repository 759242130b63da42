// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::domain::models::wallet::{Address, TokenDetails};
use crate::domain::repositories::token_registry::TokenRegistry;
use crate::infrastructure::blockchain::abi::{self, Token};
use crate::infrastructure::blockchain::rpc_client::{format_quantity, JsonRpcClient};
use crate::utils::errors::BlockchainError;

/// 代币注册合约实现
///
/// 交易由节点托管的账户签名（`eth_sendTransaction`），本服务不持有私钥
pub struct TokenRegistryImpl {
    rpc: Arc<JsonRpcClient>,
    contract: Option<Address>,
    gas_limit: u64,
}

impl TokenRegistryImpl {
    pub fn new(rpc: Arc<JsonRpcClient>, contract: Option<Address>, gas_limit: u64) -> Self {
        Self {
            rpc,
            contract,
            gas_limit,
        }
    }

    fn contract(&self) -> Result<&Address, BlockchainError> {
        self.contract
            .as_ref()
            .ok_or_else(|| BlockchainError::NotConfigured("token_contract_address".to_string()))
    }
}

#[async_trait]
impl TokenRegistry for TokenRegistryImpl {
    async fn create_token(&self, owner: &Address, metadata: &Value) -> Result<String, BlockchainError> {
        let contract = self.contract()?;
        let data = abi::encode_call(
            abi::CREATE_TOKEN,
            &[
                Token::Address(owner.clone()),
                Token::String(metadata.to_string()),
            ],
        )?;

        let nonce = self.rpc.transaction_count(owner).await?;
        let gas_price = self.rpc.gas_price().await?;

        let transaction = json!({
            "from": owner.as_str(),
            "to": contract.as_str(),
            "data": format!("0x{}", hex::encode(data)),
            "gas": format_quantity(u128::from(self.gas_limit)),
            "gasPrice": format_quantity(gas_price),
            "nonce": format_quantity(nonce),
        });

        let tx_hash = self
            .rpc
            .send_transaction(transaction)
            .await
            .map_err(|e| match e {
                BlockchainError::Rpc { message, .. } => {
                    BlockchainError::ContractExecution(format!("Token creation failed: {}", message))
                }
                other => other,
            })?;

        info!(owner = %owner, tx_hash = %tx_hash, "Token creation submitted");
        Ok(tx_hash)
    }

    async fn get_token_details(&self, token_id: u128) -> Result<TokenDetails, BlockchainError> {
        let contract = self.contract()?;
        let data = abi::encode_call(abi::GET_TOKEN_DETAILS, &[Token::Uint(token_id)])?;
        let output = self.rpc.eth_call(contract, &data).await?;

        let creation_timestamp = u64::try_from(abi::decode_uint(&output, 2)?)
            .map_err(|_| BlockchainError::Decode("timestamp exceeds u64".to_string()))?;

        Ok(TokenDetails {
            owner: abi::decode_address(&output, 0)?.to_string(),
            metadata: abi::decode_string(&output, 1)?,
            creation_timestamp,
        })
    }
}
