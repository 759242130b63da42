// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::counter;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

use crate::domain::models::wallet::Address;
use crate::utils::errors::BlockchainError;

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

/// JSON-RPC 客户端
///
/// 对以太坊兼容节点的最小封装，只包含本服务需要的方法
#[derive(Debug)]
pub struct JsonRpcClient {
    client: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    /// 创建新的JSON-RPC客户端实例
    ///
    /// # 参数
    ///
    /// * `url` - 节点 RPC 地址
    /// * `timeout` - 单次请求超时时间
    pub fn new(url: &str, timeout: Duration) -> Result<Self, BlockchainError> {
        let parsed = url::Url::parse(url).map_err(|e| BlockchainError::NotConfigured(format!("rpc_url: {}", e)))?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: parsed.to_string(),
            next_id: AtomicU64::new(1),
        })
    }

    /// 发起一次 JSON-RPC 调用
    ///
    /// 返回 `execution reverted` 一类错误时映射为 `ContractExecution`
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T, BlockchainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        debug!(method, id, "Sending JSON-RPC request");
        let result = self.send::<T>(&body).await;
        let outcome = if result.is_ok() { "success" } else { "failure" };
        counter!("blockchain_requests_total", "call" => method.to_string(), "outcome" => outcome)
            .increment(1);
        result
    }

    async fn send<T: DeserializeOwned>(&self, body: &Value) -> Result<T, BlockchainError> {
        let response = self.client.post(&self.url).json(body).send().await?;

        if !response.status().is_success() {
            return Err(BlockchainError::Connection(format!(
                "rpc node returned status {}",
                response.status()
            )));
        }

        let parsed: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| BlockchainError::Decode(e.to_string()))?;

        if let Some(error) = parsed.error {
            if error.code == 3 || error.message.to_lowercase().contains("revert") {
                return Err(BlockchainError::ContractExecution(error.message));
            }
            return Err(BlockchainError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        parsed
            .result
            .ok_or_else(|| BlockchainError::Decode("response has neither result nor error".to_string()))
    }

    /// 节点是否可达
    pub async fn is_connected(&self) -> bool {
        self.call::<String>("eth_chainId", json!([])).await.is_ok()
    }

    /// 原生代币余额（wei）
    pub async fn get_balance(&self, address: &Address) -> Result<u128, BlockchainError> {
        let raw: String = self
            .call("eth_getBalance", json!([address.as_str(), "latest"]))
            .await?;
        parse_quantity(&raw)
    }

    pub async fn gas_price(&self) -> Result<u128, BlockchainError> {
        let raw: String = self.call("eth_gasPrice", json!([])).await?;
        parse_quantity(&raw)
    }

    pub async fn transaction_count(&self, address: &Address) -> Result<u128, BlockchainError> {
        let raw: String = self
            .call("eth_getTransactionCount", json!([address.as_str(), "pending"]))
            .await?;
        parse_quantity(&raw)
    }

    /// 只读合约调用，返回原始返回数据
    pub async fn eth_call(&self, to: &Address, data: &[u8]) -> Result<Vec<u8>, BlockchainError> {
        let raw: String = self
            .call(
                "eth_call",
                json!([{ "to": to.as_str(), "data": format!("0x{}", hex::encode(data)) }, "latest"]),
            )
            .await?;
        decode_data(&raw)
    }

    /// 由节点签名并广播交易，返回交易哈希
    pub async fn send_transaction(&self, transaction: Value) -> Result<String, BlockchainError> {
        self.call("eth_sendTransaction", json!([transaction])).await
    }
}

/// 解析十六进制数量（`0x` 前缀）
pub fn parse_quantity(raw: &str) -> Result<u128, BlockchainError> {
    let digits = raw
        .strip_prefix("0x")
        .ok_or_else(|| BlockchainError::Decode(format!("quantity without 0x prefix: {}", raw)))?;
    if digits.is_empty() {
        return Ok(0);
    }
    u128::from_str_radix(digits, 16).map_err(|e| BlockchainError::Decode(format!("{}: {}", raw, e)))
}

/// 将数量编码为十六进制字符串
pub fn format_quantity(value: u128) -> String {
    format!("0x{:x}", value)
}

fn decode_data(raw: &str) -> Result<Vec<u8>, BlockchainError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    hex::decode(digits).map_err(|e| BlockchainError::Decode(e.to_string()))
}
