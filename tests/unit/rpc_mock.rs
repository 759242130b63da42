// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde_json::{json, Value};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

/// 按 JSON-RPC 方法名（以及可选的 calldata 前缀）匹配请求
pub struct RpcCall {
    method: &'static str,
    data_prefix: Option<String>,
}

impl RpcCall {
    pub fn method(method: &'static str) -> Self {
        Self {
            method,
            data_prefix: None,
        }
    }

    pub fn eth_call(selector: [u8; 4]) -> Self {
        Self {
            method: "eth_call",
            data_prefix: Some(format!("0x{}", hex::encode(selector))),
        }
    }
}

impl Match for RpcCall {
    fn matches(&self, request: &Request) -> bool {
        let Ok(body) = serde_json::from_slice::<Value>(&request.body) else {
            return false;
        };
        if body["method"] != self.method {
            return false;
        }
        match &self.data_prefix {
            Some(prefix) => body["params"][0]["data"]
                .as_str()
                .is_some_and(|data| data.starts_with(prefix.as_str())),
            None => true,
        }
    }
}

pub fn rpc_result(result: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "result": result,
    }))
}

pub fn rpc_error(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": { "code": code, "message": message },
    }))
}

pub async fn mount(server: &MockServer, call: RpcCall, response: ResponseTemplate) {
    Mock::given(call).respond_with(response).mount(server).await;
}

/// 将 u128 编码为一个 32 字节 ABI 字（十六进制，无前缀）
pub fn word(value: u128) -> String {
    format!("{:064x}", value)
}
