// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use agentrs::domain::models::wallet::Address;
use agentrs::domain::repositories::wallet_repository::WalletRepository;
use agentrs::infrastructure::blockchain::abi;
use agentrs::infrastructure::blockchain::rpc_client::JsonRpcClient;
use agentrs::infrastructure::blockchain::wallet_repo_impl::WalletRepositoryImpl;
use agentrs::utils::errors::BlockchainError;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::rpc_mock::{mount, rpc_error, rpc_result, word, RpcCall};

const WALLET: &str = "0x1234567890123456789012345678901234567890";
const TOKEN: &str = "0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef";

fn repository(server: &MockServer, api_key: Option<&str>) -> WalletRepositoryImpl {
    let rpc = Arc::new(JsonRpcClient::new(&server.uri(), Duration::from_secs(5)).unwrap());
    WalletRepositoryImpl::new(
        rpc,
        &format!("{}/", server.uri()),
        api_key.map(str::to_string),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn wallet() -> Address {
    Address::parse(WALLET).unwrap()
}

fn token() -> Address {
    Address::parse(TOKEN).unwrap()
}

#[tokio::test]
async fn test_native_balance_converts_wei_to_ether() {
    let server = MockServer::start().await;
    mount(
        &server,
        RpcCall::method("eth_getBalance"),
        rpc_result(json!("0x1bc16d674ec80000")),
    )
    .await;

    let balance = repository(&server, None).native_balance(&wallet()).await.unwrap();
    assert!((balance - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_token_balance_applies_decimals() {
    let server = MockServer::start().await;
    mount(
        &server,
        RpcCall::eth_call(abi::BALANCE_OF),
        rpc_result(json!(format!("0x{}", word(2_500_000)))),
    )
    .await;
    mount(
        &server,
        RpcCall::eth_call(abi::DECIMALS),
        rpc_result(json!(format!("0x{}", word(6)))),
    )
    .await;

    let balance = repository(&server, None)
        .token_balance(&wallet(), &token())
        .await
        .unwrap();
    assert!((balance - 2.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_reverted_call_is_contract_execution_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        RpcCall::method("eth_call"),
        rpc_error(3, "execution reverted"),
    )
    .await;

    let err = repository(&server, None)
        .token_balance(&wallet(), &token())
        .await
        .unwrap_err();
    assert!(matches!(err, BlockchainError::ContractExecution(_)));
}

#[tokio::test]
async fn test_node_error_is_rpc_error() {
    let server = MockServer::start().await;
    mount(
        &server,
        RpcCall::method("eth_getBalance"),
        rpc_error(-32000, "header not found"),
    )
    .await;

    let err = repository(&server, None)
        .native_balance(&wallet())
        .await
        .unwrap_err();
    match err {
        BlockchainError::Rpc { code, message } => {
            assert_eq!(code, -32000);
            assert_eq!(message, "header not found");
        }
        other => panic!("expected Rpc error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_token_transactions_from_explorer_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/wallets/{}/tokens/{}/transactions", WALLET, TOKEN)))
        .and(query_param("limit", "10"))
        .and(header("Authorization", "Bearer explorer-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [
                { "hash": "0xaa", "from": WALLET, "to": TOKEN, "value": 12.5, "block": 7 },
                { "hash": "0xbb" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transactions = repository(&server, Some("explorer-key"))
        .token_transactions(&wallet(), &token(), 10)
        .await
        .unwrap();

    assert_eq!(transactions.len(), 2);
    assert_eq!(transactions[0].value, 12.5);
    assert_eq!(transactions[0].extra["block"], 7);
    assert_eq!(transactions[1].value, 0.0);
}

#[tokio::test]
async fn test_token_transactions_accept_string_and_null_values() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/wallets/{}/tokens/{}/transactions", WALLET, TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transactions": [
                { "hash": "0xaa", "value": "1000" },
                { "hash": "0xbb", "value": null },
                { "hash": "0xcc", "value": 250 }
            ]
        })))
        .mount(&server)
        .await;

    let transactions = repository(&server, None)
        .token_transactions(&wallet(), &token(), 10)
        .await
        .unwrap();

    let values: Vec<f64> = transactions.iter().map(|tx| tx.value).collect();
    assert_eq!(values, vec![1000.0, 0.0, 250.0]);
}

#[tokio::test]
async fn test_explorer_failure_is_connection_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = repository(&server, None)
        .token_transactions(&wallet(), &token(), 10)
        .await
        .unwrap_err();
    assert!(matches!(err, BlockchainError::Connection(_)));
}
