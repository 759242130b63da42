// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use agentrs::config::settings::Settings;
use agentrs::domain::models::query::Completion;
use agentrs::domain::models::wallet::{Address, TokenDetails, TokenTransaction};
use agentrs::domain::repositories::{
    token_registry::TokenRegistry, wallet_repository::WalletRepository,
};
use agentrs::domain::services::{
    agent_status_service::SimulatedStatusProvider,
    context_transformer::{ContextTransformer, NoopObserver},
    language_interface::NaturalLanguageInterface,
    llm_service::LLMServiceTrait,
};
use agentrs::presentation::routes::{self, AppServices};
use agentrs::utils::errors::{BlockchainError, LlmError};
use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;
use std::sync::{Arc, Mutex};

pub const WALLET: &str = "0x1234567890123456789012345678901234567890";
pub const TOKEN_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const TOKEN_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

/// 记录系统提示词的模拟语言模型
pub struct MockLlm {
    pub fail: bool,
    pub prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    pub fn new(fail: bool) -> Self {
        Self {
            fail,
            prompts: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl LLMServiceTrait for MockLlm {
    async fn complete(&self, system_prompt: &str, _user_query: &str) -> Result<Completion, LlmError> {
        self.prompts.lock().unwrap().push(system_prompt.to_string());
        if self.fail {
            return Err(LlmError::RateLimited("quota exhausted".to_string()));
        }
        Ok(Completion {
            text: "mock answer".to_string(),
            token_count: 17,
        })
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

/// 固定返回值的钱包仓库，`fail` 为真时所有调用失败
pub struct StaticWalletRepository {
    pub fail: bool,
}

#[async_trait]
impl WalletRepository for StaticWalletRepository {
    async fn native_balance(&self, _address: &Address) -> Result<f64, BlockchainError> {
        if self.fail {
            return Err(BlockchainError::Connection("node unreachable".to_string()));
        }
        Ok(1.5)
    }

    async fn token_balance(&self, _address: &Address, token: &Address) -> Result<f64, BlockchainError> {
        if self.fail {
            return Err(BlockchainError::Connection("node unreachable".to_string()));
        }
        Ok(if token.as_str() == TOKEN_A { 250.0 } else { 10.0 })
    }

    async fn token_transactions(
        &self,
        _address: &Address,
        _token: &Address,
        limit: u32,
    ) -> Result<Vec<TokenTransaction>, BlockchainError> {
        if self.fail {
            return Err(BlockchainError::Connection("explorer unreachable".to_string()));
        }
        let transactions = [100.0, 200.0]
            .into_iter()
            .map(|value| TokenTransaction {
                value,
                ..Default::default()
            })
            .take(limit as usize)
            .collect();
        Ok(transactions)
    }
}

/// 代币 1 存在，其余代币 ID 模拟合约回滚
pub struct StaticTokenRegistry;

#[async_trait]
impl TokenRegistry for StaticTokenRegistry {
    async fn create_token(&self, owner: &Address, metadata: &Value) -> Result<String, BlockchainError> {
        if metadata.is_null() {
            return Err(BlockchainError::ContractExecution("empty metadata".to_string()));
        }
        Ok(format!("0xfeed{}", &owner.hex()[..4]))
    }

    async fn get_token_details(&self, token_id: u128) -> Result<TokenDetails, BlockchainError> {
        match token_id {
            1 => Ok(TokenDetails {
                owner: WALLET.to_string(),
                metadata: r#"{"name":"Agent Token"}"#.to_string(),
                creation_timestamp: 1_700_000_000,
            }),
            _ => Err(BlockchainError::ContractExecution("execution reverted".to_string())),
        }
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub llm: Arc<MockLlm>,
}

pub fn create_test_app() -> TestApp {
    create_test_app_with(Settings::default(), false, false)
}

pub fn create_test_app_with(settings: Settings, llm_fail: bool, chain_fail: bool) -> TestApp {
    let settings = Arc::new(settings);
    let transformer = Arc::new(
        ContextTransformer::from_settings(&settings, Arc::new(NoopObserver)).unwrap(),
    );
    let llm = Arc::new(MockLlm::new(llm_fail));
    let language_interface = Arc::new(NaturalLanguageInterface::new(
        llm.clone(),
        transformer.clone(),
        settings.llm.max_input_chars,
    ));

    let app = routes::app(AppServices {
        settings: settings.clone(),
        transformer,
        language_interface,
        wallet_repository: Arc::new(StaticWalletRepository { fail: chain_fail }),
        token_registry: Arc::new(StaticTokenRegistry),
        status_provider: Arc::new(SimulatedStatusProvider::from_settings(&settings.agent_status)),
    });

    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .unwrap();

    TestApp { server, llm }
}
