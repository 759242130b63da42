// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use agentrs::config::settings::Settings;
use agentrs::domain::models::wallet::Address;
use agentrs::domain::repositories::{
    token_registry::TokenRegistry, wallet_repository::WalletRepository,
};
use agentrs::domain::services::{
    agent_status_service::{AgentStatusProvider, SimulatedStatusProvider},
    context_transformer::{ContextTransformer, TracingObserver},
    language_interface::NaturalLanguageInterface,
    llm_service::LLMService,
};
use agentrs::infrastructure::blockchain::{
    rpc_client::JsonRpcClient, token_registry_impl::TokenRegistryImpl,
    wallet_repo_impl::WalletRepositoryImpl,
};
use agentrs::presentation::routes::{self, AppServices};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

use agentrs::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting agentrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    agentrs::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Build the context pipeline; an invalid catalog or table aborts startup
    let transformer = Arc::new(ContextTransformer::from_settings(
        &settings,
        Arc::new(TracingObserver),
    )?);
    info!(
        domains = transformer.classifier().catalog().len(),
        fallback = transformer.classifier().fallback_domain(),
        "Context transformer initialized"
    );

    // 4. Language model client
    let llm = LLMService::from_settings(&settings.llm)?;
    if settings.llm.api_key.is_none() {
        warn!("LLM API key not configured, queries will return the error response");
    }
    let language_interface = Arc::new(NaturalLanguageInterface::new(
        Arc::new(llm),
        transformer.clone(),
        settings.llm.max_input_chars,
    ));

    // 5. Blockchain clients
    let rpc = Arc::new(JsonRpcClient::new(
        &settings.blockchain.rpc_url,
        Duration::from_secs(settings.blockchain.timeout_secs),
    )?);
    if rpc.is_connected().await {
        info!("Connected to blockchain node at {}", settings.blockchain.rpc_url);
    } else {
        warn!(
            "Blockchain node at {} is not reachable, wallet queries will degrade",
            settings.blockchain.rpc_url
        );
    }

    let wallet_repository: Arc<dyn WalletRepository> = Arc::new(
        WalletRepositoryImpl::from_settings(rpc.clone(), &settings.blockchain)?,
    );

    let contract = settings
        .blockchain
        .token_contract_address
        .as_deref()
        .map(Address::parse)
        .transpose()?;
    if contract.is_none() {
        warn!("Token contract address not configured, token endpoints are disabled");
    }
    let token_registry: Arc<dyn TokenRegistry> = Arc::new(TokenRegistryImpl::new(
        rpc,
        contract,
        settings.blockchain.gas_limit,
    ));

    // 6. Agent status provider
    let status_provider: Arc<dyn AgentStatusProvider> =
        Arc::new(SimulatedStatusProvider::from_settings(&settings.agent_status));

    // 7. Start HTTP server
    let app = routes::app(AppServices {
        settings: settings.clone(),
        transformer,
        language_interface,
        wallet_repository,
        token_registry,
        status_provider,
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
