// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::repositories::{
    token_registry::TokenRegistry, wallet_repository::WalletRepository,
};
use crate::domain::services::{
    agent_status_service::AgentStatusProvider, context_transformer::ContextTransformer,
    language_interface::NaturalLanguageInterface,
};
use crate::presentation::handlers::{
    agent_ws_handler, context_handler, query_handler, token_handler, wallet_handler,
};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 路由处理器依赖的服务集合
#[derive(Clone)]
pub struct AppServices {
    pub settings: Arc<Settings>,
    pub transformer: Arc<ContextTransformer>,
    pub language_interface: Arc<NaturalLanguageInterface>,
    pub wallet_repository: Arc<dyn WalletRepository>,
    pub token_registry: Arc<dyn TokenRegistry>,
    pub status_provider: Arc<dyn AgentStatusProvider>,
}

/// 创建带依赖注入和请求追踪的完整应用
pub fn app(services: AppServices) -> Router {
    routes()
        .layer(Extension(services.transformer))
        .layer(Extension(services.language_interface))
        .layer(Extension(services.wallet_repository))
        .layer(Extension(services.token_registry))
        .layer(Extension(services.status_provider))
        .layer(Extension(services.settings))
        .layer(TraceLayer::new_for_http())
}

/// 创建应用路由
///
/// 处理器依赖通过 `Extension` 层注入：
/// `Arc<ContextTransformer>`、`Arc<NaturalLanguageInterface>`、
/// `Arc<dyn WalletRepository>`、`Arc<dyn TokenRegistry>`、
/// `Arc<dyn AgentStatusProvider>` 与 `Arc<Settings>`。
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let context_routes = Router::new()
        .route("/v1/context", post(context_handler::transform_context))
        .route("/v1/domains", get(context_handler::list_domains))
        .route(
            "/v1/capabilities/{domain}",
            get(context_handler::get_capabilities),
        )
        .route("/v1/query", post(query_handler::process_query));

    let chain_routes = Router::new()
        .route(
            "/v1/wallets/{address}/balance",
            get(wallet_handler::get_balance),
        )
        .route(
            "/v1/wallets/{address}/transactions",
            get(wallet_handler::get_transactions),
        )
        .route(
            "/v1/wallets/{address}/activity",
            get(wallet_handler::get_activity),
        )
        .route("/v1/tokens", post(token_handler::create_token))
        .route("/v1/tokens/{token_id}", get(token_handler::get_token));

    let stream_routes =
        Router::new().route("/ws/agent/{agent_id}", get(agent_ws_handler::agent_status_ws));

    Router::new()
        .merge(public_routes)
        .merge(context_routes)
        .merge(chain_routes)
        .merge(stream_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
