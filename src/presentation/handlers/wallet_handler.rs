// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Path, Query};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::wallet_request::{
        ActivityQueryDto, BalanceQueryDto, BalanceResponseDto, TransactionsQueryDto,
        TransactionsResponseDto,
    },
    config::settings::Settings,
    domain::{
        models::wallet::{Address, WalletActivity},
        repositories::wallet_repository::WalletRepository,
        services::wallet_monitor::{ActivityScoring, WalletMonitor},
    },
    presentation::errors::AppError,
};

fn monitor_for(
    repository: Arc<dyn WalletRepository>,
    settings: &Settings,
    address: &str,
) -> Result<WalletMonitor, AppError> {
    let address = Address::parse(address)?;
    Ok(WalletMonitor::new(
        repository,
        address,
        ActivityScoring::from(&settings.activity),
        settings.blockchain.transaction_limit,
    ))
}

/// 查询钱包余额
///
/// 指定 `token` 时查询 ERC-20 余额，否则查询原生代币余额。
/// 链上查询失败时余额为 0.0
pub async fn get_balance(
    Extension(repository): Extension<Arc<dyn WalletRepository>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(address): Path<String>,
    Query(params): Query<BalanceQueryDto>,
) -> Result<Json<BalanceResponseDto>, AppError> {
    let monitor = monitor_for(repository, &settings, &address)?;
    let token = params.token.as_deref().map(Address::parse).transpose()?;

    let balance = monitor.get_wallet_balance(token.as_ref()).await;
    Ok(Json(BalanceResponseDto {
        address: monitor.wallet_address().to_string(),
        token: token.map(|t| t.to_string()),
        balance,
    }))
}

/// 查询钱包在指定代币上的交易记录
pub async fn get_transactions(
    Extension(repository): Extension<Arc<dyn WalletRepository>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(address): Path<String>,
    Query(params): Query<TransactionsQueryDto>,
) -> Result<Json<TransactionsResponseDto>, AppError> {
    params.validate()?;
    let monitor = monitor_for(repository, &settings, &address)?;
    let token = Address::parse(&params.token)?;
    let limit = params
        .limit
        .unwrap_or(settings.blockchain.transaction_limit);

    let transactions = monitor.get_token_transactions(&token, limit).await;
    Ok(Json(TransactionsResponseDto { transactions }))
}

/// 分析钱包活跃度
///
/// 未指定 `tokens` 时使用配置中的 `blockchain.tracked_tokens`
pub async fn get_activity(
    Extension(repository): Extension<Arc<dyn WalletRepository>>,
    Extension(settings): Extension<Arc<Settings>>,
    Path(address): Path<String>,
    Query(params): Query<ActivityQueryDto>,
) -> Result<Json<WalletActivity>, AppError> {
    let monitor = monitor_for(repository, &settings, &address)?;
    let tokens = match params.token_addresses()? {
        Some(tokens) => tokens,
        None => settings
            .blockchain
            .tracked_tokens
            .iter()
            .map(|t| Address::parse(t))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(Json(monitor.analyze_wallet_activity(&tokens).await))
}
