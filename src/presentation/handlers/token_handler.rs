// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json, Path},
    http::StatusCode,
};
use std::sync::Arc;

use crate::{
    application::dto::token_request::{CreateTokenDto, CreateTokenResponseDto},
    domain::{
        models::wallet::{Address, TokenDetails},
        repositories::token_registry::TokenRegistry,
    },
    presentation::errors::{AppError, NotFoundError},
    utils::errors::BlockchainError,
};

/// 在代币注册合约上创建代币
///
/// # 返回值
///
/// 返回 `201 Created` 以及已提交交易的哈希
///
/// # 错误
///
/// - 所有者地址格式错误（400）
/// - 未配置代币合约地址（503）
/// - 节点或合约执行失败（502）
pub async fn create_token(
    Extension(registry): Extension<Arc<dyn TokenRegistry>>,
    Json(payload): Json<CreateTokenDto>,
) -> Result<(StatusCode, Json<CreateTokenResponseDto>), AppError> {
    let owner = Address::parse(&payload.owner)?;
    let transaction_hash = registry.create_token(&owner, &payload.metadata).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateTokenResponseDto { transaction_hash }),
    ))
}

/// 查询代币详情，合约回滚视为代币不存在
pub async fn get_token(
    Extension(registry): Extension<Arc<dyn TokenRegistry>>,
    Path(token_id): Path<u64>,
) -> Result<Json<TokenDetails>, AppError> {
    match registry.get_token_details(u128::from(token_id)).await {
        Ok(details) => Ok(Json(details)),
        Err(BlockchainError::ContractExecution(_)) => {
            Err(NotFoundError(format!("token {}", token_id)).into())
        }
        Err(e) => Err(e.into()),
    }
}
