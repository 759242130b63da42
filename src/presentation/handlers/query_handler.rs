// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::query_request::QueryRequestDto,
    domain::{
        models::query::QueryResponse, services::language_interface::NaturalLanguageInterface,
    },
    presentation::errors::AppError,
};

/// 处理自然语言查询
///
/// 语言模型调用失败不会返回错误状态码，而是返回固定的致歉响应（domain 为 `error`）
pub async fn process_query(
    Extension(interface): Extension<Arc<NaturalLanguageInterface>>,
    Json(payload): Json<QueryRequestDto>,
) -> Result<Json<QueryResponse>, AppError> {
    payload.validate()?;
    let response = interface
        .process_user_query(&payload.query, payload.agent_context.as_ref())
        .await;
    Ok(Json(response))
}
