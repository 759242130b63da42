// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;

use crate::{
    application::dto::context_request::{ContextRequestDto, DomainsResponseDto},
    domain::{
        models::{capability::AdjustedCapabilities, classification::ContextTransformation},
        services::context_transformer::ContextTransformer,
    },
};

/// 对文本执行上下文转换（分类 + 能力查询）
///
/// # 参数
///
/// * `transformer` - 上下文转换器
/// * `payload` - 待分类文本
///
/// # 返回值
///
/// 返回领域、能力画像以及各领域的相似度得分
pub async fn transform_context(
    Extension(transformer): Extension<Arc<ContextTransformer>>,
    Json(payload): Json<ContextRequestDto>,
) -> Json<ContextTransformation> {
    Json(transformer.transform(&payload.text))
}

/// 列出领域目录
pub async fn list_domains(
    Extension(transformer): Extension<Arc<ContextTransformer>>,
) -> Json<DomainsResponseDto> {
    let catalog = transformer.classifier().catalog();
    Json(DomainsResponseDto {
        fallback: catalog.fallback().to_string(),
        domains: catalog.domains().to_vec(),
    })
}

/// 查询领域能力画像，未知领域返回默认画像
pub async fn get_capabilities(
    Extension(transformer): Extension<Arc<ContextTransformer>>,
    Path(domain): Path<String>,
) -> Json<AdjustedCapabilities> {
    Json(transformer.adjust_capabilities(&domain))
}
