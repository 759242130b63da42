// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::domain_catalog::DomainDefinition;

/// 上下文转换请求
///
/// 任意长度的文本都是合法输入，空文本会被归入回退领域
#[derive(Debug, Deserialize, Serialize)]
pub struct ContextRequestDto {
    pub text: String,
}

/// 领域目录响应
#[derive(Debug, Serialize, Deserialize)]
pub struct DomainsResponseDto {
    pub fallback: String,
    pub domains: Vec<DomainDefinition>,
}
