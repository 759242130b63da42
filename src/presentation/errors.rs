// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::utils::errors::{BlockchainError, ConfigurationError, LlmError};

/// 资源不存在
#[derive(Error, Debug)]
#[error("{0} not found")]
pub struct NotFoundError(pub String);

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        if self.0.downcast_ref::<validator::ValidationErrors>().is_some() {
            return StatusCode::BAD_REQUEST;
        }
        if self.0.downcast_ref::<NotFoundError>().is_some() {
            return StatusCode::NOT_FOUND;
        }
        if let Some(err) = self.0.downcast_ref::<BlockchainError>() {
            return match err {
                BlockchainError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
                BlockchainError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
                _ => StatusCode::BAD_GATEWAY,
            };
        }
        if let Some(err) = self.0.downcast_ref::<LlmError>() {
            return match err {
                LlmError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
                LlmError::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
                _ => StatusCode::BAD_GATEWAY,
            };
        }
        if self.0.downcast_ref::<ConfigurationError>().is_some() {
            return StatusCode::INTERNAL_SERVER_ERROR;
        }

        let error_message = self.0.to_string();
        // 检查是否为验证错误（包含特定关键词）
        if error_message.contains("cannot be empty")
            || error_message.contains("invalid")
            || error_message.contains("required")
        {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {:#}", self.0);
        }

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
