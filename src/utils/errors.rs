// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 配置错误类型
///
/// 领域目录或能力表在构造时不合法，启动阶段直接返回给调用方
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("domain catalog is empty")]
    EmptyCatalog,

    #[error("domain name cannot be empty")]
    EmptyDomainName,

    #[error("duplicate domain: {0}")]
    DuplicateDomain(String),

    #[error("domain '{0}' has no keywords (only the fallback domain may be empty)")]
    MissingKeywords(String),

    #[error("capability '{capability}' of domain '{domain}' has invalid score {score} (expected 0.0..=1.0)")]
    InvalidScore {
        domain: String,
        capability: String,
        score: f64,
    },

    #[error("capability table has no profile for default domain '{0}'")]
    MissingDefaultProfile(String),
}

/// 区块链访问错误类型
#[derive(Error, Debug)]
pub enum BlockchainError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("contract execution error: {0}")]
    ContractExecution(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for BlockchainError {
    fn from(err: reqwest::Error) -> Self {
        BlockchainError::Connection(err.to_string())
    }
}

/// 语言模型调用错误类型
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("LLM API key not configured")]
    NotConfigured,

    #[error("LLM API rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("LLM API returned error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("invalid response format from LLM API: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::Network(err.to_string())
    }
}
