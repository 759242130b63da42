// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

use crate::config::settings::LlmSettings;
use crate::domain::models::query::Completion;
use crate::utils::errors::LlmError;

#[async_trait]
pub trait LLMServiceTrait: Send + Sync {
    /// 以系统提示词和用户查询请求一次补全
    async fn complete(&self, system_prompt: &str, user_query: &str) -> Result<Completion, LlmError>;

    /// 使用的模型名称
    fn model(&self) -> &str;
}

/// LLM服务 - 处理与LLM提供商的交互
///
/// # 功能
///
/// 调用 OpenAI 兼容的 `/chat/completions` 接口，返回补全文本和令牌用量
///
/// # 配置
///
/// 通过 `[llm]` 配置段或环境变量进行配置：
/// - `AGENTRS__LLM__API_KEY` - LLM API密钥
/// - `AGENTRS__LLM__MODEL` - 使用的模型名称（默认为 gpt-4）
/// - `AGENTRS__LLM__API_BASE_URL` - LLM API基础URL
pub struct LLMService {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    api_base_url: String,
}

#[async_trait]
impl LLMServiceTrait for LLMService {
    async fn complete(&self, system_prompt: &str, user_query: &str) -> Result<Completion, LlmError> {
        LLMService::complete(self, system_prompt, user_query).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl LLMService {
    pub fn from_settings(settings: &LlmSettings) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone().filter(|k| !k.trim().is_empty()),
            model: settings.model.clone(),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn new_with_config(api_key: String, model: String, api_base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: Some(api_key),
            model,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 请求一次对话补全
    ///
    /// # 参数
    /// * `system_prompt` - 系统提示词
    /// * `user_query` - 用户查询
    ///
    /// # 返回值
    /// * `Result<Completion, LlmError>` - 补全文本和总令牌数
    ///
    /// # 错误
    /// * `NotConfigured` - 未配置API密钥
    /// * `RateLimited` - 服务端返回 429
    /// * `Api` - 其他非成功状态码
    /// * `Network` / `InvalidResponse` - 网络失败或响应格式不符
    pub async fn complete(&self, system_prompt: &str, user_query: &str) -> Result<Completion, LlmError> {
        let api_key = self.api_key.as_ref().ok_or(LlmError::NotConfigured)?;

        let request_body = json!({
            "model": self.model,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_query
                }
            ]
        });

        let url = format!("{}/chat/completions", self.api_base_url);
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::RateLimited(error_text));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        let token_count = token_count(&body);

        match body["choices"][0]["message"]["content"].as_str() {
            Some(content) => Ok(Completion {
                text: content.to_string(),
                token_count,
            }),
            None => Err(LlmError::InvalidResponse(
                "missing choices[0].message.content".to_string(),
            )),
        }
    }
}

/// 读取 `usage.total_tokens`，缺失时为 0，超出 u32 时饱和
fn token_count(body: &Value) -> u32 {
    body.get("usage")
        .and_then(|usage| usage["total_tokens"].as_u64())
        .map_or(0, |total| u32::try_from(total).unwrap_or(u32::MAX))
}
