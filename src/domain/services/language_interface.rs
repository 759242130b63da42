// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::counter;
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::domain::models::query::QueryResponse;
use crate::domain::services::context_transformer::ContextTransformer;
use crate::domain::services::llm_service::LLMServiceTrait;

pub const ERROR_RESPONSE: &str = "I'm sorry, but I encountered an error processing your query.";
pub const ERROR_DOMAIN: &str = "error";

const GENERAL_PROMPT: &str = "You are a helpful AI assistant.\n\
Provide clear, concise, and accurate responses.";

const TECHNICAL_PROMPT: &str = "You are a technical AI assistant with expertise in multiple domains.\n\
Provide precise, detailed technical explanations.\n\
Use industry-standard terminology and be as specific as possible.";

const CREATIVE_PROMPT: &str = "You are a creative AI assistant.\n\
Provide imaginative, engaging, and inspiring responses.\n\
Think outside the box and offer unique perspectives.";

/// 自然语言接口
///
/// 先用上下文转换器判定查询领域，再据此选择系统提示词调用语言模型。
/// 模型调用失败时返回固定的致歉响应（领域为 "error"，令牌数为 0），不向外抛错。
pub struct NaturalLanguageInterface {
    llm: Arc<dyn LLMServiceTrait>,
    transformer: Arc<ContextTransformer>,
    max_input_chars: usize,
}

impl NaturalLanguageInterface {
    pub fn new(
        llm: Arc<dyn LLMServiceTrait>,
        transformer: Arc<ContextTransformer>,
        max_input_chars: usize,
    ) -> Self {
        Self {
            llm,
            transformer,
            max_input_chars,
        }
    }

    pub async fn process_user_query(&self, query: &str, agent_context: Option<&Value>) -> QueryResponse {
        let context = self.transformer.transform(query);
        let system_prompt = generate_system_prompt(&context.domain, agent_context);
        let user_query = truncate_chars(query, self.max_input_chars);

        match self.llm.complete(&system_prompt, user_query).await {
            Ok(completion) => {
                counter!("llm_requests_total", "outcome" => "success").increment(1);
                info!(
                    domain = %context.domain,
                    tokens = completion.token_count,
                    "Processed user query"
                );
                QueryResponse {
                    response: completion.text,
                    domain: context.domain,
                    tokens_used: completion.token_count,
                    model: self.llm.model().to_string(),
                    capabilities: Some(context.capabilities),
                }
            }
            Err(e) => {
                counter!("llm_requests_total", "outcome" => "failure").increment(1);
                error!("Error processing user query: {}", e);
                QueryResponse {
                    response: ERROR_RESPONSE.to_string(),
                    domain: ERROR_DOMAIN.to_string(),
                    tokens_used: 0,
                    model: self.llm.model().to_string(),
                    capabilities: None,
                }
            }
        }
    }
}

/// 生成领域相关的系统提示词
///
/// 未登记模板的领域使用通用模板
pub fn generate_system_prompt(domain: &str, agent_context: Option<&Value>) -> String {
    let base = match domain {
        "technical" => TECHNICAL_PROMPT,
        "creative" => CREATIVE_PROMPT,
        _ => GENERAL_PROMPT,
    };

    let mut prompt = format!(
        "{}\nCurrent Domain: {}\nMaintain a professional and helpful tone.",
        base, domain
    );
    if let Some(context) = agent_context {
        prompt.push_str(&format!("\nAgent Context: {}", context));
    }
    prompt
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
