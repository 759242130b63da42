// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// 应用程序配置设置
///
/// 包含服务器、指标、分类器、能力表、LLM、区块链、活跃度评分和代理状态推送等所有配置项。
/// 每个配置段都有默认值，`Settings::default()` 与没有任何配置文件时的加载结果一致。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
    /// 领域分类器配置
    pub classifier: ClassifierSettings,
    /// 能力表配置
    pub capabilities: CapabilitySettings,
    /// LLM 配置
    pub llm: LlmSettings,
    /// 区块链配置
    pub blockchain: BlockchainSettings,
    /// 钱包活跃度评分配置
    pub activity: ActivitySettings,
    /// 代理状态推送配置
    pub agent_status: AgentStatusSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出监听地址
    pub listen_addr: String,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            listen_addr: "0.0.0.0:9000".to_string(),
        }
    }
}

/// 领域定义配置
#[derive(Debug, Clone, Deserialize)]
pub struct DomainSettings {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// 领域分类器配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    /// 回退领域名称
    pub fallback_domain: String,
    /// 自定义领域目录（有序），未设置时使用内置目录
    pub domains: Option<Vec<DomainSettings>>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            fallback_domain: "general".to_string(),
            domains: None,
        }
    }
}

/// 能力表配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CapabilitySettings {
    /// 未命中时使用的默认领域
    pub default_domain: String,
    /// 自定义能力表：领域 -> (能力 -> 分数)，未设置时使用内置能力表
    pub profiles: Option<HashMap<String, HashMap<String, f64>>>,
}

impl Default for CapabilitySettings {
    fn default() -> Self {
        Self {
            default_domain: "general".to_string(),
            profiles: None,
        }
    }
}

/// LLM 配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    /// API 密钥
    pub api_key: Option<String>,
    /// 模型名称
    pub model: String,
    /// API 基础 URL（OpenAI 兼容）
    pub api_base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 发送给模型的最大输入字符数
    pub max_input_chars: usize,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gpt-4".to_string(),
            api_base_url: "https://api.openai.com/v1".to_string(),
            timeout_secs: 60,
            max_input_chars: 10000,
        }
    }
}

/// 区块链配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlockchainSettings {
    /// JSON-RPC 节点 URL
    pub rpc_url: String,
    /// 区块浏览器 API 基础 URL
    pub api_base_url: String,
    /// 区块浏览器 API 密钥
    pub api_key: Option<String>,
    /// 代币合约地址
    pub token_contract_address: Option<String>,
    /// 创建代币交易的 gas 上限
    pub gas_limit: u64,
    /// 单次查询的交易条数上限
    pub transaction_limit: u32,
    /// 默认跟踪的代币合约地址
    pub tracked_tokens: Vec<String>,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for BlockchainSettings {
    fn default() -> Self {
        Self {
            rpc_url: "https://metis-mainnet.public.blastapi.io".to_string(),
            api_base_url: "https://api.metis.io/v1".to_string(),
            api_key: None,
            token_contract_address: None,
            gas_limit: 2_000_000,
            transaction_limit: 50,
            tracked_tokens: Vec::new(),
            timeout_secs: 30,
        }
    }
}

/// 钱包活跃度评分配置设置
///
/// 评分 = min(交易数 * 交易总额 / volume_divisor, max_score)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActivitySettings {
    pub volume_divisor: f64,
    pub max_score: f64,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            volume_divisor: 10000.0,
            max_score: 100.0,
        }
    }
}

/// 代理状态推送配置设置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentStatusSettings {
    /// 推送间隔（毫秒）
    pub interval_ms: u64,
    /// 上报的状态字符串
    pub status: String,
    /// 上报的上下文深度
    pub context_depth: f64,
    /// 上报的区块链同步标记
    pub blockchain_sync: bool,
}

impl Default for AgentStatusSettings {
    fn default() -> Self {
        Self {
            interval_ms: 5000,
            status: "active".to_string(),
            context_depth: 0.75,
            blockchain_sync: true,
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 按以下顺序叠加配置源，后者覆盖前者：
    /// 1. 内置默认值
    /// 2. `config/default.toml`（可选）
    /// 3. `config/{APP_ENVIRONMENT}.toml`（可选）
    /// 4. `AGENTRS__` 前缀的环境变量，例如 `AGENTRS__LLM__API_KEY`
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("classifier.fallback_domain", "general")?
            .set_default("capabilities.default_domain", "general")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("AGENTRS")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("blockchain.tracked_tokens")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}
