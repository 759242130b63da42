// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务。
///
/// 包含的服务：
/// - 领域分类器（domain_classifier）：TF-IDF + 余弦相似度的文本领域判定
/// - 能力表（capability_table）：领域到能力画像的静态映射
/// - 上下文转换器（context_transformer）：分类与能力查询的组合流水线
/// - LLM服务（llm_service）：集成大语言模型进行补全
/// - 自然语言接口（language_interface）：按领域选择提示词处理用户查询
/// - 钱包监控（wallet_monitor）：余额、交易和活跃度分析
/// - 代理状态（agent_status_service）：代理实时状态的提供者
pub mod agent_status_service;
pub mod capability_table;
pub mod context_transformer;
pub mod domain_classifier;
pub mod language_interface;
pub mod llm_service;
pub mod wallet_monitor;
