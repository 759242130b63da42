// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 领域目录（domain_catalog）：分类所用的领域与关键词
/// - 能力画像（capability）：各领域的能力分数
/// - 分类结果（classification）：分类判定与诊断分数
/// - 钱包与代币（wallet）：链上查询的数据结构
/// - 代理状态（agent_status）：推送给仪表盘的实时状态
/// - 查询（query）：语言模型补全与查询响应
pub mod agent_status;
pub mod capability;
pub mod classification;
pub mod domain_catalog;
pub mod query;
pub mod wallet;
