// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统的交互。
///
/// 包含的子模块：
/// - 区块链（blockchain）：节点 JSON-RPC 客户端与仓库接口实现
/// - 指标（metrics）：Prometheus 指标导出
///
/// 基础设施层依赖于领域层的抽象接口，领域层不感知具体实现。
pub mod blockchain;
pub mod metrics;
