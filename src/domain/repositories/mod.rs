// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的外部数据访问接口，遵循依赖倒置原则。
/// 具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 钱包仓库（wallet_repository）：链上余额和代币交易的读取
/// - 代币注册（token_registry）：代币合约的创建和查询
pub mod token_registry;
pub mod wallet_repository;
