// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 区块链基础设施模块
///
/// 提供钱包仓库和代币注册接口的具体实现：
/// - JSON-RPC 客户端（rpc_client）
/// - 合约 ABI 编解码（abi）
/// - 钱包仓库实现（wallet_repo_impl）
/// - 代币注册实现（token_registry_impl）
pub mod abi;
pub mod rpc_client;
pub mod token_registry_impl;
pub mod wallet_repo_impl;
