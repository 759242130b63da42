// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 单元测试模块
///
/// 通过 wiremock 模拟语言模型、JSON-RPC 节点和区块浏览器 API
mod llm_service_test;
mod rpc_mock;
mod telemetry_test;
mod wallet_repository_test;
