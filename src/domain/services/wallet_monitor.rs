// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::settings::ActivitySettings;
use crate::domain::models::wallet::{Address, TokenTransaction, WalletActivity};
use crate::domain::repositories::wallet_repository::WalletRepository;

/// 钱包活跃度评分参数
///
/// 评分 = min(交易数 * 交易总额 / volume_divisor, max_score)，并保证不小于 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityScoring {
    pub volume_divisor: f64,
    pub max_score: f64,
}

impl Default for ActivityScoring {
    fn default() -> Self {
        Self {
            volume_divisor: 10000.0,
            max_score: 100.0,
        }
    }
}

impl From<&ActivitySettings> for ActivityScoring {
    fn from(settings: &ActivitySettings) -> Self {
        Self {
            volume_divisor: settings.volume_divisor,
            max_score: settings.max_score,
        }
    }
}

impl ActivityScoring {
    pub fn score(&self, transactions: &[TokenTransaction]) -> f64 {
        let volume = transaction_volume(transactions);
        let raw = transactions.len() as f64 * volume / self.volume_divisor;
        if !raw.is_finite() {
            return if raw == f64::INFINITY { self.max_score } else { 0.0 };
        }
        raw.clamp(0.0, self.max_score)
    }
}

/// 计算交易总额，缺失金额按 0 计
pub fn transaction_volume(transactions: &[TokenTransaction]) -> f64 {
    transactions.iter().map(|tx| tx.value).sum()
}

/// 钱包监控服务
///
/// 包装钱包仓库，所有查询失败都会降级为零值结果（余额 0.0、空交易列表），
/// 并记录错误日志，不向调用方传播。
pub struct WalletMonitor {
    repository: Arc<dyn WalletRepository>,
    wallet_address: Address,
    scoring: ActivityScoring,
    transaction_limit: u32,
}

impl WalletMonitor {
    pub fn new(
        repository: Arc<dyn WalletRepository>,
        wallet_address: Address,
        scoring: ActivityScoring,
        transaction_limit: u32,
    ) -> Self {
        Self {
            repository,
            wallet_address,
            scoring,
            transaction_limit,
        }
    }

    pub fn wallet_address(&self) -> &Address {
        &self.wallet_address
    }

    /// 查询原生代币或指定 ERC-20 代币的余额
    pub async fn get_wallet_balance(&self, token: Option<&Address>) -> f64 {
        let result = match token {
            Some(token) => self.repository.token_balance(&self.wallet_address, token).await,
            None => self.repository.native_balance(&self.wallet_address).await,
        };

        match result {
            Ok(balance) => balance,
            Err(e) => {
                error!(
                    wallet = %self.wallet_address,
                    "Error retrieving wallet balance: {}", e
                );
                0.0
            }
        }
    }

    /// 查询指定代币的最近交易
    pub async fn get_token_transactions(&self, token: &Address, limit: u32) -> Vec<TokenTransaction> {
        match self
            .repository
            .token_transactions(&self.wallet_address, token, limit)
            .await
        {
            Ok(transactions) => transactions,
            Err(e) => {
                error!(
                    wallet = %self.wallet_address,
                    token = %token,
                    "Error retrieving token transactions: {}", e
                );
                Vec::new()
            }
        }
    }

    /// 综合分析钱包活跃度
    pub async fn analyze_wallet_activity(&self, tracked_tokens: &[Address]) -> WalletActivity {
        let native_balance = self.get_wallet_balance(None).await;

        let mut token_balances = BTreeMap::new();
        let mut all_transactions = Vec::new();
        for token in tracked_tokens {
            let balance = self.get_wallet_balance(Some(token)).await;
            token_balances.insert(token.to_string(), balance);
            all_transactions.extend(
                self.get_token_transactions(token, self.transaction_limit)
                    .await,
            );
        }

        let activity = WalletActivity {
            native_balance,
            token_balances,
            total_transaction_volume: transaction_volume(&all_transactions),
            activity_score: self.scoring.score(&all_transactions),
        };

        info!(
            wallet = %self.wallet_address,
            transactions = all_transactions.len(),
            score = activity.activity_score,
            "Analyzed wallet activity"
        );
        activity
    }
}
