// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use super::capability::CapabilityProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainScore {
    pub domain: String,
    pub score: f64,
}

/// 分类结果
///
/// 包含判定的领域、按目录顺序排列的各领域相似度，以及是否走了回退分支。
/// 调用方应通过 `fallback` 区分“有把握的分类”和“回退结果”。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub domain: String,
    pub scores: Vec<DomainScore>,
    pub fallback: bool,
}

impl ClassificationResult {
    /// 判定领域的相似度，回退时为 0.0
    pub fn confidence(&self) -> f64 {
        if self.fallback {
            return 0.0;
        }
        self.score_of(&self.domain).unwrap_or(0.0)
    }

    pub fn score_of(&self, domain: &str) -> Option<f64> {
        self.scores
            .iter()
            .find(|s| s.domain == domain)
            .map(|s| s.score)
    }
}

/// 上下文转换结果
///
/// 分类与能力查询两步流水线的合并输出
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextTransformation {
    pub domain: String,
    pub capabilities: CapabilityProfile,
    pub scores: Vec<DomainScore>,
    pub fallback: bool,
}
