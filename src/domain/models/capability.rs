// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 能力画像
///
/// 能力名称 -> 分数（0.0 ~ 1.0）。按能力名称排序，序列化结果稳定。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityProfile(BTreeMap<String, f64>);

impl CapabilityProfile {
    pub fn new(scores: BTreeMap<String, f64>) -> Self {
        Self(scores)
    }

    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self(
            pairs
                .iter()
                .map(|(name, score)| (name.to_string(), *score))
                .collect(),
        )
    }

    pub fn get(&self, capability: &str) -> Option<f64> {
        self.0.get(capability).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// 能力调整结果
///
/// 领域名称与该领域的能力画像，供下游（例如提示词生成）直接使用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustedCapabilities {
    pub domain: String,
    pub capabilities: CapabilityProfile,
}
