// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::HashMap;

use crate::domain::models::capability::{AdjustedCapabilities, CapabilityProfile};
use crate::domain::models::domain_catalog::FALLBACK_DOMAIN;
use crate::utils::errors::ConfigurationError;

/// 领域能力表
///
/// 领域名称 -> 能力画像的静态映射。查询是全函数：
/// 未登记的领域返回默认领域（通常为 "general"）的画像，永不报错。
#[derive(Debug, Clone)]
pub struct CapabilityTable {
    profiles: HashMap<String, CapabilityProfile>,
    default_domain: String,
}

impl CapabilityTable {
    /// 创建并校验能力表
    ///
    /// # 错误
    ///
    /// * `InvalidScore` - 分数不在 [0, 1] 区间或不是有限数
    /// * `MissingDefaultProfile` - 缺少默认领域的画像
    pub fn new(
        profiles: HashMap<String, CapabilityProfile>,
        default_domain: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let default_domain = default_domain.into();

        for (domain, profile) in &profiles {
            for (capability, &score) in profile.iter() {
                if !score.is_finite() || !(0.0..=1.0).contains(&score) {
                    return Err(ConfigurationError::InvalidScore {
                        domain: domain.clone(),
                        capability: capability.clone(),
                        score,
                    });
                }
            }
        }

        if !profiles.contains_key(&default_domain) {
            return Err(ConfigurationError::MissingDefaultProfile(default_domain));
        }

        Ok(Self {
            profiles,
            default_domain,
        })
    }

    pub fn default_domain(&self) -> &str {
        &self.default_domain
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.profiles.contains_key(domain)
    }

    /// 查询领域的能力画像，未命中时返回默认画像
    pub fn lookup(&self, domain: &str) -> &CapabilityProfile {
        self.profiles
            .get(domain)
            .unwrap_or_else(|| self.default_profile())
    }

    /// 组合查询结果与领域名称
    pub fn adjust_capabilities(&self, domain: &str) -> AdjustedCapabilities {
        AdjustedCapabilities {
            domain: domain.to_string(),
            capabilities: self.lookup(domain).clone(),
        }
    }

    fn default_profile(&self) -> &CapabilityProfile {
        // Presence of the default profile is checked in `new`, and `Default` inserts it
        &self.profiles[&self.default_domain]
    }
}

impl Default for CapabilityTable {
    fn default() -> Self {
        let profiles = HashMap::from([
            (
                "technical".to_string(),
                CapabilityProfile::from_pairs(&[
                    ("problem_solving", 0.9),
                    ("code_generation", 0.8),
                    ("technical_analysis", 0.85),
                ]),
            ),
            (
                "creative".to_string(),
                CapabilityProfile::from_pairs(&[
                    ("ideation", 0.9),
                    ("storytelling", 0.8),
                    ("artistic_interpretation", 0.75),
                ]),
            ),
            (
                "business".to_string(),
                CapabilityProfile::from_pairs(&[
                    ("strategic_planning", 0.8),
                    ("market_analysis", 0.75),
                    ("financial_modeling", 0.7),
                ]),
            ),
            (
                "scientific".to_string(),
                CapabilityProfile::from_pairs(&[
                    ("research_methodology", 0.9),
                    ("data_analysis", 0.85),
                    ("hypothesis_generation", 0.8),
                ]),
            ),
            (
                FALLBACK_DOMAIN.to_string(),
                CapabilityProfile::from_pairs(&[
                    ("adaptability", 0.6),
                    ("general_knowledge", 0.7),
                    ("communication", 0.75),
                ]),
            ),
        ]);

        Self {
            profiles,
            default_domain: FALLBACK_DOMAIN.to_string(),
        }
    }
}
