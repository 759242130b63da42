// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::utils::errors::ConfigurationError;

/// 默认回退领域名称
pub const FALLBACK_DOMAIN: &str = "general";

/// 领域定义
///
/// 由唯一名称和有序关键词列表组成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainDefinition {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl DomainDefinition {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// 领域目录
///
/// 保持插入顺序（分类时平分按此顺序取第一个），构造后不可变。
/// 目录总是包含回退领域：如果自定义目录中没有，会在末尾追加一个空关键词的回退领域。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainCatalog {
    domains: Vec<DomainDefinition>,
    fallback: String,
}

impl DomainCatalog {
    /// 创建并校验自定义领域目录
    ///
    /// # 错误
    ///
    /// * `EmptyCatalog` - 没有任何领域
    /// * `EmptyDomainName` - 领域名为空
    /// * `DuplicateDomain` - 领域名重复
    /// * `MissingKeywords` - 非回退领域没有关键词
    pub fn new(
        domains: Vec<DomainDefinition>,
        fallback: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        let fallback = fallback.into();
        if domains.is_empty() {
            return Err(ConfigurationError::EmptyCatalog);
        }
        if fallback.trim().is_empty() {
            return Err(ConfigurationError::EmptyDomainName);
        }

        let mut seen = HashSet::new();
        for domain in &domains {
            if domain.name.trim().is_empty() {
                return Err(ConfigurationError::EmptyDomainName);
            }
            if !seen.insert(domain.name.as_str()) {
                return Err(ConfigurationError::DuplicateDomain(domain.name.clone()));
            }
            let has_keywords = domain.keywords.iter().any(|k| !k.trim().is_empty());
            if !has_keywords && domain.name != fallback {
                return Err(ConfigurationError::MissingKeywords(domain.name.clone()));
            }
        }

        let has_fallback = seen.contains(fallback.as_str());
        let mut domains = domains;
        if !has_fallback {
            domains.push(DomainDefinition {
                name: fallback.clone(),
                keywords: Vec::new(),
            });
        }

        Ok(Self { domains, fallback })
    }

    pub fn domains(&self) -> &[DomainDefinition] {
        &self.domains
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|d| d.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.domains.iter().any(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl Default for DomainCatalog {
    fn default() -> Self {
        Self {
            domains: vec![
                DomainDefinition::new(
                    "technical",
                    &[
                        "programming",
                        "software",
                        "algorithm",
                        "code",
                        "engineering",
                        "technology",
                        "computer",
                        "system",
                        "network",
                        "data science",
                    ],
                ),
                DomainDefinition::new(
                    "creative",
                    &[
                        "art",
                        "design",
                        "writing",
                        "music",
                        "poetry",
                        "imagination",
                        "creativity",
                        "innovation",
                        "storytelling",
                        "visual",
                    ],
                ),
                DomainDefinition::new(
                    "business",
                    &[
                        "finance",
                        "marketing",
                        "strategy",
                        "management",
                        "sales",
                        "entrepreneurship",
                        "investment",
                        "economics",
                        "startup",
                        "growth",
                    ],
                ),
                DomainDefinition::new(
                    "scientific",
                    &[
                        "research",
                        "experiment",
                        "hypothesis",
                        "analysis",
                        "biology",
                        "physics",
                        "chemistry",
                        "mathematics",
                        "data",
                        "research method",
                    ],
                ),
                DomainDefinition::new(FALLBACK_DOMAIN, &[]),
            ],
            fallback: FALLBACK_DOMAIN.to_string(),
        }
    }
}
