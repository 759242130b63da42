// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::counter;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::settings::Settings;
use crate::domain::models::capability::{AdjustedCapabilities, CapabilityProfile};
use crate::domain::models::classification::{ClassificationResult, ContextTransformation};
use crate::domain::models::domain_catalog::{DomainCatalog, DomainDefinition};
use crate::domain::services::capability_table::CapabilityTable;
use crate::domain::services::domain_classifier::DomainClassifier;
use crate::utils::errors::ConfigurationError;

/// 分类观察者特质
///
/// 上下文转换流水线通过该钩子上报决策，自身不配置任何全局日志状态。
/// 所有方法都有空实现，按需覆盖。
pub trait ClassificationObserver: Send + Sync {
    fn on_classified(&self, _text: &str, _result: &ClassificationResult) {}

    fn on_adjusted(&self, _adjusted: &AdjustedCapabilities) {}
}

/// 什么都不做的观察者
pub struct NoopObserver;

impl ClassificationObserver for NoopObserver {}

/// 基于 tracing 和 metrics 的观察者
pub struct TracingObserver;

impl ClassificationObserver for TracingObserver {
    fn on_classified(&self, text: &str, result: &ClassificationResult) {
        counter!("context_classifications_total", "domain" => result.domain.clone()).increment(1);
        if result.fallback {
            counter!("context_fallbacks_total").increment(1);
        }
        info!(
            domain = %result.domain,
            confidence = result.confidence(),
            fallback = result.fallback,
            text_len = text.len(),
            "Detected domain"
        );
    }

    fn on_adjusted(&self, adjusted: &AdjustedCapabilities) {
        debug!(
            domain = %adjusted.domain,
            capabilities = adjusted.capabilities.len(),
            "Adjusted capabilities"
        );
    }
}

/// 上下文转换器
///
/// 组合领域分类器和能力表：文本 -> 领域 -> 能力画像。
/// 两步都没有失败通道，任何退化情况都会落到回退领域和默认画像。
pub struct ContextTransformer {
    classifier: DomainClassifier,
    capabilities: CapabilityTable,
    observer: Arc<dyn ClassificationObserver>,
}

impl Default for ContextTransformer {
    fn default() -> Self {
        Self::new(
            DomainClassifier::default(),
            CapabilityTable::default(),
            Arc::new(TracingObserver),
        )
    }
}

impl ContextTransformer {
    pub fn new(
        classifier: DomainClassifier,
        capabilities: CapabilityTable,
        observer: Arc<dyn ClassificationObserver>,
    ) -> Self {
        Self {
            classifier,
            capabilities,
            observer,
        }
    }

    /// 根据配置构建转换器
    ///
    /// 未配置领域目录或能力表时使用内置默认值；
    /// `classifier.fallback_domain` 对内置目录同样生效
    ///
    /// # 错误
    ///
    /// 配置的目录或能力表不合法时返回 `ConfigurationError`
    pub fn from_settings(
        settings: &Settings,
        observer: Arc<dyn ClassificationObserver>,
    ) -> Result<Self, ConfigurationError> {
        let definitions = match &settings.classifier.domains {
            Some(domains) => domains
                .iter()
                .map(|d| DomainDefinition {
                    name: d.name.clone(),
                    keywords: d.keywords.clone(),
                })
                .collect(),
            // Built-in domains; the built-in keyword-less fallback is replaced by the configured one
            None => DomainCatalog::default()
                .domains()
                .iter()
                .filter(|d| !d.keywords.is_empty())
                .cloned()
                .collect(),
        };
        let catalog = DomainCatalog::new(definitions, settings.classifier.fallback_domain.clone())?;
        let classifier = DomainClassifier::new(catalog);

        let capabilities = match &settings.capabilities.profiles {
            Some(profiles) => {
                let profiles = profiles
                    .iter()
                    .map(|(domain, scores)| {
                        let scores = scores.iter().map(|(k, v)| (k.clone(), *v)).collect();
                        (domain.clone(), CapabilityProfile::new(scores))
                    })
                    .collect::<HashMap<_, _>>();
                CapabilityTable::new(profiles, settings.capabilities.default_domain.clone())?
            }
            None => CapabilityTable::default(),
        };

        Ok(Self::new(classifier, capabilities, observer))
    }

    pub fn classifier(&self) -> &DomainClassifier {
        &self.classifier
    }

    pub fn capability_table(&self) -> &CapabilityTable {
        &self.capabilities
    }

    pub fn detect_domain(&self, text: &str) -> String {
        self.classify(text).domain
    }

    pub fn classify(&self, text: &str) -> ClassificationResult {
        let result = self.classifier.classify_with_scores(text);
        self.observer.on_classified(text, &result);
        result
    }

    pub fn get_domain_capabilities(&self, domain: &str) -> &CapabilityProfile {
        self.capabilities.lookup(domain)
    }

    pub fn adjust_capabilities(&self, domain: &str) -> AdjustedCapabilities {
        let adjusted = self.capabilities.adjust_capabilities(domain);
        self.observer.on_adjusted(&adjusted);
        adjusted
    }

    /// 完整流水线：分类并附带能力画像
    pub fn transform(&self, text: &str) -> ContextTransformation {
        let classification = self.classify(text);
        let adjusted = self.adjust_capabilities(&classification.domain);

        ContextTransformation {
            domain: adjusted.domain,
            capabilities: adjusted.capabilities,
            scores: classification.scores,
            fallback: classification.fallback,
        }
    }
}
