// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::classification::{ClassificationResult, DomainScore};
use crate::domain::models::domain_catalog::DomainCatalog;
use crate::utils::text_processing::{cosine_similarity, TfIdfVectorizer};

/// 领域分类器
///
/// # 功能
///
/// 在构造时把每个领域的关键词列表视为一篇文档，联合拟合 TF-IDF，
/// 得到处于同一词表空间的领域向量；分类时把输入文本投影到该空间，
/// 与每个领域向量计算余弦相似度，返回得分严格最高的领域。
///
/// # 回退规则
///
/// 最高分不是有限正数时（空输入、空词表、无任何重叠关键词）返回回退领域。
/// 平分时取目录顺序中靠前的领域。分类没有错误通道。
///
/// 构造完成后不可变，可以通过 `Arc` 在多个请求间无锁共享。
#[derive(Debug, Clone)]
pub struct DomainClassifier {
    catalog: DomainCatalog,
    vectorizer: TfIdfVectorizer,
    domain_vectors: Vec<Vec<f64>>,
}

impl Default for DomainClassifier {
    fn default() -> Self {
        Self::new(DomainCatalog::default())
    }
}

impl DomainClassifier {
    pub fn new(catalog: DomainCatalog) -> Self {
        let documents: Vec<String> = catalog
            .domains()
            .iter()
            .map(|d| d.keywords.join(" "))
            .collect();

        let vectorizer = TfIdfVectorizer::fit(&documents);
        let domain_vectors = documents
            .iter()
            .map(|doc| vectorizer.transform(doc))
            .collect();

        Self {
            catalog,
            vectorizer,
            domain_vectors,
        }
    }

    pub fn catalog(&self) -> &DomainCatalog {
        &self.catalog
    }

    pub fn fallback_domain(&self) -> &str {
        self.catalog.fallback()
    }

    /// 返回文本所属的领域名称
    pub fn classify(&self, text: &str) -> String {
        self.classify_with_scores(text).domain
    }

    /// 返回带诊断分数的分类结果
    pub fn classify_with_scores(&self, text: &str) -> ClassificationResult {
        let text_vector = self.vectorizer.transform(text);

        let scores: Vec<DomainScore> = self
            .catalog
            .domains()
            .iter()
            .zip(&self.domain_vectors)
            .map(|(domain, vector)| DomainScore {
                domain: domain.name.clone(),
                score: cosine_similarity(&text_vector, vector),
            })
            .collect();

        // Strict comparison keeps the first domain on ties
        let mut best: Option<&DomainScore> = None;
        for candidate in &scores {
            if !candidate.score.is_finite() {
                continue;
            }
            match best {
                Some(current) if candidate.score <= current.score => {}
                _ => best = Some(candidate),
            }
        }

        match best {
            Some(winner) if winner.score > 0.0 => ClassificationResult {
                domain: winner.domain.clone(),
                scores,
                fallback: false,
            },
            _ => ClassificationResult {
                domain: self.catalog.fallback().to_string(),
                scores,
                fallback: true,
            },
        }
    }
}
