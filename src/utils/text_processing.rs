// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 文本向量化模块
//!
//! 提供领域分类所需的文本处理功能，包括：
//! - 分词（小写化，保留长度不少于2的Unicode单词）
//! - TF-IDF 向量化（平滑IDF，L2归一化）
//! - 余弦相似度计算
//!
//! # 使用示例
//!
//! ```rust
//! use agentrs::utils::text_processing::{cosine_similarity, TfIdfVectorizer};
//!
//! let documents = vec!["code software".to_string(), "art music".to_string()];
//! let vectorizer = TfIdfVectorizer::fit(&documents);
//! let query = vectorizer.transform("I write software");
//! let target = vectorizer.transform(&documents[0]);
//! assert!(cosine_similarity(&query, &target) > 0.0);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is a valid regex"));

/// 将文本切分为小写词元
///
/// 单字符词元会被丢弃（与常见 TF-IDF 实现的默认词元规则一致）
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// TF-IDF 向量化器
///
/// 在一组文档上联合拟合词表和逆文档频率，之后所有向量共享同一个词表空间，
/// 因此不同文档的向量可以直接比较。拟合完成后不可变。
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    /// 词元 -> 维度下标
    vocabulary: HashMap<String, usize>,
    /// 每个维度的逆文档频率
    idf: Vec<f64>,
    /// 拟合时的文档数量
    n_documents: usize,
}

impl TfIdfVectorizer {
    /// 在给定文档上拟合向量化器
    ///
    /// IDF 采用平滑公式 `ln((1 + n) / (1 + df)) + 1`，词表维度按首次出现的顺序分配。
    pub fn fit(documents: &[String]) -> Self {
        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: Vec<usize> = Vec::new();

        for doc in documents {
            let unique: HashSet<String> = tokenize(doc).into_iter().collect();
            // Sort so that index assignment does not depend on hash order
            let mut unique: Vec<String> = unique.into_iter().collect();
            unique.sort();

            for token in unique {
                match vocabulary.get(&token) {
                    Some(&idx) => document_frequency[idx] += 1,
                    None => {
                        vocabulary.insert(token, document_frequency.len());
                        document_frequency.push(1);
                    }
                }
            }
        }

        let n = documents.len() as f64;
        let idf = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Self {
            vocabulary,
            idf,
            n_documents: documents.len(),
        }
    }

    /// 将文本转换为 L2 归一化的 TF-IDF 向量
    ///
    /// 词表外的词元不贡献权重；没有任何词表内词元时返回全零向量。
    pub fn transform(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];

        for token in tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                vector[idx] += 1.0;
            }
        }

        for (idx, weight) in vector.iter_mut().enumerate() {
            *weight *= self.idf[idx];
        }

        let norm = l2_norm(&vector);
        if norm > 0.0 {
            for weight in &mut vector {
                *weight /= norm;
            }
        }

        vector
    }

    /// 词表大小
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// 拟合时使用的文档数量
    pub fn document_count(&self) -> usize {
        self.n_documents
    }

    /// 某个词元的 IDF 权重，词表外返回 `None`
    pub fn idf(&self, token: &str) -> Option<f64> {
        self.vocabulary.get(token).map(|&idx| self.idf[idx])
    }
}

fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}

/// 计算两个向量的余弦相似度
///
/// 任意一侧为零向量或长度不一致时返回 0.0，而不是 NaN。
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / (norm_a * norm_b)
}
