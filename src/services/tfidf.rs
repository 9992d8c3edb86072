//! TF-IDF vectorization of genre strings.
//!
//! Weighting follows the usual smoothed scheme:
//!
//! ```text
//! tf(t, d)  = count of t in d
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! tfidf     = tf * idf, then each row scaled to unit L2 norm
//! ```
//!
//! Columns are ordered by the alphabetical order of the vocabulary, so the
//! output depends only on the input documents and their order.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::stopwords::StopWords;

/// Sparse row of a feature matrix, entries sorted by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from `(column, value)` pairs; zero values are dropped
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|&(_, v)| v != 0.0);
        entries.sort_by_key(|&(col, _)| col);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, column: usize) -> f64 {
        self.entries
            .binary_search_by_key(&column, |&(col, _)| col)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Dot product by merging the two sorted entry lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ci, vi) = self.entries[i];
            let (cj, vj) = other.entries[j];
            match ci.cmp(&cj) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += vi * vj;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, v) in &mut self.entries {
                *v /= norm;
            }
        }
    }
}

/// One sparse TF-IDF row per document, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureMatrix {
    rows: Vec<SparseVector>,
    n_features: usize,
}

impl FeatureMatrix {
    pub fn new(rows: Vec<SparseVector>, n_features: usize) -> Self {
        Self { rows, n_features }
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn row(&self, i: usize) -> &SparseVector {
        &self.rows[i]
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }
}

/// Splits text into lowercase word tokens of two or more characters.
///
/// Anything that is not alphanumeric or `_` separates tokens, so
/// `"Sci-Fi|Film-Noir"` yields `sci`, `fi`, `film`, `noir`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .collect()
}

/// Learns a vocabulary and IDF weights from a corpus and turns documents
/// into L2-normalized TF-IDF rows.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    stop_words: StopWords,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self {
            stop_words,
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
        }
    }

    /// Vectorizer that drops English stop words
    pub fn english() -> Self {
        Self::new(StopWords::english())
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    fn terms(&self, document: &str) -> Vec<String> {
        tokenize(document)
            .into_iter()
            .filter(|t| !self.stop_words.contains(t))
            .collect()
    }

    /// Learns vocabulary and document frequencies from `documents`
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: BTreeSet<String> = self.terms(doc.as_ref()).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = documents.len() as f64;
        self.vocabulary = doc_freq
            .keys()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();
        self.idf = doc_freq
            .values()
            .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        tracing::debug!(
            documents = documents.len(),
            vocabulary = self.vocabulary.len(),
            "TF-IDF vocabulary fitted"
        );
    }

    /// Vectorizes `documents` with the fitted vocabulary; unseen terms are ignored
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> FeatureMatrix {
        let rows = documents
            .iter()
            .map(|doc| {
                let mut counts: HashMap<usize, f64> = HashMap::new();
                for term in self.terms(doc.as_ref()) {
                    if let Some(&col) = self.vocabulary.get(&term) {
                        *counts.entry(col).or_insert(0.0) += 1.0;
                    }
                }
                let mut row = SparseVector::from_entries(
                    counts
                        .into_iter()
                        .map(|(col, tf)| (col, tf * self.idf[col]))
                        .collect(),
                );
                row.normalize();
                row
            })
            .collect();

        FeatureMatrix::new(rows, self.vocabulary.len())
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> FeatureMatrix {
        self.fit(documents);
        self.transform(documents)
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::english()
    }
}
