//! TF-IDF document vectorizer.
//!
//! Fitted once offline over the training corpus, then reused read-only for
//! every transform. The fitted model is a vocabulary (term → dimension
//! index) plus per-term inverse-document-frequency weights; transform
//! output is an L2-normalized term-frequency × IDF vector of fixed
//! dimension.

use std::collections::{BTreeMap, HashMap};

use rolefit_text::{Stopwords, tokenize};
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Fitting bounds for the vectorizer.
///
/// These are recorded in the artifact so an operator can see what a model
/// was built with. The n-gram range is descriptive: the analyzer emits
/// unigrams and bigrams.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Maximum vocabulary size; excess candidates are cut by corpus
    /// frequency rank.
    pub max_features: usize,
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Maximum fraction of documents a term may appear in before it is
    /// considered uninformative.
    pub max_df_ratio: f32,
    /// Smallest n-gram length.
    pub ngram_min: usize,
    /// Largest n-gram length.
    pub ngram_max: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: 5000,
            min_df: 2,
            max_df_ratio: 0.85,
            ngram_min: 1,
            ngram_max: 2,
        }
    }
}

/// A fitted TF-IDF vectorizer.
///
/// Immutable once fitted. The stopword set is rebuilt on deserialization
/// rather than persisted; it is part of the analyzer, not the learned
/// state.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Bounds the model was fitted with.
    config: VectorizerConfig,
    /// Term → dimension index, indices assigned in sorted term order.
    vocabulary: BTreeMap<String, usize>,
    /// Smoothed IDF weight per dimension index.
    idf: Vec<f32>,
    /// Analyzer stopword set (not part of the learned state).
    #[serde(skip)]
    stopwords: Stopwords,
}

impl TfidfVectorizer {
    /// Fits a vectorizer over the cleaned training corpus.
    ///
    /// Terms outside the document-frequency bounds are excluded; when more
    /// than `max_features` candidates remain they are ranked by total
    /// corpus frequency (alphabetical tie-break) and the tail is cut.
    /// Dimension indices are assigned in sorted term order and IDF uses the
    /// smoothed form `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit(docs: &[String], config: VectorizerConfig) -> Result<Self, ModelError> {
        if docs.is_empty() {
            return Err(ModelError::EmptyCorpus);
        }

        let stopwords = Stopwords::new();

        let mut doc_freq: HashMap<String, usize> = HashMap::new();
        let mut corpus_freq: HashMap<String, u64> = HashMap::new();

        for doc in docs {
            let mut counts: HashMap<String, u64> = HashMap::new();
            for term in tokenize::analyze(doc, &stopwords) {
                *counts.entry(term).or_insert(0) += 1;
            }
            for (term, count) in counts {
                *corpus_freq.entry(term.clone()).or_insert(0) += count;
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = docs.len();
        let max_doc_count = config.max_df_ratio * n_docs as f32;

        let mut candidates: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= config.min_df && (*df as f32) <= max_doc_count)
            .collect();

        if candidates.is_empty() {
            return Err(ModelError::EmptyVocabulary);
        }

        if candidates.len() > config.max_features {
            candidates.sort_by(|a, b| {
                corpus_freq[&b.0]
                    .cmp(&corpus_freq[&a.0])
                    .then_with(|| a.0.cmp(&b.0))
            });
            candidates.truncate(config.max_features);
        }

        candidates.sort_by(|a, b| a.0.cmp(&b.0));

        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(candidates.len());
        for (index, (term, df)) in candidates.into_iter().enumerate() {
            idf.push(((1 + n_docs) as f32 / (1 + df) as f32).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(Self {
            config,
            vocabulary,
            idf,
            stopwords,
        })
    }

    /// Transforms text into an L2-normalized TF-IDF vector.
    ///
    /// Tokens outside the vocabulary are silently dropped; they contribute
    /// zero weight, never an error. Text with no known tokens yields the
    /// zero vector.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.idf.len()];

        for term in tokenize::analyze(text, &self.stopwords) {
            if let Some(&index) = self.vocabulary.get(&term) {
                vector[index] += 1.0;
            }
        }

        for (value, idf) in vector.iter_mut().zip(&self.idf) {
            *value *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        vector
    }

    /// Output vector dimension.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Bounds the model was fitted with.
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    /// Looks up a term's dimension index.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// The term's IDF weight, if it is in the vocabulary.
    pub fn term_idf(&self, term: &str) -> Option<f32> {
        self.term_index(term).map(|index| self.idf[index])
    }
}
