//! Stopword filtering for vectorizer tokenization.
//!
//! Standard English stopwords from the `stop-words` crate (Stopwords ISO).
//! Stopwords are low-value terms filtered out before term counting so the
//! vocabulary concentrates on discriminative content.

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// An English stopword filter.
///
/// Uses a `HashSet` for O(1) lookup. All words are stored in lowercase for
/// case-insensitive matching.
#[derive(Clone)]
pub struct Stopwords {
    /// Lowercased stopword set.
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwords {
    /// Creates a new filter with the standard English stopword list.
    pub fn new() -> Self {
        let words = stop_words::get(LANGUAGE::English)
            .into_iter()
            .map(|word| word.to_ascii_lowercase())
            .collect();

        Self { words }
    }

    /// Checks if a term is a stopword.
    ///
    /// The check is case-insensitive for ASCII characters.
    pub fn contains(&self, term: &str) -> bool {
        let lower = term.to_ascii_lowercase();
        self.words.contains(&lower)
    }

    /// Returns the total number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stopwords are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
