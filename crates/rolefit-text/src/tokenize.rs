//! Vectorizer analyzer: tokens and n-grams.
//!
//! Splits normalized text into lowercase alphanumeric tokens, drops
//! stopwords and single-character tokens, then emits unigrams plus
//! adjacent-pair bigrams. Bigrams are formed after stopword removal, so
//! `"expert in python"` yields the bigram `"expert python"`.

use crate::Stopwords;

/// Minimum token length kept by the analyzer. Single characters carry no
/// discriminative signal.
const MIN_TOKEN_LENGTH: usize = 2;

/// Splits text into filtered lowercase tokens.
///
/// Tokens are maximal runs of alphanumeric characters. Tokens shorter than
/// two characters and stopwords are dropped.
pub fn tokens(text: &str, stopwords: &Stopwords) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| part.len() >= MIN_TOKEN_LENGTH)
        .map(str::to_lowercase)
        .filter(|token| !stopwords.contains(token))
        .collect()
}

/// Emits unigrams followed by adjacent-pair bigrams over a token stream.
///
/// Bigram terms join their two tokens with a single space.
pub fn ngrams(tokens: &[String]) -> Vec<String> {
    let mut terms = Vec::with_capacity(tokens.len().saturating_mul(2));
    terms.extend_from_slice(tokens);

    for pair in tokens.windows(2) {
        terms.push(format!("{} {}", pair[0], pair[1]));
    }

    terms
}

/// Full analysis of a normalized document: tokenize, then n-gram.
pub fn analyze(text: &str, stopwords: &Stopwords) -> Vec<String> {
    ngrams(&tokens(text, stopwords))
}
