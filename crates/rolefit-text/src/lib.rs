//! Text primitives for the rolefit scoring pipeline.
//!
//! Everything downstream of raw document text starts here:
//!
//! 1. **Normalization**: deterministic character-level cleanup in one of two
//!    named profiles ([`normalize`]).
//! 2. **Tokenization**: splitting normalized text into terms and n-grams for
//!    the vectorizer ([`tokenize`]).
//! 3. **Stopword filtering**: removing low-value English words
//!    ([`Stopwords`]).
//!
//! All functions are pure: the same input always produces the same output,
//! with no hidden state.

#![warn(missing_docs)]

pub mod normalize;
mod stopwords;
pub mod tokenize;

pub use stopwords::Stopwords;
