//! Trained-artifact lifecycle for rolefit.
//!
//! This crate owns everything with a fit/persist/load lifecycle:
//!
//! - the TF-IDF [`TfidfVectorizer`] (text → fixed-dimension vector),
//! - the [`LinearClassifier`] (vector → most probable role),
//! - the [`ModelBundle`] of persisted artifacts the scoring process loads
//!   once at startup, and
//! - the offline [`train`] orchestration with its evaluation discipline.
//!
//! The vectorizer and classifier are trained on the same vector space and
//! are only ever valid as a pair; see [`ModelBundle`] for what the loader
//! can and cannot verify about that pairing.

#![warn(missing_docs)]

mod artifacts;
mod classifier;
mod corpus;
mod error;
mod eval;
mod shuffle;
mod split;
mod trainer;
mod vectorizer;

pub use artifacts::{
    CLASSIFIER_FILE, FORMAT_VERSION, LABELS_FILE, LabelMap, ModelBundle, VECTORIZER_FILE,
};
pub use classifier::LinearClassifier;
pub use corpus::{CorpusRecord, load_corpus};
pub use error::ModelError;
pub use eval::{ClassMetrics, EvaluationReport, evaluate};
pub use shuffle::shuffle;
pub use split::{StratifiedSplit, stratified_split};
pub use trainer::{ClassCount, DEFAULT_SEED, TrainingOptions, TrainingSummary, train};
pub use vectorizer::{TfidfVectorizer, VectorizerConfig};
