//! Error types for the rolefit-model crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while training or loading model artifacts.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Failed to read or parse the corpus CSV.
    #[error("failed to read corpus file {path}: {source}")]
    CorpusRead {
        /// Path to the corpus file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },

    /// No usable rows remained after cleaning.
    #[error("corpus contains no usable rows after cleaning")]
    EmptyCorpus,

    /// The corpus has a single role label; a discriminative model needs at
    /// least two.
    #[error("corpus contains fewer than two role labels")]
    SingleClass,

    /// No terms survived the document-frequency bounds.
    #[error("vocabulary is empty after applying document-frequency bounds")]
    EmptyVocabulary,

    /// A required artifact file is absent.
    #[error("missing model artifact: {path}")]
    MissingArtifact {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// An artifact file exists but cannot be decoded.
    #[error("malformed model artifact {path}: {message}")]
    ArtifactFormat {
        /// Path to the malformed file.
        path: PathBuf,
        /// Decoder error message.
        message: String,
    },

    /// An artifact was produced by an incompatible trainer version.
    #[error("artifact {path} has format version {found}, expected {expected}")]
    ArtifactVersion {
        /// Path to the artifact.
        path: PathBuf,
        /// Version found in the file.
        found: u32,
        /// Version this build understands.
        expected: u32,
    },

    /// Classifier and vectorizer artifacts disagree on vector dimension.
    #[error(
        "classifier expects {classifier}-dimensional vectors but the vectorizer produces {vectorizer}"
    )]
    DimensionMismatch {
        /// Dimension of the vectorizer output.
        vectorizer: usize,
        /// Dimension the classifier was trained on.
        classifier: usize,
    },

    /// Classifier classes and the label mapping artifact disagree.
    #[error("label mapping does not match classifier classes: {message}")]
    LabelMismatch {
        /// Description of the disagreement.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
