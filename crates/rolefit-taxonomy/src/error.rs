//! Error types for taxonomy loading.

use std::{io, path::PathBuf};

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading a taxonomy file.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    /// Failed to read a taxonomy file.
    #[error("failed to read taxonomy file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML taxonomy content.
    #[error("failed to parse taxonomy file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },
}
