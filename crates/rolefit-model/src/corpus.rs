//! Labeled corpus loading.
//!
//! The training corpus is a CSV file with one labeled resume per row. The
//! reader accepts both lowercase headers and the capitalized headers of the
//! original dataset (`Category`, `Resume`).

use std::path::Path;

use serde::Deserialize;

use crate::ModelError;

/// A labeled corpus row.
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusRecord {
    /// Role label for this resume.
    #[serde(alias = "Category")]
    pub category: String,
    /// Raw resume text.
    #[serde(alias = "Resume")]
    pub resume: String,
}

/// Loads all rows of a labeled corpus CSV.
///
/// Row-level type problems (missing columns, bad encoding) surface as
/// [`ModelError::CorpusRead`]; content quality (too-short text) is judged
/// later by the trainer, not here.
pub fn load_corpus(path: &Path) -> Result<Vec<CorpusRecord>, ModelError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| ModelError::CorpusRead {
        path: path.to_path_buf(),
        source,
    })?;

    reader
        .deserialize()
        .map(|row| {
            row.map_err(|source| ModelError::CorpusRead {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}
