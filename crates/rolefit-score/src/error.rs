//! Error types for the scoring pipeline.

use rolefit_model::ModelError;
use thiserror::Error;

/// Errors that abort a scoring request.
///
/// The pipeline is a single deterministic pass: any error fails the whole
/// request. No sub-score is ever substituted or skipped.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// The target role is not a taxonomy key. Raised before any
    /// vectorization happens.
    #[error("unknown target role: {role}")]
    UnknownRole {
        /// The role that was requested.
        role: String,
    },

    /// A model-artifact problem surfaced during scoring setup.
    #[error(transparent)]
    Model(#[from] ModelError),
}
