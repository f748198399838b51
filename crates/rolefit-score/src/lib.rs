//! Online resume-role fit scoring for rolefit.
//!
//! The pipeline takes one [`ScoringRequest`] and produces one
//! [`ScoringResult`]:
//!
//! 1. Normalize the resume with the inference profile and vectorize it.
//! 2. Classify the most probable role.
//! 3. Match the target role's taxonomy skills against the raw text.
//! 4. Score similarity to the job description with the shared vectorizer.
//! 5. Combine role match (40), skill match (40), and description
//!    similarity (20) into the composite effectiveness score.
//!
//! All shared state — trained artifacts and taxonomy — is injected into
//! the [`ScoringEngine`] at construction and read-only thereafter.

#![warn(missing_docs)]

pub mod composite;
mod engine;
mod error;
mod matcher;
mod result;
pub mod similarity;

pub use engine::{ScoringEngine, ScoringRequest};
pub use error::ScoreError;
pub use matcher::{SkillMatch, match_skills};
pub use result::{MISSING_SKILLS_CAP, ScoringResult};
