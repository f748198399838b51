//! The scoring result handed to the report layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Cap on the missing-skill list presented to the caller. The required
/// list is never capped.
pub const MISSING_SKILLS_CAP: usize = 12;

/// One scored report: the composite score plus its auditable parts.
///
/// Produced once per request and never mutated. Everything the report
/// layer renders — overview, score breakdown, skills analysis — reads
/// from here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    /// Composite effectiveness score in `[0, 100]`.
    pub effectiveness: f32,
    /// Role the classifier considers most probable for this resume.
    pub predicted_role: String,
    /// Role the caller asked to be scored against.
    pub target_role: String,
    /// Whether predicted and target role match (case-insensitive).
    pub role_match: bool,
    /// Every required skill for the target role, uncapped, in taxonomy
    /// declaration order.
    pub required_skills: Vec<String>,
    /// Required skills found in the resume.
    pub present_skills: Vec<String>,
    /// Required skills absent from the resume, capped at
    /// [`MISSING_SKILLS_CAP`] entries.
    pub missing_skills: Vec<String>,
    /// Role sub-score: 0 or 40.
    pub role_subscore: f32,
    /// Skill sub-score in `[0, 40]`.
    pub skill_subscore: f32,
    /// Description similarity sub-score in `[0, 20]`.
    pub description_subscore: f32,
    /// When this result was produced.
    pub timestamp: DateTime<Utc>,
}
