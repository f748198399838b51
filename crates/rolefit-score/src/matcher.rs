//! Taxonomy skill matching against raw resume text.
//!
//! Matching is plain case-insensitive substring containment of each
//! taxonomy skill inside the raw (non-normalized) resume text. No token
//! boundaries: "Java" inside "JavaScript" counts. That is a deliberate
//! simplicity/precision trade-off the scoring contract is defined against,
//! not a bug to fix.

use rolefit_taxonomy::Taxonomy;

use crate::ScoreError;

/// The outcome of matching one role's required skills against a resume.
///
/// `present` and `missing` partition `required`: their concatenation-order
/// union equals the required list and they share no entry positions.
/// Neither list is capped here; presentation caps belong to the result
/// assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMatch {
    /// Every required skill: the role's tiers flattened in declaration
    /// order, duplicates preserved.
    pub required: Vec<String>,
    /// Required skills found in the resume text, in required-list order.
    pub present: Vec<String>,
    /// Required skills absent from the resume text, in required-list order.
    pub missing: Vec<String>,
}

/// Matches a role's required skills against raw resume text.
///
/// An unknown role is a configuration error; the matcher never guesses a
/// taxonomy entry.
pub fn match_skills(
    taxonomy: &Taxonomy,
    role: &str,
    resume_text: &str,
) -> Result<SkillMatch, ScoreError> {
    let entry = taxonomy.role(role).ok_or_else(|| ScoreError::UnknownRole {
        role: role.to_string(),
    })?;

    let haystack = resume_text.to_lowercase();

    let mut required = Vec::new();
    let mut present = Vec::new();
    let mut missing = Vec::new();

    for skill in entry.required_skills() {
        required.push(skill.to_string());
        if haystack.contains(&skill.to_lowercase()) {
            present.push(skill.to_string());
        } else {
            missing.push(skill.to_string());
        }
    }

    Ok(SkillMatch {
        required,
        present,
        missing,
    })
}
