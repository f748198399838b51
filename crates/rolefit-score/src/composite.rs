//! Composite effectiveness scoring policy.
//!
//! Pure functions, no state. Three independently capped sub-scores —
//! role match (40), skill match (40), description similarity (20) — sum
//! into the final effectiveness score, clamped to `[0, 100]` as a last
//! defensive cap even though the individual ceilings already bound the
//! sum.

use crate::similarity::DESCRIPTION_CEILING;

/// Ceiling of the role-match sub-score.
pub const ROLE_CEILING: f32 = 40.0;

/// Ceiling of the skill-match sub-score.
pub const SKILL_CEILING: f32 = 40.0;

/// Ceiling of the composite effectiveness score.
pub const EFFECTIVENESS_CEILING: f32 = 100.0;

/// Whether the predicted role matches the target role.
///
/// Case-insensitive comparison; no partial credit exists for "close"
/// roles.
pub fn is_role_match(predicted: &str, target: &str) -> bool {
    predicted.eq_ignore_ascii_case(target)
}

/// Role sub-score: exactly 40 on a match, else 0.
pub fn role_subscore(role_match: bool) -> f32 {
    if role_match { ROLE_CEILING } else { 0.0 }
}

/// Skill sub-score: `min(40, found/required × 40)`.
///
/// A role with no required skills (empty taxonomy entry) scores 0 rather
/// than dividing by zero.
pub fn skill_subscore(found: usize, required: usize) -> f32 {
    if required == 0 {
        return 0.0;
    }
    ((found as f32 / required as f32) * SKILL_CEILING).min(SKILL_CEILING)
}

/// Composite effectiveness: sum of the sub-scores, clamped to `[0, 100]`.
///
/// The description sub-score is clamped to its own ceiling again before
/// summation; the similarity scorer already guarantees the range, this
/// guards the policy against any caller.
pub fn effectiveness(role_subscore: f32, skill_subscore: f32, description_subscore: f32) -> f32 {
    let description = description_subscore.clamp(0.0, DESCRIPTION_CEILING);
    (role_subscore + skill_subscore + description).clamp(0.0, EFFECTIVENESS_CEILING)
}
