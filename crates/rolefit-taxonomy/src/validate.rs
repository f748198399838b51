//! Taxonomy validation.
//!
//! Validates a loaded taxonomy and reports warnings for content issues.
//! Warnings are non-fatal: a taxonomy with an empty role still loads, the
//! matcher just returns an empty required-skill list for it.

use std::{collections::HashSet, fmt};

use crate::Taxonomy;

/// A non-fatal warning about taxonomy content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyWarning {
    /// No roles are defined.
    NoRolesDefined,
    /// A role name appears more than once; the first definition wins.
    DuplicateRole {
        /// The duplicated role name.
        role: String,
    },
    /// A role has no tiers.
    RoleHasNoTiers {
        /// Name of the role.
        role: String,
    },
    /// A tier has an empty skill list.
    TierHasNoSkills {
        /// Name of the role.
        role: String,
        /// Name of the empty tier.
        tier: String,
    },
}

impl fmt::Display for TaxonomyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRolesDefined => write!(f, "no roles are defined in taxonomy"),
            Self::DuplicateRole { role } => {
                write!(f, "role '{role}' is defined more than once")
            }
            Self::RoleHasNoTiers { role } => write!(f, "role '{role}' has no skill tiers"),
            Self::TierHasNoSkills { role, tier } => {
                write!(f, "tier '{tier}' of role '{role}' has no skills")
            }
        }
    }
}

/// Validates the taxonomy and returns any warnings.
pub fn validate_taxonomy(taxonomy: &Taxonomy) -> Vec<TaxonomyWarning> {
    let mut warnings = Vec::new();

    if taxonomy.roles.is_empty() {
        warnings.push(TaxonomyWarning::NoRolesDefined);
        return warnings;
    }

    let mut seen = HashSet::new();
    for role in &taxonomy.roles {
        if !seen.insert(role.name.as_str()) {
            warnings.push(TaxonomyWarning::DuplicateRole {
                role: role.name.clone(),
            });
        }

        if role.tiers.is_empty() {
            warnings.push(TaxonomyWarning::RoleHasNoTiers {
                role: role.name.clone(),
            });
            continue;
        }

        for tier in &role.tiers {
            if tier.skills.is_empty() {
                warnings.push(TaxonomyWarning::TierHasNoSkills {
                    role: role.name.clone(),
                    tier: tier.name.clone(),
                });
            }
        }
    }

    warnings
}
