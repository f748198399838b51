//! Competency taxonomy for rolefit.
//!
//! The taxonomy is a static mapping from role name to ordered skill tiers.
//! It is pure data: loaded once at startup, shared read-only by the scoring
//! pipeline, never mutated. A built-in taxonomy is embedded in the binary;
//! an operator can point at an alternative TOML file instead.
//!
//! Ordering is contractual. The skill matcher builds a role's required-skill
//! list by flattening its tiers in declaration order with duplicates
//! preserved, so the TOML uses array-of-tables throughout.

#![warn(missing_docs)]

pub mod advice;
mod error;
mod parse;
mod validate;

use std::path::Path;

use serde::Deserialize;

pub use error::TaxonomyError;
pub use parse::{parse_taxonomy_file, parse_taxonomy_str};
pub use validate::{TaxonomyWarning, validate_taxonomy};

/// The built-in taxonomy document compiled into the binary.
const BUILTIN_TAXONOMY: &str = include_str!("../data/taxonomy.toml");

/// A competency taxonomy: every role the scorer can target.
#[derive(Debug, Clone, Deserialize)]
pub struct Taxonomy {
    /// Roles in declaration order.
    #[serde(rename = "role", default)]
    pub roles: Vec<Role>,
}

/// A single occupational role with its tiered skill lists.
#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    /// Role name; the key scoring requests are validated against.
    pub name: String,
    /// Skill tiers in declaration order.
    #[serde(rename = "tier", default)]
    pub tiers: Vec<Tier>,
}

/// A named tier of skills within a role.
///
/// Tier grouping is used for presentation weighting of suggestions only;
/// the required-skill set flattens across tiers.
#[derive(Debug, Clone, Deserialize)]
pub struct Tier {
    /// Tier name (e.g. "Core", "Advanced", "Tools").
    pub name: String,
    /// Skill and tool names in declaration order.
    pub skills: Vec<String>,
}

impl Taxonomy {
    /// Loads the built-in taxonomy embedded in the binary.
    ///
    /// The embedded document is part of the crate and always parses; a
    /// failure here is a build defect, so this does not return `Result`.
    pub fn builtin() -> Self {
        parse_taxonomy_str(BUILTIN_TAXONOMY, Path::new("builtin:taxonomy.toml"))
            .expect("embedded taxonomy must parse")
    }

    /// Loads a taxonomy from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, TaxonomyError> {
        parse_taxonomy_file(path)
    }

    /// Looks up a role by exact name.
    ///
    /// When a name is duplicated the first definition wins (validation
    /// reports the duplicate as a warning).
    pub fn role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.name == name)
    }

    /// Checks whether a role name is a valid scoring target.
    pub fn contains(&self, name: &str) -> bool {
        self.role(name).is_some()
    }

    /// Returns all role names in declaration order.
    pub fn role_names(&self) -> Vec<&str> {
        self.roles.iter().map(|role| role.name.as_str()).collect()
    }

    /// Validates the taxonomy content and returns any warnings.
    pub fn validate(&self) -> Vec<TaxonomyWarning> {
        validate_taxonomy(self)
    }
}

impl Role {
    /// Looks up a tier by exact name.
    pub fn tier(&self, name: &str) -> Option<&Tier> {
        self.tiers.iter().find(|tier| tier.name == name)
    }

    /// Flattens every tier's skill list in declaration order.
    ///
    /// Duplicates across tiers are preserved: the result mirrors the
    /// source-of-truth order exactly, and downstream ratios count every
    /// entry.
    pub fn required_skills(&self) -> Vec<&str> {
        self.tiers
            .iter()
            .flat_map(|tier| tier.skills.iter().map(String::as_str))
            .collect()
    }
}
