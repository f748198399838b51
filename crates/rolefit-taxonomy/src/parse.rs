//! Taxonomy file parsing.
//!
//! Parses TOML taxonomy documents into [`Taxonomy`] values. Roles and tiers
//! use TOML array-of-tables (`[[role]]`, `[[role.tier]]`) so that
//! declaration order survives parsing — the matcher's required-skill
//! contract depends on it.

use std::{fs, path::Path};

use crate::{Taxonomy, TaxonomyError};

/// Parses a taxonomy file from disk.
pub fn parse_taxonomy_file(path: &Path) -> Result<Taxonomy, TaxonomyError> {
    let contents = fs::read_to_string(path).map_err(|source| TaxonomyError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_taxonomy_str(&contents, path)
}

/// Parses taxonomy content from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_taxonomy_str(contents: &str, path: &Path) -> Result<Taxonomy, TaxonomyError> {
    toml::from_str(contents).map_err(|source| TaxonomyError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}
