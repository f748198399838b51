//! Subcommand implementations for the `rolefit` binary.

pub mod roles;
pub mod score;
pub mod train;

use std::{path::Path, process::ExitCode};

use rolefit_taxonomy::Taxonomy;

/// Loads the taxonomy: a file when one is given, the built-in otherwise.
///
/// Validation warnings are printed to stderr but do not fail the command;
/// a warned taxonomy still scores, it just scores strangely.
pub fn load_taxonomy(path: Option<&Path>) -> Result<Taxonomy, ExitCode> {
    let taxonomy = match path {
        Some(path) => match Taxonomy::load(path) {
            Ok(taxonomy) => taxonomy,
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        },
        None => Taxonomy::builtin(),
    };

    for warning in taxonomy.validate() {
        eprintln!("warning: {warning}");
    }

    Ok(taxonomy)
}
