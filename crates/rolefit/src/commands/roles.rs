//! Implementation of `rolefit roles`.

use std::{path::Path, process::ExitCode};

use super::load_taxonomy;

/// Lists taxonomy roles with their tiers and skill counts.
pub fn run(taxonomy_path: Option<&Path>) -> ExitCode {
    let taxonomy = match load_taxonomy(taxonomy_path) {
        Ok(taxonomy) => taxonomy,
        Err(code) => return code,
    };

    if taxonomy.roles.is_empty() {
        println!("No roles defined.");
        return ExitCode::SUCCESS;
    }

    for role in &taxonomy.roles {
        let total: usize = role.tiers.iter().map(|tier| tier.skills.len()).sum();
        println!("{} ({total} skills)", role.name);
        for tier in &role.tiers {
            println!("   {}: {}", tier.name, tier.skills.join(", "));
        }
        println!();
    }

    ExitCode::SUCCESS
}
