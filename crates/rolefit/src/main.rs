//! Command-line interface for the `rolefit` resume scoring tool.

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

mod commands;
mod report;

use commands::score::ScoreArgs;

#[derive(Parser)]
#[command(name = "rolefit")]
#[command(about = "Resume-role fit scoring: train the model offline, score resumes against roles")]
/// Top-level CLI options.
struct Cli {
    #[command(subcommand)]
    /// Subcommand to execute.
    command: Commands,
}

#[derive(Subcommand)]
/// Supported `rolefit` subcommands.
enum Commands {
    /// Train the vectorizer and role classifier from a labeled corpus
    Train {
        /// Labeled corpus CSV with category,resume columns
        corpus: PathBuf,

        /// Directory to write the three model artifacts into
        #[arg(long, default_value = "model")]
        model_dir: PathBuf,

        /// Seed for the train/test split and the solver's sample order
        #[arg(long, default_value_t = rolefit_model::DEFAULT_SEED)]
        seed: u64,
    },

    /// Score a resume against a target role
    Score(ScoreArgs),

    /// List taxonomy roles and their skill tiers
    Roles {
        /// Taxonomy TOML file (defaults to the built-in taxonomy)
        #[arg(long)]
        taxonomy: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            corpus,
            model_dir,
            seed,
        } => commands::train::run(&corpus, &model_dir, seed),
        Commands::Score(args) => commands::score::run(&args),
        Commands::Roles { taxonomy } => commands::roles::run(taxonomy.as_deref()),
    }
}
