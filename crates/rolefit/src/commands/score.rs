//! Implementation of `rolefit score`.

use std::{
    fs,
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Args;
use rolefit_model::ModelBundle;
use rolefit_score::{ScoringEngine, ScoringRequest};
use rolefit_taxonomy::advice;

use super::load_taxonomy;
use crate::report;

/// Arguments for `rolefit score`.
#[derive(Args)]
pub struct ScoreArgs {
    /// Resume text file (text already extracted from its container format)
    pub resume: PathBuf,

    /// Target role to score against
    #[arg(long)]
    pub role: String,

    /// Job description text file
    #[arg(long)]
    pub job_desc: Option<PathBuf>,

    /// Extra job information text file
    #[arg(long)]
    pub job_info: Option<PathBuf>,

    /// Extra resume information text file, appended after the document text
    #[arg(long)]
    pub resume_info: Option<PathBuf>,

    /// Directory containing the trained model artifacts
    #[arg(long, default_value = "model")]
    pub model_dir: PathBuf,

    /// Taxonomy TOML file (defaults to the built-in taxonomy)
    #[arg(long)]
    pub taxonomy: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Scores one resume and renders the report.
///
/// Input preconditions are checked here, before the engine is invoked; the
/// engine assumes non-empty resume text and a selected role.
pub fn run(args: &ScoreArgs) -> ExitCode {
    let mut resume_text = match read_text(&args.resume) {
        Ok(text) => text,
        Err(code) => return code,
    };

    // Extra resume info goes after the document text; the order affects
    // classification n-grams and is part of the contract.
    if let Some(path) = &args.resume_info {
        match read_text(path) {
            Ok(extra) => {
                resume_text.push_str("\n\n");
                resume_text.push_str(&extra);
            }
            Err(code) => return code,
        }
    }

    if resume_text.trim().is_empty() {
        eprintln!("error: resume text is empty; provide a document or additional information");
        return ExitCode::FAILURE;
    }
    if args.role.trim().is_empty() {
        eprintln!("error: no target role selected");
        return ExitCode::FAILURE;
    }

    let job_description = match &args.job_desc {
        Some(path) => match read_text(path) {
            Ok(text) => text,
            Err(code) => return code,
        },
        None => String::new(),
    };
    let extra_job_info = match &args.job_info {
        Some(path) => match read_text(path) {
            Ok(text) => text,
            Err(code) => return code,
        },
        None => String::new(),
    };

    let taxonomy = match load_taxonomy(args.taxonomy.as_deref()) {
        Ok(taxonomy) => taxonomy,
        Err(code) => return code,
    };

    let bundle = match ModelBundle::load(&args.model_dir) {
        Ok(bundle) => bundle,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("run 'rolefit train <corpus.csv>' to produce the model artifacts");
            return ExitCode::FAILURE;
        }
    };

    let engine = ScoringEngine::new(bundle, taxonomy);
    let request = ScoringRequest {
        resume_text: resume_text.clone(),
        target_role: args.role.clone(),
        job_description,
        extra_job_info,
    };

    let result = match engine.score(&request) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Advice content for the report; purely presentational.
    let gap_suggestions = engine
        .taxonomy()
        .role(&args.role)
        .map(|role| advice::skill_gap_suggestions(role, &resume_text))
        .unwrap_or_default();
    let projects = advice::project_suggestions(&args.role);
    let tips = advice::resume_tips();

    if args.json {
        let envelope = report::JsonReport {
            result: &result,
            suggestions: &gap_suggestions,
            project_suggestions: projects,
            tips,
        };
        match serde_json::to_string_pretty(&envelope) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize JSON: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print!(
            "{}",
            report::text_report(&result, projects, &gap_suggestions, tips)
        );
    }

    ExitCode::SUCCESS
}

/// Reads a text file, reporting failures on stderr.
fn read_text(path: &Path) -> Result<String, ExitCode> {
    fs::read_to_string(path).map_err(|e| {
        eprintln!("error: failed to read {}: {e}", path.display());
        ExitCode::FAILURE
    })
}
