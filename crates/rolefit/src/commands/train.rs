//! Implementation of `rolefit train`.

use std::{path::Path, process::ExitCode};

use rolefit_model::{TrainingOptions, train};

use crate::report::evaluation_table;

/// Runs the offline trainer and prints the summary and evaluation.
///
/// Exits zero only after all three artifacts are written; any failure
/// during load, clean, fit, or persist exits non-zero and leaves no
/// partial artifact set.
pub fn run(corpus: &Path, model_dir: &Path, seed: u64) -> ExitCode {
    println!("Training from {}", corpus.display());

    let options = TrainingOptions {
        corpus_path: corpus.to_path_buf(),
        model_dir: model_dir.to_path_buf(),
        seed,
    };

    let summary = match train(&options) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!();
    println!(
        "Corpus: {} rows, {} dropped as too short",
        summary.total_rows, summary.dropped_rows
    );
    println!("Classes:");
    for class in &summary.class_counts {
        println!("   {} ({} rows)", class.label, class.count);
    }
    println!("Vocabulary: {} terms", summary.vocabulary_size);
    println!(
        "Split: {} train / {} test",
        summary.train_size, summary.test_size
    );
    println!();

    println!("Held-out evaluation:");
    println!("{}", evaluation_table(&summary.evaluation));
    println!("Accuracy: {:.4}", summary.evaluation.accuracy);
    println!();
    println!("Artifacts written to {}", model_dir.display());

    ExitCode::SUCCESS
}
