//! Offline training orchestration.
//!
//! One-shot batch job, run before any scoring process starts: load the
//! labeled corpus, clean it, fit the vectorizer and classifier, evaluate on
//! a held-out slice, and persist the three artifacts. Re-running with the
//! same corpus and seed reproduces the same artifacts.

use std::path::PathBuf;

use rolefit_text::normalize;
use serde::Serialize;

use crate::{
    EvaluationReport, LabelMap, LinearClassifier, ModelBundle, ModelError, TfidfVectorizer,
    VectorizerConfig, evaluate, split::stratified_split,
};

/// Default seed for the split and the solver.
pub const DEFAULT_SEED: u64 = 42;

/// Fraction of each class held out for evaluation.
const TEST_FRACTION: f32 = 0.2;

/// Rows whose training-normalized text is at most this many characters are
/// too short to be informative and are dropped.
const MIN_CLEANED_LENGTH: usize = 50;

/// Inputs to a training run.
#[derive(Debug, Clone)]
pub struct TrainingOptions {
    /// Path to the labeled corpus CSV.
    pub corpus_path: PathBuf,
    /// Directory the three artifacts are written into.
    pub model_dir: PathBuf,
    /// Seed for the stratified split and the solver's sample order.
    pub seed: u64,
}

/// What a training run did, for operator reporting.
///
/// Dropped-row counting is the data-quality contract: unusable rows are
/// never fatal, but they must be surfaced.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingSummary {
    /// Rows read from the corpus file.
    pub total_rows: usize,
    /// Rows dropped for too-short cleaned text.
    pub dropped_rows: usize,
    /// Per-class row counts after cleaning, in class-index order.
    pub class_counts: Vec<ClassCount>,
    /// Terms selected into the vocabulary.
    pub vocabulary_size: usize,
    /// Samples used for fitting.
    pub train_size: usize,
    /// Samples held out for evaluation.
    pub test_size: usize,
    /// Held-out evaluation.
    pub evaluation: EvaluationReport,
}

/// A class label with its usable-row count.
#[derive(Debug, Clone, Serialize)]
pub struct ClassCount {
    /// Role label.
    pub label: String,
    /// Usable rows carrying this label.
    pub count: usize,
}

/// Runs training end-to-end and persists the artifacts.
///
/// The vectorizer is fitted over the full cleaned corpus before the split;
/// only the classifier sees the train/test boundary. Class labels are
/// sorted, and the persisted label mapping mirrors the classifier's class
/// order exactly.
pub fn train(options: &TrainingOptions) -> Result<TrainingSummary, ModelError> {
    let records = crate::load_corpus(&options.corpus_path)?;
    let total_rows = records.len();

    // Clean with the training profile and drop uninformative rows.
    let mut documents: Vec<String> = Vec::with_capacity(records.len());
    let mut label_names: Vec<String> = Vec::with_capacity(records.len());
    for record in records {
        let cleaned = normalize::training(&record.resume);
        if cleaned.len() <= MIN_CLEANED_LENGTH {
            continue;
        }
        documents.push(cleaned);
        label_names.push(record.category);
    }
    let dropped_rows = total_rows - documents.len();

    if documents.is_empty() {
        return Err(ModelError::EmptyCorpus);
    }

    // Sorted class set; indices into it are the classifier's decision order.
    let mut classes: Vec<String> = label_names.clone();
    classes.sort();
    classes.dedup();
    if classes.len() < 2 {
        return Err(ModelError::SingleClass);
    }

    let labels: Vec<usize> = label_names
        .iter()
        .map(|name| {
            classes
                .binary_search(name)
                .expect("every label comes from the class set")
        })
        .collect();

    let class_counts: Vec<ClassCount> = classes
        .iter()
        .map(|label| ClassCount {
            label: label.clone(),
            count: labels
                .iter()
                .filter(|&&idx| classes[idx] == *label)
                .count(),
        })
        .collect();

    let vectorizer = TfidfVectorizer::fit(&documents, VectorizerConfig::default())?;
    let vectors: Vec<Vec<f32>> = documents.iter().map(|doc| vectorizer.transform(doc)).collect();

    let split = stratified_split(&labels, classes.len(), TEST_FRACTION, options.seed);

    let train_x: Vec<Vec<f32>> = split.train.iter().map(|&idx| vectors[idx].clone()).collect();
    let train_y: Vec<usize> = split.train.iter().map(|&idx| labels[idx]).collect();
    let classifier = LinearClassifier::fit(&train_x, &train_y, classes.clone(), options.seed)?;

    let test_truth: Vec<usize> = split.test.iter().map(|&idx| labels[idx]).collect();
    let test_predicted: Vec<usize> = split
        .test
        .iter()
        .map(|&idx| classifier.predict_index(&vectors[idx]))
        .collect();
    let evaluation = evaluate(&test_truth, &test_predicted, &classes);

    let bundle = ModelBundle {
        vectorizer,
        classifier,
        labels: LabelMap { labels: classes },
    };
    bundle.store(&options.model_dir)?;

    Ok(TrainingSummary {
        total_rows,
        dropped_rows,
        class_counts,
        vocabulary_size: bundle.vectorizer.dimension(),
        train_size: split.train.len(),
        test_size: split.test.len(),
        evaluation,
    })
}

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::{CLASSIFIER_FILE, LABELS_FILE, VECTORIZER_FILE};

    /// A small two-class corpus where every row clears the length floor and
    /// the discriminative vocabulary repeats across documents.
    fn fixture_csv() -> String {
        let data_rows = [
            "python pandas machine learning models and statistics for production data pipelines",
            "python scikit-learn models with sql feature stores and statistics dashboards",
            "machine learning models in python with pandas notebooks and sql warehouses",
            "statistics heavy python models, pandas pipelines and sql reporting for analysts",
            "deep learning models and python statistics with pandas on large sql datasets",
        ];
        let hr_rows = [
            "recruitment pipelines, payroll administration and employee relations programs",
            "employee onboarding, payroll systems and recruitment compliance paperwork",
            "payroll management with recruitment events and employee relations training",
            "employee relations casework, recruitment drives and payroll reconciliation",
            "recruitment strategy, employee engagement surveys and payroll operations",
        ];

        let mut csv = String::from("category,resume\n");
        for row in data_rows {
            csv.push_str(&format!("Data Science,\"{row}\"\n"));
        }
        for row in hr_rows {
            csv.push_str(&format!("HR,\"{row}\"\n"));
        }
        csv
    }

    fn write_fixture(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("corpus.csv");
        fs::write(&path, fixture_csv()).unwrap();
        path
    }

    #[test]
    fn train_writes_all_three_artifacts() {
        let dir = TempDir::new().unwrap();
        let corpus_path = write_fixture(&dir);
        let model_dir = dir.path().join("model");

        let summary = train(&TrainingOptions {
            corpus_path,
            model_dir: model_dir.clone(),
            seed: DEFAULT_SEED,
        })
        .unwrap();

        for name in [VECTORIZER_FILE, CLASSIFIER_FILE, LABELS_FILE] {
            assert!(model_dir.join(name).exists(), "{name} should exist");
        }

        assert_eq!(summary.total_rows, 10);
        assert_eq!(summary.dropped_rows, 0);
        assert_eq!(summary.train_size, 8);
        assert_eq!(summary.test_size, 2);
        assert!(summary.vocabulary_size > 0);
    }

    #[test]
    fn trained_model_separates_the_classes() {
        let dir = TempDir::new().unwrap();
        let corpus_path = write_fixture(&dir);
        let model_dir = dir.path().join("model");

        train(&TrainingOptions {
            corpus_path,
            model_dir: model_dir.clone(),
            seed: DEFAULT_SEED,
        })
        .unwrap();

        let bundle = ModelBundle::load(&model_dir).unwrap();
        let data_vec = bundle
            .vectorizer
            .transform("python pandas models and statistics");
        assert_eq!(bundle.classifier.predict(&data_vec), "Data Science");

        let hr_vec = bundle
            .vectorizer
            .transform("payroll recruitment employee relations");
        assert_eq!(bundle.classifier.predict(&hr_vec), "HR");
    }

    #[test]
    fn short_rows_are_dropped_and_counted() {
        let dir = TempDir::new().unwrap();
        let mut csv = fixture_csv();
        csv.push_str("HR,\"too short\"\n");
        let corpus_path = dir.path().join("corpus.csv");
        fs::write(&corpus_path, csv).unwrap();

        let summary = train(&TrainingOptions {
            corpus_path,
            model_dir: dir.path().join("model"),
            seed: DEFAULT_SEED,
        })
        .unwrap();

        assert_eq!(summary.total_rows, 11);
        assert_eq!(summary.dropped_rows, 1);
    }

    #[test]
    fn labels_are_sorted_and_counted() {
        let dir = TempDir::new().unwrap();
        let corpus_path = write_fixture(&dir);

        let summary = train(&TrainingOptions {
            corpus_path,
            model_dir: dir.path().join("model"),
            seed: DEFAULT_SEED,
        })
        .unwrap();

        let labels: Vec<&str> = summary
            .class_counts
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Data Science", "HR"]);
        assert!(summary.class_counts.iter().all(|c| c.count == 5));
    }

    #[test]
    fn training_is_reproducible() {
        let dir = TempDir::new().unwrap();
        let corpus_path = write_fixture(&dir);

        let first_dir = dir.path().join("first");
        let second_dir = dir.path().join("second");

        for model_dir in [&first_dir, &second_dir] {
            train(&TrainingOptions {
                corpus_path: corpus_path.clone(),
                model_dir: model_dir.clone(),
                seed: DEFAULT_SEED,
            })
            .unwrap();
        }

        for name in [VECTORIZER_FILE, CLASSIFIER_FILE, LABELS_FILE] {
            let first = fs::read_to_string(first_dir.join(name)).unwrap();
            let second = fs::read_to_string(second_dir.join(name)).unwrap();
            assert_eq!(first, second, "{name} should be bit-identical");
        }
    }

    #[test]
    fn different_seed_changes_the_solver_path() {
        let dir = TempDir::new().unwrap();
        let corpus_path = write_fixture(&dir);

        let first_dir = dir.path().join("first");
        let second_dir = dir.path().join("second");

        train(&TrainingOptions {
            corpus_path: corpus_path.clone(),
            model_dir: first_dir.clone(),
            seed: DEFAULT_SEED,
        })
        .unwrap();
        train(&TrainingOptions {
            corpus_path,
            model_dir: second_dir.clone(),
            seed: 7,
        })
        .unwrap();

        let first = fs::read_to_string(first_dir.join(CLASSIFIER_FILE)).unwrap();
        let second = fs::read_to_string(second_dir.join(CLASSIFIER_FILE)).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn all_rows_too_short_is_empty_corpus() {
        let dir = TempDir::new().unwrap();
        let corpus_path = dir.path().join("corpus.csv");
        fs::write(&corpus_path, "category,resume\nHR,\"tiny\"\nHR,\"small\"\n").unwrap();

        let result = train(&TrainingOptions {
            corpus_path,
            model_dir: dir.path().join("model"),
            seed: DEFAULT_SEED,
        });
        assert!(matches!(result, Err(ModelError::EmptyCorpus)));
    }

    #[test]
    fn single_label_corpus_is_rejected_before_artifacts() {
        let dir = TempDir::new().unwrap();
        let corpus_path = dir.path().join("corpus.csv");
        let row = "recruitment payroll employee relations training and onboarding compliance work";
        fs::write(
            &corpus_path,
            format!("category,resume\nHR,\"{row}\"\nHR,\"{row}\"\nHR,\"{row}\"\n"),
        )
        .unwrap();

        let model_dir = dir.path().join("model");
        let result = train(&TrainingOptions {
            corpus_path,
            model_dir: model_dir.clone(),
            seed: DEFAULT_SEED,
        });

        assert!(matches!(result, Err(ModelError::SingleClass)));
        assert!(!model_dir.exists(), "no artifacts on failure");
    }
}
