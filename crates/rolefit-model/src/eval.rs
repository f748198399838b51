//! Held-out evaluation metrics.
//!
//! The trainer's acceptance evaluation: overall accuracy plus a per-class
//! precision/recall/F1 breakdown over the held-out slice. The report is a
//! plain value — computable, printable, never persisted.

use serde::Serialize;

/// Metrics for a single class on the held-out slice.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMetrics {
    /// Class label.
    pub label: String,
    /// Fraction of predictions for this class that were correct.
    pub precision: f32,
    /// Fraction of true members of this class that were found.
    pub recall: f32,
    /// Harmonic mean of precision and recall.
    pub f1: f32,
    /// Number of true members of this class in the held-out slice.
    pub support: usize,
}

/// Evaluation of a classifier against held-out samples.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Fraction of held-out samples predicted correctly.
    pub accuracy: f32,
    /// Per-class breakdown, in class-index order.
    pub per_class: Vec<ClassMetrics>,
    /// Number of held-out samples evaluated.
    pub test_size: usize,
}

/// Computes accuracy and per-class precision/recall/F1.
///
/// `truth` and `predicted` are parallel slices of class indices into
/// `classes`. Classes with no true members and no predictions score zero
/// across the board.
pub fn evaluate(truth: &[usize], predicted: &[usize], classes: &[String]) -> EvaluationReport {
    debug_assert_eq!(truth.len(), predicted.len());

    let correct = truth
        .iter()
        .zip(predicted)
        .filter(|(expected, got)| expected == got)
        .count();
    let accuracy = if truth.is_empty() {
        0.0
    } else {
        correct as f32 / truth.len() as f32
    };

    let per_class = classes
        .iter()
        .enumerate()
        .map(|(class, label)| class_metrics(class, label, truth, predicted))
        .collect();

    EvaluationReport {
        accuracy,
        per_class,
        test_size: truth.len(),
    }
}

/// Computes precision/recall/F1 for one class index.
fn class_metrics(class: usize, label: &str, truth: &[usize], predicted: &[usize]) -> ClassMetrics {
    let mut true_positives = 0usize;
    let mut false_positives = 0usize;
    let mut false_negatives = 0usize;

    for (&expected, &got) in truth.iter().zip(predicted) {
        match (expected == class, got == class) {
            (true, true) => true_positives += 1,
            (false, true) => false_positives += 1,
            (true, false) => false_negatives += 1,
            (false, false) => {}
        }
    }

    let precision = ratio(true_positives, true_positives + false_positives);
    let recall = ratio(true_positives, true_positives + false_negatives);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    ClassMetrics {
        label: label.to_string(),
        precision,
        recall,
        f1,
        support: true_positives + false_negatives,
    }
}

/// Zero-safe division.
fn ratio(numerator: usize, denominator: usize) -> f32 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f32 / denominator as f32
    }
}
