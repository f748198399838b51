//! Multi-class linear role classifier.
//!
//! A one-vs-rest linear SVM: one hinge-loss binary problem per class over
//! the shared vector space, solved by Pegasos-style subgradient descent
//! with a bounded epoch budget. Class-balanced sample costs
//! (`n / (k * count)`) counter label-frequency skew. Training is
//! deterministic given (data, seed): samples are visited in a seeded
//! per-epoch shuffle order and nothing runs in parallel, so refitting
//! reproduces identical parameters.

use serde::{Deserialize, Serialize};

use crate::{ModelError, shuffle::shuffle};

/// Bounded optimization budget: full passes over the training slice per
/// binary problem.
const MAX_EPOCHS: usize = 50;

/// Inverse regularization strength; `lambda = 1 / (COST * n)`.
const COST: f32 = 1.0;

/// Fold the weight-vector scale factor back in below this threshold to
/// avoid f32 underflow on long runs.
const RESCALE_THRESHOLD: f32 = 1e-6;

/// A trained multi-class linear classifier.
///
/// Immutable once trained; loaded once at startup and shared read-only.
/// Must only ever be used with vectors from the vectorizer it was trained
/// with — the pairing is an operational invariant the artifact loader can
/// only partially verify.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Class labels, in sorted order; indices are decision indices.
    classes: Vec<String>,
    /// Per-class weight vectors over the shared vector space.
    weights: Vec<Vec<f32>>,
    /// Per-class intercepts.
    intercepts: Vec<f32>,
}

impl LinearClassifier {
    /// Trains the classifier on vectorized samples.
    ///
    /// `labels` are indices into `classes`. Every sample must have the same
    /// dimension. Fails on an empty sample set or fewer than two classes.
    pub fn fit(
        samples: &[Vec<f32>],
        labels: &[usize],
        classes: Vec<String>,
        seed: u64,
    ) -> Result<Self, ModelError> {
        if samples.is_empty() {
            return Err(ModelError::EmptyCorpus);
        }
        if classes.len() < 2 {
            return Err(ModelError::SingleClass);
        }

        let dimension = samples[0].len();
        debug_assert!(samples.iter().all(|sample| sample.len() == dimension));
        debug_assert!(labels.iter().all(|&label| label < classes.len()));

        // Balanced per-class sample costs: n / (k * count).
        let mut counts = vec![0usize; classes.len()];
        for &label in labels {
            counts[label] += 1;
        }
        let n_samples = samples.len() as f32;
        let n_classes = classes.len() as f32;
        let class_cost: Vec<f32> = counts
            .iter()
            .map(|&count| {
                if count == 0 {
                    0.0
                } else {
                    n_samples / (n_classes * count as f32)
                }
            })
            .collect();

        let lambda = 1.0 / (COST * n_samples);

        let mut weights = Vec::with_capacity(classes.len());
        let mut intercepts = Vec::with_capacity(classes.len());
        for class in 0..classes.len() {
            let (w, b) = fit_binary(samples, labels, class, &class_cost, lambda, seed, dimension);
            weights.push(w);
            intercepts.push(b);
        }

        Ok(Self {
            classes,
            weights,
            intercepts,
        })
    }

    /// Per-class decision values for a vector.
    pub fn decision_values(&self, vector: &[f32]) -> Vec<f32> {
        assert_eq!(
            vector.len(),
            self.dimension(),
            "input vector dimension does not match the trained model"
        );

        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(w, b)| dot(w, vector) + b)
            .collect()
    }

    /// Predicts the class index for a vector.
    ///
    /// Argmax over the decision values; ties break toward the lowest class
    /// index, the deterministic ordering the linear decision rule implies.
    pub fn predict_index(&self, vector: &[f32]) -> usize {
        let values = self.decision_values(vector);
        let mut best = 0;
        for (index, &value) in values.iter().enumerate().skip(1) {
            if value > values[best] {
                best = index;
            }
        }
        best
    }

    /// Predicts the class label for a vector.
    pub fn predict(&self, vector: &[f32]) -> &str {
        &self.classes[self.predict_index(vector)]
    }

    /// Class labels in decision-index order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Vector dimension the model was trained on.
    pub fn dimension(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }
}

/// Solves one one-vs-rest binary problem.
///
/// Pegasos updates with learning rate `1/(lambda * (t + 1))`: shrink the
/// weight vector by `1 - eta * lambda` each step, add `eta * cost * y * x`
/// on a margin violation. The `t + 1` schedule keeps the first shrink away
/// from exactly zero so the shrink can be tracked as a scalar, making each
/// step O(non-zeros) rather than O(dimension).
fn fit_binary(
    samples: &[Vec<f32>],
    labels: &[usize],
    class: usize,
    class_cost: &[f32],
    lambda: f32,
    seed: u64,
    dimension: usize,
) -> (Vec<f32>, f32) {
    let mut direction = vec![0.0f32; dimension];
    let mut scale = 1.0f32;
    let mut intercept = 0.0f32;

    let mut order: Vec<usize> = (0..samples.len()).collect();
    let mut step: u64 = 0;

    for epoch in 0..MAX_EPOCHS {
        shuffle(
            &mut order,
            seed,
            ((class as u64) << 32) | epoch as u64,
        );

        for &sample_index in &order {
            step += 1;
            let eta = 1.0 / (lambda * (step + 1) as f32);
            let sample = &samples[sample_index];
            let polarity = if labels[sample_index] == class {
                1.0
            } else {
                -1.0
            };
            let cost = class_cost[labels[sample_index]];

            let margin = polarity * (scale * dot(&direction, sample) + intercept);

            scale *= 1.0 - eta * lambda;

            if margin < 1.0 {
                let gain = eta * cost * polarity;
                let unscaled = gain / scale;
                for (d, x) in direction.iter_mut().zip(sample) {
                    *d += unscaled * x;
                }
                intercept += gain;
            }

            if scale < RESCALE_THRESHOLD {
                for d in &mut direction {
                    *d *= scale;
                }
                scale = 1.0;
            }
        }
    }

    let weights = direction.into_iter().map(|d| d * scale).collect();
    (weights, intercept)
}

/// Dense dot product.
fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
