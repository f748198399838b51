//! Stratified train/test splitting.
//!
//! Holds out a fixed fraction of samples per label so that evaluation sees
//! every class at roughly its corpus frequency. The split is deterministic:
//! a seeded shuffle inside each label group, then a rounded per-group cut.

use crate::shuffle::shuffle;

/// Index sets produced by a stratified split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StratifiedSplit {
    /// Sample indices assigned to the training slice.
    pub train: Vec<usize>,
    /// Sample indices held out for evaluation.
    pub test: Vec<usize>,
}

/// Splits sample indices into train/test slices stratified by label.
///
/// Each label group is shuffled with its own stream of the seed, then the
/// first `round(len * test_fraction)` samples are held out. Groups always
/// keep at least one training sample; single-sample groups contribute
/// nothing to the test slice. Output index lists are sorted ascending.
pub fn stratified_split(
    labels: &[usize],
    class_count: usize,
    test_fraction: f32,
    seed: u64,
) -> StratifiedSplit {
    let mut train = Vec::new();
    let mut test = Vec::new();

    for class in 0..class_count {
        let mut group: Vec<usize> = labels
            .iter()
            .enumerate()
            .filter(|&(_, label)| *label == class)
            .map(|(idx, _)| idx)
            .collect();

        if group.is_empty() {
            continue;
        }

        shuffle(&mut group, seed, class as u64);

        let held_out = ((group.len() as f32) * test_fraction).round() as usize;
        // Never hold out the whole group.
        let held_out = held_out.min(group.len() - 1);

        test.extend_from_slice(&group[..held_out]);
        train.extend_from_slice(&group[held_out..]);
    }

    train.sort_unstable();
    test.sort_unstable();

    StratifiedSplit { train, test }
}
