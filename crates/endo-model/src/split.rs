//! Deterministic train/test splitting and fold assignment.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// 80/20-style split of row indices.
///
/// When `stratify` is set, each class contributes proportionally to the test
/// set; the caller decides stratifiability upfront (every class needs enough
/// members) and falls back to a plain shuffled split otherwise.
pub fn train_test_split(
    labels: &[usize],
    test_fraction: f64,
    stratify: bool,
    seed: u64,
) -> (Vec<usize>, Vec<usize>) {
    let mut rng = StdRng::seed_from_u64(seed);

    if stratify {
        let mut by_class: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, &label) in labels.iter().enumerate() {
            by_class.entry(label).or_default().push(i);
        }
        let mut train = Vec::new();
        let mut test = Vec::new();
        for (_, mut members) in by_class {
            members.shuffle(&mut rng);
            let n_test = ((members.len() as f64) * test_fraction).round() as usize;
            let n_test = n_test.min(members.len().saturating_sub(1)).max(1);
            test.extend(members.drain(..n_test));
            train.extend(members);
        }
        train.shuffle(&mut rng);
        test.shuffle(&mut rng);
        (train, test)
    } else {
        let mut indices: Vec<usize> = (0..labels.len()).collect();
        indices.shuffle(&mut rng);
        let n_test = ((labels.len() as f64) * test_fraction).round() as usize;
        let test = indices.split_off(labels.len() - n_test);
        (indices, test)
    }
}

/// Assign every row to one of `k` folds, shuffled deterministically.
/// Returns the per-fold index lists.
pub fn kfold(n_rows: usize, k: usize, seed: u64) -> Vec<Vec<usize>> {
    let k = k.max(2).min(n_rows.max(2));
    let mut indices: Vec<usize> = (0..n_rows).collect();
    indices.shuffle(&mut StdRng::seed_from_u64(seed));

    let mut folds: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (pos, index) in indices.into_iter().enumerate() {
        folds[pos % k].push(index);
    }
    folds
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_partitions_all_rows() {
        let labels: Vec<usize> = (0..100).map(|i| i % 4).collect();
        let (train, test) = train_test_split(&labels, 0.2, true, 42);
        assert_eq!(train.len() + test.len(), 100);
        let mut all: Vec<usize> = train.iter().chain(&test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn stratified_split_preserves_class_balance() {
        // 80 of class 0, 20 of class 1.
        let labels: Vec<usize> = (0..100).map(|i| usize::from(i >= 80)).collect();
        let (_, test) = train_test_split(&labels, 0.2, true, 7);
        let class1_in_test = test.iter().filter(|&&i| labels[i] == 1).count();
        assert_eq!(test.len(), 20);
        assert_eq!(class1_in_test, 4);
    }

    #[test]
    fn unstratified_split_has_expected_sizes() {
        let labels = vec![0usize; 50];
        let (train, test) = train_test_split(&labels, 0.2, false, 1);
        assert_eq!(train.len(), 40);
        assert_eq!(test.len(), 10);
    }

    #[test]
    fn split_is_deterministic_per_seed() {
        let labels: Vec<usize> = (0..60).map(|i| i % 3).collect();
        assert_eq!(
            train_test_split(&labels, 0.2, true, 5),
            train_test_split(&labels, 0.2, true, 5)
        );
        assert_ne!(
            train_test_split(&labels, 0.2, false, 5),
            train_test_split(&labels, 0.2, false, 6)
        );
    }

    #[test]
    fn kfold_covers_every_row_once() {
        let folds = kfold(53, 5, 3);
        assert_eq!(folds.len(), 5);
        let mut all: Vec<usize> = folds.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..53).collect::<Vec<_>>());
    }

    #[test]
    fn kfold_never_degrades_below_two() {
        let folds = kfold(10, 1, 3);
        assert_eq!(folds.len(), 2);
    }
}
