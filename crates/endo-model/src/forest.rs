//! Random forest over CART trees.
//!
//! Bagging with sqrt-feature subsampling. Each tree gets its own RNG derived
//! from the forest seed, so fitting is deterministic regardless of how rayon
//! schedules the per-tree work.

use endo_core::errors::{PipelineError, PipelineResult};
use endo_core::models::TrainingParams;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::tree::{DecisionTree, TreeParams};

/// Odd multiplier decorrelating per-tree seed streams.
const TREE_SEED_STRIDE: u64 = 0x9e37_79b9_7f4a_7c15;

/// A fitted forest. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    n_classes: usize,
    params: TrainingParams,
}

impl RandomForest {
    /// Fit `params.n_estimators` trees on bootstrap samples of the rows.
    pub fn fit(
        x: &[Vec<f64>],
        y: &[usize],
        n_classes: usize,
        params: TrainingParams,
        seed: u64,
    ) -> PipelineResult<Self> {
        if x.is_empty() || y.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }
        if params.n_estimators == 0 {
            return Err(PipelineError::InvalidParameter {
                name: "n_estimators",
                reason: "must be at least 1".to_string(),
            });
        }

        let n_features = x[0].len();
        let tree_params = TreeParams {
            max_depth: params.max_depth,
            min_samples_split: params.min_samples_split,
            min_samples_leaf: params.min_samples_leaf,
            features_per_split: ((n_features as f64).sqrt() as usize).max(1),
        };

        let trees: Vec<DecisionTree> = (0..params.n_estimators)
            .into_par_iter()
            .map(|tree_idx| {
                let tree_seed = seed.wrapping_add((tree_idx as u64).wrapping_mul(TREE_SEED_STRIDE));
                let mut rng = StdRng::seed_from_u64(tree_seed);
                let bootstrap: Vec<usize> =
                    (0..x.len()).map(|_| rng.gen_range(0..x.len())).collect();
                DecisionTree::fit(x, y, &bootstrap, n_classes, tree_params, &mut rng)
            })
            .collect();

        Ok(Self {
            trees,
            n_classes,
            params,
        })
    }

    /// Mean class distribution across all trees.
    pub fn predict_proba(&self, row: &[f64]) -> Vec<f64> {
        let mut sums = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (s, p) in sums.iter_mut().zip(tree.predict_proba(row)) {
                *s += p;
            }
        }
        let n = self.trees.len() as f64;
        for s in &mut sums {
            *s /= n;
        }
        sums
    }

    /// Arg-max class index; ties resolve to the lowest index.
    pub fn predict(&self, row: &[f64]) -> usize {
        let proba = self.predict_proba(row);
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        best
    }

    /// Fraction of rows classified correctly.
    pub fn accuracy(&self, x: &[Vec<f64>], y: &[usize]) -> f64 {
        if x.is_empty() {
            return 0.0;
        }
        let correct = x
            .iter()
            .zip(y)
            .filter(|(row, &label)| self.predict(row) == label)
            .count();
        correct as f64 / x.len() as f64
    }

    /// Mean normalized Gini importance per feature.
    pub fn feature_importances(&self) -> Vec<f64> {
        let Some(first) = self.trees.first() else {
            return Vec::new();
        };
        let width = first.importances().len();
        let mut sums = vec![0.0; width];
        for tree in &self.trees {
            for (s, v) in sums.iter_mut().zip(tree.importances()) {
                *s += v;
            }
        }
        let total: f64 = sums.iter().sum();
        if total > 0.0 {
            for s in &mut sums {
                *s /= total;
            }
        }
        sums
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    pub fn params(&self) -> TrainingParams {
        self.params
    }
}
