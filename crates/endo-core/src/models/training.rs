use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::panel::StatusLabel;

/// Random forest hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingParams {
    pub n_estimators: usize,
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
}

impl Default for TrainingParams {
    /// The fixed parameters used when the grid search is skipped.
    fn default() -> Self {
        Self {
            n_estimators: 150,
            max_depth: 10,
            min_samples_split: 5,
            min_samples_leaf: 2,
        }
    }
}

/// Evaluation metrics from a training run. Reported only, never persisted
/// with the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    pub samples: usize,
    pub class_distribution: BTreeMap<StatusLabel, usize>,
    /// Whether the 80/20 split could be stratified.
    pub stratified: bool,
    pub params: TrainingParams,
    /// Accuracy on the held-out split.
    pub test_accuracy: f64,
    pub cv_folds: usize,
    pub cv_mean: f64,
    pub cv_std: f64,
    /// Mean Gini importance per feature, in encoding order.
    pub feature_importances: Vec<(String, f64)>,
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "samples: {}", self.samples)?;
        writeln!(f, "stratified split: {}", self.stratified)?;
        writeln!(
            f,
            "params: {} trees, depth {}, min split {}, min leaf {}",
            self.params.n_estimators,
            self.params.max_depth,
            self.params.min_samples_split,
            self.params.min_samples_leaf
        )?;
        writeln!(f, "test accuracy: {:.2}%", self.test_accuracy * 100.0)?;
        writeln!(
            f,
            "cross-validation ({} folds): {:.2}% (+/- {:.2}%)",
            self.cv_folds,
            self.cv_mean * 100.0,
            self.cv_std * 200.0
        )?;
        writeln!(f, "class distribution:")?;
        for (label, count) in &self.class_distribution {
            writeln!(f, "  {label}: {count}")?;
        }
        writeln!(f, "feature importance:")?;
        let mut ranked: Vec<_> = self.feature_importances.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        for (name, importance) in ranked {
            writeln!(f, "  {name}: {importance:.3}")?;
        }
        Ok(())
    }
}
