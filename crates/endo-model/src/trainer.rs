//! The training pipeline: encode, scale, split, grid search, evaluate.

use endo_core::constants::{MAX_CV_FOLDS, MIN_STRATIFY_CLASS_COUNT, TEST_FRACTION};
use endo_core::errors::{PipelineError, PipelineResult};
use endo_core::features::{FeatureVector, FEATURE_NAMES};
use endo_core::models::{TrainingParams, TrainingReport};
use endo_core::panel::StatusLabel;
use endo_synth::Dataset;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::artifact::TrainedArtifact;
use crate::forest::RandomForest;
use crate::scaler::StandardScaler;
use crate::split;

/// Grid searched when `optimize` is on, mirroring the original tuning space.
const GRID_N_ESTIMATORS: [usize; 2] = [100, 150];
const GRID_MAX_DEPTH: [usize; 2] = [8, 10];
const GRID_MIN_SAMPLES_SPLIT: [usize; 2] = [2, 5];
/// Folds used inside the grid search.
const GRID_CV_FOLDS: usize = 3;

/// Fit a classifier on a labeled dataset.
///
/// Returns the persistable artifact bundle and the evaluation report. The
/// report is informational only; nothing in it is needed to run the
/// predictor.
pub fn train(
    dataset: &Dataset,
    optimize: bool,
    seed: u64,
) -> PipelineResult<(TrainedArtifact, TrainingReport)> {
    if dataset.is_empty() {
        return Err(PipelineError::EmptyDataset);
    }

    let encoded: Vec<FeatureVector> = dataset.samples.iter().map(|s| s.features()).collect();
    let labels: Vec<usize> = dataset
        .samples
        .iter()
        .map(|s| s.status.class_index())
        .collect();
    let n_classes = StatusLabel::ALL.len();

    let class_distribution = dataset.class_distribution();
    let min_class_count = dataset.min_class_count();
    let stratified = min_class_count >= MIN_STRATIFY_CLASS_COUNT;

    info!(
        samples = dataset.len(),
        classes = class_distribution.len(),
        min_class = min_class_count,
        stratified,
        "training status classifier"
    );

    let (train_idx, test_idx) =
        split::train_test_split(&labels, TEST_FRACTION, stratified, seed);

    let train_rows: Vec<FeatureVector> = train_idx.iter().map(|&i| encoded[i]).collect();
    let train_labels: Vec<usize> = train_idx.iter().map(|&i| labels[i]).collect();

    // Scaler statistics come from the training split only; the held-out
    // rows are transformed with them, never refitted.
    let scaler = StandardScaler::fit(&train_rows)?;
    let x_train = scaler.transform_all(&train_rows)?;
    let x_test: Vec<Vec<f64>> = test_idx
        .iter()
        .map(|&i| scaler.transform(encoded[i].as_slice()))
        .collect::<PipelineResult<_>>()?;
    let y_test: Vec<usize> = test_idx.iter().map(|&i| labels[i]).collect();

    let params = if optimize {
        grid_search(&x_train, &train_labels, n_classes, seed)?
    } else {
        TrainingParams::default()
    };
    debug!(?params, "fitting final forest");

    let forest = RandomForest::fit(&x_train, &train_labels, n_classes, params, seed)?;
    let test_accuracy = forest.accuracy(&x_test, &y_test);

    let x_all = scaler.transform_all(&encoded)?;
    let cv_folds = min_class_count.min(MAX_CV_FOLDS).max(2);
    let (cv_mean, cv_std) =
        cross_validate(&x_all, &labels, n_classes, params, cv_folds, seed)?;

    info!(
        test_accuracy = format!("{:.3}", test_accuracy),
        cv_mean = format!("{:.3}", cv_mean),
        cv_folds,
        "training complete"
    );

    let importances = forest.feature_importances();
    let feature_importances = FEATURE_NAMES
        .iter()
        .map(|n| n.to_string())
        .zip(importances)
        .collect();

    let report = TrainingReport {
        samples: dataset.len(),
        class_distribution,
        stratified,
        params,
        test_accuracy,
        cv_folds,
        cv_mean,
        cv_std,
        feature_importances,
    };

    Ok((TrainedArtifact::new(forest, scaler), report))
}

/// Mean and standard deviation of per-fold accuracy.
fn cross_validate(
    x: &[Vec<f64>],
    y: &[usize],
    n_classes: usize,
    params: TrainingParams,
    k: usize,
    seed: u64,
) -> PipelineResult<(f64, f64)> {
    let folds = split::kfold(x.len(), k, seed);

    let scores: Vec<f64> = folds
        .par_iter()
        .enumerate()
        .map(|(fold_idx, holdout)| -> PipelineResult<f64> {
            let holdout_set: std::collections::HashSet<usize> =
                holdout.iter().copied().collect();
            let mut x_fit = Vec::new();
            let mut y_fit = Vec::new();
            for i in 0..x.len() {
                if !holdout_set.contains(&i) {
                    x_fit.push(x[i].clone());
                    y_fit.push(y[i]);
                }
            }
            let forest = RandomForest::fit(
                &x_fit,
                &y_fit,
                n_classes,
                params,
                seed.wrapping_add(fold_idx as u64),
            )?;
            let x_hold: Vec<Vec<f64>> = holdout.iter().map(|&i| x[i].clone()).collect();
            let y_hold: Vec<usize> = holdout.iter().map(|&i| y[i]).collect();
            Ok(forest.accuracy(&x_hold, &y_hold))
        })
        .collect::<PipelineResult<_>>()?;

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let var = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / scores.len() as f64;
    Ok((mean, var.sqrt()))
}

/// Small exhaustive grid search, parallel over parameter combinations.
/// Scores each candidate by mean fold accuracy on the training rows; ties
/// keep the earlier combination so the outcome is deterministic.
fn grid_search(
    x: &[Vec<f64>],
    y: &[usize],
    n_classes: usize,
    seed: u64,
) -> PipelineResult<TrainingParams> {
    let mut combos = Vec::new();
    for n_estimators in GRID_N_ESTIMATORS {
        for max_depth in GRID_MAX_DEPTH {
            for min_samples_split in GRID_MIN_SAMPLES_SPLIT {
                combos.push(TrainingParams {
                    n_estimators,
                    max_depth,
                    min_samples_split,
                    min_samples_leaf: 1,
                });
            }
        }
    }

    let scored: Vec<(TrainingParams, f64)> = combos
        .into_par_iter()
        .map(|params| -> PipelineResult<(TrainingParams, f64)> {
            let (mean, _) = cross_validate(x, y, n_classes, params, GRID_CV_FOLDS, seed)?;
            Ok((params, mean))
        })
        .collect::<PipelineResult<_>>()?;

    let mut best = scored[0];
    for candidate in &scored[1..] {
        if candidate.1 > best.1 {
            best = *candidate;
        }
    }
    debug!(params = ?best.0, score = format!("{:.3}", best.1), "grid search winner");
    Ok(best.0)
}
