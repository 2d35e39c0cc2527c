use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEED, DEFAULT_TRAINING_SAMPLES};

mod defaults {
    pub const ARTIFACT_FILE: &str = "hormone_model.json";
    pub const DATASET_FILE: &str = "hormone_data.csv";
    pub const DATA_DIR: &str = "data";
}

/// Pipeline configuration.
///
/// Covers the persisted artifact path, the dataset export path, and the
/// parameters of the cold-start training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Where the trained artifact bundle is written and loaded from.
    pub artifact_path: PathBuf,
    /// Where the synthetic dataset CSV is exported.
    pub dataset_path: PathBuf,
    /// Samples generated when training from scratch.
    pub training_samples: usize,
    /// Seed for dataset generation and model fitting.
    pub seed: u64,
    /// Run the hyperparameter grid search when training.
    pub optimize: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::with_data_dir(defaults::DATA_DIR)
    }
}

impl PipelineConfig {
    /// Default configuration rooted at `dir`. Used by tests to redirect all
    /// filesystem traffic into a temp directory.
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            artifact_path: dir.join(defaults::ARTIFACT_FILE),
            dataset_path: dir.join(defaults::DATASET_FILE),
            training_samples: DEFAULT_TRAINING_SAMPLES,
            seed: DEFAULT_SEED,
            optimize: true,
        }
    }
}
