//! The persisted artifact bundle.
//!
//! Classifier, scaler, and label ordering travel as one value: loading any
//! of them independently of the others is how version-skew bugs happen, so
//! there is deliberately no API for partial loads.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use endo_core::constants::VERSION;
use endo_core::errors::{PipelineError, PipelineResult};
use endo_core::features::FEATURE_NAMES;
use endo_core::panel::StatusLabel;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::forest::RandomForest;
use crate::scaler::StandardScaler;

/// A fitted, immutable model bundle. Created by the trainer, loaded
/// read-only by the predictor, shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainedArtifact {
    /// Pipeline version that produced this artifact.
    pub version: String,
    pub created_at: DateTime<Utc>,
    /// Class ordering: the classifier's class index i means `labels[i]`.
    pub labels: Vec<StatusLabel>,
    /// Feature encoding order the scaler and forest were fitted on.
    pub feature_names: Vec<String>,
    pub scaler: StandardScaler,
    pub forest: RandomForest,
}

impl TrainedArtifact {
    pub fn new(forest: RandomForest, scaler: StandardScaler) -> Self {
        Self {
            version: VERSION.to_string(),
            created_at: Utc::now(),
            labels: StatusLabel::ALL.to_vec(),
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            scaler,
            forest,
        }
    }

    /// Persist atomically: serialize to a sibling temp file, then rename
    /// over the target. Readers either see the old bundle or the new one,
    /// never a partial write.
    pub fn save(&self, path: &Path) -> PipelineResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("tmp");
        let json = serde_json::to_string(self)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        info!(path = %path.display(), "artifact saved");
        Ok(())
    }

    /// Load a previously saved bundle. An unreadable or unparsable file is
    /// fatal; there is no fallback model.
    pub fn load(path: &Path) -> PipelineResult<Self> {
        let content = fs::read_to_string(path)?;
        let artifact: Self =
            serde_json::from_str(&content).map_err(|e| PipelineError::ArtifactCorrupted {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        artifact.validate(path)?;
        Ok(artifact)
    }

    pub fn exists(path: &Path) -> bool {
        path.is_file()
    }

    /// Internal consistency: the scaler must cover exactly the named
    /// features and the label ordering must cover every class.
    fn validate(&self, path: &Path) -> PipelineResult<()> {
        if self.scaler.feature_count() != self.feature_names.len() {
            return Err(PipelineError::ArtifactCorrupted {
                path: path.display().to_string(),
                reason: format!(
                    "scaler covers {} features but {} are named",
                    self.scaler.feature_count(),
                    self.feature_names.len()
                ),
            });
        }
        if self.labels.len() != self.forest.n_classes() {
            return Err(PipelineError::ArtifactCorrupted {
                path: path.display().to_string(),
                reason: format!(
                    "label ordering has {} entries for {} classes",
                    self.labels.len(),
                    self.forest.n_classes()
                ),
            });
        }
        Ok(())
    }
}
