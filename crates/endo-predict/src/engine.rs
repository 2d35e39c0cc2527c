//! PredictionEngine — encodes, scales, classifies, and assembles the
//! structured result together with the reference-model breakdown.

use std::collections::BTreeMap;
use std::sync::Arc;

use endo_core::config::PipelineConfig;
use endo_core::errors::{PipelineError, PipelineResult};
use endo_core::features::FeatureVector;
use endo_core::models::PredictionResult;
use endo_core::panel::{HormoneReading, Subject};
use endo_model::TrainedArtifact;
use endo_synth::GeneratorConfig;
use tracing::{info, warn};

/// Read-only prediction handle over an immutable artifact.
///
/// Cloning shares the artifact; any number of concurrent predictions may go
/// through clones without coordination. Retraining builds a complete new
/// artifact and a new engine — the bundle behind a live engine is never
/// mutated in place.
#[derive(Debug, Clone)]
pub struct PredictionEngine {
    artifact: Arc<TrainedArtifact>,
}

impl PredictionEngine {
    pub fn from_artifact(artifact: TrainedArtifact) -> Self {
        Self {
            artifact: Arc::new(artifact),
        }
    }

    /// Shared handle to the loaded bundle.
    pub fn artifact(&self) -> Arc<TrainedArtifact> {
        Arc::clone(&self.artifact)
    }

    /// Load the artifact at the configured path, or self-train on synthetic
    /// data when none exists yet (the cold-start path).
    ///
    /// A present-but-corrupted artifact is a hard error: silently retraining
    /// over it would mask deployment problems.
    pub fn load_or_train(config: &PipelineConfig) -> PipelineResult<Self> {
        if TrainedArtifact::exists(&config.artifact_path) {
            let artifact = TrainedArtifact::load(&config.artifact_path)?;
            info!(
                path = %config.artifact_path.display(),
                version = %artifact.version,
                "artifact loaded"
            );
            return Ok(Self::from_artifact(artifact));
        }

        warn!(
            path = %config.artifact_path.display(),
            samples = config.training_samples,
            "no trained artifact found; training from synthetic data"
        );
        let dataset = endo_synth::generate(&GeneratorConfig::new(
            config.training_samples,
            config.seed,
        ))?;
        dataset.write_csv(&config.dataset_path)?;
        let (artifact, report) = endo_model::train(&dataset, config.optimize, config.seed)?;
        artifact.save(&config.artifact_path)?;
        info!(
            test_accuracy = format!("{:.3}", report.test_accuracy),
            "cold-start training complete"
        );
        Ok(Self::from_artifact(artifact))
    }

    /// Predict the hormonal status for one reading in context.
    ///
    /// Pure function of the inputs and the artifact. The reference-model
    /// breakdown runs against the raw values independently of the
    /// classifier, so the result always carries an explainable half.
    pub fn predict(
        &self,
        subject: &Subject,
        reading: &HormoneReading,
    ) -> PipelineResult<PredictionResult> {
        let features = FeatureVector::encode(subject, reading);
        let scaled = self.artifact.scaler.transform(features.as_slice())?;
        let proba = self.artifact.forest.predict_proba(&scaled);

        let class_index = self.artifact.forest.predict(&scaled);
        let status = *self.artifact.labels.get(class_index).ok_or(
            PipelineError::ClassIndexOutOfRange {
                index: class_index,
                len: self.artifact.labels.len(),
            },
        )?;

        let mut probabilities = BTreeMap::new();
        for (label, p) in self.artifact.labels.iter().zip(&proba) {
            probabilities.insert(*label, round1(p * 100.0));
        }
        let confidence = round1(
            proba
                .iter()
                .copied()
                .fold(0.0_f64, f64::max)
                * 100.0,
        );

        let hormone_analysis = endo_reference::analyze(
            reading.cortisol,
            reading.estrogen,
            reading.testosterone,
            subject.gender,
            reading.time_of_day,
        );
        let insights = endo_reference::for_status(status);

        Ok(PredictionResult {
            status,
            confidence,
            probabilities,
            hormone_analysis,
            insights,
        })
    }
}

/// Round to one decimal place, matching the service's display precision.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
