//! Cold-start behavior: prediction with no artifact on disk must self-train
//! and serve a well-formed result rather than fail.

use endo_core::config::PipelineConfig;
use endo_core::errors::PipelineError;
use endo_core::panel::{Gender, HormoneReading, Subject, TimeOfDay};
use endo_predict::PredictionEngine;

fn test_config(dir: &std::path::Path) -> PipelineConfig {
    let mut config = PipelineConfig::with_data_dir(dir);
    // Keep the self-training run small and skip the grid search.
    config.training_samples = 250;
    config.optimize = false;
    config
}

fn reading() -> (Subject, HormoneReading) {
    (
        Subject {
            age: 35,
            gender: Gender::Male,
        },
        HormoneReading {
            cortisol: 5.0,
            estrogen: 3.0,
            testosterone: 100.0,
            time_of_day: TimeOfDay::Morning,
        },
    )
}

#[test]
fn first_call_without_artifact_trains_and_serves() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    assert!(!config.artifact_path.exists());

    let engine = PredictionEngine::load_or_train(&config).unwrap();

    // The run left both the artifact bundle and the dataset export behind.
    assert!(config.artifact_path.exists());
    assert!(config.dataset_path.exists());

    let (subject, reading) = reading();
    let result = engine.predict(&subject, &reading).unwrap();
    assert!((0.0..=100.0).contains(&result.confidence));
    assert_eq!(result.hormone_analysis.len(), 3);
}

#[test]
fn second_startup_reuses_the_persisted_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());

    let first = PredictionEngine::load_or_train(&config).unwrap();
    let second = PredictionEngine::load_or_train(&config).unwrap();

    assert_eq!(*first.artifact(), *second.artifact());
}

#[test]
fn corrupted_artifact_fails_instead_of_retraining() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(&config.artifact_path, "not json at all").unwrap();

    let err = PredictionEngine::load_or_train(&config).unwrap_err();
    assert!(matches!(err, PipelineError::ArtifactCorrupted { .. }), "got {err}");
}
