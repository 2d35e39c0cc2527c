//! Shape and content guarantees of the structured prediction result.

use chrono::NaiveDate;
use endo_core::panel::{Gender, Hormone, HormoneReading, StatusLabel, Subject, TimeOfDay};
use endo_model::{train, TrainedArtifact};
use endo_predict::PredictionEngine;
use endo_synth::{generate, GeneratorConfig};

fn trained_engine() -> PredictionEngine {
    let dataset = generate(&GeneratorConfig {
        samples: 400,
        seed: 11,
        anchor_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
    })
    .unwrap();
    let (artifact, _) = train(&dataset, false, 11).unwrap();
    PredictionEngine::from_artifact(artifact)
}

fn predict(
    engine: &PredictionEngine,
    age: u32,
    gender: Gender,
    cortisol: f64,
    estrogen: f64,
    testosterone: f64,
    time_of_day: TimeOfDay,
) -> endo_core::models::PredictionResult {
    engine
        .predict(
            &Subject { age, gender },
            &HormoneReading {
                cortisol,
                estrogen,
                testosterone,
                time_of_day,
            },
        )
        .unwrap()
}

#[test]
fn probabilities_cover_all_classes_and_sum_to_one_hundred() {
    let engine = trained_engine();
    let result = predict(&engine, 35, Gender::Male, 5.0, 3.0, 100.0, TimeOfDay::Morning);

    assert_eq!(result.probabilities.len(), StatusLabel::ALL.len());
    let total: f64 = result.probabilities.values().sum();
    assert!((total - 100.0).abs() < 0.5, "probabilities sum to {total}");

    let max = result
        .probabilities
        .values()
        .copied()
        .fold(0.0_f64, f64::max);
    assert!((result.confidence - max).abs() < f64::EPSILON);
}

#[test]
fn clear_profiles_classify_as_expected() {
    let engine = trained_engine();

    let healthy = predict(&engine, 35, Gender::Male, 5.0, 3.0, 100.0, TimeOfDay::Morning);
    assert_eq!(healthy.status, StatusLabel::Normal);

    // Every hormone far outside its critical band.
    let severe = predict(&engine, 35, Gender::Male, 20.0, 15.0, 5.0, TimeOfDay::Morning);
    assert!(severe.status > StatusLabel::Normal, "got {:?}", severe.status);
}

#[test]
fn analysis_covers_all_three_hormones_with_notes_on_deviations() {
    let engine = trained_engine();
    let result = predict(&engine, 35, Gender::Male, 12.5, 2.0, 40.0, TimeOfDay::Morning);

    assert_eq!(result.hormone_analysis.len(), 3);
    let cortisol = &result.hormone_analysis[&Hormone::Cortisol];
    assert!(cortisol.note.is_some(), "out-of-band cortisol carries a note");
    assert_eq!(result.hormone_analysis[&Hormone::Estrogen].note, None);
}

#[test]
fn insights_urgency_matches_the_predicted_status() {
    let engine = trained_engine();
    let result = predict(&engine, 35, Gender::Male, 5.0, 3.0, 100.0, TimeOfDay::Morning);

    let expected_urgency = match result.status {
        StatusLabel::Normal => "low",
        StatusLabel::Mild => "moderate",
        StatusLabel::Moderate => "high",
        StatusLabel::Severe => "urgent",
    };
    assert_eq!(result.insights.urgency, expected_urgency);
    assert!(!result.insights.recommendations.is_empty());
}

#[test]
fn artifact_with_fewer_features_rejects_a_full_reading() {
    let engine = trained_engine();

    // Rebuild the bundle with the last feature column removed, as if it had
    // been produced by an older pipeline revision.
    let mut value = serde_json::to_value(&*engine.artifact()).unwrap();
    value["feature_names"].as_array_mut().unwrap().pop();
    value["scaler"]["means"].as_array_mut().unwrap().pop();
    value["scaler"]["stds"].as_array_mut().unwrap().pop();
    let narrow: TrainedArtifact = serde_json::from_value(value).unwrap();

    let err = PredictionEngine::from_artifact(narrow)
        .predict(
            &Subject {
                age: 35,
                gender: Gender::Male,
            },
            &HormoneReading {
                cortisol: 5.0,
                estrogen: 3.0,
                testosterone: 100.0,
                time_of_day: TimeOfDay::Morning,
            },
        )
        .unwrap_err();
    assert!(
        matches!(
            err,
            endo_core::errors::PipelineError::FeatureShapeMismatch { expected: 5, actual: 6 }
        ),
        "got {err}"
    );
}
