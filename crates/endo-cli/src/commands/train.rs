//! Generate a dataset, train the classifier, and sanity-check the result.

use anyhow::Result;
use endo_core::config::PipelineConfig;
use endo_core::panel::{Gender, HormoneReading, Subject, TimeOfDay};
use endo_predict::PredictionEngine;
use endo_synth::GeneratorConfig;
use tracing::info;

pub fn run(config: &PipelineConfig) -> Result<()> {
    info!(samples = config.training_samples, seed = config.seed, "generating dataset");
    let dataset = endo_synth::generate(&GeneratorConfig::new(
        config.training_samples,
        config.seed,
    ))?;
    dataset.write_csv(&config.dataset_path)?;

    println!("{}", dataset.summary());
    println!();

    let (artifact, report) = endo_model::train(&dataset, config.optimize, config.seed)?;
    artifact.save(&config.artifact_path)?;
    info!(path = %config.artifact_path.display(), "artifact saved");

    println!("{report}");
    println!();

    // Spot-check the trained model against three known profiles.
    let engine = PredictionEngine::from_artifact(artifact);
    let checks = [
        ("healthy male, morning", 35, Gender::Male, 5.0, 3.0, 100.0, TimeOfDay::Morning),
        ("stressed male, morning", 35, Gender::Male, 12.0, 2.0, 40.0, TimeOfDay::Morning),
        ("healthy female, afternoon", 35, Gender::Female, 3.0, 6.0, 35.0, TimeOfDay::Afternoon),
    ];
    println!("sample predictions:");
    for (label, age, gender, cortisol, estrogen, testosterone, time_of_day) in checks {
        let result = engine.predict(
            &Subject { age, gender },
            &HormoneReading {
                cortisol,
                estrogen,
                testosterone,
                time_of_day,
            },
        )?;
        println!(
            "  {label:<28} -> {} ({:.1}% confidence)",
            result.status, result.confidence
        );
    }

    Ok(())
}
