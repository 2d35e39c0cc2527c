//! Predict hormonal status for a single saliva reading.

use anyhow::Result;
use endo_core::config::PipelineConfig;
use endo_core::models::LevelStatus;
use endo_core::panel::{Gender, HormoneReading, Subject, TimeOfDay};
use endo_predict::PredictionEngine;

#[allow(clippy::too_many_arguments)]
pub fn run(
    config: &PipelineConfig,
    cortisol: f64,
    estrogen: f64,
    testosterone: f64,
    age: u32,
    gender: &str,
    time: &str,
    json: bool,
) -> Result<()> {
    let gender: Gender = gender.parse()?;
    let time_of_day = TimeOfDay::parse_lenient(time);

    let engine = PredictionEngine::load_or_train(config)?;
    let result = engine.predict(
        &Subject { age, gender },
        &HormoneReading {
            cortisol,
            estrogen,
            testosterone,
            time_of_day,
        },
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("status:     {}", result.status);
    println!("confidence: {:.1}%", result.confidence);
    println!();
    println!("class probabilities:");
    for (label, p) in &result.probabilities {
        println!("  {:<20} {p:>5.1}%", label.to_string());
    }
    println!();
    println!("hormone breakdown:");
    for (hormone, assessment) in &result.hormone_analysis {
        let status = match assessment.status {
            LevelStatus::Low => "Low",
            LevelStatus::Normal => "Normal",
            LevelStatus::High => "High",
        };
        let note = assessment
            .note
            .as_deref()
            .map(|n| format!(" ({n})"))
            .unwrap_or_default();
        println!(
            "  {:<13} {:>7.2} {:<6} {status}{note}",
            hormone.to_string(),
            assessment.level,
            hormone.unit()
        );
    }
    println!();
    println!("{} [{}]", result.insights.title, result.insights.urgency);
    println!("{}", result.insights.description);
    for rec in &result.insights.recommendations {
        println!("  - {rec}");
    }

    Ok(())
}
