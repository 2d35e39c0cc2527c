//! Result models shared across the pipeline crates.

mod prediction;
mod training;

pub use prediction::{HormoneAssessment, Insights, LevelStatus, PredictionResult};
pub use training::{TrainingParams, TrainingReport};
