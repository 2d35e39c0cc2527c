//! # endo-core
//!
//! Foundation crate for the endo hormone-status pipeline.
//! Defines panel types, feature encoding, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod features;
pub mod models;
pub mod panel;

// Re-export the most commonly used types at the crate root.
pub use config::PipelineConfig;
pub use errors::{PipelineError, PipelineResult};
pub use features::FeatureVector;
pub use models::{HormoneAssessment, Insights, LevelStatus, PredictionResult, TrainingReport};
pub use panel::{
    Gender, HealthCondition, Hormone, HormoneReading, StatusLabel, Subject, TimeOfDay,
};
