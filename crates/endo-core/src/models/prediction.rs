use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::panel::{Hormone, StatusLabel};

/// Low/Normal/High assessment for a single hormone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelStatus {
    Low,
    Normal,
    High,
}

/// Per-hormone breakdown from the deterministic reference model. Always
/// explainable, presented alongside the classifier's prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HormoneAssessment {
    pub status: LevelStatus,
    /// The raw measured level.
    pub level: f64,
    /// Contextual note, where the reference model has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Recommendation bundle keyed by the final status label. Static lookup,
/// never synthesized from the numeric values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub title: String,
    pub description: String,
    pub recommendations: Vec<String>,
    /// Severity color tag for the rendering layer: success/warning/orange/danger.
    pub color: String,
    /// Urgency tag: low/moderate/high/urgent.
    pub urgency: String,
}

/// The structured result handed back to the surrounding service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub status: StatusLabel,
    /// Arg-max class probability rescaled to 0–100, one decimal place.
    pub confidence: f64,
    /// Per-class probabilities as percentages, summing to 100 within rounding.
    pub probabilities: BTreeMap<StatusLabel, f64>,
    pub hormone_analysis: BTreeMap<Hormone, HormoneAssessment>,
    pub insights: Insights,
}
