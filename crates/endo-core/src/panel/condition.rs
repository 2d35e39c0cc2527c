use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;

/// Health-condition archetype used to inject correlated hormone imbalances
/// into synthetic training data.
///
/// Generator-only: it shapes the sampled distributions but is never exposed
/// to the classifier as a feature. Serialized names match the dataset CSV
/// produced by earlier versions of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthCondition {
    Healthy,
    Stressed,
    #[serde(rename = "PCOS")]
    Pcos,
    Thyroid,
    Adrenal,
    Menopause,
    #[serde(rename = "Low_T")]
    LowT,
}

impl HealthCondition {
    pub const ALL: [HealthCondition; 7] = [
        HealthCondition::Healthy,
        HealthCondition::Stressed,
        HealthCondition::Pcos,
        HealthCondition::Thyroid,
        HealthCondition::Adrenal,
        HealthCondition::Menopause,
        HealthCondition::LowT,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HealthCondition::Healthy => "Healthy",
            HealthCondition::Stressed => "Stressed",
            HealthCondition::Pcos => "PCOS",
            HealthCondition::Thyroid => "Thyroid",
            HealthCondition::Adrenal => "Adrenal",
            HealthCondition::Menopause => "Menopause",
            HealthCondition::LowT => "Low_T",
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthCondition {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| PipelineError::InvalidParameter {
                name: "health_condition",
                reason: format!("unknown condition {s:?}"),
            })
    }
}
