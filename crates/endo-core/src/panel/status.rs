use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::CLASS_COUNT;
use crate::errors::PipelineError;

/// The four-level hormonal status label.
///
/// Ordered by severity: `Normal < Mild < Moderate < Severe`. The derived
/// `Ord` follows declaration order, and the canonical integer encoding used
/// by the classifier is the same order (0..=3). Serialized names match the
/// strings the surrounding service stores and renders.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum StatusLabel {
    Normal,
    #[serde(rename = "Mild Imbalance")]
    Mild,
    #[serde(rename = "Moderate Imbalance")]
    Moderate,
    #[serde(rename = "Severe Imbalance")]
    Severe,
}

impl StatusLabel {
    /// Canonical class ordering: index here is the classifier's class index.
    pub const ALL: [StatusLabel; CLASS_COUNT] = [
        StatusLabel::Normal,
        StatusLabel::Mild,
        StatusLabel::Moderate,
        StatusLabel::Severe,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusLabel::Normal => "Normal",
            StatusLabel::Mild => "Mild Imbalance",
            StatusLabel::Moderate => "Moderate Imbalance",
            StatusLabel::Severe => "Severe Imbalance",
        }
    }

    /// Integer class index in the canonical ordering.
    pub fn class_index(self) -> usize {
        self as usize
    }

    pub fn from_class_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusLabel {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Normal" => Ok(StatusLabel::Normal),
            "Mild Imbalance" => Ok(StatusLabel::Mild),
            "Moderate Imbalance" => Ok(StatusLabel::Moderate),
            "Severe Imbalance" => Ok(StatusLabel::Severe),
            other => Err(PipelineError::InvalidParameter {
                name: "status",
                reason: format!("unknown status label {other:?}"),
            }),
        }
    }
}
