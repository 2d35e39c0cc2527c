//! Fixed-order feature encoding shared by training and inference.
//!
//! The order and cardinality here are part of the persisted artifact
//! contract: a mismatch between this encoding and the artifact's scaler is
//! a correctness bug and surfaces as `FeatureShapeMismatch`.

use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COUNT;
use crate::panel::{HormoneReading, Subject};

/// Feature names in encoding order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "cortisol",
    "estrogen",
    "testosterone",
    "gender_encoded",
    "time_encoded",
];

/// Numeric encoding of one subject + reading pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Encode in the canonical order:
    /// `[age, cortisol, estrogen, testosterone, gender_encoded, time_encoded]`.
    pub fn encode(subject: &Subject, reading: &HormoneReading) -> Self {
        Self([
            f64::from(subject.age),
            reading.cortisol,
            reading.estrogen,
            reading.testosterone,
            subject.gender.encoded(),
            reading.time_of_day.encoded(),
        ])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<[f64; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }
}
