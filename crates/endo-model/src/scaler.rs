//! Per-feature standardization (zero mean, unit variance).

use endo_core::errors::{PipelineError, PipelineResult};
use endo_core::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// Fitted standardization statistics. Part of the persisted artifact: the
/// classifier's inputs are meaningless without exactly these means and
/// spreads in exactly this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    means: Vec<f64>,
    stds: Vec<f64>,
}

impl StandardScaler {
    /// Fit on training rows only. Statistics computed over held-out data
    /// would leak into evaluation.
    pub fn fit(rows: &[FeatureVector]) -> PipelineResult<Self> {
        let first = rows.first().ok_or(PipelineError::EmptyDataset)?;
        let width = first.as_slice().len();
        let n = rows.len() as f64;

        let mut means = vec![0.0; width];
        for row in rows {
            for (m, v) in means.iter_mut().zip(row.as_slice()) {
                *m += v;
            }
        }
        for m in &mut means {
            *m /= n;
        }

        let mut stds = vec![0.0; width];
        for row in rows {
            for ((s, v), m) in stds.iter_mut().zip(row.as_slice()).zip(&means) {
                *s += (v - m).powi(2);
            }
        }
        for s in &mut stds {
            *s = (*s / n).sqrt();
            // A constant feature scales by 1 rather than dividing by zero.
            if *s == 0.0 {
                *s = 1.0;
            }
        }

        Ok(Self { means, stds })
    }

    /// Number of features this scaler was fitted on.
    pub fn feature_count(&self) -> usize {
        self.means.len()
    }

    /// Standardize one row. A width mismatch means the caller's encoding
    /// and this artifact disagree, which is fatal for the call.
    pub fn transform(&self, row: &[f64]) -> PipelineResult<Vec<f64>> {
        if row.len() != self.means.len() {
            return Err(PipelineError::FeatureShapeMismatch {
                expected: self.means.len(),
                actual: row.len(),
            });
        }
        Ok(row
            .iter()
            .zip(&self.means)
            .zip(&self.stds)
            .map(|((v, m), s)| (v - m) / s)
            .collect())
    }

    /// Standardize a batch of encoded rows.
    pub fn transform_all(&self, rows: &[FeatureVector]) -> PipelineResult<Vec<Vec<f64>>> {
        rows.iter().map(|r| self.transform(r.as_slice())).collect()
    }
}
