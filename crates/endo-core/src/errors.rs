/// Pipeline-wide error taxonomy.
///
/// Stratification infeasibility and cross-validation fold degradation are
/// silent policy downgrades, not errors, and have no variant here.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Feature vector length disagrees with what the artifact's scaler
    /// expects. Fatal for the prediction call: a version-skewed artifact
    /// must never silently produce a label.
    #[error("feature vector length {actual} does not match scaler expectation {expected}")]
    FeatureShapeMismatch { expected: usize, actual: usize },

    #[error("artifact at {path} is corrupted: {reason}")]
    ArtifactCorrupted { path: String, reason: String },

    #[error("classifier returned class index {index} outside label ordering of length {len}")]
    ClassIndexOutOfRange { index: usize, len: usize },

    #[error("dataset is empty")]
    EmptyDataset,

    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("dataset line {line}: {reason}")]
    DatasetFormat { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
