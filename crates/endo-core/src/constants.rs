/// Pipeline version, stamped into persisted artifacts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of features in the encoded vector. Training and inference must agree.
pub const FEATURE_COUNT: usize = 6;

/// Number of status classes.
pub const CLASS_COUNT: usize = 4;

/// Floor applied to every synthetic hormone value. No zero or negative readings.
pub const MIN_HORMONE_VALUE: f64 = 0.1;

/// Default number of synthetic samples for training (including cold start).
pub const DEFAULT_TRAINING_SAMPLES: usize = 2000;

/// Default RNG seed for dataset generation and model fitting.
pub const DEFAULT_SEED: u64 = 42;

/// Smallest per-class count for which a stratified split is attempted.
pub const MIN_STRATIFY_CLASS_COUNT: usize = 5;

/// Upper bound on cross-validation folds.
pub const MAX_CV_FOLDS: usize = 5;

/// Held-out fraction for the train/test split.
pub const TEST_FRACTION: f64 = 0.2;
