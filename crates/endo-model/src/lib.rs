//! # endo-model
//!
//! Trains and persists the hormone-status classifier.
//!
//! The classifier is a random forest of CART trees built in-crate: the
//! feature space is six columns and four classes, small enough that the
//! whole fit/predict path stays transparent and seed-deterministic.
//! Training covers feature scaling, stratified splitting, an optional
//! hyperparameter grid search, held-out and k-fold evaluation, and the
//! atomic persistence of the classifier + scaler + label-order bundle.

pub mod artifact;
pub mod forest;
pub mod scaler;
pub mod split;
pub mod trainer;
pub mod tree;

pub use artifact::TrainedArtifact;
pub use forest::RandomForest;
pub use scaler::StandardScaler;
pub use trainer::train;
