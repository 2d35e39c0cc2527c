//! # endo-synth
//!
//! Synthetic training data for the hormone-status classifier.
//!
//! Encodes the medical domain knowledge as condition-conditioned samplers:
//! demographic context is drawn from realistic distributions, hormone values
//! are derived per health-condition archetype, proportional measurement
//! noise mimics lab variance, and every sample is labeled by the
//! deterministic reference model. Fully reproducible given a seed.

pub mod dataset;
pub mod generator;
pub mod sampler;

pub use dataset::{Dataset, DatasetSummary, Sample};
pub use generator::{generate, GeneratorConfig};
