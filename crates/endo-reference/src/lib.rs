//! # endo-reference
//!
//! The deterministic reference model: context-aware saliva reference bands,
//! the integer severity score that maps a panel to one of four status
//! labels, the per-hormone Low/Normal/High breakdown, and the static
//! recommendation bundles.
//!
//! Used twice by the pipeline: as ground truth when labeling synthetic
//! training data, and as the always-explainable cross-check presented next
//! to the classifier's prediction.

pub mod analysis;
pub mod bands;
pub mod insights;
pub mod scoring;

pub use analysis::analyze;
pub use insights::for_status;
pub use scoring::{score, severity_score};
