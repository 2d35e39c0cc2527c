//! # endo-predict
//!
//! Serves predictions from a loaded artifact bundle.
//!
//! The engine is obtained once at startup and threaded through call sites
//! as a cheap, clonable read-only handle; a retrain produces a whole new
//! engine rather than mutating the live one.

pub mod engine;

pub use engine::PredictionEngine;
