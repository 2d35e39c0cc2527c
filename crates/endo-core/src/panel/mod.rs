//! Saliva panel types: hormones, demographic context, and status labels.

mod condition;
mod context;
mod reading;
mod status;

pub use condition::HealthCondition;
pub use context::{Gender, Hormone, TimeOfDay};
pub use reading::{HormoneReading, Subject};
pub use status::StatusLabel;
