use serde::{Deserialize, Serialize};

use super::context::TimeOfDay;
use super::Gender;

/// One saliva panel measurement. Values are assumed validated positive by
/// the caller; the pipeline never persists readings itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HormoneReading {
    /// Cortisol in ng/mL.
    pub cortisol: f64,
    /// Estrogen (estradiol) in pg/mL.
    pub estrogen: f64,
    /// Testosterone in pg/mL.
    pub testosterone: f64,
    /// When the sample was taken.
    pub time_of_day: TimeOfDay,
}

/// Demographic context supplied per call alongside a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub age: u32,
    pub gender: Gender,
}
