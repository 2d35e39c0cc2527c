use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;

/// Subject gender. Drives estrogen/testosterone reference bands and the
/// `gender_encoded` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Feature encoding: Male = 1, Female = 0.
    pub fn encoded(self) -> f64 {
        match self {
            Gender::Male => 1.0,
            Gender::Female => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Male" => Ok(Gender::Male),
            "Female" => Ok(Gender::Female),
            other => Err(PipelineError::InvalidParameter {
                name: "gender",
                reason: format!("expected Male or Female, got {other:?}"),
            }),
        }
    }
}

/// Time of day the saliva sample was taken. Cortisol reference bands follow
/// the diurnal rhythm, so this is both context and a classifier feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub const ALL: [TimeOfDay; 3] = [TimeOfDay::Morning, TimeOfDay::Afternoon, TimeOfDay::Evening];

    /// Feature encoding: Morning = 0, Afternoon = 1, Evening = 2.
    pub fn encoded(self) -> f64 {
        match self {
            TimeOfDay::Morning => 0.0,
            TimeOfDay::Afternoon => 1.0,
            TimeOfDay::Evening => 2.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
        }
    }

    /// Lenient parse for the caller-facing boundary: unrecognised input maps
    /// to `Morning` instead of failing.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(TimeOfDay::Morning)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeOfDay {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Morning" => Ok(TimeOfDay::Morning),
            "Afternoon" => Ok(TimeOfDay::Afternoon),
            "Evening" => Ok(TimeOfDay::Evening),
            other => Err(PipelineError::InvalidParameter {
                name: "time_of_day",
                reason: format!("expected Morning, Afternoon or Evening, got {other:?}"),
            }),
        }
    }
}

/// The three hormones of the saliva panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hormone {
    Cortisol,
    Estrogen,
    Testosterone,
}

impl Hormone {
    pub fn as_str(self) -> &'static str {
        match self {
            Hormone::Cortisol => "cortisol",
            Hormone::Estrogen => "estrogen",
            Hormone::Testosterone => "testosterone",
        }
    }

    /// Measurement unit for display (saliva testing).
    pub fn unit(self) -> &'static str {
        match self {
            Hormone::Cortisol => "ng/mL",
            Hormone::Estrogen => "pg/mL",
            Hormone::Testosterone => "pg/mL",
        }
    }
}

impl fmt::Display for Hormone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
