//! Per-hormone Low/Normal/High breakdown with contextual notes.
//!
//! Independent of the classifier: this is the explainable half of every
//! prediction result. Thresholds mirror the band tables but the narrative
//! notes follow the original reporting conventions (no low flag for
//! cortisol outside the morning, for instance).

use std::collections::BTreeMap;

use endo_core::models::{HormoneAssessment, LevelStatus};
use endo_core::panel::{Gender, Hormone, TimeOfDay};

/// Assess each hormone of a panel against its contextual reference range.
pub fn analyze(
    cortisol: f64,
    estrogen: f64,
    testosterone: f64,
    gender: Gender,
    time_of_day: TimeOfDay,
) -> BTreeMap<Hormone, HormoneAssessment> {
    let mut analysis = BTreeMap::new();
    analysis.insert(Hormone::Cortisol, assess_cortisol(cortisol, time_of_day));
    analysis.insert(Hormone::Estrogen, assess_estrogen(estrogen, gender));
    analysis.insert(
        Hormone::Testosterone,
        assess_testosterone(testosterone, gender),
    );
    analysis
}

fn assess_cortisol(level: f64, time_of_day: TimeOfDay) -> HormoneAssessment {
    match time_of_day {
        TimeOfDay::Morning => {
            if level < 3.0 {
                assessment(LevelStatus::Low, level, Some("Below morning reference"))
            } else if level > 10.0 {
                assessment(LevelStatus::High, level, Some("Elevated stress response"))
            } else {
                assessment(LevelStatus::Normal, level, Some("Within morning range"))
            }
        }
        TimeOfDay::Afternoon | TimeOfDay::Evening => {
            let threshold_high = if time_of_day == TimeOfDay::Afternoon {
                4.0
            } else {
                2.0
            };
            if level > threshold_high {
                let note = format!("Elevated for {}", time_of_day.as_str().to_lowercase());
                HormoneAssessment {
                    status: LevelStatus::High,
                    level,
                    note: Some(note),
                }
            } else {
                assessment(LevelStatus::Normal, level, Some("Appropriate diurnal level"))
            }
        }
    }
}

fn assess_estrogen(level: f64, gender: Gender) -> HormoneAssessment {
    let high = match gender {
        Gender::Male => 4.0,
        Gender::Female => 8.0,
    };
    if level < 1.0 {
        assessment(LevelStatus::Low, level, None)
    } else if level > high {
        assessment(LevelStatus::High, level, None)
    } else {
        assessment(LevelStatus::Normal, level, None)
    }
}

fn assess_testosterone(level: f64, gender: Gender) -> HormoneAssessment {
    match gender {
        Gender::Male => {
            if level < 50.0 {
                assessment(LevelStatus::Low, level, Some("Below male reference"))
            } else if level > 200.0 {
                assessment(LevelStatus::High, level, None)
            } else {
                assessment(LevelStatus::Normal, level, None)
            }
        }
        Gender::Female => {
            if level < 10.0 {
                assessment(LevelStatus::Low, level, None)
            } else if level > 55.0 {
                assessment(LevelStatus::High, level, Some("Elevated for female"))
            } else {
                assessment(LevelStatus::Normal, level, None)
            }
        }
    }
}

fn assessment(status: LevelStatus, level: f64, note: Option<&str>) -> HormoneAssessment {
    HormoneAssessment {
        status,
        level,
        note: note.map(str::to_string),
    }
}
