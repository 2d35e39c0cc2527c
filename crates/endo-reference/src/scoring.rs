//! The deterministic scoring rule.
//!
//! Accumulates an integer severity score (0–6) across three independent
//! per-hormone band checks, then thresholds it into a status label. The cut
//! points are a fixed policy: recommendation text downstream is keyed by the
//! resulting label, so they must not drift.

use endo_core::panel::{Gender, StatusLabel, TimeOfDay};

use crate::bands;

/// Severity score threshold for `Severe Imbalance`.
const SEVERE_AT: u8 = 5;
/// Severity score threshold for `Moderate Imbalance`.
const MODERATE_AT: u8 = 3;
/// Severity score threshold for `Mild Imbalance`.
const MILD_AT: u8 = 1;

/// Sum of per-hormone severity contributions, 0–6.
pub fn severity_score(
    cortisol: f64,
    estrogen: f64,
    testosterone: f64,
    gender: Gender,
    time_of_day: TimeOfDay,
) -> u8 {
    bands::cortisol(time_of_day).contribution(cortisol)
        + bands::estrogen(gender).contribution(estrogen)
        + bands::testosterone(gender).contribution(testosterone)
}

/// Score a panel into a status label.
///
/// Deterministic and monotonic: pushing any single hormone strictly further
/// outside its normal band never lowers the severity.
pub fn score(
    cortisol: f64,
    estrogen: f64,
    testosterone: f64,
    gender: Gender,
    time_of_day: TimeOfDay,
) -> StatusLabel {
    let total = severity_score(cortisol, estrogen, testosterone, gender, time_of_day);
    if total >= SEVERE_AT {
        StatusLabel::Severe
    } else if total >= MODERATE_AT {
        StatusLabel::Moderate
    } else if total >= MILD_AT {
        StatusLabel::Mild
    } else {
        StatusLabel::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_male_morning_panel_is_normal() {
        // cortisol 5.0 in [4,10], estrogen 3.0 in [1,4], testosterone 100 in [50,200].
        let label = score(5.0, 3.0, 100.0, Gender::Male, TimeOfDay::Morning);
        assert_eq!(severity_score(5.0, 3.0, 100.0, Gender::Male, TimeOfDay::Morning), 0);
        assert_eq!(label, StatusLabel::Normal);
    }

    #[test]
    fn elevated_cortisol_and_low_testosterone_is_not_normal() {
        // cortisol 12.0 is borderline-high for morning (+1), testosterone 40
        // is borderline-low for a male (+1).
        let total = severity_score(12.0, 2.0, 40.0, Gender::Male, TimeOfDay::Morning);
        assert_eq!(total, 2);
        assert_ne!(score(12.0, 2.0, 40.0, Gender::Male, TimeOfDay::Morning), StatusLabel::Normal);
    }

    #[test]
    fn female_afternoon_panel_within_bands_is_normal() {
        // cortisol 3.0 in [1,4], estrogen 6.0 in [1,8], testosterone 35 in [10,55].
        assert_eq!(
            score(3.0, 6.0, 35.0, Gender::Female, TimeOfDay::Afternoon),
            StatusLabel::Normal
        );
    }

    #[test]
    fn all_severe_deviations_reach_severe() {
        let label = score(20.0, 0.1, 1.0, Gender::Male, TimeOfDay::Evening);
        assert_eq!(label, StatusLabel::Severe);
    }

    #[test]
    fn threshold_cut_points() {
        // One borderline deviation -> Mild.
        assert_eq!(score(3.5, 3.0, 100.0, Gender::Male, TimeOfDay::Morning), StatusLabel::Mild);
        // One severe + one borderline -> Moderate (score 3).
        assert_eq!(score(2.0, 3.0, 45.0, Gender::Male, TimeOfDay::Morning), StatusLabel::Moderate);
        // Two severe + one borderline -> Severe (score 5).
        assert_eq!(score(2.0, 0.2, 45.0, Gender::Male, TimeOfDay::Morning), StatusLabel::Severe);
    }

    #[test]
    fn diurnal_context_changes_the_label() {
        // 5.0 ng/mL cortisol is normal in the morning, outside even the
        // critical evening band (+2).
        assert_eq!(score(5.0, 3.0, 100.0, Gender::Male, TimeOfDay::Morning), StatusLabel::Normal);
        assert_eq!(
            severity_score(5.0, 3.0, 100.0, Gender::Male, TimeOfDay::Evening),
            2
        );
        assert_eq!(score(5.0, 3.0, 100.0, Gender::Male, TimeOfDay::Evening), StatusLabel::Mild);
    }

    #[test]
    fn scoring_is_idempotent() {
        let a = score(7.3, 2.2, 88.0, Gender::Male, TimeOfDay::Morning);
        let b = score(7.3, 2.2, 88.0, Gender::Male, TimeOfDay::Morning);
        assert_eq!(a, b);
    }
}
