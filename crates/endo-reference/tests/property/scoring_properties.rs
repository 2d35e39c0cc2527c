use endo_core::panel::{Gender, StatusLabel, TimeOfDay};
use endo_reference::{score, severity_score};
use proptest::prelude::*;

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

fn time_strategy() -> impl Strategy<Value = TimeOfDay> {
    prop_oneof![
        Just(TimeOfDay::Morning),
        Just(TimeOfDay::Afternoon),
        Just(TimeOfDay::Evening),
    ]
}

proptest! {
    #[test]
    fn score_is_deterministic(
        c in 0.01f64..30.0,
        e in 0.01f64..20.0,
        t in 0.1f64..400.0,
        gender in gender_strategy(),
        time in time_strategy(),
    ) {
        prop_assert_eq!(score(c, e, t, gender, time), score(c, e, t, gender, time));
    }

    #[test]
    fn label_is_always_canonical(
        c in 0.01f64..50.0,
        e in 0.01f64..50.0,
        t in 0.01f64..500.0,
        gender in gender_strategy(),
        time in time_strategy(),
    ) {
        let label = score(c, e, t, gender, time);
        prop_assert!(StatusLabel::ALL.contains(&label));
    }

    #[test]
    fn pushing_cortisol_higher_never_lowers_severity(
        c in 10.01f64..30.0,
        delta in 0.0f64..20.0,
        e in 1.0f64..4.0,
        t in 50.0f64..200.0,
        time in time_strategy(),
    ) {
        // c starts above every normal upper bound; moving further up can
        // only keep or raise the score.
        let before = severity_score(c, e, t, Gender::Male, time);
        let after = severity_score(c + delta, e, t, Gender::Male, time);
        prop_assert!(after >= before);
    }

    #[test]
    fn pushing_testosterone_lower_never_lowers_severity(
        t in 0.1f64..49.9,
        shrink in 0.0f64..1.0,
        c in 4.0f64..10.0,
        e in 1.0f64..4.0,
    ) {
        // t starts below the male normal lower bound of 50.
        let before = severity_score(c, e, t, Gender::Male, TimeOfDay::Morning);
        let after = severity_score(c, e, t * (1.0 - shrink), Gender::Male, TimeOfDay::Morning);
        prop_assert!(after >= before);
    }

    #[test]
    fn pushing_estrogen_lower_never_lowers_severity(
        e in 0.001f64..0.999,
        shrink in 0.0f64..1.0,
        c in 4.0f64..10.0,
        t in 50.0f64..200.0,
        gender in gender_strategy(),
    ) {
        let before = severity_score(c, e, t, gender, TimeOfDay::Morning);
        let after = severity_score(c, e * (1.0 - shrink), t, gender, TimeOfDay::Morning);
        prop_assert!(after >= before);
    }

    #[test]
    fn label_matches_score_thresholds(
        c in 0.01f64..30.0,
        e in 0.01f64..20.0,
        t in 0.1f64..400.0,
        gender in gender_strategy(),
        time in time_strategy(),
    ) {
        let total = severity_score(c, e, t, gender, time);
        let label = score(c, e, t, gender, time);
        let expected = match total {
            0 => StatusLabel::Normal,
            1..=2 => StatusLabel::Mild,
            3..=4 => StatusLabel::Moderate,
            _ => StatusLabel::Severe,
        };
        prop_assert_eq!(label, expected);
    }
}
