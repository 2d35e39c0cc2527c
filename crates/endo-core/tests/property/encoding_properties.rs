use endo_core::constants::{CLASS_COUNT, FEATURE_COUNT};
use endo_core::features::FeatureVector;
use endo_core::panel::{Gender, HormoneReading, StatusLabel, Subject, TimeOfDay};
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
    fn encoding_follows_the_declared_order(
        age in 18u32..=70,
        cortisol in 0.1f64..30.0,
        estrogen in 0.1f64..20.0,
        testosterone in 0.1f64..400.0,
        gender in gender_strategy(),
        time in time_strategy(),
    ) {
        let fv = FeatureVector::encode(
            &Subject { age, gender },
            &HormoneReading {
                cortisol,
                estrogen,
                testosterone,
                time_of_day: time,
            },
        );
        prop_assert_eq!(fv.as_slice().len(), FEATURE_COUNT);
        prop_assert_eq!(
            fv.as_slice(),
            &[
                f64::from(age),
                cortisol,
                estrogen,
                testosterone,
                gender.encoded(),
                time.encoded(),
            ]
        );
    }

    #[test]
    fn raw_array_conversion_is_lossless(values in prop::array::uniform6(-1e6f64..1e6)) {
        let vector = FeatureVector::from(values);
        prop_assert_eq!(vector.as_slice(), &values);
    }

    #[test]
    fn class_index_round_trips_within_bounds(index in 0usize..32) {
        match StatusLabel::from_class_index(index) {
            Some(label) => {
                prop_assert!(index < CLASS_COUNT);
                prop_assert_eq!(label.class_index(), index);
            }
            None => prop_assert!(index >= CLASS_COUNT),
        }
    }

    #[test]
    fn status_serde_round_trips(index in 0usize..CLASS_COUNT) {
        let label = StatusLabel::ALL[index];
        let json = serde_json::to_string(&label).unwrap();
        let parsed: StatusLabel = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, label);
    }
}
