use endo_core::features::FeatureVector;
use endo_core::models::TrainingParams;
use endo_model::{RandomForest, StandardScaler};
use proptest::prelude::*;

fn rows_strategy() -> impl Strategy<Value = Vec<[f64; 6]>> {
    prop::collection::vec(
        (
            18.0f64..70.0,
            0.1f64..15.0,
            0.1f64..12.0,
            1.0f64..250.0,
            0.0f64..=1.0,
            0.0f64..=2.0,
        )
            .prop_map(|(age, c, e, t, g, d)| [age, c, e, t, g, d]),
        10..40,
    )
}

/// A deterministic three-class rule over two columns, so fitted forests see
/// learnable structure regardless of the drawn rows.
fn label_rule(row: &[f64; 6]) -> usize {
    usize::from(row[1] > 7.5) + usize::from(row[3] > 125.0)
}

fn small_params() -> TrainingParams {
    TrainingParams {
        n_estimators: 8,
        max_depth: 4,
        min_samples_split: 2,
        min_samples_leaf: 1,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(12))]

    #[test]
    fn forest_probabilities_form_a_simplex(rows in rows_strategy(), seed in any::<u64>()) {
        let x: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        let y: Vec<usize> = rows.iter().map(label_rule).collect();
        let forest = RandomForest::fit(&x, &y, 3, small_params(), seed).unwrap();

        for row in &x {
            let proba = forest.predict_proba(row);
            prop_assert_eq!(proba.len(), 3);
            let sum: f64 = proba.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9, "sum {}", sum);
            prop_assert!(proba.iter().all(|p| (0.0..=1.0).contains(p)));
            prop_assert!(forest.predict(row) < 3);
        }
    }

    #[test]
    fn fitting_is_deterministic_for_any_seed(rows in rows_strategy(), seed in any::<u64>()) {
        let x: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
        let y: Vec<usize> = rows.iter().map(label_rule).collect();
        let a = RandomForest::fit(&x, &y, 3, small_params(), seed).unwrap();
        let b = RandomForest::fit(&x, &y, 3, small_params(), seed).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn scaled_training_columns_are_centered_and_finite(rows in rows_strategy()) {
        let encoded: Vec<FeatureVector> =
            rows.iter().map(|r| FeatureVector::from(*r)).collect();
        let scaler = StandardScaler::fit(&encoded).unwrap();
        let transformed = scaler.transform_all(&encoded).unwrap();

        for col in 0..6 {
            let mean: f64 =
                transformed.iter().map(|r| r[col]).sum::<f64>() / transformed.len() as f64;
            prop_assert!(mean.abs() < 1e-6, "column {} mean {}", col, mean);
            prop_assert!(transformed.iter().all(|r| r[col].is_finite()));
        }
    }
}
