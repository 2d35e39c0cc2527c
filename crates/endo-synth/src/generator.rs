//! Seeded dataset generation.
//!
//! Everything flows from one `StdRng` seeded explicitly by the caller; there
//! is no hidden global state, so concurrent generation calls are fully
//! independent and a given seed reproduces the same dataset bit for bit
//! (the anchor date being part of the configuration).

use chrono::{Duration, NaiveDate, Utc};
use endo_core::constants::{DEFAULT_SEED, DEFAULT_TRAINING_SAMPLES, MIN_HORMONE_VALUE};
use endo_core::errors::{PipelineError, PipelineResult};
use endo_core::panel::{Gender, HealthCondition, TimeOfDay};
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;
use tracing::{debug, info};

use crate::dataset::{Dataset, Sample};
use crate::sampler;

/// Relative lab-variance fractions per hormone.
const CORTISOL_NOISE: f64 = 0.05;
const ESTROGEN_NOISE: f64 = 0.08;
const TESTOSTERONE_NOISE: f64 = 0.05;

/// Sample dates fall within this many days before the anchor.
const SAMPLE_DATE_WINDOW_DAYS: i64 = 730;

const CONDITION_WEIGHTS: [f64; 7] = [0.45, 0.20, 0.08, 0.07, 0.05, 0.08, 0.07];
const TIME_WEIGHTS: [f64; 3] = [0.5, 0.3, 0.2];

/// Generation parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub samples: usize,
    pub seed: u64,
    /// Most recent possible sample date. Defaults to today; fix it in tests
    /// for bit-identical output.
    pub anchor_date: NaiveDate,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_TRAINING_SAMPLES,
            seed: DEFAULT_SEED,
            anchor_date: Utc::now().date_naive(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(samples: usize, seed: u64) -> Self {
        Self {
            samples,
            seed,
            ..Self::default()
        }
    }
}

/// Generate a labeled synthetic dataset.
///
/// Labels are computed by the reference model from the noised, floored
/// values — exactly the values stored as features — so the classifier is
/// trained on a signal consistent with what it is fed.
pub fn generate(config: &GeneratorConfig) -> PipelineResult<Dataset> {
    if config.samples == 0 {
        return Err(PipelineError::InvalidParameter {
            name: "samples",
            reason: "must be at least 1".to_string(),
        });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let condition_dist = weighted("condition_weights", &CONDITION_WEIGHTS)?;
    let time_dist = weighted("time_weights", &TIME_WEIGHTS)?;
    let age_dist = Normal::<f64>::new(35.0, 12.0).map_err(|e| PipelineError::InvalidParameter {
        name: "age_distribution",
        reason: e.to_string(),
    })?;

    info!(samples = config.samples, seed = config.seed, "generating synthetic dataset");

    let mut samples = Vec::with_capacity(config.samples);
    for _ in 0..config.samples {
        let age = age_dist.sample(&mut rng).clamp(18.0, 70.0) as u32;
        let gender = if rng.gen_bool(0.48) {
            Gender::Male
        } else {
            Gender::Female
        };
        let time_of_day = TimeOfDay::ALL[time_dist.sample(&mut rng)];
        let condition = HealthCondition::ALL[condition_dist.sample(&mut rng)];

        let cortisol = sampler::cortisol(&mut rng, time_of_day, condition, age);
        let estrogen = sampler::estrogen(&mut rng, gender, age, condition);
        let testosterone = sampler::testosterone(&mut rng, gender, age, condition);

        // Noise first, then floor/round, then label: the stored values and
        // the labeling input must be the same numbers.
        let cortisol = quantize(cortisol + noise(&mut rng, cortisol, CORTISOL_NOISE));
        let estrogen = quantize(estrogen + noise(&mut rng, estrogen, ESTROGEN_NOISE));
        let testosterone =
            quantize(testosterone + noise(&mut rng, testosterone, TESTOSTERONE_NOISE));

        let status =
            endo_reference::score(cortisol, estrogen, testosterone, gender, time_of_day);

        let days_back = rng.gen_range(0..=SAMPLE_DATE_WINDOW_DAYS);
        let sample_date = config.anchor_date - Duration::days(days_back);

        samples.push(Sample {
            age,
            gender,
            cortisol,
            estrogen,
            testosterone,
            time_of_day,
            sample_date,
            health_condition: condition,
            status,
        });
    }

    samples.shuffle(&mut rng);

    let dataset = Dataset { samples };
    debug!(
        classes = dataset.class_distribution().len(),
        min_class = dataset.min_class_count(),
        "dataset generated"
    );
    Ok(dataset)
}

fn weighted(name: &'static str, weights: &[f64]) -> PipelineResult<WeightedIndex<f64>> {
    WeightedIndex::new(weights.iter().copied()).map_err(|e| PipelineError::InvalidParameter {
        name,
        reason: e.to_string(),
    })
}

/// Proportional Gaussian measurement noise.
fn noise<R: Rng + ?Sized>(rng: &mut R, value: f64, fraction: f64) -> f64 {
    let sd = value * fraction;
    match Normal::new(0.0, sd) {
        Ok(dist) => dist.sample(rng),
        // Degenerate spread adds no noise.
        Err(_) => 0.0,
    }
}

/// Floor at the minimum positive value and round to two decimals, matching
/// lab reporting precision.
fn quantize(value: f64) -> f64 {
    (value.max(MIN_HORMONE_VALUE) * 100.0).round() / 100.0
}
