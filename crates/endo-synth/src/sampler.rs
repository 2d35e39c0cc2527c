//! Condition-conditioned hormone samplers.
//!
//! One pure function per hormone, taking the RNG and the sampling context.
//! Condition effects are multiplicative scale factors on a base value drawn
//! uniformly from the contextual reference band, so each archetype stays
//! unit-testable in isolation.

use endo_core::panel::{Gender, HealthCondition, TimeOfDay};
use rand::Rng;

/// Menstrual cycle phase, simulated for female estrogen draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CyclePhase {
    Follicular,
    Ovulation,
    Luteal,
}

fn cycle_phase<R: Rng + ?Sized>(rng: &mut R) -> CyclePhase {
    // 40% follicular, 20% ovulation, 40% luteal.
    let roll: f64 = rng.gen();
    if roll < 0.4 {
        CyclePhase::Follicular
    } else if roll < 0.6 {
        CyclePhase::Ovulation
    } else {
        CyclePhase::Luteal
    }
}

/// Draw a cortisol value in ng/mL.
///
/// Base is uniform within the diurnal band, then scaled by condition and a
/// mild age trend (cortisol rises with age).
pub fn cortisol<R: Rng + ?Sized>(
    rng: &mut R,
    time_of_day: TimeOfDay,
    condition: HealthCondition,
    age: u32,
) -> f64 {
    let (low, high) = match time_of_day {
        TimeOfDay::Morning => (4.0, 10.0),
        TimeOfDay::Afternoon => (1.0, 4.0),
        TimeOfDay::Evening => (0.3, 2.0),
    };
    let mut value = rng.gen_range(low..high);

    match condition {
        HealthCondition::Stressed => value *= rng.gen_range(1.3..2.0),
        HealthCondition::Adrenal => {
            // Adrenal dysfunction swings both ways: hypo- or hyper-cortisolism.
            value *= if rng.gen_bool(0.5) { 0.3 } else { 2.5 };
        }
        HealthCondition::Thyroid => value *= rng.gen_range(0.7..1.4),
        _ => {}
    }

    value * (1.0 + (f64::from(age) - 35.0) * 0.005)
}

/// Draw an estrogen value in pg/mL.
///
/// Females branch on a simulated cycle phase; post-45 decline applies on
/// top of condition factors.
pub fn estrogen<R: Rng + ?Sized>(
    rng: &mut R,
    gender: Gender,
    age: u32,
    condition: HealthCondition,
) -> f64 {
    let mut value = match gender {
        Gender::Male => rng.gen_range(1.0..3.5),
        Gender::Female => match cycle_phase(rng) {
            CyclePhase::Follicular => rng.gen_range(1.0..5.0),
            CyclePhase::Ovulation => rng.gen_range(3.0..8.0),
            CyclePhase::Luteal => rng.gen_range(2.0..6.0),
        },
    };

    match condition {
        HealthCondition::Pcos => value *= rng.gen_range(0.5..0.8),
        HealthCondition::Menopause => value *= rng.gen_range(0.2..0.5),
        HealthCondition::Thyroid => value *= rng.gen_range(0.7..1.5),
        _ => {}
    }

    if gender == Gender::Female && age > 45 {
        value *= (1.0 - (f64::from(age) - 45.0) * 0.03).max(0.3);
    }

    value
}

/// Draw a testosterone value in pg/mL.
///
/// Males get an age-related decline past 30; PCOS elevates and menopause
/// lowers the female baseline.
pub fn testosterone<R: Rng + ?Sized>(
    rng: &mut R,
    gender: Gender,
    age: u32,
    condition: HealthCondition,
) -> f64 {
    let mut value = match gender {
        Gender::Male => {
            let mut v = rng.gen_range(60.0..180.0);
            if age > 30 {
                v *= (1.0 - (f64::from(age) - 30.0) * 0.01).max(0.5);
            }
            v
        }
        Gender::Female => rng.gen_range(15.0..50.0),
    };

    match condition {
        HealthCondition::Pcos if gender == Gender::Female => {
            value *= rng.gen_range(1.5..2.5);
        }
        HealthCondition::LowT => value *= rng.gen_range(0.3..0.6),
        HealthCondition::Menopause if gender == Gender::Female => {
            value *= rng.gen_range(0.5..0.8);
        }
        _ => {}
    }

    value
}
