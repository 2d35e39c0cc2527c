//! Saliva reference bands from clinical endocrinology literature.
//!
//! Each hormone has a pair of nested bands per context. Values inside the
//! tight `normal` band contribute 0 to the severity score, values inside
//! the wider `critical` band contribute 1, values outside it contribute 2.

use endo_core::panel::{Gender, TimeOfDay};

/// Nested reference bands: `normal` sits inside `critical`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSet {
    /// Tight band: within it the hormone is unremarkable.
    pub normal: (f64, f64),
    /// Wide band: outside it the deviation is severe.
    pub critical: (f64, f64),
}

impl BandSet {
    /// Severity contribution of a single value: 0, 1, or 2.
    pub fn contribution(&self, value: f64) -> u8 {
        if value < self.critical.0 || value > self.critical.1 {
            2
        } else if value < self.normal.0 || value > self.normal.1 {
            1
        } else {
            0
        }
    }
}

/// Cortisol bands follow the diurnal rhythm: the same raw value can be
/// normal in the morning and severely abnormal in the evening.
pub fn cortisol(time_of_day: TimeOfDay) -> BandSet {
    match time_of_day {
        TimeOfDay::Morning => BandSet {
            normal: (4.0, 10.0),
            critical: (3.0, 12.0),
        },
        TimeOfDay::Afternoon => BandSet {
            normal: (1.0, 4.0),
            critical: (0.5, 6.0),
        },
        TimeOfDay::Evening => BandSet {
            normal: (0.3, 2.0),
            critical: (0.2, 4.0),
        },
    }
}

/// Estrogen bands by gender. The male band is roughly an eighth the width
/// of the female band.
pub fn estrogen(gender: Gender) -> BandSet {
    match gender {
        Gender::Male => BandSet {
            normal: (1.0, 4.0),
            critical: (0.5, 6.0),
        },
        Gender::Female => BandSet {
            normal: (1.0, 8.0),
            critical: (0.5, 12.0),
        },
    }
}

/// Testosterone bands by gender. Male thresholds run 4–5x the female ones.
pub fn testosterone(gender: Gender) -> BandSet {
    match gender {
        Gender::Male => BandSet {
            normal: (50.0, 200.0),
            critical: (30.0, 250.0),
        },
        Gender::Female => BandSet {
            normal: (10.0, 55.0),
            critical: (5.0, 80.0),
        },
    }
}
