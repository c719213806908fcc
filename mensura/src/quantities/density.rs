//! Density.
//!
//! Canonical unit: grams per cubic metre, matching the canonical units of
//! [`Mass`] and [`Volume`] so the collapse of `Ratio<Mass, Volume>` is a
//! value passthrough.

use mensura_core::{quantity, Composition, Multipliable, Ratio};

use super::mass::Mass;
use super::volume::Volume;

quantity! {
    /// Mass per volume, canonical in grams per cubic metre.
    pub struct Density {
        name: "Density",
        unit "g/m³" = 1.0;
        unit "kg/m³" = 1e3;
        unit "g/L" = 1e3;
        unit "kg/L" = 1e6;
        ops = |b| b.multipliable::<Volume>().corresponds();
    }
}

impl Multipliable<Volume> for Density {
    type Output = Mass;
}

impl Composition for Density {
    type Composite = Ratio<Mass, Volume>;
}
