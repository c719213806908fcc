//! Mass.
//!
//! Canonical unit: the gram, so the SI prefix ladder lands on the familiar
//! `kg`, `mg`, and friends directly; the tonne is declared on top.

use mensura_core::{quantity, Divisible};

use super::density::Density;
use super::volume::Volume;

quantity! {
    /// Mass, canonical in grams.
    pub struct Mass {
        name: "Mass",
        si unit "g" = 1.0;
        unit "t" = 1e6;
        ops = |b| b.divisible::<Volume>();
    }
}

impl Divisible<Volume> for Mass {
    type Output = Density;
}
