//! Area.
//!
//! Canonical unit: the square metre. `Area` declares itself the collapse of
//! the generic product `Term<Length, Length>`, so `"2 m * 3 m"` parses as an
//! `Area` and a `Term<Length, Length>` collapses into one via `select`.

use mensura_core::{quantity, Composition, Divisible, Multipliable, Term};

use super::length::Length;
use super::volume::Volume;

quantity! {
    /// Surface extent, canonical in square metres.
    pub struct Area {
        name: "Area",
        unit "m²" = 1.0;
        unit "km²" = 1e6;
        unit "ha" = 1e4;
        unit "cm²" = 1e-4;
        ops = |b| {
            b.multipliable::<Length>()
                .divisible::<Length>()
                .corresponds()
        };
    }
}

impl Multipliable<Length> for Area {
    type Output = Volume;
}

impl Divisible<Length> for Area {
    type Output = Length;
}

impl Composition for Area {
    type Composite = Term<Length, Length>;
}
