//! Speed.
//!
//! Canonical unit: metres per second. Declared as the collapse of
//! `Ratio<Length, Time>`, which is what lets `"10 m / 2 s"` parse directly
//! into a `Speed` even though neither component type knows the target.
//!
//! ```rust
//! use mensura::{Quantity, QuantityType, Speed};
//!
//! let v: Quantity<Speed> = "36 km/h".parse().unwrap();
//! assert!((v.value_in(Speed::provider().default_unit()) - 10.0).abs() < 1e-12);
//! ```

use mensura_core::{quantity, Composition, Divisible, Multipliable, Ratio};

use super::acceleration::Acceleration;
use super::length::Length;
use super::time::Time;

quantity! {
    /// Rate of change of position, canonical in metres per second.
    pub struct Speed {
        name: "Speed",
        unit "m/s" = 1.0;
        unit "km/h" = 1000.0 / 3600.0;
        unit "kn" = 1852.0 / 3600.0;
        unit "mph" = 0.44704;
        ops = |b| {
            b.multipliable::<Time>()
                .divisible::<Time>()
                .corresponds()
        };
    }
}

impl Multipliable<Time> for Speed {
    type Output = Length;
}

impl Divisible<Time> for Speed {
    type Output = Acceleration;
}

impl Composition for Speed {
    type Composite = Ratio<Length, Time>;
}
