//! Frequency.
//!
//! Canonical unit: the hertz, with SI prefixes. Declared as the collapse of
//! `Ratio<Scalar, Time>`, so a dimensionless count over a time parses as a
//! frequency, and a frequency times a time cancels to a bare number.

use mensura_core::{quantity, Composition, Divisible, Multipliable, Ratio, Scalar};

use super::time::Time;

quantity! {
    /// Events per unit time, canonical in hertz.
    pub struct Frequency {
        name: "Frequency",
        si unit "Hz" = 1.0;
        ops = |b| b.multipliable::<Time>().corresponds();
    }
}

impl Multipliable<Time> for Frequency {
    type Output = Scalar;
}

impl Composition for Frequency {
    type Composite = Ratio<Scalar, Time>;
}

// Typed counterpart of the runtime composition dispatch: a bare count over
// a time is a frequency.
impl Divisible<Time> for Scalar {
    type Output = Frequency;
}
