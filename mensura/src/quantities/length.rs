//! Length.
//!
//! Canonical unit: the metre, with the full SI prefix ladder plus the
//! international inch and foot (exact definitions, `1 in = 0.0254 m`).
//!
//! Length is the most connected type in the catalog: it multiplies into
//! [`Area`] and [`Volume`] and divides by [`Time`] into [`Speed`].
//!
//! ```rust
//! use mensura::{Length, Quantity, QuantityType};
//!
//! let d: Quantity<Length> = "2 km + 500 m".parse().unwrap();
//! assert_eq!(d.value_in(Length::provider().default_unit()), 2500.0);
//! ```

use mensura_core::{quantity, Cubable, Divisible, Multipliable, Squareable};

use super::area::Area;
use super::speed::Speed;
use super::time::Time;
use super::volume::Volume;

quantity! {
    /// Linear extent, canonical in metres.
    pub struct Length {
        name: "Length",
        si unit "m" = 1.0;
        unit "in" = 0.0254;
        unit "ft" = 0.3048;
        ops = |b| {
            b.multipliable::<Length>()
                .multipliable::<Area>()
                .divisible::<Time>()
                .squareable()
                .cubable()
        };
    }
}

impl Multipliable<Length> for Length {
    type Output = Area;
}

impl Multipliable<Area> for Length {
    type Output = Volume;
}

impl Divisible<Time> for Length {
    type Output = Speed;
}

impl Squareable for Length {
    type Output = Area;
}

impl Cubable for Length {
    type Output = Volume;
}
