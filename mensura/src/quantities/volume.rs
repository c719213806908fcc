//! Volume.
//!
//! Canonical unit: the cubic metre, with the litre family and common cubic
//! units. Declared as the collapse of `Term<Area, Length>`.

use mensura_core::{quantity, Composition, Divisible, Term};

use super::area::Area;
use super::length::Length;

quantity! {
    /// Spatial extent, canonical in cubic metres.
    pub struct Volume {
        name: "Volume",
        unit "m³" = 1.0;
        unit "L" = 1e-3;
        unit "mL" = 1e-6;
        unit "cm³" = 1e-6;
        unit "km³" = 1e9;
        ops = |b| {
            b.divisible::<Area>()
                .divisible::<Length>()
                .corresponds()
        };
    }
}

impl Divisible<Area> for Volume {
    type Output = Length;
}

impl Divisible<Length> for Volume {
    type Output = Area;
}

impl Composition for Volume {
    type Composite = Term<Area, Length>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensura_core::{Quantity, QuantityType};

    #[test]
    fn litre_family() {
        let p = Volume::provider();
        assert_eq!(p.unit("L").unwrap().scale(), 1e-3);
        assert_eq!(p.unit("mL").unwrap().scale(), 1e-6);
        assert_eq!(p.unit("cm³").unwrap().scale(), 1e-6);
    }

    #[test]
    fn cubed_unit_expression_parses_as_volume() {
        let v: Quantity<Volume> = "2 m^3".parse().unwrap();
        assert_eq!(v.value_in(Volume::provider().default_unit()), 2.0);
    }

    #[test]
    fn volume_cancels_against_either_factor() {
        let v = Volume::provider().create_by_symbol(24.0, "m³").unwrap();
        let a = Area::provider().create_by_symbol(6.0, "m²").unwrap();
        let l = Length::provider().create_by_symbol(2.0, "m").unwrap();
        assert_eq!((v / a).value_in(Length::provider().default_unit()), 4.0);
        assert_eq!((v / l).value_in(Area::provider().default_unit()), 12.0);
    }

    #[test]
    fn area_times_length_parses_as_volume() {
        let v: Quantity<Volume> = "3 m² * 2 m".parse().unwrap();
        assert_eq!(v.value_in(Volume::provider().default_unit()), 6.0);
    }
}
