//! Acceleration.
//!
//! Canonical unit: metres per second squared, plus standard gravity `g0`
//! (exactly `9.80665 m/s²`). Declared as the collapse of
//! `Ratio<Speed, Time>`.

use mensura_core::{quantity, Composition, Multipliable, Ratio};

use super::speed::Speed;
use super::time::Time;

quantity! {
    /// Rate of change of speed, canonical in metres per second squared.
    pub struct Acceleration {
        name: "Acceleration",
        unit "m/s²" = 1.0;
        unit "g0" = 9.80665;
        ops = |b| b.multipliable::<Time>().corresponds();
    }
}

impl Multipliable<Time> for Acceleration {
    type Output = Speed;
}

impl Composition for Acceleration {
    type Composite = Ratio<Speed, Time>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use mensura_core::{Quantity, QuantityType};

    fn mps2(q: Quantity<Acceleration>) -> f64 {
        q.value_in(Acceleration::provider().default_unit())
    }

    #[test]
    fn standard_gravity() {
        let g = Acceleration::provider().create_by_symbol(1.0, "g0").unwrap();
        assert_abs_diff_eq!(mps2(g), 9.80665, epsilon = 1e-15);
    }

    #[test]
    fn speed_over_time_parses_as_acceleration() {
        let a: Quantity<Acceleration> = "5 m/s / 2 s".parse().unwrap();
        assert_eq!(mps2(a), 2.5);
    }

    #[test]
    fn acceleration_times_time_is_speed() {
        let a = Acceleration::provider()
            .create_by_symbol(2.0, "m/s²")
            .unwrap();
        let t = Time::provider().create_by_symbol(3.0, "s").unwrap();
        let v: Quantity<Speed> = a * t;
        assert_eq!(v.value_in(Speed::provider().default_unit()), 6.0);
    }

    #[test]
    fn nested_division_is_left_associative() {
        let a: Quantity<Acceleration> = "12 m / 2 s / 3 s".parse().unwrap();
        assert_eq!(mps2(a), 2.0);
    }
}
