//! Expression parsing example: the same input lands on whichever target
//! type it legitimately evaluates to.

use mensura::{Frequency, Quantity, QuantityType, Ratio, Scalar, Speed};
use mensura::{Length, Time};

fn main() {
    // A named derived type...
    let v: Quantity<Speed> = "10 m / 2 s".parse().unwrap();
    assert_eq!(v.value_in(Speed::provider().default_unit()), 5.0);

    // ...or its generic equivalent, from the same input.
    let generic: Quantity<Ratio<Length, Time>> = "10 m / 2 s".parse().unwrap();
    assert_eq!(generic.select::<Speed>(), v);

    // Dimensionless numerators work through the same machinery.
    let f: Quantity<Frequency> = "10 / 2 s".parse().unwrap();
    assert_eq!(f.value_in(Frequency::provider().default_unit()), 5.0);

    // Like types cancel to a bare ratio; the dimensionless target knows
    // "m" because earlier parses resolved Length's provider.
    let ratio: Quantity<Scalar> = "10 m / 2 m".parse().unwrap();
    assert_eq!(ratio.value(), 5.0);

    // And failures carry the offending detail.
    let err = "10 furlong".parse::<Quantity<Length>>().unwrap_err();
    println!("as expected: {err}");
}
