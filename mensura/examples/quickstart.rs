//! Minimal end-to-end example: typed arithmetic across dimensions.

use mensura::{Area, Length, Quantity, QuantityType, Speed, Time};

fn main() {
    let lengths = Length::provider();
    let times = Time::provider();

    let distance = lengths.create_by_symbol(100.0, "m").unwrap();
    let lap = times.create_by_symbol(20.0, "s").unwrap();

    let pace: Quantity<Speed> = distance / lap;
    assert_eq!(pace.value_in(Speed::provider().default_unit()), 5.0);

    let field: Quantity<Area> = lengths.create_by_symbol(50.0, "m").unwrap()
        * lengths.create_by_symbol(30.0, "m").unwrap();
    println!("field: {}", field.display_in(Area::provider().unit("ha").unwrap()));
}
