//! The predefined quantity-type catalog.
//!
//! Each module declares one quantity type with the
//! [`quantity!`](mensura_core::quantity) macro, registers its operators,
//! and, for derived dimensions, declares the generic composite it collapses.
//! The catalog is a closed set only in the sense that it ships here;
//! downstream crates extend the system the same way these modules do, and
//! the parser picks the new registrations up without modification.

pub mod acceleration;
pub mod area;
pub mod density;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod speed;
pub mod time;
pub mod volume;

pub use acceleration::Acceleration;
pub use area::Area;
pub use density::Density;
pub use frequency::Frequency;
pub use length::Length;
pub use mass::Mass;
pub use speed::Speed;
pub use time::Time;
pub use volume::Volume;
