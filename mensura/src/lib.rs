//! Runtime-dimensioned physical quantities and unit-expression parsing.
//!
//! `mensura` is the user-facing crate in this workspace. It re-exports the
//! full API from `mensura-core` plus a catalog of predefined quantity types
//! (length, time, mass, area, volume, speed, acceleration, density,
//! frequency).
//!
//! The core idea: a value is always a [`Quantity<T>`], where `T` is a
//! zero-sized marker naming the dimension. The type keeps dimensions apart
//! at compile time; the unit tables, prefix expansion, and operator
//! registrations live in per-type provider singletons resolved at runtime,
//! which is what makes parsing and generic composition work.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to
//!   seconds).
//! - Parses human-written expressions (`"10 m / 2 s"`, `"5m^2"`,
//!   `"1 h + 30 min"`) into typed quantities.
//! - Composes any two types generically as [`Term`] and [`Ratio`], with
//!   named types like [`Speed`] declared equivalent to their composite.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: quantities are backed by `f64`.
//! - Full dimensional-exponent algebra; composition is pairwise.
//! - Non-linear conversions such as temperature offsets.
//!
//! # Quick start
//!
//! Parse an expression into the type you expect:
//!
//! ```rust
//! use mensura::{Quantity, QuantityType, Speed};
//!
//! let v: Quantity<Speed> = "10 m / 2 s".parse().unwrap();
//! assert_eq!(v.value_in(Speed::provider().default_unit()), 5.0);
//! ```
//!
//! Or work with typed arithmetic directly:
//!
//! ```rust
//! use mensura::{Area, Length, Quantity, QuantityType};
//!
//! let p = Length::provider();
//! let a: Quantity<Area> =
//!     p.create_by_symbol(2.0, "m").unwrap() * p.create_by_symbol(3.0, "km").unwrap();
//! assert_eq!(a.value_in(Area::provider().default_unit()), 6000.0);
//! ```
//!
//! Defining a new quantity type is a declaration away; see
//! [`quantity!`](mensura_core::quantity).

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub use mensura_core::{
    parse, quantity, try_parse, Addable, Composition, Cubable, DisplayIn, Divisible, Error,
    Multipliable, PrefixFamily, Provider, ProviderBuilder, Quantity, QuantityType, Ratio, Scalar,
    Squareable, Term, Unit,
};

pub mod quantities;

pub use quantities::{
    Acceleration, Area, Density, Frequency, Length, Mass, Speed, Time, Volume,
};
