//! Core runtime model for dimensioned physical quantities.
//!
//! `mensura-core` provides a units model dimensioned at runtime through
//! per-type provider singletons:
//!
//! - A quantity type is a zero-sized marker implementing [`QuantityType`].
//! - A value tagged with a quantity type is a [`Quantity<T>`], backed by an
//!   `f64` stored in the type's canonical unit.
//! - Each type's unit table, prefix expansion, and operator registrations
//!   live in its lazily built [`Provider<T>`] singleton.
//! - Any two types compose generically as [`Term<A, B>`] (product) and
//!   [`Ratio<A, B>`] (quotient), with derived providers memoized process-wide.
//! - Human-written expressions like `"10 m / 2 s"` or `"5m^2"` are parsed,
//!   evaluated through the operator tables, and type-checked against the
//!   requested result type ([`parse`]).
//!
//! Most users should depend on `mensura` (the facade crate), which adds a
//! catalog of predefined quantity types, unless they only define their own.
//!
//! # What this crate solves
//!
//! - Compile-time separation of dimensions (`Quantity<Length>` and
//!   `Quantity<Time>` never mix), with runtime unit tables per dimension.
//! - Parsing of unit expressions into typed quantities, extensible by
//!   declaring new types only; the parser itself is never edited.
//! - Generic composition of existing types without hand-authoring every
//!   product and quotient.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic ([`Quantity`] is `f64`; IEEE-754 semantics apply).
//! - Full dimensional-exponent algebra; composition is the pairwise
//!   `Term`/`Ratio` vocabulary plus explicit operator registrations.
//! - Non-linear unit conversions (temperature offsets and the like); unit
//!   scales are strictly multiplicative, though a quantity type may declare
//!   an offset-adjusted canonical representation and expose named
//!   constructors for the affine cases.
//!
//! # Quick start
//!
//! Declare a type with the [`quantity!`] macro and parse into it:
//!
//! ```rust
//! use mensura_core::{quantity, Quantity, QuantityType};
//!
//! quantity! {
//!     /// Linear extent.
//!     pub struct Distance {
//!         name: "Distance",
//!         si unit "m" = 1.0;
//!         unit "ft" = 0.3048;
//!     }
//! }
//!
//! let d: Quantity<Distance> = "3 km + 250 m".parse().unwrap();
//! let metres = Distance::provider().default_unit();
//! assert_eq!(d.value_in(metres), 3250.0);
//! ```
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result<_, Error>`](Error); nothing is
//! silently coerced. Declaring a malformed unit table is the one panicking
//! path, surfaced on the first provider reference, because a bad definition
//! is a programming error rather than an input error.
//!
//! # Concurrency
//!
//! Providers are immutable after construction and safe to share across
//! threads; concurrent first references to the same type observe a single
//! provider instance.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod capability;
mod composite;
mod error;
mod macros;
mod parse;
mod prefix;
mod provider;
mod quantity;
mod registry;
mod scalar;
mod unit;

pub use capability::{Addable, Composition, Cubable, Divisible, Multipliable, Squareable};
pub use composite::{Ratio, Term};
pub use error::Error;
pub use parse::{parse, try_parse};
pub use prefix::PrefixFamily;
pub use provider::{Provider, ProviderBuilder};
pub use quantity::{DisplayIn, Quantity, QuantityType};
pub use scalar::Scalar;
pub use unit::Unit;

/// Support for macro expansions; not public API.
#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::OnceCell;

    use crate::{ProviderBuilder, QuantityType};

    /// Applies a `quantity!` `ops =` closure with its parameter type pinned
    /// to the builder's quantity type.
    pub fn apply_ops<T: QuantityType>(
        builder: ProviderBuilder<T>,
        ops: impl FnOnce(ProviderBuilder<T>) -> ProviderBuilder<T>,
    ) -> ProviderBuilder<T> {
        ops(builder)
    }
}
