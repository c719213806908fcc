//! Capability traits: typed markers declaring which algebraic result type an
//! operation produces.
//!
//! A quantity type implements zero or more of these. They serve two roles:
//!
//! 1. They bound the `std::ops` sugar on [`Quantity`](crate::Quantity), so
//!    `length * length` is an [`Area`-typed] expression checked at compile
//!    time.
//! 2. They bound the registration methods of
//!    [`ProviderBuilder`](crate::ProviderBuilder), so a provider's runtime
//!    operator table can never disagree with the type-level declarations.
//!
//! The evaluator resolves `a OP b` by operator-table lookup alone, with no
//! type introspection, which is why adding a new quantity type never
//! requires editing the parser or unrelated types.

use crate::quantity::QuantityType;

/// `Self * Rhs` produces `Output`.
pub trait Multipliable<Rhs: QuantityType>: QuantityType {
    /// Result type of the multiplication.
    type Output: QuantityType;
}

/// `Self / Rhs` produces `Output`.
pub trait Divisible<Rhs: QuantityType>: QuantityType {
    /// Result type of the division.
    type Output: QuantityType;
}

/// `Self²` produces `Output`.
pub trait Squareable: QuantityType {
    /// Result type of squaring.
    type Output: QuantityType;
}

/// `Self³` produces `Output`.
pub trait Cubable: QuantityType {
    /// Result type of cubing.
    type Output: QuantityType;
}

/// `Self + Self` (and `Self - Self`) produce `Output`.
///
/// Every provider's operator table receives addition and subtraction
/// automatically; this trait additionally gates the `+`/`-` operator sugar
/// on [`Quantity`](crate::Quantity). `Output = Self` throughout the built-in
/// catalog.
pub trait Addable: QuantityType {
    /// Result type of addition and subtraction.
    type Output: QuantityType;
}

/// Declares that a hand-authored concrete type shares the dimension of a
/// generically built composite.
///
/// This is the escape hatch joining generic composition with named domain
/// types: declaring an area type's composite as the product of two lengths
/// lets `Quantity::select` collapse the generic product into the named
/// type, and lets the evaluator accept either type where the other was
/// requested. Both casts are canonical-value passthroughs; the magnitude is
/// preserved bit for bit.
///
/// The declaring type's canonical unit must match the composite's (e.g.
/// `Speed` canonical in `m/s` when `Length` is canonical in `m` and `Time`
/// in `s`); the correspondence is otherwise meaningless.
pub trait Composition: QuantityType {
    /// The generic composite this type collapses.
    type Composite: QuantityType;
}
