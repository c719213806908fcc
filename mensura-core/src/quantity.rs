//! The quantity value type and its arithmetic.

use core::fmt::{self, Debug, Display, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, Div, Mul, Neg, Sub};
use core::str::FromStr;

use crate::capability::{Addable, Composition, Cubable, Divisible, Multipliable, Squareable};
use crate::error::Error;
use crate::provider::Provider;
use crate::unit::Unit;

/// Marker trait implemented by every quantity type (Length, Mass, a
/// `Term<A, B>`, …).
///
/// A quantity type is a zero-sized marker; all of its runtime behavior
/// (unit table, operator table, factory) lives in its [`Provider`],
/// created lazily on first reference and memoized for the process lifetime.
pub trait QuantityType: Copy + Debug + PartialEq + 'static {
    /// The provider singleton for this type.
    fn provider() -> &'static Provider<Self>;
}

/// An immutable scalar tagged with a quantity type.
///
/// `Quantity<T>` wraps an `f64` stored in `T`'s canonical unit together with
/// phantom type information, so dimensional safety is compile-time and the
/// runtime cost is a bare `f64`. Values are produced through `T`'s provider
/// factory (or by [parsing](crate::parse::parse)) and never mutated.
///
/// NaN and infinities are legal values and follow IEEE-754 semantics
/// throughout: a NaN quantity is never equal to itself.
///
/// # Examples
///
/// ```rust
/// use mensura_core::{Provider, Quantity, QuantityType};
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// pub struct Span;
///
/// impl QuantityType for Span {
///     fn provider() -> &'static Provider<Self> {
///         use once_cell::sync::OnceCell;
///         static PROVIDER: OnceCell<Provider<Span>> = OnceCell::new();
///         PROVIDER.get_or_init(|| {
///             Provider::builder("Span")
///                 .unit("m", 1.0)
///                 .unit("km", 1000.0)
///                 .build()
///                 .expect("well-formed unit table")
///         })
///     }
/// }
///
/// let provider = Span::provider();
/// let km = provider.unit("km").unwrap();
/// let d = provider.create(2.5, km);
/// assert_eq!(d.value_in(provider.default_unit()), 2500.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity<T: QuantityType>(f64, PhantomData<T>);

impl<T: QuantityType> PartialOrd for Quantity<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl<T: QuantityType> Quantity<T> {
    /// A constant NaN quantity.
    pub const NAN: Self = Self::from_canonical(f64::NAN);

    /// Wraps a value already expressed in the canonical unit.
    pub(crate) const fn from_canonical(canonical: f64) -> Self {
        Quantity(canonical, PhantomData)
    }

    pub(crate) const fn canonical(self) -> f64 {
        self.0
    }

    /// Creates a quantity of `amount` in `unit`, via the provider factory.
    pub fn new(amount: f64, unit: Unit<T>) -> Self {
        T::provider().create(amount, unit)
    }

    /// The numeric value expressed in `unit`: `canonical / unit.scale()`.
    pub fn value_in(self, unit: Unit<T>) -> f64 {
        self.0 / unit.scale()
    }

    /// A [`Display`] adapter rendering the value in `unit`, honoring the
    /// formatter's precision (`{:.2}` etc.).
    pub fn display_in(self, unit: Unit<T>) -> DisplayIn<T> {
        DisplayIn {
            quantity: self,
            unit,
        }
    }

    /// Parses a unit expression into this quantity type.
    ///
    /// Equivalent to [`crate::parse::parse`].
    pub fn parse(input: &str) -> Result<Self, Error> {
        crate::parse::parse(input)
    }

    /// Parses a unit expression, converting every failure into `None`.
    pub fn try_parse(input: &str) -> Option<Self> {
        crate::parse::try_parse(input)
    }

    /// Named-method addition; the `+` operator is sugar over this.
    pub fn add(self, other: Self) -> Self {
        Self::from_canonical(self.0 + other.0)
    }

    /// Named-method subtraction.
    pub fn sub(self, other: Self) -> Self {
        Self::from_canonical(self.0 - other.0)
    }

    /// The additive inverse.
    pub fn negate(self) -> Self {
        Self::from_canonical(-self.0)
    }

    /// Scales by a dimensionless factor.
    pub fn scale(self, factor: f64) -> Self {
        Self::from_canonical(self.0 * factor)
    }

    /// The absolute value.
    pub fn abs(self) -> Self {
        Self::from_canonical(self.0.abs())
    }

    /// Squares the quantity, producing the declared result type.
    pub fn squared(self) -> Quantity<<T as Squareable>::Output>
    where
        T: Squareable,
    {
        Quantity::from_canonical(self.0 * self.0)
    }

    /// Cubes the quantity, producing the declared result type.
    pub fn cubed(self) -> Quantity<<T as Cubable>::Output>
    where
        T: Cubable,
    {
        Quantity::from_canonical(self.0 * self.0 * self.0)
    }

    /// Re-interprets this quantity as its declared composite equivalent.
    ///
    /// Canonical-value passthrough; exact, no conversion arithmetic.
    pub fn expand(self) -> Quantity<<T as Composition>::Composite>
    where
        T: Composition,
    {
        Quantity::from_canonical(self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator sugar over the named methods
// ─────────────────────────────────────────────────────────────────────────────

impl<T: Addable> Add for Quantity<T> {
    type Output = Quantity<<T as Addable>::Output>;
    fn add(self, rhs: Self) -> Self::Output {
        Quantity::from_canonical(self.0 + rhs.0)
    }
}

impl<T: Addable> Sub for Quantity<T> {
    type Output = Quantity<<T as Addable>::Output>;
    fn sub(self, rhs: Self) -> Self::Output {
        Quantity::from_canonical(self.0 - rhs.0)
    }
}

impl<T: QuantityType> Neg for Quantity<T> {
    type Output = Self;
    fn neg(self) -> Self {
        self.negate()
    }
}

impl<T: QuantityType> Mul<f64> for Quantity<T> {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl<T: QuantityType> Mul<Quantity<T>> for f64 {
    type Output = Quantity<T>;
    fn mul(self, rhs: Quantity<T>) -> Quantity<T> {
        rhs.scale(self)
    }
}

impl<T: QuantityType> Div<f64> for Quantity<T> {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Quantity::from_canonical(self.0 / rhs)
    }
}

impl<T, Rhs> Mul<Quantity<Rhs>> for Quantity<T>
where
    T: Multipliable<Rhs>,
    Rhs: QuantityType,
{
    type Output = Quantity<<T as Multipliable<Rhs>>::Output>;
    fn mul(self, rhs: Quantity<Rhs>) -> Self::Output {
        Quantity::from_canonical(self.0 * rhs.0)
    }
}

impl<T, Rhs> Div<Quantity<Rhs>> for Quantity<T>
where
    T: Divisible<Rhs>,
    Rhs: QuantityType,
{
    type Output = Quantity<<T as Divisible<Rhs>>::Output>;
    fn div(self, rhs: Quantity<Rhs>) -> Self::Output {
        Quantity::from_canonical(self.0 / rhs.0)
    }
}

impl<T: QuantityType> FromStr for Quantity<T> {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Error> {
        crate::parse::parse(s)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Formatting
// ─────────────────────────────────────────────────────────────────────────────

/// Display adapter produced by [`Quantity::display_in`].
pub struct DisplayIn<T: QuantityType> {
    quantity: Quantity<T>,
    unit: Unit<T>,
}

impl<T: QuantityType> Display for DisplayIn<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = self.quantity.value_in(self.unit);
        let symbol = self.unit.symbol();
        match (f.precision(), symbol.is_empty()) {
            (Some(p), true) => write!(f, "{value:.p$}"),
            (Some(p), false) => write!(f, "{value:.p$} {symbol}"),
            (None, true) => write!(f, "{value}"),
            (None, false) => write!(f, "{value} {symbol}"),
        }
    }
}

impl<T: QuantityType> Display for Quantity<T> {
    /// Formats in the default unit, e.g. `5 m`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.display_in(T::provider().default_unit()), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Provider;
    use approx::assert_abs_diff_eq;
    use once_cell::sync::OnceCell;
    use proptest::prelude::*;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Gauge;

    impl Addable for Gauge {
        type Output = Gauge;
    }

    impl QuantityType for Gauge {
        fn provider() -> &'static Provider<Self> {
            static PROVIDER: OnceCell<Provider<Gauge>> = OnceCell::new();
            PROVIDER.get_or_init(|| {
                Provider::builder("Gauge")
                    .unit("u", 1.0)
                    .unit("du", 10.0)
                    .build()
                    .unwrap()
            })
        }
    }

    fn units(amount: f64) -> Quantity<Gauge> {
        Quantity::new(amount, Gauge::provider().default_unit())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn named_methods_match_operator_sugar() {
        let a = units(7.0);
        let b = units(3.0);
        assert_eq!(a.add(b), a + b);
        assert_eq!(a.sub(b), a - b);
        assert_eq!(a.negate(), -a);
        assert_eq!(a.scale(2.0), a * 2.0);
        assert_eq!(a.scale(2.0), 2.0 * a);
    }

    #[test]
    fn scalar_division_halves() {
        assert_eq!(units(8.0) / 2.0, units(4.0));
    }

    #[test]
    fn abs_folds_the_sign() {
        assert_eq!(units(-3.0).abs(), units(3.0));
    }

    #[test]
    fn nan_is_never_equal_to_itself() {
        let nan = Quantity::<Gauge>::NAN;
        assert_ne!(nan, nan);
        assert_eq!(nan.partial_cmp(&nan), None);
    }

    #[test]
    fn ordering_follows_canonical_values() {
        assert!(units(2.0) < units(3.0));
        let decas = Gauge::provider().unit("du").unwrap();
        assert!(Quantity::new(1.0, decas) > units(9.0));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion and display
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn value_in_divides_by_the_unit_scale() {
        let decas = Gauge::provider().unit("du").unwrap();
        let q = Quantity::new(2.5, decas);
        assert_abs_diff_eq!(q.value_in(decas), 2.5, epsilon = 1e-15);
        assert_abs_diff_eq!(
            q.value_in(Gauge::provider().default_unit()),
            25.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn display_honors_precision() {
        let q = units(2.5);
        assert_eq!(q.to_string(), "2.5 u");
        assert_eq!(format!("{q:.3}"), "2.500 u");
        let decas = Gauge::provider().unit("du").unwrap();
        assert_eq!(format!("{:.2}", q.display_in(decas)), "0.25 du");
    }

    proptest! {
        #[test]
        fn addition_is_commutative(a in -1e12f64..1e12f64, b in -1e12f64..1e12f64) {
            prop_assert_eq!(units(a) + units(b), units(b) + units(a));
        }

        #[test]
        fn double_negation_is_identity(a in -1e12f64..1e12f64) {
            prop_assert_eq!(-(-units(a)), units(a));
        }

        #[test]
        fn conversion_preserves_the_canonical_value(a in -1e9f64..1e9f64) {
            let decas = Gauge::provider().unit("du").unwrap();
            let q = Quantity::new(a, decas);
            prop_assert!((q.value_in(decas) - a).abs() <= 1e-9 * a.abs().max(1.0));
        }
    }
}
