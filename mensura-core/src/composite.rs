//! Generic product and quotient quantity types.
//!
//! `Term<A, B>` is "an `A` times a `B`" and `Ratio<A, B>` is "an `A` per
//! `B`". Both are ordinary quantity types whose providers are derived from
//! the component providers and memoized in the process-wide
//! [registry](crate::registry), so any pair of existing types composes
//! without hand-authoring a new one.
//!
//! A hand-authored type can declare itself equivalent to a composite via
//! [`Composition`]; `select` collapses the generic form into the named one.

use core::marker::PhantomData;

use crate::capability::{Addable, Composition, Divisible, Multipliable};
use crate::provider::Provider;
use crate::quantity::{Quantity, QuantityType};
use crate::registry::{composite_provider, CompositeOp};

/// The product quantity `A · B`.
///
/// Canonical unit: the product of the component canonical units; the full
/// derived unit table is the pairwise product of the component tables
/// (`m·s`, `km·h`, …).
///
/// ```rust
/// use mensura_core::{Quantity, Term};
/// # use mensura_core::{Provider, QuantityType};
/// # use once_cell::sync::OnceCell;
/// # #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// # pub struct Len;
/// # impl QuantityType for Len {
/// #     fn provider() -> &'static Provider<Self> {
/// #         static P: OnceCell<Provider<Len>> = OnceCell::new();
/// #         P.get_or_init(|| Provider::builder("Len").unit("m", 1.0).build().unwrap())
/// #     }
/// # }
/// let product: Quantity<Term<Len, Len>> = "6 m·m".parse().unwrap();
/// let provider = <Term<Len, Len>>::provider();
/// assert_eq!(provider.name(), "Len·Len");
/// assert_eq!(product.value_in(provider.default_unit()), 6.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term<A, B>(PhantomData<fn() -> (A, B)>);

/// The quotient quantity `A / B`.
///
/// Canonical unit: the quotient of the component canonical units; the full
/// derived unit table is the pairwise quotient of the component tables
/// (`m/s`, `km/h`, …).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ratio<A, B>(PhantomData<fn() -> (A, B)>);

impl<A: QuantityType, B: QuantityType> QuantityType for Term<A, B> {
    fn provider() -> &'static Provider<Self> {
        composite_provider::<Self, A, B>(CompositeOp::Product)
    }
}

impl<A: QuantityType, B: QuantityType> QuantityType for Ratio<A, B> {
    fn provider() -> &'static Provider<Self> {
        composite_provider::<Self, A, B>(CompositeOp::Quotient)
    }
}

// Only the second-component cancellation is expressible as a trait impl;
// `Divisible<A> for Term<A, B>` alongside it would overlap when `A == B`.
// The first-component direction is the named method `divided_by_first`,
// and the runtime operator table carries both directions regardless.
impl<A: QuantityType, B: QuantityType> Divisible<B> for Term<A, B> {
    type Output = A;
}

impl<A: QuantityType, B: QuantityType> Multipliable<B> for Ratio<A, B> {
    type Output = A;
}

impl<A: QuantityType, B: QuantityType> Addable for Term<A, B> {
    type Output = Self;
}

impl<A: QuantityType, B: QuantityType> Addable for Ratio<A, B> {
    type Output = Self;
}

impl<A: QuantityType, B: QuantityType> Quantity<Term<A, B>> {
    /// Cancels the first component, leaving the second.
    pub fn divided_by_first(self, divisor: Quantity<A>) -> Quantity<B> {
        Quantity::from_canonical(self.canonical() / divisor.canonical())
    }

    /// Cancels the second component, leaving the first. Identical to the
    /// `/` operator.
    pub fn divided_by_second(self, divisor: Quantity<B>) -> Quantity<A> {
        Quantity::from_canonical(self.canonical() / divisor.canonical())
    }

    /// Collapses this generic product into the named type declared
    /// [equivalent](Composition) to it. Canonical-value passthrough.
    pub fn select<C>(self) -> Quantity<C>
    where
        C: Composition<Composite = Term<A, B>>,
    {
        Quantity::from_canonical(self.canonical())
    }
}

impl<A: QuantityType, B: QuantityType> Quantity<Ratio<A, B>> {
    /// The multiplicative inverse, as the flipped ratio.
    pub fn reciprocal(self) -> Quantity<Ratio<B, A>> {
        Quantity::from_canonical(self.canonical().recip())
    }

    /// Collapses this generic quotient into the named type declared
    /// [equivalent](Composition) to it. Canonical-value passthrough.
    pub fn select<C>(self) -> Quantity<C>
    where
        C: Composition<Composite = Ratio<A, B>>,
    {
        Quantity::from_canonical(self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::OnceCell;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Len;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Dur;

    impl QuantityType for Len {
        fn provider() -> &'static Provider<Self> {
            static PROVIDER: OnceCell<Provider<Len>> = OnceCell::new();
            PROVIDER.get_or_init(|| {
                Provider::builder("Len")
                    .unit("m", 1.0)
                    .unit("km", 1000.0)
                    .build()
                    .unwrap()
            })
        }
    }

    impl QuantityType for Dur {
        fn provider() -> &'static Provider<Self> {
            static PROVIDER: OnceCell<Provider<Dur>> = OnceCell::new();
            PROVIDER.get_or_init(|| {
                Provider::builder("Dur")
                    .unit("s", 1.0)
                    .unit("h", 3600.0)
                    .build()
                    .unwrap()
            })
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived providers
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn term_provider_derives_name_and_units() {
        let provider = <Term<Len, Dur>>::provider();
        assert_eq!(provider.name(), "Len·Dur");
        assert_eq!(provider.default_unit().symbol(), "m·s");
        assert_eq!(provider.default_unit().scale(), 1.0);
        let kmh = provider.unit("km·h").unwrap();
        assert_eq!(kmh.scale(), 3_600_000.0);
    }

    #[test]
    fn ratio_provider_derives_name_and_units() {
        let provider = <Ratio<Len, Dur>>::provider();
        assert_eq!(provider.name(), "Len/Dur");
        assert_eq!(provider.default_unit().symbol(), "m/s");
        let kmh = provider.unit("km/h").unwrap();
        assert!((kmh.scale() - 1000.0 / 3600.0).abs() < 1e-12);
    }

    #[test]
    fn composite_provider_is_memoized() {
        let first: *const Provider<Ratio<Len, Dur>> = <Ratio<Len, Dur>>::provider();
        let second: *const Provider<Ratio<Len, Dur>> = <Ratio<Len, Dur>>::provider();
        assert!(core::ptr::eq(first, second));
    }

    #[test]
    fn concurrent_first_reference_yields_one_provider() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    <Term<Dur, Dur>>::provider() as *const Provider<Term<Dur, Dur>> as usize
                })
            })
            .collect();
        let addresses: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Typed composite arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn term_cancels_either_component() {
        let provider = <Term<Len, Dur>>::provider();
        let product = provider.create(12.0, provider.default_unit());
        let len = Len::provider().create_by_symbol(3.0, "m").unwrap();
        let dur = Dur::provider().create_by_symbol(4.0, "s").unwrap();

        let per_dur = product / dur;
        assert_eq!(per_dur, len);
        assert_eq!(product.divided_by_second(dur), len);
        assert_eq!(product.divided_by_first(len), dur);
    }

    #[test]
    fn ratio_multiplies_back_to_numerator() {
        let provider = <Ratio<Len, Dur>>::provider();
        let rate = provider.create(5.0, provider.default_unit());
        let dur = Dur::provider().create_by_symbol(3.0, "s").unwrap();
        let len = rate * dur;
        assert_eq!(len, Len::provider().create_by_symbol(15.0, "m").unwrap());
    }

    #[test]
    fn reciprocal_flips_the_ratio() {
        let provider = <Ratio<Len, Dur>>::provider();
        let rate = provider.create(4.0, provider.default_unit());
        let flipped = rate.reciprocal();
        let per = <Ratio<Dur, Len>>::provider();
        assert_eq!(flipped.value_in(per.default_unit()), 0.25);
    }
}
