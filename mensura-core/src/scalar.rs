//! The built-in dimensionless quantity type.

use once_cell::sync::OnceCell;

use crate::capability::{Addable, Divisible, Multipliable};
use crate::provider::{Provider, RawProvider};
use crate::quantity::{Quantity, QuantityType};

/// The dimensionless quantity type.
///
/// Every bare numeric literal in a parsed expression lexes to a `Scalar`
/// value, and every provider's operator table accepts multiplication and
/// division by `Scalar` out of the box. Its single unit is the empty symbol
/// with scale `1.0`, so a `Scalar` prints as a bare number.
///
/// ```rust
/// use mensura_core::{Quantity, Scalar};
///
/// let ratio: Quantity<Scalar> = "6 / 3".parse().unwrap();
/// assert_eq!(ratio.value(), 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scalar;

impl QuantityType for Scalar {
    fn provider() -> &'static Provider<Self> {
        static PROVIDER: OnceCell<Provider<Scalar>> = OnceCell::new();
        PROVIDER.get_or_init(|| {
            Provider::builder("Scalar")
                .unit("", 1.0)
                .build()
                .expect("dimensionless unit table is well formed")
        })
    }
}

/// Erased scalar provider, used when assembling every other provider's
/// default operator entries.
pub(crate) fn scalar_raw() -> &'static RawProvider {
    crate::provider::raw_of::<Scalar>()
}

impl Addable for Scalar {
    type Output = Scalar;
}

impl Multipliable<Scalar> for Scalar {
    type Output = Scalar;
}

impl Divisible<Scalar> for Scalar {
    type Output = Scalar;
}

impl Quantity<Scalar> {
    /// The bare numeric value of a dimensionless quantity.
    pub fn value(self) -> f64 {
        self.canonical()
    }
}

impl From<f64> for Quantity<Scalar> {
    fn from(value: f64) -> Self {
        Quantity::from_canonical(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_provider_has_one_empty_unit() {
        let provider = Scalar::provider();
        assert_eq!(provider.name(), "Scalar");
        assert_eq!(provider.default_unit().symbol(), "");
        assert_eq!(provider.default_unit().scale(), 1.0);
        assert_eq!(provider.parsable_units().count(), 1);
    }

    #[test]
    fn scalar_arithmetic_stays_dimensionless() {
        let a = Quantity::<Scalar>::from(6.0);
        let b = Quantity::<Scalar>::from(3.0);
        assert_eq!((a * b).value(), 18.0);
        assert_eq!((a / b).value(), 2.0);
        assert_eq!((a + b).value(), 9.0);
    }

    #[test]
    fn scalar_displays_without_symbol() {
        let a = Quantity::<Scalar>::from(2.5);
        assert_eq!(a.to_string(), "2.5");
    }
}
