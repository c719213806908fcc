//! Unit handles and their validation.

use core::fmt::{self, Display, Formatter};
use core::marker::PhantomData;

use crate::error::Error;
use crate::prefix::PrefixFamily;
use crate::provider::Provider;
use crate::quantity::QuantityType;

/// Internal unit record stored inside a provider.
///
/// Invariant: `scale > 0` and finite. Validated on construction; the
/// prefix-expansion path multiplies two positive finite factors and so
/// preserves the invariant without re-checking.
#[derive(Clone, Debug)]
pub(crate) struct UnitData {
    pub(crate) symbol: String,
    pub(crate) scale: f64,
    pub(crate) family: Option<PrefixFamily>,
}

impl UnitData {
    pub(crate) fn new(
        symbol: impl Into<String>,
        scale: f64,
        family: Option<PrefixFamily>,
    ) -> Result<Self, Error> {
        let symbol = symbol.into();
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidUnit { symbol, scale });
        }
        Ok(UnitData {
            symbol,
            scale,
            family,
        })
    }
}

/// A named scale factor for one quantity type.
///
/// `Unit<T>` is a lightweight `Copy` handle into the static unit table of
/// `T`'s provider. Its `scale` is the number of canonical units in one of
/// this unit: with metres canonical, the kilometre has scale `1000.0`
/// because `1 km = 1000 m`.
///
/// The back-reference to the owning provider is type-level: every
/// `Unit<T>` belongs to [`T::provider()`](QuantityType::provider).
#[derive(Clone, Copy, Debug)]
pub struct Unit<T: QuantityType> {
    data: &'static UnitData,
    _ty: PhantomData<fn() -> T>,
}

impl<T: QuantityType> Unit<T> {
    pub(crate) fn from_data(data: &'static UnitData) -> Self {
        Unit {
            data,
            _ty: PhantomData,
        }
    }

    /// The printable symbol, e.g. `"m"` or `"km/h"`.
    pub fn symbol(&self) -> &'static str {
        self.data.symbol.as_str()
    }

    /// Canonical units per one of this unit. Always positive and finite.
    pub fn scale(&self) -> f64 {
        self.data.scale
    }

    /// The automatic prefix family this unit was declared with, if any.
    pub fn prefix_family(&self) -> Option<PrefixFamily> {
        self.data.family
    }

    /// The provider this unit belongs to.
    pub fn provider(&self) -> &'static Provider<T> {
        T::provider()
    }
}

impl<T: QuantityType> PartialEq for Unit<T> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.data, other.data)
    }
}

impl<T: QuantityType> Display for Unit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Invalid-unit guard
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn zero_scale_is_rejected() {
        let err = UnitData::new("m", 0.0, None).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidUnit {
                symbol: "m".into(),
                scale: 0.0
            }
        );
    }

    #[test]
    fn negative_scale_is_rejected() {
        assert!(matches!(
            UnitData::new("m", -2.5, None),
            Err(Error::InvalidUnit { .. })
        ));
    }

    #[test]
    fn non_finite_scale_is_rejected() {
        assert!(matches!(
            UnitData::new("m", f64::INFINITY, None),
            Err(Error::InvalidUnit { .. })
        ));
        assert!(matches!(
            UnitData::new("m", f64::NAN, None),
            Err(Error::InvalidUnit { .. })
        ));
    }

    #[test]
    fn positive_scale_is_accepted() {
        let unit = UnitData::new("km", 1000.0, None).unwrap();
        assert_eq!(unit.symbol, "km");
        assert_eq!(unit.scale, 1000.0);
    }
}
