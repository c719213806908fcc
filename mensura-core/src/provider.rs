//! Per-quantity-type providers: canonical unit, parsable-unit set, and the
//! operator table the evaluator dispatches through.
//!
//! A [`Provider<T>`] is the per-type registry everything else hangs off:
//! instead of inspecting types at runtime, every provider carries an
//! explicit operator table, resolved once on first use. The evaluator
//! performs table lookup only.
//!
//! Providers are lazily constructed singletons that live for the process
//! lifetime. Their lazily-resolved parts ([`once_cell::sync::OnceCell`])
//! make mutually-referential quantity types safe: building `Length`'s
//! provider records a *thunk* for `Area`, not `Area`'s table, so the two
//! can reference each other without recursing during construction.

use std::any::TypeId;
use std::collections::HashSet;
use std::marker::PhantomData;
use std::sync::Mutex;

use log::debug;
use once_cell::sync::{Lazy, OnceCell};

use crate::capability::{Composition, Cubable, Divisible, Multipliable, Squareable};
use crate::error::Error;
use crate::prefix::PrefixFamily;
use crate::quantity::{Quantity, QuantityType};
use crate::unit::{Unit, UnitData};

/// Lazy handle to another type's provider.
pub(crate) type Thunk = fn() -> &'static RawProvider;

/// Every provider resolved through [`raw_of`] so far, in first-use order.
/// A dimensionless parse target has no type graph of its own; the lexer
/// borrows this roster as its unit vocabulary instead.
static ROSTER: Lazy<Mutex<Vec<&'static RawProvider>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Erased view of `T::provider()`, usable without knowing `T`.
///
/// The provider is fully constructed before the roster lock is taken, so
/// construction may re-enter `raw_of` for other types freely.
pub(crate) fn raw_of<T: QuantityType>() -> &'static RawProvider {
    let raw = &T::provider().raw;
    let mut roster = ROSTER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if !roster.iter().any(|p| p.type_id == raw.type_id) {
        roster.push(raw);
    }
    raw
}

/// Snapshot of every provider the process has resolved so far.
pub(crate) fn known_providers() -> Vec<&'static RawProvider> {
    ROSTER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
}

// ─────────────────────────────────────────────────────────────────────────────
// Operators
// ─────────────────────────────────────────────────────────────────────────────

/// The algebraic operation an operator-table entry performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OpKind {
    Add,
    Subtract,
    Multiply,
    Divide,
    Square,
    Cube,
}

impl OpKind {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Subtract => "-",
            OpKind::Multiply => "*",
            OpKind::Divide => "/",
            OpKind::Square => "²",
            OpKind::Cube => "³",
        }
    }

    pub(crate) fn commutative(self) -> bool {
        matches!(self, OpKind::Add | OpKind::Multiply)
    }

    /// Canonical-space arithmetic for binary kinds.
    pub(crate) fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            OpKind::Add => left + right,
            OpKind::Subtract => left - right,
            OpKind::Multiply => left * right,
            OpKind::Divide => left / right,
            OpKind::Square | OpKind::Cube => f64::NAN,
        }
    }

    /// Canonical-space arithmetic for unary kinds.
    pub(crate) fn apply_unary(self, value: f64) -> f64 {
        match self {
            OpKind::Square => value * value,
            OpKind::Cube => value * value * value,
            _ => f64::NAN,
        }
    }
}

/// Unresolved operator registration. `result`/`operand` are thunks so that
/// providers may reference each other cyclically.
pub(crate) enum OperatorDef {
    Binary {
        kind: OpKind,
        operand: Thunk,
        result: Thunk,
    },
    Unary {
        kind: OpKind,
        result: Thunk,
    },
    /// Owned by a composite (or composite-equivalent) provider: the pair of
    /// *component* types whose combination produces this provider's type.
    /// Consulted only when this provider is the parse target.
    Composition {
        kind: OpKind,
        left: Thunk,
        right: Thunk,
    },
}

/// Resolved operator-table entry. Operands and results are live provider
/// references so the lexer can walk the whole reachable type graph.
pub(crate) enum Operator {
    Binary {
        kind: OpKind,
        operand: &'static RawProvider,
        result: &'static RawProvider,
    },
    Unary {
        kind: OpKind,
        result: &'static RawProvider,
    },
    Composition {
        kind: OpKind,
        left: &'static RawProvider,
        right: &'static RawProvider,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// RawProvider: the type-erased provider body
// ─────────────────────────────────────────────────────────────────────────────

/// Type-erased provider body shared by the typed [`Provider<T>`] wrapper,
/// the lexer's symbol table, and the evaluator's operand stack.
pub(crate) struct RawProvider {
    pub(crate) type_id: TypeId,
    pub(crate) name: &'static str,
    /// Declared units; the first is the default (and usually canonical) unit.
    pub(crate) units: Vec<UnitData>,
    parsable: OnceCell<Vec<UnitData>>,
    defs: Vec<OperatorDef>,
    operators: OnceCell<Vec<Operator>>,
    /// For hand-authored types: the composite they collapse (lazy).
    pub(crate) composition: Option<Thunk>,
    /// For `Term`/`Ratio` providers: the two component providers.
    pub(crate) components: Option<(&'static RawProvider, &'static RawProvider)>,
}

impl RawProvider {
    pub(crate) fn new(
        type_id: TypeId,
        name: &'static str,
        units: Vec<UnitData>,
        defs: Vec<OperatorDef>,
        composition: Option<Thunk>,
        components: Option<(&'static RawProvider, &'static RawProvider)>,
    ) -> Self {
        RawProvider {
            type_id,
            name,
            units,
            parsable: OnceCell::new(),
            defs,
            operators: OnceCell::new(),
            composition,
            components,
        }
    }

    pub(crate) fn default_unit_data(&self) -> &UnitData {
        &self.units[0]
    }

    pub(crate) fn composition(&self) -> Option<&'static RawProvider> {
        self.composition.map(|thunk| thunk())
    }

    /// The authoritative unit list for parsing: every declared unit, with
    /// prefixable units expanded into their full prefix family.
    pub(crate) fn parsable(&'static self) -> &'static [UnitData] {
        self.parsable.get_or_init(|| {
            let mut units = Vec::with_capacity(self.units.len());
            for unit in &self.units {
                units.push(unit.clone());
                if let Some(family) = unit.family {
                    for prefix in family.prefixes() {
                        units.push(UnitData {
                            symbol: format!("{}{}", prefix.symbol, unit.symbol),
                            scale: unit.scale * prefix.factor,
                            family: None,
                        });
                    }
                }
            }
            units
        })
    }

    /// The resolved operator table. Built once; every provider receives
    /// addition, subtraction, and scalar multiply/divide automatically,
    /// followed by the explicitly registered operators.
    pub(crate) fn operators(&'static self) -> &'static [Operator] {
        self.operators.get_or_init(|| {
            let scalar = crate::scalar::scalar_raw();
            let mut table = vec![
                Operator::Binary {
                    kind: OpKind::Add,
                    operand: self,
                    result: self,
                },
                Operator::Binary {
                    kind: OpKind::Subtract,
                    operand: self,
                    result: self,
                },
                Operator::Binary {
                    kind: OpKind::Multiply,
                    operand: scalar,
                    result: self,
                },
                Operator::Binary {
                    kind: OpKind::Divide,
                    operand: scalar,
                    result: self,
                },
            ];
            for def in &self.defs {
                table.push(match *def {
                    OperatorDef::Binary {
                        kind,
                        operand,
                        result,
                    } => Operator::Binary {
                        kind,
                        operand: operand(),
                        result: result(),
                    },
                    OperatorDef::Unary { kind, result } => Operator::Unary {
                        kind,
                        result: result(),
                    },
                    OperatorDef::Composition { kind, left, right } => Operator::Composition {
                        kind,
                        left: left(),
                        right: right(),
                    },
                });
            }
            debug!(
                "resolved operator table for {} ({} entries)",
                self.name,
                table.len()
            );
            table
        })
    }

    pub(crate) fn find_binary(
        &'static self,
        kind: OpKind,
        rhs: TypeId,
    ) -> Option<&'static RawProvider> {
        self.operators().iter().find_map(|op| match *op {
            Operator::Binary {
                kind: k,
                operand,
                result,
            } if k == kind && operand.type_id == rhs => Some(result),
            _ => None,
        })
    }

    pub(crate) fn find_unary(&'static self, kind: OpKind) -> Option<&'static RawProvider> {
        self.operators().iter().find_map(|op| match *op {
            Operator::Unary { kind: k, result } if k == kind => Some(result),
            _ => None,
        })
    }

    /// Looks for a self-composition entry matching the operand pair; the
    /// result type of a composition entry is always this provider's own.
    pub(crate) fn find_composition(
        &'static self,
        kind: OpKind,
        left: TypeId,
        right: TypeId,
    ) -> Option<&'static RawProvider> {
        self.operators().iter().find_map(|op| match *op {
            Operator::Composition {
                kind: k,
                left: l,
                right: r,
            } if k == kind
                && ((l.type_id == left && r.type_id == right)
                    || (kind.commutative() && l.type_id == right && r.type_id == left)) =>
            {
                Some(self)
            }
            _ => None,
        })
    }

    /// Display form of a canonical value in this provider's default unit,
    /// used in evaluator diagnostics.
    pub(crate) fn describe(&self, canonical: f64) -> String {
        let default = self.default_unit_data();
        if default.symbol.is_empty() {
            format!("{}", canonical / default.scale)
        } else {
            format!("{} {}", canonical / default.scale, default.symbol)
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Typed provider
// ─────────────────────────────────────────────────────────────────────────────

/// Per-type registry of canonical unit, parsable units, and operators, and
/// the factory through which every [`Quantity<T>`] is produced.
///
/// One provider exists per quantity type, created lazily on first reference
/// and alive for the process lifetime; all access goes through
/// [`T::provider()`](QuantityType::provider), which always returns
/// `&'static Provider<T>`.
pub struct Provider<T: QuantityType> {
    pub(crate) raw: RawProvider,
    _ty: PhantomData<fn() -> T>,
}

impl<T: QuantityType> Provider<T> {
    pub(crate) fn from_raw(raw: RawProvider) -> Self {
        Provider {
            raw,
            _ty: PhantomData,
        }
    }

    /// Starts declaring a provider. `name` is the quantity-type name used in
    /// diagnostics (e.g. `"Length"`).
    pub fn builder(name: &'static str) -> ProviderBuilder<T> {
        ProviderBuilder {
            name,
            units: Vec::new(),
            defs: Vec::new(),
            composition: None,
            _ty: PhantomData,
        }
    }

    /// The diagnostic name of the quantity type.
    pub fn name(&'static self) -> &'static str {
        self.raw.name
    }

    /// The default unit: the first declared, conventionally the canonical
    /// unit with scale `1.0`.
    pub fn default_unit(&'static self) -> Unit<T> {
        Unit::from_data(&self.raw.parsable()[0])
    }

    /// Looks up a parsable unit by its exact symbol.
    pub fn unit(&'static self, symbol: &str) -> Option<Unit<T>> {
        self.raw
            .parsable()
            .iter()
            .find(|u| u.symbol == symbol)
            .map(Unit::from_data)
    }

    /// All parsable units, prefix families expanded.
    pub fn parsable_units(&'static self) -> impl Iterator<Item = Unit<T>> {
        self.raw.parsable().iter().map(Unit::from_data)
    }

    /// The factory: `amount` in `unit`, stored canonically.
    pub fn create(&'static self, amount: f64, unit: Unit<T>) -> Quantity<T> {
        Quantity::from_canonical(amount * unit.scale())
    }

    /// Factory by unit symbol; fails with [`Error::UndefinedUnit`] when the
    /// symbol is not in the parsable set.
    pub fn create_by_symbol(&'static self, amount: f64, symbol: &str) -> Result<Quantity<T>, Error> {
        let unit = self
            .unit(symbol)
            .ok_or_else(|| Error::UndefinedUnit(symbol.to_string()))?;
        Ok(self.create(amount, unit))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Declares a concrete type's provider: its unit table and its explicitly
/// registered operators.
///
/// Registration methods are bounded by the capability traits, so the runtime
/// operator table cannot disagree with the type-level declarations.
pub struct ProviderBuilder<T: QuantityType> {
    name: &'static str,
    units: Vec<(String, f64, Option<PrefixFamily>)>,
    defs: Vec<OperatorDef>,
    composition: Option<Thunk>,
    _ty: PhantomData<fn() -> T>,
}

impl<T: QuantityType> ProviderBuilder<T> {
    /// Declares a unit. The first declared unit is the default.
    pub fn unit(mut self, symbol: &str, scale: f64) -> Self {
        self.units.push((symbol.to_string(), scale, None));
        self
    }

    /// Declares a unit eligible for automatic SI-prefix expansion.
    pub fn prefixable_unit(mut self, symbol: &str, scale: f64) -> Self {
        self.units
            .push((symbol.to_string(), scale, Some(PrefixFamily::Si)));
        self
    }

    /// Declares a unit eligible for automatic binary-prefix expansion.
    pub fn binary_prefixable_unit(mut self, symbol: &str, scale: f64) -> Self {
        self.units
            .push((symbol.to_string(), scale, Some(PrefixFamily::Binary)));
        self
    }

    /// Registers `T * Rhs -> T::Output` in the operator table.
    pub fn multipliable<Rhs>(mut self) -> Self
    where
        T: Multipliable<Rhs>,
        Rhs: QuantityType,
    {
        self.defs.push(OperatorDef::Binary {
            kind: OpKind::Multiply,
            operand: raw_of::<Rhs>,
            result: raw_of::<<T as Multipliable<Rhs>>::Output>,
        });
        self
    }

    /// Registers `T / Rhs -> T::Output` in the operator table.
    pub fn divisible<Rhs>(mut self) -> Self
    where
        T: Divisible<Rhs>,
        Rhs: QuantityType,
    {
        self.defs.push(OperatorDef::Binary {
            kind: OpKind::Divide,
            operand: raw_of::<Rhs>,
            result: raw_of::<<T as Divisible<Rhs>>::Output>,
        });
        self
    }

    /// Registers `T² -> T::Output` in the operator table.
    pub fn squareable(mut self) -> Self
    where
        T: Squareable,
    {
        self.defs.push(OperatorDef::Unary {
            kind: OpKind::Square,
            result: raw_of::<<T as Squareable>::Output>,
        });
        self
    }

    /// Registers `T³ -> T::Output` in the operator table.
    pub fn cubable(mut self) -> Self
    where
        T: Cubable,
    {
        self.defs.push(OperatorDef::Unary {
            kind: OpKind::Cube,
            result: raw_of::<<T as Cubable>::Output>,
        });
        self
    }

    /// Records the composite this type collapses (see [`Composition`]),
    /// linking the two for the evaluator's result-type check and for the
    /// lexer's transitive symbol expansion.
    pub fn corresponds(mut self) -> Self
    where
        T: Composition,
    {
        self.composition = Some(raw_of::<<T as Composition>::Composite>);
        self
    }

    /// Validates the declared units and produces the provider.
    ///
    /// Fails with [`Error::InvalidUnit`] for a non-positive or non-finite
    /// scale and [`Error::DuplicateUnit`] for a repeated symbol.
    ///
    /// # Panics
    ///
    /// Panics if no unit was declared; a provider without a default unit is
    /// a definition-time programming error.
    pub fn build(self) -> Result<Provider<T>, Error> {
        assert!(
            !self.units.is_empty(),
            "provider `{}` declares no units",
            self.name
        );
        let mut seen = HashSet::new();
        let mut units = Vec::with_capacity(self.units.len());
        for (symbol, scale, family) in self.units {
            if !seen.insert(symbol.clone()) {
                return Err(Error::DuplicateUnit(symbol));
            }
            units.push(UnitData::new(symbol, scale, family)?);
        }
        debug!("built provider for {} ({} units)", self.name, units.len());
        Ok(Provider::from_raw(RawProvider::new(
            TypeId::of::<T>(),
            self.name,
            units,
            self.defs,
            self.composition,
            None,
        )))
    }
}
