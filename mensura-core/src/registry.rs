//! Process-wide registry memoizing generically built composite providers.
//!
//! `Term<A, B>` and `Ratio<A, B>` have no hand-authored provider; their unit
//! and operator tables are derived from the component providers on first
//! reference and cached here for the process lifetime, so repeated
//! references to the same composite observe one identical provider.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Mutex;

use log::debug;
use once_cell::sync::Lazy;

use crate::provider::{OpKind, OperatorDef, Provider, RawProvider, Thunk};
use crate::quantity::QuantityType;
use crate::unit::UnitData;

static REGISTRY: Lazy<Mutex<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Which combination a composite provider represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CompositeOp {
    /// `Term<A, B>`: the product of the components.
    Product,
    /// `Ratio<A, B>`: the quotient of the components.
    Quotient,
}

impl CompositeOp {
    fn join(self, left: &str, right: &str) -> String {
        match self {
            CompositeOp::Product => format!("{left}·{right}"),
            CompositeOp::Quotient => format!("{left}/{right}"),
        }
    }

    fn combine(self, left: f64, right: f64) -> f64 {
        match self {
            CompositeOp::Product => left * right,
            CompositeOp::Quotient => left / right,
        }
    }
}

/// Returns the memoized provider for the composite type `T`, building it
/// from the component providers on first reference.
///
/// The component providers are resolved *before* the registry lock is taken,
/// so a nested composite (a component that is itself a `Term` or `Ratio`)
/// re-enters this function without the lock held.
pub(crate) fn composite_provider<T, A, B>(op: CompositeOp) -> &'static Provider<T>
where
    T: QuantityType,
    A: QuantityType,
    B: QuantityType,
{
    let left = crate::provider::raw_of::<A>();
    let right = crate::provider::raw_of::<B>();
    let left_units = left.parsable();
    let right_units = right.parsable();

    let mut registry = REGISTRY
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(&existing) = registry.get(&TypeId::of::<T>()) {
        return downcast::<T>(existing);
    }

    let name: &'static str = Box::leak(op.join(left.name, right.name).into_boxed_str());
    let mut units = Vec::with_capacity(left_units.len() * right_units.len());
    for lu in left_units {
        for ru in right_units {
            // Scale invariants of the components carry over: the product or
            // quotient of positive finite scales is positive and finite.
            units.push(UnitData {
                symbol: op.join(&lu.symbol, &ru.symbol),
                scale: op.combine(lu.scale, ru.scale),
                family: None,
            });
        }
    }

    let defs = composite_defs(op, raw_of_thunk::<A>(), raw_of_thunk::<B>());
    let provider: &'static Provider<T> = Box::leak(Box::new(Provider::from_raw(RawProvider::new(
        TypeId::of::<T>(),
        name,
        units,
        defs,
        None,
        Some((left, right)),
    ))));
    debug!(
        "registered composite provider {} ({} derived units)",
        name,
        left_units.len() * right_units.len()
    );
    registry.insert(TypeId::of::<T>(), provider as &'static (dyn Any + Send + Sync));
    provider
}

fn raw_of_thunk<T: QuantityType>() -> Thunk {
    crate::provider::raw_of::<T>
}

/// The operator table a composite is born with, beyond the defaults every
/// provider receives.
///
/// A product cancels either component by division and records itself as the
/// combination `A * B`; a quotient recovers its numerator by multiplying
/// back the denominator and records itself as `A / B`.
fn composite_defs(op: CompositeOp, left: Thunk, right: Thunk) -> Vec<OperatorDef> {
    match op {
        CompositeOp::Product => vec![
            OperatorDef::Binary {
                kind: OpKind::Divide,
                operand: right,
                result: left,
            },
            OperatorDef::Binary {
                kind: OpKind::Divide,
                operand: left,
                result: right,
            },
            OperatorDef::Composition {
                kind: OpKind::Multiply,
                left,
                right,
            },
        ],
        CompositeOp::Quotient => vec![
            OperatorDef::Binary {
                kind: OpKind::Multiply,
                operand: right,
                result: left,
            },
            OperatorDef::Composition {
                kind: OpKind::Divide,
                left,
                right,
            },
        ],
    }
}

fn downcast<T: QuantityType>(entry: &'static (dyn Any + Send + Sync)) -> &'static Provider<T> {
    // The map is keyed by `TypeId::of::<T>()` and only ever stores the
    // matching `Provider<T>`, so the downcast cannot fail.
    entry
        .downcast_ref::<Provider<T>>()
        .expect("registry entry stored under a foreign TypeId")
}
