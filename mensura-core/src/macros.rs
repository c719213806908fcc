//! Declaration macro for concrete quantity types.

/// Declares a quantity type together with its provider.
///
/// Expands to a zero-sized marker struct, an [`Addable`](crate::Addable)
/// impl (`Output = Self`), and a [`QuantityType`](crate::QuantityType) impl
/// whose provider is built lazily from the listed units. Unit lines come in
/// three forms, and the first listed unit is the default:
///
/// - `unit "sym" = scale;` declares a plain unit;
/// - `si unit "sym" = scale;` additionally expands the SI prefix family;
/// - `binary unit "sym" = scale;` expands the binary (`Ki`, `Mi`, …) family.
///
/// An optional trailing `ops = |builder| ...;` line registers operators;
/// the closure receives the [`ProviderBuilder`](crate::ProviderBuilder)
/// after all units and returns it.
///
/// # Examples
///
/// ```rust
/// use mensura_core::{quantity, Quantity, QuantityType};
///
/// quantity! {
///     /// Elapsed time.
///     pub struct Duration {
///         name: "Duration",
///         si unit "s" = 1.0;
///         unit "min" = 60.0;
///     }
/// }
///
/// let t: Quantity<Duration> = "90 s".parse().unwrap();
/// let minutes = Duration::provider().unit("min").unwrap();
/// assert_eq!(t.value_in(minutes), 1.5);
/// ```
///
/// # Panics
///
/// First reference to the provider panics if the unit table is malformed
/// (duplicate symbol, non-positive or non-finite scale); declaring units is
/// a definition-time concern, not a runtime fallible path.
#[macro_export]
macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            name: $display:literal,
            $($body:tt)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        $vis struct $name;

        impl $crate::Addable for $name {
            type Output = Self;
        }

        impl $crate::QuantityType for $name {
            fn provider() -> &'static $crate::Provider<Self> {
                static PROVIDER: $crate::__private::OnceCell<$crate::Provider<$name>> =
                    $crate::__private::OnceCell::new();
                PROVIDER.get_or_init(|| {
                    let builder = $crate::Provider::<$name>::builder($display);
                    let builder = $crate::quantity!(@units builder, $($body)*);
                    builder
                        .build()
                        .unwrap_or_else(|e| panic!("invalid unit table for {}: {e}", $display))
                })
            }
        }
    };

    (@units $builder:expr, ) => { $builder };
    (@units $builder:expr, si unit $sym:literal = $scale:expr; $($rest:tt)*) => {
        $crate::quantity!(@units $builder.prefixable_unit($sym, $scale), $($rest)*)
    };
    (@units $builder:expr, binary unit $sym:literal = $scale:expr; $($rest:tt)*) => {
        $crate::quantity!(@units $builder.binary_prefixable_unit($sym, $scale), $($rest)*)
    };
    (@units $builder:expr, unit $sym:literal = $scale:expr; $($rest:tt)*) => {
        $crate::quantity!(@units $builder.unit($sym, $scale), $($rest)*)
    };
    (@units $builder:expr, ops = $ops:expr;) => {
        // Pins the closure's parameter type to the builder's quantity type;
        // an unannotated `|b| ...` cannot be inferred from a direct call.
        $crate::__private::apply_ops($builder, $ops)
    };
}
