//! Parsing of human-written unit expressions into typed quantities.
//!
//! Three stages, each with its own failure modes:
//!
//! 1. [lexing](lexer) splits the input into value and operator tokens
//!    against the target type's reachable unit symbols;
//! 2. [parsing](parser) reorders the tokens into reverse-Polish form;
//! 3. [evaluation](evaluator) folds the stream through the providers'
//!    operator tables.
//!
//! The grammar covers numeric literals, unit symbols, `+ - * /`,
//! parentheses, `²`/`³` (also written `^2`/`^3`), unary minus, and
//! adjacency multiplication (`5 m` is `5 * m`, and `(2 m)(3 s)` multiplies
//! the groups). Evaluation is purely
//! table-driven, so the expression may traverse intermediate types freely;
//! only the final result is checked against the requested type.

mod evaluator;
mod lexer;
mod parser;
mod token;

use crate::error::Error;
use crate::provider::{raw_of, RawProvider};
use crate::quantity::{Quantity, QuantityType};

/// Parses `input` as a quantity of type `T`.
///
/// The result type must equal `T`, or be linked to `T` by a
/// [`Composition`](crate::Composition) declaration in either direction;
/// anything else is [`Error::TypeMismatch`].
///
/// # Examples
///
/// ```rust
/// use mensura_core::{Provider, Quantity, QuantityType};
/// # use once_cell::sync::OnceCell;
///
/// #[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// pub struct Span;
///
/// impl QuantityType for Span {
///     fn provider() -> &'static Provider<Self> {
///         static PROVIDER: OnceCell<Provider<Span>> = OnceCell::new();
///         PROVIDER.get_or_init(|| {
///             Provider::builder("Span")
///                 .prefixable_unit("m", 1.0)
///                 .build()
///                 .expect("well-formed unit table")
///         })
///     }
/// }
///
/// let span: Quantity<Span> = mensura_core::parse("5 m + 25 cm").unwrap();
/// let metres = Span::provider().default_unit();
/// assert_eq!(span.value_in(metres), 5.25);
/// ```
pub fn parse<T: QuantityType>(input: &str) -> Result<Quantity<T>, Error> {
    let target = raw_of::<T>();
    let tokens = lexer::tokenize(input, target)?;
    let rpn = parser::to_rpn(tokens)?;
    let result = evaluator::evaluate(rpn, target)?;
    check_result_type(target, result.provider)?;
    Ok(Quantity::from_canonical(result.canonical))
}

/// [`parse`], with every failure collapsed into `None`.
pub fn try_parse<T: QuantityType>(input: &str) -> Option<Quantity<T>> {
    parse(input).ok()
}

/// Accepts the evaluated type when it equals the target or when the two are
/// linked by a composition declaration in either direction. Both directions
/// are canonical-value passthroughs, so no conversion is applied.
fn check_result_type(
    target: &'static RawProvider,
    found: &'static RawProvider,
) -> Result<(), Error> {
    let linked = target.type_id == found.type_id
        || target
            .composition()
            .is_some_and(|c| c.type_id == found.type_id)
        || found
            .composition()
            .is_some_and(|c| c.type_id == target.type_id);
    if linked {
        Ok(())
    } else {
        Err(Error::TypeMismatch {
            expected: target.name,
            found: found.name,
        })
    }
}
