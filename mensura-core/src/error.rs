//! Error taxonomy for quantity definition and unit-expression parsing.

use thiserror::Error;

/// Every failure the core can report.
///
/// Each variant is detected and reported by the layer that first observes it:
/// the provider builder rejects malformed unit tables, the lexer rejects
/// unknown symbols, the parser rejects structural imbalance, and the
/// evaluator rejects dispatch and result-type failures. Nothing is silently
/// coerced or defaulted.
///
/// [`try_parse`](crate::parse::try_parse) converts every variant into `None`;
/// [`parse`](crate::parse::parse) surfaces it as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A unit was declared with a non-positive or non-finite conversion scale.
    #[error("invalid unit `{symbol}`: scale {scale} must be positive and finite")]
    InvalidUnit {
        /// Symbol of the offending unit.
        symbol: String,
        /// The rejected conversion scale.
        scale: f64,
    },

    /// Two units of the same provider were declared with the same symbol.
    #[error("duplicate unit symbol `{0}`")]
    DuplicateUnit(String),

    /// An expression names a unit symbol the target type cannot resolve.
    ///
    /// Detected at lex time, never deferred; carries the exact substring.
    #[error("undefined unit `{0}`")]
    UndefinedUnit(String),

    /// Unbalanced parentheses, in either direction.
    #[error("mismatched parenthesis")]
    MismatchedParenthesis,

    /// The expression is structurally malformed (stray operator, leftover
    /// operands, empty input, or an unparsable numeric literal).
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),

    /// No operator registration matches the operand types, in either
    /// evaluation order.
    #[error("operator `{operator}` cannot be applied to {operands}")]
    OperatorEvaluationFailed {
        /// The operator symbol, e.g. `*` or `²`.
        operator: String,
        /// Display forms of the operand(s), e.g. ``` `5 m` and `3 s` ```.
        operands: String,
    },

    /// The evaluated expression has a type neither equal nor linked by a
    /// composition declaration to the requested one.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Name of the requested quantity type.
        expected: &'static str,
        /// Name of the type the expression actually evaluated to.
        found: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_undefined_unit() {
        let err = Error::UndefinedUnit("zz".into());
        assert_eq!(err.to_string(), "undefined unit `zz`");
    }

    #[test]
    fn display_invalid_unit() {
        let err = Error::InvalidUnit {
            symbol: "m".into(),
            scale: -1.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid unit `m`: scale -1 must be positive and finite"
        );
    }

    #[test]
    fn display_type_mismatch() {
        let err = Error::TypeMismatch {
            expected: "Area",
            found: "Length",
        };
        assert_eq!(err.to_string(), "type mismatch: expected Area, found Length");
    }
}
