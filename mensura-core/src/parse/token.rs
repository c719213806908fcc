//! Token stream shared by the lexer, parser, and evaluator.

use core::fmt::{self, Debug, Formatter};

use crate::provider::RawProvider;

/// A type-erased quantity value flowing through evaluation: a canonical
/// magnitude plus the provider that types it.
#[derive(Clone, Copy)]
pub(crate) struct DynQuantity {
    pub(crate) canonical: f64,
    pub(crate) provider: &'static RawProvider,
}

impl DynQuantity {
    pub(crate) fn describe(&self) -> String {
        self.provider.describe(self.canonical)
    }
}

impl Debug for DynQuantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.describe(), self.provider.name)
    }
}

/// One lexed token. The parser re-emits the same type in reverse-Polish
/// order, with parentheses consumed and [`Op::ImplicitMultiply`] inserted.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Token {
    Value(DynQuantity),
    Op(Op),
}

/// Operator and punctuation tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Adjacency multiplication, e.g. between `5` and `m` in `5 m`. Binds
    /// tighter than explicit `*` and `/` so `10m/2s` groups unit
    /// attachments before the division.
    ImplicitMultiply,
    /// Unary minus, recognized by the parser from context.
    Negate,
    Square,
    Cube,
    LParen,
    RParen,
}

impl Op {
    pub(crate) fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Subtract | Op::Negate => "-",
            Op::Multiply | Op::ImplicitMultiply => "*",
            Op::Divide => "/",
            Op::Square => "²",
            Op::Cube => "³",
            Op::LParen => "(",
            Op::RParen => ")",
        }
    }
}
