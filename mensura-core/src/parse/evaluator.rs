//! Stack evaluation of the reverse-Polish token stream.
//!
//! Every operand is a [`DynQuantity`]; applying an operator is a lookup in
//! the operand providers' operator tables, so the evaluator itself knows
//! nothing about any concrete quantity type. Dispatch tries, in order:
//!
//! 1. the left operand's table;
//! 2. for commutative operators, the right operand's table with the
//!    operands swapped;
//! 3. the parse target's composition entries (and those of the composite
//!    the target declares itself equivalent to), which is what lets
//!    `"10 m / 2 s"` evaluate when neither `m` nor `s` alone knows the
//!    target type;
//! 4. for division of two like-typed operands, dimensionless cancellation.

use log::trace;

use crate::error::Error;
use crate::provider::{OpKind, RawProvider};

use super::token::{DynQuantity, Op, Token};

/// Folds an RPN stream into a single value.
///
/// A stray operator or a leftover operand surfaces as
/// [`Error::UnexpectedToken`]; a dispatch miss as
/// [`Error::OperatorEvaluationFailed`]. The caller checks the result type.
pub(crate) fn evaluate(
    rpn: Vec<Token>,
    target: &'static RawProvider,
) -> Result<DynQuantity, Error> {
    let mut stack: Vec<DynQuantity> = Vec::new();
    for token in rpn {
        match token {
            Token::Value(value) => stack.push(value),
            Token::Op(Op::Negate) => {
                let operand = pop(&mut stack, Op::Negate)?;
                stack.push(DynQuantity {
                    canonical: -operand.canonical,
                    provider: operand.provider,
                });
            }
            Token::Op(op @ (Op::Square | Op::Cube)) => {
                let kind = if op == Op::Square {
                    OpKind::Square
                } else {
                    OpKind::Cube
                };
                let operand = pop(&mut stack, op)?;
                let result = operand.provider.find_unary(kind).ok_or_else(|| {
                    Error::OperatorEvaluationFailed {
                        operator: kind.symbol().to_string(),
                        operands: format!("`{}`", operand.describe()),
                    }
                })?;
                stack.push(DynQuantity {
                    canonical: kind.apply_unary(operand.canonical),
                    provider: result,
                });
            }
            Token::Op(op) => {
                let kind = match op {
                    Op::Add => OpKind::Add,
                    Op::Subtract => OpKind::Subtract,
                    Op::Multiply | Op::ImplicitMultiply => OpKind::Multiply,
                    Op::Divide => OpKind::Divide,
                    // Parentheses never reach the RPN stream.
                    _ => return Err(Error::UnexpectedToken(op.symbol().to_string())),
                };
                let right = pop(&mut stack, op)?;
                let left = pop(&mut stack, op)?;
                let result = resolve_binary(kind, &left, &right, target).ok_or_else(|| {
                    Error::OperatorEvaluationFailed {
                        operator: kind.symbol().to_string(),
                        operands: format!("`{}` and `{}`", left.describe(), right.describe()),
                    }
                })?;
                let canonical = kind.apply(left.canonical, right.canonical);
                trace!(
                    "{} {} {} -> {} [{}]",
                    left.describe(),
                    kind.symbol(),
                    right.describe(),
                    canonical,
                    result.name
                );
                stack.push(DynQuantity { canonical, provider: result });
            }
        }
    }

    let last = stack.pop();
    match (last, stack.is_empty()) {
        (Some(result), true) => Ok(result),
        (Some(_), false) => Err(Error::UnexpectedToken(format!(
            "leftover operand `{}`",
            stack[stack.len() - 1].describe()
        ))),
        (None, _) => Err(Error::UnexpectedToken("empty expression".to_string())),
    }
}

fn pop(stack: &mut Vec<DynQuantity>, op: Op) -> Result<DynQuantity, Error> {
    stack
        .pop()
        .ok_or_else(|| Error::UnexpectedToken(op.symbol().to_string()))
}

fn resolve_binary(
    kind: OpKind,
    left: &DynQuantity,
    right: &DynQuantity,
    target: &'static RawProvider,
) -> Option<&'static RawProvider> {
    let left_ty = left.provider.type_id;
    let right_ty = right.provider.type_id;

    if let Some(result) = left.provider.find_binary(kind, right_ty) {
        return Some(result);
    }
    if kind.commutative() {
        if let Some(result) = right.provider.find_binary(kind, left_ty) {
            return Some(result);
        }
    }
    if let Some(result) = target.find_composition(kind, left_ty, right_ty) {
        return Some(result);
    }
    if let Some(composite) = target.composition() {
        if let Some(result) = composite.find_composition(kind, left_ty, right_ty) {
            return Some(result);
        }
    }
    if kind == OpKind::Divide && left_ty == right_ty {
        return Some(crate::scalar::scalar_raw());
    }
    None
}
