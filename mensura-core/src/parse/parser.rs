//! Infix-to-postfix conversion (shunting-yard).
//!
//! Precedence: `+`/`-` bind loosest, explicit `*`/`/` next, and adjacency
//! multiplication together with unary minus tightest, so `10m/2s` groups as
//! `(10·m)/(2·s)`. `²` and `³` are postfix and bypass the operator stack
//! entirely, binding to the single value they follow.

use crate::error::Error;

use super::token::{Op, Token};

fn precedence(op: Op) -> u8 {
    match op {
        Op::Add | Op::Subtract => 1,
        Op::Multiply | Op::Divide => 2,
        Op::ImplicitMultiply | Op::Negate => 3,
        _ => 0,
    }
}

/// Whether a token can end an operand, which is what distinguishes binary
/// from unary `+`/`-` and marks where adjacency multiplication applies.
fn ends_operand(token: &Token) -> bool {
    matches!(
        token,
        Token::Value(_) | Token::Op(Op::RParen) | Token::Op(Op::Square) | Token::Op(Op::Cube)
    )
}

/// Reorders the lexed token stream into reverse-Polish order, inserting
/// [`Op::ImplicitMultiply`] wherever an operand start (a value or an
/// opening parenthesis) directly follows an operand end, and resolving
/// unary signs. Fails with [`Error::MismatchedParenthesis`] when the
/// parentheses do not balance.
pub(crate) fn to_rpn(tokens: Vec<Token>) -> Result<Vec<Token>, Error> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Op> = Vec::new();
    let mut prev: Option<Token> = None;

    for token in tokens {
        match token {
            Token::Value(_) => {
                if prev.as_ref().is_some_and(ends_operand) {
                    push_left_assoc(Op::ImplicitMultiply, &mut stack, &mut output);
                }
                output.push(token);
            }
            Token::Op(op @ (Op::Square | Op::Cube)) => output.push(Token::Op(op)),
            Token::Op(op @ (Op::Add | Op::Subtract)) => {
                if prev.as_ref().is_some_and(ends_operand) {
                    push_left_assoc(op, &mut stack, &mut output);
                } else if op == Op::Subtract {
                    // Unary minus; unary plus is meaningless and dropped.
                    push_right_assoc(Op::Negate, &mut stack, &mut output);
                }
            }
            Token::Op(op @ (Op::Multiply | Op::Divide)) => {
                push_left_assoc(op, &mut stack, &mut output);
            }
            Token::Op(Op::LParen) => {
                if prev.as_ref().is_some_and(ends_operand) {
                    push_left_assoc(Op::ImplicitMultiply, &mut stack, &mut output);
                }
                stack.push(Op::LParen);
            }
            Token::Op(Op::RParen) => loop {
                match stack.pop() {
                    Some(Op::LParen) => break,
                    Some(op) => output.push(Token::Op(op)),
                    None => return Err(Error::MismatchedParenthesis),
                }
            },
            Token::Op(op) => return Err(Error::UnexpectedToken(op.symbol().to_string())),
        }
        prev = Some(token);
    }

    while let Some(op) = stack.pop() {
        if op == Op::LParen {
            return Err(Error::MismatchedParenthesis);
        }
        output.push(Token::Op(op));
    }
    Ok(output)
}

fn push_left_assoc(op: Op, stack: &mut Vec<Op>, output: &mut Vec<Token>) {
    while let Some(&top) = stack.last() {
        if top != Op::LParen && precedence(top) >= precedence(op) {
            output.push(Token::Op(top));
            stack.pop();
        } else {
            break;
        }
    }
    stack.push(op);
}

fn push_right_assoc(op: Op, stack: &mut Vec<Op>, output: &mut Vec<Token>) {
    while let Some(&top) = stack.last() {
        if top != Op::LParen && precedence(top) > precedence(op) {
            output.push(Token::Op(top));
            stack.pop();
        } else {
            break;
        }
    }
    stack.push(op);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::token::DynQuantity;
    use crate::scalar::scalar_raw;

    fn num(value: f64) -> Token {
        Token::Value(DynQuantity {
            canonical: value,
            provider: scalar_raw(),
        })
    }

    fn shape(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match t {
                Token::Value(v) => format!("{}", v.canonical),
                Token::Op(op) => format!("{op:?}"),
            })
            .collect()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        // 1 + 2 * 3 => 1 2 3 * +
        let rpn = to_rpn(vec![
            num(1.0),
            Token::Op(Op::Add),
            num(2.0),
            Token::Op(Op::Multiply),
            num(3.0),
        ])
        .unwrap();
        assert_eq!(shape(&rpn), ["1", "2", "3", "Multiply", "Add"]);
    }

    #[test]
    fn adjacency_binds_tighter_than_division() {
        // 10 m / 2 s => 10 m ⊗ 2 s ⊗ /
        let rpn = to_rpn(vec![
            num(10.0),
            num(1.0),
            Token::Op(Op::Divide),
            num(2.0),
            num(3.0),
        ])
        .unwrap();
        assert_eq!(
            shape(&rpn),
            ["10", "1", "ImplicitMultiply", "2", "3", "ImplicitMultiply", "Divide"]
        );
    }

    #[test]
    fn division_is_left_associative() {
        // 8 / 2 / 2 => 8 2 / 2 /
        let rpn = to_rpn(vec![
            num(8.0),
            Token::Op(Op::Divide),
            num(2.0),
            Token::Op(Op::Divide),
            num(2.0),
        ])
        .unwrap();
        assert_eq!(shape(&rpn), ["8", "2", "Divide", "2", "Divide"]);
    }

    #[test]
    fn postfix_powers_bind_to_the_preceding_value() {
        // 5 m ² => 5 m ² ⊗ : the square applies to the unit alone.
        let rpn = to_rpn(vec![num(5.0), num(1.0), Token::Op(Op::Square)]).unwrap();
        assert_eq!(shape(&rpn), ["5", "1", "Square", "ImplicitMultiply"]);
    }

    #[test]
    fn adjacency_carries_across_parentheses() {
        // (1 + 2)(3) => 1 2 + 3 ⊗
        let rpn = to_rpn(vec![
            Token::Op(Op::LParen),
            num(1.0),
            Token::Op(Op::Add),
            num(2.0),
            Token::Op(Op::RParen),
            Token::Op(Op::LParen),
            num(3.0),
            Token::Op(Op::RParen),
        ])
        .unwrap();
        assert_eq!(shape(&rpn), ["1", "2", "Add", "3", "ImplicitMultiply"]);

        // 2 (3) => 2 3 ⊗
        let rpn = to_rpn(vec![
            num(2.0),
            Token::Op(Op::LParen),
            num(3.0),
            Token::Op(Op::RParen),
        ])
        .unwrap();
        assert_eq!(shape(&rpn), ["2", "3", "ImplicitMultiply"]);
    }

    #[test]
    fn leading_minus_is_unary() {
        let rpn = to_rpn(vec![num(5.0), Token::Op(Op::Subtract), num(3.0)]).unwrap();
        assert_eq!(shape(&rpn), ["5", "3", "Subtract"]);

        let rpn = to_rpn(vec![Token::Op(Op::Subtract), num(3.0)]).unwrap();
        assert_eq!(shape(&rpn), ["3", "Negate"]);
    }

    #[test]
    fn unary_plus_is_dropped() {
        let rpn = to_rpn(vec![Token::Op(Op::Add), num(3.0)]).unwrap();
        assert_eq!(shape(&rpn), ["3"]);
    }

    #[test]
    fn parentheses_override_precedence() {
        // (1 + 2) * 3 => 1 2 + 3 *
        let rpn = to_rpn(vec![
            Token::Op(Op::LParen),
            num(1.0),
            Token::Op(Op::Add),
            num(2.0),
            Token::Op(Op::RParen),
            Token::Op(Op::Multiply),
            num(3.0),
        ])
        .unwrap();
        assert_eq!(shape(&rpn), ["1", "2", "Add", "3", "Multiply"]);
    }

    #[test]
    fn unbalanced_parens_are_rejected_both_ways() {
        assert_eq!(
            to_rpn(vec![Token::Op(Op::LParen), num(1.0)]).unwrap_err(),
            Error::MismatchedParenthesis
        );
        assert_eq!(
            to_rpn(vec![num(1.0), Token::Op(Op::RParen)]).unwrap_err(),
            Error::MismatchedParenthesis
        );
    }
}
