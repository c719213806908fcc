//! Lexing of unit expressions into a token stream.
//!
//! The lexer is target-directed: its symbol table is assembled from the
//! parse target's provider plus every provider reachable through component
//! and composition links, so `"10 m / 2 s"` lexes when the target is
//! `Speed` even though `m` and `s` belong to other types. A dimensionless
//! target reaches nothing through its own table, so it falls back to every
//! provider the process has resolved so far, letting ratios of like types
//! (`"10 m / 2 m"`) lex once the type has been referenced. Symbols outside
//! the resulting set fail immediately with [`Error::UndefinedUnit`].

use std::any::TypeId;
use std::collections::HashSet;

use crate::error::Error;
use crate::provider::{known_providers, Operator, RawProvider};
use crate::scalar::Scalar;

use super::token::{DynQuantity, Op, Token};

/// A resolved unit symbol: parsing `sym` yields one `scale` worth of the
/// owning provider's canonical unit.
struct Symbol {
    symbol: &'static str,
    scale: f64,
    provider: &'static RawProvider,
}

/// Every unit symbol the target can resolve, gathered by walking the type
/// graph from the target: component and composition links plus every
/// operand and result type in reachable operator tables. The target's own
/// symbols are gathered first and shadow any later duplicate.
fn symbol_table(target: &'static RawProvider) -> Vec<Symbol> {
    let mut table = Vec::new();
    let mut visited: HashSet<TypeId> = HashSet::new();
    // The dimensionless provider links to no unit-bearing type; seed the
    // walk with everything the process has resolved instead. The target is
    // pushed last so it pops first and its symbols shadow duplicates.
    let mut queue = if target.type_id == TypeId::of::<Scalar>() {
        known_providers()
    } else {
        Vec::new()
    };
    queue.push(target);
    while let Some(provider) = queue.pop() {
        if !visited.insert(provider.type_id) {
            continue;
        }
        for unit in provider.parsable() {
            if !unit.symbol.is_empty() {
                table.push(Symbol {
                    symbol: unit.symbol.as_str(),
                    scale: unit.scale,
                    provider,
                });
            }
        }
        if let Some(composite) = provider.composition() {
            queue.push(composite);
        }
        if let Some((left, right)) = provider.components {
            queue.push(left);
            queue.push(right);
        }
        for op in provider.operators() {
            match *op {
                Operator::Binary { operand, result, .. } => {
                    queue.push(operand);
                    queue.push(result);
                }
                Operator::Unary { result, .. } => queue.push(result),
                Operator::Composition { left, right, .. } => {
                    queue.push(left);
                    queue.push(right);
                }
            }
        }
    }
    table
}

/// Splits `input` into value and operator tokens.
///
/// `^2` and `^3` are normalized to `²` and `³` first. Whitespace separates
/// words but carries no meaning of its own; a word is split into a leading
/// numeric literal (lexed as a dimensionless value) and a trailing unit
/// symbol, so `5m`, `5 m`, and `5   m` all lex identically.
pub(crate) fn tokenize(input: &str, target: &'static RawProvider) -> Result<Vec<Token>, Error> {
    let table = symbol_table(target);
    let normalized = input.replace("^2", "²").replace("^3", "³");

    let mut tokens = Vec::new();
    let mut word = String::new();
    for ch in normalized.chars() {
        match ch {
            '+' | '-' | '*' | '/' | '(' | ')' | '²' | '³' => {
                flush_word(&mut word, &table, &mut tokens)?;
                tokens.push(Token::Op(match ch {
                    '+' => Op::Add,
                    '-' => Op::Subtract,
                    '*' => Op::Multiply,
                    '/' => Op::Divide,
                    '(' => Op::LParen,
                    ')' => Op::RParen,
                    '²' => Op::Square,
                    _ => Op::Cube,
                }));
            }
            ch if ch.is_whitespace() => flush_word(&mut word, &table, &mut tokens)?,
            ch => word.push(ch),
        }
    }
    flush_word(&mut word, &table, &mut tokens)?;
    Ok(tokens)
}

/// Resolves an accumulated word into up to two value tokens: the leading
/// numeric literal and the trailing unit symbol. A unit token's canonical
/// value is its scale, i.e. "one of this unit"; adjacency multiplication
/// later attaches it to the preceding number.
fn flush_word(word: &mut String, table: &[Symbol], tokens: &mut Vec<Token>) -> Result<(), Error> {
    if word.is_empty() {
        return Ok(());
    }
    let split = word
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(word.len());
    let (number, symbol) = word.split_at(split);

    if !number.is_empty() {
        let value: f64 = number
            .parse()
            .map_err(|_| Error::UnexpectedToken(number.to_string()))?;
        tokens.push(Token::Value(DynQuantity {
            canonical: value,
            provider: crate::scalar::scalar_raw(),
        }));
    }
    if !symbol.is_empty() {
        let entry = table
            .iter()
            .find(|s| s.symbol == symbol)
            .ok_or_else(|| Error::UndefinedUnit(symbol.to_string()))?;
        tokens.push(Token::Value(DynQuantity {
            canonical: entry.scale,
            provider: entry.provider,
        }));
    }
    word.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{raw_of, Provider};
    use crate::quantity::QuantityType;
    use crate::scalar::Scalar;
    use once_cell::sync::OnceCell;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    struct Span;

    impl QuantityType for Span {
        fn provider() -> &'static Provider<Self> {
            static PROVIDER: OnceCell<Provider<Span>> = OnceCell::new();
            PROVIDER.get_or_init(|| {
                Provider::builder("Span")
                    .prefixable_unit("m", 1.0)
                    .unit("ft", 0.3048)
                    .build()
                    .unwrap()
            })
        }
    }

    fn lex(input: &str) -> Result<Vec<Token>, Error> {
        tokenize(input, raw_of::<Span>())
    }

    fn kinds(tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| match t {
                Token::Value(v) => format!("v:{}", v.canonical),
                Token::Op(op) => format!("op:{}", op.symbol()),
            })
            .collect()
    }

    #[test]
    fn number_and_symbol_split_regardless_of_spacing() {
        for input in ["5m", "5 m", "  5   m "] {
            let tokens = lex(input).unwrap();
            assert_eq!(kinds(&tokens), ["v:5", "v:1"], "input {input:?}");
        }
    }

    #[test]
    fn unit_token_carries_its_scale() {
        let tokens = lex("2 km").unwrap();
        match tokens[1] {
            Token::Value(v) => {
                assert_eq!(v.canonical, 1000.0);
                assert_eq!(v.provider.name, "Span");
            }
            _ => panic!("expected a value token"),
        }
    }

    #[test]
    fn caret_powers_normalize_to_superscripts() {
        let tokens = lex("5m^2").unwrap();
        assert_eq!(kinds(&tokens), ["v:5", "v:1", "op:²"]);
        let tokens = lex("5m^3").unwrap();
        assert_eq!(kinds(&tokens), ["v:5", "v:1", "op:³"]);
    }

    #[test]
    fn operators_and_parens_lex_as_delimiters() {
        let tokens = lex("(5 m + 3 ft) * 2").unwrap();
        assert_eq!(
            kinds(&tokens),
            ["op:(", "v:5", "v:1", "op:+", "v:3", "v:0.3048", "op:)", "op:*", "v:2"]
        );
    }

    #[test]
    fn unknown_symbol_is_rejected_at_lex_time() {
        assert_eq!(lex("5 qq").unwrap_err(), Error::UndefinedUnit("qq".into()));
    }

    #[test]
    fn malformed_number_is_rejected() {
        assert_eq!(
            lex("5.5.5 m").unwrap_err(),
            Error::UnexpectedToken("5.5.5".into())
        );
    }

    #[test]
    fn dimensionless_target_borrows_resolved_providers() {
        // Span's symbols enter the process roster on first resolution.
        raw_of::<Span>();
        let tokens = tokenize("5 m / 2 m", raw_of::<Scalar>()).unwrap();
        assert_eq!(kinds(&tokens), ["v:5", "v:1", "op:/", "v:2", "v:1"]);
    }

    #[test]
    fn bare_number_lexes_as_scalar() {
        let tokens = tokenize("42", raw_of::<Scalar>()).unwrap();
        match tokens[0] {
            Token::Value(v) => assert_eq!(v.provider.name, "Scalar"),
            _ => panic!("expected a value token"),
        }
    }
}
