//! Formula evaluation.
//!
//! Formulas are evaluated strictly left to right with no operator
//! precedence and no parentheses: `1,1 + 1,2 * 1,3` is `(1,1 + 1,2) * 1,3`.
//! Existing formulas depend on this order, so it must not change.

use regex::Regex;
use std::sync::OnceLock;

use super::cell::CellValue;
use super::cell_ref::CellAddress;
use super::deps::{parse_leading_number, parse_reference};

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply with IEEE-754 semantics; division by zero is not guarded.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

/// Evaluate a formula, reading referenced cells through `read_cell`.
///
/// The first operand seeds the result; every later operand is combined with
/// the most recently seen operator. An operand that arrives before any
/// operator has been seen (after the first) is skipped. Formulas without a
/// usable operand evaluate to 0.
pub fn evaluate<F>(formula: &str, read_cell: F) -> f64
where
    F: Fn(&CellAddress) -> CellValue,
{
    let mut result: Option<f64> = None;
    let mut current_op: Option<Operator> = None;

    for token in tokenize(formula) {
        let token = token.trim();

        let operand = if token.contains(',') {
            match parse_reference(token) {
                Some(addr) => read_cell(&addr).as_number(),
                None => continue,
            }
        } else if let Some(op) = Operator::from_symbol(token) {
            current_op = Some(op);
            continue;
        } else if let Some(n) = parse_leading_number(token) {
            n
        } else {
            continue;
        };

        result = match (result, current_op) {
            (None, _) => Some(operand),
            (Some(acc), Some(op)) => Some(op.apply(acc, operand)),
            (Some(acc), None) => Some(acc),
        };
    }

    result.unwrap_or(0.0)
}

/// Split on single whitespace/operator characters, keeping each separator
/// as its own token.
fn tokenize(formula: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut last = 0;
    for sep in separator_re().find_iter(formula) {
        tokens.push(&formula[last..sep.start()]);
        tokens.push(sep.as_str());
        last = sep.end();
    }
    tokens.push(&formula[last..]);
    tokens
}

fn separator_re() -> &'static Regex {
    static SEPARATOR_RE: OnceLock<Regex> = OnceLock::new();
    SEPARATOR_RE.get_or_init(|| {
        Regex::new(r"[\s+\-*/]").expect("formula separator regex must compile")
    })
}
