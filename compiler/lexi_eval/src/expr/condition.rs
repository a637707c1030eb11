//! Conditions for `if`, `elseif` and `while`.
//!
//! A condition is `LEFT OP RIGHT`. Operators are searched in the order
//! `==`, `!=`, `>=`, `<=`, `>`, `<`, and the first one present splits the
//! text once. Integers compare numerically. When either side is text,
//! `==` and `!=` compare renderings and the ordering operators yield false.
//! A condition with no operator is false.

use std::cmp::Ordering;

use crate::environment::Scope;
use crate::errors::EvalResult;
use crate::value::Value;

use super::evaluate;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    GtEq,
    LtEq,
    Gt,
    Lt,
}

impl CompareOp {
    /// Search order matters: two-character operators come first.
    pub const SEARCH_ORDER: [(&'static str, CompareOp); 6] = [
        ("==", CompareOp::Eq),
        ("!=", CompareOp::NotEq),
        (">=", CompareOp::GtEq),
        ("<=", CompareOp::LtEq),
        (">", CompareOp::Gt),
        ("<", CompareOp::Lt),
    ];

    fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Eq => ordering.is_eq(),
            CompareOp::NotEq => ordering.is_ne(),
            CompareOp::GtEq => ordering.is_ge(),
            CompareOp::LtEq => ordering.is_le(),
            CompareOp::Gt => ordering.is_gt(),
            CompareOp::Lt => ordering.is_lt(),
        }
    }
}

/// Split `condition` at its first operator.
pub fn split_condition(condition: &str) -> Option<(&str, CompareOp, &str)> {
    CompareOp::SEARCH_ORDER.iter().find_map(|&(symbol, op)| {
        condition
            .split_once(symbol)
            .map(|(left, right)| (left.trim(), op, right.trim()))
    })
}

/// Evaluate `condition` against `scope`.
pub fn evaluate_condition(condition: &str, scope: &Scope<'_>) -> EvalResult<bool> {
    let Some((left, op, right)) = split_condition(condition.trim()) else {
        return Ok(false);
    };
    let left = evaluate(left, scope)?;
    let right = evaluate(right, scope)?;

    Ok(match (&left, &right) {
        (Value::Int(l), Value::Int(r)) => op.holds(l.cmp(r)),
        (Value::Str(_), _) | (_, Value::Str(_)) => match op {
            CompareOp::Eq => left.render() == right.render(),
            CompareOp::NotEq => left.render() != right.render(),
            _ => false,
        },
        _ => false,
    })
}
