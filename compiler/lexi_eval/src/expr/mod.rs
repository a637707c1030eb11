//! Expression evaluation.
//!
//! An expression is raw text evaluated against a scope chain. Evaluation
//! tries, in order:
//!
//! 1. a single double-quoted literal, giving text;
//! 2. a bare identifier naming a reachable variable, giving its value;
//! 3. string concatenation, when the text has a `+` and either a `"` or an
//!    operand naming a text variable (see [`concat`]);
//! 4. integer arithmetic by precedence climbing (see [`numeric`]).
//!
//! Conditions for `if`/`while` live in [`condition`].

pub mod concat;
pub mod condition;
pub mod numeric;

use crate::environment::Scope;
use crate::errors::EvalResult;
use crate::value::Value;

pub use concat::evaluate_concat;
pub use condition::evaluate_condition;
pub use numeric::evaluate_numeric;

/// Evaluate `expr` against `scope`.
#[tracing::instrument(level = "trace", skip(scope))]
pub fn evaluate(expr: &str, scope: &Scope<'_>) -> EvalResult<Value> {
    let expr = expr.trim();

    if let Some(text) = single_literal(expr) {
        return Ok(Value::string(text));
    }

    if is_identifier(expr) {
        if let Some(value) = scope.get(expr) {
            return Ok(value.clone());
        }
    }

    if expr.contains('+') && (expr.contains('"') || has_text_operand(expr, scope)) {
        return evaluate_concat(expr, scope).map(Value::Str);
    }

    evaluate_numeric(expr, scope).map(Value::Int)
}

/// Contents of `"..."` when `expr` is exactly one quoted literal.
pub fn single_literal(expr: &str) -> Option<&str> {
    let inner = expr.strip_prefix('"')?.strip_suffix('"')?;
    (!inner.contains('"')).then_some(inner)
}

/// Whether `text` is one run of letters, digits and underscores.
pub fn is_identifier(text: &str) -> bool {
    !text.is_empty() && text.chars().all(is_ident_char)
}

#[inline]
pub(crate) fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether some operand of `expr` names a variable holding text.
fn has_text_operand(expr: &str, scope: &Scope<'_>) -> bool {
    expr.split(['+', '-', '*', '/', '(', ')', '%', '^'])
        .map(str::trim)
        .any(|token| matches!(scope.get(token), Some(Value::Str(_))))
}
