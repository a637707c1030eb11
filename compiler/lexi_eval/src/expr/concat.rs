//! String concatenation.
//!
//! The text is scanned left to right. Quoted regions are copied verbatim.
//! Between quotes, each unquoted `+` ends a segment, and a segment becomes:
//!
//! - the rendered value of the variable it names, or else
//! - its integer value as arithmetic, or else
//! - its own raw text.
//!
//! Only unquoted `+` splits, so `"Score: " + 10 + 5` yields `Score: 105`.
//! A segment still pending when a quote opens is evaluated as arithmetic.

use crate::environment::Scope;
use crate::errors::EvalResult;

use super::numeric::evaluate_numeric;

/// Evaluate `expr` as a concatenation. The result is always text.
pub fn evaluate_concat(expr: &str, scope: &Scope<'_>) -> EvalResult<String> {
    let mut result = String::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in expr.chars() {
        match c {
            '"' if in_quotes => {
                result.push_str(&current);
                current.clear();
                in_quotes = false;
            }
            '"' => {
                let part = current.trim();
                if !part.is_empty() && part != "+" {
                    let n = evaluate_numeric(part, scope)?;
                    result.push_str(&n.to_string());
                }
                current.clear();
                in_quotes = true;
            }
            '+' if !in_quotes => {
                push_segment(&mut result, current.trim(), scope);
                current.clear();
            }
            _ => current.push(c),
        }
    }

    let part = current.trim();
    if part != "+" {
        push_segment(&mut result, part, scope);
    }
    Ok(result)
}

fn push_segment(out: &mut String, part: &str, scope: &Scope<'_>) {
    if part.is_empty() {
        return;
    }
    if let Some(value) = scope.get(part) {
        out.push_str(&value.render());
        return;
    }
    match evaluate_numeric(part, scope) {
        Ok(n) => out.push_str(&n.to_string()),
        Err(_) => out.push_str(part),
    }
}
