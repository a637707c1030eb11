//! Integer arithmetic by precedence climbing.
//!
//! Grammar, lowest to highest binding:
//!
//! ```text
//! additive       := multiplicative (('+' | '-') multiplicative)*
//! multiplicative := power (('*' | '/' | '%') power)*
//! power          := unary ('^' power)?
//! unary          := '-' unary | primary
//! primary        := '(' additive ')'? | INTEGER | IDENTIFIER
//! ```
//!
//! All arithmetic is checked. A missing `)` is accepted, and anything left
//! over after a complete parse is ignored.

use crate::environment::Scope;
use crate::errors::{
    division_by_zero, integer_overflow, negative_exponent, unexpected_character, EvalResult,
};

use super::is_ident_char;

/// Evaluate `expr` as integer arithmetic. Empty text evaluates to 0.
pub fn evaluate_numeric(expr: &str, scope: &Scope<'_>) -> EvalResult<i64> {
    let expr = expr.trim();
    if expr.is_empty() {
        return Ok(0);
    }
    NumericParser::new(expr, scope).parse_additive()
}

struct NumericParser<'a> {
    src: &'a str,
    /// Byte offset of the next unread character.
    pos: usize,
    scope: &'a Scope<'a>,
}

impl<'a> NumericParser<'a> {
    fn new(src: &'a str, scope: &'a Scope<'a>) -> Self {
        NumericParser { src, pos: 0, scope }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    /// Consume `c` if it is the next non-blank character.
    fn eat(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn parse_additive(&mut self) -> EvalResult<i64> {
        let mut left = self.parse_multiplicative()?;
        loop {
            if self.eat('+') {
                let right = self.parse_multiplicative()?;
                left = left
                    .checked_add(right)
                    .ok_or_else(|| integer_overflow("addition"))?;
            } else if self.eat('-') {
                let right = self.parse_multiplicative()?;
                left = left
                    .checked_sub(right)
                    .ok_or_else(|| integer_overflow("subtraction"))?;
            } else {
                return Ok(left);
            }
        }
    }

    fn parse_multiplicative(&mut self) -> EvalResult<i64> {
        let mut left = self.parse_power()?;
        loop {
            if self.eat('*') {
                let right = self.parse_power()?;
                left = left
                    .checked_mul(right)
                    .ok_or_else(|| integer_overflow("multiplication"))?;
            } else if self.eat('/') {
                let right = self.parse_power()?;
                if right == 0 {
                    return Err(division_by_zero());
                }
                left = left
                    .checked_div(right)
                    .ok_or_else(|| integer_overflow("division"))?;
            } else if self.eat('%') {
                let right = self.parse_power()?;
                if right == 0 {
                    return Err(division_by_zero());
                }
                left = left
                    .checked_rem(right)
                    .ok_or_else(|| integer_overflow("modulo"))?;
            } else {
                return Ok(left);
            }
        }
    }

    fn parse_power(&mut self) -> EvalResult<i64> {
        let base = self.parse_unary()?;
        if !self.eat('^') {
            return Ok(base);
        }
        // Right-associative: the exponent is itself a power.
        let exponent = self.parse_power()?;
        power(base, exponent)
    }

    fn parse_unary(&mut self) -> EvalResult<i64> {
        if self.eat('-') {
            let operand = self.parse_unary()?;
            return operand
                .checked_neg()
                .ok_or_else(|| integer_overflow("negation"));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> EvalResult<i64> {
        if self.eat('(') {
            let inner = self.parse_additive()?;
            self.eat(')');
            return Ok(inner);
        }

        let start = self.pos;
        while self.peek().is_some_and(is_ident_char) {
            self.bump();
        }
        let token = &self.src[start..self.pos];
        if token.is_empty() {
            return Err(unexpected_character(self.pos, self.peek()));
        }

        if token.bytes().all(|b| b.is_ascii_digit()) {
            return token
                .parse::<i64>()
                .map_err(|_| integer_overflow("integer literal"));
        }
        self.scope.require(token)?.to_int()
    }
}

/// `base ^ exponent` with a non-negative exponent.
fn power(base: i64, exponent: i64) -> EvalResult<i64> {
    if exponent < 0 {
        return Err(negative_exponent(exponent));
    }
    match base {
        0 | 1 => Ok(if exponent == 0 { 1 } else { base }),
        -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        _ => u32::try_from(exponent)
            .ok()
            .and_then(|e| base.checked_pow(e))
            .ok_or_else(|| integer_overflow("exponentiation")),
    }
}
