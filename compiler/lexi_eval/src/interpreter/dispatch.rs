//! Execution of simple statements.

use super::Interpreter;
use crate::environment::Scope;
use crate::errors::{
    integer_overflow, type_mismatch, undefined_variable, unknown_command, EvalResult,
};
use crate::expr::evaluate;
use crate::statements::{is_call_expression, parse_statement, Statement};
use crate::value::Value;

impl Interpreter {
    /// Run one simple statement. Assignments bind in `scope` itself.
    pub(super) fn exec_statement(
        &mut self,
        line: &str,
        line_number: usize,
        scope: &mut Scope<'_>,
    ) -> EvalResult<()> {
        let statement = parse_statement(line).ok_or_else(|| unknown_command(line))?;
        tracing::trace!(line = line_number, kind = statement.kind(), "statement");

        match statement {
            Statement::Create { name, expr } => {
                let value = evaluate(expr, scope)?;
                scope.set(name, value);
            }
            Statement::Set { name, expr } => {
                let value = if is_call_expression(expr) {
                    self.call_value(expr, line_number, scope)?
                } else {
                    evaluate(expr, scope)?
                };
                scope.set(name, value);
            }
            Statement::Increase { name, amount } => {
                adjust(name, amount, scope, i64::checked_add, "addition")?;
            }
            Statement::Decrease { name, amount } => {
                adjust(name, amount, scope, i64::checked_sub, "subtraction")?;
            }
            Statement::Display { expr } => {
                let value = evaluate(expr, scope)?;
                self.print_handler.println(&value.render());
            }
            Statement::Input { name } => {
                let text = self.input_handler.read_line(&self.print_handler)?;
                let value = match text.parse::<i64>() {
                    Ok(n) => Value::int(n),
                    Err(_) => Value::Str(text),
                };
                scope.set(name, value);
            }
            Statement::Call { name, args } => {
                // Any return value is discarded.
                self.call_function(name, args, line_number, scope)?;
            }
            Statement::CreateList { name } => {
                scope.set(name, Value::empty_list());
            }
            Statement::Append { expr, name } => {
                let target = scope.require(name)?;
                let Some(list) = target.as_list().cloned() else {
                    return Err(type_mismatch(
                        format!("variable '{name}'"),
                        "list",
                        target.type_name(),
                    ));
                };
                let value = evaluate(expr, scope)?;
                list.push(value);
            }
        }
        Ok(())
    }
}

/// Shared body of `increase` and `decrease`.
fn adjust(
    name: &str,
    amount: Option<&str>,
    scope: &mut Scope<'_>,
    apply: fn(i64, i64) -> Option<i64>,
    operation: &str,
) -> EvalResult<()> {
    if !scope.has(name) {
        return Err(undefined_variable(name));
    }
    let amount = match amount {
        Some(expr) => evaluate(expr, scope)?.to_int()?,
        None => 1,
    };
    let current = scope.require(name)?.to_int()?;
    let updated = apply(current, amount).ok_or_else(|| integer_overflow(operation))?;
    scope.set(name, Value::int(updated));
    Ok(())
}
