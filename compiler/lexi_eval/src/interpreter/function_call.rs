//! Function call evaluation methods for the Interpreter.

use super::{ControlAction, Interpreter};
use crate::diagnostics::CallFrame;
use crate::environment::Scope;
use crate::errors::{
    arity_mismatch, function_not_defined, invalid_call_syntax, no_return_value, EvalResult,
};
use crate::expr::evaluate;
use crate::stack::ensure_sufficient_stack;
use crate::statements::parse_call_expression;
use crate::value::Value;

impl Interpreter {
    /// Call `name` with comma-separated `args`, evaluated in `caller`.
    ///
    /// The activation scope chains to `caller`, not to where the function
    /// was defined. The outcome of the body is returned as-is; a `return`
    /// inside it ends here and never reaches the caller's own block.
    #[tracing::instrument(level = "debug", skip_all, fields(function = name, line = call_line))]
    pub(super) fn call_function(
        &mut self,
        name: &str,
        args: Option<&str>,
        call_line: usize,
        caller: &Scope<'_>,
    ) -> EvalResult<ControlAction> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| function_not_defined(name))?;

        let values = match args {
            Some(args) => args
                .split(',')
                .map(|arg| evaluate(arg, caller))
                .collect::<EvalResult<Vec<_>>>()?,
            None => Vec::new(),
        };
        if values.len() != function.arity() {
            return Err(arity_mismatch(name, function.arity(), values.len()));
        }

        self.call_stack.push(CallFrame {
            name: name.to_string(),
            call_line: Some(call_line),
        })?;

        let mut scope = Scope::with_parent(caller);
        for (param, value) in function.params.iter().zip(values) {
            scope.set(param.as_str(), value);
        }

        let result = ensure_sufficient_stack(|| self.exec_block(&function.body, &mut scope))
            .map_err(|err| self.call_stack.attach_backtrace(err));
        self.call_stack.pop();
        result
    }

    /// Evaluate the first `call NAME [with ARGS]` in `expr` for its value.
    ///
    /// Fails with `NoReturnValue` unless the body ran `return EXPR`.
    pub(super) fn call_value(
        &mut self,
        expr: &str,
        call_line: usize,
        scope: &Scope<'_>,
    ) -> EvalResult<Value> {
        let (name, args) = parse_call_expression(expr).ok_or_else(|| invalid_call_syntax(expr))?;
        match self.call_function(name, args, call_line, scope)? {
            ControlAction::Return(Some(value)) => Ok(value),
            ControlAction::Return(None) | ControlAction::Continue => Err(no_return_value(name)),
        }
    }
}
