//! The block executor.
//!
//! A block is a slice of source lines. Headers (`if`, `while`/`repeat`,
//! `for`/`loop`, `function`/`define function`) own every line up to their
//! matching terminator (`end`, `done` or `finish`), found by counting
//! nesting depth each time the header is reached. Handlers receive the body
//! as a sub-slice and recurse into [`Interpreter::exec_block`]; control
//! comes back as a [`ControlAction`], never as a line index.

use std::sync::LazyLock;

use regex::Regex;

use super::{ControlAction, Interpreter};
use crate::environment::Scope;
use crate::errors::{malformed_block_header, EvalResult};
use crate::expr::{evaluate, evaluate_condition};
use crate::function::Function;
use crate::program::SourceLine;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

static FOR_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:for|loop)\s+(\w+)\s+from\s+(.+?)\s+to\s+(.+)$").ok()
});

static FUNCTION_HEADER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:define\s+)?function\s+(\w+)(?:\s+(.+))?$").ok()
});

/// What a trimmed line is, as far as block structure goes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Empty, or a `#` / `//` comment.
    Blank,
    Return(Option<&'a str>),
    If(&'a str),
    ElseIf(&'a str),
    Else,
    While(&'a str),
    For,
    Function,
    Terminator,
    Statement,
}

impl LineKind<'_> {
    /// Whether this line opens a block that needs a terminator.
    pub(crate) fn opens_block(self) -> bool {
        matches!(
            self,
            LineKind::If(_) | LineKind::While(_) | LineKind::For | LineKind::Function
        )
    }
}

/// Classify one trimmed line. Keywords are case-insensitive.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
        return LineKind::Blank;
    }
    // ASCII lowering keeps byte offsets valid for slicing `line`.
    let lower = line.to_ascii_lowercase();
    let rest = move |keyword: &str| line[keyword.len()..].trim();

    match lower.as_str() {
        "end" | "done" | "finish" => return LineKind::Terminator,
        "else" => return LineKind::Else,
        "return" => return LineKind::Return(None),
        _ => {}
    }

    if lower.starts_with("return ") {
        LineKind::Return(Some(rest("return ")))
    } else if lower.starts_with("if ") {
        LineKind::If(rest("if "))
    } else if lower.starts_with("elseif ") {
        LineKind::ElseIf(rest("elseif "))
    } else if lower.starts_with("while ") {
        LineKind::While(rest("while "))
    } else if lower.starts_with("repeat ") {
        LineKind::While(rest("repeat "))
    } else if lower.starts_with("for ") || lower.starts_with("loop ") {
        LineKind::For
    } else if lower.starts_with("function ") || lower.starts_with("define function ") {
        LineKind::Function
    } else {
        LineKind::Statement
    }
}

/// Index of the terminator matching the header at `start`, or `lines.len()`
/// when the block is never closed.
pub(crate) fn find_block_end(lines: &[SourceLine], start: usize) -> usize {
    let mut depth = 0usize;
    for (offset, line) in lines[start..].iter().enumerate() {
        let kind = classify(line.text.trim());
        if kind.opens_block() {
            depth += 1;
        } else if kind == LineKind::Terminator {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return start + offset;
            }
        }
    }
    lines.len()
}

/// First `elseif` or `else` at the top nesting level of an `if` body.
fn find_branch(body: &[SourceLine]) -> Option<(usize, LineKind<'_>)> {
    let mut depth = 0usize;
    for (index, line) in body.iter().enumerate() {
        let kind = classify(line.text.trim());
        match kind {
            LineKind::ElseIf(_) | LineKind::Else if depth == 0 => return Some((index, kind)),
            LineKind::Terminator => depth = depth.saturating_sub(1),
            _ if kind.opens_block() => depth += 1,
            _ => {}
        }
    }
    None
}

/// What to do after one line.
enum Step {
    /// Continue at this index.
    Next(usize),
    /// Leave the current range.
    Stop(ControlAction),
}

impl Step {
    /// Resume after a block ending at `end`, unless it returned.
    fn after_block(action: ControlAction, end: usize) -> Self {
        match action {
            ControlAction::Continue => Step::Next(end + 1),
            ControlAction::Return(value) => Step::Stop(ControlAction::Return(value)),
        }
    }
}

impl Interpreter {
    /// Execute `lines` in order against `scope`.
    ///
    /// Errors are tagged with the number of the line that raised them; a
    /// line already tagged by a nested block keeps its own number.
    #[tracing::instrument(level = "debug", skip_all, fields(lines = lines.len()))]
    pub(crate) fn exec_block(
        &mut self,
        lines: &[SourceLine],
        scope: &mut Scope<'_>,
    ) -> EvalResult<ControlAction> {
        let mut index = 0;
        while index < lines.len() {
            let line = &lines[index];
            let text = line.text.trim();
            if self.debug {
                self.print_handler
                    .println(&format!("[DEBUG] Line {}: {text}", line.number));
            }

            let step = ensure_sufficient_stack(|| self.exec_line(lines, index, text, scope))
                .map_err(|err| err.at_line(line.number))?;
            match step {
                Step::Next(next) => index = next,
                Step::Stop(action) => return Ok(action),
            }
        }
        Ok(ControlAction::Continue)
    }

    fn exec_line(
        &mut self,
        lines: &[SourceLine],
        index: usize,
        text: &str,
        scope: &mut Scope<'_>,
    ) -> EvalResult<Step> {
        let kind = classify(text);
        if kind.opens_block() {
            let end = find_block_end(lines, index);
            let body = &lines[index + 1..end];
            let action = match kind {
                LineKind::If(condition) => self.exec_if(condition, body, scope)?,
                LineKind::While(condition) => self.exec_while(condition, body, scope)?,
                LineKind::For => self.exec_for(text, body, scope)?,
                _ => {
                    self.define_function(text, body)?;
                    ControlAction::Continue
                }
            };
            return Ok(Step::after_block(action, end));
        }

        match kind {
            LineKind::Blank => Ok(Step::Next(index + 1)),
            LineKind::Return(expr) => {
                let value = expr.map(|expr| evaluate(expr, scope)).transpose()?;
                Ok(Step::Stop(ControlAction::Return(value)))
            }
            LineKind::Terminator => Ok(Step::Stop(ControlAction::Continue)),
            _ => {
                self.exec_statement(text, lines[index].number, scope)?;
                Ok(Step::Next(index + 1))
            }
        }
    }

    /// Run an `if`/`elseif`/`else` chain whose first condition is `condition`.
    fn exec_if(
        &mut self,
        condition: &str,
        body: &[SourceLine],
        scope: &mut Scope<'_>,
    ) -> EvalResult<ControlAction> {
        let branch = find_branch(body);

        if evaluate_condition(condition, scope)? {
            let end = branch.map_or(body.len(), |(index, _)| index);
            return self.exec_block(&body[..end], scope);
        }

        match branch {
            Some((index, LineKind::ElseIf(next))) => self
                .exec_if(next, &body[index + 1..], scope)
                .map_err(|err| err.at_line(body[index].number)),
            Some((index, _)) => self.exec_block(&body[index + 1..], scope),
            None => Ok(ControlAction::Continue),
        }
    }

    fn exec_while(
        &mut self,
        condition: &str,
        body: &[SourceLine],
        scope: &mut Scope<'_>,
    ) -> EvalResult<ControlAction> {
        tracing::debug!(condition, "entering while loop");
        while evaluate_condition(condition, scope)? {
            let action = self.exec_block(body, scope)?;
            if let ControlAction::Return(value) = action {
                return Ok(ControlAction::Return(value));
            }
        }
        Ok(ControlAction::Continue)
    }

    /// `for NAME from START to END`, ascending and inclusive.
    ///
    /// Bounds are evaluated once. `NAME` is rebound in the current scope on
    /// every iteration and keeps its last value afterwards.
    fn exec_for(
        &mut self,
        header: &str,
        body: &[SourceLine],
        scope: &mut Scope<'_>,
    ) -> EvalResult<ControlAction> {
        let captures = FOR_HEADER
            .as_ref()
            .and_then(|re| re.captures(header))
            .ok_or_else(|| malformed_block_header("for loop", header))?;
        let (Some(name), Some(start), Some(end)) =
            (captures.get(1), captures.get(2), captures.get(3))
        else {
            return Err(malformed_block_header("for loop", header));
        };
        let name = name.as_str();
        let start = evaluate(start.as_str(), scope)?.to_int()?;
        let end = evaluate(end.as_str(), scope)?.to_int()?;
        tracing::debug!(name, start, end, "entering for loop");

        for i in start..=end {
            scope.set(name, Value::int(i));
            let action = self.exec_block(body, scope)?;
            if let ControlAction::Return(value) = action {
                return Ok(ControlAction::Return(value));
            }
        }
        Ok(ControlAction::Continue)
    }

    /// Register the function declared by `header`, replacing any earlier one.
    fn define_function(&mut self, header: &str, body: &[SourceLine]) -> EvalResult<()> {
        let captures = FUNCTION_HEADER
            .as_ref()
            .and_then(|re| re.captures(header))
            .ok_or_else(|| malformed_block_header("function", header))?;
        let Some(name) = captures.get(1) else {
            return Err(malformed_block_header("function", header));
        };
        let params = Function::parse_params(captures.get(2).map(|m| m.as_str()));
        let function = Function::new(name.as_str(), params, body.to_vec());

        tracing::debug!(
            name = %function.name,
            arity = function.arity(),
            body_lines = function.body.len(),
            "registered function"
        );
        self.functions.define(function);
        Ok(())
    }
}
