//! Rendering of run failures for people.

use std::fmt::Write;

use lexi_eval::{EvalError, Program};

/// Lines shown on each side of the failing line.
const CONTEXT_RADIUS: usize = 2;

/// Render `err` as shown after a failed run.
///
/// ```text
/// Error: Line 2: Division by zero
///   in bad (called from line 5)
/// ```
///
/// With `show_context`, the lines around the failure follow, the failing
/// one marked with `>>>`.
pub fn render_error(err: &EvalError, program: &Program, show_context: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Error: {err}");
    let _ = write!(out, "{}", err.backtrace);

    if show_context {
        if let Some(line) = err.line {
            let context = program.context(line, CONTEXT_RADIUS);
            if !context.is_empty() {
                let _ = writeln!(out, "At line:");
            }
            for source in context {
                let marker = if source.number == line { ">>> " } else { "    " };
                let _ = writeln!(out, "{marker}{source}");
            }
        }
    }
    out
}
