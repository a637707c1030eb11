//! The chain of executing Lexi functions.
//!
//! `CallStack` records every active function call together with the source
//! line that made it. It enforces the call-depth limit and produces the
//! `EvalBacktrace` attached to errors raised inside function bodies.

use crate::errors::{recursion_limit, BacktraceFrame, EvalBacktrace, EvalError};

/// One executing function and where it was called from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallFrame {
    /// Called function name.
    pub name: String,
    /// 1-based line of the call site, `None` when unknown.
    pub call_line: Option<usize>,
}

/// The functions currently executing, outermost first.
///
/// `call_function` pushes before running a body and pops afterwards on
/// success and failure alike.
///
/// ```text
/// let mut stack = CallStack::new(Some(200));
/// stack.push(CallFrame { name: "fib".into(), call_line: Some(4) })?;
/// let action = run_body()?;
/// stack.pop();
/// ```
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// An empty stack that refuses calls beyond `max_depth` frames.
    /// With `None`, depth is bounded only by memory.
    pub fn new(max_depth: Option<usize>) -> Self {
        Self {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Enter a function. At the limit this fails with `RecursionLimit`
    /// and leaves the stack as it was.
    pub fn push(&mut self, frame: CallFrame) -> Result<(), EvalError> {
        match self.max_depth {
            Some(limit) if self.depth() >= limit => Err(recursion_limit(limit)),
            _ => {
                self.frames.push(frame);
                Ok(())
            }
        }
    }

    /// Leave the innermost function.
    pub fn pop(&mut self) {
        debug_assert!(!self.is_empty(), "unbalanced call stack");
        self.frames.pop();
    }

    /// Number of functions currently executing.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True at top level.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Forget every frame; a new run starts at top level.
    pub fn reset(&mut self) {
        self.frames.clear();
    }

    /// The executing functions, innermost first.
    pub fn capture(&self) -> EvalBacktrace {
        EvalBacktrace::new(
            self.frames
                .iter()
                .rev()
                .map(|frame| BacktraceFrame {
                    name: frame.name.clone(),
                    call_line: frame.call_line,
                })
                .collect(),
        )
    }

    /// Give `err` the current backtrace unless it was raised at top level
    /// or already carries one from a deeper call.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        if self.is_empty() {
            err
        } else {
            err.with_backtrace(self.capture())
        }
    }
}

/// No depth limit.
impl Default for CallStack {
    fn default() -> Self {
        Self::new(None)
    }
}
