//! Execution engine for Lexi, a line-oriented, English-like scripting
//! language.
//!
//! A Lexi program is a list of lines such as `set total to price * 2` or
//! `for i from 1 to 10`. Each simple line is matched against a table of
//! phrase templates; `if`, `while`, `for` and `function` headers own the
//! lines up to their matching `end`. There is no tokenizer or syntax tree:
//! lines are re-read every time they execute.
//!
//! ```text
//! let output = buffer_handler();
//! let mut interpreter = Interpreter::builder()
//!     .print_handler(output.clone())
//!     .source("for i from 1 to 3\n  display i\nend")
//!     .build();
//! interpreter.run()?;
//! assert_eq!(output.get_output(), "1\n2\n3\n");
//! ```

mod diagnostics;
mod environment;
pub mod errors;
pub mod expr;
mod function;
mod input_handler;
mod interpreter;
mod print_handler;
mod program;
mod stack;
pub mod statements;
mod value;

pub use diagnostics::{CallFrame, CallStack};
pub use environment::Scope;
pub use errors::{BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult};
pub use function::{Function, FunctionRegistry};
pub use input_handler::{
    scripted_handler, stdin_handler, InputHandlerImpl, SharedInputHandler, INPUT_PROMPT,
};
pub use interpreter::{ControlAction, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use program::{Program, SourceLine};
pub use stack::ensure_sufficient_stack;
pub use value::{ListHandle, Value};
