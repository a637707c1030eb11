//! Line-oriented interpreter for Lexi.
//!
//! The `Interpreter` owns everything a run needs: the program buffer, the
//! global scope, the function registry, the output and input handlers, the
//! debug-echo flag and the call stack. Block and call handlers borrow it
//! mutably while scopes are threaded through as separate arguments, so a
//! function activation can chain to its caller's scope without the scope
//! chain borrowing the interpreter.
//!
//! # Modules
//!
//! - `blocks` - the block executor: headers, terminators, if/while/for,
//!   function definitions
//! - `dispatch` - execution of simple statements
//! - `function_call` - argument binding and the call mechanism
//!
//! # Return signalling
//!
//! A `return` ends the current line range with
//! [`ControlAction::Return`]. Every enclosing block handler passes it
//! outward unchanged until the function call that owns the activation
//! consumes it. Because the signal is a value rather than shared state,
//! an inner call's return can never leak into its caller.

mod blocks;
mod builder;
mod dispatch;
mod function_call;

pub use builder::{InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH};

use std::rc::Rc;

use crate::diagnostics::CallStack;
use crate::environment::Scope;
use crate::errors::EvalResult;
use crate::function::{Function, FunctionRegistry};
use crate::input_handler::SharedInputHandler;
use crate::print_handler::SharedPrintHandler;
use crate::program::Program;
use crate::value::Value;

/// How a line range finished.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    /// The range ran out or reached a terminator.
    Continue,
    /// A `return` executed, with its value if it had one.
    Return(Option<Value>),
}

/// Interpreter context for one Lexi session.
pub struct Interpreter {
    program: Program,
    /// Global scope of the most recent run.
    globals: Scope<'static>,
    functions: FunctionRegistry,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
    debug: bool,
    call_stack: CallStack,
}

impl Interpreter {
    /// Create an interpreter writing to stdout and reading stdin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    /// Start configuring an interpreter.
    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    /// Append lines to the program buffer.
    pub fn load_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.program.push_line(line);
        }
    }

    /// Append every line of `source` to the program buffer.
    pub fn load_source(&mut self, source: &str) {
        self.program.load_str(source);
    }

    /// Append one line to the program buffer.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.program.push_line(line);
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Execute the buffered program from its first line.
    ///
    /// Each run starts from an empty global scope, which is kept afterwards
    /// for inspection. Functions persist across runs until [`clear`].
    /// A top-level `return` ends the run successfully.
    ///
    /// [`clear`]: Interpreter::clear
    #[tracing::instrument(level = "debug", skip_all, fields(lines = self.program.len()))]
    pub fn run(&mut self) -> EvalResult<()> {
        let program = std::mem::take(&mut self.program);
        let mut globals = Scope::new();
        self.call_stack.reset();

        let result = self.exec_block(program.lines(), &mut globals);

        self.program = program;
        self.globals = globals;
        result.map(|_| ())
    }

    /// Forget the program, the globals and every function.
    pub fn clear(&mut self) {
        self.program.clear();
        self.globals = Scope::new();
        self.functions.clear();
        self.call_stack.reset();
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn set_debug(&mut self, on: bool) {
        self.debug = on;
    }

    /// Flip debug echo, returning the new state.
    pub fn toggle_debug(&mut self) -> bool {
        self.debug = !self.debug;
        self.debug
    }

    /// Global variables, sorted by name.
    pub fn globals(&self) -> Vec<(&str, &Value)> {
        self.globals.sorted_bindings()
    }

    /// Look up one global variable.
    pub fn global(&self, name: &str) -> Option<&Value> {
        self.globals.get(name)
    }

    /// Defined functions, sorted by name.
    pub fn functions(&self) -> Vec<Rc<Function>> {
        self.functions.sorted()
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
