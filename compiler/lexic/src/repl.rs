//! Interactive shell.
//!
//! Lines that are not shell commands accumulate in the program buffer;
//! `run` executes the buffer from the top. Shell output goes through the
//! same print handler as the program's own `display` output, so a session
//! can be captured whole.

use std::fmt::Write;
use std::io::BufRead;

use lexi_eval::{
    stdin_handler, stdout_handler, Interpreter, SharedInputHandler, SharedPrintHandler,
};

use crate::report::render_error;

pub const PROMPT: &str = "lexi> ";
pub const WELCOME: &str = "Welcome to Lexi! Type HELP for commands.";
pub const GOODBYE: &str = "Goodbye! Thanks for using Lexi.";

const HELP: &str = "\
SHELL COMMANDS:
  RUN      Execute the program
  SHOW     List variables, functions and program size
  CLEAR    Forget the program, variables and functions
  DEBUG    Toggle line echo and error context
  HELP     Show this help
  EXIT     Leave Lexi (also QUIT)

LANGUAGE:
  create a number called x with value 10
  set score to 90
  increase counter by 1
  display \"Score: \" + score
  ask for name

  if score >= 90          for i from 1 to 10
    display \"A\"             display i
  elseif score >= 80      end
    display \"B\"
  else                    while x < 5
    display \"C\"             increase x by 1
  end                     end

  function square n
    return n * n
  end
  set result to call square with 5

  create list items
  add 3 to items
";

/// What the shell loop should do after a line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    Continue,
    Exit,
}

/// Interactive session state.
pub struct Shell {
    interpreter: Interpreter,
    output: SharedPrintHandler,
}

impl Shell {
    /// Create a shell writing to `output` and reading program input from
    /// `input`.
    pub fn new(output: SharedPrintHandler, input: SharedInputHandler) -> Self {
        let interpreter = Interpreter::builder()
            .print_handler(output.clone())
            .input_handler(input)
            .build();
        Shell {
            interpreter,
            output,
        }
    }

    /// The interpreter behind this session.
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Handle one line typed at the prompt.
    pub fn handle_line(&mut self, line: &str) -> ShellAction {
        let line = line.trim();
        if line.is_empty() {
            return ShellAction::Continue;
        }

        match line.to_ascii_lowercase().as_str() {
            "exit" | "quit" => {
                self.output.println(GOODBYE);
                return ShellAction::Exit;
            }
            "help" => self.output.println(HELP),
            "clear" => {
                self.interpreter.clear();
                self.output.println("Memory cleared.");
            }
            "debug" => {
                let on = self.interpreter.toggle_debug();
                self.output
                    .println(&format!("Debug mode: {}", if on { "ON" } else { "OFF" }));
            }
            "run" => self.run_program(),
            "show" => self.output.print(&self.state_report()),
            _ => self.interpreter.push_line(line),
        }
        ShellAction::Continue
    }

    fn run_program(&mut self) {
        if let Err(err) = self.interpreter.run() {
            let report = render_error(&err, self.interpreter.program(), self.interpreter.debug());
            self.output.print(&report);
        }
        self.output.println("");
    }

    /// Variables, function signatures and program size, as `show` prints
    /// them.
    pub fn state_report(&self) -> String {
        let mut out = String::from("VARIABLES:\n");
        let globals = self.interpreter.globals();
        if globals.is_empty() {
            out.push_str("  (none)\n");
        }
        for (name, value) in globals {
            let _ = writeln!(out, "  {name} = {value}");
        }

        out.push_str("FUNCTIONS:\n");
        let functions = self.interpreter.functions();
        if functions.is_empty() {
            out.push_str("  (none)\n");
        }
        for function in functions {
            let _ = writeln!(out, "  {function}");
        }

        let _ = writeln!(out, "PROGRAM LINES: {}", self.interpreter.program().len());
        out
    }

    /// Read lines from stdin until `exit` or end of input.
    pub fn start(&mut self) {
        self.output.println(WELCOME);
        self.output.println("");

        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            self.output.print(PROMPT);
            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => {
                    self.output.println("");
                    self.output.println(GOODBYE);
                    return;
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "stdin read failed");
                    return;
                }
            }
            if self.handle_line(&line) == ShellAction::Exit {
                return;
            }
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(stdout_handler(), stdin_handler())
    }
}
