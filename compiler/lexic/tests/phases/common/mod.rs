//! Shared helpers for whole-program tests.

use lexi_eval::{buffer_handler, scripted_handler, EvalError, Interpreter};

/// Build an interpreter over `source` with captured output and the given
/// input lines.
pub fn interpreter(source: &str, input: &[&str]) -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .input_handler(scripted_handler(input.iter().copied()))
        .source(source)
        .build()
}

/// Run `source` and return everything it printed.
pub fn run(source: &str) -> String {
    run_with_input(source, &[])
}

/// Run `source` reading `input` for `ask for` lines.
pub fn run_with_input(source: &str, input: &[&str]) -> String {
    let mut interpreter = interpreter(source, input);
    if let Err(err) = interpreter.run() {
        panic!("program failed: {err}\n--- source ---\n{source}");
    }
    interpreter.print_handler().get_output()
}

/// Run `source`, expecting failure, and return the error with the output
/// printed before it.
pub fn run_err(source: &str) -> (EvalError, String) {
    let mut interpreter = interpreter(source, &[]);
    match interpreter.run() {
        Ok(()) => panic!("program should have failed:\n{source}"),
        Err(err) => (err, interpreter.print_handler().get_output()),
    }
}
