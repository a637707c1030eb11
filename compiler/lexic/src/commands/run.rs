//! The file runner: load a Lexi source file and execute it once.

use lexi_eval::{
    stdin_handler, stdout_handler, Interpreter, SharedInputHandler, SharedPrintHandler,
};

use super::read_file;
use crate::report::render_error;

/// Run `source` to completion with the given handlers.
///
/// On failure, returns the rendered error report.
pub fn run_source(
    source: &str,
    output: SharedPrintHandler,
    input: SharedInputHandler,
    debug: bool,
) -> Result<(), String> {
    let mut interpreter = Interpreter::builder()
        .print_handler(output)
        .input_handler(input)
        .debug(debug)
        .source(source)
        .build();

    tracing::debug!(lines = interpreter.program().len(), "running program");
    interpreter
        .run()
        .map_err(|err| render_error(&err, interpreter.program(), debug))
}

/// Run a Lexi file against stdout and stdin, exiting with status 1 on
/// failure.
pub fn run_file(path: &str, debug: bool) {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };

    if let Err(report) = run_source(&source, stdout_handler(), stdin_handler(), debug) {
        eprint!("{report}");
        std::process::exit(1);
    }
}
