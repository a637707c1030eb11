//! Failures: which kind, which line, what ran before.

use lexi_eval::{buffer_handler, EvalErrorKind, Interpreter, DEFAULT_MAX_CALL_DEPTH};
use pretty_assertions::assert_eq;

use crate::common::run_err;

#[test]
fn output_before_failure_is_kept() {
    let (err, output) = run_err("display 1\ndisplay 2\ndisplay nope\ndisplay 4");
    assert_eq!(output, "1\n2\n");
    assert_eq!(err.line, Some(3));
    assert_eq!(err.to_string(), "Line 3: Variable 'nope' not defined");
}

#[test]
fn error_inside_loop_reports_body_line() {
    let source = "\
set total to 0
for i from 0 to 3
  set total to total + 12 / i
end";
    let (err, _) = run_err(source);
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.line, Some(3));
}

#[test]
fn error_inside_function_has_backtrace() {
    let source = "\
function divide a b
  return a / b
end
function wrapper
  set r to call divide with 1, 0
  return r
end
set x to call wrapper";
    let (err, _) = run_err(source);
    assert_eq!(err.kind, EvalErrorKind::DivisionByZero);
    assert_eq!(err.line, Some(2));
    assert_eq!(
        err.backtrace.to_string(),
        "  in divide (called from line 5)\n  in wrapper (called from line 8)\n"
    );
}

#[test]
fn bad_condition_in_elseif_reports_its_line() {
    let source = "\
set x to 1
if x == 2
  display \"two\"
elseif missing == 1
  display \"one\"
end";
    let (err, _) = run_err(source);
    assert_eq!(err.line, Some(4));
}

#[test]
fn unknown_command() {
    let (err, _) = run_err("set x to 1\nfrobnicate x");
    assert_eq!(
        err.kind,
        EvalErrorKind::UnknownCommand {
            line: "frobnicate x".to_string()
        }
    );
    assert_eq!(err.line, Some(2));
}

#[test]
fn calling_undefined_function() {
    let (err, _) = run_err("call ghost");
    assert_eq!(
        err.kind,
        EvalErrorKind::FunctionNotDefined {
            name: "ghost".to_string()
        }
    );
}

#[test]
fn wrong_argument_count() {
    let (err, _) = run_err("function pair a b\nreturn a\nend\ncall pair with 1");
    assert_eq!(
        err.kind,
        EvalErrorKind::ArityMismatch {
            name: "pair".to_string(),
            expected: 2,
            got: 1
        }
    );
    assert_eq!(err.line, Some(4));
}

#[test]
fn value_call_without_return() {
    let (err, _) = run_err("function quiet\ndisplay 1\nend\nset x to call quiet");
    assert_eq!(
        err.kind,
        EvalErrorKind::NoReturnValue {
            name: "quiet".to_string()
        }
    );
}

#[test]
fn text_that_is_not_a_number() {
    let (err, _) = run_err("set word to \"abc\"\nset n to word * 2");
    assert!(matches!(err.kind, EvalErrorKind::NotANumber { .. }));
}

#[test]
fn overflow_is_an_error() {
    let (err, _) = run_err("set big to 9223372036854775807\nincrease big");
    assert!(matches!(err.kind, EvalErrorKind::IntegerOverflow { .. }));
    assert_eq!(err.line, Some(2));
}

#[test]
fn runaway_recursion_hits_depth_limit() {
    let mut interp = Interpreter::builder()
        .print_handler(buffer_handler())
        .max_call_depth(Some(200))
        .source("function forever n\ncall forever with n + 1\nend\ncall forever with 0")
        .build();
    let err = interp.run().unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::RecursionLimit { depth: 200 });
    assert_eq!(err.line, Some(2));
    assert_eq!(err.backtrace.frames().len(), 200);
}

#[test]
fn default_depth_limit_stops_runaway_recursion() {
    let (err, _) = run_err("function forever n\ncall forever with n + 1\nend\ncall forever with 0");
    assert_eq!(
        err.kind,
        EvalErrorKind::RecursionLimit {
            depth: DEFAULT_MAX_CALL_DEPTH
        }
    );
    assert_eq!(err.backtrace.frames().len(), DEFAULT_MAX_CALL_DEPTH);
    assert_eq!(err.backtrace.to_string().lines().count(), 3);
}

#[test]
fn input_runs_out() {
    let (err, _) = run_err("ask for name");
    assert_eq!(err.kind, EvalErrorKind::InputUnavailable);
}
