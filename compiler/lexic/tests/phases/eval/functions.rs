//! Function definition, calls, return values and scoping.

use pretty_assertions::assert_eq;

use crate::common::{interpreter, run};

#[test]
fn recursive_fibonacci() {
    let source = "\
function fib n
  if n < 2
    return n
  end
  set a to call fib with n - 1
  set b to call fib with n - 2
  return a + b
end
set result to call fib with 10
display result";
    assert_eq!(run(source), "55\n");
}

#[test]
fn call_statement_discards_return_value() {
    let source = "\
function greet name
  display \"Hello, \" + name
  return 1
end
call greet with \"Ada\"
run function greet with \"Grace\"";
    assert_eq!(run(source), "Hello, Ada\nHello, Grace\n");
}

#[test]
fn parameters_accept_commas_or_spaces() {
    let source = "\
define function area width, height
  return width * height
end
function volume w h d
  return w * h * d
end
set a to call area with 3, 4
set v to call volume with 2, 3, 4
display a
display v";
    assert_eq!(run(source), "12\n24\n");
}

#[test]
fn callee_sees_caller_locals() {
    let source = "\
function inner
  return depth * 10
end
function outer
  set depth to 4
  set r to call inner
  return r
end
set answer to call outer
display answer";
    assert_eq!(run(source), "40\n");
}

#[test]
fn callee_writes_stay_local() {
    let source = "\
set counter to 1
function bump
  increase counter by 100
  display counter
end
call bump
display counter";
    assert_eq!(run(source), "101\n1\n");
}

#[test]
fn return_inside_loop_ends_function_only() {
    let source = "\
function first_multiple n limit
  for i from 1 to limit
    if i % n == 0
      return i
    end
  end
  return 0
end
set m to call first_multiple with 7, 30
display m
set none to call first_multiple with 50, 10
display none
display \"still running\"";
    assert_eq!(run(source), "7\n0\nstill running\n");
}

#[test]
fn bare_return_leaves_early() {
    let source = "\
function maybe flag
  if flag == 0
    return
  end
  display \"flag set\"
end
call maybe with 0
call maybe with 1";
    assert_eq!(run(source), "flag set\n");
}

#[test]
fn redefinition_replaces_function() {
    let source = "\
function pick
  return 1
end
set a to call pick
function pick
  return 2
end
set b to call pick
display a
display b";
    assert_eq!(run(source), "1\n2\n");
}

#[test]
fn text_return_values() {
    let source = "\
function label n
  return \"item \" + n
end
set x to call label with 3
display x";
    assert_eq!(run(source), "item 3\n");
}

#[test]
fn functions_persist_across_runs() {
    let mut interp = interpreter("function one\nreturn 1\nend", &[]);
    interp.run().unwrap();
    interp.clear();
    interp.load_source("set x to call one\ndisplay x");
    assert!(interp.run().is_err());

    let mut interp = interpreter("function one\nreturn 1\nend", &[]);
    interp.run().unwrap();
    interp.push_line("set x to call one");
    interp.run().unwrap();
    assert_eq!(interp.functions().len(), 1);
    assert_eq!(interp.global("x").map(ToString::to_string), Some("1".to_string()));
}

#[test]
fn deep_recursion_within_default_limit() {
    let source = "\
function down n
  if n > 0
    call down with n - 1
  end
end
call down with 5000
display \"bottom reached\"";
    assert_eq!(run(source), "bottom reached\n");
}
