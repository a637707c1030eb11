//! Simple statements: variables, input, lists.

use pretty_assertions::assert_eq;

use crate::common::{interpreter, run, run_with_input};

#[test]
fn assignment_phrasings() {
    let source = "\
set a to 1
make b equal to 2
let c be 3
set d = 4
display a + b + c + d";
    assert_eq!(run(source), "10\n");
}

#[test]
fn increase_and_decrease() {
    let source = "\
set x to 10
increase x
increment x by 4
decrease x by 2 * 3
decrement x
display x";
    assert_eq!(run(source), "8\n");
}

#[test]
fn input_numbers_and_text() {
    let source = "\
ask for name
get input for age
set next to age + 1
display \"Hi \" + name
display next";
    assert_eq!(
        run_with_input(source, &["Ada", "36"]),
        "? Ada\n? 36\nHi Ada\n37\n"
    );
}

#[test]
fn lists_collect_values() {
    let source = "\
create list primes
for n from 2 to 10
  set composite to 0
  for d from 2 to n - 1
    if n % d == 0
      set composite to 1
    end
  end
  if composite == 0
    add n to primes
  end
end
display primes";
    assert_eq!(run(source), "[2, 3, 5, 7]\n");
}

#[test]
fn lists_hold_text_and_nested_lists() {
    let source = "\
create array inner
add \"x\" to inner
create list outer
add 1 to outer
add inner to outer
add \"two words\" to outer
display outer";
    assert_eq!(run(source), "[1, [x], two words]\n");
}

#[test]
fn list_aliases_share_contents() {
    let source = "\
create list items
set same to items
add 5 to same
display items";
    assert_eq!(run(source), "[5]\n");
}

#[test]
fn function_appends_to_caller_list() {
    let source = "\
create list log
function record message
  add message to log
end
call record with \"start\"
call record with \"stop\"
display log";
    assert_eq!(run(source), "[start, stop]\n");
}

#[test]
fn globals_survive_the_run() {
    let mut interp = interpreter("set x to 3\ncreate list xs\nadd x to xs", &[]);
    interp.run().unwrap();
    let names: Vec<_> = interp.globals().into_iter().map(|(name, _)| name.to_string()).collect();
    assert_eq!(names, vec!["x".to_string(), "xs".to_string()]);
    assert_eq!(interp.global("xs").map(ToString::to_string), Some("[3]".to_string()));
}
