//! Arithmetic, text and concatenation as seen through `display`.

use pretty_assertions::assert_eq;

use crate::common::run;

#[test]
fn arithmetic_precedence() {
    let source = "\
display 2 + 3 * 4
display (2 + 3) * 4
display 2 ^ 3 ^ 2
display 17 % 5 + 10 / 3
display -2 ^ 2
display 7 / -2";
    assert_eq!(run(source), "14\n20\n512\n5\n4\n-3\n");
}

#[test]
fn variables_in_arithmetic() {
    let source = "\
create a number called width with value 6
create a variable called height with value width - 2
display width * height";
    assert_eq!(run(source), "24\n");
}

#[test]
fn concatenation_with_variables() {
    let source = "\
set name to \"Ada\"
set age to 36
display \"Name: \" + name + \", age \" + age";
    assert_eq!(run(source), "Name: Ada, age 36\n");
}

#[test]
fn unquoted_plus_flushes_segments() {
    let source = "\
display \"Score: \" + 10 + 5
display \"Double: \" + 2 * 21";
    assert_eq!(run(source), "Score: 105\nDouble: 42\n");
}

#[test]
fn text_variable_joins_without_quotes() {
    let source = "\
set first to \"Ada\"
set last to \"Lovelace\"
set full to first + last
display full";
    assert_eq!(run(source), "AdaLovelace\n");
}

#[test]
fn quoted_literals_are_verbatim() {
    let source = "\
display \"1 + 1\"
display \"\"
display \"a\" + \"b\"";
    assert_eq!(run(source), "1 + 1\n\nab\n");
}

#[test]
fn copying_a_variable_keeps_its_type() {
    let source = "\
set greeting to \"hi\"
set copy to greeting
display copy";
    assert_eq!(run(source), "hi\n");
}
