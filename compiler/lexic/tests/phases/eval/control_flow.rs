//! `if`/`elseif`/`else`, `while`/`repeat`, `for`/`loop` and block terminators.

use pretty_assertions::assert_eq;

use crate::common::run;

#[test]
fn if_inside_while() {
    let source = "\
set n to 1
while n <= 5
  if n % 2 == 0
    display n
  end
  increase n
end";
    assert_eq!(run(source), "2\n4\n");
}

#[test]
fn if_in_while_in_for_each_find_their_own_end() {
    let source = "\
for i from 1 to 3
  set j to 0
  while j < i
    increase j
    if j == i
      display i * 10 + j
    end
  end
  display \"row \" + i
end
display \"done\"";
    assert_eq!(run(source), "11\nrow 1\n22\nrow 2\n33\nrow 3\ndone\n");
}

#[test]
fn else_branch_runs_when_condition_fails() {
    let source = "\
set age to 15
if age >= 18
  display \"adult\"
else
  display \"minor\"
end
display \"done\"";
    assert_eq!(run(source), "minor\ndone\n");
}

#[test]
fn elseif_picks_first_true_branch() {
    let source = "\
set score to 85
if score >= 90
  display \"A\"
elseif score >= 80
  display \"B\"
elseif score >= 70
  display \"C\"
else
  display \"F\"
end";
    assert_eq!(run(source), "B\n");
}

#[test]
fn nested_if_inside_else_does_not_leak_branches() {
    let source = "\
set x to 5
if x > 10
  display \"big\"
else
  if x > 3
    display \"medium\"
  else
    display \"small\"
  end
  display \"checked\"
end";
    assert_eq!(run(source), "medium\nchecked\n");
}

#[test]
fn nested_for_loops() {
    let source = "\
for i from 1 to 2
  for j from 1 to 3
    display i * j
  end
end";
    assert_eq!(run(source), "1\n2\n3\n2\n4\n6\n");
}

#[test]
fn for_bounds_are_expressions() {
    let source = "\
set n to 2
loop k from n - 1 to n * 2
  display k
end";
    assert_eq!(run(source), "1\n2\n3\n4\n");
}

#[test]
fn for_with_start_past_end_runs_nothing() {
    assert_eq!(run("for i from 5 to 1\ndisplay i\nend\ndisplay \"after\""), "after\n");
}

#[test]
fn repeat_is_a_while_synonym() {
    let source = "\
set countdown to 3
repeat countdown > 0
  display countdown
  decrease countdown
done";
    assert_eq!(run(source), "3\n2\n1\n");
}

#[test]
fn alternate_terminators_close_blocks() {
    let source = "\
set total to 0
for i from 1 to 3
  increase total by i
finish
if total == 6
  display \"six\"
done";
    assert_eq!(run(source), "six\n");
}

#[test]
fn keywords_ignore_case() {
    let source = "\
SET x TO 2
IF x > 1
  DISPLAY \"yes\"
END
While x < 4
  Increase x
End
Display x";
    assert_eq!(run(source), "yes\n4\n");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    let source = "\
# setup

// a second style of comment
set x to 1

display x";
    assert_eq!(run(source), "1\n");
}

#[test]
fn text_comparison_uses_equality_only() {
    let source = "\
set name to \"Ada\"
if name == \"Ada\"
  display \"match\"
end
if name != \"Bob\"
  display \"differs\"
end
if name > \"A\"
  display \"never\"
end";
    assert_eq!(run(source), "match\ndiffers\n");
}

#[test]
fn unclosed_block_runs_to_end_of_program() {
    let source = "\
set x to 1
if x == 1
  display \"inside\"
  display \"still inside\"";
    assert_eq!(run(source), "inside\nstill inside\n");
}
