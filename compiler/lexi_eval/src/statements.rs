//! Simple statements and the phrase templates that recognise them.
//!
//! Each statement kind is a case-insensitive regular expression matched
//! against the whole trimmed line. Rules are tried in table order and the
//! first match wins; its captures become a typed [`Statement`] borrowing
//! from the line. Execution lives in the interpreter.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// One parsed simple statement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Statement<'a> {
    /// `create a number called NAME with value EXPR`
    Create { name: &'a str, expr: &'a str },
    /// `set NAME to EXPR`, possibly binding a call's return value.
    Set { name: &'a str, expr: &'a str },
    /// `increase NAME [by EXPR]`
    Increase { name: &'a str, amount: Option<&'a str> },
    /// `decrease NAME [by EXPR]`
    Decrease { name: &'a str, amount: Option<&'a str> },
    /// `display EXPR`
    Display { expr: &'a str },
    /// `ask for NAME`
    Input { name: &'a str },
    /// `call NAME [with ARGS]`
    Call { name: &'a str, args: Option<&'a str> },
    /// `create list NAME`
    CreateList { name: &'a str },
    /// `add EXPR to NAME`
    Append { expr: &'a str, name: &'a str },
}

impl Statement<'_> {
    /// Short name used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Create { .. } => "create",
            Statement::Set { .. } => "set",
            Statement::Increase { .. } => "increase",
            Statement::Decrease { .. } => "decrease",
            Statement::Display { .. } => "display",
            Statement::Input { .. } => "input",
            Statement::Call { .. } => "call",
            Statement::CreateList { .. } => "create list",
            Statement::Append { .. } => "add",
        }
    }
}

type Build = for<'h> fn(&Captures<'h>) -> Statement<'h>;

struct Rule {
    pattern: Regex,
    build: Build,
}

impl Rule {
    /// Compile `body` as a case-insensitive whole-line pattern.
    fn new(body: &str, build: Build) -> Option<Self> {
        let pattern = Regex::new(&format!(r"(?i)^(?:{body})$")).ok()?;
        Some(Rule { pattern, build })
    }
}

/// The rule table, in matching order.
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let table: [(&str, Build); 9] = [
        (
            r"create\s+a\s+(?:number|variable|string)\s+called\s+(\w+)\s+with\s+value\s+(.+)",
            build_create,
        ),
        (
            r"(?:set|make|let)\s+(\w+)\s+(?:to|equal to|=|be)\s+(.+)",
            build_set,
        ),
        (
            r"(?:increase|increment)\s+(\w+)(?:\s+by\s+(.+))?",
            build_increase,
        ),
        (
            r"(?:decrease|decrement)\s+(\w+)(?:\s+by\s+(.+))?",
            build_decrease,
        ),
        (r"(?:display|show|print|say)\s+(.+)", build_display),
        (r"(?:ask|get|input)\s+(?:for|input for)\s+(\w+)", build_input),
        (CALL_PATTERN, build_call),
        (r"create\s+(?:list|array)\s+(\w+)", build_create_list),
        (r"add\s+(.+?)\s+to\s+(\w+)", build_append),
    ];
    // The patterns are fixed; a failure to compile drops only that rule.
    table
        .into_iter()
        .filter_map(|(body, build)| Rule::new(body, build))
        .collect()
});

fn build_create<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::Create {
        name: group(c, 1),
        expr: group(c, 2),
    }
}

fn build_set<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::Set {
        name: group(c, 1),
        expr: group(c, 2),
    }
}

fn build_increase<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::Increase {
        name: group(c, 1),
        amount: optional_group(c, 2),
    }
}

fn build_decrease<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::Decrease {
        name: group(c, 1),
        amount: optional_group(c, 2),
    }
}

fn build_display<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::Display { expr: group(c, 1) }
}

fn build_input<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::Input { name: group(c, 1) }
}

fn build_call<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::Call {
        name: group(c, 1),
        args: optional_group(c, 2),
    }
}

fn build_create_list<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::CreateList { name: group(c, 1) }
}

fn build_append<'h>(c: &Captures<'h>) -> Statement<'h> {
    Statement::Append {
        expr: group(c, 1),
        name: group(c, 2),
    }
}

/// `call NAME [with ARGS]` / `run function NAME [with ARGS]`.
const CALL_PATTERN: &str = r"(?:call|run\s+function)\s+(\w+)(?:\s+with\s+(.+))?";

/// The same call phrase, found anywhere in an expression.
static CALL_IN_EXPR: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b{CALL_PATTERN}")).ok());

fn group<'h>(captures: &Captures<'h>, index: usize) -> &'h str {
    captures.get(index).map_or("", |m| m.as_str().trim())
}

fn optional_group<'h>(captures: &Captures<'h>, index: usize) -> Option<&'h str> {
    captures.get(index).map(|m| m.as_str().trim())
}

/// Match `line` against the rule table.
pub fn parse_statement(line: &str) -> Option<Statement<'_>> {
    RULES.iter().find_map(|rule| {
        rule.pattern
            .captures(line)
            .map(|captures| (rule.build)(&captures))
    })
}

/// Whether the right-hand side of `set` is a function call.
pub fn is_call_expression(expr: &str) -> bool {
    expr.to_ascii_lowercase().contains("call ")
}

/// Extract `(NAME, ARGS)` from the first call phrase inside `expr`.
pub fn parse_call_expression(expr: &str) -> Option<(&str, Option<&str>)> {
    let captures = CALL_IN_EXPR.as_ref()?.captures(expr)?;
    let name = captures.get(1)?.as_str();
    Some((name, optional_group(&captures, 2)))
}

#[cfg(test)]
mod tests;
