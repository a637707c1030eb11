use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_rule_compiles() {
    assert_eq!(RULES.len(), 9);
    assert!(CALL_IN_EXPR.is_some());
}

#[test]
fn kind_names_each_statement() {
    let kinds: Vec<_> = [
        "create a number called x with value 1",
        "set x to 2",
        "increase x",
        "decrease x by 3",
        "display x",
        "ask for x",
        "call f",
        "create list xs",
        "add 1 to xs",
    ]
    .into_iter()
    .map(|line| parse_statement(line).map(|s| s.kind()))
    .collect();
    assert_eq!(
        kinds,
        vec![
            Some("create"),
            Some("set"),
            Some("increase"),
            Some("decrease"),
            Some("display"),
            Some("input"),
            Some("call"),
            Some("create list"),
            Some("add"),
        ]
    );
}

#[test]
fn create_and_set_forms() {
    assert_eq!(
        parse_statement("create a number called score with value 90"),
        Some(Statement::Create {
            name: "score",
            expr: "90"
        })
    );
    assert_eq!(
        parse_statement("Create A String Called name With Value \"Ada\""),
        Some(Statement::Create {
            name: "name",
            expr: "\"Ada\""
        })
    );
    for line in ["set x to 5", "make x be 5", "let x = 5", "set x equal to 5"] {
        assert_eq!(
            parse_statement(line),
            Some(Statement::Set {
                name: "x",
                expr: "5"
            }),
            "{line}"
        );
    }
}

#[test]
fn increase_and_decrease_amounts() {
    assert_eq!(
        parse_statement("increase counter"),
        Some(Statement::Increase {
            name: "counter",
            amount: None
        })
    );
    assert_eq!(
        parse_statement("increment counter by step * 2"),
        Some(Statement::Increase {
            name: "counter",
            amount: Some("step * 2")
        })
    );
    assert_eq!(
        parse_statement("decrease lives by 1"),
        Some(Statement::Decrease {
            name: "lives",
            amount: Some("1")
        })
    );
}

#[test]
fn output_and_input() {
    for verb in ["display", "show", "print", "say"] {
        assert_eq!(
            parse_statement(&format!("{verb} \"hi\" + name")),
            Some(Statement::Display {
                expr: "\"hi\" + name"
            })
        );
    }
    assert_eq!(
        parse_statement("ask for name"),
        Some(Statement::Input { name: "name" })
    );
    assert_eq!(
        parse_statement("get input for age"),
        Some(Statement::Input { name: "age" })
    );
}

#[test]
fn calls_and_lists() {
    assert_eq!(
        parse_statement("call greet with \"Ada\", 3"),
        Some(Statement::Call {
            name: "greet",
            args: Some("\"Ada\", 3")
        })
    );
    assert_eq!(
        parse_statement("run function tick"),
        Some(Statement::Call {
            name: "tick",
            args: None
        })
    );
    assert_eq!(
        parse_statement("create list names"),
        Some(Statement::CreateList { name: "names" })
    );
    assert_eq!(
        parse_statement("add 1 + 2 to totals"),
        Some(Statement::Append {
            expr: "1 + 2",
            name: "totals"
        })
    );
}

#[test]
fn templates_match_whole_line_only() {
    assert_eq!(parse_statement("please set x to 5"), None);
    assert_eq!(parse_statement("frobnicate"), None);
    assert_eq!(parse_statement("display"), None);
}

#[test]
fn first_rule_wins() {
    // `create a number called ...` is tried before `create list`.
    assert!(matches!(
        parse_statement("create a variable called list with value 1"),
        Some(Statement::Create { .. })
    ));
}

#[test]
fn call_expressions() {
    assert!(is_call_expression("CALL square with 5"));
    assert!(!is_call_expression("caller + 1"));
    assert_eq!(
        parse_call_expression("call square with n - 1"),
        Some(("square", Some("n - 1")))
    );
    assert_eq!(
        parse_call_expression("Run Function answer"),
        Some(("answer", None))
    );
    assert_eq!(parse_call_expression("call "), None);
}
