use crate::common::{eval_err, output, session};
use pretty_assertions::assert_eq;

#[test]
fn test_execution_error_messages() {
    let cases = [
        ("nope;", "Unknown symbol 'nope'."),
        ("x = 1; x = 2;", "Not allowed to re-assign symbol 'x'."),
        (
            "3();",
            "Only functions can be called, but I was asked to call ('number', 3).",
        ),
        (
            "f = {:(a) a;}; f();",
            "0 arguments passed to function ('symbol', 'f'), but it requires 1 arguments.",
        ),
        (
            "1 + 'a';",
            "Both sides of '+' must be numbers, but the right side was ('string', 'a').",
        ),
        ("len(1);", "len() can only be called for a string."),
    ];
    for (source, message) in cases {
        assert_eq!(eval_err(source), message, "{source:?}");
    }
}

#[test]
fn test_library_names_cannot_be_redefined() {
    assert_eq!(eval_err("print = 1;"), "Not allowed to re-assign symbol 'print'.");
    assert_eq!(eval_err("None = 1;"), "Not allowed to re-assign symbol 'None'.");
}

#[test]
fn test_statements_before_an_error_have_run() {
    let session = session();
    assert!(session.run_source("print('before'); x = 1; oops; print('after');").is_err());
    assert_eq!(session.print_handler().get_output(), "before\n");
    assert_eq!(session.run_source("x;").unwrap().to_string(), "1");
}

#[test]
fn test_syntax_error_stops_at_the_bad_statement() {
    let session = session();
    let err = session.run_source("print(1); print(2) 3;").unwrap_err();
    assert_eq!(err.to_string(), "Unexpected number token, '3'.");
    assert_eq!(session.print_handler().get_output(), "1\n");
}

#[test]
fn test_function_values_in_error_snapshots() {
    assert_eq!(
        eval_err("if({1;}, {2;});"),
        "Only numbers may be passed to an if, but I was passed ('function', [], [('number', '1')])"
    );
    assert_eq!(output("print(1);"), "1\n");
}
