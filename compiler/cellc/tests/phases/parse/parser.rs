use crate::common::parse_snapshots;
use cell_ir::StringInterner;
use cell_lexer::{Lexer, ReaderSource};
use cell_parse::Parser;
use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::io::Cursor;
use std::rc::Rc;

fn one(source: &str) -> String {
    let mut snapshots = parse_snapshots(source).unwrap();
    assert_eq!(snapshots.len(), 1, "{source:?}");
    snapshots.remove(0)
}

#[test]
fn test_function_definition() {
    assert_eq!(
        one("add = {:(a, b) a + b;};"),
        "('assignment', ('symbol', 'add'), ('function', [('symbol', 'a'), ('symbol', 'b')], [('operation', '+', ('symbol', 'a'), ('symbol', 'b'))]))"
    );
}

#[test]
fn test_chained_calls() {
    assert_eq!(
        one("f(1)('x');"),
        "('call', ('call', ('symbol', 'f'), [('number', '1')]), [('string', 'x')])"
    );
}

#[test]
fn test_operators_take_the_rest_of_the_element() {
    assert_eq!(
        one("2 * 3 + 1;"),
        "('operation', '*', ('number', '2'), ('operation', '+', ('number', '3'), ('number', '1')))"
    );
}

#[test]
fn test_immediately_called_function() {
    assert_eq!(
        one("{:(x) x;}(4);"),
        "('call', ('function', [('symbol', 'x')], [('symbol', 'x')]), [('number', '4')])"
    );
}

#[test]
fn test_error_messages() {
    let cases = [
        ("3 = 4;", "You can't assign to anything except a symbol."),
        ("{:x};", "':' must be followed by '(' in a function."),
        (
            "{:(3) 3;};",
            "Only symbols are allowed in function parameter lists. I found: ('number', '3').",
        ),
        ("x 3;", "Unexpected number token, '3'."),
        ("f(1;", "Unexpected ';' - expected ')'."),
        ("f(1", "Hit end of file - expected ')'."),
        ("- 3;", "Operator '-' has nothing on its left."),
        ("3 + ;", "Operator '+' has nothing on its right."),
        ("x = ;", "Nothing is assigned to 'x'."),
    ];
    for (source, message) in cases {
        assert_eq!(parse_snapshots(source), Err(message.to_string()), "{source:?}");
    }
}

#[test]
fn test_statements_arrive_before_later_lines_are_read() {
    let lines_read = Rc::new(Cell::new(0));
    let counter = Rc::clone(&lines_read);
    let source = ReaderSource::new(Cursor::new("a;\nb;\n"))
        .with_line_hook(move || counter.set(counter.get() + 1));
    let interner = StringInterner::new();
    let mut parser = Parser::new(Lexer::new(source), &interner);

    assert!(parser.next().unwrap().is_ok());
    assert_eq!(lines_read.get(), 1);
    assert!(parser.next().unwrap().is_ok());
    assert_eq!(lines_read.get(), 2);
    assert!(parser.next().is_none());
}
