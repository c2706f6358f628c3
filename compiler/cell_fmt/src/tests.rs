use super::*;
use cell_ir::{Span, StringInterner, TokenKind};
use pretty_assertions::assert_eq;

fn parse_one(source: &str, interner: &StringInterner) -> cell_ir::Expr {
    match cell_parse::parse(source, interner) {
        Ok(mut statements) if statements.len() == 1 => statements.remove(0),
        Ok(statements) => panic!("expected one statement, got {}", statements.len()),
        Err(err) => panic!("failed to parse {source:?}: {err}"),
    }
}

fn pretty(source: &str) -> String {
    let interner = StringInterner::new();
    pretty_print(&parse_one(source, &interner), &interner, false)
}

fn minimised(source: &str) -> String {
    let interner = StringInterner::new();
    minimise(&parse_one(source, &interner), &interner)
}

#[test]
fn test_pretty_leaves() {
    assert_eq!(pretty("x;"), " [ symbol, x ]\n");
    assert_eq!(pretty("3.5;"), " [ number, 3.5 ]\n");
    assert_eq!(pretty("'hi';"), " [ string, 'hi' ]\n");
}

#[test]
fn test_pretty_assignment() {
    assert_eq!(
        pretty("x = 1 + y;"),
        concat!(
            " [ assignment\n",
            "   [ symbol, x ]\n",
            "   [ operation, +\n",
            "     [ number, 1 ]\n",
            "     [ symbol, y ]\n",
            "   ]\n",
            " ]\n",
        )
    );
}

#[test]
fn test_pretty_call() {
    assert_eq!(
        pretty("print(\"a\");"),
        concat!(
            " [ call\n",
            "   [ symbol, print ]\n",
            "   [\n",
            "     [ string, 'a' ]\n",
            "   ]\n",
            " ]\n",
        )
    );
    assert_eq!(
        pretty("f();"),
        concat!(" [ call\n", "   [ symbol, f ]\n", "   [ ]\n", " ]\n")
    );
}

#[test]
fn test_pretty_function() {
    assert_eq!(
        pretty("{:(a) a;};"),
        concat!(
            " [ function\n",
            "   [\n",
            "     [ symbol, a ]\n",
            "   ]\n",
            "   [\n",
            "     [ symbol, a ]\n",
            "   ]\n",
            " ]\n",
        )
    );
    assert_eq!(
        pretty("{};"),
        concat!(" [ function\n", "   [ ]\n", "   [\n", "   ]\n", " ]\n")
    );
}

#[test]
fn test_pretty_colors() {
    let interner = StringInterner::new();
    let expr = parse_one("n;", &interner);
    assert_eq!(
        pretty_print(&expr, &interner, true),
        " [ \x1b[3;33msymbol\x1b[0m, \x1b[33mn\x1b[0m ]\n"
    );
}

#[test]
fn test_minimise_leaves() {
    assert_eq!(minimised("x;"), "x");
    assert_eq!(minimised("1.50;"), "1.50");
    assert_eq!(minimised("\"it\";"), "'it'");
    assert_eq!(minimised("\"it's\";"), "\"it's\"");
}

#[test]
fn test_minimise_strips_whitespace() {
    assert_eq!(minimised("x = { :( a , b ) a + b ; } ;"), "x={:(a,b)a+b}");
    assert_eq!(minimised("f( 1 , g ( ) ) ;"), "f(1,g())");
}

#[test]
fn test_minimise_function_without_params() {
    assert_eq!(minimised("{ 1; 2; };"), "{1;2}");
    assert_eq!(minimised("{};"), "{}");
}

#[test]
fn test_minimise_program() {
    let interner = StringInterner::new();
    let statements = match cell_parse::parse("a = 1;\nprint( a );", &interner) {
        Ok(statements) => statements,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(minimise_program(&statements, &interner), "a=1;print(a);");
}

#[test]
fn test_minimised_source_parses_back() {
    let interner = StringInterner::new();
    for source in [
        "x = {:(a, b) c = a * b; c - 1;};",
        "f(1)(2, 'x');",
        "{print('hi');}();",
        "a = b = 3;",
        "1 + x = 2;",
    ] {
        let expr = parse_one(source, &interner);
        let text = format!("{};", minimise(&expr, &interner));
        assert_eq!(parse_one(&text, &interner), expr, "via {text:?}");
    }
}

#[test]
fn test_format_token() {
    let symbol = cell_ir::Token::new(TokenKind::Symbol, "x", Span::new(0, 1));
    assert_eq!(format_token(&symbol, false), " [ symbol, 'x' ]");
    let paren = cell_ir::Token::punct(TokenKind::LParen, Span::new(1, 2));
    assert_eq!(format_token(&paren, false), " [ (, '' ]");
    assert_eq!(
        format_token(&symbol, true),
        " [ \x1b[33msymbol\x1b[0m, '\x1b[32mx\x1b[0m' ]"
    );
}

#[test]
fn test_color_mode() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
    assert_eq!(ColorMode::from_flag("always"), Some(ColorMode::Always));
    assert_eq!(ColorMode::from_flag("sometimes"), None);
}
