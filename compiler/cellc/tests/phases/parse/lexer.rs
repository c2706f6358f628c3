use cell_lexer::{lex, Lexer, ReaderSource, TokenKind};
use pretty_assertions::assert_eq;
use std::io::Cursor;

fn kinds_and_text(source: &str) -> Vec<(TokenKind, String)> {
    lex(source)
        .unwrap()
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect()
}

#[test]
fn test_program_tokens() {
    let tokens = kinds_and_text("double = {:(x) 2 * x;};");
    let expected = vec![
        (TokenKind::Symbol, "double"),
        (TokenKind::Equals, ""),
        (TokenKind::LBrace, ""),
        (TokenKind::Colon, ""),
        (TokenKind::LParen, ""),
        (TokenKind::Symbol, "x"),
        (TokenKind::RParen, ""),
        (TokenKind::Number, "2"),
        (TokenKind::Operation, "*"),
        (TokenKind::Symbol, "x"),
        (TokenKind::Semicolon, ""),
        (TokenKind::RBrace, ""),
        (TokenKind::Semicolon, ""),
    ];
    assert_eq!(
        tokens,
        expected
            .into_iter()
            .map(|(k, t)| (k, t.to_string()))
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_crlf_and_lf_lex_the_same() {
    assert_eq!(kinds_and_text("a;\r\nb;\r\n"), kinds_and_text("a;\nb;\n"));
}

#[test]
fn test_reader_source_lexes_like_a_string() {
    let text = "x = 'two\nlines';\ny = 1.5;\n";
    let from_reader: Vec<_> = Lexer::new(ReaderSource::new(Cursor::new(text)))
        .map(|t| t.unwrap().text)
        .collect();
    let from_str: Vec<_> = lex(text).unwrap().into_iter().map(|t| t.text).collect();
    assert_eq!(from_reader, from_str);
}

#[test]
fn test_spans_are_character_offsets() {
    let tokens = lex("é = 'ü';").unwrap_err();
    assert_eq!(tokens.to_string(), "Unrecognised character - é");
    let tokens = lex("x='ü';y").unwrap();
    let y = tokens.last().unwrap();
    assert_eq!((y.span.start, y.span.end), (6, 7));
}

#[test]
fn test_errors_end_the_stream() {
    let results: Vec<_> = Lexer::new("a \t b".chars()).collect();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err().to_string(),
        "Tab characters are not allowed in Cell."
    );
}
