//! Unit tests for the lexer module.
//!
//! Covers keywords, identifiers, literals, operators, comments and the
//! error raised for characters no pattern accepts.

use crate::errors::errors::ErrorImpl;

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source.to_string(), Some("test.lj".to_string()))
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

#[test]
fn test_tokenize_keywords() {
    assert_eq!(
        kinds("def if else while return break continue test"),
        vec![
            TokenKind::Def,
            TokenKind::If,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Return,
            TokenKind::Break,
            TokenKind::Continue,
            TokenKind::Test,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_2 _hidden defined".to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_2");
    assert_eq!(tokens[2].value, "_hidden");
    // Keyword prefix does not make a keyword.
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].value, "defined");
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_literals() {
    let source = "42 true false \"hi\"".to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::Bool);
    assert_eq!(tokens[1].value, "true");
    assert_eq!(tokens[2].kind, TokenKind::Bool);
    assert_eq!(tokens[2].value, "false");
    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].value, "hi");
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""a\n\t\"b\\""#.to_string();
    let tokens = tokenize(source, None).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "a\n\t\"b\\");
}

#[test]
fn test_tokenize_operators_longest_first() {
    assert_eq!(
        kinds("== = != ! <= < >= > -> - || &&"),
        vec![
            TokenKind::Equals,
            TokenKind::Assignment,
            TokenKind::NotEquals,
            TokenKind::Not,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::GreaterEquals,
            TokenKind::Greater,
            TokenKind::Arrow,
            TokenKind::Dash,
            TokenKind::Or,
            TokenKind::And,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("{ } ( ) ; : , + * / %"),
        vec![
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::Plus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("a = 1; // trailing\n// whole line\nb"),
        vec![
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_spans() {
    let tokens = tokenize("ab = 10;".to_string(), Some("span.lj".to_string())).unwrap();

    assert_eq!(tokens[0].span.start.0, 0);
    assert_eq!(tokens[0].span.end.0, 2);
    assert_eq!(tokens[2].span.start.0, 5);
    assert_eq!(tokens[2].span.end.0, 7);
    assert_eq!(tokens[2].span.start.1.as_str(), "span.lj");
}

#[test]
fn test_empty_source_yields_eof() {
    assert_eq!(kinds(""), vec![TokenKind::EOF]);
    assert_eq!(kinds("   \n\t"), vec![TokenKind::EOF]);
}

#[test]
fn test_unrecognised_character() {
    let err = tokenize("a = 1 @ 2;".to_string(), None).unwrap_err();

    assert_eq!(
        err.kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        }
    );
    assert_eq!(err.get_position().0, 6);
}

#[test]
fn test_unterminated_string() {
    let err = tokenize("s = \"open".to_string(), None).unwrap_err();

    assert_eq!(
        err.kind(),
        &ErrorImpl::UnrecognisedToken {
            token: "\"".to_string()
        }
    );
}
