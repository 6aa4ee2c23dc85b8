use crate::error::SyntaxErrorType::{self, *};
use crate::lex::{lex_all, lex_next, Lexer};
use crate::token::TokenType::{self, *};

fn check(code: &str, expecteds: &[TokenType], expected_err: Option<SyntaxErrorType>) -> () {
    let mut lexer = Lexer::new(code.as_bytes().to_vec());
    for expected in expecteds {
        match lex_next(&mut lexer) {
            Err(e) => panic!("Failed to lex code with error {:?}: {}", e.typ(), code),
            Ok(t) => assert_eq!(t.typ(), *expected),
        };
    }
    match lex_next(&mut lexer) {
        Err(e) => match expected_err {
            Some(expected) => assert_eq!(e.typ(), expected),
            None => panic!("Failed to lex code with error {:?}: {}", e.typ(), code),
        },
        Ok(t) => match expected_err {
            Some(_) => panic!("Code lexed successfully: {}", code),
            None => assert_eq!(EOF, t.typ()),
        },
    };
}

fn check_texts(code: &str, expecteds: &[(TokenType, &str)]) -> () {
    let mut lexer = Lexer::new(code.as_bytes().to_vec());
    let lexed = lex_all(&mut lexer).unwrap();
    let actuals = lexed
        .tokens
        .iter()
        .map(|t| (t.typ(), t.loc().as_str()))
        .collect::<Vec<_>>();
    let mut expecteds = expecteds.to_vec();
    expecteds.push((EOF, ""));
    assert_eq!(actuals, expecteds);
}

#[test]
fn test_lex_parentheses() {
    check("(", &[ParenthesisOpen], None);
    check(")", &[ParenthesisClose], None);
    check("()", &[ParenthesisOpen, ParenthesisClose], None);
}

#[test]
fn test_lex_words() {
    check("add", &[Word], None);
    check("add subtract", &[Word, Word], None);
    // A word run ends at the first non-lowercase byte.
    check("add4", &[Word, Number], None);
}

#[test]
fn test_lex_numbers() {
    check("4", &[Number], None);
    check("23 8", &[Number, Number], None);
    check("23(", &[Number, ParenthesisOpen], None);
}

#[test]
fn test_lex_strings() {
    check("'hello world'", &[String], None);
    check("''", &[String], None);
    check("'foo' 'bar'", &[String, String], None);
    check("'foo", &[], Some(UnterminatedString));
}

#[test]
fn test_lex_string_strips_delimiters() {
    check_texts("'foo'", &[(String, "foo")]);
    check_texts("''", &[(String, "")]);
}

#[test]
fn test_lex_unterminated_string_position() {
    let mut lexer = Lexer::new(b"add 'foo".to_vec());
    assert_eq!(lex_next(&mut lexer).unwrap().typ(), Word);
    let err = lex_next(&mut lexer).unwrap_err();
    assert_eq!(err.typ(), UnterminatedString);
    assert_eq!(err.position(), 4);
}

#[test]
fn test_lex_whitespace() {
    check("  ", &[], None);
    check(" ( add ) ", &[ParenthesisOpen, Word, ParenthesisClose], None);
    check("(add\n\t4)", &[ParenthesisOpen, Word, Number, ParenthesisClose], None);
}

#[test]
fn test_lex_call_expression() {
    check_texts(
        "(add 4 (subtract 23 8))",
        &[
            (ParenthesisOpen, "("),
            (Word, "add"),
            (Number, "4"),
            (ParenthesisOpen, "("),
            (Word, "subtract"),
            (Number, "23"),
            (Number, "8"),
            (ParenthesisClose, ")"),
            (ParenthesisClose, ")"),
        ],
    );
}

#[test]
fn test_lex_unknown_character_is_diagnostic() {
    let mut lexer = Lexer::new(b"(add @ 4)".to_vec());
    let lexed = lex_all(&mut lexer).unwrap();
    let types = lexed.tokens.iter().map(|t| t.typ()).collect::<Vec<_>>();
    assert_eq!(
        types,
        vec![ParenthesisOpen, Word, Number, ParenthesisClose, EOF]
    );
    assert_eq!(lexed.diagnostics.len(), 1);
    assert_eq!(lexed.diagnostics[0].position, 5);
    assert_eq!(lexed.diagnostics[0].byte, b'@');
}

#[test]
fn test_lex_empty_input() {
    check("", &[], None);
}
