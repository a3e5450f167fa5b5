use super::*;
use pretty_assertions::assert_eq;
use scaly_ir::LiteralKind;

#[test]
fn keywords_are_not_identifiers() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("class Foo", &interner);
    assert_eq!(lexer.parse_identifier(), None);
    assert!(!lexer.parse_keyword(Keyword::Function));
    assert!(lexer.parse_keyword(Keyword::Class));
    assert_eq!(lexer.parse_identifier(), Some(interner.intern("Foo")));
    assert!(lexer.is_at_end());
}

#[test]
fn failed_requests_consume_nothing() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("x", &interner);
    let before = lexer.snapshot();
    assert!(!lexer.parse_punctuation(Punctuation::Semicolon));
    assert_eq!(lexer.parse_literal(), None);
    assert_eq!(lexer.parse_binary_operator(), None);
    assert!(!lexer.parse_keyword(Keyword::Let));
    assert_eq!(lexer.snapshot(), before);
}

#[test]
fn matching_requests_consume_without_advance() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("let x ; 1 + y", &interner);
    assert!(lexer.parse_keyword(Keyword::Let));
    assert_eq!(lexer.snapshot(), 1);
    assert_eq!(lexer.parse_identifier(), Some(interner.intern("x")));
    assert!(lexer.parse_punctuation(Punctuation::Semicolon));
    assert!(lexer.parse_literal().is_some());
    assert_eq!(lexer.parse_binary_operator(), Some(interner.intern("+")));
    assert_eq!(lexer.parse_identifier(), Some(interner.intern("y")));
    assert!(lexer.is_at_end());
}

#[test]
fn positions_track_consumed_tokens() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("let  x", &interner);
    assert_eq!(lexer.position(), Position::START);
    assert_eq!(lexer.previous_position(), Position::START);

    assert!(lexer.parse_keyword(Keyword::Let));
    assert_eq!(lexer.position(), Position::new(5, 1, 6));
    assert_eq!(lexer.previous_position(), Position::new(3, 1, 4));

    assert!(lexer.parse_identifier().is_some());
    assert_eq!(lexer.position(), Position::new(6, 1, 7));
    assert_eq!(lexer.previous_position(), Position::new(6, 1, 7));
}

#[test]
fn advance_stops_at_eof() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("a", &interner);
    lexer.advance();
    lexer.advance();
    lexer.advance();
    assert!(lexer.is_at_end());
    assert_eq!(lexer.snapshot(), 1);
}

#[test]
fn snapshot_and_restore() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("a b c", &interner);
    lexer.advance();
    let saved = lexer.snapshot();
    lexer.advance();
    lexer.advance();
    lexer.restore(saved);
    assert_eq!(lexer.parse_identifier(), Some(interner.intern("b")));
}

#[test]
fn angle_brackets_and_caret_match_punctuation() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("List<T> x^1", &interner);
    assert!(lexer.parse_identifier().is_some());
    assert!(lexer.parse_punctuation(Punctuation::LeftAngular));
    assert!(lexer.parse_identifier().is_some());
    assert!(lexer.parse_punctuation(Punctuation::RightAngular));
    assert!(lexer.parse_identifier().is_some());
    assert!(!lexer.parse_punctuation(Punctuation::Dollar));
    assert!(lexer.parse_punctuation(Punctuation::Caret));
    assert_eq!(
        lexer.parse_literal(),
        Some(Literal::new(LiteralKind::Numeric, interner.intern("1")))
    );
}

#[test]
fn other_operators_are_not_punctuation() {
    let interner = StringInterner::new();
    let mut lexer = Lexer::new("a + b", &interner);
    lexer.advance();
    assert!(!lexer.parse_punctuation(Punctuation::LeftAngular));
    assert_eq!(lexer.parse_prefix_operator(), None);
    assert_eq!(lexer.parse_postfix_operator(), None);
    assert_eq!(lexer.parse_binary_operator(), Some(interner.intern("+")));
}

#[test]
fn from_tokens_appends_missing_eof() {
    let interner = StringInterner::new();
    let lexer = Lexer::from_tokens(TokenList::new(), &interner);
    assert!(lexer.is_at_end());
    assert_eq!(lexer.token_count(), 1);
    assert_eq!(lexer.position(), Position::START);
}
