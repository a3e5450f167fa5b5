use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scaly_ir::Position;

fn kinds(source: &str, interner: &StringInterner) -> Vec<TokenKind> {
    lex(source, interner).iter().map(|token| token.kind).collect()
}

fn text(interner: &StringInterner, kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Identifier(name)
        | TokenKind::PrefixOperator(name)
        | TokenKind::BinaryOperator(name)
        | TokenKind::PostfixOperator(name) => interner.lookup(name),
        TokenKind::Literal(literal) => interner.lookup(literal.value),
        TokenKind::Punctuation(p) => p.as_str(),
        TokenKind::Invalid => "<invalid>",
        TokenKind::Eof => "<eof>",
    }
}

#[test]
fn lex_basic() {
    let interner = StringInterner::new();
    let tokens = kinds("let x = 42", &interner);

    assert_eq!(tokens.len(), 5); // let, x, =, 42, EOF
    assert_eq!(tokens[0], TokenKind::Identifier(interner.intern("let")));
    assert_eq!(tokens[1], TokenKind::Identifier(interner.intern("x")));
    assert_eq!(tokens[2], TokenKind::Punctuation(Punctuation::Equal));
    assert_eq!(
        tokens[3],
        TokenKind::Literal(Literal::new(LiteralKind::Numeric, interner.intern("42")))
    );
    assert_eq!(tokens[4], TokenKind::Eof);
}

#[test]
fn empty_source_is_just_eof() {
    let interner = StringInterner::new();
    let tokens = lex("", &interner);
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.get(0).map(|t| t.span), Some(Span::point(Position::START)));
}

#[test]
fn comments_and_whitespace_are_skipped() {
    let interner = StringInterner::new();
    let tokens = kinds("a // line\n/* block\n * more */ b", &interner);
    let spelled: Vec<_> = tokens.into_iter().map(|k| text(&interner, k)).collect();
    assert_eq!(spelled, vec!["a", "b", "<eof>"]);
}

fn spelled(source: &str) -> Vec<&'static str> {
    let interner = StringInterner::new();
    kinds(source, &interner)
        .into_iter()
        .map(|kind| text(&interner, kind))
        .collect()
}

#[test]
fn block_comments_are_trivia() {
    for source in [
        "a /* x */ b",
        "a /* x\n */ b",
        "a /* * */ b",
        "a /** doc */ b",
        "a /* x\n * y */ b",
        "a /**/ b",
        "a/*x*/b",
    ] {
        assert_eq!(spelled(source), vec!["a", "b", "<eof>"], "{source:?}");
    }
}

#[test]
fn comment_after_an_operator() {
    assert_eq!(spelled("a +/* x */ b"), vec!["a", "+", "b", "<eof>"]);
    assert_eq!(spelled("a -// x\nb"), vec!["a", "-", "b", "<eof>"]);
}

#[test]
fn slash_operators() {
    assert_eq!(spelled("a / b"), vec!["a", "/", "b", "<eof>"]);
    assert_eq!(spelled("a /= b"), vec!["a", "/=", "b", "<eof>"]);
}

#[test]
fn unterminated_block_comment_is_one_invalid_token() {
    assert_eq!(spelled("a /* never closed"), vec!["a", "<invalid>", "<eof>"]);
}

#[test]
fn spans_carry_line_and_column() {
    let interner = StringInterner::new();
    let tokens = lex("class\n  Foo", &interner);
    let foo = tokens.get(1).map(|t| t.span);
    assert_eq!(
        foo,
        Some(Span::new(Position::new(8, 2, 3), Position::new(11, 2, 6)))
    );
    let eof = tokens.get(2).map(|t| t.span.start);
    assert_eq!(eof, Some(Position::new(11, 2, 6)));
}

#[test]
fn numeric_literals_keep_their_spelling() {
    let interner = StringInterner::new();
    let spelled: Vec<_> = kinds("0x1F 12 3.25 1e10 6.0E-2", &interner)
        .into_iter()
        .map(|k| text(&interner, k))
        .collect();
    assert_eq!(spelled, vec!["0x1F", "12", "3.25", "1e10", "6.0E-2", "<eof>"]);
}

#[test]
fn string_and_character_literals_are_unescaped() {
    let interner = StringInterner::new();
    let tokens = kinds(r#""hello\n\"world\"" 'a' '\t'"#, &interner);
    assert_eq!(
        tokens[0],
        TokenKind::Literal(Literal::new(
            LiteralKind::String,
            interner.intern("hello\n\"world\"")
        ))
    );
    assert_eq!(
        tokens[1],
        TokenKind::Literal(Literal::new(LiteralKind::Character, interner.intern("a")))
    );
    assert_eq!(
        tokens[2],
        TokenKind::Literal(Literal::new(LiteralKind::Character, interner.intern("\t")))
    );
}

#[test]
fn unterminated_string_is_invalid() {
    let interner = StringInterner::new();
    let tokens = kinds("\"abc", &interner);
    assert!(tokens.contains(&TokenKind::Invalid));
    assert_eq!(tokens.last(), Some(&TokenKind::Eof));
}

#[test]
fn underscore_alone_is_punctuation() {
    let interner = StringInterner::new();
    let tokens = kinds("_ _x", &interner);
    assert_eq!(tokens[0], TokenKind::Punctuation(Punctuation::Underscore));
    assert_eq!(tokens[1], TokenKind::Identifier(interner.intern("_x")));
}

#[test]
fn equal_and_arrow_are_punctuation() {
    let interner = StringInterner::new();
    let tokens = kinds("= -> == =>", &interner);
    assert_eq!(tokens[0], TokenKind::Punctuation(Punctuation::Equal));
    assert_eq!(tokens[1], TokenKind::Punctuation(Punctuation::Arrow));
    assert_eq!(tokens[2], TokenKind::BinaryOperator(interner.intern("==")));
    assert_eq!(tokens[3], TokenKind::BinaryOperator(interner.intern("=>")));
}

#[test]
fn operator_fixity_follows_whitespace() {
    let interner = StringInterner::new();
    let minus = interner.intern("-");
    let bang = interner.intern("!");

    assert_eq!(kinds("a - b", &interner)[1], TokenKind::BinaryOperator(minus));
    assert_eq!(kinds("a-b", &interner)[1], TokenKind::BinaryOperator(minus));
    assert_eq!(kinds("a -b", &interner)[1], TokenKind::PrefixOperator(minus));
    assert_eq!(kinds("-b", &interner)[0], TokenKind::PrefixOperator(minus));
    assert_eq!(kinds("f(-b)", &interner)[2], TokenKind::PrefixOperator(minus));
    assert_eq!(kinds("a! b", &interner)[1], TokenKind::PostfixOperator(bang));
    assert_eq!(kinds("a!;", &interner)[1], TokenKind::PostfixOperator(bang));
    assert_eq!(kinds("a!.b", &interner)[1], TokenKind::PostfixOperator(bang));
}

#[test]
fn punctuation_set() {
    let interner = StringInterner::new();
    let spelled: Vec<_> = kinds("; , ( ) { } [ ] : . ? $ #", &interner)
        .into_iter()
        .map(|k| text(&interner, k))
        .collect();
    assert_eq!(
        spelled,
        vec![";", ",", "(", ")", "{", "}", "[", "]", ":", ".", "?", "$", "#", "<eof>"]
    );
}

#[test]
fn unknown_character_is_invalid() {
    let interner = StringInterner::new();
    let tokens = kinds("a @ b", &interner);
    assert_eq!(tokens[1], TokenKind::Invalid);
    assert_eq!(tokens[2], TokenKind::Identifier(interner.intern("b")));
}

proptest! {
    #[test]
    fn always_terminated_by_single_eof(source in "[ -~\n]{0,64}") {
        let interner = StringInterner::new();
        let tokens = lex(&source, &interner);
        let eofs = tokens.iter().filter(|t| t.kind.is_eof()).count();
        prop_assert_eq!(eofs, 1);
        prop_assert!(tokens.as_slice().last().is_some_and(|t| t.kind.is_eof()));
    }

    #[test]
    fn spans_are_ordered(source in "[ -~\n]{0,64}") {
        let interner = StringInterner::new();
        let tokens = lex(&source, &interner);
        for pair in tokens.as_slice().windows(2) {
            prop_assert!(pair[0].span.start <= pair[0].span.end);
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
    }
}
