//! Lexer for Scaly using logos with string interning.
//!
//! [`lex`] turns source text into a [`TokenList`]; [`Lexer`] is the cursor
//! the parser drives over that list through the [`TokenCursor`] contract.

mod cursor;
mod raw_token;

pub use cursor::{Lexer, TokenCursor};

use logos::Logos;
use raw_token::RawToken;
use scaly_ir::{
    LineIndex, Literal, LiteralKind, Punctuation, Span, StringInterner, Token, TokenKind,
    TokenList,
};

/// Lex source code into a `TokenList` terminated by `Eof`.
///
/// Unrecognized input becomes [`TokenKind::Invalid`]; the parser reports it.
pub fn lex(source: &str, interner: &StringInterner) -> TokenList {
    let index = LineIndex::new(source);
    let mut result = TokenList::with_capacity(source.len() / 4 + 1);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let range = logos.span();
        let span = Span::new(index.position(range.start), index.position(range.end));
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => {}
            Ok(raw) => {
                let kind = convert_token(raw, slice, source, range.start, interner);
                result.push(Token::new(kind, span));
            }
            Err(()) => {
                result.push(Token::new(TokenKind::Invalid, span));
            }
        }
    }

    result.push(Token::new(TokenKind::Eof, Span::point(index.end())));
    tracing::debug!(tokens = result.len(), bytes = source.len(), "lexed source");
    result
}

/// Convert a raw token to a `TokenKind`, interning text.
fn convert_token(
    raw: RawToken,
    slice: &str,
    source: &str,
    start: usize,
    interner: &StringInterner,
) -> TokenKind {
    let punctuation = TokenKind::Punctuation;
    match raw {
        RawToken::Semicolon => punctuation(Punctuation::Semicolon),
        RawToken::Comma => punctuation(Punctuation::Comma),
        RawToken::LeftParen => punctuation(Punctuation::LeftParen),
        RawToken::RightParen => punctuation(Punctuation::RightParen),
        RawToken::LeftCurly => punctuation(Punctuation::LeftCurly),
        RawToken::RightCurly => punctuation(Punctuation::RightCurly),
        RawToken::LeftBracket => punctuation(Punctuation::LeftBracket),
        RawToken::RightBracket => punctuation(Punctuation::RightBracket),
        RawToken::Colon => punctuation(Punctuation::Colon),
        RawToken::Dot => punctuation(Punctuation::Dot),
        RawToken::Question => punctuation(Punctuation::Question),
        RawToken::Dollar => punctuation(Punctuation::Dollar),
        RawToken::Hash => punctuation(Punctuation::Hash),
        RawToken::Underscore => punctuation(Punctuation::Underscore),

        RawToken::Operator => match slice {
            "=" => punctuation(Punctuation::Equal),
            "->" => punctuation(Punctuation::Arrow),
            _ => operator(slice, source, start, interner),
        },

        RawToken::HexNumber | RawToken::Integer | RawToken::Float => TokenKind::Literal(
            Literal::new(LiteralKind::Numeric, interner.intern(slice)),
        ),
        RawToken::String => TokenKind::Literal(Literal::new(
            LiteralKind::String,
            interner.intern(&unescape(&slice[1..slice.len() - 1])),
        )),
        RawToken::Character => TokenKind::Literal(Literal::new(
            LiteralKind::Character,
            interner.intern(&unescape(&slice[1..slice.len() - 1])),
        )),

        RawToken::Identifier => TokenKind::Identifier(interner.intern(slice)),

        // Filtered out by `lex`.
        RawToken::LineComment | RawToken::BlockComment => TokenKind::Invalid,
    }
}

/// Classify an operator run by what touches it on either side.
///
/// Bound on both sides or on neither is binary (`a+b`, `a + b`); bound only
/// on the right is prefix (`-a`); bound only on the left is postfix (`a!`).
fn operator(slice: &str, source: &str, start: usize, interner: &StringInterner) -> TokenKind {
    let bytes = source.as_bytes();
    let end = start + slice.len();
    let left_bound = start
        .checked_sub(1)
        .and_then(|i| bytes.get(i))
        .is_some_and(|&b| !b.is_ascii_whitespace() && !b"([{,;:".contains(&b));
    let right_bound = bytes
        .get(end)
        .is_some_and(|&b| !b.is_ascii_whitespace() && !b")]},;:.".contains(&b));

    let name = interner.intern(slice);
    match (left_bound, right_bound) {
        (false, true) => TokenKind::PrefixOperator(name),
        (true, false) => TokenKind::PostfixOperator(name),
        _ => TokenKind::BinaryOperator(name),
    }
}

/// Resolve escape sequences in string and character literal contents.
fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => result.push('\n'),
                Some('r') => result.push('\r'),
                Some('t') => result.push('\t'),
                Some('0') => result.push('\0'),
                Some('\\') | None => result.push('\\'),
                Some('"') => result.push('"'),
                Some('\'') => result.push('\''),
                Some(c) => {
                    result.push('\\');
                    result.push(c);
                }
            }
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests;
