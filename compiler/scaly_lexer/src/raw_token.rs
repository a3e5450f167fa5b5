//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! interning, operator fixity and final token conversion.

use logos::{Lexer, Logos};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    /// `/* ... */`, not nested. An unterminated comment runs to the end of
    /// the input and is reported as invalid.
    #[token("/*", block_comment)]
    BlockComment,

    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftCurly,
    #[token("}")]
    RightCurly,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(":")]
    Colon,
    #[token(".")]
    Dot,
    #[token("?")]
    Question,
    #[token("$")]
    Dollar,
    #[token("#")]
    Hash,
    #[token("_", priority = 3)]
    Underscore,

    /// A run of operator characters; `=` and `->` become punctuation.
    ///
    /// Inside a run `/` must be followed by an operator character other
    /// than `*`, so a run never swallows the start of a comment.
    #[regex(r"([+\-*%=<>!&|\^~]|/[+\-%=<>!&|\^~])+")]
    #[token("/")]
    Operator,

    #[regex(r"0x[0-9a-fA-F]+")]
    HexNumber,

    #[regex(r"[0-9]+")]
    Integer,

    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+")]
    Float,

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    #[regex(r"'([^'\\\n\r]|\\.)+'")]
    Character,

    /// Identifier or keyword; reservation is decided by the cursor.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
}

/// Skip to the end of a block comment.
fn block_comment(lex: &mut Lexer<RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}
