//! Token vocabulary shared by the lexer, the parser and its errors.
//!
//! Keywords and punctuation are table-driven: [`Keyword::ALL`] is the single
//! list consulted both when matching a keyword and when deciding whether an
//! identifier-shaped word is reserved.

use crate::{Name, Span};
use std::fmt;

/// Reserved words.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Keyword {
    Use,
    Class,
    Function,
    If,
    Else,
    Switch,
    Case,
    Default,
    Catch,
    For,
    In,
    While,
    Repeat,
    Return,
    Throw,
    Break,
    Throws,
    Existing,
    Override,
    Static,
    Let,
    Var,
    Mutable,
    Is,
    As,
    Init,
    Enum,
    Super,
    This,
    Null,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 30] = [
        Keyword::Use,
        Keyword::Class,
        Keyword::Function,
        Keyword::If,
        Keyword::Else,
        Keyword::Switch,
        Keyword::Case,
        Keyword::Default,
        Keyword::Catch,
        Keyword::For,
        Keyword::In,
        Keyword::While,
        Keyword::Repeat,
        Keyword::Return,
        Keyword::Throw,
        Keyword::Break,
        Keyword::Throws,
        Keyword::Existing,
        Keyword::Override,
        Keyword::Static,
        Keyword::Let,
        Keyword::Var,
        Keyword::Mutable,
        Keyword::Is,
        Keyword::As,
        Keyword::Init,
        Keyword::Enum,
        Keyword::Super,
        Keyword::This,
        Keyword::Null,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Use => "use",
            Keyword::Class => "class",
            Keyword::Function => "function",
            Keyword::If => "if",
            Keyword::Else => "else",
            Keyword::Switch => "switch",
            Keyword::Case => "case",
            Keyword::Default => "default",
            Keyword::Catch => "catch",
            Keyword::For => "for",
            Keyword::In => "in",
            Keyword::While => "while",
            Keyword::Repeat => "repeat",
            Keyword::Return => "return",
            Keyword::Throw => "throw",
            Keyword::Break => "break",
            Keyword::Throws => "throws",
            Keyword::Existing => "existing",
            Keyword::Override => "override",
            Keyword::Static => "static",
            Keyword::Let => "let",
            Keyword::Var => "var",
            Keyword::Mutable => "mutable",
            Keyword::Is => "is",
            Keyword::As => "as",
            Keyword::Init => "init",
            Keyword::Enum => "enum",
            Keyword::Super => "super",
            Keyword::This => "this",
            Keyword::Null => "null",
        }
    }

    /// The keyword spelled `word`, if any.
    pub fn lookup(word: &str) -> Option<Keyword> {
        Keyword::ALL.into_iter().find(|kw| kw.as_str() == word)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Punctuation tokens.
///
/// `<`, `>` and `^` are lexed as operators; the lexer's punctuation check
/// accepts an operator with the same spelling.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Punctuation {
    Semicolon,
    Equal,
    LeftAngular,
    RightAngular,
    Comma,
    LeftParen,
    RightParen,
    LeftCurly,
    RightCurly,
    LeftBracket,
    RightBracket,
    Colon,
    Dot,
    Question,
    Underscore,
    Arrow,
    Dollar,
    Hash,
    Caret,
}

impl Punctuation {
    pub const ALL: [Punctuation; 19] = [
        Punctuation::Semicolon,
        Punctuation::Equal,
        Punctuation::LeftAngular,
        Punctuation::RightAngular,
        Punctuation::Comma,
        Punctuation::LeftParen,
        Punctuation::RightParen,
        Punctuation::LeftCurly,
        Punctuation::RightCurly,
        Punctuation::LeftBracket,
        Punctuation::RightBracket,
        Punctuation::Colon,
        Punctuation::Dot,
        Punctuation::Question,
        Punctuation::Underscore,
        Punctuation::Arrow,
        Punctuation::Dollar,
        Punctuation::Hash,
        Punctuation::Caret,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Punctuation::Semicolon => ";",
            Punctuation::Equal => "=",
            Punctuation::LeftAngular => "<",
            Punctuation::RightAngular => ">",
            Punctuation::Comma => ",",
            Punctuation::LeftParen => "(",
            Punctuation::RightParen => ")",
            Punctuation::LeftCurly => "{",
            Punctuation::RightCurly => "}",
            Punctuation::LeftBracket => "[",
            Punctuation::RightBracket => "]",
            Punctuation::Colon => ":",
            Punctuation::Dot => ".",
            Punctuation::Question => "?",
            Punctuation::Underscore => "_",
            Punctuation::Arrow => "->",
            Punctuation::Dollar => "$",
            Punctuation::Hash => "#",
            Punctuation::Caret => "^",
        }
    }

    pub fn lookup(text: &str) -> Option<Punctuation> {
        Punctuation::ALL.into_iter().find(|p| p.as_str() == text)
    }
}

impl fmt::Display for Punctuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LiteralKind {
    /// Integer or floating point, spelled as written.
    Numeric,
    /// String contents with escapes resolved.
    String,
    /// Character contents with escapes resolved.
    Character,
}

/// A literal value. The text is kept verbatim (numbers) or unescaped
/// (strings, characters); no numeric conversion happens in the front end.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Literal {
    pub kind: LiteralKind,
    pub value: Name,
}

impl Literal {
    #[inline]
    pub const fn new(kind: LiteralKind, value: Name) -> Self {
        Literal { kind, value }
    }
}

/// A token with its span in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Identifier-shaped word; keywords included (reservation is checked
    /// against [`Keyword::ALL`] when the parser asks for an identifier).
    Identifier(Name),
    Literal(Literal),
    Punctuation(Punctuation),
    /// Operator bound only to its right operand: `-x`.
    PrefixOperator(Name),
    /// Operator with whitespace on both sides or neither: `a + b`, `a+b`.
    BinaryOperator(Name),
    /// Operator bound only to its left operand: `x!`.
    PostfixOperator(Name),
    /// Input the lexer could not classify.
    Invalid,
    Eof,
}

impl TokenKind {
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Operator spelling for any operator fixity.
    pub fn operator(&self) -> Option<Name> {
        match *self {
            TokenKind::PrefixOperator(name)
            | TokenKind::BinaryOperator(name)
            | TokenKind::PostfixOperator(name) => Some(name),
            _ => None,
        }
    }
}

/// The lexer's output. Always terminated by exactly one `Eof` token.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keyword_table_round_trips() {
        for keyword in Keyword::ALL {
            assert_eq!(Keyword::lookup(keyword.as_str()), Some(keyword));
        }
        assert_eq!(Keyword::lookup("klass"), None);
    }

    #[test]
    fn punctuation_lookup() {
        assert_eq!(Punctuation::lookup("->"), Some(Punctuation::Arrow));
        assert_eq!(Punctuation::lookup("}"), Some(Punctuation::RightCurly));
        assert_eq!(Punctuation::lookup("=="), None);
    }

    #[test]
    fn operator_spelling_ignores_fixity() {
        let name = Name::EMPTY;
        assert_eq!(TokenKind::PrefixOperator(name).operator(), Some(name));
        assert_eq!(TokenKind::PostfixOperator(name).operator(), Some(name));
        assert_eq!(TokenKind::Eof.operator(), None);
    }
}
