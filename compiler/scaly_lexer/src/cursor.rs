//! Token cursor the parser consumes input through.
//!
//! The parser only ever sees input through [`TokenCursor`]: it asks for a
//! specific keyword, punctuation, identifier, literal or operator and gets
//! back whether (or what) was consumed. A failed request consumes nothing.

use crate::lex;
use rustc_hash::FxHashMap;
use scaly_ir::{
    Keyword, Literal, Name, Position, Punctuation, Span, StringInterner, Token, TokenKind,
    TokenList,
};

/// The lexer contract used by the parser.
///
/// Requests are match-and-consume: a `parse_*` call that matches consumes
/// the token in the same step, so there is no separate peek followed by
/// [`TokenCursor::advance`]. `advance` only skips a token unconditionally.
pub trait TokenCursor {
    /// Saved cursor state, restorable with [`TokenCursor::restore`].
    type Snapshot: Copy;

    /// Start of the current token.
    fn position(&self) -> Position;

    /// End of the most recently consumed token, or the start of the input
    /// before anything was consumed.
    fn previous_position(&self) -> Position;

    fn is_at_end(&self) -> bool;

    /// Consume the current token unconditionally. A no-op at end of input.
    fn advance(&mut self);

    fn parse_keyword(&mut self, keyword: Keyword) -> bool;

    fn parse_punctuation(&mut self, punctuation: Punctuation) -> bool;

    /// Consume an identifier that is not a reserved word.
    fn parse_identifier(&mut self) -> Option<Name>;

    fn parse_literal(&mut self) -> Option<Literal>;

    fn parse_prefix_operator(&mut self) -> Option<Name>;

    fn parse_binary_operator(&mut self) -> Option<Name>;

    fn parse_postfix_operator(&mut self) -> Option<Name>;

    fn snapshot(&self) -> Self::Snapshot;

    fn restore(&mut self, snapshot: Self::Snapshot);
}

/// Cursor over the tokens of one source text.
///
/// Invariant: the token list ends with `Eof` and the cursor never moves past
/// it.
pub struct Lexer {
    tokens: TokenList,
    pos: usize,
    /// Interned keyword spellings.
    keywords: FxHashMap<Name, Keyword>,
    /// Punctuation that the lexer emits as operator runs (`<`, `>`, `^`).
    operator_punctuation: FxHashMap<Name, Punctuation>,
    eof: Token,
}

impl Lexer {
    /// Lex `source` and position the cursor on its first token.
    pub fn new(source: &str, interner: &StringInterner) -> Self {
        Self::from_tokens(lex(source, interner), interner)
    }

    /// Cursor over an already lexed token list.
    pub fn from_tokens(mut tokens: TokenList, interner: &StringInterner) -> Self {
        let eof = match tokens.as_slice().last() {
            Some(&last) if last.kind.is_eof() => last,
            Some(&last) => {
                let eof = Token::new(TokenKind::Eof, Span::point(last.span.end));
                tokens.push(eof);
                eof
            }
            None => {
                let eof = Token::new(TokenKind::Eof, Span::point(Position::START));
                tokens.push(eof);
                eof
            }
        };
        let keywords = Keyword::ALL
            .into_iter()
            .map(|keyword| (interner.intern(keyword.as_str()), keyword))
            .collect();
        let operator_punctuation = Punctuation::ALL
            .into_iter()
            .filter(|p| p.as_str().bytes().all(|b| b"+-*/%=<>!&|^~".contains(&b)))
            .map(|p| (interner.intern(p.as_str()), p))
            .collect();
        Lexer {
            tokens,
            pos: 0,
            keywords,
            operator_punctuation,
            eof,
        }
    }

    #[inline]
    pub fn current(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(self.eof)
    }

    /// Number of tokens, `Eof` included.
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Whether `name` spells a reserved word.
    pub fn is_keyword(&self, name: Name) -> bool {
        self.keywords.contains_key(&name)
    }

    /// Consume the current token if `f` maps its kind to a value.
    fn take<T>(&mut self, f: impl FnOnce(&TokenKind) -> Option<T>) -> Option<T> {
        let value = f(&self.current().kind)?;
        self.advance();
        Some(value)
    }
}

impl TokenCursor for Lexer {
    type Snapshot = usize;

    fn position(&self) -> Position {
        self.current().span.start
    }

    fn previous_position(&self) -> Position {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.span.end,
            None => Position::START,
        }
    }

    fn is_at_end(&self) -> bool {
        self.current().kind.is_eof()
    }

    fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    fn parse_keyword(&mut self, keyword: Keyword) -> bool {
        let matched = match self.current().kind {
            TokenKind::Identifier(name) => self.keywords.get(&name) == Some(&keyword),
            _ => false,
        };
        if matched {
            self.advance();
        }
        matched
    }

    fn parse_punctuation(&mut self, punctuation: Punctuation) -> bool {
        let matched = match self.current().kind {
            TokenKind::Punctuation(p) => p == punctuation,
            // `<`, `>` and `^` arrive as operators.
            kind => kind
                .operator()
                .is_some_and(|name| self.operator_punctuation.get(&name) == Some(&punctuation)),
        };
        if matched {
            self.advance();
        }
        matched
    }

    fn parse_identifier(&mut self) -> Option<Name> {
        let name = match self.current().kind {
            TokenKind::Identifier(name) if !self.is_keyword(name) => name,
            _ => return None,
        };
        self.advance();
        Some(name)
    }

    fn parse_literal(&mut self) -> Option<Literal> {
        self.take(|kind| match *kind {
            TokenKind::Literal(literal) => Some(literal),
            _ => None,
        })
    }

    fn parse_prefix_operator(&mut self) -> Option<Name> {
        self.take(|kind| match *kind {
            TokenKind::PrefixOperator(name) => Some(name),
            _ => None,
        })
    }

    fn parse_binary_operator(&mut self) -> Option<Name> {
        self.take(|kind| match *kind {
            TokenKind::BinaryOperator(name) => Some(name),
            _ => None,
        })
    }

    fn parse_postfix_operator(&mut self) -> Option<Name> {
        self.take(|kind| match *kind {
            TokenKind::PostfixOperator(name) => Some(name),
            _ => None,
        })
    }

    fn snapshot(&self) -> usize {
        self.pos
    }

    fn restore(&mut self, snapshot: usize) {
        debug_assert!(
            snapshot < self.tokens.len(),
            "cursor position {snapshot} out of bounds (max {})",
            self.tokens.len()
        );
        self.pos = snapshot;
    }
}

#[cfg(test)]
mod tests;
