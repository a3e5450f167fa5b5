//! Recursive descent parser for Scaly.
//!
//! Produces a [`SyntaxTree`] from the tokens of one compilation unit.
//!
//! Every production is a method returning `Result<_, ParserError>`. Choice
//! productions try their alternatives in order, each inside a backtracking
//! [region](region::Region) that rewinds the lexer and the tree's arenas
//! when the alternative fails. Optional parts and list items are attempted
//! the same way, so a failed attempt never leaves nodes behind.
//!
//! ```text
//! let interner = StringInterner::new();
//! let output = scaly_parse::parse("let x = 1;", "main.scaly", &interner);
//! let unit = output.result?;
//! ```

mod error;
mod grammar;
mod region;
mod stack;

pub use error::ParserError;

use region::Region;
use rustc_hash::FxHashMap;
use scaly_ir::ast::{CompilationUnit, NodeData};
use scaly_ir::{
    Array, Id, Keyword, Literal, Name, NodeId, NodeList, Position, Punctuation, Span,
    StringInterner, Syntax, SyntaxTree,
};
use scaly_lexer::{Lexer, TokenCursor};
use tracing::{debug, trace};

/// Parser state: a token cursor and the tree nodes are allocated in.
pub struct Parser<'t, L: TokenCursor> {
    lexer: L,
    tree: &'t mut SyntaxTree,
    /// Errors of expressions that failed, by start offset. An expression
    /// parse depends only on where it starts, so a failure is final.
    expression_failures: FxHashMap<u32, ParserError>,
}

/// Output of [`parse`]: the tree and the result of parsing into it.
///
/// On failure the tree holds whatever the parse kept before it gave up;
/// nothing in it is reachable from a root.
#[derive(Debug)]
pub struct ParseOutput {
    pub tree: SyntaxTree,
    pub result: Result<Id<CompilationUnit>, ParserError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        self.result.is_err()
    }
}

impl<'t, L: TokenCursor> Parser<'t, L> {
    pub fn new(lexer: L, tree: &'t mut SyntaxTree) -> Self {
        Parser {
            lexer,
            tree,
            expression_failures: FxHashMap::default(),
        }
    }

    pub fn lexer(&self) -> &L {
        &self.lexer
    }

    pub fn tree(&self) -> &SyntaxTree {
        self.tree
    }

    /// Parse a whole compilation unit and require the input to end after it.
    ///
    /// When the statement list stops early, the error that stopped it is
    /// returned if it got past the first unconsumed token; otherwise the
    /// result is [`ParserError::NotAtEnd`] at that token.
    pub fn parse_compilation_unit(
        &mut self,
        file_name: Name,
    ) -> Result<Id<CompilationUnit>, ParserError> {
        let start = self.lexer.position();
        let (statements, stop) = self.list_until_failure(Self::parse_terminated_statement);

        if !self.lexer.is_at_end() {
            let position = self.lexer.position();
            debug!(%position, "compilation unit ends early");
            if stop.deepest().position() > position {
                return Err(stop);
            }
            return Err(ParserError::NotAtEnd { position });
        }

        let unit = self.finish(
            start,
            CompilationUnit {
                file_name,
                statements,
            },
        );
        debug!(
            statements = statements.map_or(0, |list| list.len()),
            nodes = self.tree.node_count(),
            "parsed compilation unit"
        );
        Ok(unit)
    }

    // === Combinators ===

    /// Run `parse` inside a region: on failure, nothing it consumed or
    /// allocated survives.
    fn attempt<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParserError>,
    ) -> Result<T, ParserError> {
        let mut region = Region::open(self);
        let result = parse(&mut *region);
        if result.is_ok() {
            region.keep();
        }
        result
    }

    /// An optional part: absent when `parse` fails.
    fn optional<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, ParserError>,
    ) -> Option<T> {
        self.attempt(parse).ok()
    }

    /// Try `alternatives` in order from the same position; the first success
    /// wins. If all fail, their errors are aggregated.
    fn choice<T>(
        &mut self,
        alternatives: &[fn(&mut Self) -> Result<T, ParserError>],
    ) -> Result<T, ParserError> {
        let position = self.lexer.position();
        let mut errors = Vec::with_capacity(alternatives.len());
        for &alternative in alternatives {
            match self.attempt(alternative) {
                Ok(node) => return Ok(node),
                Err(error) => errors.push(error),
            }
        }
        trace!(%position, alternatives = errors.len(), "no alternative matched");
        Err(ParserError::UnableToParse { position, errors })
    }

    /// Zero or more items; `None` when there were none.
    fn list<T: Syntax>(
        &mut self,
        item: impl FnMut(&mut Self) -> Result<T, ParserError>,
    ) -> Option<NodeList<T>> {
        self.list_until_failure(item).0
    }

    /// One or more items; fails with the first item's error when there were
    /// none.
    fn non_empty_list<T: Syntax>(
        &mut self,
        item: impl FnMut(&mut Self) -> Result<T, ParserError>,
    ) -> Result<NodeList<T>, ParserError> {
        match self.list_until_failure(item) {
            (Some(list), _) => Ok(list),
            (None, error) => Err(error),
        }
    }

    /// Parse items until one fails. Returns the list and the error of the
    /// item that ended it.
    fn list_until_failure<T: Syntax>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParserError>,
    ) -> (Option<NodeList<T>>, ParserError) {
        let mut items = Array::<NodeId>::new();
        loop {
            match self.attempt(&mut item) {
                Ok(node) => items.push(self.tree.slots_mut(), node.node()),
                Err(error) => return (self.tree.finish_list(items), error),
            }
        }
    }

    // === Terminals ===

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParserError> {
        if self.lexer.parse_keyword(keyword) {
            Ok(())
        } else {
            Err(ParserError::KeywordExpected {
                position: self.lexer.position(),
                keyword,
            })
        }
    }

    fn expect_punctuation(&mut self, punctuation: Punctuation) -> Result<(), ParserError> {
        if self.lexer.parse_punctuation(punctuation) {
            Ok(())
        } else {
            Err(ParserError::PunctuationExpected {
                position: self.lexer.position(),
                punctuation,
            })
        }
    }

    fn expect_identifier(&mut self) -> Result<Name, ParserError> {
        self.lexer
            .parse_identifier()
            .ok_or_else(|| ParserError::IdentifierExpected {
                position: self.lexer.position(),
            })
    }

    fn expect_literal(&mut self) -> Result<Literal, ParserError> {
        self.lexer
            .parse_literal()
            .ok_or_else(|| ParserError::LiteralExpected {
                position: self.lexer.position(),
            })
    }

    fn expect_binary_operator(&mut self) -> Result<Name, ParserError> {
        self.lexer
            .parse_binary_operator()
            .ok_or_else(|| ParserError::OperatorExpected {
                position: self.lexer.position(),
            })
    }

    fn expect_postfix_operator(&mut self) -> Result<Name, ParserError> {
        self.lexer
            .parse_postfix_operator()
            .ok_or_else(|| ParserError::OperatorExpected {
                position: self.lexer.position(),
            })
    }

    // === Nodes ===

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Position) -> Span {
        let end = self.lexer.previous_position();
        if end < start {
            Span::point(end)
        } else {
            Span::new(start, end)
        }
    }

    /// Allocate a node spanning from `start` and attach its children to it.
    fn finish<T: NodeData>(&mut self, start: Position, data: T) -> Id<T> {
        let span = self.span_from(start);
        let id = self.tree.alloc(data, span);
        self.tree.adopt_children(id.node());
        id
    }
}

/// Lex and parse `source` into a fresh tree.
pub fn parse(source: &str, file_name: &str, interner: &StringInterner) -> ParseOutput {
    let mut tree = SyntaxTree::new();
    let lexer = Lexer::new(source, interner);
    let result = Parser::new(lexer, &mut tree).parse_compilation_unit(interner.intern(file_name));
    ParseOutput { tree, result }
}

#[cfg(test)]
mod tests;
