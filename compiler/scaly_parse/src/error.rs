//! Parse error type.
//!
//! Every grammar function returns `Result<_, ParserError>`. A required step
//! that fails propagates its error unchanged; a choice whose alternatives all
//! fail wraps their errors in [`ParserError::UnableToParse`], so an error is a
//! tree whose leaves say what was expected where.

use scaly_ir::{Keyword, Position, Punctuation};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("{position}: expected `{keyword}`")]
    KeywordExpected { position: Position, keyword: Keyword },

    #[error("{position}: expected `{punctuation}`")]
    PunctuationExpected {
        position: Position,
        punctuation: Punctuation,
    },

    #[error("{position}: expected identifier")]
    IdentifierExpected { position: Position },

    #[error("{position}: expected literal")]
    LiteralExpected { position: Position },

    #[error("{position}: expected operator")]
    OperatorExpected { position: Position },

    #[error("{position}: expected end of input")]
    NotAtEnd { position: Position },

    /// Every alternative of a choice failed.
    #[error("{position}: unable to parse ({} alternatives failed)", .errors.len())]
    UnableToParse {
        position: Position,
        errors: Vec<ParserError>,
    },
}

impl ParserError {
    /// Where the error was detected. For [`ParserError::UnableToParse`] this
    /// is where the choice started.
    pub fn position(&self) -> Position {
        match *self {
            ParserError::KeywordExpected { position, .. }
            | ParserError::PunctuationExpected { position, .. }
            | ParserError::IdentifierExpected { position }
            | ParserError::LiteralExpected { position }
            | ParserError::OperatorExpected { position }
            | ParserError::NotAtEnd { position }
            | ParserError::UnableToParse { position, .. } => position,
        }
    }

    /// The non-aggregate errors of this tree, depth first.
    pub fn leaves(&self) -> Vec<&ParserError> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, leaves: &mut Vec<&'a ParserError>) {
        match self {
            ParserError::UnableToParse { errors, .. } => {
                for error in errors {
                    error.collect_leaves(leaves);
                }
            }
            leaf => leaves.push(leaf),
        }
    }

    /// The leaf that got furthest into the input; the first one on ties.
    ///
    /// An aggregate without children is its own deepest error.
    pub fn deepest(&self) -> &ParserError {
        self.leaves()
            .into_iter()
            .fold(None, |best: Option<&ParserError>, leaf| match best {
                Some(best) if best.position() >= leaf.position() => Some(best),
                _ => Some(leaf),
            })
            .unwrap_or(self)
    }

    /// Spellings of everything expected at the deepest position, without
    /// duplicates, in the order the alternatives were tried.
    pub fn expected(&self) -> Vec<&'static str> {
        let position = self.deepest().position();
        let mut expected = Vec::new();
        for leaf in self.leaves() {
            if leaf.position() != position {
                continue;
            }
            let spelling = match leaf {
                ParserError::KeywordExpected { keyword, .. } => keyword.as_str(),
                ParserError::PunctuationExpected { punctuation, .. } => punctuation.as_str(),
                ParserError::IdentifierExpected { .. } => "identifier",
                ParserError::LiteralExpected { .. } => "literal",
                ParserError::OperatorExpected { .. } => "operator",
                ParserError::NotAtEnd { .. } => "end of input",
                ParserError::UnableToParse { .. } => continue,
            };
            if !expected.contains(&spelling) {
                expected.push(spelling);
            }
        }
        expected
    }
}

#[cfg(test)]
mod tests;
