//! Backtracking regions.
//!
//! A [`Region`] records the lexer position and the tree's arena checkpoint
//! when it opens. Unless it is kept, dropping it rewinds both together, so a
//! failed attempt leaves neither consumed tokens nor nodes behind, whichever
//! way the attempt returned.

use crate::Parser;
use scaly_ir::TreeCheckpoint;
use scaly_lexer::TokenCursor;
use std::ops::{Deref, DerefMut};
use tracing::trace;

pub(crate) struct Region<'p, 't, L: TokenCursor> {
    parser: &'p mut Parser<'t, L>,
    snapshot: L::Snapshot,
    checkpoint: TreeCheckpoint,
    kept: bool,
}

impl<'p, 't, L: TokenCursor> Region<'p, 't, L> {
    pub(crate) fn open(parser: &'p mut Parser<'t, L>) -> Self {
        let snapshot = parser.lexer.snapshot();
        let checkpoint = parser.tree.checkpoint();
        Region {
            parser,
            snapshot,
            checkpoint,
            kept: false,
        }
    }

    /// Keep everything consumed and allocated inside the region.
    pub(crate) fn keep(mut self) {
        self.kept = true;
    }
}

impl<'t, L: TokenCursor> Deref for Region<'_, 't, L> {
    type Target = Parser<'t, L>;

    fn deref(&self) -> &Parser<'t, L> {
        &*self.parser
    }
}

impl<'t, L: TokenCursor> DerefMut for Region<'_, 't, L> {
    fn deref_mut(&mut self) -> &mut Parser<'t, L> {
        &mut *self.parser
    }
}

impl<L: TokenCursor> Drop for Region<'_, '_, L> {
    fn drop(&mut self) {
        if !self.kept {
            self.parser.lexer.restore(self.snapshot);
            self.parser.tree.rollback(self.checkpoint);
            trace!(position = %self.parser.lexer.position(), "rolled back");
        }
    }
}
