//! Scaly IR - core data structures for the Scaly compiler front end
//!
//! This crate contains:
//! - Positions and spans for source locations
//! - Names for interned identifiers
//! - Tokens and `TokenList` for lexer output
//! - The paged region arena and the arena-backed growable array
//! - Syntax tree nodes, typed handles and the visitor
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and literal text become `Name(u32)`
//! - **Flatten Everything**: no `Box<Node>`, children are arena handles
//! - **Rewind Cheaply**: every allocation made by a failed parse attempt is
//!   discarded by rolling the arenas back to a checkpoint

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod arena;
mod array;
pub mod ast;
mod interner;
mod name;
mod span;
mod token;
pub mod visitor;

pub use arena::{Addr, Arena, Block, Checkpoint, Region};
pub use array::Array;
pub use ast::{Id, Node, NodeId, NodeKind, NodeList, Syntax, SyntaxTree, TreeCheckpoint};
pub use interner::StringInterner;
pub use name::Name;
pub use span::{LineIndex, Position, Span};
pub use token::{Keyword, Literal, LiteralKind, Punctuation, Token, TokenKind, TokenList};
pub use visitor::{walk, Visitor};
