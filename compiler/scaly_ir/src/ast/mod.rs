//! Syntax tree.
//!
//! Nodes live in a [`SyntaxTree`]: a node arena plus a slot arena that backs
//! child lists. Handles are typed ([`Id<T>`]); grammar families such as
//! [`Statement`] or [`Pattern`] are `Copy` sum types over handles, so
//! discriminating a family is an exhaustive `match`.
//!
//! # Construction
//!
//! Building a node is two steps. [`SyntaxTree::alloc`] stores the node with
//! its already-built children and span; [`SyntaxTree::attach`] (or
//! [`SyntaxTree::adopt_children`] for all children at once) then installs
//! each child's parent back-reference. The back-reference is the only field
//! that changes after allocation, and it is set once.
//!
//! # Lists
//!
//! Repeated children are [`NodeList`]s: a block of slots in the slot arena,
//! always holding at least one element. A production that matched zero
//! items stores `None` instead of an empty list.

mod declarations;
mod expressions;
mod kinds;
mod types;


pub use declarations::*;
pub use expressions::*;
pub use kinds::NodeKind;
pub(crate) use kinds::for_each_syntax_kind;
pub use types::*;

use crate::arena::{Addr, Arena, Block, Checkpoint};
use crate::array::Array;
use crate::{Literal, Name, Span};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Untyped handle to a node.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct NodeId(Addr);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}:{})", self.0.page(), self.0.offset())
    }
}

/// Typed handle to a node of kind `T`.
pub struct Id<T> {
    node: NodeId,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    #[inline]
    pub(crate) const fn new(node: NodeId) -> Self {
        Id {
            node,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub const fn node(self) -> NodeId {
        self.node
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({:?})", self.node)
    }
}

impl<T> From<Id<T>> for NodeId {
    fn from(id: Id<T>) -> NodeId {
        id.node
    }
}

/// Ordered, non-empty sequence of child nodes.
pub struct NodeList<T> {
    block: Block,
    _marker: PhantomData<fn() -> T>,
}

impl<T> NodeList<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.block.len()
    }

    /// Always `false`; empty lists are represented as `None`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }
}

impl<T> Clone for NodeList<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeList<T> {}

impl<T> PartialEq for NodeList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.block == other.block
    }
}

impl<T> Eq for NodeList<T> {}

impl<T> Hash for NodeList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.block.hash(state);
    }
}

impl<T> fmt::Debug for NodeList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeList(len = {})", self.len())
    }
}

/// Anything that designates a node: typed handles and family sum types.
pub trait Syntax: Copy {
    /// Reinterpret `node` as `Self` if its kind fits.
    fn cast(tree: &SyntaxTree, node: NodeId) -> Option<Self>;

    fn node(self) -> NodeId;
}

impl<T: NodeData> Syntax for Id<T> {
    fn cast(tree: &SyntaxTree, node: NodeId) -> Option<Self> {
        T::from_kind(tree.node(node).kind()).map(|_| Id::new(node))
    }

    #[inline]
    fn node(self) -> NodeId {
        self.node
    }
}

/// Payload of one concrete node kind.
pub trait NodeData: Children + Copy + Sized {
    fn from_kind(kind: &NodeKind) -> Option<&Self>;

    fn into_kind(self) -> NodeKind;
}

/// Enumerates the child nodes held by a node payload, in field order.
pub trait Children {
    fn for_each_child(&self, tree: &SyntaxTree, f: &mut dyn FnMut(NodeId));
}

impl<T: NodeData> Children for Id<T> {
    fn for_each_child(&self, _tree: &SyntaxTree, f: &mut dyn FnMut(NodeId)) {
        f(self.node);
    }
}

impl<C: Children> Children for Option<C> {
    fn for_each_child(&self, tree: &SyntaxTree, f: &mut dyn FnMut(NodeId)) {
        if let Some(child) = self {
            child.for_each_child(tree, f);
        }
    }
}

impl<T> Children for NodeList<T> {
    fn for_each_child(&self, tree: &SyntaxTree, f: &mut dyn FnMut(NodeId)) {
        for &node in tree.slots.block(self.block) {
            f(node);
        }
    }
}

macro_rules! leaf_fields {
    ($($ty:ty),*) => {
        $(impl Children for $ty {
            fn for_each_child(&self, _tree: &SyntaxTree, _f: &mut dyn FnMut(NodeId)) {}
        })*
    };
}

leaf_fields!(Name, Literal, bool);

/// Declares a node payload struct and its [`Children`] impl.
macro_rules! syntax_node {
    ($(#[$meta:meta])* pub struct $name:ident;) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        pub struct $name;

        impl $crate::ast::Children for $name {
            fn for_each_child(
                &self,
                _tree: &$crate::ast::SyntaxTree,
                _f: &mut dyn FnMut($crate::ast::NodeId),
            ) {
            }
        }
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $($(#[$field_meta:meta])* pub $field:ident: $ty:ty),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        pub struct $name {
            $($(#[$field_meta])* pub $field: $ty),*
        }

        impl $crate::ast::Children for $name {
            #[allow(unused_variables)]
            fn for_each_child(
                &self,
                tree: &$crate::ast::SyntaxTree,
                f: &mut dyn FnMut($crate::ast::NodeId),
            ) {
                $($crate::ast::Children::for_each_child(&self.$field, tree, f);)*
            }
        }
    };
}
pub(crate) use syntax_node;

/// Declares a grammar family: a sum type over handles of its alternatives.
macro_rules! syntax_family {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant($ty)),+
        }

        impl $crate::ast::Syntax for $name {
            fn cast(tree: &$crate::ast::SyntaxTree, node: $crate::ast::NodeId) -> Option<Self> {
                $(
                    if let Some(alternative) = <$ty as $crate::ast::Syntax>::cast(tree, node) {
                        return Some($name::$variant(alternative));
                    }
                )+
                None
            }

            fn node(self) -> $crate::ast::NodeId {
                match self {
                    $($name::$variant(alternative) => $crate::ast::Syntax::node(alternative)),+
                }
            }
        }

        impl $crate::ast::Children for $name {
            fn for_each_child(
                &self,
                _tree: &$crate::ast::SyntaxTree,
                f: &mut dyn FnMut($crate::ast::NodeId),
            ) {
                f($crate::ast::Syntax::node(*self));
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(alternative: $ty) -> Self {
                    $name::$variant(alternative)
                }
            }
        )+
    };
}
pub(crate) use syntax_family;

/// A stored node: payload, source span and parent back-reference.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Node {
    kind: NodeKind,
    span: Span,
    parent: Option<NodeId>,
}

impl Node {
    #[inline]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Saved state of both arenas of a [`SyntaxTree`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TreeCheckpoint {
    nodes: Checkpoint,
    slots: Checkpoint,
}

/// Arena-backed storage for the nodes of one compilation unit.
#[derive(Debug)]
pub struct SyntaxTree {
    nodes: Arena<Node>,
    slots: Arena<NodeId>,
    scratch: Vec<NodeId>,
}

impl SyntaxTree {
    pub fn new() -> Self {
        SyntaxTree {
            nodes: Arena::new(),
            slots: Arena::new(),
            scratch: Vec::new(),
        }
    }

    /// Tree whose arenas use pages of `page_capacity` entries.
    pub fn with_page_capacity(page_capacity: usize) -> Self {
        SyntaxTree {
            nodes: Arena::with_page_capacity(page_capacity),
            slots: Arena::with_page_capacity(page_capacity),
            scratch: Vec::new(),
        }
    }

    /// Store a node. Its children must already be in this tree; their parent
    /// links are installed separately with [`SyntaxTree::attach`] or
    /// [`SyntaxTree::adopt_children`].
    pub fn alloc<T: NodeData>(&mut self, data: T, span: Span) -> Id<T> {
        let addr = self.nodes.alloc(Node {
            kind: data.into_kind(),
            span,
            parent: None,
        });
        Id::new(NodeId(addr))
    }

    /// Install `parent` as the back-reference of `child`.
    ///
    /// The link is written once; attaching an already-attached node keeps the
    /// first parent.
    #[track_caller]
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        let node = self.nodes.get_mut(child.0);
        debug_assert!(
            node.parent.is_none() || node.parent == Some(parent),
            "{child:?} is already attached to {:?}",
            node.parent
        );
        if node.parent.is_none() {
            node.parent = Some(parent);
        }
    }

    /// Attach every child of `parent` to it.
    pub fn adopt_children(&mut self, parent: NodeId) {
        let mut children = std::mem::take(&mut self.scratch);
        children.clear();
        self.for_each_child(parent, &mut |child| children.push(child));
        for &child in &children {
            self.attach(parent, child);
        }
        self.scratch = children;
    }

    #[track_caller]
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(id.0)
    }

    /// Payload of a typed handle.
    #[track_caller]
    pub fn get<T: NodeData>(&self, id: Id<T>) -> &T {
        match T::from_kind(self.node(id.node).kind()) {
            Some(data) => data,
            None => panic!(
                "{:?} holds a {} node",
                id,
                self.node(id.node).kind().name()
            ),
        }
    }

    pub fn span(&self, node: impl Syntax) -> Span {
        self.node(node.node()).span
    }

    pub fn parent(&self, node: impl Syntax) -> Option<NodeId> {
        self.node(node.node()).parent
    }

    pub fn kind(&self, node: impl Syntax) -> &NodeKind {
        self.node(node.node()).kind()
    }

    pub fn for_each_child(&self, node: NodeId, f: &mut dyn FnMut(NodeId)) {
        self.node(node).kind.for_each_child(self, f);
    }

    /// Children of `node` in field order.
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        let mut children = Vec::new();
        self.for_each_child(node, &mut |child| children.push(child));
        children
    }

    /// Elements of a list.
    pub fn list<'a, T: Syntax + 'a>(
        &'a self,
        list: NodeList<T>,
    ) -> impl Iterator<Item = T> + 'a {
        self.slots
            .block(list.block)
            .iter()
            .filter_map(move |&node| T::cast(self, node))
    }

    /// Elements of an optional list; empty when absent.
    pub fn optional_list<'a, T: Syntax + 'a>(
        &'a self,
        list: Option<NodeList<T>>,
    ) -> impl Iterator<Item = T> + 'a {
        list.into_iter().flat_map(move |list| self.list(list))
    }

    /// Arena that list-building arrays grow in.
    pub fn slots_mut(&mut self) -> &mut Arena<NodeId> {
        &mut self.slots
    }

    /// Turn a finished array of node handles into a list; `None` when empty.
    pub fn finish_list<T: Syntax>(&self, array: Array<NodeId>) -> Option<NodeList<T>> {
        array.into_block().map(|block| NodeList {
            block,
            _marker: PhantomData,
        })
    }

    /// Number of nodes stored.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn checkpoint(&self) -> TreeCheckpoint {
        TreeCheckpoint {
            nodes: self.nodes.checkpoint(),
            slots: self.slots.checkpoint(),
        }
    }

    /// Discard every node and list slot allocated since `checkpoint`.
    pub fn rollback(&mut self, checkpoint: TreeCheckpoint) {
        self.nodes.rollback(checkpoint.nodes);
        self.slots.rollback(checkpoint.slots);
    }

    /// Walk the subtree rooted at `node` with `visitor`.
    pub fn accept<V: crate::visitor::Visitor + ?Sized>(&self, node: impl Syntax, visitor: &mut V) {
        crate::visitor::walk(visitor, self, node.node());
    }
}

impl Default for SyntaxTree {
    fn default() -> Self {
        Self::new()
    }
}
