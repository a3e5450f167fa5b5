//! Syntax tree visitor.
//!
//! Traversal is pre/post order over the children of each node, in field
//! order. A visitor gets two hooks per node: the generic
//! [`Visitor::enter_node`]/[`Visitor::exit_node`] pair and the pair specific
//! to the node's kind (`enter_class_declaration`, `exit_class_declaration`,
//! ...). Children are visited only when both enter hooks return `true`; exit
//! hooks always run.
//!
//! # Example
//!
//! ```text
//! struct CountClasses {
//!     count: usize,
//! }
//!
//! impl Visitor for CountClasses {
//!     fn enter_class_declaration(&mut self, _: &SyntaxTree, _: Id<ClassDeclaration>) -> bool {
//!         self.count += 1;
//!         true
//!     }
//! }
//! ```

#[allow(clippy::wildcard_imports)]
use crate::ast::*;

macro_rules! define_visitor {
    ($(($kind:ident, $enter:ident, $exit:ident)),* $(,)?) => {
        /// Hooks called by [`walk`]. Every hook defaults to a no-op that lets
        /// traversal continue.
        pub trait Visitor {
            /// Called before the kind-specific enter hook of every node.
            fn enter_node(&mut self, _tree: &SyntaxTree, _node: NodeId) -> bool {
                true
            }

            /// Called after the kind-specific exit hook of every node.
            fn exit_node(&mut self, _tree: &SyntaxTree, _node: NodeId) {}

            $(
                fn $enter(&mut self, _tree: &SyntaxTree, _node: Id<$kind>) -> bool {
                    true
                }

                fn $exit(&mut self, _tree: &SyntaxTree, _node: Id<$kind>) {}
            )*
        }

        fn enter_kind<V: Visitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, node: NodeId) -> bool {
            match tree.node(node).kind() {
                $(NodeKind::$kind(_) => visitor.$enter(tree, Id::new(node)),)*
            }
        }

        fn exit_kind<V: Visitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, node: NodeId) {
            match tree.node(node).kind() {
                $(NodeKind::$kind(_) => visitor.$exit(tree, Id::new(node)),)*
            }
        }
    };
}

for_each_syntax_kind!(define_visitor);

/// Visit `node` and its descendants.
pub fn walk<V: Visitor + ?Sized>(visitor: &mut V, tree: &SyntaxTree, node: NodeId) {
    let descend = visitor.enter_node(tree, node);
    let descend_kind = enter_kind(visitor, tree, node);
    if descend && descend_kind {
        tree.for_each_child(node, &mut |child| walk(visitor, tree, child));
    }
    exit_kind(visitor, tree, node);
    visitor.exit_node(tree, node);
}

#[cfg(test)]
mod tests;
