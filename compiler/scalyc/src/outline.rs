//! Indented outline of a syntax tree.
//!
//! One line per node in preorder, indented two spaces per level:
//!
//! ```text
//! CompilationUnit 1:1..1:10 main.scaly
//!   TerminatedStatement 1:1..1:10
//!     ConstantDeclaration 1:1..1:10
//! ```
//!
//! Nodes that carry a name or literal text print it after the span.

use scaly_ir::ast::{
    BinaryOperation, ClassDeclaration, CompilationUnit, ConstParameter, EnumCase,
    EnumDeclaration, GenericParameter, IdentifierExpression, IdentifierFunction,
    IdentifierPattern, LiteralExpression, OperatorPostfix, PathItem, PrefixExpression,
    TypeIdentifier, VarParameter,
};
use scaly_ir::{Id, Name, NodeId, StringInterner, Syntax, SyntaxTree, Visitor};
use std::fmt::Write;

/// Render the outline of `root` and everything below it.
pub fn outline(tree: &SyntaxTree, root: impl Syntax, interner: &StringInterner) -> String {
    let mut outline = Outline::new(interner);
    tree.accept(root, &mut outline);
    outline.finish()
}

pub struct Outline<'i> {
    interner: &'i StringInterner,
    depth: usize,
    text: String,
}

impl<'i> Outline<'i> {
    pub fn new(interner: &'i StringInterner) -> Self {
        Outline {
            interner,
            depth: 0,
            text: String::new(),
        }
    }

    pub fn finish(mut self) -> String {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text
    }

    fn label(&mut self, name: Name) {
        self.text.push(' ');
        self.text.push_str(self.interner.lookup(name));
    }
}

impl Visitor for Outline<'_> {
    // The line is terminated when the next one starts, so kind hooks can
    // still append to it.
    fn enter_node(&mut self, tree: &SyntaxTree, node: NodeId) -> bool {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        let node = tree.node(node);
        let _ = write!(
            self.text,
            "{:indent$}{} {}",
            "",
            node.kind().name(),
            node.span(),
            indent = self.depth * 2
        );
        self.depth += 1;
        true
    }

    fn exit_node(&mut self, _tree: &SyntaxTree, _node: NodeId) {
        self.depth -= 1;
    }

    fn enter_compilation_unit(&mut self, tree: &SyntaxTree, node: Id<CompilationUnit>) -> bool {
        self.label(tree.get(node).file_name);
        true
    }

    fn enter_path_item(&mut self, tree: &SyntaxTree, node: Id<PathItem>) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_identifier_function(
        &mut self,
        tree: &SyntaxTree,
        node: Id<IdentifierFunction>,
    ) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_const_parameter(&mut self, tree: &SyntaxTree, node: Id<ConstParameter>) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_var_parameter(&mut self, tree: &SyntaxTree, node: Id<VarParameter>) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_enum_declaration(&mut self, tree: &SyntaxTree, node: Id<EnumDeclaration>) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_enum_case(&mut self, tree: &SyntaxTree, node: Id<EnumCase>) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_class_declaration(&mut self, tree: &SyntaxTree, node: Id<ClassDeclaration>) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_generic_parameter(&mut self, tree: &SyntaxTree, node: Id<GenericParameter>) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_prefix_expression(&mut self, tree: &SyntaxTree, node: Id<PrefixExpression>) -> bool {
        if let Some(operator) = tree.get(node).operator {
            self.label(operator);
        }
        true
    }

    fn enter_binary_operation(&mut self, tree: &SyntaxTree, node: Id<BinaryOperation>) -> bool {
        self.label(tree.get(node).operator);
        true
    }

    fn enter_operator_postfix(&mut self, tree: &SyntaxTree, node: Id<OperatorPostfix>) -> bool {
        self.label(tree.get(node).operator);
        true
    }

    fn enter_identifier_expression(
        &mut self,
        tree: &SyntaxTree,
        node: Id<IdentifierExpression>,
    ) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_literal_expression(
        &mut self,
        tree: &SyntaxTree,
        node: Id<LiteralExpression>,
    ) -> bool {
        self.label(tree.get(node).literal.value);
        true
    }

    fn enter_identifier_pattern(
        &mut self,
        tree: &SyntaxTree,
        node: Id<IdentifierPattern>,
    ) -> bool {
        self.label(tree.get(node).name);
        true
    }

    fn enter_type_identifier(&mut self, tree: &SyntaxTree, node: Id<TypeIdentifier>) -> bool {
        self.label(tree.get(node).name);
        true
    }
}
