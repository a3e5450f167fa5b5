use super::*;
use crate::{Array, Name, Position, Span, StringInterner};
use pretty_assertions::assert_eq;

fn span(start: u32, end: u32) -> Span {
    Span::new(Position::new(start, 1, start + 1), Position::new(end, 1, end + 1))
}

fn finish<T: NodeData>(tree: &mut SyntaxTree, data: T, span: Span) -> Id<T> {
    let id = tree.alloc(data, span);
    tree.adopt_children(id.node());
    id
}

/// `class C { let x }` built by hand.
fn class_tree(interner: &StringInterner) -> (SyntaxTree, Id<CompilationUnit>) {
    let mut tree = SyntaxTree::new();
    let pattern = finish(
        &mut tree,
        IdentifierPattern {
            name: interner.intern("x"),
            annotation: None,
        },
        span(14, 15),
    );
    let initializer = finish(
        &mut tree,
        PatternInitializer {
            pattern: Pattern::Identifier(pattern),
            initializer: None,
        },
        span(14, 15),
    );
    let binding = finish(
        &mut tree,
        BindingInitializer {
            initializer,
            additional: None,
        },
        span(14, 15),
    );
    let constant = finish(&mut tree, ConstantDeclaration { initializer: binding }, span(10, 15));
    let member = finish(
        &mut tree,
        ClassMember {
            declaration: Declaration::Constant(constant),
        },
        span(10, 15),
    );
    let mut members = Array::new();
    members.push(tree.slots_mut(), member.node());
    let members = tree.finish_list(members);
    let body = finish(&mut tree, ClassBody { members }, span(8, 17));
    let class = finish(
        &mut tree,
        ClassDeclaration {
            name: interner.intern("C"),
            generics: None,
            inheritance: None,
            body: Some(body),
        },
        span(0, 17),
    );
    let statement = finish(
        &mut tree,
        TerminatedStatement {
            statement: Statement::Declaration(Declaration::Class(class)),
            has_semicolon: false,
        },
        span(0, 17),
    );
    let mut statements = Array::new();
    statements.push(tree.slots_mut(), statement.node());
    let statements = tree.finish_list(statements);
    let unit = finish(
        &mut tree,
        CompilationUnit {
            file_name: Name::EMPTY,
            statements,
        },
        span(0, 17),
    );
    (tree, unit)
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Visitor for Recorder {
    fn enter_node(&mut self, tree: &SyntaxTree, node: NodeId) -> bool {
        self.events.push(format!("+{}", tree.node(node).kind().name()));
        true
    }

    fn exit_node(&mut self, tree: &SyntaxTree, node: NodeId) {
        self.events.push(format!("-{}", tree.node(node).kind().name()));
    }
}

#[test]
fn walk_is_pre_and_post_order() {
    let interner = StringInterner::new();
    let (tree, unit) = class_tree(&interner);
    let mut recorder = Recorder::default();
    tree.accept(unit, &mut recorder);
    assert_eq!(
        recorder.events,
        vec![
            "+CompilationUnit",
            "+TerminatedStatement",
            "+ClassDeclaration",
            "+ClassBody",
            "+ClassMember",
            "+ConstantDeclaration",
            "+BindingInitializer",
            "+PatternInitializer",
            "+IdentifierPattern",
            "-IdentifierPattern",
            "-PatternInitializer",
            "-BindingInitializer",
            "-ConstantDeclaration",
            "-ClassMember",
            "-ClassBody",
            "-ClassDeclaration",
            "-TerminatedStatement",
            "-CompilationUnit",
        ]
    );
}

struct ClassNames<'a> {
    interner: &'a StringInterner,
    names: Vec<&'static str>,
    exits: usize,
}

impl Visitor for ClassNames<'_> {
    fn enter_class_declaration(&mut self, tree: &SyntaxTree, node: Id<ClassDeclaration>) -> bool {
        self.names.push(self.interner.lookup(tree.get(node).name));
        false
    }

    fn exit_class_declaration(&mut self, _tree: &SyntaxTree, _node: Id<ClassDeclaration>) {
        self.exits += 1;
    }

    fn enter_identifier_pattern(&mut self, _tree: &SyntaxTree, _node: Id<IdentifierPattern>) -> bool {
        self.names.push("unreachable");
        true
    }
}

#[test]
fn kind_hook_can_skip_children() {
    let interner = StringInterner::new();
    let (tree, unit) = class_tree(&interner);
    let mut visitor = ClassNames {
        interner: &interner,
        names: Vec::new(),
        exits: 0,
    };
    walk(&mut visitor, &tree, unit.node());
    assert_eq!(visitor.names, vec!["C"]);
    assert_eq!(visitor.exits, 1);
}

#[derive(Default)]
struct Counter {
    entered: usize,
}

impl Visitor for Counter {
    fn enter_node(&mut self, _tree: &SyntaxTree, _node: NodeId) -> bool {
        self.entered += 1;
        true
    }
}

#[test]
fn walk_reaches_every_node() {
    let interner = StringInterner::new();
    let (tree, unit) = class_tree(&interner);
    let mut counter = Counter::default();
    tree.accept(unit, &mut counter);
    assert_eq!(counter.entered, tree.node_count());
}

#[test]
fn walk_can_start_below_the_root() {
    let interner = StringInterner::new();
    let (tree, unit) = class_tree(&interner);
    let statement = tree.children(unit.node())[0];
    let class = tree.children(statement)[0];
    let mut counter = Counter::default();
    walk(&mut counter, &tree, class);
    assert_eq!(counter.entered, tree.node_count() - 2);
}
