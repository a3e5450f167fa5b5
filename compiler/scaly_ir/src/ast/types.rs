//! Patterns, types and lifetimes.

use super::{syntax_family, syntax_node, Id, NodeList};
use super::Expression;
use crate::{Literal, Name};

syntax_family! {
    pub enum Pattern {
        Wildcard(Id<WildcardPattern>),
        Identifier(Id<IdentifierPattern>),
        Tuple(Id<TuplePattern>),
        Expression(Id<ExpressionPattern>),
    }
}

syntax_node! {
    /// `_`
    pub struct WildcardPattern;
}

syntax_node! {
    pub struct IdentifierPattern {
        pub name: Name,
        pub annotation: Option<Id<TypeAnnotation>>,
    }
}

syntax_node! {
    /// `: Type`
    pub struct TypeAnnotation {
        pub annotation_type: Type,
    }
}

syntax_node! {
    pub struct TuplePattern {
        pub elements: Option<NodeList<Id<TuplePatternElement>>>,
    }
}

syntax_node! {
    pub struct TuplePatternElement {
        pub pattern: Pattern,
    }
}

syntax_node! {
    pub struct ExpressionPattern {
        pub expression: Expression,
    }
}

// === Types ===

syntax_family! {
    pub enum Type {
        Array(Id<ArrayType>),
        Identifier(Id<TypeIdentifier>),
    }
}

syntax_node! {
    /// `Name.Sub? [..] $`
    pub struct TypeIdentifier {
        pub name: Name,
        pub subtype: Option<Id<SubtypeIdentifier>>,
        pub postfixes: Option<NodeList<TypePostfix>>,
        pub lifetime: Option<LifeTime>,
    }
}

syntax_node! {
    pub struct SubtypeIdentifier {
        pub type_identifier: Id<TypeIdentifier>,
    }
}

syntax_node! {
    /// `[Element]`
    pub struct ArrayType {
        pub element_type: Type,
        pub postfixes: Option<NodeList<TypePostfix>>,
        pub lifetime: Option<LifeTime>,
    }
}

syntax_family! {
    pub enum TypePostfix {
        Optional(Id<OptionalType>),
        Indexed(Id<IndexedType>),
    }
}

syntax_node! {
    /// `?`
    pub struct OptionalType;
}

syntax_node! {
    /// `[Key]`
    pub struct IndexedType {
        pub key: Type,
    }
}

syntax_node! {
    pub struct TypeInheritanceClause {
        pub inheritances: Option<NodeList<Id<Inheritance>>>,
    }
}

syntax_node! {
    pub struct Inheritance {
        pub type_identifier: Id<TypeIdentifier>,
    }
}

// === Lifetimes ===

syntax_family! {
    pub enum LifeTime {
        Local(Id<Local>),
        Reference(Id<Reference>),
        Thrown(Id<Thrown>),
    }
}

syntax_node! {
    /// `$`
    pub struct Local;
}

syntax_node! {
    /// `^age`
    pub struct Reference {
        pub age: Literal,
    }
}

syntax_node! {
    /// `#`
    pub struct Thrown;
}
