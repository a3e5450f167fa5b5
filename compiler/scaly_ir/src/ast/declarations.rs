//! Compilation units, statements and declarations.

use super::{syntax_family, syntax_node, Id, NodeList};
use super::{Expression, Pattern, Type, TypeInheritanceClause};
use crate::Name;

syntax_node! {
    /// Root of one source file.
    pub struct CompilationUnit {
        pub file_name: Name,
        pub statements: Option<NodeList<Id<TerminatedStatement>>>,
    }
}

syntax_node! {
    pub struct TerminatedStatement {
        pub statement: Statement,
        /// A `;` followed the statement.
        pub has_semicolon: bool,
    }
}

syntax_family! {
    pub enum Statement {
        Declaration(Declaration),
        Expression(Expression),
    }
}

syntax_family! {
    pub enum Declaration {
        Use(Id<UseDeclaration>),
        Constant(Id<ConstantDeclaration>),
        Variable(Id<VariableDeclaration>),
        Mutable(Id<MutableDeclaration>),
        Function(Id<FunctionDeclaration>),
        Enum(Id<EnumDeclaration>),
        Class(Id<ClassDeclaration>),
        Initializer(Id<InitializerDeclaration>),
    }
}

// === Use ===

syntax_node! {
    /// `use a.b.c`
    pub struct UseDeclaration {
        pub import: Id<PathItem>,
        pub path: Option<NodeList<Id<PathIdentifier>>>,
    }
}

syntax_node! {
    pub struct PathIdentifier {
        pub item: Id<PathItem>,
    }
}

syntax_node! {
    pub struct PathItem {
        pub name: Name,
    }
}

// === Bindings ===

syntax_node! {
    /// `= expression`
    pub struct Initializer {
        pub expression: Expression,
    }
}

syntax_node! {
    /// `let` binding.
    pub struct ConstantDeclaration {
        pub initializer: Id<BindingInitializer>,
    }
}

syntax_node! {
    /// `var` binding.
    pub struct VariableDeclaration {
        pub initializer: Id<BindingInitializer>,
    }
}

syntax_node! {
    /// `mutable` binding.
    pub struct MutableDeclaration {
        pub initializer: Id<BindingInitializer>,
    }
}

syntax_node! {
    pub struct BindingInitializer {
        pub initializer: Id<PatternInitializer>,
        pub additional: Option<NodeList<Id<AdditionalInitializer>>>,
    }
}

syntax_node! {
    pub struct PatternInitializer {
        pub pattern: Pattern,
        pub initializer: Option<Id<Initializer>>,
    }
}

syntax_node! {
    pub struct AdditionalInitializer {
        pub pattern: Id<PatternInitializer>,
    }
}

// === Functions ===

syntax_node! {
    pub struct FunctionDeclaration {
        pub modifiers: Option<NodeList<Modifier>>,
        pub name: FunctionName,
        pub signature: Id<FunctionSignature>,
        /// Absent for declarations without a body.
        pub body: Option<Expression>,
    }
}

syntax_node! {
    /// `init (parameters) throws T body`
    pub struct InitializerDeclaration {
        pub modifiers: Option<NodeList<Modifier>>,
        pub parameters: Id<ParameterClause>,
        pub throws: Option<Id<ThrowsClause>>,
        pub body: Expression,
    }
}

syntax_family! {
    pub enum Modifier {
        Override(Id<OverrideWord>),
        Static(Id<StaticWord>),
    }
}

syntax_node! {
    pub struct OverrideWord;
}

syntax_node! {
    pub struct StaticWord;
}

syntax_family! {
    pub enum FunctionName {
        Identifier(Id<IdentifierFunction>),
    }
}

syntax_node! {
    pub struct IdentifierFunction {
        pub name: Name,
    }
}

syntax_node! {
    pub struct FunctionSignature {
        pub parameters: Id<ParameterClause>,
        pub result: Option<Id<FunctionResult>>,
        pub throws: Option<Id<ThrowsClause>>,
    }
}

syntax_node! {
    /// `-> existing? Type`
    pub struct FunctionResult {
        pub existing: Option<Id<ExistingClause>>,
        pub result_type: Type,
    }
}

syntax_node! {
    pub struct ExistingClause;
}

syntax_node! {
    pub struct ParameterClause {
        pub parameters: Option<NodeList<Parameter>>,
    }
}

syntax_family! {
    pub enum Parameter {
        Const(Id<ConstParameter>),
        Var(Id<VarParameter>),
    }
}

syntax_node! {
    pub struct ConstParameter {
        pub name: Name,
        pub parameter_type: Type,
    }
}

syntax_node! {
    pub struct VarParameter {
        pub name: Name,
        pub parameter_type: Type,
    }
}

syntax_node! {
    pub struct ThrowsClause {
        pub throws_type: Type,
    }
}

// === Enums ===

syntax_node! {
    pub struct EnumDeclaration {
        pub name: Name,
        pub members: Option<NodeList<Id<EnumMember>>>,
    }
}

syntax_node! {
    /// `case A, B (payload)`
    pub struct EnumMember {
        pub case: Id<EnumCase>,
        pub additional: Option<NodeList<Id<AdditionalCase>>>,
        pub parameters: Option<Id<ParameterClause>>,
    }
}

syntax_node! {
    pub struct EnumCase {
        pub name: Name,
    }
}

syntax_node! {
    pub struct AdditionalCase {
        pub case: Id<EnumCase>,
    }
}

// === Classes ===

syntax_node! {
    pub struct ClassDeclaration {
        pub name: Name,
        pub generics: Option<Id<GenericArgumentClause>>,
        pub inheritance: Option<Id<TypeInheritanceClause>>,
        pub body: Option<Id<ClassBody>>,
    }
}

syntax_node! {
    /// `<T U>`
    pub struct GenericArgumentClause {
        pub parameters: Option<NodeList<Id<GenericParameter>>>,
    }
}

syntax_node! {
    pub struct GenericParameter {
        pub name: Name,
    }
}

syntax_node! {
    pub struct ClassBody {
        pub members: Option<NodeList<Id<ClassMember>>>,
    }
}

syntax_node! {
    pub struct ClassMember {
        pub declaration: Declaration,
    }
}
