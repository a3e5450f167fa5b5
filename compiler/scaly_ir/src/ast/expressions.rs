//! Expressions, postfixes, control flow and switch.

use super::{syntax_family, syntax_node, Id, NodeList};
use super::{Pattern, TerminatedStatement, TuplePattern, Type, WildcardPattern};
use crate::{Literal, Name};

syntax_family! {
    pub enum Expression {
        CodeBlock(Id<CodeBlock>),
        Simple(Id<SimpleExpression>),
    }
}

syntax_node! {
    /// `{ statements }`
    pub struct CodeBlock {
        pub statements: Option<NodeList<Id<TerminatedStatement>>>,
    }
}

syntax_node! {
    /// A prefix expression followed by binary operations, left to right.
    pub struct SimpleExpression {
        pub prefix: Id<PrefixExpression>,
        pub binary_ops: Option<NodeList<BinaryOp>>,
    }
}

syntax_node! {
    pub struct PrefixExpression {
        pub operator: Option<Name>,
        pub expression: Id<PostfixExpression>,
    }
}

syntax_node! {
    pub struct PostfixExpression {
        pub primary: PrimaryExpression,
        pub postfixes: Option<NodeList<Postfix>>,
    }
}

// === Binary operations ===

syntax_family! {
    pub enum BinaryOp {
        Operation(Id<BinaryOperation>),
        Assignment(Id<Assignment>),
        TypeQuery(Id<TypeQuery>),
        TypeCast(Id<TypeCast>),
    }
}

syntax_node! {
    pub struct BinaryOperation {
        pub operator: Name,
        pub expression: Id<PrefixExpression>,
    }
}

syntax_node! {
    /// `= expression`
    pub struct Assignment {
        pub expression: Id<PrefixExpression>,
    }
}

syntax_node! {
    /// `is Type`
    pub struct TypeQuery {
        pub object_type: Type,
    }
}

syntax_node! {
    /// `as Type`
    pub struct TypeCast {
        pub object_type: Type,
    }
}

// === Catch clauses ===

syntax_node! {
    pub struct CatchClause {
        pub pattern: CatchPattern,
        pub binding: Option<Id<TuplePattern>>,
        pub expression: Expression,
    }
}

syntax_family! {
    pub enum CatchPattern {
        Wildcard(Id<WildcardCatchPattern>),
        Identifier(Id<IdentifierCatchPattern>),
    }
}

syntax_node! {
    pub struct WildcardCatchPattern {
        pub pattern: Id<WildcardPattern>,
    }
}

syntax_node! {
    pub struct IdentifierCatchPattern {
        pub name: Name,
    }
}

// === Postfixes ===

syntax_family! {
    pub enum Postfix {
        Operator(Id<OperatorPostfix>),
        FunctionCall(Id<FunctionCall>),
        Member(Id<ExplicitMemberExpression>),
        Subscript(Id<Subscript>),
    }
}

syntax_node! {
    pub struct OperatorPostfix {
        pub operator: Name,
    }
}

syntax_node! {
    pub struct FunctionCall {
        pub arguments: Id<ParenthesizedExpression>,
        pub catch_clauses: Option<NodeList<Id<CatchClause>>>,
    }
}

syntax_node! {
    /// `.member`
    pub struct ExplicitMemberExpression {
        pub member: MemberPostfix,
    }
}

syntax_family! {
    pub enum MemberPostfix {
        Named(Id<NamedMemberPostfix>),
    }
}

syntax_node! {
    pub struct NamedMemberPostfix {
        pub identifier: Id<IdentifierExpression>,
    }
}

syntax_node! {
    /// `[elements]`
    pub struct Subscript {
        pub expressions: Option<NodeList<Id<ExpressionElement>>>,
    }
}

syntax_node! {
    /// An expression in an argument or subscript list.
    pub struct ExpressionElement {
        pub expression: Expression,
    }
}

// === Primary expressions ===

syntax_family! {
    pub enum PrimaryExpression {
        Identifier(Id<IdentifierExpression>),
        Literal(Id<LiteralExpression>),
        If(Id<IfExpression>),
        Switch(Id<SwitchExpression>),
        For(Id<ForExpression>),
        While(Id<WhileExpression>),
        Repeat(Id<RepeatExpression>),
        Parenthesized(Id<ParenthesizedExpression>),
        Return(Id<ReturnExpression>),
        Throw(Id<ThrowExpression>),
        Break(Id<BreakExpression>),
        InitializerCall(Id<InitializerCall>),
        This(Id<ThisExpression>),
        Super(SuperExpression),
        Null(Id<NullExpression>),
    }
}

syntax_node! {
    pub struct IdentifierExpression {
        pub name: Name,
    }
}

syntax_node! {
    pub struct LiteralExpression {
        pub literal: Literal,
    }
}

syntax_node! {
    pub struct IfExpression {
        pub condition: Expression,
        pub consequent: Expression,
        pub else_clause: Option<Id<ElseClause>>,
    }
}

syntax_node! {
    pub struct ElseClause {
        pub alternative: Expression,
    }
}

// === Switch ===

syntax_node! {
    pub struct SwitchExpression {
        pub expression: Expression,
        pub body: SwitchBody,
    }
}

syntax_family! {
    pub enum SwitchBody {
        Curlied(Id<CurliedSwitchBody>),
        Naked(Id<NakedSwitchBody>),
    }
}

syntax_node! {
    pub struct CurliedSwitchBody {
        pub cases: Option<NodeList<Id<SwitchCase>>>,
    }
}

syntax_node! {
    pub struct NakedSwitchBody {
        pub cases: Option<NodeList<Id<SwitchCase>>>,
    }
}

syntax_node! {
    pub struct SwitchCase {
        pub label: CaseLabel,
        pub content: CaseContent,
    }
}

syntax_family! {
    pub enum CaseLabel {
        Item(Id<ItemCaseLabel>),
        Default(Id<DefaultCaseLabel>),
    }
}

syntax_node! {
    /// `case p, q:`
    pub struct ItemCaseLabel {
        pub pattern: Pattern,
        pub additional: Option<NodeList<Id<CaseItem>>>,
    }
}

syntax_node! {
    pub struct CaseItem {
        pub pattern: Pattern,
    }
}

syntax_node! {
    pub struct DefaultCaseLabel;
}

syntax_family! {
    pub enum CaseContent {
        Block(Id<BlockCaseContent>),
        Empty(Id<EmptyCaseContent>),
    }
}

syntax_node! {
    pub struct BlockCaseContent {
        pub statements: NodeList<Id<TerminatedStatement>>,
    }
}

syntax_node! {
    /// A lone `;`.
    pub struct EmptyCaseContent;
}

// === Loops ===

syntax_node! {
    pub struct ForExpression {
        pub pattern: Pattern,
        pub expression: Expression,
        pub code: Expression,
    }
}

syntax_node! {
    pub struct WhileExpression {
        pub condition: Expression,
        pub code: Expression,
    }
}

syntax_node! {
    pub struct RepeatExpression {
        pub code: Expression,
        pub condition: Expression,
    }
}

// === Other primaries ===

syntax_node! {
    pub struct ParenthesizedExpression {
        pub expressions: Option<NodeList<Id<ExpressionElement>>>,
    }
}

syntax_node! {
    pub struct ReturnExpression {
        pub expression: Option<Expression>,
    }
}

syntax_node! {
    pub struct ThrowExpression {
        pub expression: Option<Expression>,
    }
}

syntax_node! {
    pub struct BreakExpression {
        pub expression: Option<Expression>,
    }
}

syntax_node! {
    /// `Type(arguments) catch ...`
    pub struct InitializerCall {
        pub type_to_initialize: Type,
        pub arguments: Id<ParenthesizedExpression>,
        pub catch_clauses: Option<NodeList<Id<CatchClause>>>,
    }
}

syntax_node! {
    pub struct ThisExpression;
}

syntax_family! {
    pub enum SuperExpression {
        Dot(Id<SuperDot>),
        Subscript(Id<SuperSubscript>),
    }
}

syntax_node! {
    /// `super.init` or `super.name`
    pub struct SuperDot {
        pub member: CommonSuperMember,
    }
}

syntax_node! {
    pub struct SuperSubscript {
        pub subscript: Id<Subscript>,
    }
}

syntax_family! {
    pub enum CommonSuperMember {
        Init(Id<SuperInit>),
        Member(Id<SuperMember>),
    }
}

syntax_node! {
    pub struct SuperInit;
}

syntax_node! {
    pub struct SuperMember {
        pub name: Name,
    }
}

syntax_node! {
    pub struct NullExpression;
}
