//! Expressions.
//!
//! A simple expression is a prefix expression followed by a flat list of
//! binary operations; the parser does not resolve precedence.

use crate::stack::ensure_sufficient_stack;
use crate::{Parser, ParserError};
use scaly_ir::ast::{
    Assignment, BinaryOp, BinaryOperation, BlockCaseContent, BreakExpression, CaseContent,
    CaseItem, CaseLabel, CatchClause, CatchPattern, CodeBlock, CommonSuperMember,
    CurliedSwitchBody, DefaultCaseLabel, ElseClause, EmptyCaseContent, ExplicitMemberExpression,
    Expression, ExpressionElement, ForExpression, FunctionCall, IdentifierCatchPattern,
    IdentifierExpression, IfExpression, InitializerCall, ItemCaseLabel, LiteralExpression,
    MemberPostfix, NakedSwitchBody, NamedMemberPostfix, NullExpression, OperatorPostfix,
    ParenthesizedExpression, Postfix, PostfixExpression, PrefixExpression, PrimaryExpression,
    RepeatExpression, ReturnExpression, SimpleExpression, Subscript, SuperDot, SuperExpression,
    SuperInit, SuperMember, SuperSubscript, SwitchBody, SwitchCase, SwitchExpression,
    ThisExpression, ThrowExpression, TypeCast, TypeQuery, WhileExpression,
    WildcardCatchPattern,
};
use scaly_ir::{Id, Keyword, Punctuation};
use scaly_lexer::TokenCursor;

impl<L: TokenCursor> Parser<'_, L> {
    /// Failures are remembered by start offset: a pattern retries an
    /// unclosed `(` as an expression at every nesting level.
    pub(crate) fn parse_expression(&mut self) -> Result<Expression, ParserError> {
        let offset = self.lexer.position().offset;
        if let Some(error) = self.expression_failures.get(&offset) {
            return Err(error.clone());
        }
        let result = ensure_sufficient_stack(|| {
            self.choice(&[
                |p| p.parse_code_block().map(Expression::CodeBlock),
                |p| p.parse_simple_expression().map(Expression::Simple),
            ])
        });
        if let Err(error) = &result {
            self.expression_failures.insert(offset, error.clone());
        }
        result
    }

    fn parse_code_block(&mut self) -> Result<Id<CodeBlock>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftCurly)?;
        let statements = self.list(Self::parse_terminated_statement);
        self.expect_punctuation(Punctuation::RightCurly)?;
        Ok(self.finish(start, CodeBlock { statements }))
    }

    fn parse_simple_expression(&mut self) -> Result<Id<SimpleExpression>, ParserError> {
        let start = self.lexer.position();
        let prefix = self.parse_prefix_expression()?;
        let binary_ops = self.list(Self::parse_binary_op);
        Ok(self.finish(start, SimpleExpression { prefix, binary_ops }))
    }

    fn parse_prefix_expression(&mut self) -> Result<Id<PrefixExpression>, ParserError> {
        let start = self.lexer.position();
        let operator = self.lexer.parse_prefix_operator();
        let expression = self.parse_postfix_expression()?;
        Ok(self.finish(
            start,
            PrefixExpression {
                operator,
                expression,
            },
        ))
    }

    fn parse_postfix_expression(&mut self) -> Result<Id<PostfixExpression>, ParserError> {
        let start = self.lexer.position();
        let primary = self.parse_primary_expression()?;
        let postfixes = self.list(Self::parse_postfix);
        Ok(self.finish(start, PostfixExpression { primary, postfixes }))
    }

    // === Binary operations ===

    fn parse_binary_op(&mut self) -> Result<BinaryOp, ParserError> {
        self.choice(&[
            |p| p.parse_binary_operation().map(BinaryOp::Operation),
            |p| p.parse_assignment().map(BinaryOp::Assignment),
            |p| p.parse_type_query().map(BinaryOp::TypeQuery),
            |p| p.parse_type_cast().map(BinaryOp::TypeCast),
        ])
    }

    fn parse_binary_operation(&mut self) -> Result<Id<BinaryOperation>, ParserError> {
        let start = self.lexer.position();
        let operator = self.expect_binary_operator()?;
        let expression = self.parse_prefix_expression()?;
        Ok(self.finish(
            start,
            BinaryOperation {
                operator,
                expression,
            },
        ))
    }

    fn parse_assignment(&mut self) -> Result<Id<Assignment>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Equal)?;
        let expression = self.parse_prefix_expression()?;
        Ok(self.finish(start, Assignment { expression }))
    }

    fn parse_type_query(&mut self) -> Result<Id<TypeQuery>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Is)?;
        let object_type = self.parse_type()?;
        Ok(self.finish(start, TypeQuery { object_type }))
    }

    fn parse_type_cast(&mut self) -> Result<Id<TypeCast>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::As)?;
        let object_type = self.parse_type()?;
        Ok(self.finish(start, TypeCast { object_type }))
    }

    // === Catch clauses ===

    fn parse_catch_clause(&mut self) -> Result<Id<CatchClause>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Catch)?;
        let pattern = self.parse_catch_pattern()?;
        let binding = self.optional(Self::parse_tuple_pattern);
        let expression = self.parse_expression()?;
        Ok(self.finish(
            start,
            CatchClause {
                pattern,
                binding,
                expression,
            },
        ))
    }

    fn parse_catch_pattern(&mut self) -> Result<CatchPattern, ParserError> {
        self.choice(&[
            |p| p.parse_wildcard_catch_pattern().map(CatchPattern::Wildcard),
            |p| p.parse_identifier_catch_pattern().map(CatchPattern::Identifier),
        ])
    }

    fn parse_wildcard_catch_pattern(&mut self) -> Result<Id<WildcardCatchPattern>, ParserError> {
        let start = self.lexer.position();
        let pattern = self.parse_wildcard_pattern()?;
        Ok(self.finish(start, WildcardCatchPattern { pattern }))
    }

    fn parse_identifier_catch_pattern(
        &mut self,
    ) -> Result<Id<IdentifierCatchPattern>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        Ok(self.finish(start, IdentifierCatchPattern { name }))
    }

    // === Postfixes ===

    fn parse_postfix(&mut self) -> Result<Postfix, ParserError> {
        self.choice(&[
            |p| p.parse_operator_postfix().map(Postfix::Operator),
            |p| p.parse_function_call().map(Postfix::FunctionCall),
            |p| p.parse_explicit_member_expression().map(Postfix::Member),
            |p| p.parse_subscript().map(Postfix::Subscript),
        ])
    }

    fn parse_operator_postfix(&mut self) -> Result<Id<OperatorPostfix>, ParserError> {
        let start = self.lexer.position();
        let operator = self.expect_postfix_operator()?;
        Ok(self.finish(start, OperatorPostfix { operator }))
    }

    fn parse_function_call(&mut self) -> Result<Id<FunctionCall>, ParserError> {
        let start = self.lexer.position();
        let arguments = self.parse_parenthesized_expression()?;
        let catch_clauses = self.list(Self::parse_catch_clause);
        Ok(self.finish(
            start,
            FunctionCall {
                arguments,
                catch_clauses,
            },
        ))
    }

    fn parse_explicit_member_expression(
        &mut self,
    ) -> Result<Id<ExplicitMemberExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Dot)?;
        let member = self.parse_member_postfix()?;
        Ok(self.finish(start, ExplicitMemberExpression { member }))
    }

    fn parse_member_postfix(&mut self) -> Result<MemberPostfix, ParserError> {
        self.choice(&[|p| {
            p.parse_named_member_postfix().map(MemberPostfix::Named)
        }])
    }

    fn parse_named_member_postfix(&mut self) -> Result<Id<NamedMemberPostfix>, ParserError> {
        let start = self.lexer.position();
        let identifier = self.parse_identifier_expression()?;
        Ok(self.finish(start, NamedMemberPostfix { identifier }))
    }

    fn parse_subscript(&mut self) -> Result<Id<Subscript>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftBracket)?;
        let expressions = self.list(Self::parse_expression_element);
        self.expect_punctuation(Punctuation::RightBracket)?;
        Ok(self.finish(start, Subscript { expressions }))
    }

    /// An expression followed by an optional `,`.
    fn parse_expression_element(&mut self) -> Result<Id<ExpressionElement>, ParserError> {
        let start = self.lexer.position();
        let expression = self.parse_expression()?;
        self.lexer.parse_punctuation(Punctuation::Comma);
        Ok(self.finish(start, ExpressionElement { expression }))
    }

    // === Primary expressions ===

    fn parse_primary_expression(&mut self) -> Result<PrimaryExpression, ParserError> {
        self.choice(&[
            |p| p.parse_identifier_expression().map(PrimaryExpression::Identifier),
            |p| p.parse_literal_expression().map(PrimaryExpression::Literal),
            |p| p.parse_if_expression().map(PrimaryExpression::If),
            |p| p.parse_switch_expression().map(PrimaryExpression::Switch),
            |p| p.parse_for_expression().map(PrimaryExpression::For),
            |p| p.parse_while_expression().map(PrimaryExpression::While),
            |p| p.parse_repeat_expression().map(PrimaryExpression::Repeat),
            |p| {
                p.parse_parenthesized_expression()
                    .map(PrimaryExpression::Parenthesized)
            },
            |p| p.parse_return_expression().map(PrimaryExpression::Return),
            |p| p.parse_throw_expression().map(PrimaryExpression::Throw),
            |p| p.parse_break_expression().map(PrimaryExpression::Break),
            |p| p.parse_initializer_call().map(PrimaryExpression::InitializerCall),
            |p| p.parse_this_expression().map(PrimaryExpression::This),
            |p| p.parse_super_expression().map(PrimaryExpression::Super),
            |p| p.parse_null_expression().map(PrimaryExpression::Null),
        ])
    }

    fn parse_identifier_expression(&mut self) -> Result<Id<IdentifierExpression>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        Ok(self.finish(start, IdentifierExpression { name }))
    }

    fn parse_literal_expression(&mut self) -> Result<Id<LiteralExpression>, ParserError> {
        let start = self.lexer.position();
        let literal = self.expect_literal()?;
        Ok(self.finish(start, LiteralExpression { literal }))
    }

    fn parse_if_expression(&mut self) -> Result<Id<IfExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::If)?;
        let condition = self.parse_expression()?;
        let consequent = self.parse_expression()?;
        let else_clause = self.optional(Self::parse_else_clause);
        Ok(self.finish(
            start,
            IfExpression {
                condition,
                consequent,
                else_clause,
            },
        ))
    }

    fn parse_else_clause(&mut self) -> Result<Id<ElseClause>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Else)?;
        let alternative = self.parse_expression()?;
        Ok(self.finish(start, ElseClause { alternative }))
    }

    // === Switch ===

    fn parse_switch_expression(&mut self) -> Result<Id<SwitchExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Switch)?;
        let expression = self.parse_expression()?;
        let body = self.parse_switch_body()?;
        Ok(self.finish(start, SwitchExpression { expression, body }))
    }

    fn parse_switch_body(&mut self) -> Result<SwitchBody, ParserError> {
        self.choice(&[
            |p| p.parse_curlied_switch_body().map(SwitchBody::Curlied),
            |p| p.parse_naked_switch_body().map(SwitchBody::Naked),
        ])
    }

    fn parse_curlied_switch_body(&mut self) -> Result<Id<CurliedSwitchBody>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftCurly)?;
        let cases = self.list(Self::parse_switch_case);
        self.expect_punctuation(Punctuation::RightCurly)?;
        Ok(self.finish(start, CurliedSwitchBody { cases }))
    }

    fn parse_naked_switch_body(&mut self) -> Result<Id<NakedSwitchBody>, ParserError> {
        let start = self.lexer.position();
        let cases = self.list(Self::parse_switch_case);
        Ok(self.finish(start, NakedSwitchBody { cases }))
    }

    fn parse_switch_case(&mut self) -> Result<Id<SwitchCase>, ParserError> {
        let start = self.lexer.position();
        let label = self.parse_case_label()?;
        let content = self.parse_case_content()?;
        Ok(self.finish(start, SwitchCase { label, content }))
    }

    fn parse_case_label(&mut self) -> Result<CaseLabel, ParserError> {
        self.choice(&[
            |p| p.parse_item_case_label().map(CaseLabel::Item),
            |p| p.parse_default_case_label().map(CaseLabel::Default),
        ])
    }

    fn parse_item_case_label(&mut self) -> Result<Id<ItemCaseLabel>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Case)?;
        let pattern = self.parse_pattern()?;
        let additional = self.list(Self::parse_case_item);
        self.expect_punctuation(Punctuation::Colon)?;
        Ok(self.finish(
            start,
            ItemCaseLabel {
                pattern,
                additional,
            },
        ))
    }

    fn parse_case_item(&mut self) -> Result<Id<CaseItem>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Comma)?;
        let pattern = self.parse_pattern()?;
        Ok(self.finish(start, CaseItem { pattern }))
    }

    fn parse_default_case_label(&mut self) -> Result<Id<DefaultCaseLabel>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Default)?;
        self.expect_punctuation(Punctuation::Colon)?;
        Ok(self.finish(start, DefaultCaseLabel))
    }

    fn parse_case_content(&mut self) -> Result<CaseContent, ParserError> {
        self.choice(&[
            |p| p.parse_block_case_content().map(CaseContent::Block),
            |p| p.parse_empty_case_content().map(CaseContent::Empty),
        ])
    }

    /// At least one statement.
    fn parse_block_case_content(&mut self) -> Result<Id<BlockCaseContent>, ParserError> {
        let start = self.lexer.position();
        let statements = self.non_empty_list(Self::parse_terminated_statement)?;
        Ok(self.finish(start, BlockCaseContent { statements }))
    }

    fn parse_empty_case_content(&mut self) -> Result<Id<EmptyCaseContent>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Semicolon)?;
        Ok(self.finish(start, EmptyCaseContent))
    }

    // === Loops ===

    fn parse_for_expression(&mut self) -> Result<Id<ForExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::For)?;
        let pattern = self.parse_pattern()?;
        self.expect_keyword(Keyword::In)?;
        let expression = self.parse_expression()?;
        let code = self.parse_expression()?;
        Ok(self.finish(
            start,
            ForExpression {
                pattern,
                expression,
                code,
            },
        ))
    }

    fn parse_while_expression(&mut self) -> Result<Id<WhileExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::While)?;
        let condition = self.parse_expression()?;
        let code = self.parse_expression()?;
        Ok(self.finish(start, WhileExpression { condition, code }))
    }

    fn parse_repeat_expression(&mut self) -> Result<Id<RepeatExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Repeat)?;
        let code = self.parse_expression()?;
        self.expect_keyword(Keyword::While)?;
        let condition = self.parse_expression()?;
        Ok(self.finish(start, RepeatExpression { code, condition }))
    }

    // === Other primaries ===

    fn parse_parenthesized_expression(
        &mut self,
    ) -> Result<Id<ParenthesizedExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftParen)?;
        let expressions = self.list(Self::parse_expression_element);
        self.expect_punctuation(Punctuation::RightParen)?;
        Ok(self.finish(start, ParenthesizedExpression { expressions }))
    }

    fn parse_return_expression(&mut self) -> Result<Id<ReturnExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Return)?;
        let expression = self.optional(Self::parse_expression);
        Ok(self.finish(start, ReturnExpression { expression }))
    }

    fn parse_throw_expression(&mut self) -> Result<Id<ThrowExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Throw)?;
        let expression = self.optional(Self::parse_expression);
        Ok(self.finish(start, ThrowExpression { expression }))
    }

    fn parse_break_expression(&mut self) -> Result<Id<BreakExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Break)?;
        let expression = self.optional(Self::parse_expression);
        Ok(self.finish(start, BreakExpression { expression }))
    }

    /// `Type(arguments)` with optional catch clauses.
    fn parse_initializer_call(&mut self) -> Result<Id<InitializerCall>, ParserError> {
        let start = self.lexer.position();
        let type_to_initialize = self.parse_type()?;
        let arguments = self.parse_parenthesized_expression()?;
        let catch_clauses = self.list(Self::parse_catch_clause);
        Ok(self.finish(
            start,
            InitializerCall {
                type_to_initialize,
                arguments,
                catch_clauses,
            },
        ))
    }

    fn parse_this_expression(&mut self) -> Result<Id<ThisExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::This)?;
        Ok(self.finish(start, ThisExpression))
    }

    fn parse_null_expression(&mut self) -> Result<Id<NullExpression>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Null)?;
        Ok(self.finish(start, NullExpression))
    }

    // === Super ===

    fn parse_super_expression(&mut self) -> Result<SuperExpression, ParserError> {
        self.choice(&[
            |p| p.parse_super_dot().map(SuperExpression::Dot),
            |p| p.parse_super_subscript().map(SuperExpression::Subscript),
        ])
    }

    fn parse_super_dot(&mut self) -> Result<Id<SuperDot>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Super)?;
        self.expect_punctuation(Punctuation::Dot)?;
        let member = self.parse_common_super_member()?;
        Ok(self.finish(start, SuperDot { member }))
    }

    fn parse_super_subscript(&mut self) -> Result<Id<SuperSubscript>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Super)?;
        let subscript = self.parse_subscript()?;
        Ok(self.finish(start, SuperSubscript { subscript }))
    }

    fn parse_common_super_member(&mut self) -> Result<CommonSuperMember, ParserError> {
        self.choice(&[
            |p| p.parse_super_init().map(CommonSuperMember::Init),
            |p| p.parse_super_member().map(CommonSuperMember::Member),
        ])
    }

    fn parse_super_init(&mut self) -> Result<Id<SuperInit>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Init)?;
        Ok(self.finish(start, SuperInit))
    }

    fn parse_super_member(&mut self) -> Result<Id<SuperMember>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        Ok(self.finish(start, SuperMember { name }))
    }
}
