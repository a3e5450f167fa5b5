//! Patterns, types and lifetimes.

use crate::stack::ensure_sufficient_stack;
use crate::{Parser, ParserError};
use scaly_ir::ast::{
    ArrayType, ExpressionPattern, IdentifierPattern, IndexedType, Inheritance, LifeTime, Local,
    OptionalType, Pattern, Reference, SubtypeIdentifier, Thrown, TuplePattern,
    TuplePatternElement, Type, TypeAnnotation, TypeIdentifier, TypeInheritanceClause,
    TypePostfix, WildcardPattern,
};
use scaly_ir::{Id, Punctuation};
use scaly_lexer::TokenCursor;

impl<L: TokenCursor> Parser<'_, L> {
    pub(crate) fn parse_pattern(&mut self) -> Result<Pattern, ParserError> {
        ensure_sufficient_stack(|| {
            self.choice(&[
                |p| p.parse_wildcard_pattern().map(Pattern::Wildcard),
                |p| p.parse_identifier_pattern().map(Pattern::Identifier),
                |p| p.parse_tuple_pattern().map(Pattern::Tuple),
                |p| p.parse_expression_pattern().map(Pattern::Expression),
            ])
        })
    }

    pub(crate) fn parse_wildcard_pattern(&mut self) -> Result<Id<WildcardPattern>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Underscore)?;
        Ok(self.finish(start, WildcardPattern))
    }

    fn parse_identifier_pattern(&mut self) -> Result<Id<IdentifierPattern>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        let annotation = self.optional(Self::parse_type_annotation);
        Ok(self.finish(start, IdentifierPattern { name, annotation }))
    }

    fn parse_type_annotation(&mut self) -> Result<Id<TypeAnnotation>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Colon)?;
        let annotation_type = self.parse_type()?;
        Ok(self.finish(start, TypeAnnotation { annotation_type }))
    }

    pub(crate) fn parse_tuple_pattern(&mut self) -> Result<Id<TuplePattern>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftParen)?;
        let elements = self.list(Self::parse_tuple_pattern_element);
        self.expect_punctuation(Punctuation::RightParen)?;
        Ok(self.finish(start, TuplePattern { elements }))
    }

    fn parse_tuple_pattern_element(&mut self) -> Result<Id<TuplePatternElement>, ParserError> {
        let start = self.lexer.position();
        let pattern = self.parse_pattern()?;
        self.lexer.parse_punctuation(Punctuation::Comma);
        Ok(self.finish(start, TuplePatternElement { pattern }))
    }

    fn parse_expression_pattern(&mut self) -> Result<Id<ExpressionPattern>, ParserError> {
        let start = self.lexer.position();
        let expression = self.parse_expression()?;
        Ok(self.finish(start, ExpressionPattern { expression }))
    }

    // === Types ===

    pub(crate) fn parse_type(&mut self) -> Result<Type, ParserError> {
        ensure_sufficient_stack(|| {
            self.choice(&[
                |p| p.parse_array_type().map(Type::Array),
                |p| p.parse_type_identifier().map(Type::Identifier),
            ])
        })
    }

    /// `Name`, `Name.Sub`, each with optional postfixes and a lifetime.
    fn parse_type_identifier(&mut self) -> Result<Id<TypeIdentifier>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        let subtype = self.optional(Self::parse_subtype_identifier);
        let postfixes = self.list(Self::parse_type_postfix);
        let lifetime = self.optional(Self::parse_lifetime);
        Ok(self.finish(
            start,
            TypeIdentifier {
                name,
                subtype,
                postfixes,
                lifetime,
            },
        ))
    }

    fn parse_subtype_identifier(&mut self) -> Result<Id<SubtypeIdentifier>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Dot)?;
        let type_identifier = self.parse_type_identifier()?;
        Ok(self.finish(start, SubtypeIdentifier { type_identifier }))
    }

    fn parse_array_type(&mut self) -> Result<Id<ArrayType>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftBracket)?;
        let element_type = self.parse_type()?;
        self.expect_punctuation(Punctuation::RightBracket)?;
        let postfixes = self.list(Self::parse_type_postfix);
        let lifetime = self.optional(Self::parse_lifetime);
        Ok(self.finish(
            start,
            ArrayType {
                element_type,
                postfixes,
                lifetime,
            },
        ))
    }

    fn parse_type_postfix(&mut self) -> Result<TypePostfix, ParserError> {
        self.choice(&[
            |p| p.parse_optional_type().map(TypePostfix::Optional),
            |p| p.parse_indexed_type().map(TypePostfix::Indexed),
        ])
    }

    fn parse_optional_type(&mut self) -> Result<Id<OptionalType>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Question)?;
        Ok(self.finish(start, OptionalType))
    }

    fn parse_indexed_type(&mut self) -> Result<Id<IndexedType>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftBracket)?;
        let key = self.parse_type()?;
        self.expect_punctuation(Punctuation::RightBracket)?;
        Ok(self.finish(start, IndexedType { key }))
    }

    pub(crate) fn parse_type_inheritance_clause(
        &mut self,
    ) -> Result<Id<TypeInheritanceClause>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Colon)?;
        let inheritances = self.list(Self::parse_inheritance);
        Ok(self.finish(start, TypeInheritanceClause { inheritances }))
    }

    fn parse_inheritance(&mut self) -> Result<Id<Inheritance>, ParserError> {
        let start = self.lexer.position();
        let type_identifier = self.parse_type_identifier()?;
        self.lexer.parse_punctuation(Punctuation::Comma);
        Ok(self.finish(start, Inheritance { type_identifier }))
    }

    // === Lifetimes ===

    fn parse_lifetime(&mut self) -> Result<LifeTime, ParserError> {
        self.choice(&[
            |p| p.parse_local().map(LifeTime::Local),
            |p| p.parse_reference().map(LifeTime::Reference),
            |p| p.parse_thrown().map(LifeTime::Thrown),
        ])
    }

    /// `$`
    fn parse_local(&mut self) -> Result<Id<Local>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Dollar)?;
        Ok(self.finish(start, Local))
    }

    /// `^age`
    fn parse_reference(&mut self) -> Result<Id<Reference>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Caret)?;
        let age = self.expect_literal()?;
        Ok(self.finish(start, Reference { age }))
    }

    /// `#`
    fn parse_thrown(&mut self) -> Result<Id<Thrown>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Hash)?;
        Ok(self.finish(start, Thrown))
    }
}
