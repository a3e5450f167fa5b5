//! Statements and declarations.

use crate::stack::ensure_sufficient_stack;
use crate::{Parser, ParserError};
use scaly_ir::ast::{
    AdditionalCase, AdditionalInitializer, BindingInitializer, ClassBody, ClassDeclaration,
    ClassMember, ConstParameter, ConstantDeclaration, Declaration, EnumCase, EnumDeclaration,
    EnumMember, ExistingClause, FunctionDeclaration, FunctionName, FunctionResult,
    FunctionSignature, GenericArgumentClause, GenericParameter, IdentifierFunction, Initializer,
    InitializerDeclaration, Modifier, MutableDeclaration, OverrideWord, Parameter,
    ParameterClause, PathIdentifier, PathItem, PatternInitializer, Statement, StaticWord,
    TerminatedStatement, ThrowsClause, UseDeclaration, VarParameter, VariableDeclaration,
};
use scaly_ir::{Id, Keyword, Punctuation};
use scaly_lexer::TokenCursor;

impl<L: TokenCursor> Parser<'_, L> {
    pub(crate) fn parse_terminated_statement(
        &mut self,
    ) -> Result<Id<TerminatedStatement>, ParserError> {
        let start = self.lexer.position();
        let statement = self.parse_statement()?;
        let has_semicolon = self.lexer.parse_punctuation(Punctuation::Semicolon);
        Ok(self.finish(
            start,
            TerminatedStatement {
                statement,
                has_semicolon,
            },
        ))
    }

    fn parse_statement(&mut self) -> Result<Statement, ParserError> {
        ensure_sufficient_stack(|| {
            self.choice(&[
                |p| p.parse_declaration().map(Statement::Declaration),
                |p| p.parse_expression().map(Statement::Expression),
            ])
        })
    }

    fn parse_declaration(&mut self) -> Result<Declaration, ParserError> {
        self.choice(&[
            |p| p.parse_use_declaration().map(Declaration::Use),
            |p| p.parse_constant_declaration().map(Declaration::Constant),
            |p| p.parse_variable_declaration().map(Declaration::Variable),
            |p| p.parse_mutable_declaration().map(Declaration::Mutable),
            |p| p.parse_function_declaration().map(Declaration::Function),
            |p| p.parse_enum_declaration().map(Declaration::Enum),
            |p| p.parse_class_declaration().map(Declaration::Class),
            |p| p.parse_initializer_declaration().map(Declaration::Initializer),
        ])
    }

    // === Use ===

    fn parse_use_declaration(&mut self) -> Result<Id<UseDeclaration>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Use)?;
        let import = self.parse_path_item()?;
        let path = self.list(Self::parse_path_identifier);
        Ok(self.finish(start, UseDeclaration { import, path }))
    }

    fn parse_path_identifier(&mut self) -> Result<Id<PathIdentifier>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Dot)?;
        let item = self.parse_path_item()?;
        Ok(self.finish(start, PathIdentifier { item }))
    }

    fn parse_path_item(&mut self) -> Result<Id<PathItem>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        Ok(self.finish(start, PathItem { name }))
    }

    // === Bindings ===

    fn parse_constant_declaration(&mut self) -> Result<Id<ConstantDeclaration>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Let)?;
        let initializer = self.parse_binding_initializer()?;
        Ok(self.finish(start, ConstantDeclaration { initializer }))
    }

    fn parse_variable_declaration(&mut self) -> Result<Id<VariableDeclaration>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Var)?;
        let initializer = self.parse_binding_initializer()?;
        Ok(self.finish(start, VariableDeclaration { initializer }))
    }

    fn parse_mutable_declaration(&mut self) -> Result<Id<MutableDeclaration>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Mutable)?;
        let initializer = self.parse_binding_initializer()?;
        Ok(self.finish(start, MutableDeclaration { initializer }))
    }

    fn parse_binding_initializer(&mut self) -> Result<Id<BindingInitializer>, ParserError> {
        let start = self.lexer.position();
        let initializer = self.parse_pattern_initializer()?;
        let additional = self.list(Self::parse_additional_initializer);
        Ok(self.finish(
            start,
            BindingInitializer {
                initializer,
                additional,
            },
        ))
    }

    fn parse_pattern_initializer(&mut self) -> Result<Id<PatternInitializer>, ParserError> {
        let start = self.lexer.position();
        let pattern = self.parse_pattern()?;
        let initializer = self.optional(Self::parse_initializer);
        Ok(self.finish(
            start,
            PatternInitializer {
                pattern,
                initializer,
            },
        ))
    }

    fn parse_additional_initializer(
        &mut self,
    ) -> Result<Id<AdditionalInitializer>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Comma)?;
        let pattern = self.parse_pattern_initializer()?;
        Ok(self.finish(start, AdditionalInitializer { pattern }))
    }

    fn parse_initializer(&mut self) -> Result<Id<Initializer>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Equal)?;
        let expression = self.parse_expression()?;
        Ok(self.finish(start, Initializer { expression }))
    }

    // === Functions ===

    fn parse_function_declaration(&mut self) -> Result<Id<FunctionDeclaration>, ParserError> {
        let start = self.lexer.position();
        let modifiers = self.list(Self::parse_modifier);
        self.expect_keyword(Keyword::Function)?;
        let name = self.parse_function_name()?;
        let signature = self.parse_function_signature()?;
        let body = self.optional(Self::parse_expression);
        Ok(self.finish(
            start,
            FunctionDeclaration {
                modifiers,
                name,
                signature,
                body,
            },
        ))
    }

    fn parse_initializer_declaration(
        &mut self,
    ) -> Result<Id<InitializerDeclaration>, ParserError> {
        let start = self.lexer.position();
        let modifiers = self.list(Self::parse_modifier);
        self.expect_keyword(Keyword::Init)?;
        let parameters = self.parse_parameter_clause()?;
        let throws = self.optional(Self::parse_throws_clause);
        let body = self.parse_expression()?;
        Ok(self.finish(
            start,
            InitializerDeclaration {
                modifiers,
                parameters,
                throws,
                body,
            },
        ))
    }

    fn parse_modifier(&mut self) -> Result<Modifier, ParserError> {
        self.choice(&[
            |p| p.parse_override_word().map(Modifier::Override),
            |p| p.parse_static_word().map(Modifier::Static),
        ])
    }

    fn parse_override_word(&mut self) -> Result<Id<OverrideWord>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Override)?;
        Ok(self.finish(start, OverrideWord))
    }

    fn parse_static_word(&mut self) -> Result<Id<StaticWord>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Static)?;
        Ok(self.finish(start, StaticWord))
    }

    fn parse_function_name(&mut self) -> Result<FunctionName, ParserError> {
        self.choice(&[|p| {
            p.parse_identifier_function()
                .map(FunctionName::Identifier)
        }])
    }

    fn parse_identifier_function(&mut self) -> Result<Id<IdentifierFunction>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        Ok(self.finish(start, IdentifierFunction { name }))
    }

    fn parse_function_signature(&mut self) -> Result<Id<FunctionSignature>, ParserError> {
        let start = self.lexer.position();
        let parameters = self.parse_parameter_clause()?;
        let result = self.optional(Self::parse_function_result);
        let throws = self.optional(Self::parse_throws_clause);
        Ok(self.finish(
            start,
            FunctionSignature {
                parameters,
                result,
                throws,
            },
        ))
    }

    fn parse_function_result(&mut self) -> Result<Id<FunctionResult>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Arrow)?;
        let existing = self.optional(Self::parse_existing_clause);
        let result_type = self.parse_type()?;
        Ok(self.finish(
            start,
            FunctionResult {
                existing,
                result_type,
            },
        ))
    }

    fn parse_existing_clause(&mut self) -> Result<Id<ExistingClause>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Existing)?;
        Ok(self.finish(start, ExistingClause))
    }

    fn parse_parameter_clause(&mut self) -> Result<Id<ParameterClause>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftParen)?;
        let parameters = self.list(Self::parse_parameter);
        self.expect_punctuation(Punctuation::RightParen)?;
        Ok(self.finish(start, ParameterClause { parameters }))
    }

    fn parse_parameter(&mut self) -> Result<Parameter, ParserError> {
        self.choice(&[
            |p| p.parse_const_parameter().map(Parameter::Const),
            |p| p.parse_var_parameter().map(Parameter::Var),
        ])
    }

    /// `let? name: Type ,?`
    fn parse_const_parameter(&mut self) -> Result<Id<ConstParameter>, ParserError> {
        let start = self.lexer.position();
        self.lexer.parse_keyword(Keyword::Let);
        let name = self.expect_identifier()?;
        self.expect_punctuation(Punctuation::Colon)?;
        let parameter_type = self.parse_type()?;
        self.lexer.parse_punctuation(Punctuation::Comma);
        Ok(self.finish(
            start,
            ConstParameter {
                name,
                parameter_type,
            },
        ))
    }

    /// `mutable name: Type ,?`
    fn parse_var_parameter(&mut self) -> Result<Id<VarParameter>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Mutable)?;
        let name = self.expect_identifier()?;
        self.expect_punctuation(Punctuation::Colon)?;
        let parameter_type = self.parse_type()?;
        self.lexer.parse_punctuation(Punctuation::Comma);
        Ok(self.finish(
            start,
            VarParameter {
                name,
                parameter_type,
            },
        ))
    }

    fn parse_throws_clause(&mut self) -> Result<Id<ThrowsClause>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Throws)?;
        let throws_type = self.parse_type()?;
        Ok(self.finish(start, ThrowsClause { throws_type }))
    }

    // === Enums ===

    fn parse_enum_declaration(&mut self) -> Result<Id<EnumDeclaration>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Enum)?;
        let name = self.expect_identifier()?;
        self.expect_punctuation(Punctuation::LeftCurly)?;
        let members = self.list(Self::parse_enum_member);
        self.expect_punctuation(Punctuation::RightCurly)?;
        Ok(self.finish(start, EnumDeclaration { name, members }))
    }

    fn parse_enum_member(&mut self) -> Result<Id<EnumMember>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Case)?;
        let case = self.parse_enum_case()?;
        let additional = self.list(Self::parse_additional_case);
        let parameters = self.optional(Self::parse_parameter_clause);
        Ok(self.finish(
            start,
            EnumMember {
                case,
                additional,
                parameters,
            },
        ))
    }

    fn parse_enum_case(&mut self) -> Result<Id<EnumCase>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        Ok(self.finish(start, EnumCase { name }))
    }

    fn parse_additional_case(&mut self) -> Result<Id<AdditionalCase>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::Comma)?;
        let case = self.parse_enum_case()?;
        Ok(self.finish(start, AdditionalCase { case }))
    }

    // === Classes ===

    fn parse_class_declaration(&mut self) -> Result<Id<ClassDeclaration>, ParserError> {
        let start = self.lexer.position();
        self.expect_keyword(Keyword::Class)?;
        let name = self.expect_identifier()?;
        let generics = self.optional(Self::parse_generic_argument_clause);
        let inheritance = self.optional(Self::parse_type_inheritance_clause);
        let body = self.optional(Self::parse_class_body);
        Ok(self.finish(
            start,
            ClassDeclaration {
                name,
                generics,
                inheritance,
                body,
            },
        ))
    }

    /// `<T U>`
    fn parse_generic_argument_clause(
        &mut self,
    ) -> Result<Id<GenericArgumentClause>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftAngular)?;
        let parameters = self.list(Self::parse_generic_parameter);
        self.expect_punctuation(Punctuation::RightAngular)?;
        Ok(self.finish(start, GenericArgumentClause { parameters }))
    }

    fn parse_generic_parameter(&mut self) -> Result<Id<GenericParameter>, ParserError> {
        let start = self.lexer.position();
        let name = self.expect_identifier()?;
        Ok(self.finish(start, GenericParameter { name }))
    }

    fn parse_class_body(&mut self) -> Result<Id<ClassBody>, ParserError> {
        let start = self.lexer.position();
        self.expect_punctuation(Punctuation::LeftCurly)?;
        let members = self.list(Self::parse_class_member);
        self.expect_punctuation(Punctuation::RightCurly)?;
        Ok(self.finish(start, ClassBody { members }))
    }

    fn parse_class_member(&mut self) -> Result<Id<ClassMember>, ParserError> {
        let start = self.lexer.position();
        let declaration = self.parse_declaration()?;
        self.lexer.parse_punctuation(Punctuation::Semicolon);
        Ok(self.finish(start, ClassMember { declaration }))
    }
}
