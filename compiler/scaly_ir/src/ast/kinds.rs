//! The closed set of node kinds.
//!
//! [`for_each_syntax_kind!`] is the single list of kinds. It hands
//! `(Kind, enter_hook, exit_hook)` triples to a callback macro, which is how
//! both [`NodeKind`] here and the visitor trait are generated.

#[allow(clippy::wildcard_imports)]
use super::*;

macro_rules! for_each_syntax_kind {
    ($callback:ident) => {
        $callback! {
            (CompilationUnit, enter_compilation_unit, exit_compilation_unit),
            (TerminatedStatement, enter_terminated_statement, exit_terminated_statement),
            (UseDeclaration, enter_use_declaration, exit_use_declaration),
            (PathIdentifier, enter_path_identifier, exit_path_identifier),
            (PathItem, enter_path_item, exit_path_item),
            (Initializer, enter_initializer, exit_initializer),
            (ConstantDeclaration, enter_constant_declaration, exit_constant_declaration),
            (VariableDeclaration, enter_variable_declaration, exit_variable_declaration),
            (MutableDeclaration, enter_mutable_declaration, exit_mutable_declaration),
            (BindingInitializer, enter_binding_initializer, exit_binding_initializer),
            (PatternInitializer, enter_pattern_initializer, exit_pattern_initializer),
            (AdditionalInitializer, enter_additional_initializer, exit_additional_initializer),
            (FunctionDeclaration, enter_function_declaration, exit_function_declaration),
            (InitializerDeclaration, enter_initializer_declaration, exit_initializer_declaration),
            (OverrideWord, enter_override_word, exit_override_word),
            (StaticWord, enter_static_word, exit_static_word),
            (IdentifierFunction, enter_identifier_function, exit_identifier_function),
            (FunctionSignature, enter_function_signature, exit_function_signature),
            (FunctionResult, enter_function_result, exit_function_result),
            (ExistingClause, enter_existing_clause, exit_existing_clause),
            (ParameterClause, enter_parameter_clause, exit_parameter_clause),
            (ConstParameter, enter_const_parameter, exit_const_parameter),
            (VarParameter, enter_var_parameter, exit_var_parameter),
            (ThrowsClause, enter_throws_clause, exit_throws_clause),
            (EnumDeclaration, enter_enum_declaration, exit_enum_declaration),
            (EnumMember, enter_enum_member, exit_enum_member),
            (EnumCase, enter_enum_case, exit_enum_case),
            (AdditionalCase, enter_additional_case, exit_additional_case),
            (ClassDeclaration, enter_class_declaration, exit_class_declaration),
            (GenericArgumentClause, enter_generic_argument_clause, exit_generic_argument_clause),
            (GenericParameter, enter_generic_parameter, exit_generic_parameter),
            (ClassBody, enter_class_body, exit_class_body),
            (ClassMember, enter_class_member, exit_class_member),
            (CodeBlock, enter_code_block, exit_code_block),
            (SimpleExpression, enter_simple_expression, exit_simple_expression),
            (PrefixExpression, enter_prefix_expression, exit_prefix_expression),
            (PostfixExpression, enter_postfix_expression, exit_postfix_expression),
            (BinaryOperation, enter_binary_operation, exit_binary_operation),
            (Assignment, enter_assignment, exit_assignment),
            (TypeQuery, enter_type_query, exit_type_query),
            (TypeCast, enter_type_cast, exit_type_cast),
            (CatchClause, enter_catch_clause, exit_catch_clause),
            (WildcardCatchPattern, enter_wildcard_catch_pattern, exit_wildcard_catch_pattern),
            (IdentifierCatchPattern, enter_identifier_catch_pattern, exit_identifier_catch_pattern),
            (OperatorPostfix, enter_operator_postfix, exit_operator_postfix),
            (FunctionCall, enter_function_call, exit_function_call),
            (ExplicitMemberExpression, enter_explicit_member_expression, exit_explicit_member_expression),
            (NamedMemberPostfix, enter_named_member_postfix, exit_named_member_postfix),
            (Subscript, enter_subscript, exit_subscript),
            (ExpressionElement, enter_expression_element, exit_expression_element),
            (IdentifierExpression, enter_identifier_expression, exit_identifier_expression),
            (LiteralExpression, enter_literal_expression, exit_literal_expression),
            (IfExpression, enter_if_expression, exit_if_expression),
            (ElseClause, enter_else_clause, exit_else_clause),
            (SwitchExpression, enter_switch_expression, exit_switch_expression),
            (CurliedSwitchBody, enter_curlied_switch_body, exit_curlied_switch_body),
            (NakedSwitchBody, enter_naked_switch_body, exit_naked_switch_body),
            (SwitchCase, enter_switch_case, exit_switch_case),
            (ItemCaseLabel, enter_item_case_label, exit_item_case_label),
            (CaseItem, enter_case_item, exit_case_item),
            (DefaultCaseLabel, enter_default_case_label, exit_default_case_label),
            (BlockCaseContent, enter_block_case_content, exit_block_case_content),
            (EmptyCaseContent, enter_empty_case_content, exit_empty_case_content),
            (ForExpression, enter_for_expression, exit_for_expression),
            (WhileExpression, enter_while_expression, exit_while_expression),
            (RepeatExpression, enter_repeat_expression, exit_repeat_expression),
            (ParenthesizedExpression, enter_parenthesized_expression, exit_parenthesized_expression),
            (ReturnExpression, enter_return_expression, exit_return_expression),
            (ThrowExpression, enter_throw_expression, exit_throw_expression),
            (BreakExpression, enter_break_expression, exit_break_expression),
            (InitializerCall, enter_initializer_call, exit_initializer_call),
            (ThisExpression, enter_this_expression, exit_this_expression),
            (SuperDot, enter_super_dot, exit_super_dot),
            (SuperSubscript, enter_super_subscript, exit_super_subscript),
            (SuperInit, enter_super_init, exit_super_init),
            (SuperMember, enter_super_member, exit_super_member),
            (NullExpression, enter_null_expression, exit_null_expression),
            (WildcardPattern, enter_wildcard_pattern, exit_wildcard_pattern),
            (IdentifierPattern, enter_identifier_pattern, exit_identifier_pattern),
            (TypeAnnotation, enter_type_annotation, exit_type_annotation),
            (TuplePattern, enter_tuple_pattern, exit_tuple_pattern),
            (TuplePatternElement, enter_tuple_pattern_element, exit_tuple_pattern_element),
            (ExpressionPattern, enter_expression_pattern, exit_expression_pattern),
            (TypeIdentifier, enter_type_identifier, exit_type_identifier),
            (SubtypeIdentifier, enter_subtype_identifier, exit_subtype_identifier),
            (ArrayType, enter_array_type, exit_array_type),
            (OptionalType, enter_optional_type, exit_optional_type),
            (IndexedType, enter_indexed_type, exit_indexed_type),
            (TypeInheritanceClause, enter_type_inheritance_clause, exit_type_inheritance_clause),
            (Inheritance, enter_inheritance, exit_inheritance),
            (Local, enter_local, exit_local),
            (Reference, enter_reference, exit_reference),
            (Thrown, enter_thrown, exit_thrown),
        }
    };
}
pub(crate) use for_each_syntax_kind;

macro_rules! define_node_kind {
    ($(($kind:ident, $enter:ident, $exit:ident)),* $(,)?) => {
        /// Payload of a stored node, one variant per concrete kind.
        #[derive(Copy, Clone, Debug, Eq, PartialEq)]
        pub enum NodeKind {
            $($kind($kind)),*
        }

        impl NodeKind {
            /// Name of the kind, e.g. `"ClassDeclaration"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(NodeKind::$kind(_) => stringify!($kind)),*
                }
            }

            pub(crate) fn for_each_child(&self, tree: &SyntaxTree, f: &mut dyn FnMut(NodeId)) {
                match self {
                    $(NodeKind::$kind(node) => node.for_each_child(tree, f)),*
                }
            }
        }

        $(
            impl NodeData for $kind {
                fn from_kind(kind: &NodeKind) -> Option<&Self> {
                    match kind {
                        NodeKind::$kind(node) => Some(node),
                        _ => None,
                    }
                }

                fn into_kind(self) -> NodeKind {
                    NodeKind::$kind(self)
                }
            }
        )*
    };
}

for_each_syntax_kind!(define_node_kind);
