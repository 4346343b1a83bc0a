//! Every rule of the Java grammar, declared up front.
//!
//! Rules are declared before any are defined so the definitions can refer to
//! each other freely. The names are the ones the Java Language Specification
//! uses in its syntax chapter, so they show up as-is in error messages.

use parser::{Grammar, RuleId};

macro_rules! rules {
    ($($field:ident => $name:literal),* $(,)?) => {
        /// The [`RuleId`] of every rule in the grammar.
        pub(crate) struct Rules {
            $(pub(crate) $field: RuleId,)*
        }

        impl Rules {
            pub(crate) fn declare(grammar: &mut Grammar) -> Self {
                Rules {
                    $($field: grammar.rule($name),)*
                }
            }
        }
    };
}

rules! {
    // lexical
    identifier => "identifier",
    qualified_identifier => "qualifiedIdentifier",
    qualified_identifier_list => "qualifiedIdentifierList",
    literal => "literal",
    integer_literal => "integerLiteral",
    floating_point_literal => "floatingPointLiteral",
    character_literal => "characterLiteral",
    string_literal => "stringLiteral",
    boolean_literal => "booleanLiteral",
    null_literal => "nullLiteral",

    // types
    ty => "type",
    class_or_interface_type => "classOrInterfaceType",
    basic_type => "basicType",
    brackets_opt => "bracketsOpt",
    type_arguments => "typeArguments",
    type_argument => "typeArgument",
    non_wildcard_type_arguments => "nonWildcardTypeArguments",
    type_list => "typeList",
    type_parameters => "typeParameters",
    type_parameter => "typeParameter",
    bound => "bound",

    // expressions
    expression => "expression",
    assignment_operator => "assignmentOperator",
    par_expression => "parExpression",
    constant_expression => "constantExpression",
    statement_expression => "statementExpression",
    expression1 => "expression1",
    expression1_rest => "expression1Rest",
    expression2 => "expression2",
    expression2_rest => "expression2Rest",
    infix_op => "infixOp",
    expression3 => "expression3",
    prefix_op => "prefixOp",
    postfix_op => "postfixOp",
    primary => "primary",
    identifier_suffix => "identifierSuffix",
    explicit_generic_invocation => "explicitGenericInvocation",
    explicit_generic_invocation_suffix => "explicitGenericInvocationSuffix",
    selector => "selector",
    super_suffix => "superSuffix",
    arguments => "arguments",
    argument_list => "argumentList",
    creator => "creator",
    created_name => "createdName",
    inner_creator => "innerCreator",
    array_creator_rest => "arrayCreatorRest",
    class_creator_rest => "classCreatorRest",
    array_initializer => "arrayInitializer",
    variable_initializer => "variableInitializer",

    // blocks and statements
    block => "block",
    block_statements => "blockStatements",
    block_statement => "blockStatement",
    local_variable_declaration_statement => "localVariableDeclarationStatement",
    statement => "statement",
    expression_statement => "expressionStatement",
    catches => "catches",
    catch_clause => "catchClause",
    switch_block_statement_groups => "switchBlockStatementGroups",
    switch_block_statement_group => "switchBlockStatementGroup",
    switch_label => "switchLabel",
    for_control => "forControl",
    for_init => "forInit",
    for_update => "forUpdate",
    more_statement_expressions => "moreStatementExpressions",

    // compilation units and type declarations
    compilation_unit => "compilationUnit",
    package_declaration => "packageDeclaration",
    import_declaration => "importDeclaration",
    type_declaration => "typeDeclaration",
    class_or_interface_declaration => "classOrInterfaceDeclaration",
    modifiers_opt => "modifiersOpt",
    modifier => "modifier",
    class_declaration => "classDeclaration",
    normal_class_declaration => "normalClassDeclaration",
    enum_declaration => "enumDeclaration",
    enum_body => "enumBody",
    enum_constants => "enumConstants",
    enum_constant => "enumConstant",
    enum_body_declarations => "enumBodyDeclarations",
    interface_declaration => "interfaceDeclaration",
    normal_interface_declaration => "normalInterfaceDeclaration",
    annotation_type_declaration => "annotationTypeDeclaration",
    annotation_type_body => "annotationTypeBody",
    annotation_type_element_declarations => "annotationTypeElementDeclarations",
    annotation_type_element_declaration => "annotationTypeElementDeclaration",
    default_value => "defaultValue",

    // class and interface members
    class_body => "classBody",
    class_body_declarations => "classBodyDeclarations",
    class_body_declaration => "classBodyDeclaration",
    interface_body => "interfaceBody",
    interface_body_declaration => "interfaceBodyDeclaration",
    member_decl => "memberDecl",
    method_or_field_decl => "methodOrFieldDecl",
    method_or_field_rest => "methodOrFieldRest",
    generic_method_or_constructor_decl => "genericMethodOrConstructorDecl",
    generic_method_or_constructor_rest => "genericMethodOrConstructorRest",
    method_declarator_rest => "methodDeclaratorRest",
    void_method_declarator_rest => "voidMethodDeclaratorRest",
    constructor_declarator_rest => "constructorDeclaratorRest",
    method_body => "methodBody",
    throws => "throws",
    interface_member_decl => "interfaceMemberDecl",
    interface_method_or_field_decl => "interfaceMethodOrFieldDecl",
    interface_method_or_field_rest => "interfaceMethodOrFieldRest",
    interface_method_declarator_rest => "interfaceMethodDeclaratorRest",
    interface_generic_method_decl => "interfaceGenericMethodDecl",
    void_interface_method_declarator_rest => "voidInterfaceMethodDeclaratorRest",

    // variables and parameters
    constant_declarators_rest => "constantDeclaratorsRest",
    constant_declarator => "constantDeclarator",
    constant_declarator_rest => "constantDeclaratorRest",
    variable_declarators => "variableDeclarators",
    variable_declarators_rest => "variableDeclaratorsRest",
    variable_declarator => "variableDeclarator",
    variable_declarator_rest => "variableDeclaratorRest",
    variable_declarator_id => "variableDeclaratorId",
    formal_parameters => "formalParameters",
    formal_parameter_decls => "formalParameterDecls",
    formal_parameter => "formalParameter",
    variable_modifiers => "variableModifiers",
    variable_modifier => "variableModifier",

    // annotations
    annotations => "annotations",
    annotation => "annotation",
    normal_annotation => "normalAnnotation",
    single_element_annotation => "singleElementAnnotation",
    marker_annotation => "markerAnnotation",
    type_name => "typeName",
    element_value_pairs => "elementValuePairs",
    element_value_pair => "elementValuePair",
    element_value => "elementValue",
    element_value_array_initializer => "elementValueArrayInitializer",
    element_values => "elementValues",
}
