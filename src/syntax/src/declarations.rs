//! Compilation units, type declarations and their members.
//!
//! # Grammar
//!
//! ```text
//! compilationUnit := packageDeclaration? importDeclaration* typeDeclaration*
//! typeDeclaration := classOrInterfaceDeclaration | ';'
//! classOrInterfaceDeclaration := modifier* (classDeclaration | interfaceDeclaration)
//! ```
//!
//! Package and import declarations, and every class, interface, enum and
//! annotation type, are grouped into nodes named after their rule.

use parser::{alt, lit, many, many1, opt, seq, sym, track, Grammar};

use crate::rules::Rules;

pub(crate) fn define(g: &mut Grammar, r: &Rules) {
    compilation_units(g, r);
    type_declarations(g, r);
    members(g, r);
    variables(g, r);
    annotations(g, r);
}

fn compilation_units(g: &mut Grammar, r: &Rules) {
    g.define(
        r.compilation_unit,
        seq![
            opt(r.package_declaration),
            many(r.import_declaration),
            many(r.type_declaration),
        ],
    );

    g.define_node(
        r.package_declaration,
        seq![
            opt(r.annotations),
            track![lit("package"), r.qualified_identifier, sym(";")],
        ],
    );

    // `.*` is one token, so the `.` in `qualifiedIdentifier` never sees it.
    g.define_node(
        r.import_declaration,
        track![
            lit("import"),
            opt(lit("static")),
            r.qualified_identifier,
            opt(sym(".*")),
            sym(";"),
        ],
    );

    g.define(
        r.type_declaration,
        alt![r.class_or_interface_declaration, sym(";")],
    );
}

fn type_declarations(g: &mut Grammar, r: &Rules) {
    g.define_node(
        r.class_or_interface_declaration,
        seq![
            r.modifiers_opt,
            alt![r.class_declaration, r.interface_declaration],
        ],
    );

    g.define(r.modifiers_opt, many(r.modifier));

    g.define(
        r.modifier,
        alt![
            r.annotation,
            lit("public"),
            lit("protected"),
            lit("private"),
            lit("static"),
            lit("abstract"),
            lit("final"),
            lit("native"),
            lit("synchronized"),
            lit("transient"),
            lit("volatile"),
            lit("strictfp"),
        ],
    );

    g.define(
        r.class_declaration,
        alt![r.normal_class_declaration, r.enum_declaration],
    );

    g.define(
        r.normal_class_declaration,
        track![
            lit("class"),
            r.identifier,
            opt(r.type_parameters),
            opt(track![lit("extends"), r.ty]),
            opt(track![lit("implements"), r.type_list]),
            r.class_body,
        ],
    );

    g.define(
        r.enum_declaration,
        track![
            lit("enum"),
            r.identifier,
            opt(track![lit("implements"), r.type_list]),
            r.enum_body,
        ],
    );

    g.define(
        r.enum_body,
        track![
            sym("{"),
            opt(r.enum_constants),
            opt(sym(",")),
            opt(r.enum_body_declarations),
            sym("}"),
        ],
    );

    g.define(
        r.enum_constants,
        seq![r.enum_constant, many(seq![sym(","), r.enum_constant])],
    );

    g.define(
        r.enum_constant,
        seq![
            opt(r.annotations),
            r.identifier,
            opt(r.arguments),
            opt(r.class_body),
        ],
    );

    g.define(
        r.enum_body_declarations,
        seq![sym(";"), r.class_body_declarations],
    );

    g.define(
        r.interface_declaration,
        alt![r.normal_interface_declaration, r.annotation_type_declaration],
    );

    g.define(
        r.normal_interface_declaration,
        track![
            lit("interface"),
            r.identifier,
            opt(r.type_parameters),
            opt(track![lit("extends"), r.type_list]),
            r.interface_body,
        ],
    );

    // `@` alone could be an annotation, `@interface` can't.
    g.define(
        r.annotation_type_declaration,
        seq![
            sym("@"),
            track![lit("interface"), r.identifier, r.annotation_type_body],
        ],
    );

    g.define(
        r.annotation_type_body,
        track![
            sym("{"),
            r.annotation_type_element_declarations,
            sym("}"),
        ],
    );

    g.define(
        r.annotation_type_element_declarations,
        many(r.annotation_type_element_declaration),
    );

    g.define(
        r.annotation_type_element_declaration,
        alt![
            sym(";"),
            seq![
                r.modifiers_opt,
                alt![
                    seq![
                        r.ty,
                        r.identifier,
                        sym("("),
                        sym(")"),
                        opt(r.default_value),
                        sym(";"),
                    ],
                    seq![r.ty, r.variable_declarators, sym(";")],
                    r.class_declaration,
                    r.interface_declaration,
                ],
            ],
        ],
    );

    g.define(r.default_value, track![lit("default"), r.element_value]);
}

fn members(g: &mut Grammar, r: &Rules) {
    g.define(
        r.class_body,
        track![sym("{"), r.class_body_declarations, sym("}")],
    );

    g.define(r.class_body_declarations, many(r.class_body_declaration));

    g.define(
        r.class_body_declaration,
        alt![
            sym(";"),
            seq![opt(lit("static")), r.block],
            seq![r.modifiers_opt, r.member_decl],
        ],
    );

    g.define(
        r.member_decl,
        alt![
            r.generic_method_or_constructor_decl,
            r.method_or_field_decl,
            seq![lit("void"), r.identifier, r.void_method_declarator_rest],
            seq![r.identifier, r.constructor_declarator_rest],
            r.class_declaration,
            r.interface_declaration,
        ],
    );

    g.define(
        r.method_or_field_decl,
        seq![r.ty, r.identifier, r.method_or_field_rest],
    );

    g.define(
        r.method_or_field_rest,
        alt![r.variable_declarators_rest, r.method_declarator_rest],
    );

    g.define(
        r.generic_method_or_constructor_decl,
        seq![r.type_parameters, r.generic_method_or_constructor_rest],
    );

    g.define(
        r.generic_method_or_constructor_rest,
        alt![
            seq![
                alt![r.ty, lit("void")],
                r.identifier,
                r.method_declarator_rest,
            ],
            seq![r.identifier, r.constructor_declarator_rest],
        ],
    );

    g.define(
        r.method_declarator_rest,
        seq![
            r.formal_parameters,
            r.brackets_opt,
            opt(r.throws),
            alt![r.method_body, sym(";")],
        ],
    );

    g.define(
        r.void_method_declarator_rest,
        seq![
            r.formal_parameters,
            opt(r.throws),
            alt![r.method_body, sym(";")],
        ],
    );

    g.define(
        r.constructor_declarator_rest,
        seq![r.formal_parameters, opt(r.throws), r.method_body],
    );

    g.define(r.method_body, r.block);

    g.define(
        r.throws,
        track![lit("throws"), r.qualified_identifier_list],
    );

    g.define(
        r.interface_body,
        track![sym("{"), many(r.interface_body_declaration), sym("}")],
    );

    g.define(
        r.interface_body_declaration,
        alt![sym(";"), seq![r.modifiers_opt, r.interface_member_decl]],
    );

    g.define(
        r.interface_member_decl,
        alt![
            r.interface_method_or_field_decl,
            r.interface_generic_method_decl,
            seq![
                lit("void"),
                r.identifier,
                r.void_interface_method_declarator_rest,
            ],
            r.class_declaration,
            r.interface_declaration,
        ],
    );

    g.define(
        r.interface_method_or_field_decl,
        seq![r.ty, r.identifier, r.interface_method_or_field_rest],
    );

    g.define(
        r.interface_method_or_field_rest,
        alt![
            r.constant_declarators_rest,
            r.interface_method_declarator_rest,
        ],
    );

    g.define(
        r.interface_method_declarator_rest,
        seq![
            r.formal_parameters,
            r.brackets_opt,
            opt(r.throws),
            sym(";"),
        ],
    );

    g.define(
        r.interface_generic_method_decl,
        seq![
            r.type_parameters,
            alt![r.ty, lit("void")],
            r.identifier,
            r.interface_method_declarator_rest,
        ],
    );

    g.define(
        r.void_interface_method_declarator_rest,
        seq![r.formal_parameters, opt(r.throws), sym(";")],
    );
}

fn variables(g: &mut Grammar, r: &Rules) {
    // The `...DeclaratorsRest` rules run through the closing `;`, so that
    // once an initializer has started, a missing `;` is reported right there.
    g.define(
        r.constant_declarators_rest,
        seq![
            r.brackets_opt,
            track![
                sym("="),
                r.variable_initializer,
                many(seq![sym(","), r.constant_declarator]),
                sym(";"),
            ],
        ],
    );

    g.define(
        r.constant_declarator,
        seq![r.identifier, r.constant_declarator_rest],
    );

    g.define(
        r.constant_declarator_rest,
        seq![r.brackets_opt, sym("="), r.variable_initializer],
    );

    g.define(
        r.variable_declarators,
        seq![r.variable_declarator, many(seq![sym(","), r.variable_declarator])],
    );

    g.define(
        r.variable_declarators_rest,
        seq![
            r.brackets_opt,
            alt![
                track![
                    sym("="),
                    r.variable_initializer,
                    many(seq![sym(","), r.variable_declarator]),
                    sym(";"),
                ],
                seq![many(seq![sym(","), r.variable_declarator]), sym(";")],
            ],
        ],
    );

    g.define(
        r.variable_declarator,
        seq![r.identifier, r.variable_declarator_rest],
    );

    g.define(
        r.variable_declarator_rest,
        seq![
            r.brackets_opt,
            opt(track![sym("="), r.variable_initializer]),
        ],
    );

    g.define(r.variable_declarator_id, seq![r.identifier, r.brackets_opt]);

    g.define(
        r.formal_parameters,
        track![sym("("), opt(r.formal_parameter_decls), sym(")")],
    );

    g.define(
        r.formal_parameter_decls,
        seq![r.formal_parameter, many(seq![sym(","), r.formal_parameter])],
    );

    g.define(
        r.formal_parameter,
        seq![
            r.variable_modifiers,
            r.ty,
            opt(sym("...")),
            r.variable_declarator_id,
        ],
    );

    g.define(r.variable_modifiers, many(r.variable_modifier));
    g.define(r.variable_modifier, alt![lit("final"), r.annotation]);
}

fn annotations(g: &mut Grammar, r: &Rules) {
    g.define(r.annotations, many1(r.annotation));

    g.define(
        r.annotation,
        alt![
            r.normal_annotation,
            r.single_element_annotation,
            r.marker_annotation,
        ],
    );

    g.define(
        r.normal_annotation,
        seq![
            sym("@"),
            r.type_name,
            sym("("),
            opt(r.element_value_pairs),
            sym(")"),
        ],
    );

    g.define(
        r.single_element_annotation,
        seq![sym("@"), r.type_name, sym("("), r.element_value, sym(")")],
    );

    g.define(r.marker_annotation, seq![sym("@"), r.type_name]);
    g.define(r.type_name, r.qualified_identifier);

    g.define(
        r.element_value_pairs,
        seq![r.element_value_pair, many(seq![sym(","), r.element_value_pair])],
    );

    g.define(
        r.element_value_pair,
        seq![r.identifier, sym("="), r.element_value],
    );

    g.define(
        r.element_value,
        alt![
            r.annotation,
            r.expression1,
            r.element_value_array_initializer,
        ],
    );

    g.define(
        r.element_value_array_initializer,
        seq![sym("{"), opt(r.element_values), opt(sym(",")), sym("}")],
    );

    g.define(
        r.element_values,
        seq![r.element_value, many(seq![sym(","), r.element_value])],
    );
}
