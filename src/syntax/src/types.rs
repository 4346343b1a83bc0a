//! Types, type arguments and type parameters.
//!
//! # Grammar
//!
//! ```text
//! type                 := (classOrInterfaceType | basicType) bracketsOpt
//! classOrInterfaceType := identifier typeArguments? ('.' identifier typeArguments?)*
//! typeArguments        := '<' typeArgument (',' typeArgument)* '>'
//! typeArgument         := type | '?' (('extends' | 'super') type)?
//! typeParameters       := '<' typeParameter (',' typeParameter)* '>'
//! typeParameter        := identifier ('extends' bound)?
//! bound                := type ('&' type)*
//! ```

use parser::{alt, lit, many, opt, seq, sym, track, Grammar};

use crate::rules::Rules;

pub(crate) fn define(g: &mut Grammar, r: &Rules) {
    g.define(
        r.ty,
        seq![alt![r.class_or_interface_type, r.basic_type], r.brackets_opt],
    );

    g.define(
        r.class_or_interface_type,
        seq![
            r.identifier,
            opt(r.type_arguments),
            many(seq![sym("."), r.identifier, opt(r.type_arguments)]),
        ],
    );

    g.define(
        r.basic_type,
        alt![
            lit("byte"),
            lit("short"),
            lit("char"),
            lit("int"),
            lit("long"),
            lit("float"),
            lit("double"),
            lit("boolean"),
        ],
    );

    g.define(r.brackets_opt, many(seq![sym("["), sym("]")]));

    g.define(
        r.type_arguments,
        seq![
            sym("<"),
            r.type_argument,
            many(seq![sym(","), r.type_argument]),
            sym(">"),
        ],
    );

    g.define(
        r.type_argument,
        alt![
            r.ty,
            seq![sym("?"), opt(seq![alt![lit("extends"), lit("super")], r.ty])],
        ],
    );

    g.define(
        r.non_wildcard_type_arguments,
        seq![sym("<"), r.type_list, sym(">")],
    );

    g.define(r.type_list, seq![r.ty, many(seq![sym(","), r.ty])]);

    // Type parameters only appear where a declaration is certain.
    g.define(
        r.type_parameters,
        track![
            sym("<"),
            r.type_parameter,
            many(seq![sym(","), r.type_parameter]),
            sym(">"),
        ],
    );

    g.define(
        r.type_parameter,
        seq![r.identifier, opt(seq![lit("extends"), r.bound])],
    );

    g.define(r.bound, seq![r.ty, many(seq![sym("&"), r.ty])]);
}
