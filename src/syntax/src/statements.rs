//! Blocks and statements
//!
//! Most statements start with a keyword, and once we've seen it we know what
//! the rest must be. Those are tracks, so a mistake inside one is reported
//! where it happens, rather than as the whole statement not matching.
//!
//! # Grammar
//!
//! ```text
//! block          := '{' blockStatement* '}'
//! blockStatement := localVariableDeclarationStatement
//!                 | classOrInterfaceDeclaration
//!                 | statement
//! ```

use parser::{alt, lit, many, many1, opt, seq, sym, track, Grammar};

use crate::rules::Rules;

pub(crate) fn define(g: &mut Grammar, r: &Rules) {
    g.define(r.block, track![sym("{"), r.block_statements, sym("}")]);
    g.define(r.block_statements, many(r.block_statement));

    g.define(
        r.block_statement,
        alt![
            r.local_variable_declaration_statement,
            r.class_or_interface_declaration,
            r.statement,
        ],
    );

    g.define(
        r.local_variable_declaration_statement,
        seq![
            r.variable_modifiers,
            r.ty,
            r.identifier,
            r.variable_declarators_rest,
        ],
    );

    g.define(
        r.statement,
        alt![
            r.block,
            track![
                lit("assert"),
                r.expression,
                opt(seq![sym(":"), r.expression]),
                sym(";"),
            ],
            track![
                lit("if"),
                r.par_expression,
                r.statement,
                opt(track![lit("else"), r.statement]),
            ],
            track![lit("for"), sym("("), r.for_control, sym(")"), r.statement],
            track![lit("while"), r.par_expression, r.statement],
            track![
                lit("do"),
                r.statement,
                lit("while"),
                r.par_expression,
                sym(";"),
            ],
            track![
                lit("try"),
                r.block,
                alt![
                    seq![r.catches, opt(track![lit("finally"), r.block])],
                    track![lit("finally"), r.block],
                ],
            ],
            track![
                lit("switch"),
                r.par_expression,
                sym("{"),
                r.switch_block_statement_groups,
                sym("}"),
            ],
            track![lit("synchronized"), r.par_expression, r.block],
            track![lit("return"), opt(r.expression), sym(";")],
            track![lit("throw"), r.expression, sym(";")],
            track![lit("break"), opt(r.identifier), sym(";")],
            track![lit("continue"), opt(r.identifier), sym(";")],
            sym(";"),
            r.expression_statement,
            seq![r.identifier, sym(":"), r.statement],
        ],
    );

    g.define(
        r.expression_statement,
        seq![r.statement_expression, sym(";")],
    );

    g.define(r.catches, many1(r.catch_clause));

    g.define(
        r.catch_clause,
        track![
            lit("catch"),
            sym("("),
            r.formal_parameter,
            sym(")"),
            r.block,
        ],
    );

    g.define(
        r.switch_block_statement_groups,
        many(r.switch_block_statement_group),
    );

    g.define(
        r.switch_block_statement_group,
        seq![many1(r.switch_label), r.block_statements],
    );

    g.define(
        r.switch_label,
        alt![
            track![lit("case"), r.constant_expression, sym(":")],
            track![lit("default"), sym(":")],
        ],
    );

    // The enhanced `for (T x : xs)` comes first.
    g.define(
        r.for_control,
        alt![
            seq![
                r.variable_modifiers,
                r.ty,
                r.identifier,
                sym(":"),
                r.expression,
            ],
            seq![
                opt(r.for_init),
                sym(";"),
                opt(r.expression),
                sym(";"),
                opt(r.for_update),
            ],
        ],
    );

    g.define(
        r.for_init,
        alt![
            seq![r.variable_modifiers, r.ty, r.variable_declarators],
            seq![r.statement_expression, r.more_statement_expressions],
        ],
    );

    g.define(
        r.for_update,
        seq![r.statement_expression, r.more_statement_expressions],
    );

    g.define(
        r.more_statement_expressions,
        many(seq![sym(","), r.statement_expression]),
    );
}
