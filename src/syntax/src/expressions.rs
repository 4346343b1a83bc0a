//! Expressions
//!
//! Precedence isn't encoded here, which is fine since we only recognize
//! input, and so the binary operators are all one flat list.
//!
//! # Grammar
//!
//! ```text
//! expression  := expression1 (assignmentOperator expression)?
//! expression1 := expression2 expression1Rest?
//! expression2 := expression3 expression2Rest
//! expression3 := prefixOp expression3
//!              | '(' type ')' expression3
//!              | '(' expression ')' (expression3 | selector* postfixOp*)
//!              | primary selector* postfixOp*
//! ```
//!
//! A parenthesized expression is either a cast or the start of a primary, and
//! both share the one `'(' expression ')'` so nested parentheses are only
//! matched once each. That's also why `primary` has no parenthesized
//! alternative of its own.

use parser::{alt, joined, lit, many, opt, seq, sym, track, Grammar, Parser};

use crate::rules::Rules;

/// `>>` and `>>>` are runs of `>` tokens, see [`crate::lexical`].
fn shift_right() -> Parser {
    seq![sym(">"), joined(">")]
}

fn unsigned_shift_right() -> Parser {
    seq![sym(">"), joined(">"), joined(">")]
}

pub(crate) fn define(g: &mut Grammar, r: &Rules) {
    // Assignment is right associative, so `a = b = c` nests to the right.
    g.define(
        r.expression,
        seq![r.expression1, opt(seq![r.assignment_operator, r.expression])],
    );

    g.define(
        r.assignment_operator,
        alt![
            sym("="),
            sym("+="),
            sym("-="),
            sym("*="),
            sym("/="),
            sym("&="),
            sym("|="),
            sym("^="),
            sym("%="),
            sym("<<="),
            seq![sym(">"), joined(">=")],
            seq![sym(">"), joined(">"), joined(">=")],
        ],
    );

    g.define(r.par_expression, seq![sym("("), r.expression, sym(")")]);
    g.define(r.constant_expression, r.expression);
    g.define(r.statement_expression, r.expression);

    g.define(r.expression1, seq![r.expression2, opt(r.expression1_rest)]);

    // the conditional operator, `? a : b`
    g.define(
        r.expression1_rest,
        seq![sym("?"), r.expression, sym(":"), r.expression1],
    );

    g.define(r.expression2, seq![r.expression3, r.expression2_rest]);

    g.define(
        r.expression2_rest,
        many(alt![
            seq![r.infix_op, r.expression3],
            seq![lit("instanceof"), r.ty],
        ]),
    );

    g.define(
        r.infix_op,
        alt![
            sym("||"),
            sym("&&"),
            sym("|"),
            sym("^"),
            sym("&"),
            sym("=="),
            sym("!="),
            sym("<"),
            sym(">"),
            sym("<="),
            sym(">="),
            sym("<<"),
            shift_right(),
            unsigned_shift_right(),
            sym("+"),
            sym("-"),
            sym("*"),
            sym("/"),
            sym("%"),
        ],
    );

    g.define(
        r.expression3,
        alt![
            seq![r.prefix_op, r.expression3],
            seq![
                sym("("),
                alt![
                    seq![r.ty, sym(")"), r.expression3],
                    seq![
                        r.expression,
                        sym(")"),
                        alt![
                            r.expression3,
                            seq![many(r.selector), many(r.postfix_op)],
                        ],
                    ],
                ],
            ],
            seq![r.primary, many(r.selector), many(r.postfix_op)],
        ],
    );

    g.define(
        r.prefix_op,
        alt![sym("++"), sym("--"), sym("!"), sym("~"), sym("+"), sym("-")],
    );

    g.define(r.postfix_op, alt![sym("++"), sym("--")]);

    g.define(
        r.primary,
        alt![
            seq![
                r.non_wildcard_type_arguments,
                alt![
                    r.explicit_generic_invocation_suffix,
                    seq![lit("this"), r.arguments],
                ],
            ],
            seq![lit("this"), opt(r.arguments)],
            seq![lit("super"), r.super_suffix],
            r.literal,
            track![lit("new"), r.creator],
            seq![
                r.identifier,
                many(seq![sym("."), r.identifier]),
                opt(r.identifier_suffix),
            ],
            seq![r.basic_type, r.brackets_opt, sym("."), lit("class")],
            seq![lit("void"), sym("."), lit("class")],
        ],
    );

    g.define(
        r.identifier_suffix,
        alt![
            seq![
                sym("["),
                alt![
                    seq![sym("]"), r.brackets_opt, sym("."), lit("class")],
                    seq![r.expression, sym("]")],
                ],
            ],
            r.arguments,
            seq![
                sym("."),
                alt![
                    lit("class"),
                    r.explicit_generic_invocation,
                    lit("this"),
                    seq![lit("super"), r.arguments],
                    seq![
                        lit("new"),
                        opt(r.non_wildcard_type_arguments),
                        r.inner_creator,
                    ],
                ],
            ],
        ],
    );

    g.define(
        r.explicit_generic_invocation,
        seq![
            r.non_wildcard_type_arguments,
            r.explicit_generic_invocation_suffix,
        ],
    );

    g.define(
        r.explicit_generic_invocation_suffix,
        alt![
            seq![lit("super"), r.super_suffix],
            seq![r.identifier, r.arguments],
        ],
    );

    g.define(
        r.selector,
        alt![
            seq![sym("."), r.identifier, opt(r.arguments)],
            seq![sym("."), r.explicit_generic_invocation],
            seq![sym("."), lit("this")],
            seq![sym("."), lit("super"), r.super_suffix],
            seq![
                sym("."),
                lit("new"),
                opt(r.non_wildcard_type_arguments),
                r.inner_creator,
            ],
            seq![sym("["), r.expression, sym("]")],
        ],
    );

    g.define(
        r.super_suffix,
        alt![
            r.arguments,
            seq![sym("."), r.identifier, opt(r.arguments)],
        ],
    );

    g.define(r.arguments, seq![sym("("), opt(r.argument_list), sym(")")]);

    g.define(
        r.argument_list,
        seq![r.expression, many(seq![sym(","), r.expression])],
    );

    g.define(
        r.creator,
        alt![
            seq![
                opt(r.non_wildcard_type_arguments),
                r.created_name,
                alt![r.array_creator_rest, r.class_creator_rest],
            ],
            seq![r.basic_type, r.array_creator_rest],
        ],
    );

    g.define(
        r.created_name,
        seq![
            r.identifier,
            opt(r.type_arguments),
            many(seq![sym("."), r.identifier, opt(r.type_arguments)]),
        ],
    );

    g.define(
        r.inner_creator,
        seq![r.identifier, opt(r.type_arguments), r.class_creator_rest],
    );

    g.define(
        r.array_creator_rest,
        seq![
            sym("["),
            alt![
                seq![sym("]"), r.brackets_opt, r.array_initializer],
                seq![
                    r.expression,
                    sym("]"),
                    many(seq![sym("["), r.expression, sym("]")]),
                    r.brackets_opt,
                ],
            ],
        ],
    );

    g.define(r.class_creator_rest, seq![r.arguments, opt(r.class_body)]);

    g.define(
        r.array_initializer,
        track![
            sym("{"),
            opt(seq![
                r.variable_initializer,
                many(seq![sym(","), r.variable_initializer]),
                opt(sym(",")),
            ]),
            sym("}"),
        ],
    );

    g.define(
        r.variable_initializer,
        alt![r.array_initializer, r.expression],
    );
}
