//! Java's lexical structure: its symbols, reserved words, identifiers and
//! literals.
//!
//! # Shifts and generics
//!
//! The symbol table leaves out `>>`, `>>>`, `>>=` and `>>>=`. If `>>` were a
//! single token, the closing brackets of `Map<K, List<V>>` couldn't close two
//! type argument lists, so instead the shift operators are matched as runs of
//! `>` tokens by the grammar. Each `>` after the first is a
//! [`joined`][parser::joined] symbol, so `> >` is not a shift.

use parser::lexer::{SymbolTable, TokenKind};
use parser::{alt, kind, lit, many, seq, sym, track, Grammar};

use crate::rules::Rules;

/// Operators and punctuation longer than one character.
const SYMBOLS: &[&str] = &[
    "==", "!=", "<=", ">=", "&&", "||", "++", "--", "<<", "+=", "-=", "*=",
    "/=", "&=", "|=", "^=", "%=", "<<=", "...", ".*",
];

/// Keywords, and the literals which look like words.
pub(crate) const RESERVED: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char",
    "class", "const", "continue", "default", "do", "double", "else", "enum",
    "extends", "final", "finally", "float", "for", "goto", "if", "implements",
    "import", "instanceof", "int", "interface", "long", "native", "new",
    "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

pub(crate) fn symbols() -> SymbolTable {
    SymbolTable::from_iter(SYMBOLS.iter().copied())
}

pub(crate) fn define(g: &mut Grammar, r: &Rules) {
    // identifier := a word which isn't reserved
    g.define(r.identifier, parser::ident());

    // qualifiedIdentifier := identifier ('.' identifier)*
    g.define(
        r.qualified_identifier,
        seq![r.identifier, many(track![sym("."), r.identifier])],
    );

    g.define(
        r.qualified_identifier_list,
        seq![r.qualified_identifier, many(seq![sym(","), r.qualified_identifier])],
    );

    g.define(
        r.literal,
        alt![
            r.integer_literal,
            r.floating_point_literal,
            r.character_literal,
            r.string_literal,
            r.boolean_literal,
            r.null_literal,
        ],
    );

    g.define(r.integer_literal, kind(TokenKind::Int));
    g.define(r.floating_point_literal, kind(TokenKind::Float));
    g.define(r.character_literal, kind(TokenKind::Char));
    g.define(r.string_literal, kind(TokenKind::String));
    g.define(r.boolean_literal, alt![lit("true"), lit("false")]);
    g.define(r.null_literal, lit("null"));
}
