//! Functions and macros for writing grammars without spelling out every
//! [`Parser`] variant.
//!
//! ```
//! # use parser::{alt, opt, seq, track, ident, lit, sym, Parser};
//! // 'return' expression? ';'
//! let ret: Parser = track![lit("return"), opt(ident()), sym(";")];
//! // identifier ('.' identifier)*
//! let name = seq![ident(), parser::many(seq![sym("."), ident()])];
//! let either = alt![ret, name];
//! ```

use crate::lexer::TokenKind;
use crate::parser::{
    Alternation, Capture, Repetition, Sequence, Terminal, TerminalKind,
    TrackSequence,
};
use crate::Parser;

/// Matches without consuming anything.
pub fn empty() -> Parser {
    Parser::Empty
}

/// A keyword, i.e. a word with exactly this text.
pub fn lit(text: &str) -> Parser {
    terminal(TerminalKind::Literal(text.to_string()))
}

/// An operator or punctuation symbol with exactly this text.
pub fn sym(text: &str) -> Parser {
    terminal(TerminalKind::Symbol(text.to_string()))
}

/// A symbol which has to start right where the token before it ends, with
/// no space or comment between them.
pub fn joined(text: &str) -> Parser {
    terminal(TerminalKind::Joined(text.to_string()))
}

/// Any word at all.
pub fn word() -> Parser {
    terminal(TerminalKind::Word)
}

/// Any word that isn't reserved.
pub fn ident() -> Parser {
    terminal(TerminalKind::Identifier)
}

/// Any number.
pub fn num() -> Parser {
    terminal(TerminalKind::Num)
}

/// Any token of a particular kind.
pub fn kind(kind: TokenKind) -> Parser {
    terminal(TerminalKind::Kind(kind))
}

fn terminal(kind: TerminalKind) -> Parser {
    Parser::Terminal(Terminal::new(kind))
}

pub fn seq(parsers: Vec<Parser>) -> Parser {
    Parser::Sequence(Sequence::new(parsers))
}

pub fn track(parsers: Vec<Parser>) -> Parser {
    Parser::Track(TrackSequence::new(parsers))
}

pub fn alt(parsers: Vec<Parser>) -> Parser {
    Parser::Alternation(Alternation::new(parsers))
}

/// Zero or more.
pub fn many(parser: impl Into<Parser>) -> Parser {
    Parser::Repetition(Repetition::new(parser.into()))
}

/// One or more.
pub fn many1(parser: impl Into<Parser>) -> Parser {
    Parser::Repetition(Repetition::at_least_once(parser.into()))
}

/// Zero or one.
pub fn opt(parser: impl Into<Parser>) -> Parser {
    alt(vec![empty(), parser.into()])
}

/// Group what `parser` pushes into a node called `name`.
pub fn capture(name: &str, parser: impl Into<Parser>) -> Parser {
    Parser::Capture(Capture::new(name, parser.into()))
}

/// A [`Sequence`][crate::parser::Sequence] of anything that converts into a
/// [`Parser`][crate::Parser].
#[macro_export]
macro_rules! seq {
    ($($p:expr),* $(,)?) => {
        $crate::seq(vec![$($crate::Parser::from($p)),*])
    };
}

/// A [`TrackSequence`][crate::parser::TrackSequence] of anything that
/// converts into a [`Parser`][crate::Parser].
#[macro_export]
macro_rules! track {
    ($($p:expr),* $(,)?) => {
        $crate::track(vec![$($crate::Parser::from($p)),*])
    };
}

/// An [`Alternation`][crate::parser::Alternation] of anything that converts
/// into a [`Parser`][crate::Parser].
#[macro_export]
macro_rules! alt {
    ($($p:expr),* $(,)?) => {
        $crate::alt(vec![$($crate::Parser::from($p)),*])
    };
}
