//! A set-based parser combinator engine and a lexer.
//!
//! [`Parser`] doesn't parse a specific language. Grammars are built out of
//! terminals, sequences, alternations and repetitions, collected into named
//! rules in a [`Grammar`]. Rather than committing to one way of matching at a
//! time, every parser maps a *set* of [`Assembly`]s to the set of every
//! assembly it could lead to, so ambiguity and backtracking come for free.
//!
//! The catch with matching every way at once is that a failure has no single
//! place to point to. [`TrackSequence`][parser::TrackSequence]s fix that:
//! once the start of one matches, the rest must too, and if it doesn't a
//! [`TrackError`] says what was expected right where it went wrong.
//!
//! The whole input is scanned up front with [`Lexer`][crate::lexer::Lexer].
//!
//! Matching is bounded by [`Limits`] on rule nesting and total work, so a
//! left recursive rule fails with [`Error::DepthExceeded`] instead of
//! blowing the stack.

pub mod assembly;
pub mod combinator;
pub mod context;
pub mod error;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod set;
pub mod trace;

pub use crate::{
    assembly::{Assembly, Node, Value},
    combinator::{
        alt, capture, empty, ident, joined, kind, lit, many, many1, num, opt,
        seq, sym, track, word,
    },
    context::{Limits, MatchContext, MatchOptions},
    error::{Error, TrackError},
    grammar::{Grammar, RuleId},
    parser::Parser,
    set::AssemblySet,
    trace::{LogTracer, Tracer, TreeTracer},
};
