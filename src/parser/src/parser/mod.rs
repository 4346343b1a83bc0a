//! Parsers - the things which match sets of assemblies.
//!
//! A [`Parser`] takes a set of assemblies and returns the set of assemblies
//! it could get to by matching from each of them. An empty result means no
//! match, which isn't an error. Errors are for when matching has to stop
//! altogether, see [`Error`].
//!
//! The kinds of parsers are fixed, so [`Parser`] is an enum and matching is a
//! `match` over it. Grammars refer to their rules by [`RuleId`] instead of
//! holding them directly, which is how rules get to be recursive.

mod alternation;
mod capture;
mod repetition;
mod sequence;
mod terminal;
mod track;

pub use crate::parser::{
    alternation::Alternation,
    capture::Capture,
    repetition::Repetition,
    sequence::Sequence,
    terminal::{Terminal, TerminalKind},
    track::TrackSequence,
};

use crate::{AssemblySet, Error, Grammar, MatchContext, MatchOptions, RuleId};

/// Something which matches sets of assemblies.
#[derive(Debug, Clone, PartialEq)]
pub enum Parser {
    /// Matches without consuming anything.
    Empty,
    /// Matches a single token.
    Terminal(Terminal),
    /// Matches each parser in turn.
    Sequence(Sequence),
    /// Like a sequence, but once started it must finish.
    Track(TrackSequence),
    /// Matches any of the parsers.
    Alternation(Alternation),
    /// Matches a parser over and over.
    Repetition(Repetition),
    /// Matches a parser and groups what it pushed into a node.
    Capture(Capture),
    /// Matches a rule of the grammar.
    Rule(RuleId),
}

impl Parser {
    /// Match every assembly in `input`, returning every assembly that can
    /// result.
    ///
    /// The input is never changed.
    pub fn match_set<'a>(
        &self,
        input: &AssemblySet<'a>,
        cx: &mut MatchContext<'_, '_>,
    ) -> Result<AssemblySet<'a>, Error> {
        if input.is_empty() {
            return Ok(AssemblySet::new());
        }

        cx.step()?;

        match self {
            Parser::Empty => Ok(input.clone()),
            Parser::Terminal(t) => Ok(t.match_set(input, cx.grammar())),
            Parser::Sequence(s) => s.match_set(input, cx),
            Parser::Track(t) => t.match_set(input, cx),
            Parser::Alternation(a) => a.match_set(input, cx),
            Parser::Repetition(r) => r.match_set(input, cx),
            Parser::Capture(c) => c.match_set(input, cx),
            Parser::Rule(id) => cx.descend(*id, input),
        }
    }

    /// Match without a grammar, so there are no rules and no reserved words.
    ///
    /// ```
    /// # use parser::{Assembly, AssemblySet, lit, sym, seq, lexer::{tokenize, SymbolTable}};
    /// let symbols = SymbolTable::default();
    /// let input = AssemblySet::singleton(Assembly::new(tokenize("return ;", &symbols)?));
    ///
    /// let result = seq![lit("return"), sym(";")].apply(&input)?;
    /// assert!(result.best().unwrap().is_done());
    /// # Ok::<(), parser::Error>(())
    /// ```
    pub fn apply<'a>(
        &self,
        input: &AssemblySet<'a>,
    ) -> Result<AssemblySet<'a>, Error> {
        let grammar = Grammar::new();
        let mut cx = MatchContext::new(&grammar, MatchOptions::default());
        self.match_set(input, &mut cx)
    }

    /// A short description of what this parser matches, used to say what was
    /// expected when a track fails.
    pub fn describe(&self, grammar: &Grammar) -> String {
        match self {
            Parser::Empty => "empty".to_string(),
            Parser::Terminal(t) => t.describe(),
            Parser::Sequence(s) => format!("<{}>", list(s.parsers(), grammar)),
            Parser::Track(t) => format!("<{}>", list(t.parsers(), grammar)),
            Parser::Alternation(a) => {
                format!("[{}]", list(a.parsers(), grammar))
            }
            Parser::Repetition(r) => {
                let suffix = if r.at_least_one() { '+' } else { '*' };
                format!("{}{}", r.parser().describe(grammar), suffix)
            }
            Parser::Capture(c) => c.name().to_string(),
            Parser::Rule(id) => grammar.name(*id).to_string(),
        }
    }

    /// Stop a terminal from pushing the tokens it matches. Other kinds of
    /// parser are returned as they are.
    pub fn discard(self) -> Self {
        match self {
            Parser::Terminal(t) => Parser::Terminal(t.discard()),
            other => other,
        }
    }
}

impl From<RuleId> for Parser {
    fn from(id: RuleId) -> Self {
        Parser::Rule(id)
    }
}

impl From<Terminal> for Parser {
    fn from(terminal: Terminal) -> Self {
        Parser::Terminal(terminal)
    }
}

fn list(parsers: &[Parser], grammar: &Grammar) -> String {
    parsers
        .iter()
        .map(|p| p.describe(grammar))
        .collect::<Vec<_>>()
        .join(", ")
}
