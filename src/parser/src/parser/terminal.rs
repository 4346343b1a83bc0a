//! Terminals match one token at a time.

use crate::lexer::{Token, TokenKind};
use crate::{Assembly, AssemblySet, Grammar, Value};

/// Which tokens a [`Terminal`] accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalKind {
    /// A word with exactly this text, for keywords.
    Literal(String),
    /// A symbol with exactly this text.
    Symbol(String),
    /// A symbol with exactly this text, starting right where the token
    /// before it ends. This lets `>` `>` stand for `>>` without also
    /// accepting `> >`.
    Joined(String),
    /// Any word.
    Word,
    /// Any word the grammar hasn't reserved.
    Identifier,
    /// Any integer or floating point number.
    Num,
    /// Any token of this kind.
    Kind(TokenKind),
}

/// A parser which matches a single token, pushing it onto the stack unless
/// it's been told to discard it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminal {
    kind: TerminalKind,
    discard: bool,
}

impl Terminal {
    pub fn new(kind: TerminalKind) -> Self {
        Terminal {
            kind,
            discard: false,
        }
    }

    pub fn kind(&self) -> &TerminalKind {
        &self.kind
    }

    /// The same terminal, but the tokens it matches aren't pushed.
    pub fn discard(mut self) -> Self {
        self.discard = true;
        self
    }

    pub fn is_discarded(&self) -> bool {
        self.discard
    }

    /// Does this terminal accept `token`? A [`TerminalKind::Joined`] symbol
    /// also has to touch the token before it, which is checked when matching.
    pub fn accepts(&self, token: &Token, grammar: &Grammar) -> bool {
        match &self.kind {
            TerminalKind::Literal(text) => {
                token.kind() == TokenKind::Word && token.body() == text
            }
            TerminalKind::Symbol(text) | TerminalKind::Joined(text) => {
                token.kind() == TokenKind::Symbol && token.body() == text
            }
            TerminalKind::Word => token.kind() == TokenKind::Word,
            TerminalKind::Identifier => {
                token.kind() == TokenKind::Word
                    && !grammar.is_reserved(token.body())
            }
            TerminalKind::Num => {
                matches!(token.kind(), TokenKind::Int | TokenKind::Float)
            }
            TerminalKind::Kind(kind) => token.kind() == *kind,
        }
    }

    pub(crate) fn match_set<'a>(
        &self,
        input: &AssemblySet<'a>,
        grammar: &Grammar,
    ) -> AssemblySet<'a> {
        input
            .iter()
            .filter_map(|assembly| {
                let (token, next) = assembly.next()?;
                if !self.accepts(&token, grammar)
                    || !self.touches_previous(assembly, &token)
                {
                    None
                } else if self.discard {
                    Some(next)
                } else {
                    Some(next.push(Value::Token(token)))
                }
            })
            .collect()
    }

    fn touches_previous(&self, assembly: &Assembly, token: &Token) -> bool {
        match self.kind {
            TerminalKind::Joined(_) => assembly
                .previous()
                .map_or(false, |p| p.span().end() == token.span().start()),
            _ => true,
        }
    }

    pub fn describe(&self) -> String {
        match &self.kind {
            TerminalKind::Literal(text)
            | TerminalKind::Symbol(text)
            | TerminalKind::Joined(text) => text.clone(),
            TerminalKind::Word => "Word".to_string(),
            TerminalKind::Identifier => "identifier".to_string(),
            TerminalKind::Num => "Num".to_string(),
            TerminalKind::Kind(kind) => kind.name().to_string(),
        }
    }
}
