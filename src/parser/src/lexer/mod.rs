//! Lexing - converting input into [`Token`]s.
//!
//! Before the combinators can start matching, we sweep over the input and
//! break it apart into meaningful atoms called [`Token`]s. The lexer knows the
//! shape of C-family source text (words, numbers, quoted strings and
//! characters, comments) but not which operators a language has. Those come
//! from a [`SymbolTable`], and the lexer always takes the longest symbol that
//! matches, so `>>>=` is a single token rather than `>` `>>=`.
//!
//! # Notes
//!
//! You may be wondering why Lexer doesn't implement `Iterator`. Using it with
//! `Option<Result<Token, Error>>` items was worse than a `while let` loop like
//! in the example on the struct definition, and [`tokenize`] covers the common
//! case.

mod combinator;
mod error;
mod number;
mod rules;
mod string;
mod symbol;
mod token;

use diagnostic::{Caret, Span};

pub use crate::lexer::{
    error::Error,
    symbol::SymbolTable,
    token::{Comment, Kind as TokenKind, Token},
};

/// A [`Lexer`] scans over the input character by character and breaks things
/// into component meaningful parts ([`Token`]s).
///
/// # Example
///
/// ```
/// # use parser::lexer::{Lexer, SymbolTable};
/// let symbols = SymbolTable::default();
/// let mut lexer = Lexer::new("abc def", &symbols);
/// while let Ok(token) = lexer.token() {
///     // do something with token
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'i, 's> {
    /// The input being consumed, as utf8
    pub(crate) input: &'i str,

    /// The location of the caret, as a line and column
    pub(crate) location: Caret,

    /// The location of the caret, as a byte offset
    pub(crate) offset: usize,

    /// The operators and punctuation the language knows about.
    pub(crate) symbols: &'s SymbolTable,
}

impl<'i, 's> Lexer<'i, 's> {
    /// Create a new lexer over some input.
    pub fn new(input: &'i str, symbols: &'s SymbolTable) -> Self {
        let mut lexer = Lexer {
            input,
            location: Caret::default(),
            offset: 0,
            symbols,
        };

        lexer.whitespace();

        lexer
    }

    /// Has the lexer consumed all of the input?
    ///
    /// # Examples
    ///
    /// ```
    /// # use parser::lexer::{Lexer, SymbolTable};
    /// let symbols = SymbolTable::default();
    /// assert!(Lexer::new("  ", &symbols).is_empty());
    /// assert!(!Lexer::new("non-empty", &symbols).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Produce the token (or [`Error`]), advancing the lexer.
    ///
    /// If the lexer is empty this will return [`Error::UnexpectedEOF`] since
    /// this call _expects_ to produce a token.
    pub fn token(&mut self) -> Result<Token<'i>, Error> {
        if self.is_empty() {
            return Err(Error::UnexpectedEOF(self.location));
        }

        self.whitespace();

        let start_location = self.location;
        let start_offset = self.offset;

        let kind = self.token_kind()?;

        let span = Span::new(start_location, self.location);
        let body = &self.input[start_offset..self.offset];

        self.whitespace();

        Ok(Token { kind, span, body })
    }

    /// The input fed into the lexer that hasn't been broken into tokens yet.
    ///
    /// # Example
    ///
    /// ```
    /// # use parser::lexer::{Lexer, SymbolTable};
    /// let symbols = SymbolTable::default();
    /// let mut lexer = Lexer::new("abc def", &symbols);
    /// let abc = lexer.token();
    /// assert_eq!(lexer.remaining_input(), "def");
    /// ```
    pub fn remaining_input(&self) -> &'i str {
        &self.input[self.offset..]
    }

    /// Where the lexer is in the input.
    pub fn location(&self) -> Caret {
        self.location
    }
}

/// Break all of `input` into tokens, dropping comments.
///
/// # Example
///
/// ```
/// # use parser::lexer::{tokenize, SymbolTable};
/// let symbols = SymbolTable::from_iter([">", ">>", ">>="]);
/// let tokens = tokenize("a >>= 1 // shift", &symbols).unwrap();
/// let bodies: Vec<&str> = tokens.iter().map(|t| t.body()).collect();
/// assert_eq!(bodies, ["a", ">>=", "1"]);
/// ```
pub fn tokenize<'i>(
    input: &'i str,
    symbols: &SymbolTable,
) -> Result<Vec<Token<'i>>, Error> {
    let mut lexer = Lexer::new(input, symbols);
    let mut tokens = Vec::new();

    while !lexer.is_empty() {
        let token = lexer.token()?;
        if !token.is_comment() {
            tokens.push(token);
        }
    }

    Ok(tokens)
}
