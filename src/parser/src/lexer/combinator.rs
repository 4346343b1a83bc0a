//! The functions in here implement tools used in defining the lexical rules.
//!
//! If these can fail, they return an [`Option`] rather than an
//! [`Error`][crate::lexer::Error]. This is so that the user of these _must_
//! craft the appropriate error rather than passing it up.

use crate::lexer::Lexer;

impl<'i, 's> Lexer<'i, 's> {
    /// Get the _n_th character in the input, starting with zero.
    ///
    /// # Notes
    ///
    /// `peek_nth(0)` is always the same as `peek()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parser::lexer::{Lexer, SymbolTable};
    /// let symbols = SymbolTable::default();
    /// let lexer = Lexer::new("0123abc", &symbols);
    /// assert_eq!(lexer.peek_nth(3), Some('3'));
    /// assert_eq!(lexer.remaining_input(), "0123abc");
    /// ```
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining_input().chars().nth(n)
    }

    /// Get the next character in the input.
    pub fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    /// Advance the lexer by a single character.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parser::lexer::{Lexer, SymbolTable};
    /// let symbols = SymbolTable::default();
    /// let mut lexer = Lexer::new("123abc", &symbols);
    /// assert_eq!(lexer.advance(), Some('1'));
    /// assert_eq!(lexer.remaining_input(), "23abc");
    /// ```
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        self.location.increment(c);
        self.offset += c.len_utf8();

        Some(c)
    }

    /// Advance over the next `n` characters, stopping early at the end of the
    /// input.
    pub(crate) fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            if self.advance().is_none() {
                break;
            }
        }
    }

    /// Consume a specific expected character in the input.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parser::lexer::{Lexer, SymbolTable};
    /// let symbols = SymbolTable::default();
    /// let mut lexer = Lexer::new("123abc", &symbols);
    /// assert_eq!(lexer.char('1'), Some('1'));
    /// assert!(lexer.char('b').is_none());
    /// ```
    pub fn char(&mut self, expected: char) -> Option<char> {
        match self.peek() {
            Some(found) if expected == found => self.advance(),
            _ => None,
        }
    }

    /// Consume characters in the input while they match a predicate. Might
    /// return an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parser::lexer::{Lexer, SymbolTable};
    /// let symbols = SymbolTable::default();
    /// let mut lexer = Lexer::new("aababbcab", &symbols);
    /// let consumed = lexer.consume_while(|c| c == 'a' || c == 'b');
    /// assert_eq!(consumed, "aababb");
    /// assert_eq!(lexer.remaining_input(), "cab");
    /// ```
    pub fn consume_while<F>(&mut self, predicate: F) -> &'i str
    where
        F: Fn(char) -> bool,
    {
        let start = self.offset;

        while let Some(c) = self.peek() {
            if predicate(c) {
                self.advance();
            } else {
                break;
            }
        }

        &self.input[start..self.offset]
    }

    /// Consume the next character of input, if it's in the string `cs`.
    pub fn one_of(&mut self, cs: &'static str) -> Option<char> {
        let c = self.peek()?;

        if cs.contains(c) {
            self.advance()
        } else {
            None
        }
    }
}
