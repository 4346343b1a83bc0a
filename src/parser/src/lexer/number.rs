//! Numeric literals lexing.
//!
//! These follow the C-family conventions Java uses:
//!
//! 1. Decimal integers, with octal ones like `017` lexed the same way.
//! 2. Hexadecimal `0x` and binary `0b` integers.
//! 3. Floating point literals with a fraction, an exponent or both, including
//!    forms like `1.`, `.5` and `1e10`.
//! 4. Suffixes: `l`/`L` for integers, `f`/`F`/`d`/`D` for floats. A float
//!    suffix turns an integer into a float, so `1f` is a float.
//!
//! Digits after the first may include underscores, so `10_000` is allowed. We
//! don't check where they go.
//!
//! The actual value isn't interpreted at this stage, recognizing the input is
//! all that's needed.

use crate::lexer::rules::{is_word_continue, is_word_start};
use crate::lexer::{Error, Lexer, TokenKind};

fn is_exponent_start(c: char) -> bool {
    c.is_ascii_digit() || c == '+' || c == '-'
}

impl Lexer<'_, '_> {
    /// The entry point for numeric literals.
    pub(crate) fn number(&mut self) -> Result<TokenKind, Error> {
        if self.peek() == Some('0') {
            match self.peek_nth(1) {
                Some('x' | 'X') => return self.hexadecimal(),
                Some('b' | 'B') => return self.radix_literal(2),
                _ => {}
            }
        }

        self.decimal()
    }

    /// Consume a decimal number, which is either an integer or a floating
    /// point number.
    ///
    /// ```text
    /// decimal := digits ('.' digits?)? exponent? suffix?
    ///          | '.' digits exponent? suffix?
    /// ```
    fn decimal(&mut self) -> Result<TokenKind, Error> {
        let mut float = false;

        if self.peek() != Some('.') {
            self.consume_digits(10);
        }

        if self.peek() == Some('.') && self.is_fraction_dot() {
            self.advance();
            self.consume_digits(10);
            float = true;
        }

        if self.one_of("eE").is_some() {
            self.exponent()?;
            float = true;
        }

        if self.one_of("fFdD").is_some() {
            float = true;
        } else if !float {
            self.one_of("lL");
        }

        Ok(if float {
            TokenKind::Float
        } else {
            TokenKind::Int
        })
    }

    /// Is the `.` at the caret part of a number? It isn't when it starts a
    /// member access like `1.toString` or a `...`.
    fn is_fraction_dot(&self) -> bool {
        match self.peek_nth(1) {
            Some(c) if c.is_ascii_digit() => true,
            Some(c @ ('e' | 'E' | 'f' | 'F' | 'd' | 'D')) => {
                match self.peek_nth(2) {
                    None => true,
                    Some(a) if matches!(c, 'e' | 'E') && is_exponent_start(a) => {
                        true
                    }
                    Some(a) => !is_word_continue(a),
                }
            }
            Some('.') => false,
            Some(c) => !is_word_start(c),
            None => true,
        }
    }

    /// The digits of an exponent, after the `e` or `p`.
    fn exponent(&mut self) -> Result<(), Error> {
        self.one_of("+-");
        let location = self.location;
        self.consume_digits(10)
            .map(|_| ())
            .ok_or(Error::InvalidFloatExponent(location))
    }

    /// Hexadecimal integers, and the rarely seen hexadecimal floats like
    /// `0x1.8p1`.
    fn hexadecimal(&mut self) -> Result<TokenKind, Error> {
        self.advance_by(2);

        let whole = self.consume_digits(16).is_some();
        let mut fraction = false;

        if self.char('.').is_some() {
            fraction = self.consume_digits(16).is_some();
        }

        if !whole && !fraction {
            return Err(Error::EmptyRadixLiteral(self.location, 16));
        }

        if self.one_of("pP").is_some() {
            self.exponent()?;
            self.one_of("fFdD");
            Ok(TokenKind::Float)
        } else if fraction {
            Err(Error::InvalidFloatExponent(self.location))
        } else {
            self.one_of("lL");
            Ok(TokenKind::Int)
        }
    }

    /// Consume a radix literal with a two character prefix, like binary.
    ///
    /// ```text
    /// radix_literal := "0" letter digit(radix) digit_or_underscore(radix)* suffix?
    /// ```
    fn radix_literal(&mut self, radix: u32) -> Result<TokenKind, Error> {
        self.advance_by(2);

        match self.consume_digits(radix) {
            Some(_) => {
                self.one_of("lL");
                Ok(TokenKind::Int)
            }
            None => Err(Error::EmptyRadixLiteral(self.location, radix)),
        }
    }

    /// Consumes one or digits in a specified radix, which must be less than or
    /// equal to 36 for [`char::is_digit`] to function.
    ///
    /// Underscores are allowed after the first digit.
    fn consume_digits(&mut self, radix: u32) -> Option<&str> {
        if !self.peek()?.is_digit(radix) {
            return None;
        }

        Some(self.consume_while(|c| c.is_digit(radix) || c == '_'))
    }
}
