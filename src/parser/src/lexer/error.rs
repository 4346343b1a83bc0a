//! Lexer errors

use diagnostic::Caret;
use thiserror::Error;

/// Lexical errors with all the contextual information needed present it nicely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("special radix literals can't be empty")]
    EmptyRadixLiteral(Caret, u32),

    #[error("character literals can't be empty")]
    EmptyCharacter(Caret),

    #[error("not a valid escape sequence '\\{1}'")]
    InvalidEscape(Caret, char),

    #[error("not a valid floating point literal exponent part")]
    InvalidFloatExponent(Caret),

    #[error("a unicode escape needs four hexadecimal digits")]
    InvalidUnicode(Caret),

    #[error("no token can start with a '{1}'")]
    NotStartOfToken(Caret, char),

    #[error("character literal is missing closing single quote")]
    UnclosedCharacter(Caret),

    #[error("comment is missing its closing '*/'")]
    UnclosedComment(Caret),

    #[error("string literal is missing closing double quote")]
    UnclosedString(Caret),

    #[error("unexpected end of input")]
    UnexpectedEOF(Caret),
}

impl Error {
    /// Where the problem was found.
    pub fn location(&self) -> Caret {
        match self {
            Error::EmptyRadixLiteral(c, _)
            | Error::EmptyCharacter(c)
            | Error::InvalidEscape(c, _)
            | Error::InvalidFloatExponent(c)
            | Error::InvalidUnicode(c)
            | Error::NotStartOfToken(c, _)
            | Error::UnclosedCharacter(c)
            | Error::UnclosedComment(c)
            | Error::UnclosedString(c)
            | Error::UnexpectedEOF(c) => *c,
        }
    }
}
