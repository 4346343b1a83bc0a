//! String and character literal lexing.
//!
//! The escapes supported are the C-family ones:
//!
//! - `\b`, `\t`, `\n`, `\f`, `\r`
//! - `\"`, `\'` and `\\`
//! - octal escapes like `\0` or `\377`
//! - unicode escapes like `\u0041`, with any number of `u`s
//!
//! Neither kind of literal may contain a raw line break.

use crate::lexer::{Error, Lexer, TokenKind};

impl Lexer<'_, '_> {
    /// A string literal, like `"hello\n"`.
    pub(crate) fn string(&mut self) -> Result<TokenKind, Error> {
        let start = self.location;
        self.advance();

        loop {
            match self.peek() {
                None | Some('\n') => return Err(Error::UnclosedString(start)),
                Some('\\') => {
                    self.advance();
                    self.escape_sequence()?
                }
                Some('"') => break,
                Some(_) => {
                    self.advance();
                }
            }
        }

        self.advance();
        Ok(TokenKind::String)
    }

    /// A character literal, like `'a'` or `'\u0041'`.
    pub(crate) fn character(&mut self) -> Result<TokenKind, Error> {
        let start = self.location;
        self.advance();

        match self.peek() {
            None | Some('\n') => return Err(Error::UnclosedCharacter(start)),
            Some('\'') => return Err(Error::EmptyCharacter(start)),
            Some('\\') => {
                self.advance();
                self.escape_sequence()?
            }
            Some(_) => {
                self.advance();
            }
        };

        self.char('\'')
            .ok_or(Error::UnclosedCharacter(start))?;
        Ok(TokenKind::Char)
    }

    /// The part of an escape after the `\`.
    fn escape_sequence(&mut self) -> Result<(), Error> {
        match self.peek() {
            None => Err(Error::UnexpectedEOF(self.location)),
            Some('b' | 't' | 'n' | 'f' | 'r' | '\\' | '\'' | '\"') => {
                self.advance();
                Ok(())
            }
            Some('0'..='7') => {
                // At most three digits, and at most `\377`.
                let first = self.advance();
                let limit = if matches!(first, Some('0'..='3')) { 2 } else { 1 };
                for _ in 0..limit {
                    if self.one_of("01234567").is_none() {
                        break;
                    }
                }
                Ok(())
            }
            Some('u') => {
                let location = self.location;
                self.consume_while(|c| c == 'u');
                for _ in 0..4 {
                    match self.peek() {
                        Some(c) if c.is_ascii_hexdigit() => {
                            self.advance();
                        }
                        _ => return Err(Error::InvalidUnicode(location)),
                    }
                }
                Ok(())
            }
            Some(c) => Err(Error::InvalidEscape(self.location, c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Error, Lexer, SymbolTable, TokenKind};

    fn lex(input: &str) -> Result<(TokenKind, String), Error> {
        let symbols = SymbolTable::default();
        let mut lexer = Lexer::new(input, &symbols);
        lexer.token().map(|t| (t.kind(), t.body().to_string()))
    }

    #[test]
    fn character() {
        assert_eq!(lex("'a'"), Ok((TokenKind::Char, "'a'".into())));
        assert_eq!(lex("'\\n'"), Ok((TokenKind::Char, "'\\n'".into())));
        assert_eq!(lex("'\"'"), Ok((TokenKind::Char, "'\"'".into())));
        assert_eq!(lex("'\\u0041'").unwrap().0, TokenKind::Char);
        assert_eq!(lex("'\\377'").unwrap().0, TokenKind::Char);
    }

    #[test]
    fn character_errors() {
        assert!(matches!(lex("''"), Err(Error::EmptyCharacter(_))));
        assert!(matches!(lex("'ab'"), Err(Error::UnclosedCharacter(_))));
        assert!(matches!(lex("'\\s'"), Err(Error::InvalidEscape(_, 's'))));
        assert!(matches!(lex("'\\u00'"), Err(Error::InvalidUnicode(_))));
    }

    #[test]
    fn string() {
        assert_eq!(
            lex(r#" "test '\"' " "#),
            Ok((TokenKind::String, r#""test '\"' ""#.into()))
        );
        assert_eq!(lex(r#""\0\t\uuu00e9""#).unwrap().0, TokenKind::String);
    }

    #[test]
    fn string_errors() {
        assert!(matches!(lex("\"abc"), Err(Error::UnclosedString(_))));
        assert!(matches!(lex("\"a\nb\""), Err(Error::UnclosedString(_))));
        assert!(matches!(lex(r#""\x""#), Err(Error::InvalidEscape(_, 'x'))));
    }
}
