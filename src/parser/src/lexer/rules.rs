//! The rules of the lexical grammar

use unicode_categories::UnicodeCategories;
use unicode_xid::UnicodeXID;

use crate::lexer::{Comment, Error, Lexer, TokenKind};

impl Lexer<'_, '_> {
    /// This is the main entry point into the lexer internals. It dispatches to
    /// smaller handlers for more complicated token types.
    pub(crate) fn token_kind(&mut self) -> Result<TokenKind, Error> {
        let next = self.peek().ok_or(Error::UnexpectedEOF(self.location))?;

        match next {
            // Comments
            '/' if self.peek_nth(1) == Some('/') => Ok(self.line_comment()),
            '/' if self.peek_nth(1) == Some('*') => self.block_comment(),

            // Strings
            '\'' => self.character(),
            '\"' => self.string(),

            // Numbers and words
            c if c.is_ascii_digit() => self.number(),
            '.' if self.peek_nth(1).map_or(false, |c| c.is_ascii_digit()) => {
                self.number()
            }
            c if is_word_start(c) => Ok(self.word()),

            c => self.symbol(c),
        }
    }

    /// Whitespace is any string of input which is made up of a sequence of
    /// whitespace characters. It's discarded, which is why this doesn't returns
    /// anything.
    ///
    /// ```text
    /// Whitespace := (Unicode's `White_Space`)*
    /// ```
    pub(crate) fn whitespace(&mut self) {
        self.consume_while(char::is_whitespace);
    }

    /// A word is any keyword or identifier. Which is which is up to the
    /// grammar, as different rules reserve different words.
    ///
    /// ```text
    /// word := word_start word_continue*
    /// ```
    fn word(&mut self) -> TokenKind {
        self.advance();
        self.consume_while(is_word_continue);
        TokenKind::Word
    }

    /// Symbols are operators and punctuation. The longest symbol in the table
    /// wins, and anything else which looks like punctuation stands alone.
    fn symbol(&mut self, next: char) -> Result<TokenKind, Error> {
        if let Some(symbol) = self.symbols.longest_prefix(self.remaining_input())
        {
            self.advance_by(symbol.chars().count());
            return Ok(TokenKind::Symbol);
        }

        if next.is_symbol() || next.is_punctuation() {
            self.advance();
            Ok(TokenKind::Symbol)
        } else {
            Err(Error::NotStartOfToken(self.location, next))
        }
    }

    /// A comment to the end of the line.
    ///
    /// ```text
    /// line_comment := `//` followed by characters up to `\n` or the end of input.
    /// ```
    fn line_comment(&mut self) -> TokenKind {
        self.advance_by(2);
        self.consume_while(|c| c != '\n');
        TokenKind::Comment(Comment::Line)
    }

    /// A comment which runs until the first `*/`, possibly over many lines.
    /// Comments which start with `/**` (but aren't `/**/`) are documentation.
    fn block_comment(&mut self) -> Result<TokenKind, Error> {
        let start = self.location;
        self.advance_by(2);

        let kind = if self.peek() == Some('*') && self.peek_nth(1) != Some('/')
        {
            Comment::Doc
        } else {
            Comment::Block
        };

        loop {
            match self.advance() {
                None => return Err(Error::UnclosedComment(start)),
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return Ok(TokenKind::Comment(kind));
                }
                Some(_) => continue,
            }
        }
    }
}

/// Is a character a valid beginning to a word, i.e.
/// [`is_xid_start`][UnicodeXID::is_xid_start], an underscore, or a dollar
/// sign?
pub(crate) fn is_word_start(c: char) -> bool {
    c == '_' || c == '$' || UnicodeXID::is_xid_start(c)
}

/// Is a character valid inside a word, i.e.
/// [`is_xid_continue`][UnicodeXID::is_xid_continue] or a dollar sign?
pub(crate) fn is_word_continue(c: char) -> bool {
    c == '$' || UnicodeXID::is_xid_continue(c)
}
