//! Caret
//!
//! A [`Caret`] is a line and column number in plain text, i.e. where a caret is
//! in the source text. Tokens remember the carets they start and end at, so a
//! parse failure can point back into the file.

use std::fmt;

/// A location in some input stream or document.
///
/// Carets are zero-indexed, and with the cursor before the first character. So
/// `Caret::new(0, 0)` is with the caret at the beginning of the document.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Caret {
    line: u32,
    column: u32,
}

impl Caret {
    /// Create a new [`Caret`], from a line and column number. These are
    /// 0-indexed.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The line the caret in on.
    pub fn line(self) -> u32 {
        self.line
    }

    /// The column of the caret, counted in [`char`]s.
    pub fn column(self) -> u32 {
        self.column
    }

    /// Move the caret over a character. A `\n` starts a new line, which also
    /// covers `\r\n` since it ends in `\n`.
    ///
    /// Columns count unicode code points, the same way most editors report
    /// them.
    pub fn increment(&mut self, c: char) {
        match c {
            '\n' => {
                self.line += 1;
                self.column = 0;
            }
            _ => self.column += 1,
        }
    }

    /// Move the caret over every character in `s`.
    pub fn increment_str(&mut self, s: &str) {
        for c in s.chars() {
            self.increment(c);
        }
    }
}

impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_order() {
        let l = Caret::new(2, 200);
        let r = Caret::new(10, 100);
        assert!(l < r);
    }

    #[test]
    fn caret_newline_resets_column() {
        let mut caret = Caret::default();
        caret.increment_str("ab\nc");
        assert_eq!(caret, Caret::new(1, 1));
    }

    #[test]
    fn caret_unicode() {
        let mut caret = Caret::new(0, 0);
        caret.increment_str("🤦🏼‍♀️");
        assert_eq!(caret.column(), 5);
    }

    #[test]
    fn caret_display_is_one_indexed() {
        assert_eq!(Caret::new(0, 0).to_string(), "1:1");
    }
}
