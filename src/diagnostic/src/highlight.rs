//! A highlight is a reference to a span in the source code with some note about
//! that span.
//!
//! For a parse failure this is the token that was found where something else
//! was expected, and the note is that token's text.

use crate::Span;

#[derive(Debug, Clone)]
pub struct Highlight {
    span: Span,
    note: String,
}

impl Highlight {
    /// Create a new highlighted span of source code.
    pub fn new(span: Span, note: impl Into<String>) -> Highlight {
        Highlight {
            span,
            note: note.into(),
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}
