//! Errors raised while matching.
//!
//! Failing to match isn't an error, it's just an empty set of assemblies.
//! These are for the cases where matching has to stop: a track was entered
//! and couldn't be finished, the input couldn't be matched as a whole, the
//! grammar is broken, or matching ran out of room.

use diagnostic::Span;
use thiserror::Error;

use crate::lexer;

/// Everything that can go wrong while recognizing input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Part of a track matched, and then the rest didn't.
    #[error(transparent)]
    Track(#[from] TrackError),

    /// The input didn't match the rule as a whole.
    #[error("input is not a {rule}\nAfter   : {after}\nFound   : {found}")]
    NoMatch {
        rule: String,
        after: String,
        found: String,
        span: Span,
    },

    /// Matching went through too many rules without consuming input, which
    /// is usually left recursion.
    #[error("rule nesting exceeded {limit} entering {rule}")]
    DepthExceeded { rule: String, limit: usize },

    /// Matching took too many steps.
    #[error("gave up after {limit} steps")]
    BudgetExhausted { limit: usize },

    #[error("rule {0} is used but never defined")]
    UndefinedRule(String),

    #[error("rule {0} is defined more than once")]
    RedefinedRule(String),

    #[error(transparent)]
    Lexer(#[from] lexer::Error),
}

impl Error {
    /// Where in the input the error is, if it's anywhere in particular.
    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Track(e) => Some(e.span),
            Error::NoMatch { span, .. } => Some(*span),
            Error::Lexer(e) => Some(Span::point(e.location())),
            _ => None,
        }
    }
}

/// A track was started but not finished.
///
/// Once a [`TrackSequence`][crate::parser::TrackSequence] has matched
/// something, the rest of it must match too, and if it doesn't the input is
/// wrong right there. This says where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("After   : {after}\nExpected: {expected}\nFound   : {found}")]
pub struct TrackError {
    after: String,
    expected: String,
    found: String,
    span: Span,
}

impl TrackError {
    pub fn new(
        after: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: Span,
    ) -> Self {
        TrackError {
            after: after.into(),
            expected: expected.into(),
            found: found.into(),
            span,
        }
    }

    /// The tokens matched before things went wrong, or `-nothing-`.
    pub fn after(&self) -> &str {
        &self.after
    }

    /// What the track needed next.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The token that was there instead, or `-nothing-`.
    pub fn found(&self) -> &str {
        &self.found
    }

    /// Where the found token is, or the end of input.
    pub fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_error_layout() {
        let e = TrackError::new("foo .", "identifier", "-nothing-", Span::default());
        assert_eq!(
            e.to_string(),
            "After   : foo .\nExpected: identifier\nFound   : -nothing-"
        );

        let e = Error::from(e);
        assert!(e.to_string().starts_with("After   : foo ."));
        assert_eq!(e.span(), Some(Span::default()));
    }
}
