//! Recognition errors, and how they're shown to people.

use diagnostic::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong recognizing Java.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("there's no rule named {0}")]
    UnknownRule(String),

    #[error(transparent)]
    Parse(#[from] parser::Error),
}

impl From<parser::lexer::Error> for Error {
    fn from(e: parser::lexer::Error) -> Self {
        Error::Parse(e.into())
    }
}

impl Error {
    /// The track error, if this is one.
    pub fn as_track(&self) -> Option<&parser::TrackError> {
        match self {
            Error::Parse(parser::Error::Track(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<Error> for Diagnostic {
    fn from(e: Error) -> Diagnostic {
        use parser::Error as P;

        match e {
            Error::Parse(P::Track(track)) => {
                Diagnostic::new(format!("{} expected", track.expected()))
                    .location(track.span().start())
                    .note(format!("after: {}", track.after()))
                    .highlight(track.span(), track.found())
            }

            Error::Parse(P::NoMatch {
                rule,
                after,
                found,
                span,
            }) => Diagnostic::new(format!("input is not a {rule}"))
                .location(span.start())
                .note(format!("after: {after}"))
                .highlight(span, found),

            Error::Parse(P::Lexer(lexical)) => {
                let location = lexical.location();
                Diagnostic::new(lexical.to_string())
                    .location(location)
                    .highlight(diagnostic::Span::point(location), "here")
            }

            other => Diagnostic::new(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use diagnostic::{Caret, Span};
    use parser::TrackError;

    use super::*;

    #[test]
    fn track_error_diagnostic() {
        let span = Span::new(Caret::new(0, 5), Caret::new(0, 6));
        let e = Error::from(parser::Error::from(TrackError::new(
            "{ int x =",
            "variableInitializer",
            ";",
            span,
        )));
        assert!(e.as_track().is_some());

        let d = Diagnostic::from(e);
        assert_eq!(d.get_text(), "variableInitializer expected");
        assert_eq!(d.get_location(), Some(span.start()));
        assert_eq!(d.get_notes(), ["after: { int x =".to_string()]);
        assert_eq!(d.get_highlights().len(), 1);
        assert_eq!(d.get_highlights()[0].note(), ";");
    }

    #[test]
    fn unknown_rule_diagnostic() {
        let d = Diagnostic::from(Error::UnknownRule("nope".into()));
        assert_eq!(d.get_text(), "there's no rule named nope");
        assert_eq!(d.get_location(), None);
        assert!(d.get_highlights().is_empty());
    }
}
