//! Track sequences - sequences which must finish once they've started.
//!
//! A plain [`Sequence`][super::Sequence] which fails part of the way through
//! just returns nothing, and whatever is around it will try something else.
//! That's right when the input could still be something else, but once we've
//! seen `if (` we know it's an if statement, and if the rest isn't there the
//! most useful thing to do is say so right there.

use crate::assembly::NOTHING;
use crate::{AssemblySet, Error, MatchContext, Parser, TrackError};

/// A sequence which raises a [`TrackError`] if any part after the first
/// fails to match.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSequence {
    parsers: Vec<Parser>,
}

impl TrackSequence {
    pub fn new(parsers: Vec<Parser>) -> Self {
        TrackSequence { parsers }
    }

    pub fn parsers(&self) -> &[Parser] {
        &self.parsers
    }

    pub(crate) fn match_set<'a>(
        &self,
        input: &AssemblySet<'a>,
        cx: &mut MatchContext<'_, '_>,
    ) -> Result<AssemblySet<'a>, Error> {
        let mut last = input.clone();
        let mut in_track = false;

        for parser in &self.parsers {
            let out = parser.match_set(&last, cx)?;

            if out.is_empty() {
                return match last.best() {
                    Some(best) if in_track => {
                        let found = best.peek().map_or(NOTHING, |t| t.body());
                        let error = TrackError::new(
                            best.consumed(" "),
                            parser.describe(cx.grammar()),
                            found,
                            best.next_span(),
                        );
                        tracing::trace!(%error, "track failed");
                        Err(error.into())
                    }
                    _ => Ok(out),
                };
            }

            in_track = true;
            last = out;
        }

        Ok(last)
    }
}
