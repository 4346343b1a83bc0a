//! Alternations match any one of their parsers.

use crate::{AssemblySet, Error, MatchContext, Parser};

/// Matches each of its parsers against the same input, and keeps every
/// result.
///
/// Nothing is short-circuited, so results from the first parser come first,
/// then new ones from the second, and so on. The first error raised stops
/// everything, so later parsers aren't tried at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Alternation {
    parsers: Vec<Parser>,
}

impl Alternation {
    pub fn new(parsers: Vec<Parser>) -> Self {
        Alternation { parsers }
    }

    pub fn parsers(&self) -> &[Parser] {
        &self.parsers
    }

    pub(crate) fn match_set<'a>(
        &self,
        input: &AssemblySet<'a>,
        cx: &mut MatchContext<'_, '_>,
    ) -> Result<AssemblySet<'a>, Error> {
        let mut out = AssemblySet::new();

        for parser in &self.parsers {
            out.extend(parser.match_set(input, cx)?);
        }

        Ok(out)
    }
}
