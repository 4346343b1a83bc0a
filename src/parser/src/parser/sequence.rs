//! Sequences match their parsers one after the other.

use crate::{AssemblySet, Error, MatchContext, Parser};

/// Matches each of its parsers in order, each one starting where the last
/// one left off.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    parsers: Vec<Parser>,
}

impl Sequence {
    pub fn new(parsers: Vec<Parser>) -> Self {
        Sequence { parsers }
    }

    pub fn parsers(&self) -> &[Parser] {
        &self.parsers
    }

    pub(crate) fn match_set<'a>(
        &self,
        input: &AssemblySet<'a>,
        cx: &mut MatchContext<'_, '_>,
    ) -> Result<AssemblySet<'a>, Error> {
        let mut out = input.clone();

        for parser in &self.parsers {
            out = parser.match_set(&out, cx)?;
            if out.is_empty() {
                break;
            }
        }

        Ok(out)
    }
}
