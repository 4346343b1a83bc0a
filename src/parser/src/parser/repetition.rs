//! Repetitions match a parser as many times as they can.

use crate::{AssemblySet, Error, MatchContext, Parser};

/// Matches a parser zero or more times, or one or more times.
///
/// Every number of matches is kept, so `a*` against `a a` gives three
/// assemblies: none, one and two `a`s consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Repetition {
    parser: Box<Parser>,
    at_least_one: bool,
}

impl Repetition {
    /// Zero or more times.
    pub fn new(parser: Parser) -> Self {
        Repetition {
            parser: Box::new(parser),
            at_least_one: false,
        }
    }

    /// One or more times.
    pub fn at_least_once(parser: Parser) -> Self {
        Repetition {
            parser: Box::new(parser),
            at_least_one: true,
        }
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub fn at_least_one(&self) -> bool {
        self.at_least_one
    }

    pub(crate) fn match_set<'a>(
        &self,
        input: &AssemblySet<'a>,
        cx: &mut MatchContext<'_, '_>,
    ) -> Result<AssemblySet<'a>, Error> {
        let start = if self.at_least_one {
            self.parser.match_set(input, cx)?
        } else {
            input.clone()
        };

        let mut result = start.clone();
        let mut frontier = start;

        // Only assemblies which got further than the least advanced one in
        // the frontier go around again, so this always ends.
        while let Some(floor) = frontier.min_consumed() {
            let out = self.parser.match_set(&frontier, cx)?;

            let mut next = AssemblySet::new();
            for assembly in out {
                if assembly.consumed_count() > floor
                    && result.insert(assembly.clone())
                {
                    next.insert(assembly);
                }
            }

            frontier = next;
        }

        Ok(result)
    }
}
