//! Captures group what a parser pushes into a [`Node`][crate::Node].

use std::rc::Rc;

use crate::{Assembly, AssemblySet, Error, MatchContext, Parser};

/// Matches a parser, then replaces everything it pushed with one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    name: Rc<str>,
    parser: Box<Parser>,
}

impl Capture {
    pub fn new(name: &str, parser: Parser) -> Self {
        Capture {
            name: Rc::from(name),
            parser: Box::new(parser),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parser(&self) -> &Parser {
        &self.parser
    }

    pub(crate) fn match_set<'a>(
        &self,
        input: &AssemblySet<'a>,
        cx: &mut MatchContext<'_, '_>,
    ) -> Result<AssemblySet<'a>, Error> {
        let marked: AssemblySet<'a> = input.iter().map(Assembly::mark).collect();
        let out = self.parser.match_set(&marked, cx)?;
        Ok(out.iter().map(|a| a.fold(&self.name)).collect())
    }
}
