//! Grammars - named, possibly recursive, rules.
//!
//! Rules are kept in an arena and referred to by [`RuleId`]. A rule is
//! declared with [`Grammar::rule`], which can happen before (or without) it
//! being defined, so rules can refer to each other in any order. Once
//! everything is defined, [`Grammar::verify`] checks nothing was missed.
//!
//! # Example
//!
//! ```
//! # use parser::{alt, seq, Assembly, Grammar, ident, sym, lexer::{tokenize, SymbolTable}};
//! let mut grammar = Grammar::new();
//! let list = grammar.rule("list");
//! let item = grammar.rule("item");
//!
//! // item := identifier | '(' list ')'
//! grammar.define(item, alt![ident(), seq![sym("("), list, sym(")")]]);
//! // list := item item*
//! grammar.define(list, seq![item, parser::many(item)]);
//! grammar.verify()?;
//!
//! let symbols = SymbolTable::default();
//! let tokens = tokenize("a (b c) d", &symbols)?;
//! let result = grammar.complete_match(list, Assembly::new(tokens))?;
//! assert_eq!(result.stack().len(), 6);
//! # Ok::<(), parser::Error>(())
//! ```

use std::collections::{HashMap, HashSet};

use crate::assembly::NOTHING;
use crate::parser::Capture;
use crate::{
    Assembly, AssemblySet, Error, MatchContext, MatchOptions, Parser,
};

/// A reference to a rule in a [`Grammar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(usize);

#[derive(Debug, Clone)]
struct Rule {
    name: String,
    body: Option<Parser>,
}

/// A set of named rules and the words reserved from being identifiers.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: Vec<Rule>,
    names: HashMap<String, RuleId>,
    reserved: HashSet<String>,
    /// Rules which had a second definition, in the order it happened.
    redefined: Vec<RuleId>,
}

impl Grammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rule called `name`, declaring it if it's new.
    pub fn rule(&mut self, name: &str) -> RuleId {
        if let Some(id) = self.names.get(name) {
            return *id;
        }

        let id = RuleId(self.rules.len());
        self.rules.push(Rule {
            name: name.to_string(),
            body: None,
        });
        self.names.insert(name.to_string(), id);
        id
    }

    /// Give a rule its body. Only the first definition of a rule is used,
    /// later ones are reported by [`verify`][Grammar::verify].
    pub fn define(&mut self, id: RuleId, body: impl Into<Parser>) {
        let Some(rule) = self.rules.get_mut(id.0) else {
            return;
        };

        if rule.body.is_some() {
            self.redefined.push(id);
        } else {
            rule.body = Some(body.into());
        }
    }

    /// Define a rule so that what it matches is grouped into a node named
    /// after the rule.
    pub fn define_node(&mut self, id: RuleId, body: impl Into<Parser>) {
        let name = self.name(id).to_string();
        self.define(id, Parser::Capture(Capture::new(&name, body.into())));
    }

    /// The rule called `name`, if it's been declared.
    pub fn lookup(&self, name: &str) -> Option<RuleId> {
        self.names.get(name).copied()
    }

    /// The name of a rule.
    pub fn name(&self, id: RuleId) -> &str {
        self.rules.get(id.0).map_or("?", |r| r.name.as_str())
    }

    /// The body of a rule, if it's been defined.
    pub fn body(&self, id: RuleId) -> Option<&Parser> {
        self.rules.get(id.0)?.body.as_ref()
    }

    /// Every rule, in the order they were declared.
    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &str)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, r)| (RuleId(i), r.name.as_str()))
    }

    /// Stop these words from matching as identifiers.
    pub fn reserve<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reserved.extend(words.into_iter().map(Into::into));
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }

    /// Check every rule was defined exactly once.
    pub fn verify(&self) -> Result<(), Error> {
        if let Some(rule) = self.rules.iter().find(|r| r.body.is_none()) {
            return Err(Error::UndefinedRule(rule.name.clone()));
        }

        if let Some(id) = self.redefined.first() {
            return Err(Error::RedefinedRule(self.name(*id).to_string()));
        }

        Ok(())
    }

    /// Match a set of assemblies against a rule, returning every assembly
    /// that results.
    pub fn match_rule<'a>(
        &self,
        rule: RuleId,
        input: &AssemblySet<'a>,
        options: MatchOptions<'_>,
    ) -> Result<AssemblySet<'a>, Error> {
        let mut cx = MatchContext::new(self, options);
        let result = Parser::Rule(rule).match_set(input, &mut cx);
        tracing::debug!(
            rule = self.name(rule),
            steps = cx.steps(),
            ok = result.is_ok(),
            "matched rule"
        );
        result
    }

    /// Match all of an assembly's input against a rule, with the default
    /// options.
    pub fn complete_match<'a>(
        &self,
        rule: RuleId,
        assembly: Assembly<'a>,
    ) -> Result<Assembly<'a>, Error> {
        self.complete_match_with(rule, assembly, MatchOptions::default())
    }

    /// Match all of an assembly's input against a rule.
    ///
    /// This succeeds with the assembly which consumed everything. If a track
    /// failed along the way that error is returned as is, otherwise the error
    /// says how far the best attempt got.
    pub fn complete_match_with<'a>(
        &self,
        rule: RuleId,
        assembly: Assembly<'a>,
        options: MatchOptions<'_>,
    ) -> Result<Assembly<'a>, Error> {
        let name = self.name(rule);
        tracing::debug!(rule = name, tokens = assembly.len(), "complete match");

        let input = AssemblySet::singleton(assembly.clone());
        let result = self.match_rule(rule, &input, options)?;
        tracing::debug!(rule = name, results = result.len(), "complete match done");

        match result.best() {
            Some(best) if best.is_done() => Ok(best.clone()),
            best => {
                let partial = best.unwrap_or(&assembly);
                Err(Error::NoMatch {
                    rule: name.to_string(),
                    after: partial.consumed(" "),
                    found: partial
                        .peek()
                        .map_or(NOTHING, |t| t.body())
                        .to_string(),
                    span: partial.next_span(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ident, sym};

    #[test]
    fn rule_is_declared_once() {
        let mut g = Grammar::new();
        let a = g.rule("a");
        assert_eq!(g.rule("a"), a);
        assert_eq!(g.lookup("a"), Some(a));
        assert_eq!(g.lookup("b"), None);
        assert_eq!(g.name(a), "a");
    }

    #[test]
    fn verify_finds_undefined() {
        let mut g = Grammar::new();
        let a = g.rule("a");
        let b = g.rule("b");
        g.define(a, b);
        assert_eq!(g.verify(), Err(Error::UndefinedRule("b".into())));

        g.define(b, ident());
        assert_eq!(g.verify(), Ok(()));
    }

    #[test]
    fn verify_finds_redefined() {
        let mut g = Grammar::new();
        let a = g.rule("a");
        g.define(a, ident());
        g.define(a, sym(";"));
        assert_eq!(g.verify(), Err(Error::RedefinedRule("a".into())));
        assert_eq!(g.body(a), Some(&ident()));
    }

    #[test]
    fn rules_in_declaration_order() {
        let mut g = Grammar::new();
        g.rule("z");
        g.rule("a");
        let names: Vec<&str> = g.rules().map(|(_, name)| name).collect();
        assert_eq!(names, ["z", "a"]);
    }
}
