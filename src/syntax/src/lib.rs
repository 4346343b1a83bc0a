//! A recognizer for Java source code.
//!
//! This is the grammar from the syntax chapter of the Java Language
//! Specification, written with the combinators from [`parser`]. It only
//! says *whether* the input is Java, and if it isn't, where it went wrong.
//! Nothing is type checked or resolved.
//!
//! Every rule can be matched on its own by name, which is handy for trying
//! out a snippet.
//!
//! ```
//! use syntax::Java;
//!
//! let java = Java::new();
//! let result = java.recognize("qualifiedIdentifier", "foo.bar.mooky")?;
//! assert_eq!(result.stack().len(), 5);
//!
//! let error = java.recognize("qualifiedIdentifier", "foo.").unwrap_err();
//! let track = error.as_track().unwrap();
//! assert_eq!(track.after(), "foo .");
//! assert_eq!(track.expected(), "identifier");
//! assert_eq!(track.found(), "-nothing-");
//! # Ok::<(), syntax::Error>(())
//! ```

mod declarations;
mod expressions;
mod lexical;
mod rules;
mod statements;
mod types;

pub mod error;

use parser::lexer::{self, SymbolTable, Token};
use parser::{Assembly, Grammar, MatchOptions, RuleId};

use crate::rules::Rules;

pub use crate::error::Error;

/// The rule a whole source file is matched against.
pub const DEFAULT_RULE: &str = "compilationUnit";

/// The Java grammar, and the symbols it's tokenized with.
#[derive(Debug, Clone)]
pub struct Java {
    grammar: Grammar,
    symbols: SymbolTable,
}

impl Default for Java {
    fn default() -> Self {
        Java::new()
    }
}

impl Java {
    pub fn new() -> Self {
        let mut grammar = Grammar::new();
        grammar.reserve(lexical::RESERVED.iter().copied());

        let rules = Rules::declare(&mut grammar);
        lexical::define(&mut grammar, &rules);
        types::define(&mut grammar, &rules);
        expressions::define(&mut grammar, &rules);
        statements::define(&mut grammar, &rules);
        declarations::define(&mut grammar, &rules);

        tracing::debug!(rules = grammar.rules().count(), "built java grammar");

        Java {
            grammar,
            symbols: lexical::symbols(),
        }
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// The rule called `name`.
    pub fn rule(&self, name: &str) -> Result<RuleId, Error> {
        self.grammar
            .lookup(name)
            .ok_or_else(|| Error::UnknownRule(name.to_string()))
    }

    /// The names of every rule, sorted.
    pub fn rule_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> =
            self.grammar.rules().map(|(_, name)| name).collect();
        names.sort_unstable();
        names
    }

    /// Break source code into Java tokens, dropping comments.
    pub fn tokenize<'s>(&self, source: &'s str) -> Result<Vec<Token<'s>>, Error> {
        Ok(lexer::tokenize(source, &self.symbols)?)
    }

    /// Recognize all of `source` as the rule called `rule`, using the
    /// default limits.
    pub fn recognize<'s>(
        &self,
        rule: &str,
        source: &'s str,
    ) -> Result<Assembly<'s>, Error> {
        self.recognize_with(rule, source, MatchOptions::default())
    }

    /// Recognize all of `source` as the rule called `rule`.
    pub fn recognize_with<'s>(
        &self,
        rule: &str,
        source: &'s str,
        options: MatchOptions<'_>,
    ) -> Result<Assembly<'s>, Error> {
        let id = self.rule(rule)?;
        let tokens = self.tokenize(source)?;
        tracing::debug!(rule, tokens = tokens.len(), "recognizing");

        let assembly = Assembly::new(tokens);
        Ok(self.grammar.complete_match_with(id, assembly, options)?)
    }
}
