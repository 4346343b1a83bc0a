//! Watching a match as it happens.
//!
//! A [`Tracer`] is told each time a rule is entered and left. Pass one in
//! the [`MatchOptions`][crate::MatchOptions] to see what the grammar is doing.

use std::fmt;

use crate::assembly::NOTHING;
use crate::{AssemblySet, Error};

/// Receives rule entries and exits during a match.
pub trait Tracer {
    /// A rule is about to be matched against `input`.
    fn enter(&mut self, rule: &str, depth: usize, input: &AssemblySet<'_>);

    /// A rule finished matching.
    fn exit(
        &mut self,
        rule: &str,
        depth: usize,
        outcome: Result<&AssemblySet<'_>, &Error>,
    );
}

/// Records an indented outline of the rules tried.
///
/// Each rule gets a line when it's entered, with how many tokens the best
/// assembly had consumed and the token after them. The outcome is added to
/// the end of that line when the rule exits.
#[derive(Debug, Clone, Default)]
pub struct TreeTracer {
    lines: Vec<String>,
    /// Lines still waiting for an outcome, as indexes into `lines`.
    open: Vec<usize>,
    /// Stop recording after this many lines. `0` means never stop.
    max_lines: usize,
    truncated: bool,
}

impl TreeTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracer which stops recording after `max_lines` lines.
    pub fn with_max_lines(max_lines: usize) -> Self {
        TreeTracer {
            max_lines,
            ..Self::default()
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    fn is_full(&self) -> bool {
        self.max_lines != 0 && self.lines.len() >= self.max_lines
    }
}

impl Tracer for TreeTracer {
    fn enter(&mut self, rule: &str, depth: usize, input: &AssemblySet<'_>) {
        if self.is_full() {
            self.truncated = true;
            self.open.push(usize::MAX);
            return;
        }

        let at = match input.best() {
            Some(a) => format!(
                "@{} {}",
                a.consumed_count(),
                a.peek().map_or(NOTHING, |t| t.body())
            ),
            None => String::new(),
        };
        let indent = "  ".repeat(depth.saturating_sub(1));

        self.open.push(self.lines.len());
        self.lines.push(format!("{}{} {}", indent, rule, at));
    }

    fn exit(
        &mut self,
        _rule: &str,
        _depth: usize,
        outcome: Result<&AssemblySet<'_>, &Error>,
    ) {
        let Some(index) = self.open.pop() else {
            return;
        };

        if let Some(line) = self.lines.get_mut(index) {
            match outcome {
                Ok(set) if set.is_empty() => line.push_str(" -> no match"),
                Ok(set) => line.push_str(&format!(" -> {}", set.len())),
                Err(_) => line.push_str(" -> error"),
            }
        }
    }
}

impl fmt::Display for TreeTracer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        if self.truncated {
            writeln!(f, "...")?;
        }
        Ok(())
    }
}

/// Sends rule entries and exits to [`tracing`] at the `TRACE` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTracer;

impl Tracer for LogTracer {
    fn enter(&mut self, rule: &str, depth: usize, input: &AssemblySet<'_>) {
        tracing::trace!(rule, depth, assemblies = input.len(), "enter");
    }

    fn exit(
        &mut self,
        rule: &str,
        depth: usize,
        outcome: Result<&AssemblySet<'_>, &Error>,
    ) {
        match outcome {
            Ok(set) => tracing::trace!(rule, depth, results = set.len(), "exit"),
            Err(error) => tracing::trace!(rule, depth, %error, "exit"),
        }
    }
}
