//! Diagnostic Coordinator handles collecting any diagnostics produced, and
//! emitting them at the right times, and in the right formats.

use crate::{diagnostic::Diagnostic, Emitter, InputCoordinator, Level};

#[derive(Default)]
pub struct DiagnosticCoordinator {
    /// All the registered diagnostics, in the order they were registered.
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCoordinator {
    pub fn register(&mut self, issue: Diagnostic) {
        self.diagnostics.push(issue);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// How many of the registered diagnostics are errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.get_level() == Level::Error)
            .count()
    }

    /// The line printed after everything else, like `2 errors`. There's no
    /// summary if nothing went wrong.
    pub fn summary(&self) -> Option<String> {
        match self.error_count() {
            0 => None,
            1 => Some("1 error".into()),
            n => Some(format!("{n} errors")),
        }
    }

    /// Emit every diagnostic, ordered by input and location, then the
    /// summary line.
    pub fn emit(
        mut self,
        inputs: &InputCoordinator,
        emitter: &mut dyn Emitter,
    ) -> std::io::Result<()> {
        self.diagnostics
            .sort_by_key(|d| (d.get_input(), d.get_location()));

        for d in &self.diagnostics {
            emitter.emit(d, inputs)?;
        }

        if let Some(summary) = self.summary() {
            emitter.summary(&summary)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_errors_only() {
        let mut diagnostics = DiagnosticCoordinator::default();
        assert_eq!(diagnostics.summary(), None);

        diagnostics.register(Diagnostic::new("one"));
        assert_eq!(diagnostics.summary().as_deref(), Some("1 error"));

        diagnostics.register(Diagnostic::new("hint").level(Level::Help));
        diagnostics.register(Diagnostic::new("two"));
        assert_eq!(diagnostics.error_count(), 2);
        assert_eq!(diagnostics.summary().as_deref(), Some("2 errors"));
    }
}
