//! Check source files.

use std::{fs::File, io::Read, path::PathBuf};

use diagnostic::{Diagnostic, DiagnosticCoordinator, InputCoordinator};
use syntax::{Java, DEFAULT_RULE};

use crate::{diagnostics_for, Args};

/// Check that files are well formed Java.
#[derive(clap::Parser)]
pub struct Check {
    /// The files to check
    #[clap(required = true)]
    filenames: Vec<PathBuf>,

    /// The rule each whole file must match
    #[clap(long, default_value = DEFAULT_RULE)]
    rule: String,
}

impl Check {
    /// Check every file, reporting all the problems at the end. This is
    /// `false` if any file couldn't be read or recognized.
    pub(crate) fn run(&self, args: &Args) -> bool {
        let (inputs, diagnostics) = self.check_files(args);
        let failed = diagnostics.error_count() > 0;

        if let Err(e) = diagnostics.emit(&inputs, args.emitter().as_mut()) {
            eprintln!("Error: cannot write diagnostics: {}", e);
        }

        !failed
    }

    /// Read and recognize each file, collecting a diagnostic for every file
    /// that can't be read or isn't well formed.
    fn check_files(
        &self,
        args: &Args,
    ) -> (InputCoordinator, DiagnosticCoordinator) {
        let java = Java::new();
        let mut inputs = InputCoordinator::default();
        let mut diagnostics = DiagnosticCoordinator::default();

        if let Err(e) = java.rule(&self.rule) {
            for d in diagnostics_for(e) {
                diagnostics.register(d);
            }
            return (inputs, diagnostics);
        }

        for filename in &self.filenames {
            let mut input = String::new();

            if let Err(e) = File::open(filename)
                .and_then(|mut file| file.read_to_string(&mut input))
            {
                tracing::info!(file = %filename.display(), "unreadable");
                diagnostics.register(Diagnostic::new(format!(
                    "cannot read '{}': {}",
                    filename.display(),
                    e
                )));
                continue;
            }

            let id = inputs.file_input(input.clone(), filename.clone());
            let result = args.recognize(&java, &self.rule, &input);

            match result {
                Ok(_) => tracing::info!(file = %filename.display(), "ok"),
                Err(e) => {
                    tracing::info!(file = %filename.display(), "failed");
                    for d in diagnostics_for(e) {
                        diagnostics.register(d.input(id));
                    }
                }
            }
        }

        (inputs, diagnostics)
    }
}
