//! Recognize a snippet taken from the command line, printing the result.

use diagnostic::{DiagnosticCoordinator, InputCoordinator};
use syntax::{Java, DEFAULT_RULE};

use crate::{diagnostics_for, Args};

/// Recognize the command line argument as code and print what was matched
#[derive(clap::Parser)]
pub struct Evaluate {
    /// The code to recognize
    input: String,

    /// The rule to match the code against
    #[clap(long, default_value = DEFAULT_RULE)]
    rule: String,
}

impl Evaluate {
    /// Run the subcommand, printing the stack it leaves.
    pub(crate) fn run(&self, args: &Args) -> bool {
        let java = Java::new();
        let mut inputs = InputCoordinator::default();
        let mut diagnostics = DiagnosticCoordinator::default();

        let id = inputs.eval_input(self.input.clone());

        match args.recognize(&java, &self.rule, &self.input) {
            Ok(result) => {
                if !args.tree {
                    println!("{}", stack_line(&result));
                }
                true
            }
            Err(e) => {
                for d in diagnostics_for(e) {
                    diagnostics.register(d.input(id));
                }
                if let Err(e) =
                    diagnostics.emit(&inputs, args.emitter().as_mut())
                {
                    eprintln!("Error: cannot write diagnostics: {}", e);
                }
                false
            }
        }
    }
}

/// The stack of a result, bottom first, as one line.
pub(crate) fn stack_line(result: &parser::Assembly) -> String {
    result
        .stack()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
