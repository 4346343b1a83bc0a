//! An interactive mode.
//!
//! Each line is recognized on its own against the current rule. Lines
//! starting with `:` are commands:
//!
//! - `:rule NAME` switches to another rule
//! - `:rule` prints the current rule
//! - `:rules` lists every rule

use diagnostic::{Diagnostic, DiagnosticCoordinator, InputCoordinator};
use rustyline::{error::ReadlineError, Editor};
use syntax::{Java, DEFAULT_RULE};
use thiserror::Error;

use crate::eval::stack_line;
use crate::Args;

/// Start an interactive session
#[derive(clap::Parser)]
pub struct ReplArgs {
    /// The rule to start with
    #[clap(long, default_value = DEFAULT_RULE)]
    rule: String,
}

impl ReplArgs {
    /// Run a repl with the given settings.
    pub(crate) fn run(&self, args: &Args) {
        let repl = Repl::new(self.rule.clone());
        repl.start(args)
    }
}

struct Repl {
    editor: Editor<()>,
    java: Java,
    inputs: InputCoordinator,
    rule: String,
}

impl Repl {
    /// The prompt used to ask for more input.
    const PROMPT: &'static str = ">>> ";

    /// Lines which are the result of recognition begin with this.
    const RESULT_PROMPT: &'static str = "//> ";

    fn new(rule: String) -> Self {
        Repl {
            editor: Editor::<()>::new(),
            java: Java::new(),
            inputs: InputCoordinator::default(),
            rule,
        }
    }

    fn start(mut self, args: &Args) {
        loop {
            match self.step(args) {
                Ok(()) => continue,
                Err(ReplError::Clear) => continue,
                Err(ReplError::Exit) => break,
                Err(ReplError::Readline(e)) => {
                    println!("{}", e);
                    println!("  (press control-d to exit)");
                }
                Err(other) => println!("{}", other),
            }
        }
    }

    fn step(&mut self, args: &Args) -> Result<(), ReplError> {
        let input = self.read()?;

        if input.trim().is_empty() {
            return Ok(());
        }

        self.editor.add_history_entry(input.as_str());

        if let Some(command) = input.trim().strip_prefix(':') {
            return self.command(command);
        }

        let id = self.inputs.repl_input(input.clone());

        match args.recognize(&self.java, &self.rule, &input) {
            Ok(result) => {
                println!("{}{}", Repl::RESULT_PROMPT, stack_line(&result));
            }
            Err(e) => {
                let mut diagnostics = DiagnosticCoordinator::default();
                diagnostics.register(Diagnostic::from(e).input(id));
                diagnostics
                    .emit(&self.inputs, args.emitter().as_mut())
                    .map_err(ReplError::Output)?;
            }
        }

        Ok(())
    }

    fn command(&mut self, command: &str) -> Result<(), ReplError> {
        let mut words = command.split_whitespace();

        match (words.next(), words.next()) {
            (Some("rules"), None) => {
                for name in self.java.rule_names() {
                    println!("{}", name);
                }
            }

            (Some("rule"), None) => println!("{}", self.rule),

            (Some("rule"), Some(name)) => {
                self.java.rule(name)?;
                self.rule = name.to_string();
            }

            _ => return Err(ReplError::UnknownCommand(command.to_string())),
        }

        Ok(())
    }

    fn read(&mut self) -> Result<String, ReplError> {
        let line = self.editor.readline(Repl::PROMPT);
        match line {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => {
                // User hit Control-C
                Err(ReplError::Clear)
            }

            Err(ReadlineError::Eof) => {
                // User hit Control-D at end of line, to exit.
                Err(ReplError::Exit)
            }

            Err(e) => Err(ReplError::Readline(e)),
        }
    }
}

#[derive(Debug, Error)]
enum ReplError {
    #[error("^C")]
    Clear,

    #[error("^D")]
    Exit,

    #[error(transparent)]
    Readline(ReadlineError),

    #[error("unknown command ':{0}', try ':rule NAME' or ':rules'")]
    UnknownCommand(String),

    #[error(transparent)]
    Syntax(#[from] syntax::Error),

    #[error("cannot write diagnostics: {0}")]
    Output(std::io::Error),
}
