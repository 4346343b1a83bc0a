//! jrec - check that Java source code is syntactically well formed.

mod check;
mod eval;
mod repl;

use clap::Parser;
use diagnostic::{ASCIIEmitter, Diagnostic, Emitter, FancyEmitter, Level};
use parser::{Assembly, Limits, MatchOptions, TreeTracer, Value};
use syntax::Java;
use termcolor::ColorChoice;
use tracing_subscriber::EnvFilter;

/// How many lines `--trace` prints at most.
const TRACE_LINES: usize = 10_000;

#[derive(clap::Parser)]
#[clap(version, about = "Check that Java source code is well formed")]
pub struct Args {
    /// Log more, repeat for even more
    #[clap(short, long, global = true, parse(from_occurrences))]
    verbose: u8,

    /// Print an outline of the rules tried
    #[clap(long, global = true)]
    trace: bool,

    /// Print what was recognized, grouped into declarations
    #[clap(long, global = true)]
    tree: bool,

    /// How deeply rules may nest, 0 for no limit
    #[clap(long, global = true, value_name = "N", default_value_t = Limits::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// How many steps matching may take, 0 for no limit
    #[clap(long, global = true, value_name = "N", default_value_t = Limits::DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Plain text errors, without colour or source code
    #[clap(long, global = true)]
    plain: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Check(check::Check),
    Eval(eval::Evaluate),
    Repl(repl::ReplArgs),
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(directive_for_verbosity(args.verbose))
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let ok = match &args.command {
        Command::Check(check) => check.run(&args),
        Command::Eval(eval) => eval.run(&args),
        Command::Repl(repl) => {
            repl.run(&args);
            true
        }
    };

    if !ok {
        std::process::exit(1);
    }
}

fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "jrec=warn,syntax=warn,parser=warn",
        1 => "jrec=info,syntax=info,parser=info",
        2 => "jrec=debug,syntax=debug,parser=debug",
        _ => "jrec=trace,syntax=trace,parser=trace",
    }
}

impl Args {
    fn limits(&self) -> Limits {
        Limits::default()
            .with_max_depth(self.max_depth)
            .with_max_steps(self.max_steps)
    }

    /// Where diagnostics are written.
    fn emitter(&self) -> Box<dyn Emitter> {
        if self.plain {
            Box::new(ASCIIEmitter::stderr())
        } else {
            Box::new(FancyEmitter::stderr(ColorChoice::Auto))
        }
    }

    /// Recognize `source` as `rule`, printing the trace and the tree if they
    /// were asked for.
    fn recognize<'s>(
        &self,
        java: &Java,
        rule: &str,
        source: &'s str,
    ) -> Result<Assembly<'s>, syntax::Error> {
        let mut tracer = TreeTracer::with_max_lines(TRACE_LINES);
        let mut options = MatchOptions::new().with_limits(self.limits());
        if self.trace {
            options = options.with_tracer(&mut tracer);
        }

        let result = java.recognize_with(rule, source, options);

        if self.trace {
            eprint!("{}", tracer);
        }

        if let (true, Ok(assembly)) = (self.tree, &result) {
            print_tree(assembly);
        }

        result
    }
}

/// The diagnostics for `error`. A rule name that doesn't exist also gets a
/// hint saying where the names can be found.
fn diagnostics_for(error: syntax::Error) -> Vec<Diagnostic> {
    let hint = matches!(error, syntax::Error::UnknownRule(_)).then(|| {
        Diagnostic::new("`:rules` in `jrec repl` lists every rule")
            .level(Level::Help)
    });

    std::iter::once(Diagnostic::from(error)).chain(hint).collect()
}

fn print_tree(assembly: &Assembly) {
    for value in assembly.stack() {
        match value {
            Value::Node(node) => print!("{}", node.outline()),
            Value::Token(token) => println!("{}", token.body()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_defaults() {
        assert_eq!(
            directive_for_verbosity(0),
            "jrec=warn,syntax=warn,parser=warn"
        );
        assert_eq!(
            directive_for_verbosity(2),
            "jrec=debug,syntax=debug,parser=debug"
        );
        assert_eq!(
            directive_for_verbosity(7),
            "jrec=trace,syntax=trace,parser=trace"
        );
    }

    #[test]
    fn unknown_rules_get_a_hint() {
        let levels = |e| {
            diagnostics_for(e)
                .iter()
                .map(Diagnostic::get_level)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            levels(syntax::Error::UnknownRule("sentence".into())),
            [Level::Error, Level::Help]
        );

        let java = Java::new();
        let parse_error = java.recognize("block", "{").unwrap_err();
        assert_eq!(levels(parse_error), [Level::Error]);
    }

    #[test]
    fn flags_become_limits() {
        let args = Args::parse_from([
            "jrec",
            "eval",
            "x",
            "--max-depth",
            "10",
            "--max-steps",
            "0",
        ]);
        let limits = args.limits();
        assert_eq!(limits.max_depth(), 10);
        assert_eq!(limits.max_steps(), 0);
    }
}
