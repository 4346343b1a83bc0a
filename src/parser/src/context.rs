//! The state carried through a single match: limits, counters and the
//! tracer.

use crate::{AssemblySet, Error, Grammar, RuleId, Tracer};

/// Bytes of stack that must be left when entering a rule before more is
/// allocated.
const RED_ZONE: usize = 64 * 1024;

/// How much stack to allocate at a time when we do.
const STACK_SEGMENT: usize = 1024 * 1024;

/// Bounds on how much work a match may do. A limit of `0` means no limit.
///
/// ```
/// # use parser::Limits;
/// let limits = Limits::default().with_max_depth(64);
/// assert_eq!(limits.max_depth(), 64);
/// assert_eq!(limits.max_steps(), Limits::DEFAULT_MAX_STEPS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    max_depth: usize,
    max_steps: usize,
}

impl Limits {
    /// How deeply rules may nest.
    pub const DEFAULT_MAX_DEPTH: usize = 2048;

    /// How many times parsers may be applied in one match.
    pub const DEFAULT_MAX_STEPS: usize = 50_000_000;

    /// No limits at all. Left recursion will overflow the stack.
    pub fn unlimited() -> Self {
        Limits {
            max_depth: 0,
            max_steps: 0,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }
}

/// How to run a match.
#[derive(Default)]
pub struct MatchOptions<'t> {
    pub limits: Limits,
    pub tracer: Option<&'t mut dyn Tracer>,
}

impl<'t> MatchOptions<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_tracer(mut self, tracer: &'t mut dyn Tracer) -> Self {
        self.tracer = Some(tracer);
        self
    }
}

/// Everything a parser needs besides its input.
pub struct MatchContext<'g, 't> {
    grammar: &'g Grammar,
    limits: Limits,
    /// How many rules deep we are right now.
    depth: usize,
    /// How many times a parser has been applied so far.
    steps: usize,
    tracer: Option<&'t mut dyn Tracer>,
}

impl<'g, 't> MatchContext<'g, 't> {
    pub fn new(grammar: &'g Grammar, options: MatchOptions<'t>) -> Self {
        MatchContext {
            grammar,
            limits: options.limits,
            depth: 0,
            steps: 0,
            tracer: options.tracer,
        }
    }

    /// The grammar rules are looked up in.
    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Count one application of a parser against the step budget.
    pub(crate) fn step(&mut self) -> Result<(), Error> {
        self.steps += 1;

        let limit = self.limits.max_steps;
        if limit != 0 && self.steps > limit {
            Err(Error::BudgetExhausted { limit })
        } else {
            Ok(())
        }
    }

    /// Match `input` against the body of a rule, one level deeper.
    pub(crate) fn descend<'a>(
        &mut self,
        id: RuleId,
        input: &AssemblySet<'a>,
    ) -> Result<AssemblySet<'a>, Error> {
        let grammar = self.grammar;
        let name = grammar.name(id);

        let body = grammar
            .body(id)
            .ok_or_else(|| Error::UndefinedRule(name.to_string()))?;

        let limit = self.limits.max_depth;
        if limit != 0 && self.depth >= limit {
            return Err(Error::DepthExceeded {
                rule: name.to_string(),
                limit,
            });
        }

        self.depth += 1;

        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.enter(name, self.depth, input);
        }

        let result = stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, || {
            body.match_set(input, self)
        });

        if let Some(tracer) = self.tracer.as_deref_mut() {
            tracer.exit(name, self.depth, result.as_ref());
        }

        self.depth -= 1;
        result
    }
}
