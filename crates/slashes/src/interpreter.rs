//! The driver: orchestrates scanning, emission, and rewriting.
//!
//! The driver owns the program buffer and replaces it wholesale once per
//! iteration. Output is pull-based: each [`Interpreter::step`] performs one
//! unit of work (a buffer scan, the emission of a single character, or a
//! single substitution), so a host pulls exactly as much execution as it
//! consumes, and a divergent program is an unbounded sequence of
//! [`StepOutcome::Working`] results rather than a reported condition.

use alloc::{collections::VecDeque, string::String};

use crate::{
    error::BudgetExhausted,
    options::EngineOptions,
    rewriter::{self, Rule},
    scanner::{self, Scan},
    trace::{NullTracer, Tracer},
};

/// Driver state. There is no `Diverged` state: from the caller's
/// perspective divergence is indistinguishable from rewriting that never
/// finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Scanning,
    Emitting,
    Rewriting,
    Halted,
}

/// One unit of cooperative progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// One output character was produced.
    Emitted(char),
    /// Internal progress was made (a scan or a single substitution) without
    /// producing output yet.
    Working,
    /// Execution halted; all further steps return `Halted`.
    Halted,
}

/// Executes a `///` program as a lazy sequence of output characters.
///
/// The interpreter implements `Iterator<Item = char>`; `next()` drives
/// [`step`](Interpreter::step) until a character is produced or the program
/// halts. On a divergent program `next()` never returns, exactly as the
/// language defines; use [`bounded`](Interpreter::bounded) to impose an
/// external step budget.
///
/// A half-consumed run cannot be rewound; restarting means constructing a
/// new `Interpreter` from the original program text.
///
/// # Examples
///
/// ```rust
/// use slashes::{EngineOptions, Interpreter};
///
/// let interpreter = Interpreter::new("/foo/Hello, world!//bar/foo/bar", EngineOptions::default());
/// let output: String = interpreter.collect();
/// assert_eq!(output, "Hello, world!");
/// ```
#[derive(Debug)]
pub struct Interpreter<T: Tracer = NullTracer> {
    /// Raw, not-yet-executed program text. Replaced wholesale per iteration.
    buffer: String,
    /// Decoded output-prefix characters awaiting emission.
    pending: VecDeque<char>,
    /// Rule captured for the current iteration, if any. Never outlives the
    /// fixpoint computation it drives.
    rule: Option<Rule>,
    state: State,
    options: EngineOptions,
    tracer: T,
    /// Emitted characters, kept only while tracing wants a final transcript.
    transcript: Option<String>,
}

impl Interpreter {
    /// Creates a silent interpreter for `program`.
    #[must_use]
    pub fn new(program: &str, options: EngineOptions) -> Self {
        Self::with_tracer(program, options, NullTracer)
    }
}

impl<T: Tracer> Interpreter<T> {
    /// Creates an interpreter whose trace points are delivered to `tracer`,
    /// gated by `options.trace_level`.
    #[must_use]
    pub fn with_tracer(program: &str, options: EngineOptions, mut tracer: T) -> Self {
        if options.trace_level >= 1 {
            tracer.program_loaded(program);
        }
        Self {
            buffer: String::from(program),
            pending: VecDeque::new(),
            rule: None,
            state: State::Scanning,
            options,
            tracer,
            transcript: (options.trace_level >= 1).then(String::new),
        }
    }

    /// Performs one unit of work.
    ///
    /// This is the engine's cooperative suspension point: a host that wants
    /// to pace, interleave, or bound execution calls `step` directly instead
    /// of iterating.
    pub fn step(&mut self) -> StepOutcome {
        loop {
            match self.state {
                State::Scanning => {
                    self.scan();
                    self.state = State::Emitting;
                    return StepOutcome::Working;
                }
                State::Emitting => {
                    if let Some(c) = self.pending.pop_front() {
                        if let Some(transcript) = self.transcript.as_mut() {
                            transcript.push(c);
                        }
                        return StepOutcome::Emitted(c);
                    }
                    if self.rule.is_some() {
                        self.state = State::Rewriting;
                    } else {
                        if self.options.trace_level >= 1 {
                            self.tracer
                                .halted(self.transcript.as_deref().unwrap_or(""));
                        }
                        self.state = State::Halted;
                    }
                }
                State::Rewriting => {
                    let Some(rule) = self.rule.as_ref() else {
                        self.state = State::Scanning;
                        continue;
                    };
                    match rewriter::substitute_once(&self.buffer, &rule.pattern, &rule.replacement)
                    {
                        Some(next) => {
                            self.buffer = next;
                            if self.options.trace_level >= 3 {
                                self.tracer.substituted(
                                    &rule.pattern,
                                    &rule.replacement,
                                    &self.buffer,
                                );
                                if self.options.interactive_step {
                                    self.tracer.pause();
                                }
                            }
                            return StepOutcome::Working;
                        }
                        None => {
                            // Fixpoint reached; the rule dies with its iteration.
                            self.rule = None;
                            self.state = State::Scanning;
                        }
                    }
                }
                State::Halted => return StepOutcome::Halted,
            }
        }
    }

    /// Wraps the interpreter in a host-imposed step budget.
    ///
    /// Every call to [`step`](Interpreter::step) costs one unit of budget.
    /// When the budget runs out, the iterator yields one
    /// `Err(BudgetExhausted)` and then ends. This is the external bound a
    /// host uses to probe potentially divergent programs.
    #[must_use]
    pub fn bounded(self, budget: u64) -> Bounded<T> {
        Bounded {
            inner: self,
            remaining: budget,
            limit: budget,
            tripped: false,
        }
    }

    /// One full scan pass: captures the output prefix and, if present, the
    /// rule for this iteration.
    fn scan(&mut self) {
        match scanner::split_step(&self.buffer) {
            Scan::Tail { prefix } => {
                self.pending = prefix.chars().collect();
                self.rule = None;
                self.buffer.clear();
            }
            Scan::Rule {
                prefix,
                pattern,
                replacement,
                remainder,
            } => {
                self.pending = prefix.chars().collect();
                self.buffer = remainder;
                if self.options.trace_level >= 2 {
                    self.tracer.rule_captured(&pattern, &replacement, &self.buffer);
                    if self.options.interactive_step {
                        self.tracer.pause();
                    }
                }
                self.rule = Some(Rule {
                    pattern,
                    replacement,
                });
            }
        }
    }
}

impl<T: Tracer> Iterator for Interpreter<T> {
    type Item = char;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                StepOutcome::Emitted(c) => return Some(c),
                StepOutcome::Working => {}
                StepOutcome::Halted => return None,
            }
        }
    }
}

/// An interpreter constrained by an externally imposed step budget.
///
/// Yields `Ok(char)` for each output character. If the budget is exhausted
/// first, yields a single `Err(BudgetExhausted)` and then ends; a program
/// that halts within budget simply ends.
///
/// Returned by [`Interpreter::bounded`].
#[derive(Debug)]
pub struct Bounded<T: Tracer = NullTracer> {
    inner: Interpreter<T>,
    remaining: u64,
    limit: u64,
    tripped: bool,
}

impl<T: Tracer> Iterator for Bounded<T> {
    type Item = Result<char, BudgetExhausted>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.tripped {
            return None;
        }
        loop {
            if self.remaining == 0 {
                self.tripped = true;
                return Some(Err(BudgetExhausted { limit: self.limit }));
            }
            self.remaining -= 1;
            match self.inner.step() {
                StepOutcome::Emitted(c) => return Some(Ok(c)),
                StepOutcome::Working => {}
                StepOutcome::Halted => return None,
            }
        }
    }
}

/// Runs `program` to completion and collects its output.
///
/// Convenience for halting programs; a divergent program makes this loop
/// forever, like any other full consumption of the output sequence.
///
/// # Examples
///
/// ```rust
/// assert_eq!(slashes::run(r"\/"), "/");
/// ```
#[must_use]
pub fn run(program: &str) -> String {
    Interpreter::new(program, EngineOptions::default()).collect()
}
