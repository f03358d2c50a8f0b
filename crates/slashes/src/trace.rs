//! Diagnostic observers invoked at driver transition points.
//!
//! Tracing is presentational only: the engine calls the hooks at
//! well-defined transitions (program loaded, rule captured, substitution
//! step, halted) gated by [`EngineOptions::trace_level`], and nothing the
//! observer does can affect execution semantics.
//!
//! [`EngineOptions::trace_level`]: crate::EngineOptions::trace_level

use alloc::string::String;
use core::fmt::Write;

use crate::options::Highlight;

/// Observer for the engine's diagnostic side channel.
///
/// All hooks default to no-ops, so implementors only override the
/// transitions they care about. [`pause`](Tracer::pause) is the cooperative
/// suspension point used by interactive hosts: the engine blocks until it
/// returns.
pub trait Tracer {
    /// The initial program text, before the first scan.
    fn program_loaded(&mut self, program: &str) {
        let _ = program;
    }

    /// A complete rule was captured; `buffer` is the raw remainder the rule
    /// is about to be folded over.
    fn rule_captured(&mut self, pattern: &str, replacement: &str, buffer: &str) {
        let _ = (pattern, replacement, buffer);
    }

    /// One substitution was applied; `buffer` is the raw buffer afterwards.
    fn substituted(&mut self, pattern: &str, replacement: &str, buffer: &str) {
        let _ = (pattern, replacement, buffer);
    }

    /// Execution halted; `output` is everything that was emitted.
    fn halted(&mut self, output: &str) {
        let _ = output;
    }

    /// Called between traced steps when
    /// [`interactive_step`](crate::EngineOptions::interactive_step) is set.
    fn pause(&mut self) {}
}

/// The silent tracer. Every hook is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullTracer;

impl Tracer for NullTracer {}

/// Renders the reference trace format into any [`core::fmt::Write`] sink.
///
/// Each rule application is reported as a caret alignment line over an
/// `APPLY:` line showing the rule spliced back in front of the buffer:
///
/// ```text
/// INPUT:  /a/b/a
///
///         v v v
/// APPLY:  /a/b/a
///
/// OUTPUT: b
/// ```
///
/// The caret positions are computed from undecorated character counts, so
/// [`Highlight`] decoration never disturbs the alignment.
#[derive(Debug)]
pub struct TextTracer<W: Write> {
    out: W,
    highlight: Highlight,
}

impl<W: Write> TextTracer<W> {
    /// Creates a tracer writing to `out`, decorated per `highlight`.
    #[must_use]
    pub fn new(out: W, highlight: Highlight) -> Self {
        Self { out, highlight }
    }

    /// Consumes the tracer and returns the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn apply_line(&mut self, pattern: &str, replacement: &str, buffer: &str) {
        let mut carets = String::from("        v");
        for _ in pattern.chars() {
            carets.push(' ');
        }
        carets.push('v');
        for _ in replacement.chars() {
            carets.push(' ');
        }
        carets.push('v');

        let _ = writeln!(self.out, "{carets}");
        let _ = match self.highlight {
            Highlight::None => {
                writeln!(self.out, "APPLY:  /{pattern}/{replacement}/{buffer}\n")
            }
            Highlight::Subtle => writeln!(
                self.out,
                "APPLY:  /\x1b[2m{pattern}\x1b[0m/\x1b[2m{replacement}\x1b[0m/{buffer}\n"
            ),
            Highlight::Bright => writeln!(
                self.out,
                "APPLY:  /\x1b[1;36m{pattern}\x1b[0m/\x1b[1;33m{replacement}\x1b[0m/{buffer}\n"
            ),
        };
    }
}

impl<W: Write> Tracer for TextTracer<W> {
    fn program_loaded(&mut self, program: &str) {
        let _ = writeln!(self.out, "INPUT:  {program}\n");
    }

    fn rule_captured(&mut self, pattern: &str, replacement: &str, buffer: &str) {
        self.apply_line(pattern, replacement, buffer);
    }

    fn substituted(&mut self, pattern: &str, replacement: &str, buffer: &str) {
        self.apply_line(pattern, replacement, buffer);
    }

    fn halted(&mut self, output: &str) {
        let _ = writeln!(self.out, "\nOUTPUT: {output}");
    }
}
