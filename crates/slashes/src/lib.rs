//! A lazy, incremental interpreter for the `///` ("slashes") string-rewriting
//! language.
//!
//! A program is a single text buffer. Everything up to the first unescaped
//! `/` is emitted verbatim; the next two `/`-delimited segments form a
//! (pattern, replacement) rule that is folded over the rest of the buffer by
//! repeated first-occurrence substitution until the pattern no longer occurs.
//! The result becomes the new buffer and execution starts over. Execution
//! halts when the buffer is exhausted or a rule is left incomplete; an empty
//! pattern makes the substitution loop forever, which is the language's
//! defined behavior for divergent programs, not an error.
//!
//! Output is pull-based: [`Interpreter`] implements `Iterator<Item = char>`
//! and performs exactly enough work per call to produce one character.
//!
//! # Examples
//!
//! ```rust
//! let output: String = slashes::run("/ world! world!/Hello,/ world! world! world!");
//! assert_eq!(output, "Hello, world!");
//! ```
//!
//! Divergent programs never finish, so hosts probe them through a step
//! budget instead of waiting:
//!
//! ```rust
//! use slashes::{EngineOptions, Interpreter};
//!
//! let mut probe = Interpreter::new("a//x/tail", EngineOptions::default()).bounded(1_000);
//! assert_eq!(probe.next(), Some(Ok('a')));
//! assert!(probe.next().unwrap().is_err());
//! ```
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod interpreter;
mod options;
pub mod programs;
mod rewriter;
mod scanner;
mod trace;

#[cfg(test)]
mod tests;

pub use error::BudgetExhausted;
pub use interpreter::{Bounded, Interpreter, StepOutcome, run};
pub use options::{EngineOptions, Highlight};
pub use trace::{NullTracer, TextTracer, Tracer};
