/// Configuration options for the rewriting engine.
///
/// These options control diagnostics only; none of them affect the program's
/// execution semantics or its output.
///
/// # Examples
///
/// ```rust
/// use slashes::{EngineOptions, Highlight, Interpreter};
///
/// let options = EngineOptions {
///     trace_level: 2,
///     highlight: Highlight::Bright,
///     ..Default::default()
/// };
/// let interpreter = Interpreter::new("Hello, world!", options);
/// ```
///
/// # Default
///
/// Silent: `trace_level` is `0`, `interactive_step` is `false`, `highlight`
/// is [`Highlight::None`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineOptions {
    /// Diagnostic verbosity.
    ///
    /// * `0`: silent; the [`Tracer`](crate::Tracer) is never invoked.
    /// * `1`: report the initial program and the final output.
    /// * `2`: additionally report each captured rule.
    /// * `3` and up: additionally report every single substitution step.
    ///
    /// # Default
    ///
    /// `0`
    pub trace_level: u32,

    /// Whether execution pauses for external acknowledgment between traced
    /// steps.
    ///
    /// When `true`, the engine calls [`Tracer::pause`](crate::Tracer::pause)
    /// after each trace point that `trace_level` makes visible: after each
    /// captured rule at level 2, and after every substitution step at level
    /// 3 and up. The pause is cooperative; the engine resumes when the hook
    /// returns.
    ///
    /// # Default
    ///
    /// `false`
    pub interactive_step: bool,

    /// How trace output is decorated. Purely cosmetic.
    ///
    /// # Default
    ///
    /// [`Highlight::None`]
    pub highlight: Highlight,
}

/// Decoration applied to the pattern and replacement spans of trace lines.
///
/// Only [`TextTracer`](crate::TextTracer) consults this; it has no effect on
/// execution semantics, and it never disturbs the caret alignment line,
/// which is computed from undecorated character counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Highlight {
    /// Plain text.
    #[default]
    None,
    /// Faint (SGR 2) pattern and replacement spans.
    Subtle,
    /// Bold colored spans: cyan pattern, yellow replacement.
    Bright,
}
