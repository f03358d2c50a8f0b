use thiserror::Error;

/// A bounded run hit its step budget before the program halted.
///
/// This is a hosting-environment abort, not a language outcome: the engine
/// itself never detects or reports divergence. It is produced only by
/// [`Bounded`](crate::Bounded) when the caller-imposed budget runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("step budget of {limit} exhausted before the program halted")]
pub struct BudgetExhausted {
    /// The budget the run was created with.
    pub limit: u64,
}
