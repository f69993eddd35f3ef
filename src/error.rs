use thiserror::Error;
use tracing::error;

/// Recoverable failures reported by a [`TupleQueue`](crate::TupleQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QueueError {
    /// `dequeue` or `peek` found no record.
    #[error("queue is empty")]
    Empty,

    /// A signed capacity hint was negative or too large to allocate.
    #[error("capacity hint {hint} is out of range")]
    CapacityOutOfRange { hint: i64 },
}

/// The base queue reported a record but produced none.
///
/// This is never returned. It indicates a broken [`BaseQueue`](crate::BaseQueue)
/// implementation and is raised as a panic, even from the `try_` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("result null: base queue length {len} but {operation} produced none (arity {arity})")]
pub struct InvariantViolation {
    pub arity: usize,
    pub len: usize,
    pub operation: &'static str,
}

impl InvariantViolation {
    #[cold]
    #[track_caller]
    pub(crate) fn raise(self) -> ! {
        error!(
            arity = self.arity,
            len = self.len,
            operation = self.operation,
            "base queue broke its contract"
        );
        panic!("{}", self)
    }
}
