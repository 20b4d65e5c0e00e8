//! Quest error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuestError {
    /// `submit` was called for a quest/user pair with no stored progress.
    #[error("quest has not been started for this user")]
    QuestNotStarted,

    #[error("step {step} is out of range for a quest with {total} steps")]
    StepOutOfRange { step: u32, total: u32 },

    #[error("invalid quest steps: {0}")]
    InvalidSteps(String),

    #[error("progress store error: {0}")]
    Store(String),
}

/// Shorthand result type for `gq-quest`.
pub type QuestResult<T> = Result<T, QuestError>;
