//! Error types for the diff crate.

/// Errors that can occur during a comparison.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// Neither field set was supplied. Two empty field sets are valid input.
    #[error("invalid input: both ideal and input field sets are absent")]
    InvalidInput,
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
