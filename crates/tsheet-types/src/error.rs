use thiserror::Error;

/// Errors produced while constructing field types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("field name must not be empty")]
    EmptyFieldName,

    #[error("duplicate field name after normalization: {0}")]
    DuplicateFieldName(String),

    #[error("unknown field status: {0}")]
    UnknownStatus(String),
}
