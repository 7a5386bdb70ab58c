use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("expected a JSON object, got {0}")]
    NotAnObject(String),

    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    #[error("unknown object type: {0}")]
    UnknownObjectType(String),
}
