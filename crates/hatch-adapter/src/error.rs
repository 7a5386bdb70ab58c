use hatch_store::StoreError;
use hatch_stub::StubError;
use hatch_types::TypeError;

/// Errors surfaced by adapter mock operations.
///
/// Missing objects and states are not errors; they come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("stub error: {0}")]
    Stub(#[from] StubError),

    #[error("type error: {0}")]
    Type(#[from] TypeError),

    /// The name does not denote one of the adapter's events.
    #[error("unknown adapter event: {0}")]
    UnknownEvent(String),

    /// The name does not denote an adapter method.
    #[error("unknown adapter method: {0}")]
    UnknownMethod(String),

    /// The method has harness behavior and cannot be called as an inert stub.
    #[error("{0} is implemented by the mock; call it directly")]
    NotInert(String),

    #[error("invalid adapter options: {0}")]
    InvalidOptions(String),
}

/// Result alias for adapter mock operations.
pub type AdapterResult<T> = Result<T, AdapterError>;
