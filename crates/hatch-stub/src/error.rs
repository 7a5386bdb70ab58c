use thiserror::Error;

/// Errors raised by the stub layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StubError {
    /// The method has no callback form.
    #[error("{0} does not accept a callback")]
    NoCallback(String),
}

/// Result alias for stub operations.
pub type StubResult<T> = Result<T, StubError>;
