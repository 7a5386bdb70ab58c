/// Errors from database operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// An object was published without an `_id`.
    #[error("cannot publish object without an _id")]
    MissingId,

    /// A lock guarding the data was poisoned by a panicking writer.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for database operations.
pub type StoreResult<T> = Result<T, StoreError>;
