//! The unwind payload raised by `terminate`.

use std::any::Any;

/// Reason reported when `terminate` is called without one.
pub const NO_REASON: &str = "no reason given!";

/// Raised (as a panic payload) when an adapter terminates.
///
/// Tests catch it with `std::panic::catch_unwind` and inspect it with
/// [`Terminated::from_panic`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Terminated {
    pub reason: String,
    message: String,
}

impl Terminated {
    /// Build the payload for `terminate(reason)`. An empty reason counts
    /// as none.
    pub fn new(reason: Option<&str>) -> Self {
        match reason.filter(|r| !r.is_empty()) {
            Some(reason) => Self {
                reason: reason.to_string(),
                message: format!("Adapter.terminate was called with reason: \"{reason}\"!"),
            },
            None => Self {
                reason: NO_REASON.to_string(),
                message: "Adapter.terminate was called!".to_string(),
            },
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Recover the payload from a caught panic.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Option<&Terminated> {
        payload.downcast_ref::<Terminated>()
    }
}
