use std::fmt;

use tracing::warn;

use crate::error::{StubError, StubResult};

/// How a method's outcome is handed to a completion callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallbackStyle {
    /// Error-first: `(error, result)`.
    Normal,
    /// Result only. Errors never reach the callback.
    NoError,
    /// The method has no callback form.
    None,
}

impl CallbackStyle {
    pub fn accepts_callback(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Hand `outcome` to `callback` according to `style`.
///
/// The callback runs inline, before this returns. Under
/// [`CallbackStyle::NoError`] a failed outcome is logged and the callback is
/// not invoked.
pub fn deliver<T, E, F>(
    method: &str,
    style: CallbackStyle,
    outcome: Result<T, E>,
    callback: F,
) -> StubResult<()>
where
    E: fmt::Display,
    F: FnOnce(Option<E>, Option<T>),
{
    match (style, outcome) {
        (CallbackStyle::None, _) => return Err(StubError::NoCallback(method.to_string())),
        (_, Ok(value)) => callback(None, Some(value)),
        (CallbackStyle::Normal, Err(e)) => callback(Some(e), None),
        (CallbackStyle::NoError, Err(e)) => {
            warn!(method, error = %e, "dropping error for result-only callback");
        }
    }
    Ok(())
}
