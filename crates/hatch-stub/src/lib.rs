//! Test-double building blocks for the adapter test harness.
//!
//! - [`Stub`]: records every call and runs either an installed behavior or
//!   the caller's default delegation
//! - [`MockReset`]: the history/behavior reset protocol shared by every mock
//! - [`CallbackStyle`] and [`deliver`]: the callback shape a method offers
//!   next to its `Result` return
//! - [`LoggerMock`]: stubbed adapter logger forwarding to `tracing`

pub mod callback;
pub mod error;
pub mod logger;
pub mod reset;
pub mod stub;

pub use callback::{deliver, CallbackStyle};
pub use error::{StubError, StubResult};
pub use logger::{LogLevel, LoggerMock};
pub use reset::MockReset;
pub use stub::{Behavior, InertStub, Recorder, Stub};
