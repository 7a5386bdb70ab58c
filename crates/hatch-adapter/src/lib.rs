//! # hatch-adapter
//!
//! An in-memory adapter runtime for unit tests.
//!
//! [`AdapterMock`] stands in for a live adapter instance: objects and states
//! go to a [`hatch_store::Database`], local identifiers are qualified with
//! the adapter namespace, lifecycle handlers live in the options the mock
//! was built from, and every method call is recorded so tests can assert on
//! it or replace its behavior.
//!
//! ```
//! use std::sync::Arc;
//! use hatch_adapter::AdapterMock;
//! use hatch_store::MemoryDatabase;
//!
//! let adapter = AdapterMock::with_defaults(Arc::new(MemoryDatabase::new()));
//! let id = adapter.set_state("temperature", 21.5, Some(true)).unwrap();
//! assert_eq!(id, "test.0.temperature");
//! ```

pub mod adapter;
pub mod error;
pub mod events;
pub mod lifecycle;
pub mod method;
pub mod object_ops;
pub mod options;
pub mod reply;
pub mod state_ops;
pub mod stubs;
pub mod terminate;

pub use adapter::{AdapterMock, MOCK_HOST, MOCK_VERSION};
pub use error::{AdapterError, AdapterResult};
pub use events::{handler, AdapterEvent, EventPayload, Handler};
pub use method::{AdapterMethod, IMPLEMENTED_METHODS};
pub use options::{AdapterOptions, SharedOptions};
pub use reply::{ExtendReply, SetReply};
pub use stubs::{AdapterStubs, ObjectMap, SetStateArgs, StateMap};
pub use terminate::{Terminated, NO_REASON};

pub use hatch_stub::{CallbackStyle, MockReset};
