//! Foundation types for the adapter test harness.
//!
//! Every other `hatch` crate depends on `hatch-types`. The types here model
//! the data an adapter exchanges with its host platform: the namespace the
//! adapter instance lives under, object records, and state records.
//!
//! # Key Types
//!
//! - [`Namespace`]: `"<name>.<instance>"` prefix scoping local identifiers
//! - [`ObjectRecord`]: JSON object carrying at least an `_id`
//! - [`ObjectType`]: the `type` field vocabulary of object records
//! - [`State`]: `{ val, ack }` state record
//! - [`StateInput`]: bare value or structured state passed to setters

pub mod error;
pub mod merge;
pub mod namespace;
pub mod object;
pub mod state;

pub use error::TypeError;
pub use merge::{deep_extend, shallow_assign};
pub use namespace::Namespace;
pub use object::{ObjectRecord, ObjectType};
pub use state::{is_truthy, State, StateInput};
