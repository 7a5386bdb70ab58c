//! Database collaborator for the adapter test harness.
//!
//! The adapter mock never stores anything itself: every object and state
//! operation lands in a [`Database`]. This crate defines that boundary and
//! the in-memory backend tests run against.
//!
//! # Modules
//!
//! - [`error`]: Error types for database operations
//! - [`traits`]: The [`Database`] trait
//! - [`pattern`]: `*` wildcard patterns used by bulk queries
//! - [`memory`]: [`MemoryDatabase`] with per-id publish counters
//! - [`objects`]: [`ObjectsMock`], the stubbed objects client

pub mod error;
pub mod memory;
pub mod objects;
pub mod pattern;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryDatabase;
pub use objects::ObjectsMock;
pub use pattern::Pattern;
pub use traits::Database;
