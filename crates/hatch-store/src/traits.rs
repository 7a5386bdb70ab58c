//! The [`Database`] trait the adapter mock delegates to.

use std::collections::BTreeMap;

use hatch_types::{ObjectRecord, ObjectType, State};

use crate::error::StoreResult;

/// Object and state storage behind an adapter mock.
///
/// Identifiers reaching a database are always fully qualified; namespacing
/// happens before the call. Absent records are `Ok(None)`, never errors.
pub trait Database: Send + Sync {
    /// Read an object by identifier.
    fn get_object(&self, id: &str) -> StoreResult<Option<ObjectRecord>>;

    /// Create or replace an object, keyed by its `_id`.
    fn publish_object(&self, object: &ObjectRecord) -> StoreResult<()>;

    /// Delete an object. Returns `true` if it existed.
    fn delete_object(&self, id: &str) -> StoreResult<bool>;

    /// All objects whose id matches `pattern`, optionally restricted to
    /// one [`ObjectType`].
    fn get_objects(
        &self,
        pattern: &str,
        object_type: Option<ObjectType>,
    ) -> StoreResult<BTreeMap<String, ObjectRecord>>;

    /// Read a state by identifier.
    fn get_state(&self, id: &str) -> StoreResult<Option<State>>;

    /// Create or replace a state.
    fn publish_state(&self, id: &str, state: &State) -> StoreResult<()>;

    /// Delete a state. Returns `true` if it existed.
    fn delete_state(&self, id: &str) -> StoreResult<bool>;

    /// All states whose id matches `pattern`.
    fn get_states(&self, pattern: &str) -> StoreResult<BTreeMap<String, State>>;

    fn has_object(&self, id: &str) -> StoreResult<bool> {
        Ok(self.get_object(id)?.is_some())
    }

    fn has_state(&self, id: &str) -> StoreResult<bool> {
        Ok(self.get_state(id)?.is_some())
    }
}
