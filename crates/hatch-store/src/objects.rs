//! Stubbed objects client.
//!
//! Adapters reach the objects database directly through `adapter.objects`
//! for a handful of calls. [`ObjectsMock`] offers those calls over the same
//! [`Database`] the adapter mock uses, each behind a [`Stub`].

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use hatch_stub::{MockReset, Stub};
use hatch_types::ObjectRecord;

use crate::error::StoreResult;
use crate::traits::Database;

/// Objects client backed by a [`Database`].
pub struct ObjectsMock {
    db: Arc<dyn Database>,
    get_object: Stub<String, StoreResult<Option<ObjectRecord>>>,
    set_object: Stub<(String, ObjectRecord), StoreResult<()>>,
    del_object: Stub<String, StoreResult<bool>>,
    get_object_list: Stub<String, StoreResult<BTreeMap<String, ObjectRecord>>>,
}

impl ObjectsMock {
    pub fn new(db: Arc<dyn Database>) -> Self {
        Self {
            db,
            get_object: Stub::new("getObject"),
            set_object: Stub::new("setObject"),
            del_object: Stub::new("delObject"),
            get_object_list: Stub::new("getObjectList"),
        }
    }

    pub fn get_object(&self, id: &str) -> StoreResult<Option<ObjectRecord>> {
        self.get_object
            .invoke(id.to_string(), |id| self.db.get_object(&id))
    }

    /// Store `object` under `id`, stamping its `_id`.
    pub fn set_object(&self, id: &str, object: ObjectRecord) -> StoreResult<()> {
        self.set_object
            .invoke((id.to_string(), object), |(id, object)| {
                self.db.publish_object(&object.with_id(id))
            })
    }

    pub fn del_object(&self, id: &str) -> StoreResult<bool> {
        self.del_object
            .invoke(id.to_string(), |id| self.db.delete_object(&id))
    }

    /// Objects whose id matches `pattern`.
    pub fn get_object_list(&self, pattern: &str) -> StoreResult<BTreeMap<String, ObjectRecord>> {
        self.get_object_list
            .invoke(pattern.to_string(), |pattern| self.db.get_objects(&pattern, None))
    }

    pub fn get_object_stub(&self) -> &Stub<String, StoreResult<Option<ObjectRecord>>> {
        &self.get_object
    }

    pub fn set_object_stub(&self) -> &Stub<(String, ObjectRecord), StoreResult<()>> {
        &self.set_object
    }

    pub fn del_object_stub(&self) -> &Stub<String, StoreResult<bool>> {
        &self.del_object
    }

    pub fn get_object_list_stub(
        &self,
    ) -> &Stub<String, StoreResult<BTreeMap<String, ObjectRecord>>> {
        &self.get_object_list
    }
}

impl MockReset for ObjectsMock {
    fn reset_mock_history(&self) {
        self.get_object.reset_mock_history();
        self.set_object.reset_mock_history();
        self.del_object.reset_mock_history();
        self.get_object_list.reset_mock_history();
    }

    fn reset_mock_behavior(&self) {
        self.get_object.reset_mock_behavior();
        self.set_object.reset_mock_behavior();
        self.del_object.reset_mock_behavior();
        self.get_object_list.reset_mock_behavior();
    }
}

impl fmt::Debug for ObjectsMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectsMock")
            .field("get_object", &self.get_object)
            .field("set_object", &self.set_object)
            .field("del_object", &self.del_object)
            .field("get_object_list", &self.get_object_list)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDatabase;

    fn setup() -> (Arc<MemoryDatabase>, ObjectsMock) {
        let db = Arc::new(MemoryDatabase::new());
        let objects = ObjectsMock::new(db.clone());
        (db, objects)
    }

    #[test]
    fn set_then_get_goes_through_database() {
        let (db, objects) = setup();
        objects.set_object("sys.config", ObjectRecord::new()).unwrap();

        assert!(db.has_object("sys.config").unwrap());
        let read = objects.get_object("sys.config").unwrap().unwrap();
        assert_eq!(read.id(), Some("sys.config"));
        assert_eq!(objects.set_object_stub().call_count(), 1);
        assert_eq!(objects.get_object_stub().calls(), vec!["sys.config".to_string()]);
    }

    #[test]
    fn list_and_delete() {
        let (_db, objects) = setup();
        objects.set_object("a.0.x", ObjectRecord::new()).unwrap();
        objects.set_object("a.0.y", ObjectRecord::new()).unwrap();
        objects.set_object("b.0.z", ObjectRecord::new()).unwrap();

        assert_eq!(objects.get_object_list("a.0.*").unwrap().len(), 2);
        assert!(objects.del_object("a.0.x").unwrap());
        assert_eq!(objects.get_object_list("a.0.*").unwrap().len(), 1);
    }

    #[test]
    fn override_and_reset() {
        let (_db, objects) = setup();
        objects.set_object("a.0.x", ObjectRecord::new()).unwrap();
        objects.get_object_stub().returns(Ok(None));
        assert!(objects.get_object("a.0.x").unwrap().is_none());

        objects.reset_mock();
        assert_eq!(objects.get_object_stub().call_count(), 0);
        assert!(objects.get_object("a.0.x").unwrap().is_some());
    }
}
