//! Object operations of the adapter mock.
//!
//! Local variants qualify the identifier with the adapter namespace before
//! touching the database; foreign variants pass it through untouched.

use tracing::debug;

use hatch_types::{deep_extend, shallow_assign, ObjectRecord, ObjectType};

use crate::adapter::AdapterMock;
use crate::error::AdapterResult;
use crate::reply::{ExtendReply, SetReply};
use crate::stubs::ObjectMap;

impl AdapterMock {
    /// Read one of this adapter's objects. Absent objects are `None`.
    pub fn get_object(&self, id: &str) -> AdapterResult<Option<ObjectRecord>> {
        self.stubs.get_object.invoke(id.to_string(), |id| {
            let id = self.namespace().qualify(&id);
            debug!(%id, "getObject");
            Ok(self.db.get_object(&id)?)
        })
    }

    /// Store an object under a local identifier, stamping its `_id`.
    pub fn set_object(&self, id: &str, object: ObjectRecord) -> AdapterResult<SetReply> {
        self.stubs
            .set_object
            .invoke((id.to_string(), object), |(id, object)| {
                let id = self.namespace().qualify(&id);
                self.publish_object(id, object)
            })
    }

    /// Like [`set_object`](Self::set_object), but leaves an existing object
    /// untouched.
    pub fn set_object_not_exists(&self, id: &str, object: ObjectRecord) -> AdapterResult<SetReply> {
        self.stubs
            .set_object_not_exists
            .invoke((id.to_string(), object), |(id, object)| {
                let id = self.namespace().qualify(&id);
                if self.db.has_object(&id)? {
                    debug!(%id, "setObjectNotExists: already present");
                    return Ok(SetReply { id });
                }
                self.set_object(&id, object)
            })
    }

    /// Deep-merge `partial` into the existing object (or an empty one) and
    /// publish the result.
    pub fn extend_object(&self, id: &str, partial: ObjectRecord) -> AdapterResult<ExtendReply> {
        self.stubs
            .extend_object
            .invoke((id.to_string(), partial), |(id, partial)| {
                let id = self.namespace().qualify(&id);
                let mut target = self.db.get_object(&id)?.unwrap_or_default().into_map();
                deep_extend(&mut target, partial.as_map());
                self.publish_extended(id, target.into())
            })
    }

    pub fn del_object(&self, id: &str) -> AdapterResult<()> {
        self.stubs.del_object.invoke(id.to_string(), |id| {
            let id = self.namespace().qualify(&id);
            debug!(%id, "delObject");
            self.db.delete_object(&id)?;
            Ok(())
        })
    }

    pub fn get_foreign_object(&self, id: &str) -> AdapterResult<Option<ObjectRecord>> {
        self.stubs
            .get_foreign_object
            .invoke(id.to_string(), |id| Ok(self.db.get_object(&id)?))
    }

    /// All objects matching `pattern`, optionally of one type.
    pub fn get_foreign_objects(
        &self,
        pattern: &str,
        object_type: Option<ObjectType>,
    ) -> AdapterResult<ObjectMap> {
        self.stubs
            .get_foreign_objects
            .invoke((pattern.to_string(), object_type), |(pattern, object_type)| {
                Ok(self.db.get_objects(&pattern, object_type)?)
            })
    }

    pub fn set_foreign_object(&self, id: &str, object: ObjectRecord) -> AdapterResult<SetReply> {
        self.stubs
            .set_foreign_object
            .invoke((id.to_string(), object), |(id, object)| self.publish_object(id, object))
    }

    pub fn set_foreign_object_not_exists(
        &self,
        id: &str,
        object: ObjectRecord,
    ) -> AdapterResult<SetReply> {
        self.stubs
            .set_foreign_object_not_exists
            .invoke((id.to_string(), object), |(id, object)| {
                if self.db.has_object(&id)? {
                    return Ok(SetReply { id });
                }
                self.set_foreign_object(&id, object)
            })
    }

    /// Overwrite the top-level keys of a foreign object with `partial` and
    /// publish the result. Nested objects are replaced, not merged.
    pub fn extend_foreign_object(
        &self,
        id: &str,
        partial: ObjectRecord,
    ) -> AdapterResult<ExtendReply> {
        self.stubs
            .extend_foreign_object
            .invoke((id.to_string(), partial), |(id, partial)| {
                let mut target = self.db.get_object(&id)?.unwrap_or_default().into_map();
                shallow_assign(&mut target, partial.as_map());
                self.publish_extended(id, target.into())
            })
    }

    pub fn del_foreign_object(&self, id: &str) -> AdapterResult<()> {
        self.stubs.del_foreign_object.invoke(id.to_string(), |id| {
            self.db.delete_object(&id)?;
            Ok(())
        })
    }

    /// Every object under this adapter's namespace.
    pub fn get_adapter_objects(&self) -> AdapterResult<ObjectMap> {
        self.stubs.get_adapter_objects.invoke((), |()| {
            Ok(self.db.get_objects(&self.namespace().wildcard(), None)?)
        })
    }

    fn publish_object(&self, id: String, object: ObjectRecord) -> AdapterResult<SetReply> {
        debug!(%id, "publishing object");
        self.db.publish_object(&object.with_id(id.clone()))?;
        Ok(SetReply { id })
    }

    // The merged record keeps whatever `_id` it ended up with; one is
    // stamped only when neither side had it.
    fn publish_extended(
        &self,
        raw_id: String,
        mut target: ObjectRecord,
    ) -> AdapterResult<ExtendReply> {
        if target.id().is_none() {
            target.set_id(raw_id.clone());
        }
        self.db.publish_object(&target)?;
        let id = target.id().unwrap_or(&raw_id).to_string();
        debug!(%id, %raw_id, "object extended");
        Ok(ExtendReply {
            id,
            value: target,
            raw_id,
        })
    }
}
