//! In-memory database for adapter tests.
//!
//! [`MemoryDatabase`] keeps objects and states in ordered maps behind
//! `RwLock`s and counts every publish per identifier, so tests can assert
//! how often the adapter actually wrote something.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use tracing::debug;

use hatch_types::{ObjectRecord, ObjectType, State};

use crate::error::{StoreError, StoreResult};
use crate::pattern::Pattern;
use crate::traits::Database;

/// An in-memory implementation of [`Database`].
///
/// Data is lost when the database is dropped.
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    objects: RwLock<BTreeMap<String, ObjectRecord>>,
    states: RwLock<BTreeMap<String, State>>,
    counters: RwLock<PublishCounters>,
}

#[derive(Debug, Default)]
struct PublishCounters {
    objects: HashMap<String, u64>,
    states: HashMap<String, u64>,
}

fn poisoned<E: std::fmt::Display>(e: E) -> StoreError {
    StoreError::LockPoisoned(e.to_string())
}

impl MemoryDatabase {
    /// Create an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed objects without touching the publish counters.
    pub fn with_objects(
        self,
        objects: impl IntoIterator<Item = ObjectRecord>,
    ) -> StoreResult<Self> {
        {
            let mut map = self.objects.write().map_err(poisoned)?;
            for object in objects {
                let id = object.id().ok_or(StoreError::MissingId)?.to_string();
                map.insert(id, object);
            }
        }
        Ok(self)
    }

    /// Seed states without touching the publish counters.
    pub fn with_states<I, K>(self, states: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = (K, State)>,
        K: Into<String>,
    {
        {
            let mut map = self.states.write().map_err(poisoned)?;
            for (id, state) in states {
                map.insert(id.into(), state);
            }
        }
        Ok(self)
    }

    /// How many times an object was published under `id`.
    pub fn object_publish_count(&self, id: &str) -> StoreResult<u64> {
        let counters = self.counters.read().map_err(poisoned)?;
        Ok(counters.objects.get(id).copied().unwrap_or(0))
    }

    /// How many times a state was published under `id`.
    pub fn state_publish_count(&self, id: &str) -> StoreResult<u64> {
        let counters = self.counters.read().map_err(poisoned)?;
        Ok(counters.states.get(id).copied().unwrap_or(0))
    }

    /// Identifiers of all stored objects, sorted.
    pub fn object_ids(&self) -> StoreResult<Vec<String>> {
        Ok(self.objects.read().map_err(poisoned)?.keys().cloned().collect())
    }

    /// Identifiers of all stored states, sorted.
    pub fn state_ids(&self) -> StoreResult<Vec<String>> {
        Ok(self.states.read().map_err(poisoned)?.keys().cloned().collect())
    }

    /// Drop all objects, states and counters.
    pub fn clear(&self) -> StoreResult<()> {
        self.objects.write().map_err(poisoned)?.clear();
        self.states.write().map_err(poisoned)?.clear();
        let mut counters = self.counters.write().map_err(poisoned)?;
        counters.objects.clear();
        counters.states.clear();
        Ok(())
    }
}

impl Database for MemoryDatabase {
    fn get_object(&self, id: &str) -> StoreResult<Option<ObjectRecord>> {
        let objects = self.objects.read().map_err(poisoned)?;
        Ok(objects.get(id).cloned())
    }

    fn publish_object(&self, object: &ObjectRecord) -> StoreResult<()> {
        let id = object.id().ok_or(StoreError::MissingId)?.to_string();
        self.objects
            .write()
            .map_err(poisoned)?
            .insert(id.clone(), object.clone());
        let mut counters = self.counters.write().map_err(poisoned)?;
        *counters.objects.entry(id.clone()).or_insert(0) += 1;
        debug!(%id, "object published");
        Ok(())
    }

    fn delete_object(&self, id: &str) -> StoreResult<bool> {
        let mut objects = self.objects.write().map_err(poisoned)?;
        Ok(objects.remove(id).is_some())
    }

    fn get_objects(
        &self,
        pattern: &str,
        object_type: Option<ObjectType>,
    ) -> StoreResult<BTreeMap<String, ObjectRecord>> {
        let pattern = Pattern::new(pattern);
        let objects = self.objects.read().map_err(poisoned)?;
        Ok(objects
            .iter()
            .filter(|(id, _)| pattern.matches(id))
            .filter(|(_, object)| object_type.map_or(true, |ty| ty.matches(object)))
            .map(|(id, object)| (id.clone(), object.clone()))
            .collect())
    }

    fn get_state(&self, id: &str) -> StoreResult<Option<State>> {
        let states = self.states.read().map_err(poisoned)?;
        Ok(states.get(id).cloned())
    }

    fn publish_state(&self, id: &str, state: &State) -> StoreResult<()> {
        self.states
            .write()
            .map_err(poisoned)?
            .insert(id.to_string(), state.clone());
        let mut counters = self.counters.write().map_err(poisoned)?;
        *counters.states.entry(id.to_string()).or_insert(0) += 1;
        debug!(%id, ack = state.ack, "state published");
        Ok(())
    }

    fn delete_state(&self, id: &str) -> StoreResult<bool> {
        let mut states = self.states.write().map_err(poisoned)?;
        Ok(states.remove(id).is_some())
    }

    fn get_states(&self, pattern: &str) -> StoreResult<BTreeMap<String, State>> {
        let pattern = Pattern::new(pattern);
        let states = self.states.read().map_err(poisoned)?;
        Ok(states
            .iter()
            .filter(|(id, _)| pattern.matches(id))
            .map(|(id, state)| (id.clone(), state.clone()))
            .collect())
    }

    fn has_object(&self, id: &str) -> StoreResult<bool> {
        Ok(self.objects.read().map_err(poisoned)?.contains_key(id))
    }

    fn has_state(&self, id: &str) -> StoreResult<bool> {
        Ok(self.states.read().map_err(poisoned)?.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(id: &str, ty: &str) -> ObjectRecord {
        ObjectRecord::from_value(json!({ "_id": id, "type": ty, "common": {} })).unwrap()
    }

    #[test]
    fn publish_and_read_object() {
        let db = MemoryDatabase::new();
        db.publish_object(&object("test.0.foo", "state")).unwrap();

        let read = db.get_object("test.0.foo").unwrap().unwrap();
        assert_eq!(read.id(), Some("test.0.foo"));
        assert!(db.has_object("test.0.foo").unwrap());
    }

    #[test]
    fn read_missing_object_returns_none() {
        let db = MemoryDatabase::new();
        assert!(db.get_object("test.0.nope").unwrap().is_none());
        assert!(!db.has_object("test.0.nope").unwrap());
    }

    #[test]
    fn publish_without_id_is_rejected() {
        let db = MemoryDatabase::new();
        let err = db.publish_object(&ObjectRecord::new()).unwrap_err();
        assert_eq!(err, StoreError::MissingId);
    }

    #[test]
    fn publish_counts_every_write() {
        let db = MemoryDatabase::new();
        db.publish_state("test.0.a", &State::new(1, false)).unwrap();
        db.publish_state("test.0.a", &State::new(1, false)).unwrap();
        db.publish_object(&object("test.0.a", "state")).unwrap();

        assert_eq!(db.state_publish_count("test.0.a").unwrap(), 2);
        assert_eq!(db.object_publish_count("test.0.a").unwrap(), 1);
        assert_eq!(db.state_publish_count("test.0.b").unwrap(), 0);
    }

    #[test]
    fn delete_reports_existence() {
        let db = MemoryDatabase::new();
        db.publish_state("test.0.a", &State::new(true, true)).unwrap();
        assert!(db.delete_state("test.0.a").unwrap());
        assert!(!db.delete_state("test.0.a").unwrap());
        assert!(!db.delete_object("test.0.a").unwrap());
    }

    #[test]
    fn get_objects_filters_by_pattern_and_type() {
        let db = MemoryDatabase::new()
            .with_objects([
                object("test.0.dev", "device"),
                object("test.0.dev.ch", "channel"),
                object("test.0.dev.ch.on", "state"),
                object("other.0.x", "state"),
            ])
            .unwrap();

        let all = db.get_objects("test.0.*", None).unwrap();
        assert_eq!(all.len(), 3);

        let states = db.get_objects("*", Some(ObjectType::State)).unwrap();
        assert_eq!(
            states.keys().cloned().collect::<Vec<_>>(),
            vec!["other.0.x", "test.0.dev.ch.on"]
        );
    }

    #[test]
    fn seeding_does_not_count_as_publish() {
        let db = MemoryDatabase::new()
            .with_states([("test.0.a", State::new(5, true))])
            .unwrap();
        assert_eq!(db.get_state("test.0.a").unwrap(), Some(State::new(5, true)));
        assert_eq!(db.state_publish_count("test.0.a").unwrap(), 0);
    }

    #[test]
    fn get_states_by_pattern() {
        let db = MemoryDatabase::new()
            .with_states([
                ("test.0.a", State::new(1, false)),
                ("test.0.b", State::new(2, false)),
                ("test.1.a", State::new(3, false)),
            ])
            .unwrap();
        let states = db.get_states("test.0.*").unwrap();
        assert_eq!(states.len(), 2);
        assert_eq!(states["test.0.b"].val, json!(2));
    }

    #[test]
    fn clear_resets_everything() {
        let db = MemoryDatabase::new();
        db.publish_object(&object("test.0.x", "state")).unwrap();
        db.publish_state("test.0.x", &State::new(1, false)).unwrap();
        db.clear().unwrap();

        assert!(db.object_ids().unwrap().is_empty());
        assert!(db.state_ids().unwrap().is_empty());
        assert_eq!(db.object_publish_count("test.0.x").unwrap(), 0);
    }
}
