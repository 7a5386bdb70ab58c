use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TypeError;

/// Field holding an object's identifier.
pub const ID_FIELD: &str = "_id";

/// Field holding an object's [`ObjectType`].
pub const TYPE_FIELD: &str = "type";

/// An object record as stored by the platform.
///
/// Object records are open JSON objects. The harness only interprets the
/// `_id` and `type` fields; everything else (`common`, `native`, ...) is
/// carried through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectRecord(Map<String, Value>);

impl ObjectRecord {
    /// An empty record with no `_id`.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Convert a JSON value into a record. Only JSON objects are accepted.
    pub fn from_value(value: Value) -> Result<Self, TypeError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(TypeError::NotAnObject(json_kind(&other).to_string())),
        }
    }

    /// The record's `_id`, if it has a string one.
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID_FIELD).and_then(Value::as_str)
    }

    /// Stamp the record's `_id`.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.0.insert(ID_FIELD.to_string(), Value::String(id.into()));
    }

    /// Builder form of [`set_id`](Self::set_id).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// The raw `type` field.
    pub fn object_type(&self) -> Option<&str> {
        self.0.get(TYPE_FIELD).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ObjectRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for ObjectRecord {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl From<ObjectRecord> for Value {
    fn from(record: ObjectRecord) -> Self {
        record.into_value()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Object types known to the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    State,
    Channel,
    Device,
    Folder,
    Enum,
    Adapter,
    Instance,
    Host,
    Meta,
    Config,
    Script,
    User,
    Group,
    Chart,
}

impl ObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::State => "state",
            Self::Channel => "channel",
            Self::Device => "device",
            Self::Folder => "folder",
            Self::Enum => "enum",
            Self::Adapter => "adapter",
            Self::Instance => "instance",
            Self::Host => "host",
            Self::Meta => "meta",
            Self::Config => "config",
            Self::Script => "script",
            Self::User => "user",
            Self::Group => "group",
            Self::Chart => "chart",
        }
    }

    /// Whether `record` carries this type.
    pub fn matches(&self, record: &ObjectRecord) -> bool {
        record.object_type() == Some(self.as_str())
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "state" => Self::State,
            "channel" => Self::Channel,
            "device" => Self::Device,
            "folder" => Self::Folder,
            "enum" => Self::Enum,
            "adapter" => Self::Adapter,
            "instance" => Self::Instance,
            "host" => Self::Host,
            "meta" => Self::Meta,
            "config" => Self::Config,
            "script" => Self::Script,
            "user" => Self::User,
            "group" => Self::Group,
            "chart" => Self::Chart,
            other => return Err(TypeError::UnknownObjectType(other.to_string())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_accepts_objects_only() {
        let record = ObjectRecord::from_value(json!({ "_id": "a.0.b" })).unwrap();
        assert_eq!(record.id(), Some("a.0.b"));

        let err = ObjectRecord::from_value(json!([1, 2])).unwrap_err();
        assert_eq!(err, TypeError::NotAnObject("array".into()));
    }

    #[test]
    fn set_id_overwrites() {
        let mut record = ObjectRecord::new().with_id("first");
        record.set_id("second");
        assert_eq!(record.id(), Some("second"));
    }

    #[test]
    fn non_string_id_is_ignored() {
        let record = ObjectRecord::from_value(json!({ "_id": 5 })).unwrap();
        assert!(record.id().is_none());
    }

    #[test]
    fn object_type_matching() {
        let record = ObjectRecord::from_value(json!({ "type": "channel" })).unwrap();
        assert!(ObjectType::Channel.matches(&record));
        assert!(!ObjectType::State.matches(&record));
    }

    #[test]
    fn object_type_parse_and_display() {
        for ty in [ObjectType::State, ObjectType::Device, ObjectType::Chart] {
            assert_eq!(ty.as_str().parse::<ObjectType>().unwrap(), ty);
            assert_eq!(ty.to_string(), ty.as_str());
        }
        assert!("widget".parse::<ObjectType>().is_err());
    }

    #[test]
    fn serializes_transparently() {
        let record = ObjectRecord::new().with_id("x.0.y");
        assert_eq!(serde_json::to_value(&record).unwrap(), json!({ "_id": "x.0.y" }));
    }
}
