use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde_json::Value;

use hatch_types::{ObjectRecord, State};

use crate::error::AdapterError;

/// The lifecycle events an adapter can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AdapterEvent {
    Ready,
    Message,
    ObjectChange,
    StateChange,
    Unload,
}

impl AdapterEvent {
    pub const ALL: [AdapterEvent; 5] = [
        AdapterEvent::Ready,
        AdapterEvent::Message,
        AdapterEvent::ObjectChange,
        AdapterEvent::StateChange,
        AdapterEvent::Unload,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Message => "message",
            Self::ObjectChange => "objectChange",
            Self::StateChange => "stateChange",
            Self::Unload => "unload",
        }
    }
}

impl fmt::Display for AdapterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdapterEvent {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| AdapterError::UnknownEvent(s.to_string()))
    }
}

/// What a handler receives when its event fires.
#[derive(Clone, Debug, PartialEq)]
pub enum EventPayload {
    Ready,
    Message(Value),
    ObjectChange {
        id: String,
        object: Option<ObjectRecord>,
    },
    StateChange {
        id: String,
        state: Option<State>,
    },
    Unload,
}

impl EventPayload {
    /// The event this payload belongs to.
    pub fn event(&self) -> AdapterEvent {
        match self {
            Self::Ready => AdapterEvent::Ready,
            Self::Message(_) => AdapterEvent::Message,
            Self::ObjectChange { .. } => AdapterEvent::ObjectChange,
            Self::StateChange { .. } => AdapterEvent::StateChange,
            Self::Unload => AdapterEvent::Unload,
        }
    }
}

/// An event handler. Handlers are compared by identity (`Arc::ptr_eq`).
pub type Handler = Arc<dyn Fn(&EventPayload) + Send + Sync>;

/// Wrap a closure as a [`Handler`].
pub fn handler(f: impl Fn(&EventPayload) + Send + Sync + 'static) -> Handler {
    Arc::new(f)
}
