//! Construction options and the live handler view shared with the mock.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Deserialize;
use serde_json::Value;

use hatch_types::namespace::DEFAULT_ADAPTER_NAME;
use hatch_types::Namespace;

use crate::error::{AdapterError, AdapterResult};
use crate::events::{AdapterEvent, Handler};

/// Options an adapter mock is created from.
///
/// The handler fields double as the mock's event slots: the mock reads and
/// writes them through [`SharedOptions`], so a handler set here is what
/// `on` replaces and what a test sees when it inspects the slot.
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdapterOptions {
    /// Adapter name. Defaults to `"test"`.
    pub name: Option<String>,
    /// Instance number. Defaults to `0`.
    pub instance: Option<u32>,
    /// Adapter configuration, passed through as-is. `null` becomes `{}`.
    pub config: Value,
    #[serde(skip)]
    pub ready: Option<Handler>,
    #[serde(skip)]
    pub message: Option<Handler>,
    #[serde(skip)]
    pub object_change: Option<Handler>,
    #[serde(skip)]
    pub state_change: Option<Handler>,
    #[serde(skip)]
    pub unload: Option<Handler>,
}

impl AdapterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON fixture. Handlers cannot be expressed in
    /// JSON and start out empty.
    pub fn from_json(json: &str) -> AdapterResult<Self> {
        serde_json::from_str(json).map_err(|e| AdapterError::InvalidOptions(e.to_string()))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_instance(mut self, instance: u32) -> Self {
        self.instance = Some(instance);
        self
    }

    pub fn with_config(mut self, config: Value) -> Self {
        self.config = config;
        self
    }

    /// Bind `handler` to `event`.
    pub fn with_handler(mut self, event: AdapterEvent, handler: Handler) -> Self {
        *self.slot_mut(event) = Some(handler);
        self
    }

    /// The namespace these options describe. A missing or empty name
    /// falls back to `"test"`.
    pub fn namespace(&self) -> Namespace {
        Namespace::new(
            self.name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_ADAPTER_NAME),
            self.instance.unwrap_or(0),
        )
    }

    pub fn slot(&self, event: AdapterEvent) -> Option<&Handler> {
        match event {
            AdapterEvent::Ready => self.ready.as_ref(),
            AdapterEvent::Message => self.message.as_ref(),
            AdapterEvent::ObjectChange => self.object_change.as_ref(),
            AdapterEvent::StateChange => self.state_change.as_ref(),
            AdapterEvent::Unload => self.unload.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, event: AdapterEvent) -> &mut Option<Handler> {
        match event {
            AdapterEvent::Ready => &mut self.ready,
            AdapterEvent::Message => &mut self.message,
            AdapterEvent::ObjectChange => &mut self.object_change,
            AdapterEvent::StateChange => &mut self.state_change,
            AdapterEvent::Unload => &mut self.unload,
        }
    }
}

impl fmt::Debug for AdapterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound: Vec<&str> = AdapterEvent::ALL
            .iter()
            .filter(|event| self.slot(**event).is_some())
            .map(AdapterEvent::as_str)
            .collect();
        f.debug_struct("AdapterOptions")
            .field("name", &self.name)
            .field("instance", &self.instance)
            .field("config", &self.config)
            .field("handlers", &bound)
            .finish()
    }
}

/// A live, shared view of [`AdapterOptions`].
///
/// Cloning shares the same options. The adapter mock keeps one clone; a
/// test can keep another and change handlers behind the mock's back.
#[derive(Clone, Debug, Default)]
pub struct SharedOptions(Arc<RwLock<AdapterOptions>>);

impl SharedOptions {
    pub fn new(options: AdapterOptions) -> Self {
        Self(Arc::new(RwLock::new(options)))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, AdapterOptions> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, AdapterOptions> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The handler currently bound to `event`.
    pub fn handler(&self, event: AdapterEvent) -> Option<Handler> {
        self.read().slot(event).cloned()
    }

    /// Replace (or clear, with `None`) the handler bound to `event`.
    pub fn set_handler(&self, event: AdapterEvent, handler: Option<Handler>) {
        *self.write().slot_mut(event) = handler;
    }

    /// Whether both views share the same options.
    pub fn ptr_eq(&self, other: &SharedOptions) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl From<AdapterOptions> for SharedOptions {
    fn from(options: AdapterOptions) -> Self {
        Self::new(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::handler;
    use serde_json::json;

    #[test]
    fn defaults_give_test_namespace() {
        let options = AdapterOptions::new();
        assert_eq!(options.namespace().as_str(), "test.0");
        assert!(options.config.is_null());
    }

    #[test]
    fn builder_sets_namespace() {
        let options = AdapterOptions::new().with_name("hue").with_instance(3);
        assert_eq!(options.namespace().as_str(), "hue.3");
    }

    #[test]
    fn from_json_reads_fields() {
        let options = AdapterOptions::from_json(
            r#"{ "name": "sonos", "instance": 2, "config": { "ip": "10.0.0.5" } }"#,
        )
        .unwrap();
        assert_eq!(options.namespace().as_str(), "sonos.2");
        assert_eq!(options.config, json!({ "ip": "10.0.0.5" }));
        assert!(options.ready.is_none());
    }

    #[test]
    fn empty_name_falls_back_to_default() {
        let parsed = AdapterOptions::from_json(r#"{ "name": "" }"#).unwrap();
        assert_eq!(parsed.namespace().as_str(), "test.0");

        let built = AdapterOptions::new().with_name("").with_instance(4);
        assert_eq!(built.namespace().as_str(), "test.4");
        assert_eq!(built.namespace().name(), "test");
    }

    #[test]
    fn from_json_rejects_bad_input() {
        let err = AdapterOptions::from_json(r#"{ "instance": "zero" }"#).unwrap_err();
        assert!(matches!(err, AdapterError::InvalidOptions(_)));
    }

    #[test]
    fn shared_view_sees_external_writes() {
        let shared = SharedOptions::new(AdapterOptions::new());
        let other = shared.clone();
        let h = handler(|_| {});

        other.write().state_change = Some(h.clone());
        let seen = shared.handler(AdapterEvent::StateChange).unwrap();
        assert!(Arc::ptr_eq(&seen, &h));
        assert!(shared.ptr_eq(&other));
    }

    #[test]
    fn debug_lists_bound_handlers() {
        let options = AdapterOptions::new().with_handler(AdapterEvent::Unload, handler(|_| {}));
        let text = format!("{options:?}");
        assert!(text.contains("unload"));
        assert!(!text.contains("ready"));
    }
}
