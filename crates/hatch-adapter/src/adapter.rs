//! The adapter mock and its construction.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use hatch_store::{Database, ObjectsMock};
use hatch_stub::{deliver, InertStub, LoggerMock, MockReset, Recorder, Stub};
use hatch_types::Namespace;

use crate::error::{AdapterError, AdapterResult};
use crate::method::AdapterMethod;
use crate::options::{AdapterOptions, SharedOptions};
use crate::stubs::AdapterStubs;

/// Host name every mock reports.
pub const MOCK_HOST: &str = "testhost";

/// Version every mock reports.
pub const MOCK_VERSION: &str = "any";

/// In-memory stand-in for an adapter instance.
///
/// Object and state operations are delegated to a [`Database`], local
/// identifiers qualified with the adapter's [`Namespace`] on the way.
/// Lifecycle handlers live in the [`SharedOptions`] the mock was built from.
/// Every implemented method records its calls in a [`Stub`] (see
/// [`AdapterStubs`]); every other adapter method is an inert stub reachable
/// through [`call_inert`](Self::call_inert).
pub struct AdapterMock {
    name: String,
    instance: u32,
    namespace: Namespace,
    config: Value,
    common: Value,
    system_config: Option<Value>,
    adapter_dir: String,
    connected: bool,
    pub(crate) db: Arc<dyn Database>,
    pub(crate) options: SharedOptions,
    pub(crate) stubs: AdapterStubs,
    inert: HashMap<AdapterMethod, InertStub>,
    log: LoggerMock,
    objects: ObjectsMock,
}

impl AdapterMock {
    /// Create a mock over `db`.
    ///
    /// Pass a [`SharedOptions`] clone to keep a live handle on the handler
    /// slots, or plain [`AdapterOptions`] when that is not needed.
    pub fn new(db: Arc<dyn Database>, options: impl Into<SharedOptions>) -> Self {
        let options = options.into();
        let (name, instance, namespace, config) = {
            let opts = options.read();
            let namespace = opts.namespace();
            let config = if opts.config.is_null() {
                json!({})
            } else {
                opts.config.clone()
            };
            (
                namespace.name().to_string(),
                namespace.instance(),
                namespace,
                config,
            )
        };
        let inert = AdapterMethod::inert()
            .map(|method| (method, Stub::new(method.as_str())))
            .collect();

        info!(%namespace, "adapter mock created");
        Self {
            name,
            instance,
            namespace,
            config,
            common: json!({}),
            system_config: None,
            adapter_dir: String::new(),
            connected: true,
            objects: ObjectsMock::new(Arc::clone(&db)),
            db,
            options,
            stubs: AdapterStubs::new(),
            inert,
            log: LoggerMock::new(),
        }
    }

    /// Create a mock with default options (`test.0`).
    pub fn with_defaults(db: Arc<dyn Database>) -> Self {
        Self::new(db, AdapterOptions::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        MOCK_HOST
    }

    pub fn instance(&self) -> u32 {
        self.instance
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Adapter configuration as passed in the options.
    pub fn config(&self) -> &Value {
        &self.config
    }

    pub fn common(&self) -> &Value {
        &self.common
    }

    pub fn system_config(&self) -> Option<&Value> {
        self.system_config.as_ref()
    }

    pub fn adapter_dir(&self) -> &str {
        &self.adapter_dir
    }

    pub fn version(&self) -> &str {
        MOCK_VERSION
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    pub fn log(&self) -> &LoggerMock {
        &self.log
    }

    /// The objects client, sharing this mock's database.
    pub fn objects(&self) -> &ObjectsMock {
        &self.objects
    }

    pub fn database(&self) -> &Arc<dyn Database> {
        &self.db
    }

    /// The live options view backing the handler slots.
    pub fn options(&self) -> &SharedOptions {
        &self.options
    }

    /// Typed stubs of the implemented methods.
    pub fn stubs(&self) -> &AdapterStubs {
        &self.stubs
    }

    /// The stub of an inert method.
    pub fn inert(&self, method: AdapterMethod) -> Option<&InertStub> {
        self.inert.get(&method)
    }

    /// Call an inert method. Answers `None` unless a test configured the
    /// stub.
    pub fn call_inert(
        &self,
        method: AdapterMethod,
        args: Vec<Value>,
    ) -> AdapterResult<Option<Value>> {
        let stub = self
            .inert(method)
            .ok_or_else(|| AdapterError::NotInert(method.as_str().to_string()))?;
        Ok(stub.call(args))
    }

    /// Recorded calls of any method, implemented or inert.
    pub fn call_count(&self, method: AdapterMethod) -> usize {
        match self.stubs.recorder(method) {
            Some(stub) => stub.call_count(),
            None => self.inert(method).map_or(0, |stub| stub.call_count()),
        }
    }

    /// Hand `outcome` of `method` to an error-first callback.
    ///
    /// The callback runs before this returns. Methods without a callback
    /// form are rejected; see [`AdapterMethod::callback_style`].
    ///
    /// `outcome` must come from a call to `method`: the callback shape is
    /// looked up from `method` alone, so pairing it with another method's
    /// result delivers that result under the wrong shape.
    pub fn respond<T, F>(
        &self,
        method: AdapterMethod,
        outcome: AdapterResult<T>,
        callback: F,
    ) -> AdapterResult<()>
    where
        F: FnOnce(Option<AdapterError>, Option<T>),
    {
        deliver(method.as_str(), method.callback_style(), outcome, callback)?;
        Ok(())
    }
}

impl MockReset for AdapterMock {
    fn reset_mock_history(&self) {
        self.stubs.reset_mock_history();
        for stub in self.inert.values() {
            stub.reset_mock_history();
        }
        self.log.reset_mock_history();
        self.objects.reset_mock_history();
    }

    fn reset_mock_behavior(&self) {
        self.stubs.reset_mock_behavior();
        for stub in self.inert.values() {
            stub.reset_mock_behavior();
        }
        self.log.reset_mock_behavior();
        self.objects.reset_mock_behavior();
    }
}

impl fmt::Debug for AdapterMock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterMock")
            .field("namespace", &self.namespace)
            .field("config", &self.config)
            .field("connected", &self.connected)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
