//! Stubs behind the methods the mock implements.
//!
//! Each implemented method records into its own typed [`Stub`]. A test that
//! wants a method to answer differently installs a behavior on it; a
//! behavior reset brings back store delegation.

use std::collections::BTreeMap;

use hatch_stub::{MockReset, Recorder, Stub};
use hatch_types::{ObjectRecord, ObjectType, State, StateInput};

use crate::error::AdapterResult;
use crate::events::{AdapterEvent, Handler};
use crate::method::AdapterMethod;
use crate::reply::{ExtendReply, SetReply};

pub type ObjectMap = BTreeMap<String, ObjectRecord>;
pub type StateMap = BTreeMap<String, State>;

/// Arguments of a state setter: id, payload, separate ack flag.
pub type SetStateArgs = (String, StateInput, Option<bool>);

/// One typed stub per implemented adapter method.
pub struct AdapterStubs {
    pub get_object: Stub<String, AdapterResult<Option<ObjectRecord>>>,
    pub set_object: Stub<(String, ObjectRecord), AdapterResult<SetReply>>,
    pub set_object_not_exists: Stub<(String, ObjectRecord), AdapterResult<SetReply>>,
    pub extend_object: Stub<(String, ObjectRecord), AdapterResult<ExtendReply>>,
    pub del_object: Stub<String, AdapterResult<()>>,
    pub get_foreign_object: Stub<String, AdapterResult<Option<ObjectRecord>>>,
    pub get_foreign_objects: Stub<(String, Option<ObjectType>), AdapterResult<ObjectMap>>,
    pub set_foreign_object: Stub<(String, ObjectRecord), AdapterResult<SetReply>>,
    pub set_foreign_object_not_exists: Stub<(String, ObjectRecord), AdapterResult<SetReply>>,
    pub extend_foreign_object: Stub<(String, ObjectRecord), AdapterResult<ExtendReply>>,
    pub del_foreign_object: Stub<String, AdapterResult<()>>,
    pub get_adapter_objects: Stub<(), AdapterResult<ObjectMap>>,
    pub get_state: Stub<String, AdapterResult<Option<State>>>,
    pub get_states: Stub<String, AdapterResult<StateMap>>,
    pub set_state: Stub<SetStateArgs, AdapterResult<String>>,
    pub set_state_changed: Stub<SetStateArgs, AdapterResult<String>>,
    pub del_state: Stub<String, AdapterResult<()>>,
    pub get_foreign_state: Stub<String, AdapterResult<Option<State>>>,
    pub get_foreign_states: Stub<String, AdapterResult<StateMap>>,
    pub set_foreign_state: Stub<SetStateArgs, AdapterResult<String>>,
    pub set_foreign_state_changed: Stub<SetStateArgs, AdapterResult<String>>,
    pub del_foreign_state: Stub<String, AdapterResult<()>>,
    pub on: Stub<(AdapterEvent, Handler), ()>,
    pub remove_listener: Stub<(AdapterEvent, Handler), ()>,
    pub remove_all_listeners: Stub<Option<AdapterEvent>, ()>,
    pub terminate: Stub<Option<String>, ()>,
}

impl AdapterStubs {
    pub fn new() -> Self {
        use AdapterMethod as M;
        Self {
            get_object: Stub::new(M::GetObject.as_str()),
            set_object: Stub::new(M::SetObject.as_str()),
            set_object_not_exists: Stub::new(M::SetObjectNotExists.as_str()),
            extend_object: Stub::new(M::ExtendObject.as_str()),
            del_object: Stub::new(M::DelObject.as_str()),
            get_foreign_object: Stub::new(M::GetForeignObject.as_str()),
            get_foreign_objects: Stub::new(M::GetForeignObjects.as_str()),
            set_foreign_object: Stub::new(M::SetForeignObject.as_str()),
            set_foreign_object_not_exists: Stub::new(M::SetForeignObjectNotExists.as_str()),
            extend_foreign_object: Stub::new(M::ExtendForeignObject.as_str()),
            del_foreign_object: Stub::new(M::DelForeignObject.as_str()),
            get_adapter_objects: Stub::new(M::GetAdapterObjects.as_str()),
            get_state: Stub::new(M::GetState.as_str()),
            get_states: Stub::new(M::GetStates.as_str()),
            set_state: Stub::new(M::SetState.as_str()),
            set_state_changed: Stub::new(M::SetStateChanged.as_str()),
            del_state: Stub::new(M::DelState.as_str()),
            get_foreign_state: Stub::new(M::GetForeignState.as_str()),
            get_foreign_states: Stub::new(M::GetForeignStates.as_str()),
            set_foreign_state: Stub::new(M::SetForeignState.as_str()),
            set_foreign_state_changed: Stub::new(M::SetForeignStateChanged.as_str()),
            del_foreign_state: Stub::new(M::DelForeignState.as_str()),
            on: Stub::new(M::On.as_str()),
            remove_listener: Stub::new(M::RemoveListener.as_str()),
            remove_all_listeners: Stub::new(M::RemoveAllListeners.as_str()),
            terminate: Stub::new(M::Terminate.as_str()),
        }
    }

    /// Every stub, type-erased.
    pub fn all(&self) -> [&dyn Recorder; 26] {
        [
            &self.get_object,
            &self.set_object,
            &self.set_object_not_exists,
            &self.extend_object,
            &self.del_object,
            &self.get_foreign_object,
            &self.get_foreign_objects,
            &self.set_foreign_object,
            &self.set_foreign_object_not_exists,
            &self.extend_foreign_object,
            &self.del_foreign_object,
            &self.get_adapter_objects,
            &self.get_state,
            &self.get_states,
            &self.set_state,
            &self.set_state_changed,
            &self.del_state,
            &self.get_foreign_state,
            &self.get_foreign_states,
            &self.set_foreign_state,
            &self.set_foreign_state_changed,
            &self.del_foreign_state,
            &self.on,
            &self.remove_listener,
            &self.remove_all_listeners,
            &self.terminate,
        ]
    }

    /// The stub recording `method`, if the method is implemented.
    pub fn recorder(&self, method: AdapterMethod) -> Option<&dyn Recorder> {
        self.all()
            .into_iter()
            .find(|stub| stub.name() == method.as_str())
    }
}

impl Default for AdapterStubs {
    fn default() -> Self {
        Self::new()
    }
}

impl MockReset for AdapterStubs {
    fn reset_mock_history(&self) {
        for stub in self.all() {
            stub.reset_mock_history();
        }
    }

    fn reset_mock_behavior(&self) {
        for stub in self.all() {
            stub.reset_mock_behavior();
        }
    }
}
