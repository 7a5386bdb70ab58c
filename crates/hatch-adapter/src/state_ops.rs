//! State operations of the adapter mock.

use tracing::debug;

use hatch_types::{State, StateInput};

use crate::adapter::AdapterMock;
use crate::error::AdapterResult;
use crate::stubs::StateMap;

impl AdapterMock {
    /// Write a state under a local identifier. Returns the qualified id.
    ///
    /// `state` is either a bare value, acknowledged by `ack` (default
    /// `false`), or a structured `{ val, ack }` whose own flag wins.
    pub fn set_state(
        &self,
        id: &str,
        state: impl Into<StateInput>,
        ack: Option<bool>,
    ) -> AdapterResult<String> {
        self.stubs
            .set_state
            .invoke((id.to_string(), state.into(), ack), |(id, input, ack)| {
                let id = self.namespace().qualify(&id);
                self.publish_state(id, input.into_state(ack))
            })
    }

    /// Like [`set_state`](Self::set_state), but skips the write when the
    /// stored value already equals the new one.
    pub fn set_state_changed(
        &self,
        id: &str,
        state: impl Into<StateInput>,
        ack: Option<bool>,
    ) -> AdapterResult<String> {
        self.stubs
            .set_state_changed
            .invoke((id.to_string(), state.into(), ack), |(id, input, ack)| {
                let id = self.namespace().qualify(&id);
                self.publish_state_if_changed(id, input.into_state(ack))
            })
    }

    pub fn set_foreign_state(
        &self,
        id: &str,
        state: impl Into<StateInput>,
        ack: Option<bool>,
    ) -> AdapterResult<String> {
        self.stubs
            .set_foreign_state
            .invoke((id.to_string(), state.into(), ack), |(id, input, ack)| {
                self.publish_state(id, input.into_state(ack))
            })
    }

    pub fn set_foreign_state_changed(
        &self,
        id: &str,
        state: impl Into<StateInput>,
        ack: Option<bool>,
    ) -> AdapterResult<String> {
        self.stubs
            .set_foreign_state_changed
            .invoke((id.to_string(), state.into(), ack), |(id, input, ack)| {
                self.publish_state_if_changed(id, input.into_state(ack))
            })
    }

    /// Read one of this adapter's states. Absent states are `None`.
    pub fn get_state(&self, id: &str) -> AdapterResult<Option<State>> {
        self.stubs.get_state.invoke(id.to_string(), |id| {
            let id = self.namespace().qualify(&id);
            Ok(self.db.get_state(&id)?)
        })
    }

    /// States matching a pattern under this adapter's namespace.
    pub fn get_states(&self, pattern: &str) -> AdapterResult<StateMap> {
        self.stubs.get_states.invoke(pattern.to_string(), |pattern| {
            let pattern = self.namespace().qualify(&pattern);
            Ok(self.db.get_states(&pattern)?)
        })
    }

    pub fn get_foreign_state(&self, id: &str) -> AdapterResult<Option<State>> {
        self.stubs
            .get_foreign_state
            .invoke(id.to_string(), |id| Ok(self.db.get_state(&id)?))
    }

    pub fn get_foreign_states(&self, pattern: &str) -> AdapterResult<StateMap> {
        self.stubs
            .get_foreign_states
            .invoke(pattern.to_string(), |pattern| Ok(self.db.get_states(&pattern)?))
    }

    pub fn del_state(&self, id: &str) -> AdapterResult<()> {
        self.stubs.del_state.invoke(id.to_string(), |id| {
            let id = self.namespace().qualify(&id);
            debug!(%id, "delState");
            self.db.delete_state(&id)?;
            Ok(())
        })
    }

    pub fn del_foreign_state(&self, id: &str) -> AdapterResult<()> {
        self.stubs.del_foreign_state.invoke(id.to_string(), |id| {
            self.db.delete_state(&id)?;
            Ok(())
        })
    }

    fn publish_state(&self, id: String, state: State) -> AdapterResult<String> {
        debug!(%id, val = %state.val, ack = state.ack, "publishing state");
        self.db.publish_state(&id, &state)?;
        Ok(id)
    }

    fn publish_state_if_changed(&self, id: String, state: State) -> AdapterResult<String> {
        match self.db.get_state(&id)? {
            Some(current) if current.holds(&state.val) => {
                debug!(%id, "state unchanged");
                Ok(id)
            }
            _ => self.publish_state(id, state),
        }
    }
}
