//! Event registration, dispatch and termination.
//!
//! The mock has one slot per [`AdapterEvent`]. The slots are the handler
//! fields of the options the mock was created from, so whatever a test put
//! there is what `on` overwrites and what `emit` calls.

use tracing::{debug, warn};

use crate::adapter::AdapterMock;
use crate::events::{AdapterEvent, EventPayload, Handler};
use crate::terminate::Terminated;

impl AdapterMock {
    /// Bind `handler` to `event`, replacing whatever was there.
    pub fn on(&self, event: AdapterEvent, handler: Handler) -> &Self {
        self.stubs.on.invoke((event, handler), |(event, handler)| {
            debug!(%event, "handler registered");
            self.options.set_handler(event, Some(handler));
        });
        self
    }

    /// Clear the slot of `event`.
    ///
    /// The slot is cleared whichever handler is passed; it does not have to
    /// be the registered one.
    pub fn remove_listener(&self, event: AdapterEvent, handler: Handler) -> &Self {
        self.stubs
            .remove_listener
            .invoke((event, handler), |(event, _)| {
                self.options.set_handler(event, None);
            });
        self
    }

    /// Clear one slot, or all of them with `None`.
    pub fn remove_all_listeners(&self, event: Option<AdapterEvent>) -> &Self {
        self.stubs.remove_all_listeners.invoke(event, |event| match event {
            Some(event) => self.options.set_handler(event, None),
            None => {
                for event in AdapterEvent::ALL {
                    self.options.set_handler(event, None);
                }
            }
        });
        self
    }

    /// The handler currently bound to `event`.
    pub fn handler(&self, event: AdapterEvent) -> Option<Handler> {
        self.options.handler(event)
    }

    /// Bind (or clear) a slot directly, bypassing the `on` recorder.
    pub fn set_handler(&self, event: AdapterEvent, handler: Option<Handler>) {
        self.options.set_handler(event, handler);
    }

    pub fn ready_handler(&self) -> Option<Handler> {
        self.handler(AdapterEvent::Ready)
    }

    pub fn set_ready_handler(&self, handler: Option<Handler>) {
        self.set_handler(AdapterEvent::Ready, handler);
    }

    pub fn message_handler(&self) -> Option<Handler> {
        self.handler(AdapterEvent::Message)
    }

    pub fn set_message_handler(&self, handler: Option<Handler>) {
        self.set_handler(AdapterEvent::Message, handler);
    }

    pub fn object_change_handler(&self) -> Option<Handler> {
        self.handler(AdapterEvent::ObjectChange)
    }

    pub fn set_object_change_handler(&self, handler: Option<Handler>) {
        self.set_handler(AdapterEvent::ObjectChange, handler);
    }

    pub fn state_change_handler(&self) -> Option<Handler> {
        self.handler(AdapterEvent::StateChange)
    }

    pub fn set_state_change_handler(&self, handler: Option<Handler>) {
        self.set_handler(AdapterEvent::StateChange, handler);
    }

    pub fn unload_handler(&self) -> Option<Handler> {
        self.handler(AdapterEvent::Unload)
    }

    pub fn set_unload_handler(&self, handler: Option<Handler>) {
        self.set_handler(AdapterEvent::Unload, handler);
    }

    /// Call the handler bound to the payload's event. Returns `false` when
    /// the slot is empty.
    ///
    /// The options lock is released before the handler runs, so a handler
    /// may register or remove handlers itself.
    pub fn emit(&self, payload: &EventPayload) -> bool {
        let event = payload.event();
        match self.handler(event) {
            Some(handler) => {
                debug!(%event, "dispatching event");
                handler(payload);
                true
            }
            None => false,
        }
    }

    /// Stop the adapter. Never returns.
    ///
    /// The call is recorded (and any behavior installed on the `terminate`
    /// stub runs), then the thread unwinds with a [`Terminated`] payload.
    pub fn terminate(&self, reason: Option<&str>) -> ! {
        self.stubs
            .terminate
            .invoke(reason.map(str::to_string), |_| ());
        let terminated = Terminated::new(reason);
        warn!(namespace = %self.namespace(), reason = %terminated.reason, "adapter terminated");
        std::panic::panic_any(terminated)
    }
}
