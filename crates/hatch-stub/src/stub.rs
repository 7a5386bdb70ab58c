//! The [`Stub`] call recorder.
//!
//! A stub sits in front of one method. Every invocation is recorded, then
//! answered by the installed behavior if a test configured one, otherwise by
//! the default the caller supplies. Stubs without a default (inert stubs)
//! answer `None` until configured.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::reset::MockReset;

/// A behavior installed on a stub.
pub type Behavior<A, R> = Arc<dyn Fn(&A) -> R + Send + Sync>;

/// Stub for methods the harness gives no behavior: JSON arguments in,
/// optional JSON out.
pub type InertStub = Stub<Vec<Value>, Value>;

/// Records calls to a single method and answers them.
pub struct Stub<A, R> {
    name: &'static str,
    state: Mutex<StubState<A, R>>,
}

struct StubState<A, R> {
    calls: Vec<A>,
    behavior: Option<Behavior<A, R>>,
}

impl<A: Clone, R> Stub<A, R> {
    /// Create a stub with no recorded calls and no behavior.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Mutex::new(StubState {
                calls: Vec::new(),
                behavior: None,
            }),
        }
    }

    /// Name of the stubbed method.
    pub fn name(&self) -> &'static str {
        self.name
    }

    // Poisoning is recovered: a terminating adapter unwinds through tests
    // that keep using the same mock.
    fn lock(&self) -> MutexGuard<'_, StubState<A, R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Install a behavior replacing the default.
    pub fn calls_fake(&self, behavior: impl Fn(&A) -> R + Send + Sync + 'static) {
        self.lock().behavior = Some(Arc::new(behavior));
    }

    /// Install a behavior that always answers `value`.
    pub fn returns(&self, value: R)
    where
        R: Clone + Send + Sync + 'static,
    {
        self.calls_fake(move |_| value.clone());
    }

    /// Whether a test installed a behavior.
    pub fn has_behavior(&self) -> bool {
        self.lock().behavior.is_some()
    }

    fn record(&self, args: &A) -> Option<Behavior<A, R>> {
        let mut state = self.lock();
        state.calls.push(args.clone());
        state.behavior.clone()
    }

    /// Record a call, then answer with the installed behavior or `default`.
    ///
    /// The lock is released before either runs, so behaviors may call back
    /// into the same stub.
    pub fn invoke(&self, args: A, default: impl FnOnce(A) -> R) -> R {
        match self.record(&args) {
            Some(behavior) => behavior(&args),
            None => default(args),
        }
    }

    /// Record a call to a stub without default behavior.
    pub fn call(&self, args: A) -> Option<R> {
        self.record(&args).map(|behavior| behavior(&args))
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn was_called(&self) -> bool {
        self.call_count() > 0
    }

    /// Arguments of every recorded call, oldest first.
    pub fn calls(&self) -> Vec<A> {
        self.lock().calls.clone()
    }

    pub fn last_call(&self) -> Option<A> {
        self.lock().calls.last().cloned()
    }

    pub fn called_with(&self, args: &A) -> bool
    where
        A: PartialEq,
    {
        self.lock().calls.iter().any(|call| call == args)
    }
}

/// Type-erased view of a stub, for iterating a mock's methods.
pub trait Recorder: MockReset {
    fn name(&self) -> &'static str;
    fn call_count(&self) -> usize;
    fn has_behavior(&self) -> bool;
}

impl<A: Clone, R> Recorder for Stub<A, R> {
    fn name(&self) -> &'static str {
        Stub::name(self)
    }

    fn call_count(&self) -> usize {
        Stub::call_count(self)
    }

    fn has_behavior(&self) -> bool {
        Stub::has_behavior(self)
    }
}

impl<A: Clone, R> MockReset for Stub<A, R> {
    fn reset_mock_history(&self) {
        self.lock().calls.clear();
    }

    fn reset_mock_behavior(&self) {
        self.lock().behavior = None;
    }
}

impl<A: Clone, R> fmt::Debug for Stub<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Stub")
            .field("name", &self.name)
            .field("calls", &state.calls.len())
            .field("configured", &state.behavior.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn invoke_records_and_runs_default() {
        let stub: Stub<String, usize> = Stub::new("len");
        let n = stub.invoke("abc".into(), |s| s.len());
        assert_eq!(n, 3);
        assert_eq!(stub.call_count(), 1);
        assert_eq!(stub.last_call().as_deref(), Some("abc"));
    }

    #[test]
    fn installed_behavior_replaces_default() {
        let stub: Stub<String, usize> = Stub::new("len");
        stub.returns(99);
        assert_eq!(stub.invoke("abc".into(), |s| s.len()), 99);
        assert!(stub.has_behavior());
    }

    #[test]
    fn calls_fake_sees_arguments() {
        let stub: Stub<(i64, i64), i64> = Stub::new("add");
        stub.calls_fake(|(a, b)| a * b);
        assert_eq!(stub.invoke((3, 4), |(a, b)| a + b), 12);
        assert!(stub.called_with(&(3, 4)));
        assert!(!stub.called_with(&(4, 3)));
    }

    #[test]
    fn inert_stub_answers_none_until_configured() {
        let stub: InertStub = Stub::new("sendTo");
        assert_eq!(stub.call(vec![json!("x")]), None);
        stub.returns(json!({ "ok": true }));
        assert_eq!(stub.call(vec![]), Some(json!({ "ok": true })));
        assert_eq!(stub.calls(), vec![vec![json!("x")], vec![]]);
    }

    #[test]
    fn history_reset_keeps_behavior() {
        let stub: Stub<u8, u8> = Stub::new("id");
        stub.returns(7);
        stub.invoke(1, |x| x);
        stub.reset_mock_history();
        assert!(!stub.was_called());
        assert_eq!(stub.invoke(1, |x| x), 7);
    }

    #[test]
    fn behavior_reset_restores_default_and_keeps_history() {
        let stub: Stub<u8, u8> = Stub::new("id");
        stub.returns(7);
        stub.invoke(1, |x| x);
        stub.reset_mock_behavior();
        assert_eq!(stub.invoke(2, |x| x), 2);
        assert_eq!(stub.calls(), vec![1, 2]);
    }

    #[test]
    fn full_reset() {
        let stub: Stub<u8, u8> = Stub::new("id");
        stub.returns(7);
        stub.invoke(1, |x| x);
        stub.reset_mock();
        assert_eq!(stub.call_count(), 0);
        assert!(!stub.has_behavior());
    }

    #[test]
    fn behavior_may_reenter_the_stub() {
        let stub: Arc<Stub<u8, u8>> = Arc::new(Stub::new("reenter"));
        let inner = Arc::clone(&stub);
        stub.calls_fake(move |x| if *x == 0 { 0 } else { inner.invoke(x - 1, |y| y) });
        assert_eq!(stub.invoke(2, |x| x), 0);
        assert_eq!(stub.call_count(), 3);
    }

    #[test]
    fn recorder_view_matches_stub() {
        let stub: Stub<u8, u8> = Stub::new("getStates");
        stub.invoke(1, |x| x);
        let recorder: &dyn Recorder = &stub;
        assert_eq!(recorder.name(), "getStates");
        assert_eq!(recorder.call_count(), 1);
        recorder.reset_mock_history();
        assert_eq!(stub.call_count(), 0);
    }

    #[test]
    fn debug_reports_counts() {
        let stub: Stub<u8, u8> = Stub::new("getState");
        stub.invoke(1, |x| x);
        let text = format!("{stub:?}");
        assert!(text.contains("getState"));
        assert!(text.contains("calls: 1"));
    }
}
