//! A running state machine instance.

use crate::core::{Event, State};
use crate::machine::config::MachineConfig;
use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;

/// State machine holding one current state and dispatching events.
///
/// # Single writer
///
/// [`handle`](Self::handle) performs an unsynchronized read-modify-write of
/// the current state. Only one thread of control may call it on a given
/// instance at a time: confine the instance to one task or event loop, or
/// serialize calls with a lock owned by the caller. Two concurrent `handle`
/// calls race, and one update can be lost.
///
/// [`current_state`](Self::current_state) may be called from any thread at
/// any time. It never blocks and always returns either the state before or
/// the state after a concurrent `handle`, never anything in between.
pub struct StateMachine<S: State, E: Event> {
    config: MachineConfig<S, E>,
    current: ArcSwap<S>,
}

impl<S: State, E: Event> StateMachine<S, E> {
    pub(crate) fn new(config: MachineConfig<S, E>) -> Self {
        let initial = config.initial_state().clone();
        Self {
            config,
            current: ArcSwap::from_pointee(initial),
        }
    }

    /// Get current state (lock-free)
    pub fn current_state(&self) -> S {
        (**self.current.load()).clone()
    }

    /// Check the current state without cloning it.
    pub fn is_in(&self, state: &S) -> bool {
        **self.current.load() == *state
    }

    /// Dispatch one event.
    ///
    /// Looks up the transition for (current state, event kind), falling back
    /// to the inappropriate-event handler, stores the resulting state, then
    /// notifies the listener with the old state, the new state and the event.
    /// A listener that calls back into the machine sees the new state.
    ///
    /// Must not be called concurrently on the same instance; see the
    /// type-level docs.
    ///
    /// # Panics
    ///
    /// Panics raised by the transition function or the inappropriate-event
    /// handler propagate before anything is stored, leaving the state as it
    /// was. Panics raised by the listener propagate after the new state has
    /// been stored.
    pub fn handle(&self, event: E) {
        let old = self.current.load_full();
        let new = Arc::new(self.config.next_state(&old, &event));
        self.current.store(Arc::clone(&new));
        self.config.notify(&old, &new, &event);
    }

    /// The configuration this machine was created from.
    pub fn config(&self) -> &MachineConfig<S, E> {
        &self.config
    }
}

impl<S: State, E: Event> fmt::Debug for StateMachine<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &**self.current.load())
            .finish_non_exhaustive()
    }
}
