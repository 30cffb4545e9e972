//! Immutable machine configuration shared by many instances.

use crate::builder::validation;
use crate::builder::{BuildError, MachineOptions};
use crate::core::{Event, State};
use crate::handlers::{ignore_and_log, InappropriateEventHandler, NoopListener, SharedListener};
use crate::machine::instance::StateMachine;
use crate::machine::table::TransitionTable;
use std::fmt;
use std::sync::Arc;

/// Validated initial state, transition table, and handlers.
///
/// A configuration is created once and acts as a factory: every call to
/// [`new_machine`](Self::new_machine) yields an independent instance that
/// reads this configuration without copying it. Cloning is an `Arc` clone.
pub struct MachineConfig<S: State, E: Event> {
    inner: Arc<ConfigInner<S, E>>,
}

struct ConfigInner<S: State, E: Event> {
    initial: S,
    table: TransitionTable<S, E>,
    on_inappropriate: InappropriateEventHandler<S, E>,
    listener: SharedListener<S, E>,
}

impl<S: State, E: Event> MachineConfig<S, E> {
    /// Validate options and freeze them into a configuration.
    ///
    /// Fails if two transitions share a (state, event kind) key. Unset
    /// handlers fall back to [`ignore_and_log`] and [`NoopListener`].
    pub fn from_options(options: MachineOptions<S, E>) -> Result<Self, BuildError> {
        validation::into_result(validation::check_unique_keys(&options.transitions))?;

        let MachineOptions {
            initial_state,
            transitions,
            inappropriate_event_handler,
            state_change_listener,
        } = options;

        Ok(Self {
            inner: Arc::new(ConfigInner {
                initial: initial_state,
                table: TransitionTable::new(transitions),
                on_inappropriate: inappropriate_event_handler.unwrap_or_else(ignore_and_log),
                listener: state_change_listener
                    .unwrap_or_else(|| Arc::new(NoopListener) as SharedListener<S, E>),
            }),
        })
    }

    /// Create a machine in the initial state.
    pub fn new_machine(&self) -> StateMachine<S, E> {
        StateMachine::new(self.clone())
    }

    pub fn initial_state(&self) -> &S {
        &self.inner.initial
    }

    pub fn has_transition(&self, state: &S, kind: E::Kind) -> bool {
        self.inner.table.contains(state, kind)
    }

    pub fn transition_count(&self) -> usize {
        self.inner.table.len()
    }

    pub fn table(&self) -> &TransitionTable<S, E> {
        &self.inner.table
    }

    /// Next state for `event` in `current`: the registered transition if
    /// there is one, the inappropriate-event handler otherwise.
    pub(crate) fn next_state(&self, current: &S, event: &E) -> S {
        match self.inner.table.get(current, event.kind()) {
            Some(transition) => transition.apply(event),
            None => (self.inner.on_inappropriate)(current, event),
        }
    }

    pub(crate) fn notify(&self, old: &S, new: &S, event: &E) {
        self.inner.listener.on_state_change(old, new, event);
    }
}

impl<S: State, E: Event> Clone for MachineConfig<S, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for MachineConfig<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineConfig")
            .field("initial", &self.inner.initial)
            .field("table", &self.inner.table)
            .finish_non_exhaustive()
    }
}
