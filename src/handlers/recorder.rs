//! Listener that keeps a history of notifications.

use crate::core::{Event, State, StateHistory, StateTransition};
use crate::handlers::listener::StateChangeListener;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Records every notification it receives.
///
/// Clones share one buffer, so a collaborator can register one clone on a
/// configuration and keep another to inspect. Every machine built from that
/// configuration records into the same buffer.
///
/// A recorder from [`new`](Self::new) grows without bound. It is meant for
/// tests and short diagnostic sessions; call [`clear`](Self::clear) to reset
/// it. Long-running processes should use [`bounded`](Self::bounded), which
/// keeps only the most recent notifications.
#[derive(Debug)]
pub struct TransitionRecorder<S: State> {
    transitions: Arc<Mutex<VecDeque<StateTransition<S>>>>,
    capacity: Option<usize>,
}

impl<S: State> Clone for TransitionRecorder<S> {
    fn clone(&self) -> Self {
        Self {
            transitions: Arc::clone(&self.transitions),
            capacity: self.capacity,
        }
    }
}

impl<S: State> Default for TransitionRecorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionRecorder<S> {
    pub fn new() -> Self {
        Self {
            transitions: Arc::new(Mutex::new(VecDeque::new())),
            capacity: None,
        }
    }

    /// Recorder keeping at most `capacity` notifications, dropping the oldest.
    ///
    /// A capacity of zero records nothing.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Snapshot of everything recorded so far, oldest first.
    pub fn history(&self) -> StateHistory<S> {
        StateHistory::from(self.lock().iter().cloned().collect::<Vec<_>>())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn push(&self, transition: StateTransition<S>) {
        let mut buffer = self.lock();
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return;
            }
            while buffer.len() >= capacity {
                buffer.pop_front();
            }
        }
        buffer.push_back(transition);
    }

    // Poison is ignored: the buffer is only ever appended to or cleared.
    fn lock(&self) -> MutexGuard<'_, VecDeque<StateTransition<S>>> {
        self.transitions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: State, E: Event> StateChangeListener<S, E> for TransitionRecorder<S> {
    fn on_state_change(&self, old: &S, new: &S, event: &E) {
        self.push(StateTransition {
            from: old.clone(),
            to: new.clone(),
            event: format!("{event:?}"),
            timestamp: Utc::now(),
        });
    }
}
