//! A single entry of the transition table.

use crate::core::{Event, State};
use std::fmt;
use std::sync::Arc;

/// Type alias for transition functions.
///
/// A transition function reads the event payload and names the next state.
/// It must not capture the machine it is registered on.
pub type TransitionFn<S, E> = Arc<dyn Fn(&E) -> S + Send + Sync>;

/// A transition out of `from` taken when an event of kind `on` arrives.
pub struct Transition<S: State, E: Event> {
    pub from: S,
    pub on: E::Kind,
    pub action: TransitionFn<S, E>,
}

impl<S: State, E: Event> Transition<S, E> {
    /// Create a transition from a function of the event.
    pub fn new<F>(from: S, on: E::Kind, action: F) -> Self
    where
        F: Fn(&E) -> S + Send + Sync + 'static,
    {
        Self {
            from,
            on,
            action: Arc::new(action),
        }
    }

    /// Create a transition that always lands in `target`.
    pub fn to(from: S, on: E::Kind, target: S) -> Self {
        Self::new(from, on, move |_: &E| target.clone())
    }

    /// Compute the next state for `event`.
    pub fn apply(&self, event: &E) -> S {
        (self.action)(event)
    }
}

impl<S: State, E: Event> Clone for Transition<S, E> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            on: self.on,
            action: Arc::clone(&self.action),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for Transition<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("on", &self.on)
            .finish_non_exhaustive()
    }
}
