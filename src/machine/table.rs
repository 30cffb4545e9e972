//! Immutable (state, event kind) lookup table.

use crate::core::{Event, State};
use crate::machine::transition::Transition;
use std::collections::HashMap;
use std::fmt;

/// Transition table keyed by exact (state, event kind) pairs.
///
/// Built once from validated transitions and never mutated afterwards.
/// States map to a per-state table of kinds, so a lookup borrows the current
/// state instead of cloning it into a composite key.
pub struct TransitionTable<S: State, E: Event> {
    by_state: HashMap<S, HashMap<E::Kind, Transition<S, E>>>,
    len: usize,
}

impl<S: State, E: Event> TransitionTable<S, E> {
    /// Build a table from transitions whose keys are already known to be unique.
    pub(crate) fn new<I>(transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S, E>>,
    {
        let mut by_state: HashMap<S, HashMap<E::Kind, Transition<S, E>>> = HashMap::new();
        let mut len = 0;
        for transition in transitions {
            by_state
                .entry(transition.from.clone())
                .or_default()
                .insert(transition.on, transition);
            len += 1;
        }
        Self { by_state, len }
    }

    /// Find the transition registered for `state` and `kind`.
    pub fn get(&self, state: &S, kind: E::Kind) -> Option<&Transition<S, E>> {
        self.by_state.get(state)?.get(&kind)
    }

    pub fn contains(&self, state: &S, kind: E::Kind) -> bool {
        self.get(state, kind).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: State, E: Event> fmt::Debug for TransitionTable<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (state, kinds) in &self.by_state {
            map.entry(state, &kinds.keys().collect::<Vec<_>>());
        }
        map.finish()
    }
}
