//! Policies for events that have no transition from the current state.
//!
//! Every policy is total: it returns a state for any (state, event) pair,
//! including event kinds added after the table was written.

use crate::core::{Event, State};
use std::sync::Arc;

/// Type alias for inappropriate-event handlers.
///
/// Called with the current state and the event; returns the next state.
pub type InappropriateEventHandler<S, E> = Arc<dyn Fn(&S, &E) -> S + Send + Sync>;

/// Stay in the current state and emit a warning.
///
/// This is the handler a configuration gets when none is supplied.
pub fn ignore_and_log<S: State, E: Event>() -> InappropriateEventHandler<S, E> {
    Arc::new(|state: &S, event: &E| {
        tracing::warn!(
            state = state.name(),
            kind = ?event.kind(),
            event = ?event,
            "Inappropriate event ignored: no transition from {} on {:?}",
            state.name(),
            event.kind()
        );
        state.clone()
    })
}

/// Stay in the current state without logging.
///
/// Suited to sources that legitimately repeat events, such as a health check
/// reporting the same failure twice.
pub fn ignore<S: State, E: Event>() -> InappropriateEventHandler<S, E> {
    Arc::new(|state: &S, _event: &E| state.clone())
}

/// Move to `target` whenever an inappropriate event arrives.
pub fn redirect_to<S: State, E: Event>(target: S) -> InappropriateEventHandler<S, E> {
    Arc::new(move |state: &S, event: &E| {
        tracing::warn!(
            state = state.name(),
            target = target.name(),
            kind = ?event.kind(),
            "Inappropriate event {:?} in state {}, moving to {}",
            event,
            state.name(),
            target.name()
        );
        target.clone()
    })
}

/// Panic on any inappropriate event.
///
/// The panic propagates out of `handle` to the caller; the machine's state is
/// left as it was before the event.
pub fn fail_fast<S: State, E: Event>() -> InappropriateEventHandler<S, E> {
    Arc::new(|state: &S, event: &E| -> S {
        tracing::error!(
            state = state.name(),
            kind = ?event.kind(),
            "Inappropriate event {:?} in state {}",
            event,
            state.name()
        );
        panic!(
            "no transition from state '{}' on event {:?}",
            state.name(),
            event
        )
    })
}
