//! Builder for constructing state machine configurations.

use crate::builder::error::BuildError;
use crate::builder::options::MachineOptions;
use crate::builder::validation::{self, BuildValidation};
use crate::core::{Event, State};
use crate::handlers::{InappropriateEventHandler, LoggingListener, SharedListener, StateChangeListener};
use crate::machine::{MachineConfig, Transition};
use std::sync::Arc;

/// Builder for machine configurations with a fluent API.
///
/// `build` borrows the builder, so one builder can produce any number of
/// configurations that behave identically.
pub struct StateMachineBuilder<S: State, E: Event> {
    initial: Option<S>,
    transitions: Vec<Transition<S, E>>,
    on_inappropriate: Option<InappropriateEventHandler<S, E>>,
    listener: Option<SharedListener<S, E>>,
}

impl<S: State, E: Event> StateMachineBuilder<S, E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            transitions: Vec::new(),
            on_inappropriate: None,
            listener: None,
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register the transition taken from `state` on events of `kind`.
    ///
    /// Registering the same (state, kind) twice is reported by `build`.
    pub fn transition<F>(mut self, state: S, kind: E::Kind, action: F) -> Self
    where
        F: Fn(&E) -> S + Send + Sync + 'static,
    {
        self.transitions.push(Transition::new(state, kind, action));
        self
    }

    /// Register a transition that always lands in `target`.
    pub fn transition_to(mut self, state: S, kind: E::Kind, target: S) -> Self {
        self.transitions.push(Transition::to(state, kind, target));
        self
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition<S, E>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Decide the next state for events with no registered transition.
    ///
    /// The handler must return a state for every input. See
    /// [`handlers`](crate::handlers) for ready-made policies.
    pub fn on_inappropriate_event<F>(mut self, handler: F) -> Self
    where
        F: Fn(&S, &E) -> S + Send + Sync + 'static,
    {
        self.on_inappropriate = Some(Arc::new(handler));
        self
    }

    /// Use an existing handler, such as one from [`handlers`](crate::handlers).
    pub fn inappropriate_event_handler(mut self, handler: InappropriateEventHandler<S, E>) -> Self {
        self.on_inappropriate = Some(handler);
        self
    }

    /// Set the state-change listener, replacing any previous one.
    pub fn on_state_change<L>(mut self, listener: L) -> Self
    where
        L: StateChangeListener<S, E> + 'static,
    {
        self.listener = Some(Arc::new(listener));
        self
    }

    /// Log every state change under `label`.
    ///
    /// Replaces any previous listener.
    pub fn debug_transitions(self, label: impl Into<String>) -> Self {
        self.on_state_change(LoggingListener::new(label))
    }

    /// Check the configuration, reporting every problem at once.
    pub fn validate(&self) -> BuildValidation {
        validation::check_all(self.initial.as_ref(), &self.transitions)
    }

    /// The options this builder currently describes.
    pub fn options(&self) -> Result<MachineOptions<S, E>, BuildError> {
        validation::into_result(self.validate())?;
        let initial_state = self.initial.clone().ok_or(BuildError::MissingInitialState)?;

        Ok(MachineOptions {
            initial_state,
            transitions: self.transitions.clone(),
            inappropriate_event_handler: self.on_inappropriate.clone(),
            state_change_listener: self.listener.clone(),
        })
    }

    /// Build the configuration.
    /// Returns an error if the initial state is missing or a key is duplicated.
    pub fn build(&self) -> Result<MachineConfig<S, E>, BuildError> {
        MachineConfig::from_options(self.options()?)
    }
}

impl<S: State, E: Event> Default for StateMachineBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, E: Event> Clone for StateMachineBuilder<S, E> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            transitions: self.transitions.clone(),
            on_inappropriate: self.on_inappropriate.clone(),
            listener: self.listener.clone(),
        }
    }
}
