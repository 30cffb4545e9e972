//! The recognized configuration options of a state machine.

use crate::core::{Event, State};
use crate::handlers::{InappropriateEventHandler, SharedListener};
use crate::machine::Transition;
use std::fmt;

/// Everything a [`MachineConfig`](crate::machine::MachineConfig) is made of.
///
/// The initial state is required by construction. Unset handlers fall back
/// to [`ignore_and_log`](crate::handlers::ignore_and_log) and
/// [`NoopListener`](crate::handlers::NoopListener).
///
/// # Example
///
/// ```rust
/// use turnstile::builder::MachineOptions;
/// use turnstile::machine::{MachineConfig, Transition};
/// use turnstile::{event_enum, state_enum};
///
/// state_enum! {
///     enum Light {
///         Off,
///         On,
///     }
/// }
///
/// event_enum! {
///     enum Switch => SwitchKind {
///         Flip,
///     }
/// }
///
/// let mut options = MachineOptions::new(Light::Off);
/// options.transitions.push(Transition::to(Light::Off, SwitchKind::Flip, Light::On));
/// options.transitions.push(Transition::to(Light::On, SwitchKind::Flip, Light::Off));
///
/// let config: MachineConfig<Light, Switch> = MachineConfig::from_options(options).unwrap();
/// let machine = config.new_machine();
/// machine.handle(Switch::Flip);
/// assert_eq!(machine.current_state(), Light::On);
/// ```
pub struct MachineOptions<S: State, E: Event> {
    pub initial_state: S,
    pub transitions: Vec<Transition<S, E>>,
    pub inappropriate_event_handler: Option<InappropriateEventHandler<S, E>>,
    pub state_change_listener: Option<SharedListener<S, E>>,
}

impl<S: State, E: Event> MachineOptions<S, E> {
    /// Options with no transitions and default handlers.
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            inappropriate_event_handler: None,
            state_change_listener: None,
        }
    }
}

impl<S: State, E: Event> Clone for MachineOptions<S, E> {
    fn clone(&self) -> Self {
        Self {
            initial_state: self.initial_state.clone(),
            transitions: self.transitions.clone(),
            inappropriate_event_handler: self.inappropriate_event_handler.clone(),
            state_change_listener: self.state_change_listener.clone(),
        }
    }
}

impl<S: State, E: Event> fmt::Debug for MachineOptions<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MachineOptions")
            .field("initial_state", &self.initial_state)
            .field("transitions", &self.transitions)
            .field(
                "inappropriate_event_handler",
                &self.inappropriate_event_handler.is_some(),
            )
            .field("state_change_listener", &self.state_change_listener.is_some())
            .finish()
    }
}
