//! Turnstile: an event-driven finite state machine engine
//!
//! Turnstile models the lifecycle of long-lived components in a proxy:
//! origin health, connection-pool occupancy, service start/stop. Each of those
//! owns a small state machine and feeds it events from its I/O threads.
//!
//! # Core Concepts
//!
//! - **State**: comparable, hashable value via the `State` trait
//! - **Event**: tagged value whose kind (discriminant) selects the transition
//! - **Configuration**: validated, immutable transition table plus handlers,
//!   shared by every machine created from it
//! - **Machine**: one current state, replaced atomically by `handle`
//!
//! Dispatch is synchronous and lock-free. Each machine supports a single
//! writer; reads of the current state are safe from any thread.
//!
//! # Example
//!
//! ```rust
//! use turnstile::builder::StateMachineBuilder;
//! use turnstile::handlers::TransitionRecorder;
//! use turnstile::{event_enum, state_enum};
//!
//! state_enum! {
//!     enum Service {
//!         Idle,
//!         Running,
//!     }
//! }
//!
//! event_enum! {
//!     enum Command => CommandKind {
//!         Start,
//!         Stop,
//!     }
//! }
//!
//! let recorder = TransitionRecorder::new();
//! let config = StateMachineBuilder::<Service, Command>::new()
//!     .initial(Service::Idle)
//!     .transition_to(Service::Idle, CommandKind::Start, Service::Running)
//!     .transition_to(Service::Running, CommandKind::Stop, Service::Idle)
//!     .on_state_change(recorder.clone())
//!     .build()
//!     .unwrap();
//!
//! let machine = config.new_machine();
//! machine.handle(Command::Start);
//! machine.handle(Command::Stop);
//! machine.handle(Command::Stop); // no transition: stays Idle
//!
//! assert_eq!(machine.current_state(), Service::Idle);
//! assert_eq!(recorder.len(), 3);
//! assert_eq!(recorder.history().self_transitions(), 1);
//! ```

pub mod builder;
pub mod core;
pub mod handlers;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, MachineOptions, StateMachineBuilder};
pub use crate::core::{Event, State, StateHistory, StateTransition};
pub use crate::handlers::{InappropriateEventHandler, StateChangeListener};
pub use crate::machine::{MachineConfig, StateMachine, Transition};
