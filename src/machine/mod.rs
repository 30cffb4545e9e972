//! Event dispatch.
//!
//! # Key Concepts
//!
//! - **Transitions**: one function per exact (state, event kind) key
//! - **Configuration**: the frozen table plus handlers, shared by `Arc`
//! - **Instances**: one current state each, swapped atomically on `handle`
//!
//! A configuration is built once at startup; collaborators create one
//! instance per entity they track (an origin, a connection pool, a service)
//! and feed it events from a single thread of control.

mod config;
mod instance;
mod table;
mod transition;

pub use config::MachineConfig;
pub use instance::StateMachine;
pub use table::TransitionTable;
pub use transition::{Transition, TransitionFn};
