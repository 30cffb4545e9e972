//! Core state machine vocabulary.
//!
//! This module contains the types every other layer is written against:
//! - State definitions via the `State` trait
//! - Event discriminants via the `Event` trait
//! - Immutable transition records
//!
//! Nothing in here holds mutable state or performs I/O.

mod event;
mod history;
mod state;

pub use event::Event;
pub use history::{StateHistory, StateTransition};
pub use state::State;
