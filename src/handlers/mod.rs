//! Extension points of a machine configuration.
//!
//! - Inappropriate-event policies decide the next state when the table has
//!   no entry for (current state, event kind)
//! - State-change listeners observe every `handle` call after the state
//!   has been updated

pub mod inappropriate;
pub mod listener;
pub mod recorder;

pub use inappropriate::{fail_fast, ignore, ignore_and_log, redirect_to, InappropriateEventHandler};
pub use listener::{chain, Chain, LoggingListener, NoopListener, SharedListener, StateChangeListener};
pub use recorder::TransitionRecorder;
