//! Builder API for machine configurations.
//!
//! Two ways in, one validated result:
//! - [`StateMachineBuilder`], a fluent builder that can be built repeatedly
//! - [`MachineOptions`], a plain struct passed to
//!   [`MachineConfig::from_options`](crate::machine::MachineConfig::from_options)
//!
//! The [`state_enum!`](crate::state_enum) and [`event_enum!`](crate::event_enum)
//! macros generate the state and event types.

pub mod error;
pub mod machine;
pub mod macros;
pub mod options;
pub mod validation;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use options::MachineOptions;
pub use validation::BuildValidation;
