//! Build errors for state machine configurations.

use thiserror::Error;

/// Errors that can occur when building a machine configuration.
///
/// All of them are programming errors in the transition table and are
/// reported before any machine exists.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition from state '{state}' on event kind {kind} is registered more than once")]
    DuplicateTransition { state: String, kind: String },

    #[error("{} configuration errors: {}", .0.len(), describe(.0))]
    Invalid(Vec<BuildError>),
}

fn describe(errors: &[BuildError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
