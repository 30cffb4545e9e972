//! Build-time checks over a transition table.
//!
//! Checks return a `Validation` so every problem in a table is reported in
//! one pass instead of one per build attempt.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::machine::Transition;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for the outcome of a build-time check.
pub type BuildValidation = Validation<(), NonEmptyVec<BuildError>>;

/// Fails when no initial state was given.
pub(crate) fn check_initial<S: State>(initial: Option<&S>) -> BuildValidation {
    match initial {
        Some(_) => Validation::success(()),
        None => Validation::fail(BuildError::MissingInitialState),
    }
}

/// Fails once for every (state, event kind) key registered more than once.
pub(crate) fn check_unique_keys<S: State, E: Event>(
    transitions: &[Transition<S, E>],
) -> BuildValidation {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut checks: Vec<BuildValidation> = Vec::new();

    for transition in transitions {
        let key = (&transition.from, transition.on);
        if seen.insert(key) {
            continue;
        }
        if reported.insert(key) {
            checks.push(Validation::fail(BuildError::DuplicateTransition {
                state: transition.from.name().to_string(),
                kind: format!("{:?}", transition.on),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Run every check, accumulating all failures.
pub(crate) fn check_all<S: State, E: Event>(
    initial: Option<&S>,
    transitions: &[Transition<S, E>],
) -> BuildValidation {
    Validation::all_vec(vec![
        check_initial(initial),
        check_unique_keys(transitions),
    ])
    .map(|_| ())
}

/// Collapse a validation into a `Result`.
///
/// A single failure is returned as is; several are wrapped in
/// [`BuildError::Invalid`].
pub(crate) fn into_result(validation: BuildValidation) -> Result<(), BuildError> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => {
            let mut errors: Vec<BuildError> = errors.iter().cloned().collect();
            if errors.len() == 1 {
                Err(errors.remove(0))
            } else {
                Err(BuildError::Invalid(errors))
            }
        }
    }
}
