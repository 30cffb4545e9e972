//! Core State trait for state machine states.
//!
//! States are opaque values the engine compares and hashes. They are never
//! mutated in place, only replaced as a whole by a transition.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States key the transition table together with an event kind, so they must
/// have well-defined equality and hashing.
///
/// # Required Traits
///
/// - `Clone`: the current state is handed out by value
/// - `Eq` + `Hash`: states are transition-table keys
/// - `Debug`: states appear in diagnostics
/// - `Send` + `Sync`: a configuration is shared across threads
///
/// # Example
///
/// ```rust
/// use turnstile::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum OriginState {
///     Active,
///     Inactive,
///     Disabled,
/// }
///
/// impl State for OriginState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Active => "Active",
///             Self::Inactive => "Inactive",
///             Self::Disabled => "Disabled",
///         }
///     }
/// }
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}
