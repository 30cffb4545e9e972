//! Events and their discriminants.
//!
//! An event is a tagged value. Only its kind takes part in transition lookup;
//! the payload is read by the transition function that matches the variant.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for events fed into a state machine.
///
/// Most event types are enums whose `Kind` is a fieldless mirror of the
/// variants. The [`event_enum!`](crate::event_enum) macro generates both.
///
/// # Example
///
/// ```rust
/// use turnstile::core::Event;
///
/// #[derive(Debug)]
/// enum HealthEvent {
///     Healthy,
///     Unhealthy { reason: String },
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum HealthEventKind {
///     Healthy,
///     Unhealthy,
/// }
///
/// impl Event for HealthEvent {
///     type Kind = HealthEventKind;
///
///     fn kind(&self) -> HealthEventKind {
///         match self {
///             Self::Healthy => HealthEventKind::Healthy,
///             Self::Unhealthy { .. } => HealthEventKind::Unhealthy,
///         }
///     }
/// }
///
/// let event = HealthEvent::Unhealthy { reason: "timeout".to_string() };
/// assert_eq!(event.kind(), HealthEventKind::Unhealthy);
/// ```
pub trait Event: Debug + Send + Sync {
    /// Discriminant used as the second half of a transition key.
    type Kind: Copy + Eq + Hash + Debug + Send + Sync + 'static;

    /// The kind of this event.
    fn kind(&self) -> Self::Kind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum PoolEvent {
        Borrowed(u64),
        Returned(u64),
        Closed,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum PoolEventKind {
        Borrowed,
        Returned,
        Closed,
    }

    impl Event for PoolEvent {
        type Kind = PoolEventKind;

        fn kind(&self) -> PoolEventKind {
            match self {
                Self::Borrowed(_) => PoolEventKind::Borrowed,
                Self::Returned(_) => PoolEventKind::Returned,
                Self::Closed => PoolEventKind::Closed,
            }
        }
    }

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(PoolEvent::Borrowed(1).kind(), PoolEvent::Borrowed(99).kind());
        assert_ne!(PoolEvent::Borrowed(1).kind(), PoolEvent::Returned(1).kind());
        assert_eq!(PoolEvent::Closed.kind(), PoolEventKind::Closed);
    }
}
