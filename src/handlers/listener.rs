//! State-change listeners.

use crate::core::{Event, State};
use std::sync::Arc;

/// Observer notified after every `handle` call.
///
/// The machine has already moved to `new` when this runs. Inappropriate
/// events are reported too, so `old == new` is possible and does not mean
/// a transition was registered.
///
/// Listeners run on the caller's thread. Blocking here blocks the caller.
pub trait StateChangeListener<S, E>: Send + Sync {
    fn on_state_change(&self, old: &S, new: &S, event: &E);
}

impl<S, E, F> StateChangeListener<S, E> for F
where
    F: Fn(&S, &S, &E) + Send + Sync,
{
    fn on_state_change(&self, old: &S, new: &S, event: &E) {
        self(old, new, event)
    }
}

/// Type alias for a listener held by a shared configuration.
pub type SharedListener<S, E> = Arc<dyn StateChangeListener<S, E>>;

/// Listener that does nothing. Used when none is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopListener;

impl<S, E> StateChangeListener<S, E> for NoopListener {
    fn on_state_change(&self, _old: &S, _new: &S, _event: &E) {}
}

/// Logs each notification under a caller-supplied label.
///
/// Every notification is logged at `info` as `"{label} {event:?}: {old} -> {new}"`,
/// including events that left the state unchanged.
#[derive(Clone, Debug)]
pub struct LoggingListener {
    label: String,
}

impl LoggingListener {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl<S: State, E: Event> StateChangeListener<S, E> for LoggingListener {
    fn on_state_change(&self, old: &S, new: &S, event: &E) {
        tracing::info!(
            label = %self.label,
            from = old.name(),
            to = new.name(),
            kind = ?event.kind(),
            unchanged = old == new,
            "{} {:?}: {} -> {}",
            self.label,
            event,
            old.name(),
            new.name()
        );
    }
}

/// Two listeners invoked in order.
///
/// If `first` panics, `second` is not called.
#[derive(Clone, Debug)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Compose two listeners into one.
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain { first, second }
}

impl<S, E, A, B> StateChangeListener<S, E> for Chain<A, B>
where
    A: StateChangeListener<S, E>,
    B: StateChangeListener<S, E>,
{
    fn on_state_change(&self, old: &S, new: &S, event: &E) {
        self.first.on_state_change(old, new, event);
        self.second.on_state_change(old, new, event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Running,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
            }
        }
    }

    #[derive(Debug)]
    enum TestEvent {
        Start,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestEventKind {
        Start,
    }

    impl Event for TestEvent {
        type Kind = TestEventKind;

        fn kind(&self) -> TestEventKind {
            TestEventKind::Start
        }
    }

    #[test]
    fn closures_are_listeners() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: SharedListener<TestState, TestEvent> =
            Arc::new(move |old: &TestState, new: &TestState, _event: &TestEvent| {
                sink.lock().unwrap().push((old.clone(), new.clone()));
            });

        listener.on_state_change(&TestState::Idle, &TestState::Running, &TestEvent::Start);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![(TestState::Idle, TestState::Running)]
        );
    }

    #[test]
    fn chain_invokes_both_in_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let first_sink = Arc::clone(&order);
        let second_sink = Arc::clone(&order);

        let listener = chain(
            move |_: &TestState, _: &TestState, _: &TestEvent| {
                first_sink.lock().unwrap().push("first");
            },
            move |_: &TestState, _: &TestState, _: &TestEvent| {
                second_sink.lock().unwrap().push("second");
            },
        );

        listener.on_state_change(&TestState::Idle, &TestState::Running, &TestEvent::Start);

        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn logging_listener_keeps_label() {
        let listener = LoggingListener::new("origin app-01:host-a");
        assert_eq!(listener.label(), "origin app-01:host-a");

        // No subscriber installed; logging must not interfere with the caller.
        listener.on_state_change(&TestState::Idle, &TestState::Running, &TestEvent::Start);
        listener.on_state_change(&TestState::Idle, &TestState::Idle, &TestEvent::Start);
    }

    #[test]
    fn noop_listener_accepts_any_notification() {
        NoopListener.on_state_change(&TestState::Idle, &TestState::Idle, &TestEvent::Start);
    }
}
