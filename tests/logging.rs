//! Diagnostics emitted by the default handler and the logging listener.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use turnstile::builder::StateMachineBuilder;
use turnstile::handlers::ignore;
use turnstile::{event_enum, state_enum};

state_enum! {
    enum Service {
        Idle,
        Running,
    }
}

event_enum! {
    enum Command => CommandKind {
        Start,
        Stop,
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<F: FnOnce()>(level: tracing::Level, f: F) -> String {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(level)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

fn start_only() -> StateMachineBuilder<Service, Command> {
    StateMachineBuilder::new()
        .initial(Service::Idle)
        .transition_to(Service::Idle, CommandKind::Start, Service::Running)
}

#[test]
fn default_handler_warns_and_keeps_state() {
    let machine = start_only().build().unwrap().new_machine();

    let output = capture(tracing::Level::DEBUG, || machine.handle(Command::Stop));

    assert_eq!(machine.current_state(), Service::Idle);
    assert!(output.contains("WARN"), "{output}");
    assert!(
        output.contains("Inappropriate event ignored: no transition from Idle on Stop"),
        "{output}"
    );
}

#[test]
fn ignore_handler_is_silent() {
    let machine = start_only()
        .inappropriate_event_handler(ignore())
        .build()
        .unwrap()
        .new_machine();

    let output = capture(tracing::Level::DEBUG, || machine.handle(Command::Stop));

    assert_eq!(machine.current_state(), Service::Idle);
    assert!(output.is_empty(), "{output}");
}

#[test]
fn registered_transitions_are_not_logged_without_listener() {
    let machine = start_only().build().unwrap().new_machine();

    let output = capture(tracing::Level::DEBUG, || machine.handle(Command::Start));

    assert_eq!(machine.current_state(), Service::Running);
    assert!(output.is_empty(), "{output}");
}

#[test]
fn debug_transitions_logs_label_event_and_states() {
    let machine = start_only()
        .debug_transitions("app-1")
        .build()
        .unwrap()
        .new_machine();

    let output = capture(tracing::Level::INFO, || {
        machine.handle(Command::Start);
        machine.handle(Command::Start);
    });

    assert!(output.contains("app-1 Start: Idle -> Running"), "{output}");
    assert!(output.contains("app-1 Start: Running -> Running"), "{output}");
    assert_eq!(output.matches(" INFO ").count(), 2, "{output}");
}
