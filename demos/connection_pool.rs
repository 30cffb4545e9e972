//! Connection Pool State Machine
//!
//! A pool confined to one tokio task, fed by an event channel. Transition
//! functions read the event payload to pick the next state.
//!
//! Run with: cargo run --example connection_pool

use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use turnstile::builder::StateMachineBuilder;
use turnstile::core::State;
use turnstile::handlers::{chain, fail_fast, LoggingListener, TransitionRecorder};
use turnstile::{event_enum, state_enum};

state_enum! {
    enum PoolState {
        Empty,
        Available,
        Exhausted,
        Closed,
    }
}

event_enum! {
    enum PoolEvent => PoolEventKind {
        ConnectionCreated { id: u64 },
        ConnectionBorrowed { remaining: usize },
        ConnectionReturned { remaining: usize },
        Close,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Connection Pool State Machine ===\n");

    let recorder = TransitionRecorder::new();

    let pool = StateMachineBuilder::<PoolState, PoolEvent>::new()
        .initial(PoolState::Empty)
        .transition_to(
            PoolState::Empty,
            PoolEventKind::ConnectionCreated,
            PoolState::Available,
        )
        .transition_to(
            PoolState::Available,
            PoolEventKind::ConnectionCreated,
            PoolState::Available,
        )
        .transition(
            PoolState::Available,
            PoolEventKind::ConnectionBorrowed,
            |event: &PoolEvent| match event {
                PoolEvent::ConnectionBorrowed { remaining: 0 } => PoolState::Exhausted,
                _ => PoolState::Available,
            },
        )
        .transition(
            PoolState::Available,
            PoolEventKind::ConnectionReturned,
            |_: &PoolEvent| PoolState::Available,
        )
        .transition(
            PoolState::Exhausted,
            PoolEventKind::ConnectionReturned,
            |event: &PoolEvent| match event {
                PoolEvent::ConnectionReturned { remaining } if *remaining > 0 => {
                    PoolState::Available
                }
                _ => PoolState::Exhausted,
            },
        )
        .transition_to(PoolState::Available, PoolEventKind::Close, PoolState::Closed)
        .transition_to(PoolState::Exhausted, PoolEventKind::Close, PoolState::Closed)
        // Anything else indicates a bookkeeping bug in the pool.
        .inappropriate_event_handler(fail_fast())
        .on_state_change(chain(
            LoggingListener::new("pool origin-a"),
            recorder.clone(),
        ))
        .build()
        .expect("pool configuration is valid")
        .new_machine();
    let pool = Arc::new(pool);

    let (tx, mut rx) = tokio::sync::mpsc::channel::<PoolEvent>(32);

    // The pool task is the machine's only writer.
    let worker = {
        let pool = Arc::clone(&pool);
        tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                pool.handle(event);
            }
        })
    };

    let script = vec![
        PoolEvent::ConnectionCreated { id: 1 },
        PoolEvent::ConnectionCreated { id: 2 },
        PoolEvent::ConnectionBorrowed { remaining: 1 },
        PoolEvent::ConnectionBorrowed { remaining: 0 },
        PoolEvent::ConnectionReturned { remaining: 1 },
        PoolEvent::ConnectionBorrowed { remaining: 0 },
        PoolEvent::Close,
    ];

    for event in script {
        if let PoolEvent::ConnectionCreated { id } = &event {
            println!("Opening connection {id}");
        }
        tx.send(event).await.expect("pool task is running");
    }
    drop(tx);
    worker.await.expect("pool task panicked");

    let history = recorder.history();
    let path: Vec<&str> = history.get_path().into_iter().map(|s| s.name()).collect();
    println!("\nPath: {}", path.join(" -> "));
    println!("Transitions: {}", history.len());
    println!("Self-transitions: {}", history.self_transitions());
    println!("Final state: {}", pool.current_state().name());

    println!("\n=== Example Complete ===");
}
