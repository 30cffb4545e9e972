//! Origin Health State Machine
//!
//! Tracks one backend origin through health checks and operator commands,
//! publishing the state as a gauge value.
//!
//! Key concepts:
//! - Events carrying payloads (the failure reason)
//! - Default handler: inappropriate events are logged and ignored
//! - Listener composition: logging plus a gauge update
//! - Lock-free reads from a monitoring thread
//!
//! Run with: cargo run --example origin_health

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;
use turnstile::builder::StateMachineBuilder;
use turnstile::core::State;
use turnstile::handlers::{chain, LoggingListener};
use turnstile::{event_enum, state_enum};

state_enum! {
    enum OriginState {
        Active,
        Inactive,
        Disabled,
    }
}

impl OriginState {
    fn gauge_value(self) -> i64 {
        match self {
            OriginState::Active => 1,
            OriginState::Inactive => 0,
            OriginState::Disabled => -1,
        }
    }
}

event_enum! {
    enum OriginEvent => OriginEventKind {
        Healthy,
        Unhealthy { reason: String },
        Enable,
        Disable,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Origin Health State Machine ===\n");

    let gauge = Arc::new(AtomicI64::new(OriginState::Active.gauge_value()));
    let published = Arc::clone(&gauge);

    let config = StateMachineBuilder::<OriginState, OriginEvent>::new()
        .initial(OriginState::Active)
        .transition_to(
            OriginState::Active,
            OriginEventKind::Unhealthy,
            OriginState::Inactive,
        )
        .transition_to(
            OriginState::Inactive,
            OriginEventKind::Healthy,
            OriginState::Active,
        )
        .transition_to(
            OriginState::Active,
            OriginEventKind::Disable,
            OriginState::Disabled,
        )
        .transition_to(
            OriginState::Inactive,
            OriginEventKind::Disable,
            OriginState::Disabled,
        )
        .transition_to(
            OriginState::Disabled,
            OriginEventKind::Enable,
            OriginState::Inactive,
        )
        .on_state_change(chain(
            LoggingListener::new("origin app-01"),
            move |_: &OriginState, new: &OriginState, _: &OriginEvent| {
                published.store(new.gauge_value(), Ordering::Release);
            },
        ))
        .build()
        .expect("origin configuration is valid");

    println!(
        "Configuration: {} transitions, initial state {}\n",
        config.transition_count(),
        config.initial_state().name()
    );

    let origin = Arc::new(config.new_machine());

    let monitor = {
        let origin = Arc::clone(&origin);
        let gauge = Arc::clone(&gauge);
        thread::spawn(move || {
            // Readers never block the event loop.
            let state = origin.current_state();
            println!(
                "[monitor] state={} gauge={}",
                state.name(),
                gauge.load(Ordering::Acquire)
            );
        })
    };

    let events = vec![
        OriginEvent::Unhealthy {
            reason: "connect timeout after 1000ms".to_string(),
        },
        OriginEvent::Unhealthy {
            reason: "connection refused".to_string(),
        },
        OriginEvent::Healthy,
        OriginEvent::Disable,
        OriginEvent::Healthy,
        OriginEvent::Enable,
        OriginEvent::Healthy,
    ];

    for event in events {
        println!("-> {event:?}");
        if let OriginEvent::Unhealthy { reason } = &event {
            println!("   health check failed: {reason}");
        }
        origin.handle(event);
        println!(
            "   state={} gauge={}",
            origin.current_state().name(),
            gauge.load(Ordering::Acquire)
        );
    }

    monitor.join().expect("monitor thread panicked");

    println!("\n=== Example Complete ===");
}
