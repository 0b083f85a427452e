//! Door Alarm
//!
//! This example walks a door through both timers.
//!
//! Key concepts:
//! - Invalid transitions are returned as errors, never panics
//! - The blocking timer reports a door left open
//! - A scheduled timer can be cancelled once the door is closed
//!
//! Run with: RUST_LOG=timed_door=debug cargo run --example door_alarm

use std::sync::Arc;
use std::time::Duration;
use timed_door::{schedule, DoorTimerAdapter, TimedDoorBuilder, Timer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "timed_door=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Door Alarm Example ===\n");

    let door = TimedDoorBuilder::new()
        .timeout(Duration::from_millis(300))
        .build()?;

    if let Err(e) = door.lock() {
        println!("Locking a closed door: {e}");
    }

    door.unlock()?;
    let Err(report) = door.report_state();
    println!("State probe: {report}");

    println!("\nBlocking timer, door left open:");
    let adapter = door.adapter();
    let mut timer = Timer::new();
    match timer.register(door.timeout(), Some(&adapter)) {
        Ok(()) => println!("  no alarm"),
        Err(e) => println!("  alarm: {e}"),
    }

    println!("\nScheduled timer, door closed in time:");
    let door = Arc::new(door);
    let mut handle = schedule(
        door.timeout(),
        Arc::new(DoorTimerAdapter::new(Arc::clone(&door))),
    );
    door.lock()?;
    handle.cancel();
    println!("  outcome: {:?}", handle.join().await?);

    let history = door.history();
    println!("\nTransitions:");
    for transition in history.transitions() {
        println!(
            "  {} -> {} at {}",
            transition.from, transition.to, transition.timestamp
        );
    }
    if let Some(span) = history.duration() {
        println!("  first to last: {span:?}");
    }

    Ok(())
}
