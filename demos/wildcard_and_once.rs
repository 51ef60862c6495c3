//! # Example: wildcard_and_once
//!
//! Auditing a bus with a wildcard listener and reacting to the first
//! occurrence of an event with a one-shot listener.
//!
//! Shows how to:
//! - Register under [`WILDCARD_KEY`] to hear every emission, key included.
//! - Register a one-shot listener with [`EventBus::once`].
//! - Inspect the registry with [`EventBus::events`] and
//!   [`EventBus::listener_count`].
//!
//! ## Flow
//! ```text
//! emit("job:started", ..) ──► first_start (once, retires itself)
//!                          └─► audit ("*")
//! emit("job:started", ..) ──► audit ("*") only
//! emit("job:done", ..)    ──► audit ("*") only
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example wildcard_and_once
//! ```

use signalbus::{listener, EventBus, WILDCARD_KEY};

fn main() -> anyhow::Result<()> {
    let bus: EventBus<String> = EventBus::new();

    let audit = listener(|key: &str, job: &String| {
        println!("[audit] {key}: {job}");
        Ok(())
    });
    let first_start = listener(|_key: &str, job: &String| {
        println!("[first] the very first job to start is {job}");
        Ok(())
    });

    bus.on(WILDCARD_KEY, audit)?;
    bus.once("job:started", first_start)?;

    println!("keys with listeners: {:?}", bus.events());

    bus.emit("job:started", &"alpha".to_owned())?;
    bus.emit("job:started", &"bravo".to_owned())?; // one-shot already retired
    bus.emit("job:done", &"alpha".to_owned())?;

    println!(
        "job:started listeners left = {}",
        bus.listener_count("job:started")
    );
    Ok(())
}
