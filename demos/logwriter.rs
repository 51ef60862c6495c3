//! # Example: logwriter
//!
//! Tracing every event on a bus with the built-in [`LogWriter`] listeners.
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example logwriter --features logging
//! ```

use signalbus::{listener, EventBus, ListenerError, LogWriter, WILDCARD_KEY};

fn main() -> anyhow::Result<()> {
    let bus: EventBus<u32> = EventBus::new();

    // LogWriter::listener under the wildcard key traces all traffic;
    // LogWriter::error_listener prints recovered failures to stderr.
    bus.on(WILDCARD_KEY, LogWriter::listener())?;
    bus.on_error(LogWriter::error_listener());

    let flaky = listener(|_key: &str, n: &u32| {
        if n % 2 == 1 {
            return Err(ListenerError::msg("odd ticks are unacceptable"));
        }
        Ok(())
    });
    bus.on("tick", flaky)?;

    for n in 0..4u32 {
        bus.emit("tick", &n)?;
    }
    Ok(())
}
