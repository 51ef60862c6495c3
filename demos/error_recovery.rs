//! # Example: error_recovery
//!
//! Error isolation during dispatch: a failing listener does not take the
//! rest of the emission down as long as an error listener is registered.
//!
//! Shows how to:
//! - Fail from a listener by returning `Err(ListenerError)`.
//! - Recover failures on the bus's failure channel ([`EventBus::on_error`])
//!   and inspect the [`DispatchFailure`] diagnostics.
//! - Observe the propagation path once the error listener is removed.
//!
//! ## Run
//! ```bash
//! cargo run --example error_recovery
//! ```

use signalbus::{error_listener, listener, EventBus, ListenerError};

#[derive(Debug)]
struct Job {
    name: &'static str,
    payload_bytes: usize,
}

fn main() -> anyhow::Result<()> {
    let bus: EventBus<Job> = EventBus::new();

    let validate = listener(|_key: &str, job: &Job| {
        if job.payload_bytes > 1024 {
            return Err(ListenerError::msg(format!(
                "job {} too large: {} bytes",
                job.name, job.payload_bytes
            )));
        }
        Ok(())
    });
    let execute = listener(|_key: &str, job: &Job| {
        println!("[exec] running {}", job.name);
        Ok(())
    });

    bus.on("job:submit", validate)?.on("job:submit", execute)?;

    // With a recovery handler, dispatch keeps going past the failure.
    let diag = error_listener(|failure| {
        eprintln!("[diag] {} rejected a job: {}", failure.key, failure.error);
        Ok(())
    });
    bus.on_error(diag.clone());

    bus.emit(
        "job:submit",
        &Job {
            name: "huge",
            payload_bytes: 4096,
        },
    )?;

    // Without one, the original error aborts the emission and surfaces as-is.
    bus.off_error(&diag);
    let err = bus
        .emit(
            "job:submit",
            &Job {
                name: "huge-again",
                payload_bytes: 4096,
            },
        )
        .unwrap_err();
    println!("unrecovered: {err}");

    Ok(())
}
