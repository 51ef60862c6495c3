//! # Simple logging listeners for debugging and demos.
//!
//! [`LogWriter`] builds listeners that print events to stdout and recovered
//! failures to stderr, in a human-readable format. Primarily useful for
//! development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [event] key=count:add payload=5
//! [error] key=count:add err="overflow" payload=5
//! ```
//!
//! ## Example
//! ```no_run
//! # use signalbus::{EventBus, LogWriter};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bus: EventBus<i64> = EventBus::new();
//! bus.on("*", LogWriter::listener())?;
//! bus.on_error(LogWriter::error_listener());
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;
use std::rc::Rc;

use super::{ErrorListener, Listener};

/// Factory for stdout/stderr logging listeners.
///
/// Enabled via the `logging` feature. Not intended for production use —
/// register your own listeners for structured logging or metrics collection.
pub struct LogWriter;

impl LogWriter {
    /// A listener that prints every invocation to stdout.
    ///
    /// Register it under the wildcard key to trace all traffic on a bus.
    pub fn listener<P: Debug + 'static>() -> Listener<P> {
        Rc::new(|key, payload| {
            println!("[event] key={key} payload={payload:?}");
            Ok(())
        })
    }

    /// An error listener that prints every recovered failure to stderr.
    pub fn error_listener<P: Debug + 'static>() -> ErrorListener<P> {
        Rc::new(|failure| {
            eprintln!(
                "[error] key={} err={:?} payload={:?}",
                failure.key,
                failure.error.to_string(),
                failure.payload
            );
            Ok(())
        })
    }
}
