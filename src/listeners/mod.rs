//! # Listener types
//!
//! A listener is a caller-owned callable registered against one or more keys.
//! The bus holds [`Rc`] clones of the handles; the handle the caller keeps is
//! also the listener's identity for [`EventBus::off`](crate::EventBus::off)
//! (`Rc::ptr_eq`), so registering the same handle twice registers it twice
//! and removal takes out exactly one occurrence.
//!
//! ## Signatures
//! Every ordinary listener receives `(key, &payload)`. Per-key listeners may
//! ignore the key; wildcard listeners use it to tell emissions apart. Error
//! listeners receive a [`DispatchFailure`] instead, which bundles the failed
//! listener's error with the key, the failing handle and the payload of the
//! emission that was being dispatched.
//!
//! ## Example
//! ```
//! use signalbus::{error_listener, listener, EventBus};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bus: EventBus<u32> = EventBus::new();
//!
//! let seen = listener(|key: &str, n: &u32| {
//!     println!("{key} -> {n}");
//!     Ok(())
//! });
//! let diag = error_listener(|failure| {
//!     eprintln!("{} failed: {}", failure.key, failure.error);
//!     Ok(())
//! });
//!
//! bus.on("tick", seen)?;
//! bus.on_error(diag);
//! bus.emit("tick", &7)?;
//! # Ok(())
//! # }
//! ```

use std::rc::Rc;

use crate::error::ListenerError;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;

/// Callable registered against an event key.
///
/// Receives the emitted key and a shared reference to the payload. Returning
/// `Err` routes the failure to the bus's error listeners (or, if none are
/// registered, aborts the emission and surfaces the error to the `emit`
/// caller).
pub type Listener<P> = Rc<dyn Fn(&str, &P) -> Result<(), ListenerError>>;

/// Callable registered on the failure channel.
///
/// Invoked once per recovered listener failure. Returning `Err` propagates to
/// the `emit` caller uncaught — the failure channel has no failure channel of
/// its own.
pub type ErrorListener<P> = Rc<dyn Fn(DispatchFailure<'_, P>) -> Result<(), ListenerError>>;

/// Wraps a closure into a [`Listener`] handle.
///
/// Keep the returned handle if you intend to remove the listener later; the
/// handle is its identity.
pub fn listener<P, F>(f: F) -> Listener<P>
where
    F: Fn(&str, &P) -> Result<(), ListenerError> + 'static,
{
    Rc::new(f)
}

/// Wraps a closure into an [`ErrorListener`] handle.
pub fn error_listener<P, F>(f: F) -> ErrorListener<P>
where
    F: for<'a> Fn(DispatchFailure<'a, P>) -> Result<(), ListenerError> + 'static,
{
    Rc::new(f)
}

/// Everything an error listener learns about one failed listener invocation.
///
/// Borrowed views only — the bus owns nothing here beyond the duration of the
/// call. `listener` is the handle of the listener that failed, so diagnostics
/// can identify it or a recovery handler can `off` it.
pub struct DispatchFailure<'a, P> {
    /// The failure the listener returned.
    pub error: &'a ListenerError,
    /// The key being dispatched when the listener failed.
    pub key: &'a str,
    /// Handle of the failing listener.
    pub listener: &'a Listener<P>,
    /// Payload of the emission being dispatched.
    pub payload: &'a P,
}

impl<P> Clone for DispatchFailure<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for DispatchFailure<'_, P> {}
