//! # signalbus
//!
//! **Signalbus** is a minimal synchronous in-process event bus for Rust.
//!
//! It provides one primitive: a typed registry mapping event keys to ordered
//! listener lists, with synchronous dispatch, wildcard subscription, error
//! isolation, and one-shot listeners. The crate is designed as a building
//! block other components embed to decouple producers of state changes from
//! consumers — no transport, no persistence, no cross-process concern.
//!
//! ## Architecture
//! ```text
//!  Producers                         EventBus                    Consumers
//!
//!  emit("job:done", &payload) ──► registry lookup "job:done"
//!                                   ├─► listener #1 ──────────► on("job:done", ..)
//!                                   ├─► listener #2 ──────────► once("job:done", ..)
//!                                   │     └─ Err(e)? ─► error listeners (on_error)
//!                                   │                   or propagate to the caller
//!                                   └─► wildcard pass ("*") ──► on("*", ..)
//!                                         w(key, &payload), once per emission
//! ```
//!
//! ## Guarantees
//! - Listeners for a key run in registration order, synchronously, on the
//!   caller's stack.
//! - Wildcard listeners run after the key's own listeners, once per emission,
//!   and never re-trigger a wildcard pass.
//! - Dispatch iterates over snapshots taken when the emission starts, so
//!   listeners may re-enter the bus freely (add, remove, emit) without
//!   skipping or duplicating anyone mid-pass.
//! - A failing listener is routed to the error listeners when any are
//!   registered; otherwise the failure aborts the emission and surfaces to
//!   the `emit` caller exactly as the listener raised it.
//!
//! ## Features
//! | Area              | Description                                              | Key types                                |
//! |-------------------|----------------------------------------------------------|------------------------------------------|
//! | **Registration**  | Ordered, duplicate-tolerant listener lists per key.      | [`EventBus::on`], [`EventBus::prepend`]  |
//! | **One-shot**      | Listeners that fire at most once, re-entrancy safe.      | [`EventBus::once`]                       |
//! | **Dispatch**      | Synchronous fan-out with wildcard pass.                  | [`EventBus::emit`], [`WILDCARD_KEY`]     |
//! | **Failure channel**| Recover listener errors instead of propagating them.    | [`EventBus::on_error`], [`DispatchFailure`] |
//! | **Errors**        | Typed taxonomy; original listener errors preserved.      | [`EmitError`], [`ListenerError`]         |
//! | **Configuration** | Per-instance knobs.                                      | [`BusConfig`]                            |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Threading
//! A bus serves a single logical thread of control: no internal locking, no
//! async scheduling. Handles are [`std::rc::Rc`] and interior mutability is
//! `RefCell`, so the bus is deliberately `!Sync`; a multi-threaded embedder
//! serializes access to an instance itself.
//!
//! ## Example
//! ```rust
//! use signalbus::{error_listener, listener, EventBus, ListenerError};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // One bus per pub/sub domain; the payload type is yours to choose.
//!     let bus: EventBus<i64> = EventBus::new();
//!
//!     let inc = listener(|_key: &str, delta: &i64| {
//!         println!("counter += {delta}");
//!         Ok(())
//!     });
//!     let audit = listener(|key: &str, delta: &i64| {
//!         println!("audit: {key} ({delta})");
//!         Ok(())
//!     });
//!     let strict = listener(|_key: &str, delta: &i64| {
//!         if *delta < 0 {
//!             return Err(ListenerError::msg("negative delta"));
//!         }
//!         Ok(())
//!     });
//!
//!     bus.on("count:add", inc)?.on("count:add", strict)?;
//!     bus.on("*", audit)?;
//!     bus.on_error(error_listener(|failure| {
//!         eprintln!("{} rejected: {}", failure.key, failure.error);
//!         Ok(())
//!     }));
//!
//!     assert!(bus.emit("count:add", &5)?); // inc, strict, then audit
//!     assert!(bus.emit("count:add", &-1)?); // strict fails, error listener recovers
//!     assert!(bus.emit("count:sub", &1)?); // received: audit hears everything
//!     Ok(())
//! }
//! ```

mod bus;
mod error;
mod keys;
mod listeners;

// ---- Public re-exports ----

pub use bus::{BusConfig, EventBus};
pub use error::{EmitError, InvalidKeyError, ListenerError};
pub use keys::{ERROR_KEY, WILDCARD_KEY};
pub use listeners::{error_listener, listener, DispatchFailure, ErrorListener, Listener};

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
