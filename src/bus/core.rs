//! # EventBus: registry plus synchronous dispatch engine.
//!
//! One [`EventBus`] per independent pub/sub domain. Producers call
//! [`EventBus::emit`]; consumers register plain closures with
//! [`EventBus::on`] / [`EventBus::once`] and remove them with
//! [`EventBus::off`]. Everything happens in-process, in order, on the
//! caller's stack.
//!
//! ## Architecture
//! ```text
//! emit(key, &payload)
//!   │  validate key (empty / `*` / `error` rejected)
//!   │  snapshot key's slot + wildcard slot
//!   │
//!   ├─► direct pass:    listener #1 ─ listener #2 ─ ... (registration order)
//!   │                        └─ Err(e)? ──► error listeners, or propagate
//!   └─► wildcard pass:  w(key, &payload) for every listener under `*`
//!                            (never re-triggers another wildcard pass)
//! ```
//!
//! ## Rules
//! - **Synchronous**: listeners run to completion before `emit` returns; no
//!   queues, no scheduling, no internal concurrency.
//! - **Snapshot dispatch**: both passes iterate over copies taken when the
//!   emission starts. Listeners added from inside a listener are not invoked
//!   within the same emission; listeners removed mid-emission still receive
//!   it (one-shot entries excepted — those fire at most once, always).
//! - **Error isolation**: a failing listener aborts nothing as long as at
//!   least one error listener is registered; with none, the failure aborts
//!   the rest of the emission and surfaces to the `emit` caller as-is.
//! - **Single-threaded**: interior mutability is `RefCell` and handles are
//!   `Rc`. The bus provides no locking; a multi-threaded embedder must
//!   serialize access to an instance itself.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{EmitError, InvalidKeyError, ListenerError};
use crate::keys::{self, ERROR_KEY, WILDCARD_KEY};
use crate::listeners::{DispatchFailure, ErrorListener, Listener};

use super::config::BusConfig;
use super::registry::{Entry, Registry};

/// Synchronous in-process event bus.
///
/// Generic over the payload type `P` the embedding code emits; a bus for a
/// subsystem typically uses an enum of that subsystem's events, which keeps
/// argument checking at compile time without any dynamic typing at runtime.
///
/// The bus owns its registry and the `Rc` clones of listener handles; it
/// owns neither the listeners' captured state nor the payloads passed
/// through [`EventBus::emit`] (those stay with the caller).
///
/// # Example
/// ```
/// use signalbus::{listener, EventBus};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let bus: EventBus<i64> = EventBus::new();
///
/// let inc = listener(|_key: &str, delta: &i64| {
///     println!("add {delta}");
///     Ok(())
/// });
/// bus.on("count:add", inc)?;
///
/// assert!(bus.emit("count:add", &5)?);
/// assert!(!bus.emit("count:sub", &1)?);
/// # Ok(())
/// # }
/// ```
pub struct EventBus<P> {
    registry: RefCell<Registry<P>>,
    error_listeners: RefCell<Vec<ErrorListener<P>>>,
    config: BusConfig,
}

impl<P> EventBus<P> {
    /// Creates an empty bus with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(BusConfig::default())
    }

    /// Creates an empty bus with the given configuration.
    #[must_use]
    pub fn with_config(config: BusConfig) -> Self {
        Self {
            registry: RefCell::new(Registry::new()),
            error_listeners: RefCell::new(Vec::new()),
            config,
        }
    }

    /// This bus's configuration.
    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    // ---- Registration ----

    /// Appends `listener` to `key`'s sequence, creating the sequence if
    /// absent. Returns the bus for chaining (`bus.on(..)?.on(..)?`).
    ///
    /// Duplicate-tolerant: registering the same handle twice invokes it twice
    /// per emission; dedupe is the caller's concern.
    ///
    /// # Errors
    /// [`InvalidKeyError`] for an empty key or the reserved error key. The
    /// wildcard key `*` is a valid target and subscribes to every emission.
    pub fn on(&self, key: &str, listener: Listener<P>) -> Result<&Self, InvalidKeyError> {
        keys::validate_registration(key)?;
        self.insert(key, Entry::new(listener), false);
        Ok(self)
    }

    /// Like [`EventBus::on`], but the listener fires at most once and is
    /// removed from `key`'s sequence when it does.
    ///
    /// The at-most-once guarantee holds even when `emit` for `key` re-enters
    /// from inside the listener itself: the registration is retired before
    /// the listener runs, and a spent flag shields snapshots held by outer
    /// emissions. A pending one-shot can be cancelled with
    /// [`EventBus::off`] using the original handle.
    pub fn once(&self, key: &str, listener: Listener<P>) -> Result<&Self, InvalidKeyError> {
        keys::validate_registration(key)?;
        self.insert(key, Entry::once(listener), false);
        Ok(self)
    }

    /// Like [`EventBus::on`], but inserts at the front of `key`'s sequence so
    /// the listener runs before the ones already registered.
    ///
    /// [`EventBus::listeners`] hands out copies, so this is the supported way
    /// to get ahead of existing listeners.
    pub fn prepend(&self, key: &str, listener: Listener<P>) -> Result<&Self, InvalidKeyError> {
        keys::validate_registration(key)?;
        self.insert(key, Entry::new(listener), true);
        Ok(self)
    }

    /// Removes the first listener in `key`'s sequence identical to the given
    /// handle (`Rc::ptr_eq`). No-op when absent or when the key is unknown;
    /// removing from the wildcard key removes only from the wildcard
    /// sequence.
    pub fn off(&self, key: &str, listener: &Listener<P>) -> &Self {
        self.registry.borrow_mut().remove_listener(key, listener);
        self
    }

    /// Registers a listener on the failure channel.
    ///
    /// Error listeners receive every listener failure recovered during
    /// dispatch, in registration order. A failure inside an error listener
    /// is never recovered — it propagates straight to the `emit` caller.
    pub fn on_error(&self, listener: ErrorListener<P>) -> &Self {
        self.error_listeners.borrow_mut().push(listener);
        self
    }

    /// Removes the first error listener identical to the given handle.
    /// No-op when absent.
    pub fn off_error(&self, listener: &ErrorListener<P>) -> &Self {
        let mut handlers = self.error_listeners.borrow_mut();
        if let Some(pos) = handlers.iter().position(|h| Rc::ptr_eq(h, listener)) {
            handlers.remove(pos);
        }
        self
    }

    // ---- Dispatch ----

    /// Synchronously invokes every listener registered for `key`, in
    /// registration order, then every wildcard listener; all of them receive
    /// `(key, payload)`.
    ///
    /// Both passes iterate over snapshots taken here, so registry mutation
    /// from inside a listener never skips, duplicates, or late-adds a
    /// listener within this emission.
    ///
    /// Returns whether the emission was received: `true` iff the key's slot
    /// or the wildcard slot had at least one listener at dispatch time. A
    /// best-effort signal, not a count.
    ///
    /// # Errors
    /// - [`EmitError::InvalidKey`] for an empty key or either reserved key
    ///   (direct wildcard emission is rejected by contract).
    /// - [`EmitError::Listener`] when a listener fails with no error listener
    ///   registered — the remaining listeners and the wildcard pass are
    ///   skipped and the original failure surfaces unchanged — or when an
    ///   error listener itself fails.
    pub fn emit(&self, key: &str, payload: &P) -> Result<bool, EmitError> {
        keys::validate_emission(key)?;

        let (direct, wildcard) = {
            let registry = self.registry.borrow();
            (registry.snapshot(key), registry.snapshot(WILDCARD_KEY))
        };
        let received = !direct.is_empty() || !wildcard.is_empty();

        self.run_pass(key, key, payload, &direct)?;
        self.run_pass(WILDCARD_KEY, key, payload, &wildcard)?;

        Ok(received)
    }

    // ---- Introspection ----

    /// Copies of the listener handles registered for `key`, in dispatch
    /// order. This is a defensive copy: mutating the returned `Vec` does not
    /// touch the registry — use `on`/`prepend`/`off` for that. Pending
    /// one-shots appear through their original handles.
    ///
    /// The error key has no ordinary listeners; see
    /// [`EventBus::error_listeners`].
    pub fn listeners(&self, key: &str) -> Vec<Listener<P>> {
        self.registry.borrow().listeners(key)
    }

    /// Number of listeners currently registered for `key`.
    pub fn listener_count(&self, key: &str) -> usize {
        self.registry.borrow().len(key)
    }

    /// Copies of the failure-channel listener handles, in dispatch order.
    pub fn error_listeners(&self) -> Vec<ErrorListener<P>> {
        self.error_listeners.borrow().clone()
    }

    /// Number of listeners on the failure channel.
    pub fn error_listener_count(&self) -> usize {
        self.error_listeners.borrow().len()
    }

    /// Every key that currently has at least one listener, the reserved
    /// error key included when error listeners exist. Order is unspecified.
    pub fn events(&self) -> Vec<String> {
        let mut keys = self.registry.borrow().keys();
        if !self.error_listeners.borrow().is_empty() {
            keys.push(ERROR_KEY.to_owned());
        }
        keys
    }

    /// True when no listener of any kind is registered.
    pub fn is_empty(&self) -> bool {
        self.registry.borrow().is_empty() && self.error_listeners.borrow().is_empty()
    }

    /// Removes every registration, wildcard and error listeners included,
    /// returning the bus to its initial empty state.
    pub fn clear(&self) {
        self.registry.borrow_mut().clear();
        self.error_listeners.borrow_mut().clear();
    }

    // ---- Internals ----

    fn insert(&self, key: &str, entry: Rc<Entry<P>>, front: bool) {
        let mut registry = self.registry.borrow_mut();
        if front {
            registry.prepend(key, entry);
        } else {
            registry.append(key, entry);
        }
        if let Some(count) = registry.crossed_cap(key, self.config.max_listeners) {
            eprintln!(
                "[signalbus] possible listener leak: {count} listeners registered for key {key:?} (max_listeners = {})",
                self.config.max_listeners
            );
        }
    }

    /// One dispatch pass over a snapshot. `slot_key` is the registry slot the
    /// snapshot came from (the emitted key, or `*` for the wildcard pass);
    /// listeners are always invoked with the emitted `key`.
    fn run_pass(
        &self,
        slot_key: &str,
        key: &str,
        payload: &P,
        entries: &[Rc<Entry<P>>],
    ) -> Result<(), EmitError> {
        for entry in entries {
            if entry.once {
                if entry.spent.replace(true) {
                    // Consumed by a nested emission while this snapshot was live.
                    continue;
                }
                self.registry.borrow_mut().remove_entry(slot_key, entry);
            }
            // No registry borrow is held here: listeners may re-enter the bus.
            if let Err(error) = (entry.listener)(key, payload) {
                self.recover(error, key, &entry.listener, payload)?;
            }
        }
        Ok(())
    }

    /// Routes one listener failure to the error listeners, or propagates it
    /// when none are registered.
    fn recover(
        &self,
        error: ListenerError,
        key: &str,
        failing: &Listener<P>,
        payload: &P,
    ) -> Result<(), EmitError> {
        let handlers = self.error_listeners.borrow().clone();
        if handlers.is_empty() {
            return Err(EmitError::Listener(error));
        }
        for handler in &handlers {
            let failure = DispatchFailure {
                error: &error,
                key,
                listener: failing,
                payload,
            };
            handler(failure).map_err(EmitError::Listener)?;
        }
        Ok(())
    }
}

impl<P> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}
