//! # Bus configuration.
//!
//! [`BusConfig`] holds the knobs an embedder may want to tune per bus
//! instance. There is deliberately little here: the bus has no capacity,
//! no queues and no timers, so the only policy left is the listener-leak
//! warning threshold.
//!
//! # Example
//! ```
//! use signalbus::{BusConfig, EventBus};
//!
//! let mut cfg = BusConfig::default();
//! cfg.max_listeners = 32;
//!
//! let bus: EventBus<String> = EventBus::with_config(cfg);
//! assert_eq!(bus.config().max_listeners, 32);
//! ```

/// Per-instance configuration for an [`EventBus`](crate::EventBus).
#[derive(Clone, Debug)]
pub struct BusConfig {
    /// Soft cap on listeners per key (0 = unlimited).
    ///
    /// Registrations are never refused; the first registration that pushes a
    /// key past the cap prints a one-time warning for that key to stderr.
    /// The usual cause is a listener registered inside a loop without a
    /// matching removal.
    pub max_listeners: usize,
}

impl Default for BusConfig {
    /// Provides a default configuration:
    /// - `max_listeners = 0` (unlimited, no leak warnings)
    fn default() -> Self {
        Self { max_listeners: 0 }
    }
}
