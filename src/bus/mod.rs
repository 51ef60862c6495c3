//! The bus: configuration, listener storage, and the dispatch engine.
//!
//! ## Contents
//! - [`EventBus`] — registration, removal, and synchronous dispatch
//! - [`BusConfig`] — per-instance knobs (listener-leak threshold)
//! - `registry` (private) — ordered listener storage and one-shot bookkeeping
//!
//! ## Quick reference
//! - **Producers** call [`EventBus::emit`].
//! - **Consumers** register through [`EventBus::on`], [`EventBus::once`],
//!   [`EventBus::prepend`] and the failure channel
//!   ([`EventBus::on_error`]).
//!
//! See `core.rs` for the dispatch rules (snapshots, wildcard pass, error
//! isolation).

mod config;
mod core;
mod registry;

pub use config::BusConfig;
pub use core::EventBus;
