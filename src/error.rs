//! Error types used by the bus and by listeners.
//!
//! This module defines the crate's error taxonomy:
//!
//! - [`InvalidKeyError`] — a supplied event key fails the key contract, or a
//!   reserved key is used where it is not allowed.
//! - [`ListenerError`] — an opaque failure raised by a listener during
//!   dispatch; the original error value is preserved for downcasting.
//! - [`EmitError`] — everything [`EventBus::emit`](crate::EventBus::emit) can
//!   return; transparent over the two cases above so an unrecovered listener
//!   failure surfaces exactly as the listener raised it.

use std::error::Error;
use std::fmt;

use thiserror::Error;

/// # Errors produced by event-key validation.
///
/// Keys are validated on registration (`on`, `once`, `prepend`) and on
/// emission (`emit`). Reserved keys have asymmetric rules: the wildcard key
/// is a valid registration target but never a valid emission target, while
/// the error key is reserved on both sides (error listeners go through
/// [`EventBus::on_error`](crate::EventBus::on_error)).
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidKeyError {
    /// The key is empty.
    #[error("event key must not be empty")]
    Empty,

    /// The wildcard key `*` was used as an emission target.
    #[error("the wildcard key `*` cannot be emitted directly")]
    WildcardEmit,

    /// The error key was used where only ordinary keys are allowed.
    #[error("the key `error` is reserved for failure listeners; use on_error/off_error")]
    ErrorReserved,
}

/// # Opaque failure raised by a listener.
///
/// Wraps whatever error value the listener produced. `Display` and `source`
/// pass straight through to the original, and the original can be recovered
/// via [`ListenerError::downcast_ref`] or [`ListenerError::into_inner`] —
/// no wrapping text, no laundering.
///
/// # Example
/// ```
/// use signalbus::ListenerError;
///
/// let err = ListenerError::msg("boom");
/// assert_eq!(err.to_string(), "boom");
/// ```
#[derive(Debug)]
pub struct ListenerError(Box<dyn Error + Send + Sync + 'static>);

impl ListenerError {
    /// Wraps an arbitrary error value.
    pub fn new<E>(err: E) -> Self
    where
        E: Into<Box<dyn Error + Send + Sync + 'static>>,
    {
        Self(err.into())
    }

    /// Creates a failure from a plain message.
    pub fn msg(msg: impl Into<String>) -> Self {
        Self(msg.into().into())
    }

    /// Borrows the original error value.
    pub fn get_ref(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Attempts to downcast the original error value.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref()
    }

    /// Unwraps the original error value.
    pub fn into_inner(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.0
    }
}

impl fmt::Display for ListenerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ListenerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

/// # Errors returned by [`EventBus::emit`](crate::EventBus::emit).
///
/// Both variants are transparent: callers see either the key-validation
/// failure or the listener's own error, not a wrapper around them.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitError {
    /// The emission target failed key validation.
    #[error(transparent)]
    InvalidKey(#[from] InvalidKeyError),

    /// A listener failed and no error listener was registered, or an error
    /// listener itself failed.
    #[error(transparent)]
    Listener(#[from] ListenerError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listener_error_display_passes_through() {
        let err = ListenerError::msg("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_listener_error_preserves_original_for_downcast() {
        let original = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = ListenerError::new(original);
        let io = err.downcast_ref::<std::io::Error>();
        assert!(io.is_some(), "original io::Error should survive wrapping");
        assert_eq!(io.map(|e| e.to_string()).as_deref(), Some("disk on fire"));
    }

    #[test]
    fn test_emit_error_is_transparent() {
        let err = EmitError::from(ListenerError::msg("boom"));
        assert_eq!(err.to_string(), "boom");

        let err = EmitError::from(InvalidKeyError::Empty);
        assert_eq!(err.to_string(), "event key must not be empty");
    }
}
