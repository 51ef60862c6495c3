//! Reserved event keys and key validation.
//!
//! Two keys carry special semantics:
//! - [`WILDCARD_KEY`] — listeners registered here receive every emission.
//! - [`ERROR_KEY`] — reserved for the failure channel; it never appears in
//!   the ordinary registry (see [`EventBus::on_error`](crate::EventBus::on_error)).
//!
//! Validation is asymmetric: `*` is a valid registration target but not a
//! valid emission target, while `error` is reserved on both sides.

use crate::error::InvalidKeyError;

/// Reserved key whose listeners receive every emission.
pub const WILDCARD_KEY: &str = "*";

/// Reserved key for the failure channel.
pub const ERROR_KEY: &str = "error";

/// Checks a key used with `on`, `once` or `prepend`.
pub(crate) fn validate_registration(key: &str) -> Result<(), InvalidKeyError> {
    if key.is_empty() {
        return Err(InvalidKeyError::Empty);
    }
    if key == ERROR_KEY {
        return Err(InvalidKeyError::ErrorReserved);
    }
    Ok(())
}

/// Checks a key used with `emit`.
///
/// Direct wildcard emission is rejected: the wildcard pass is something the
/// bus performs itself, and allowing `emit("*")` would make "which listeners
/// run" depend on a nested is-wildcard check instead of the key itself.
pub(crate) fn validate_emission(key: &str) -> Result<(), InvalidKeyError> {
    if key.is_empty() {
        return Err(InvalidKeyError::Empty);
    }
    if key == WILDCARD_KEY {
        return Err(InvalidKeyError::WildcardEmit);
    }
    if key == ERROR_KEY {
        return Err(InvalidKeyError::ErrorReserved);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinary_keys_pass_both_checks() {
        for key in ["count:add", "a", "task.started", "*scoped*"] {
            assert_eq!(validate_registration(key), Ok(()), "registration of {key:?}");
            assert_eq!(validate_emission(key), Ok(()), "emission of {key:?}");
        }
    }

    #[test]
    fn test_empty_key_rejected_everywhere() {
        assert_eq!(validate_registration(""), Err(InvalidKeyError::Empty));
        assert_eq!(validate_emission(""), Err(InvalidKeyError::Empty));
    }

    #[test]
    fn test_wildcard_registers_but_does_not_emit() {
        assert_eq!(validate_registration(WILDCARD_KEY), Ok(()));
        assert_eq!(
            validate_emission(WILDCARD_KEY),
            Err(InvalidKeyError::WildcardEmit)
        );
    }

    #[test]
    fn test_error_key_reserved_on_both_sides() {
        assert_eq!(
            validate_registration(ERROR_KEY),
            Err(InvalidKeyError::ErrorReserved)
        );
        assert_eq!(
            validate_emission(ERROR_KEY),
            Err(InvalidKeyError::ErrorReserved)
        );
    }
}
