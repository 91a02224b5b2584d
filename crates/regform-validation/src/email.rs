//! Email validation functions

use crate::string::matches_regex;

/// The pattern browsers apply to `<input type="email">`.
///
/// The domain does not need a dot, so `user@localhost` passes.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Validates email shape
pub fn is_valid_email(email: &str) -> bool {
    matches_regex(email, EMAIL_PATTERN).unwrap_or(false)
}

/// Email check that lets the empty string through.
///
/// An empty value is the required rule's concern, not the format rule's.
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() || is_valid_email(email) {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}
