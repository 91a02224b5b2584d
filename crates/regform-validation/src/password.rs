//! Password rule constants
//!
//! The constraints are applied as ordered `Matches` rules by the schema so
//! each one can carry its own message.

/// Minimum password length for registration
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// "Contains a digit", ASCII digits only
pub const DIGIT_PATTERN: &str = "[0-9]";

/// "Contains a special character": anything outside `[a-zA-Z0-9]`.
/// Whitespace and non-ASCII letters count as special.
pub const SPECIAL_CHAR_PATTERN: &str = "[^a-zA-Z0-9]";
