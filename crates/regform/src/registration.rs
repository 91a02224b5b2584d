//! The registration form: its schema and its validated output.

use crate::schema::{FieldSchema, Schema};
use regform_validation::{DIGIT_PATTERN, MIN_PASSWORD_LENGTH, SPECIAL_CHAR_PATTERN};
use serde::{Deserialize, Serialize};

pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const AGE: &str = "age";

pub const MIN_FULL_NAME_LENGTH: usize = 3;
pub const MIN_AGE: f64 = 18.0;

/// Registration data that passed every rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Trimmed
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: f64,
}

/// Rules for the five registration fields.
///
/// Rule order matters: when several value rules fail, the one declared last
/// is the message shown.
pub fn registration_schema() -> Schema {
    Schema::new(vec![
        FieldSchema::text(FULL_NAME)
            .trim()
            .required("Full Name is required")
            .min_length(MIN_FULL_NAME_LENGTH, "Full Name must be at least 3 characters"),
        FieldSchema::text(EMAIL)
            .required("Email is required")
            .email("Invalid email format"),
        FieldSchema::text(PASSWORD)
            .required("Password is required")
            .min_length(MIN_PASSWORD_LENGTH, "Password must be at least 8 characters")
            .matches(DIGIT_PATTERN, "Password must contain at least one number")
            .matches(
                SPECIAL_CHAR_PATTERN,
                "Password must contain at least one special character",
            ),
        FieldSchema::text(CONFIRM_PASSWORD)
            .equals_field(PASSWORD, "Passwords must match")
            .required("Confirm Password is required"),
        FieldSchema::number(AGE)
            .numeric("Age must be a number")
            .required("Age is required")
            .min(MIN_AGE, "You must be at least 18"),
    ])
}
