// File: src/error_map.rs
// Purpose: Validation failure taxonomy and the field-keyed error map

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// What kind of constraint a failure came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Required,
    Format,
    Length,
    Range,
    Match,
    Type,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Format => "format",
            ErrorKind::Length => "length",
            ErrorKind::Range => "range",
            ErrorKind::Match => "match",
            ErrorKind::Type => "type",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One failing rule, in the order the schema produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFailure {
    pub field: String,
    pub kind: ErrorKind,
    pub message: String,
}

/// The message shown for a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub message: String,
}

/// Field name to its current error.
///
/// Holds at most one entry per field. Empty means every field passed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, FieldError>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold ordered failures into one entry per field.
    ///
    /// A later failure for the same field replaces an earlier one, so the
    /// last failing rule in declaration order is the one surfaced.
    pub fn from_failures<'a, I>(failures: I) -> Self
    where
        I: IntoIterator<Item = &'a FieldFailure>,
    {
        failures.into_iter().fold(Self::new(), |mut map, failure| {
            map.insert(
                failure.field.clone(),
                FieldError {
                    kind: failure.kind,
                    message: failure.message.clone(),
                },
            );
            map
        })
    }

    pub fn insert(&mut self, field: impl Into<String>, error: FieldError) {
        self.0.insert(field.into(), error);
    }

    pub fn remove(&mut self, field: &str) -> Option<FieldError> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.get(field)
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|e| e.message.as_str())
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldError)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(field: &str, kind: ErrorKind, message: &str) -> FieldFailure {
        FieldFailure {
            field: field.to_string(),
            kind,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_last_failure_per_field_wins() {
        let failures = vec![
            failure("password", ErrorKind::Required, "Password is required"),
            failure("email", ErrorKind::Required, "Email is required"),
            failure("password", ErrorKind::Format, "needs a symbol"),
        ];

        let map = ErrorMap::from_failures(&failures);

        assert_eq!(map.len(), 2);
        assert_eq!(map.message("password"), Some("needs a symbol"));
        assert_eq!(map.get("password").map(|e| e.kind), Some(ErrorKind::Format));
        assert_eq!(map.message("email"), Some("Email is required"));
    }

    #[test]
    fn test_empty_failures_give_empty_map() {
        let map = ErrorMap::from_failures(std::iter::empty::<&FieldFailure>());
        assert!(map.is_empty());
        assert!(!map.has_error("email"));
    }

    #[test]
    fn test_json_shape() {
        let map = ErrorMap::from_failures(&[failure("age", ErrorKind::Range, "You must be at least 18")]);
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "age": { "type": "range", "message": "You must be at least 18" } })
        );
    }
}
