// File: src/value.rs
// Purpose: Raw field values and the in-memory form record

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw input of a single field, before any casting.
///
/// Serialized untagged: strings are `Text`, numbers are `Number`, `null` is
/// `Absent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    /// Never set (e.g. an untouched number input)
    #[default]
    Absent,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Text as it would appear in an input element
    pub fn to_display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Absent => String::new(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

/// Formats integral floats without a trailing `.0`.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Mapping of field name to raw input value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord(BTreeMap<String, FieldValue>);

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Missing fields read as `Absent`
    pub fn get(&self, field: &str) -> &FieldValue {
        static ABSENT: FieldValue = FieldValue::Absent;
        self.0.get(field).unwrap_or(&ABSENT)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FormRecord {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_reads_absent() {
        let record = FormRecord::new().with("email", "a@b.c");
        assert_eq!(record.get("email"), &FieldValue::text("a@b.c"));
        assert!(record.get("age").is_absent());
    }

    #[test]
    fn test_untagged_json_shapes() {
        let record: FormRecord =
            serde_json::from_str(r#"{"fullName":"Yuri","age":25,"confirmPassword":null}"#).unwrap();
        assert_eq!(record.get("fullName"), &FieldValue::text("Yuri"));
        assert_eq!(record.get("age"), &FieldValue::Number(25.0));
        assert_eq!(record.get("confirmPassword"), &FieldValue::Absent);
        assert!(record.contains("confirmPassword"));
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Number(25.0).to_display(), "25");
        assert_eq!(FieldValue::Number(18.5).to_display(), "18.5");
        assert_eq!(FieldValue::Absent.to_display(), "");
    }
}
