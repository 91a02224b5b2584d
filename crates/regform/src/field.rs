// File: src/field.rs
// Purpose: Presentation metadata for each registration field

use crate::error_map::ErrorMap;
use crate::registration::{AGE, CONFIRM_PASSWORD, EMAIL, FULL_NAME, PASSWORD};
use std::collections::BTreeMap;

/// How a field is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    /// `type` attribute of the input element
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub auto_focus: bool,
}

/// Registration fields in display order
pub const FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor {
        name: FULL_NAME,
        input_type: "text",
        placeholder: "Full Name",
        auto_focus: true,
    },
    FieldDescriptor {
        name: EMAIL,
        input_type: "email",
        placeholder: "Email",
        auto_focus: false,
    },
    FieldDescriptor {
        name: PASSWORD,
        input_type: "password",
        placeholder: "Password",
        auto_focus: false,
    },
    FieldDescriptor {
        name: CONFIRM_PASSWORD,
        input_type: "password",
        placeholder: "Confirm Password",
        auto_focus: false,
    },
    FieldDescriptor {
        name: AGE,
        input_type: "number",
        placeholder: "Age",
        auto_focus: false,
    },
];

pub fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|f| f.name == name)
}

impl FieldDescriptor {
    /// Id of the element holding this field's inline error
    pub fn error_id(&self) -> String {
        format!("{}-error", self.name)
    }

    /// Attributes for one render pass against the current errors
    pub fn attrs(&self, errors: &ErrorMap) -> FieldAttrs {
        let mut attrs = FieldAttrs::new();
        attrs.insert("name", self.name);
        attrs.insert("type", self.input_type);
        attrs.insert("placeholder", self.placeholder);
        if self.auto_focus {
            attrs.insert("autofocus", "");
        }
        if errors.has_error(self.name) {
            attrs.insert("aria-invalid", "true");
            attrs.insert("aria-errormessage", self.error_id());
        }
        attrs
    }
}

/// Attribute name to value for an input element.
///
/// An empty value renders as a bare boolean attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldAttrs {
    attrs: BTreeMap<String, String>,
}

impl FieldAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn is_invalid(&self) -> bool {
        self.get("aria-invalid") == Some("true")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
