// File: src/form.rs
// Purpose: In-memory form state owned by one rendered form instance

use crate::error::FormError;
use crate::error_map::{ErrorMap, FieldError};
use crate::registration::{registration_schema, Registration};
use crate::resolver::Resolver;
use crate::schema::Schema;
use crate::value::{FieldValue, FormRecord};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// What a submit attempt did
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Callback ran and the form was reset
    Submitted,
    /// Nothing submitted; the errors now shown
    Rejected(ErrorMap),
}

/// Form controller: record, defaults, errors and validity.
///
/// Revalidates on every change. After a change only the changed field's
/// error is updated, so untouched fields stay quiet until submit.
pub struct FormController<T> {
    resolver: Resolver<T>,
    defaults: FormRecord,
    record: FormRecord,
    errors: ErrorMap,
    valid: bool,
}

/// The registration form
pub type RegistrationForm = FormController<Registration>;

impl RegistrationForm {
    pub fn registration() -> Self {
        Self::new(registration_schema())
    }
}

impl<T: DeserializeOwned> FormController<T> {
    pub fn new(schema: Schema) -> Self {
        Self::with_resolver(Resolver::new(schema))
    }

    pub fn shared(schema: Arc<Schema>) -> Self {
        Self::with_resolver(Resolver::shared(schema))
    }

    fn with_resolver(resolver: Resolver<T>) -> Self {
        let defaults = resolver.schema().default_record();
        Self {
            resolver,
            record: defaults.clone(),
            defaults,
            errors: ErrorMap::new(),
            valid: false,
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn value(&self, field: &str) -> &FieldValue {
        self.record.get(field)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// True only after a validation pass found no errors
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Store a value and revalidate.
    pub fn set_value(
        &mut self,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        if self.resolver.schema().field(field).is_none() {
            return Err(FormError::UnknownField(field.to_string()));
        }
        self.record.set(field, value);

        let resolution = self.resolver.resolve(&self.record);
        self.valid = resolution.is_valid();
        match resolution.errors.get(field) {
            Some(error) => self.errors.insert(field, error.clone()),
            None => {
                self.errors.remove(field);
            }
        }
        Ok(())
    }

    /// Replace every field at once, e.g. from a submitted request body.
    /// Fields the schema does not declare are ignored.
    pub fn fill(&mut self, record: &FormRecord) {
        for (field, value) in record.iter() {
            if self.resolver.schema().field(field).is_some() {
                self.record.set(field.clone(), value.clone());
            }
        }
    }

    /// Validate the whole record and show every error.
    pub fn validate(&mut self) -> Option<T> {
        let resolution = self.resolver.resolve(&self.record);
        self.valid = resolution.is_valid();
        self.errors = resolution.errors;
        resolution.values
    }

    /// Validate; on success hand the values to `on_submit` and reset.
    ///
    /// Logging the accepted values is left to `on_submit`, which knows which
    /// of them are safe to record.
    pub fn handle_submit<F>(&mut self, on_submit: F) -> SubmitOutcome
    where
        F: FnOnce(T),
    {
        match self.validate() {
            Some(values) => {
                on_submit(values);
                self.reset();
                SubmitOutcome::Submitted
            }
            None => SubmitOutcome::Rejected(self.errors.clone()),
        }
    }

    /// Restore defaults and clear errors
    pub fn reset(&mut self) {
        self.record = self.defaults.clone();
        self.errors.clear();
        self.valid = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{AGE, EMAIL, FULL_NAME};

    #[test]
    fn test_fresh_form_is_invalid_and_quiet() {
        let form = RegistrationForm::registration();
        assert!(!form.is_valid());
        assert!(form.errors().is_empty());
        assert_eq!(form.value(FULL_NAME), &FieldValue::text(""));
        assert!(form.value(AGE).is_absent());
    }

    #[test]
    fn test_change_only_updates_changed_field() {
        let mut form = RegistrationForm::registration();

        form.set_value(EMAIL, "invalid-email").unwrap();

        assert_eq!(form.errors().len(), 1);
        assert_eq!(
            form.error(EMAIL).map(|e| e.message.as_str()),
            Some("Invalid email format")
        );

        form.set_value(EMAIL, "yuri@mutti.com").unwrap();
        assert!(form.errors().is_empty());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut form = RegistrationForm::registration();
        assert_eq!(
            form.set_value("nickname", "yuri"),
            Err(FormError::UnknownField("nickname".into()))
        );
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = RegistrationForm::registration();
        form.set_value(FULL_NAME, "Yu").unwrap();
        form.set_value(AGE, "15").unwrap();
        assert!(!form.errors().is_empty());

        form.reset();

        assert_eq!(form.record(), &registration_schema().default_record());
        assert!(form.errors().is_empty());
    }
}
