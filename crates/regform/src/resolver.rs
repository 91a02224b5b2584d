// File: src/resolver.rs
// Purpose: Adapt schema validation into the values/errors contract of the presentation layer

use crate::error::SchemaError;
use crate::error_map::ErrorMap;
use crate::schema::{Schema, ValidationOutcome};
use crate::value::FormRecord;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::sync::Arc;

/// What the presentation layer receives from one validation pass.
///
/// Either `values` is set and `errors` is empty, or `values` is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution<T> {
    pub values: Option<T>,
    pub errors: ErrorMap,
}

impl<T> Resolution<T> {
    pub fn valid(values: T) -> Self {
        Self {
            values: Some(values),
            errors: ErrorMap::new(),
        }
    }

    pub fn invalid(errors: ErrorMap) -> Self {
        Self {
            values: None,
            errors,
        }
    }

    /// Neither values nor errors: the engine could not reach a verdict
    pub fn empty() -> Self {
        Self::invalid(ErrorMap::new())
    }

    pub fn is_valid(&self) -> bool {
        self.values.is_some()
    }
}

/// Runs a schema over a record and produces a typed `Resolution`.
pub struct Resolver<T> {
    schema: Arc<Schema>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Clone for Resolver<T> {
    fn clone(&self) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            _output: PhantomData,
        }
    }
}

impl<T: DeserializeOwned> Resolver<T> {
    pub fn new(schema: Schema) -> Self {
        Self::shared(Arc::new(schema))
    }

    pub fn shared(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            _output: PhantomData,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate and surface engine faults to the caller.
    pub fn try_resolve(&self, record: &FormRecord) -> Result<Resolution<T>, SchemaError> {
        match self.schema.validate(record)? {
            ValidationOutcome::Valid(values) => {
                let json = serde_json::to_value(&values)?;
                Ok(Resolution::valid(serde_json::from_value(json)?))
            }
            ValidationOutcome::Invalid(failures) => {
                let errors = ErrorMap::from_failures(&failures);
                tracing::debug!(
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "validation rejected record"
                );
                Ok(Resolution::invalid(errors))
            }
        }
    }

    /// Validate, reporting an engine fault as "no values, no errors".
    ///
    /// The fault is logged at error level; use `try_resolve` to handle it.
    pub fn resolve(&self, record: &FormRecord) -> Resolution<T> {
        self.try_resolve(record).unwrap_or_else(|err| {
            tracing::error!(error = %err, "validation engine fault, reporting no errors");
            Resolution::empty()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSchema;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Login {
        user: String,
    }

    #[test]
    fn test_valid_record_yields_values() {
        let resolver: Resolver<Login> =
            Resolver::new(Schema::new(vec![FieldSchema::text("user").trim().required("req")]));

        let resolution = resolver.resolve(&FormRecord::new().with("user", " yuri "));

        assert!(resolution.errors.is_empty());
        assert_eq!(resolution.values, Some(Login { user: "yuri".into() }));
    }

    #[test]
    fn test_invalid_record_yields_errors_only() {
        let resolver: Resolver<Login> =
            Resolver::new(Schema::new(vec![FieldSchema::text("user").required("req")]));

        let resolution = resolver.resolve(&FormRecord::new().with("user", ""));

        assert!(resolution.values.is_none());
        assert_eq!(resolution.errors.message("user"), Some("req"));
    }

    #[test]
    fn test_fault_is_masked_by_resolve_but_surfaced_by_try_resolve() {
        let resolver: Resolver<Login> = Resolver::new(Schema::new(vec![
            FieldSchema::text("user").equals_field("nobody", "mismatch")
        ]));
        let record = FormRecord::new().with("user", "x");

        let resolution = resolver.resolve(&record);
        assert!(resolution.values.is_none());
        assert!(resolution.errors.is_empty());

        assert!(matches!(
            resolver.try_resolve(&record),
            Err(SchemaError::UnknownReference { .. })
        ));
    }

    #[test]
    fn test_output_type_mismatch_is_a_fault() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct NeedsCount {
            count: u32,
        }

        let resolver: Resolver<NeedsCount> =
            Resolver::new(Schema::new(vec![FieldSchema::text("user")]));

        let result = resolver.try_resolve(&FormRecord::new().with("user", "x"));
        assert!(matches!(result, Err(SchemaError::Output(_))));
    }
}
