// regform - registration form validation
// Declarative field schema, resolver and the form controller the hosts drive

pub mod error;
pub mod error_map;
pub mod field;
pub mod form;
pub mod registration;
pub mod resolver;
pub mod schema;
pub mod value;

// Re-export core types
pub use error::{FormError, SchemaError};
pub use error_map::{ErrorKind, ErrorMap, FieldError, FieldFailure};
pub use field::{descriptor, FieldAttrs, FieldDescriptor, FIELDS};
pub use form::{FormController, RegistrationForm, SubmitOutcome};
pub use registration::{registration_schema, Registration};
pub use resolver::{Resolution, Resolver};
pub use schema::{CastValue, FieldKind, FieldSchema, Rule, Schema, ValidatedValues, ValidationOutcome};
pub use value::{FieldValue, FormRecord};

// Re-export the predicate crate for hosts that check single values
pub use regform_validation as validation;
