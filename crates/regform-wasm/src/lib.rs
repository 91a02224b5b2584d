//! Regform WASM
//!
//! WebAssembly bindings for the registration form.
//! The browser gets the same schema and resolver the server uses, so inline
//! errors appear on change without a round trip.

use regform::{registration_schema, FieldError, FormRecord, Registration, Resolution, Resolver};
use serde::Serialize;
use wasm_bindgen::prelude::*;

thread_local! {
    static RESOLVER: Resolver<Registration> = Resolver::new(registration_schema());
}

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

fn resolve_record(record: &FormRecord) -> Resolution<Registration> {
    RESOLVER.with(|resolver| resolver.resolve(record))
}

fn field_error(field: &str, record: &FormRecord) -> Option<FieldError> {
    resolve_record(record).errors.get(field).cloned()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(JsValue::from)
}

fn record_from_js(record: JsValue) -> Result<FormRecord, JsValue> {
    serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse form record: {}", e)))
}

/// Validate a whole form record
///
/// # Returns
/// `{ values, errors }`: `values` is the validated registration or `null`,
/// `errors` maps field names to `{ type, message }`.
///
/// # Example (JavaScript)
/// ```javascript
/// const { values, errors } = resolve({
///     fullName: 'Yuri Mutti',
///     email: 'yuri@mutti.com',
///     password: 'Password@123',
///     confirmPassword: 'Password@123',
///     age: 25,
/// });
/// ```
#[wasm_bindgen]
pub fn resolve(record: JsValue) -> Result<JsValue, JsValue> {
    let record = record_from_js(record)?;
    to_js(&resolve_record(&record))
}

/// Error of one field against the whole record, or `null`
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field: &str, record: JsValue) -> Result<JsValue, JsValue> {
    let record = record_from_js(record)?;
    to_js(&field_error(field, &record))
}

/// The registration schema as plain data
#[wasm_bindgen(js_name = registrationSchema)]
pub fn registration_schema_js() -> Result<JsValue, JsValue> {
    to_js(&registration_schema())
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    regform::validation::is_valid_email(email)
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_validate_field_returns_null_for_clean_field() {
        let record = to_js(&FormRecord::new().with("email", "yuri@mutti.com")).unwrap();
        let result = validate_field("email", record).unwrap();
        assert!(result.is_null());
    }

    #[wasm_bindgen_test]
    fn test_resolve_rejects_non_object() {
        assert!(resolve(JsValue::from_str("not a record")).is_err());
    }
}
