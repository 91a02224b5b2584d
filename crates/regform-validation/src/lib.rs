//! Regform Validation Core
//!
//! Pure predicate functions shared by the schema engine, the server host and
//! the WASM host. Nothing in here knows about field names or messages beyond
//! the generic defaults; the schema supplies the user-facing text.

pub mod email;
pub mod numeric;
pub mod password;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use password::*;
pub use string::*;
