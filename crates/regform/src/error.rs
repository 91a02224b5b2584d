use thiserror::Error;

/// Faults of the validation engine itself.
///
/// These are not validation failures of user input: they mean the schema is
/// malformed and no field-level verdict can be trusted.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("field `{field}` references unknown field `{target}`")]
    UnknownReference { field: String, target: String },

    #[error("field `{field}` has an invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("rule `{rule}` cannot apply to {kind} field `{field}`")]
    KindMismatch {
        field: String,
        rule: &'static str,
        kind: &'static str,
    },

    #[error("validated values do not fit the output type: {0}")]
    Output(#[from] serde_json::Error),
}

/// Misuse of the form controller by the presentation layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
}
