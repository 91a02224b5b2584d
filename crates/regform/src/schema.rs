// File: src/schema.rs
// Purpose: Declarative per-field rules and the validation pass over a FormRecord

use crate::error::SchemaError;
use crate::error_map::{ErrorKind, FieldFailure};
use crate::value::{format_number, FieldValue, FormRecord};
use regform_validation as predicates;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Expected type of a field after casting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
        }
    }
}

/// A single constraint (or transform) on a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    /// Strip surrounding whitespace before any check runs
    Trim,
    Required { message: String },
    MinLength { min: usize, message: String },
    Email { message: String },
    Matches { pattern: String, message: String },
    /// Value must equal the current value of another field
    EqualsField { field: String, message: String },
    /// Value must cast to a number
    Numeric { message: String },
    Min { min: f64, message: String },
}

impl Rule {
    fn name(&self) -> &'static str {
        match self {
            Rule::Trim => "trim",
            Rule::Required { .. } => "required",
            Rule::MinLength { .. } => "minLength",
            Rule::Email { .. } => "email",
            Rule::Matches { .. } => "matches",
            Rule::EqualsField { .. } => "equalsField",
            Rule::Numeric { .. } => "numeric",
            Rule::Min { .. } => "min",
        }
    }

    fn fits(&self, kind: FieldKind) -> bool {
        match self {
            Rule::Trim | Rule::MinLength { .. } | Rule::Email { .. } | Rule::Matches { .. } => {
                kind == FieldKind::Text
            }
            Rule::Numeric { .. } | Rule::Min { .. } => kind == FieldKind::Number,
            Rule::Required { .. } | Rule::EqualsField { .. } => true,
        }
    }
}

/// A field value after casting to its kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CastValue {
    Number(f64),
    Text(String),
    Absent,
}

#[derive(Debug, Clone, PartialEq)]
enum Cast {
    Value(CastValue),
    NotANumber,
}

/// Rules of one field, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSchema {
    pub name: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

impl FieldSchema {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
            rules: Vec::new(),
        }
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Number,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn trim(self) -> Self {
        self.rule(Rule::Trim)
    }

    pub fn required(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Required {
            message: message.into(),
        })
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Rule::MinLength {
            min,
            message: message.into(),
        })
    }

    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Email {
            message: message.into(),
        })
    }

    pub fn matches(self, pattern: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(Rule::Matches {
            pattern: pattern.into(),
            message: message.into(),
        })
    }

    pub fn equals_field(self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.rule(Rule::EqualsField {
            field: field.into(),
            message: message.into(),
        })
    }

    pub fn numeric(self, message: impl Into<String>) -> Self {
        self.rule(Rule::Numeric {
            message: message.into(),
        })
    }

    pub fn min(self, min: f64, message: impl Into<String>) -> Self {
        self.rule(Rule::Min {
            min,
            message: message.into(),
        })
    }

    pub fn is_required(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Required { .. }))
    }

    /// Value a freshly rendered input holds
    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text => FieldValue::Text(String::new()),
            FieldKind::Number => FieldValue::Absent,
        }
    }

    fn trims(&self) -> bool {
        self.rules.iter().any(|r| matches!(r, Rule::Trim))
    }

    fn cast(&self, raw: &FieldValue) -> Cast {
        match (self.kind, raw) {
            (_, FieldValue::Absent) => Cast::Value(CastValue::Absent),
            (FieldKind::Text, FieldValue::Text(s)) => {
                let s = if self.trims() { s.trim() } else { s.as_str() };
                Cast::Value(CastValue::Text(s.to_string()))
            }
            (FieldKind::Text, FieldValue::Number(n)) => {
                Cast::Value(CastValue::Text(format_number(*n)))
            }
            (FieldKind::Number, FieldValue::Text(s)) => match predicates::parse_number(s) {
                Some(n) => Cast::Value(CastValue::Number(n)),
                None => Cast::NotANumber,
            },
            (FieldKind::Number, FieldValue::Number(n)) if !n.is_finite() => Cast::NotANumber,
            (FieldKind::Number, FieldValue::Number(n)) => Cast::Value(CastValue::Number(*n)),
        }
    }

    fn failure(&self, kind: ErrorKind, message: &str) -> FieldFailure {
        FieldFailure {
            field: self.name.clone(),
            kind,
            message: message.to_string(),
        }
    }

    /// Gate rules run first: type check, cross-field equality and presence.
    /// Any gate failure is final for the field.
    fn check_gates(
        &self,
        cast: &Cast,
        schema: &Schema,
        record: &FormRecord,
    ) -> Result<Vec<FieldFailure>, SchemaError> {
        let mut failures = Vec::new();

        if *cast == Cast::NotANumber {
            let message = self
                .rules
                .iter()
                .find_map(|r| match r {
                    Rule::Numeric { message } => Some(message.clone()),
                    _ => None,
                })
                .unwrap_or_else(|| format!("{} must be a number", self.name));
            failures.push(self.failure(ErrorKind::Type, &message));
        }

        for rule in &self.rules {
            let Rule::EqualsField { field, message } = rule else {
                continue;
            };
            let target = schema
                .field(field)
                .ok_or_else(|| SchemaError::UnknownReference {
                    field: self.name.clone(),
                    target: field.clone(),
                })?;

            let Cast::Value(value) = cast else {
                failures.push(self.failure(ErrorKind::Match, message));
                continue;
            };
            // An absent value is not compared; presence decides it
            if *value == CastValue::Absent {
                continue;
            }
            let other = target.cast(record.get(field));
            if other != Cast::Value(value.clone()) {
                failures.push(self.failure(ErrorKind::Match, message));
            }
        }

        if *cast == Cast::Value(CastValue::Absent) {
            if let Some(Rule::Required { message }) = self
                .rules
                .iter()
                .find(|r| matches!(r, Rule::Required { .. }))
            {
                failures.push(self.failure(ErrorKind::Required, message));
            }
        }

        Ok(failures)
    }

    /// Value rules: every one runs and every failure is kept, in order.
    fn check_values(&self, value: &CastValue) -> Result<Vec<FieldFailure>, SchemaError> {
        let mut failures = Vec::new();

        for rule in &self.rules {
            let failed = match (rule, value) {
                (Rule::Required { message }, CastValue::Text(s)) => predicates::validate_required(s)
                    .err()
                    .map(|_| (ErrorKind::Required, message)),
                (Rule::MinLength { min, message }, CastValue::Text(s)) => {
                    predicates::validate_min_length(s, *min)
                        .err()
                        .map(|_| (ErrorKind::Length, message))
                }
                (Rule::Email { message }, CastValue::Text(s)) => predicates::validate_email(s)
                    .err()
                    .map(|_| (ErrorKind::Format, message)),
                (Rule::Matches { pattern, message }, CastValue::Text(s)) => {
                    let matched = predicates::matches_regex(s, pattern).map_err(|source| {
                        SchemaError::InvalidPattern {
                            field: self.name.clone(),
                            pattern: pattern.clone(),
                            source,
                        }
                    })?;
                    (!matched).then_some((ErrorKind::Format, message))
                }
                (Rule::Min { min, message }, CastValue::Number(n)) => predicates::validate_min(*n, *min)
                    .err()
                    .map(|_| (ErrorKind::Range, message)),
                _ => None,
            };

            if let Some((kind, message)) = failed {
                failures.push(self.failure(kind, message));
            }
        }

        Ok(failures)
    }

    fn validate(
        &self,
        schema: &Schema,
        record: &FormRecord,
    ) -> Result<(CastValue, Vec<FieldFailure>), SchemaError> {
        if let Some(rule) = self.rules.iter().find(|r| !r.fits(self.kind)) {
            return Err(SchemaError::KindMismatch {
                field: self.name.clone(),
                rule: rule.name(),
                kind: self.kind.as_str(),
            });
        }

        let cast = self.cast(record.get(&self.name));
        let gate_failures = self.check_gates(&cast, schema, record)?;
        let value = match cast {
            Cast::Value(value) if gate_failures.is_empty() => value,
            _ => return Ok((CastValue::Absent, gate_failures)),
        };

        if value == CastValue::Absent {
            return Ok((value, Vec::new()));
        }

        let failures = self.check_values(&value)?;
        Ok((value, failures))
    }
}

/// Cast values of a record that passed every rule
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatedValues(BTreeMap<String, CastValue>);

impl ValidatedValues {
    pub fn get(&self, field: &str) -> Option<&CastValue> {
        self.0.get(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of a full validation pass
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Valid(ValidatedValues),
    /// Every failure of every field, fields in schema order
    Invalid(Vec<FieldFailure>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid(_))
    }
}

/// The complete ordered set of field rules
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Record a freshly rendered form starts from
    pub fn default_record(&self) -> FormRecord {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.default_value()))
            .collect()
    }

    /// Build a record from submitted text inputs (e.g. an urlencoded body).
    ///
    /// An empty number input is read as `Absent`, the way the browser reports
    /// an untouched `type=number` field. Undeclared names are kept as text.
    pub fn record_from_inputs<I, K, V>(&self, pairs: I) -> FormRecord
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(name, text)| {
                let (name, text) = (name.into(), text.into());
                let value = match self.field(&name) {
                    Some(field) if field.kind == FieldKind::Number && text.trim().is_empty() => {
                        FieldValue::Absent
                    }
                    _ => FieldValue::Text(text),
                };
                (name, value)
            })
            .collect()
    }

    /// Validate every field and collect every failure (not fail-fast).
    ///
    /// Returns `Err` only for engine faults; failing input is
    /// `Ok(ValidationOutcome::Invalid(..))`.
    pub fn validate(&self, record: &FormRecord) -> Result<ValidationOutcome, SchemaError> {
        let mut values = BTreeMap::new();
        let mut failures = Vec::new();

        for field in &self.fields {
            let (value, field_failures) = field.validate(self, record)?;
            failures.extend(field_failures);
            values.insert(field.name.clone(), value);
        }

        if failures.is_empty() {
            Ok(ValidationOutcome::Valid(ValidatedValues(values)))
        } else {
            Ok(ValidationOutcome::Invalid(failures))
        }
    }
}
