//! # Validators
//!
//! A [`Validator`] pairs a [`ValidatorKind`] with its membership predicate.
//! Validators are `Copy`, carry no state beyond their kind, and can be
//! shared freely across threads and dictionaries.
//!
//! ## Invariant
//!
//! The predicate accepts exactly the runtime shapes named by the kind.
//! Predicates are pure and total: they never panic, never mutate their
//! input, and return the same answer for the same input.
//!
//! Absent values are modelled as `None`. Only `any` accepts them.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

use crate::classify::TypeClass;
use crate::error::EnvdictError;
use crate::kind::ValidatorKind;
use crate::numeric::{numeric_value, parse_numeric_str};

/// A type descriptor with a membership predicate.
///
/// Serializes as its kind name, so a schema file can say `PORT: number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Validator {
    kind: ValidatorKind,
}

impl Validator {
    /// Create the validator for `kind`.
    pub const fn new(kind: ValidatorKind) -> Self {
        Self { kind }
    }

    /// The kind this validator checks.
    pub const fn kind(&self) -> ValidatorKind {
        self.kind
    }

    /// The coarse type class recorded for keys that pass this validator.
    pub fn type_class(&self) -> TypeClass {
        self.kind.type_class()
    }

    /// Decide whether `value` belongs to this validator's kind.
    ///
    /// `None` stands for an absent key.
    pub fn is_valid(&self, value: Option<&Value>) -> bool {
        match (self.kind, value) {
            (ValidatorKind::Any, _) => true,
            (_, None) => false,
            (ValidatorKind::String, Some(v)) => v.is_string(),
            (ValidatorKind::Number, Some(Value::Number(_))) => true,
            (ValidatorKind::Number, Some(Value::String(s))) => parse_numeric_str(s).is_some(),
            (ValidatorKind::Number, Some(_)) => false,
            (ValidatorKind::Boolean, Some(v)) => v.is_boolean(),
            (ValidatorKind::Object, Some(v)) => v.is_object(),
            (ValidatorKind::Array, Some(v)) => v.is_array(),
        }
    }

    /// Shorthand for [`is_valid`](Self::is_valid) on a present value.
    pub fn accepts(&self, value: &Value) -> bool {
        self.is_valid(Some(value))
    }

    /// Like [`is_valid`](Self::is_valid), but for callers that store the
    /// value as-is: a `number` validator accepts only JSON numbers here,
    /// since a numeric string would otherwise end up stored as a string.
    pub fn is_valid_uncoerced(&self, value: Option<&Value>) -> bool {
        match self.kind {
            ValidatorKind::Number => matches!(value, Some(Value::Number(_))),
            ValidatorKind::String
            | ValidatorKind::Boolean
            | ValidatorKind::Object
            | ValidatorKind::Array
            | ValidatorKind::Any => self.is_valid(value),
        }
    }

    /// Convert an already-validated value into its stored form.
    ///
    /// A numeric string checked by a `number` validator becomes a JSON
    /// number. Every other value is returned unchanged.
    pub fn coerce(&self, value: Value) -> Value {
        match self.kind {
            ValidatorKind::Number => {
                let parsed = value
                    .as_str()
                    .and_then(parse_numeric_str)
                    .and_then(numeric_value);
                parsed.map(Value::Number).unwrap_or(value)
            }
            ValidatorKind::String
            | ValidatorKind::Boolean
            | ValidatorKind::Object
            | ValidatorKind::Array
            | ValidatorKind::Any => value,
        }
    }
}

impl From<ValidatorKind> for Validator {
    fn from(kind: ValidatorKind) -> Self {
        Self::new(kind)
    }
}

impl FromStr for Validator {
    type Err = EnvdictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ValidatorKind>().map(Self::new)
    }
}

impl std::fmt::Display for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.kind.fmt(f)
    }
}
