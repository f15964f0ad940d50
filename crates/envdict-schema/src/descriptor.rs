//! # Descriptors
//!
//! Two list-shaped schema forms:
//!
//! - [`Descriptor`] carries its own value: `{ name, value, validator }`.
//!   Used by [`Dictionary::from_descriptor_list`](crate::Dictionary::from_descriptor_list).
//! - [`VarDescriptor`] names a key to look up in the raw values:
//!   `{ var, type }`. Used by the reflective constructors.
//!
//! Both are explicit records. Loosely shaped JSON records are accepted only
//! through the `from_value` parsers, which are where missing names and
//! missing types are detected.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use envdict_core::{DictionaryError, Validator};

/// Reserved field holding the validator kind in descriptor records.
pub const TYPE_FIELD: &str = "type";

/// A variable name, its value, and the validator governing it.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    name: String,
    value: Value,
    validator: Validator,
}

impl Descriptor {
    pub fn new(name: impl Into<String>, value: Value, validator: Validator) -> Self {
        Self {
            name: name.into(),
            value,
            validator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn validator(&self) -> Validator {
        self.validator
    }

    /// Consumes self and returns `(name, value, validator)`.
    pub fn into_parts(self) -> (String, Value, Validator) {
        (self.name, self.value, self.validator)
    }

    /// Parse a record of the form `{ "<NAME>": <value>, "type": "<kind>" }`.
    ///
    /// The name is the first field other than `type`. Records with more
    /// than one such field keep the first and log the rest.
    ///
    /// # Errors
    ///
    /// - `DictionaryError::MissingKeyName` if the record is not an object or
    ///   has no field besides `type`. Checked first.
    /// - `DictionaryError::MissingType` if `type` is absent, not a string, or
    ///   not a known kind name.
    pub fn from_value(record: &Value) -> Result<Self, DictionaryError> {
        let empty = Map::new();
        let fields = record.as_object().unwrap_or(&empty);

        let mut names = fields.iter().filter(|(k, _)| k.as_str() != TYPE_FIELD);
        let (name, value) = names.next().ok_or(DictionaryError::MissingKeyName)?;
        let extra: Vec<&str> = names.map(|(k, _)| k.as_str()).collect();
        if !extra.is_empty() {
            tracing::warn!(
                key = %name,
                ignored = ?extra,
                "descriptor has more than one variable name; using the first"
            );
        }

        let validator = validator_field(fields)?;
        Ok(Self::new(name.clone(), value.clone(), validator))
    }
}

/// A key to look up in the raw values and the validator governing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarDescriptor {
    pub var: String,
    #[serde(rename = "type")]
    pub validator: Validator,
}

impl VarDescriptor {
    pub fn new(var: impl Into<String>, validator: Validator) -> Self {
        Self {
            var: var.into(),
            validator,
        }
    }

    /// Parse a record of the form `{ "var": "<NAME>", "type": "<kind>" }`.
    ///
    /// # Errors
    ///
    /// - `DictionaryError::MissingKeyName` if `var` is absent or not a string.
    /// - `DictionaryError::MissingType` if `type` is absent or unusable.
    pub fn from_value(record: &Value) -> Result<Self, DictionaryError> {
        let empty = Map::new();
        let fields = record.as_object().unwrap_or(&empty);
        let var = fields
            .get("var")
            .and_then(Value::as_str)
            .ok_or(DictionaryError::MissingKeyName)?;
        let validator = validator_field(fields)?;
        Ok(Self::new(var, validator))
    }
}

fn validator_field(fields: &Map<String, Value>) -> Result<Validator, DictionaryError> {
    fields
        .get(TYPE_FIELD)
        .and_then(Value::as_str)
        .and_then(|kind| kind.parse::<Validator>().ok())
        .ok_or(DictionaryError::MissingType)
}

#[cfg(test)]
mod tests {
    use super::*;
    use envdict_core::catalog;
    use serde_json::json;

    #[test]
    fn test_descriptor_from_value() {
        let d = Descriptor::from_value(&json!({"PORT": 3000, "type": "number"})).unwrap();
        assert_eq!(d.name(), "PORT");
        assert_eq!(d.value(), &json!(3000));
        assert_eq!(d.validator(), catalog::number());
    }

    #[test]
    fn test_descriptor_type_field_may_come_first() {
        let d = Descriptor::from_value(&json!({"type": "string", "HOST": "localhost"})).unwrap();
        assert_eq!(d.name(), "HOST");
    }

    #[test]
    fn test_descriptor_without_name() {
        let err = Descriptor::from_value(&json!({"type": "string"})).unwrap_err();
        assert_eq!(err, DictionaryError::MissingKeyName);
        assert_eq!(err.to_string(), "Descriptor must have a variable name");
    }

    #[test]
    fn test_descriptor_not_an_object() {
        assert_eq!(
            Descriptor::from_value(&json!("PORT")).unwrap_err(),
            DictionaryError::MissingKeyName
        );
    }

    #[test]
    fn test_descriptor_without_type() {
        let err = Descriptor::from_value(&json!({"API_KEY": "secret"})).unwrap_err();
        assert_eq!(err, DictionaryError::MissingType);
        assert_eq!(err.to_string(), "Descriptor must have a type");
    }

    #[test]
    fn test_descriptor_with_unknown_type() {
        for record in [
            json!({"API_KEY": "secret", "type": "text"}),
            json!({"API_KEY": "secret", "type": 1}),
            json!({"API_KEY": "secret", "type": null}),
        ] {
            assert_eq!(
                Descriptor::from_value(&record).unwrap_err(),
                DictionaryError::MissingType
            );
        }
    }

    #[test]
    fn test_empty_descriptor_reports_missing_name_first() {
        assert_eq!(
            Descriptor::from_value(&json!({})).unwrap_err(),
            DictionaryError::MissingKeyName
        );
    }

    #[test]
    fn test_var_descriptor_from_value() {
        let d = VarDescriptor::from_value(&json!({"var": "PORT", "type": "number"})).unwrap();
        assert_eq!(d, VarDescriptor::new("PORT", catalog::number()));
        assert_eq!(
            VarDescriptor::from_value(&json!({"type": "number"})).unwrap_err(),
            DictionaryError::MissingKeyName
        );
        assert_eq!(
            VarDescriptor::from_value(&json!({"var": "PORT"})).unwrap_err(),
            DictionaryError::MissingType
        );
    }

    #[test]
    fn test_var_descriptor_serde_shape() {
        let d = VarDescriptor::new("DEBUG", catalog::boolean());
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({"var": "DEBUG", "type": "boolean"})
        );
    }
}
