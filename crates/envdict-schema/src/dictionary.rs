//! # Dictionary Builder
//!
//! Builds a validated [`Dictionary`] from raw values and a schema.
//!
//! ## Strategies
//!
//! | Constructor | Schema | Coerces | Unknown raw keys | Type map | Failure |
//! |-------------|--------|---------|------------------|----------|---------|
//! | [`Dictionary::pass_through`] | none | no | kept | by value shape | never |
//! | [`Dictionary::from_schema_map`] | [`SchemaMap`] | yes | dropped | by kind | `InvalidEnvironmentVariable` |
//! | [`Dictionary::from_var_descriptors`] | [`VarDescriptor`] list | yes | dropped | by kind | `InvalidEnvironmentVariable` |
//! | [`Dictionary::from_descriptor_list`] | [`Descriptor`] list | no | n/a | none | `InvalidValue` |
//!
//! The coercing strategies and the descriptor-list strategy differ in their
//! error message and in how they treat numeric strings. Both differences are
//! part of the public contract.
//!
//! ## Failure Semantics
//!
//! Keys are processed in schema order and the first failure aborts the
//! whole construction. No partial dictionary is returned.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use envdict_core::{DictionaryError, TypeClass, Validator};

use crate::descriptor::{Descriptor, VarDescriptor};
use crate::raw::RawValues;
use crate::schema::SchemaMap;

/// Key to coarse type class, in output order.
pub type TypeMap = IndexMap<String, TypeClass>;

/// A validated, immutable mapping from key to value.
///
/// The type map covers every declared key, while `values` holds only keys
/// that had a value. A key declared `any` and absent from the raw values
/// therefore has a type entry (`Object`) but no value entry, so
/// `types().len()` may exceed `len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dictionary {
    values: IndexMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    types: Option<TypeMap>,
}

impl Dictionary {
    /// Keep every raw value unchanged and classify each by its own shape.
    pub fn pass_through(raw: RawValues) -> Self {
        let values = raw.into_inner();
        let types = values
            .iter()
            .map(|(k, v)| (k.clone(), TypeClass::of(v)))
            .collect();
        Self {
            values,
            types: Some(types),
        }
    }

    /// Validate the keys declared in `schema` against `raw`.
    ///
    /// Numeric strings under `number` keys are stored as numbers. Raw keys
    /// the schema does not declare are dropped.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::InvalidEnvironmentVariable` for the first
    /// declared key whose raw value fails its validator.
    pub fn from_schema_map(raw: &RawValues, schema: &SchemaMap) -> Result<Self, DictionaryError> {
        Self::validate_keyed(raw, schema.iter())
    }

    /// Like [`from_schema_map`](Self::from_schema_map), with validators
    /// taken from an ordered `{ var, type }` list.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::InvalidEnvironmentVariable` for the first
    /// descriptor whose raw value fails its validator.
    pub fn from_var_descriptors(
        raw: &RawValues,
        descriptors: &[VarDescriptor],
    ) -> Result<Self, DictionaryError> {
        Self::validate_keyed(raw, descriptors.iter().map(|d| (d.var.as_str(), d.validator)))
    }

    /// Combined reflective constructor.
    ///
    /// Variable descriptors take precedence over the schema map. With
    /// neither, the raw values pass through unchanged.
    ///
    /// # Errors
    ///
    /// See [`from_schema_map`](Self::from_schema_map).
    pub fn build(
        raw: RawValues,
        schema: Option<&SchemaMap>,
        descriptors: Option<&[VarDescriptor]>,
    ) -> Result<Self, DictionaryError> {
        match (descriptors, schema) {
            (Some(descriptors), _) => Self::from_var_descriptors(&raw, descriptors),
            (None, Some(schema)) => Self::from_schema_map(&raw, schema),
            (None, None) => Ok(Self::pass_through(raw)),
        }
    }

    /// Validate descriptors that carry their own values.
    ///
    /// Values are stored as given. Since nothing is coerced, a `number`
    /// descriptor must hold a JSON number; a numeric string is rejected.
    /// No type map is produced.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::InvalidValue` for the first descriptor whose
    /// value fails its validator.
    pub fn from_descriptor_list<I>(descriptors: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = Descriptor>,
    {
        let mut values = IndexMap::new();
        for descriptor in descriptors {
            let (name, value) = check_descriptor(descriptor)?;
            values.insert(name, value);
        }
        Ok(Self {
            values,
            types: None,
        })
    }

    /// Parse and validate loosely shaped descriptor records in one pass.
    ///
    /// Each record is parsed and validated before the next one is looked
    /// at, so a malformed record after an invalid one is never reported.
    ///
    /// # Errors
    ///
    /// The first of `MissingKeyName`, `MissingType` or `InvalidValue`
    /// encountered in record order.
    pub fn from_descriptor_values(records: &[Value]) -> Result<Self, DictionaryError> {
        let mut values = IndexMap::new();
        for record in records {
            let (name, value) = check_descriptor(Descriptor::from_value(record)?)?;
            values.insert(name, value);
        }
        Ok(Self {
            values,
            types: None,
        })
    }

    fn validate_keyed<'a>(
        raw: &RawValues,
        entries: impl Iterator<Item = (&'a str, Validator)>,
    ) -> Result<Self, DictionaryError> {
        let mut values = IndexMap::new();
        let mut types = TypeMap::new();

        for (key, validator) in entries {
            let value = raw.get(key);
            if !validator.is_valid(value) {
                tracing::debug!(key, kind = %validator, "raw value rejected");
                return Err(DictionaryError::InvalidEnvironmentVariable {
                    key: key.to_string(),
                });
            }
            // An absent value accepted by `any` leaves no entry.
            if let Some(value) = value {
                values.insert(key.to_string(), validator.coerce(value.clone()));
            }
            types.insert(key.to_string(), validator.type_class());
            tracing::debug!(key, kind = %validator, "raw value accepted");
        }

        Ok(Self {
            values,
            types: Some(types),
        })
    }

    /// Look up a validated value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// All validated values in output order.
    pub fn values(&self) -> &IndexMap<String, Value> {
        &self.values
    }

    /// The reflection map, when the constructor produces one.
    pub fn types(&self) -> Option<&TypeMap> {
        self.types.as_ref()
    }

    pub fn type_of(&self, key: &str) -> Option<TypeClass> {
        self.types.as_ref().and_then(|t| t.get(key).copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Deserialize the validated values into a typed struct.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the values do not fit `T`.
    pub fn deserialize<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        let object: serde_json::Map<String, Value> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        serde_json::from_value(Value::Object(object))
    }

    /// Consumes self and returns the values and the optional type map.
    pub fn into_parts(self) -> (IndexMap<String, Value>, Option<TypeMap>) {
        (self.values, self.types)
    }
}

fn check_descriptor(descriptor: Descriptor) -> Result<(String, Value), DictionaryError> {
    let (name, value, validator) = descriptor.into_parts();
    if !validator.is_valid_uncoerced(Some(&value)) {
        tracing::debug!(key = %name, kind = %validator, "descriptor value rejected");
        return Err(DictionaryError::InvalidValue { key: name });
    }
    tracing::debug!(key = %name, kind = %validator, "descriptor value accepted");
    Ok((name, value))
}
