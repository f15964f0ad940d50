//! # Map-Form Schemas
//!
//! A [`SchemaMap`] declares which keys a dictionary keeps and which
//! validator governs each one. Output is bounded by the schema: raw keys
//! it does not name are dropped.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use envdict_core::{EnvdictError, TypeClass, Validator};

/// Insertion-ordered map from key to validator.
///
/// Serializes as `{ "PORT": "number", ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaMap(IndexMap<String, Validator>);

impl SchemaMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style declaration of `key` with `validator`.
    ///
    /// ```
    /// use envdict_core::catalog;
    /// use envdict_schema::SchemaMap;
    ///
    /// let schema = SchemaMap::new()
    ///     .with("API_KEY", catalog::string())
    ///     .with("PORT", catalog::number());
    /// assert_eq!(schema.len(), 2);
    /// ```
    pub fn with(mut self, key: impl Into<String>, validator: Validator) -> Self {
        self.0.insert(key.into(), validator);
        self
    }

    /// Declare or redeclare a key. Redeclaring keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, validator: Validator) -> Option<Validator> {
        self.0.insert(key.into(), validator)
    }

    pub fn get(&self, key: &str) -> Option<Validator> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Validator)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Parse a schema from a JSON object of kind names.
    ///
    /// # Errors
    ///
    /// - `EnvdictError::MalformedDocument` if `value` is not an object or an
    ///   entry is not a string.
    /// - `EnvdictError::UnknownKind` if an entry names no known kind.
    pub fn from_value(value: &Value) -> Result<Self, EnvdictError> {
        let map = value.as_object().ok_or_else(|| {
            EnvdictError::MalformedDocument(format!(
                "schema map must be an object, found {}",
                TypeClass::of(value)
            ))
        })?;

        map.iter()
            .map(|(key, kind)| {
                let name = kind.as_str().ok_or_else(|| {
                    EnvdictError::MalformedDocument(format!(
                        "schema entry {key:?} must be a kind name, found {}",
                        TypeClass::of(kind)
                    ))
                })?;
                Ok((key.clone(), name.parse::<Validator>()?))
            })
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Validator)> for SchemaMap {
    fn from_iter<T: IntoIterator<Item = (K, Validator)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
