//! # Raw Values
//!
//! The flat key/value input of every dictionary construction. Callers
//! fill it from whatever source they have (a process environment
//! snapshot, a parsed file, a test fixture). The builder only reads it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use envdict_core::EnvdictError;

/// Insertion-ordered map from key to arbitrary JSON value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawValues(IndexMap<String, Value>);

impl RawValues {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from string pairs, e.g. a `std::env::vars()` snapshot.
    ///
    /// Every value is stored as a JSON string.
    pub fn from_env_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        vars.into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect()
    }

    /// Build from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns `EnvdictError::MalformedDocument` if `value` is not an object.
    pub fn from_value(value: Value) -> Result<Self, EnvdictError> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(EnvdictError::MalformedDocument(format!(
                "raw values must be an object, found {}",
                envdict_core::TypeClass::of(&other)
            ))),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.0.insert(key.into(), value);
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Look up a value. `None` means the key is absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Consumes self and returns the inner map.
    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.0
    }
}

impl FromIterator<(String, Value)> for RawValues {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RawValues {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RawValues {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_env_vars_stores_strings() {
        let raw = RawValues::from_env_vars([("PORT", "3000"), ("HOST", "localhost")]);
        assert_eq!(raw.get("PORT"), Some(&json!("3000")));
        assert_eq!(raw.get("HOST"), Some(&json!("localhost")));
        assert_eq!(raw.get("MISSING"), None);
    }

    #[test]
    fn test_from_value_preserves_order() {
        let raw = RawValues::from_value(json!({"Z": 1, "A": 2, "M": 3})).unwrap();
        let keys: Vec<&str> = raw.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["Z", "A", "M"]);
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = RawValues::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, EnvdictError::MalformedDocument(_)));
    }

    #[test]
    fn test_with_and_insert() {
        let mut raw = RawValues::new().with("A", json!(1));
        assert_eq!(raw.insert("A", json!(2)), Some(json!(1)));
        assert_eq!(raw.len(), 1);
        assert!(raw.contains_key("A"));
    }
}
