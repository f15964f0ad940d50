//! # Schema Documents
//!
//! Loading of schemas and descriptor lists from YAML or JSON files.
//!
//! ## Accepted Shapes
//!
//! ```yaml
//! # Map form: key -> kind name.
//! API_KEY: string
//! PORT: number
//! ```
//!
//! ```yaml
//! # Variable-descriptor form: looked up in the raw values.
//! - var: API_KEY
//!   type: string
//! - var: PORT
//!   type: number
//! ```
//!
//! ```yaml
//! # Descriptor records: each carries its own value.
//! - HOST: localhost
//!   type: string
//! - PORT: 8080
//!   type: number
//! ```
//!
//! The format is picked from the file extension: `.yaml`/`.yml` are YAML,
//! everything else is JSON. YAML is converted to `serde_json::Value` before
//! any schema interpretation.

use std::path::Path;

use serde_json::Value;

use envdict_core::{DictionaryError, EnvdictError, TypeClass};

use crate::descriptor::{Descriptor, VarDescriptor};
use crate::dictionary::Dictionary;
use crate::raw::RawValues;
use crate::schema::SchemaMap;

/// A schema loaded from a document.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaDocument {
    /// `{ KEY: kind }`
    Map(SchemaMap),
    /// `[{ var: KEY, type: kind }]`
    Vars(Vec<VarDescriptor>),
}

impl SchemaDocument {
    /// Interpret a parsed document: objects are map schemas, arrays are
    /// variable-descriptor lists.
    ///
    /// # Errors
    ///
    /// - `EnvdictError::MalformedDocument` for any other top-level shape.
    /// - `EnvdictError::UnknownKind` for an unknown kind in a map schema.
    /// - `EnvdictError::Dictionary` for a malformed variable descriptor.
    pub fn from_value(value: &Value) -> Result<Self, EnvdictError> {
        match value {
            Value::Object(_) => SchemaMap::from_value(value).map(Self::Map),
            Value::Array(records) => {
                let vars = records
                    .iter()
                    .map(VarDescriptor::from_value)
                    .collect::<Result<Vec<_>, DictionaryError>>()?;
                Ok(Self::Vars(vars))
            }
            other => Err(EnvdictError::MalformedDocument(format!(
                "schema must be a mapping or a sequence, found {}",
                TypeClass::of(other)
            ))),
        }
    }

    /// Number of declared keys.
    pub fn len(&self) -> usize {
        match self {
            Self::Map(schema) => schema.len(),
            Self::Vars(vars) => vars.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build a reflective dictionary from `raw` with this schema.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::InvalidEnvironmentVariable` for the first
    /// key whose raw value fails its validator.
    pub fn build(&self, raw: RawValues) -> Result<Dictionary, DictionaryError> {
        match self {
            Self::Map(schema) => Dictionary::build(raw, Some(schema), None),
            Self::Vars(vars) => Dictionary::build(raw, None, Some(vars.as_slice())),
        }
    }
}

/// Read and parse a YAML or JSON document.
///
/// # Errors
///
/// Returns `EnvdictError::DocumentLoad` if the file cannot be read or
/// parsed.
pub fn load_document(path: &Path) -> Result<Value, EnvdictError> {
    let load_error = |reason: String| EnvdictError::DocumentLoad {
        path: path.display().to_string(),
        reason,
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| load_error(format!("cannot read file: {e}")))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext {
        "yaml" | "yml" => {
            let yaml_value: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| load_error(format!("invalid YAML: {e}")))?;
            yaml_to_json_value(&yaml_value)
                .map_err(|e| load_error(format!("YAML-to-JSON conversion failed: {e}")))
        }
        _ => serde_json::from_str(&content).map_err(|e| load_error(format!("invalid JSON: {e}"))),
    }
}

/// Load a map-form or variable-descriptor schema from a file.
///
/// # Errors
///
/// See [`load_document`] and [`SchemaDocument::from_value`].
pub fn load_schema(path: &Path) -> Result<SchemaDocument, EnvdictError> {
    let value = load_document(path)?;
    let schema = SchemaDocument::from_value(&value)?;
    tracing::debug!(path = %path.display(), keys = schema.len(), "loaded schema document");
    Ok(schema)
}

/// Load descriptor records (values inline) from a file.
///
/// Records are returned unparsed so that
/// [`Dictionary::from_descriptor_values`] can report errors in record order.
///
/// # Errors
///
/// Returns `EnvdictError::MalformedDocument` if the document is not a
/// sequence, or a load error from [`load_document`].
pub fn load_descriptor_records(path: &Path) -> Result<Vec<Value>, EnvdictError> {
    match load_document(path)? {
        Value::Array(records) => Ok(records),
        other => Err(EnvdictError::MalformedDocument(format!(
            "descriptor document must be a sequence, found {}",
            TypeClass::of(&other)
        ))),
    }
}

/// Load and parse descriptor records from a file.
///
/// # Errors
///
/// As [`load_descriptor_records`], plus `EnvdictError::Dictionary` for the
/// first record missing its name or type.
pub fn load_descriptors(path: &Path) -> Result<Vec<Descriptor>, EnvdictError> {
    let descriptors = load_descriptor_records(path)?
        .iter()
        .map(Descriptor::from_value)
        .collect::<Result<Vec<_>, DictionaryError>>()?;
    tracing::debug!(
        path = %path.display(),
        count = descriptors.len(),
        "loaded descriptor document"
    );
    Ok(descriptors)
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Tags are dropped and only the JSON-compatible subset is kept. Mapping
/// keys that are numbers or booleans are stringified.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
