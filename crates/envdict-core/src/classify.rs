//! Coarse runtime type classes used by the reflection map.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The coarse runtime class of a value.
///
/// Serialized in PascalCase (`"String"`, `"Number"`, ...). A `null` value
/// reports the lowercase runtime type name `"object"`, which stays distinct
/// from the `"Object"` class of mappings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeClass {
    String,
    Number,
    Boolean,
    Object,
    Array,
    /// A `null` value, which has no coarse class of its own.
    #[serde(rename = "object")]
    Null,
}

impl TypeClass {
    /// Classify a value by its own shape.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::String,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Boolean,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Null => Self::Null,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Null => "object",
        }
    }
}

impl std::fmt::Display for TypeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
