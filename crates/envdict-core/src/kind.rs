//! # Validator Kinds
//!
//! The closed set of value kinds a validator can check. Every `match` on
//! [`ValidatorKind`] is exhaustive, so adding a kind forces coercion and
//! reflection code to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::classify::TypeClass;
use crate::error::EnvdictError;

/// The kind of value a validator accepts.
///
/// | Kind | Accepts |
/// |------|---------|
/// | `string` | JSON strings |
/// | `number` | JSON numbers and finite numeric strings |
/// | `boolean` | JSON booleans |
/// | `object` | JSON objects (not arrays, not null) |
/// | `array` | JSON arrays |
/// | `any` | everything, including null and absent values |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidatorKind {
    /// Textual strings.
    String,
    /// Numbers, or strings that parse to a finite number.
    Number,
    /// `true` or `false`, never their string spellings.
    Boolean,
    /// Structured records.
    Object,
    /// Ordered lists with any element type.
    Array,
    /// Anything at all.
    Any,
}

/// Total number of validator kinds.
pub const VALIDATOR_KIND_COUNT: usize = 6;

impl ValidatorKind {
    /// Returns all kinds in catalog order.
    pub fn all_kinds() -> &'static [ValidatorKind] {
        &[
            Self::String,
            Self::Number,
            Self::Boolean,
            Self::Object,
            Self::Array,
            Self::Any,
        ]
    }

    /// Returns the lowercase name of this kind, matching the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Any => "any",
        }
    }

    /// The coarse type class recorded for keys validated with this kind.
    ///
    /// `any` has no narrower class and reflects as `Object`.
    pub fn type_class(&self) -> TypeClass {
        match self {
            Self::String => TypeClass::String,
            Self::Number => TypeClass::Number,
            Self::Boolean => TypeClass::Boolean,
            Self::Object | Self::Any => TypeClass::Object,
            Self::Array => TypeClass::Array,
        }
    }
}

impl std::fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidatorKind {
    type Err = EnvdictError;

    /// Parse a kind from its lowercase name. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" => Ok(Self::String),
            "number" => Ok(Self::Number),
            "boolean" => Ok(Self::Boolean),
            "object" => Ok(Self::Object),
            "array" => Ok(Self::Array),
            "any" => Ok(Self::Any),
            other => Err(EnvdictError::UnknownKind(other.to_string())),
        }
    }
}
