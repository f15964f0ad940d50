//! # Error Types
//!
//! Errors raised while building a validated dictionary, plus the top-level
//! error type for everything around it (kind names, schema documents).
//!
//! ## Design
//!
//! - Every construction failure is fatal to the construction call. No
//!   partial dictionary is ever returned.
//! - The `Display` text of [`DictionaryError`] is a caller-visible contract.
//!   Callers and tests match on it, so the wording must not drift.

use thiserror::Error;

/// A failed dictionary construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// A descriptor has no field naming the variable it describes.
    #[error("Descriptor must have a variable name")]
    MissingKeyName,

    /// A descriptor has no usable validator in its `type` field.
    #[error("Descriptor must have a type")]
    MissingType,

    /// A descriptor's own value failed its validator.
    #[error("ENV value \"{key}\" is not valid for the provided type")]
    InvalidValue {
        /// Variable name carried by the descriptor.
        key: String,
    },

    /// A raw value looked up by key failed the validator declared for it.
    #[error("Invalid environment variable \"{key}\".")]
    InvalidEnvironmentVariable {
        /// Key declared in the schema.
        key: String,
    },
}

impl DictionaryError {
    /// The variable name this error refers to, when there is one.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { key } | Self::InvalidEnvironmentVariable { key } => Some(key),
            Self::MissingKeyName | Self::MissingType => None,
        }
    }
}

/// Top-level error type for envdict.
#[derive(Error, Debug)]
pub enum EnvdictError {
    /// Dictionary construction failed.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// A validator kind name did not match any known kind.
    #[error("unknown validator kind: {0:?}")]
    UnknownKind(String),

    /// A schema or descriptor document could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path of the document.
        path: String,
        /// Why loading failed.
        reason: String,
    },

    /// A document parsed, but its shape is not a schema.
    #[error("malformed schema document: {0}")]
    MalformedDocument(String),
}
