//! # Validator Catalog
//!
//! One factory per [`ValidatorKind`]. Each returns the same constant on
//! every call; validators are stateless, so only the kind matters.
//!
//! ```
//! use envdict_core::catalog;
//! use serde_json::json;
//!
//! assert!(catalog::number().accepts(&json!("8080")));
//! assert!(!catalog::boolean().accepts(&json!("true")));
//! ```

use crate::kind::ValidatorKind;
use crate::validator::Validator;

pub const STRING: Validator = Validator::new(ValidatorKind::String);
pub const NUMBER: Validator = Validator::new(ValidatorKind::Number);
pub const BOOLEAN: Validator = Validator::new(ValidatorKind::Boolean);
pub const OBJECT: Validator = Validator::new(ValidatorKind::Object);
pub const ARRAY: Validator = Validator::new(ValidatorKind::Array);
pub const ANY: Validator = Validator::new(ValidatorKind::Any);

/// Validator for textual strings.
pub fn string() -> Validator {
    STRING
}

/// Validator for numbers and finite numeric strings.
pub fn number() -> Validator {
    NUMBER
}

/// Validator for booleans.
pub fn boolean() -> Validator {
    BOOLEAN
}

/// Validator for non-null, non-array objects.
pub fn object() -> Validator {
    OBJECT
}

/// Validator for arrays of any element type.
pub fn array() -> Validator {
    ARRAY
}

/// Validator that accepts everything.
pub fn any() -> Validator {
    ANY
}
