//! # envdict-core - Validator Catalog
//!
//! The leaf crate of envdict. It defines the closed set of value kinds,
//! the validators that check them, and the coarse type classes reported
//! by reflective dictionaries. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Single `ValidatorKind` enum.** Six variants, exhaustive `match`
//!    everywhere coercion or reflection depends on the kind.
//!
//! 2. **Pure predicates.** [`Validator::is_valid`] is total and side-effect
//!    free. Absent values are `None`, never a sentinel.
//!
//! 3. **One place for numeric strings.** [`numeric::parse_numeric_str`] is
//!    shared by the `number` predicate and by coercion, so a string that
//!    validates always coerces.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - Never reads the process environment.

pub mod catalog;
pub mod classify;
pub mod error;
pub mod kind;
pub mod numeric;
pub mod validator;

// Re-export primary types for ergonomic imports.
pub use classify::TypeClass;
pub use error::{DictionaryError, EnvdictError};
pub use kind::{ValidatorKind, VALIDATOR_KIND_COUNT};
pub use numeric::{numeric_value, parse_numeric_str};
pub use validator::Validator;
