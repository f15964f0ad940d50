//! # envdict-schema - Dictionary Builder
//!
//! Turns a flat map of raw values into a validated [`Dictionary`], using
//! the validators from `envdict-core`.
//!
//! ## Construction Strategies (`dictionary`)
//!
//! - [`Dictionary::from_schema_map`]: `{ KEY: validator }` applied to raw
//!   values. Coerces numeric strings, drops undeclared keys, reflects types.
//! - [`Dictionary::from_var_descriptors`]: the same, with validators from
//!   an ordered `{ var, type }` list.
//! - [`Dictionary::from_descriptor_list`]: descriptors carrying their own
//!   values. Stores values as given, never coerces.
//! - [`Dictionary::pass_through`] and [`Dictionary::build`]: no schema,
//!   or whichever schema the caller has.
//!
//! ## Schema Documents (`document`)
//!
//! [`load_schema`], [`load_descriptors`] and [`load_descriptor_records`]
//! read YAML/JSON files into the schema types above.
//!
//! ## Example
//!
//! ```
//! use envdict_core::catalog;
//! use envdict_schema::{Dictionary, RawValues, SchemaMap};
//!
//! let raw = RawValues::from_env_vars([("PORT", "3000"), ("EXTRA", "x")]);
//! let schema = SchemaMap::new().with("PORT", catalog::number());
//!
//! let dict = Dictionary::from_schema_map(&raw, &schema)?;
//! assert_eq!(dict.get_i64("PORT"), Some(3000));
//! assert!(!dict.contains_key("EXTRA"));
//! # Ok::<(), envdict_core::DictionaryError>(())
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `envdict-core` internally.
//! - Never reads the process environment. Raw values always come from the
//!   caller.
//! - Error messages of `DictionaryError` are a public contract.

pub mod descriptor;
pub mod dictionary;
pub mod document;
pub mod raw;
pub mod schema;

pub use descriptor::{Descriptor, VarDescriptor, TYPE_FIELD};
pub use dictionary::{Dictionary, TypeMap};
pub use document::{
    load_descriptor_records, load_descriptors, load_document, load_schema, SchemaDocument,
};
pub use raw::RawValues;
pub use schema::SchemaMap;
