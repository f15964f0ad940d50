//! # envdict-cli - Environment Dictionary Command-Line Interface
//!
//! Thin clap front-end over `envdict-schema`.
//!
//! ## Subcommands
//!
//! - `check`: validate the process environment against a schema document
//! - `descriptors`: validate a file of descriptor records
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from business logic.
//! - Handlers return `anyhow::Result<u8>`; the exit code is decided in `main`.
//! - Results go to stdout, logs go to stderr.

pub mod check;
pub mod descriptors;
pub mod output;
