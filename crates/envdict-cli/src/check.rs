//! # Check Subcommand
//!
//! Validates the process environment against a schema document.
//!
//! ```bash
//! # Validate and coerce the keys declared in schema.yaml:
//! envdict check --schema schema.yaml --show-types
//!
//! # No schema: print the whole environment, classified by shape.
//! envdict check --show-types
//! ```
//!
//! This is the only place in envdict that reads the process environment.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use envdict_schema::{load_schema, Dictionary, RawValues};

use crate::output::{render, OutputFormat};

/// Arguments for the check subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Schema document (YAML or JSON). Without it, every variable passes through.
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Include the type reflection map in the output.
    #[arg(long)]
    pub show_types: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Execute the check subcommand against the current process environment.
pub fn run_check(args: &CheckArgs) -> Result<u8> {
    let raw = environment_snapshot();
    tracing::debug!(variables = raw.len(), "captured environment snapshot");
    println!("{}", check_values(args, raw)?);
    Ok(0)
}

/// Build and render the dictionary for `raw`.
pub fn check_values(args: &CheckArgs, raw: RawValues) -> Result<String> {
    let dict = match &args.schema {
        Some(path) => {
            let schema = load_schema(path)
                .with_context(|| format!("failed to load schema: {}", path.display()))?;
            schema.build(raw)?
        }
        None => Dictionary::pass_through(raw),
    };
    tracing::info!(keys = dict.len(), "environment validated");
    render(&dict, args.show_types, args.format)
}

/// Snapshot the process environment, skipping variables that are not
/// valid Unicode.
fn environment_snapshot() -> RawValues {
    RawValues::from_env_vars(std::env::vars_os().filter_map(|(key, value)| {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => Some((key, value)),
            (key, _) => {
                tracing::warn!(key = ?key, "skipping non-Unicode environment variable");
                None
            }
        }
    }))
}
