//! # Descriptors Subcommand
//!
//! Builds a dictionary from a file of descriptor records, each carrying
//! its own value:
//!
//! ```yaml
//! - HOST: localhost
//!   type: string
//! - PORT: 8080
//!   type: number
//! ```
//!
//! Values are stored exactly as written. `PORT: "8080"` with
//! `type: number` is rejected.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use envdict_schema::{load_descriptor_records, Dictionary};

use crate::output::{render, OutputFormat};

/// Arguments for the descriptors subcommand.
#[derive(Args, Debug)]
pub struct DescriptorsArgs {
    /// Descriptor document (YAML or JSON sequence).
    pub path: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Execute the descriptors subcommand.
pub fn run_descriptors(args: &DescriptorsArgs) -> Result<u8> {
    println!("{}", descriptor_values(args)?);
    Ok(0)
}

/// Load, validate and render the descriptor records named by `args`.
pub fn descriptor_values(args: &DescriptorsArgs) -> Result<String> {
    let records = load_descriptor_records(&args.path)
        .with_context(|| format!("failed to load descriptors: {}", args.path.display()))?;
    let dict = Dictionary::from_descriptor_values(&records)?;
    tracing::info!(keys = dict.len(), path = %args.path.display(), "descriptors validated");
    render(&dict, false, args.format)
}
