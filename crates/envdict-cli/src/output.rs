//! Rendering of dictionaries for stdout.

use anyhow::Result;
use clap::ValueEnum;
use serde_json::{Map, Value};

use envdict_schema::Dictionary;

/// Output encoding for validated dictionaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Render `{ "values": ..., "types": ... }`.
///
/// `types` is included only when `show_types` is set and the dictionary
/// has a reflection map.
pub fn render(dict: &Dictionary, show_types: bool, format: OutputFormat) -> Result<String> {
    let mut report = Map::new();
    report.insert("values".to_string(), serde_json::to_value(dict.values())?);
    if show_types {
        if let Some(types) = dict.types() {
            report.insert("types".to_string(), serde_json::to_value(types)?);
        }
    }
    let report = Value::Object(report);

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
    };
    Ok(rendered)
}
