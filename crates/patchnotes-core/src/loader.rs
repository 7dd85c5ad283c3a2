//! Loading release records and configuration from JSON
//!
//! A notes document is either a bare array of records or a bundle object
//! carrying both the configuration and the records:
//!
//! ```json
//! { "config": { "defaultTitle": "Patch notes" }, "notes": [ { "version": "1.0.0" } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::PatchResult;
use crate::types::{PatchConfig, PatchNote};

/// Release notes shipped with the application
const BUILTIN_NOTES: &str = include_str!("../data/patch_notes.json");

/// Configuration plus records, as stored in a notes document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchBundle {
    #[serde(default)]
    pub config: PatchConfig,
    #[serde(default)]
    pub notes: Vec<PatchNote>,
}

impl PatchBundle {
    /// Replace the bundle's configuration
    pub fn with_config(mut self, config: PatchConfig) -> Self {
        self.config = config;
        self
    }
}

/// Parse a notes document (bare array or bundle object)
pub fn parse_bundle(json: &str) -> PatchResult<PatchBundle> {
    let value: Value = serde_json::from_str(json)?;
    let bundle = match value {
        Value::Array(_) => PatchBundle {
            config: PatchConfig::default(),
            notes: serde_json::from_value(value)?,
        },
        other => serde_json::from_value(other)?,
    };
    bundle.config.validate()?;
    Ok(bundle)
}

/// Read and parse a notes document from disk
pub fn load_bundle(path: impl AsRef<Path>) -> PatchResult<PatchBundle> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let bundle = parse_bundle(&json)?;
    tracing::info!(path = %path.display(), notes = bundle.notes.len(), "Loaded patch notes");
    Ok(bundle)
}

/// Read and parse a configuration file. Missing keys take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> PatchResult<PatchConfig> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let config: PatchConfig = serde_json::from_str(&json)?;
    config.validate()?;
    tracing::info!(path = %path.display(), "Loaded patch notes config");
    Ok(config)
}

/// The release notes embedded in the binary
pub fn builtin_bundle() -> PatchBundle {
    parse_bundle(BUILTIN_NOTES).unwrap_or_else(|e| {
        tracing::error!("Embedded patch notes are invalid: {}", e);
        PatchBundle::default()
    })
}
