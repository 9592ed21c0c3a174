//! Configuration system for the decode-stage model.
//!
//! The decoded behavior itself is fixed hardware and takes no parameters; the
//! configuration covers model observability only. Configuration is supplied
//! as JSON (use [`Config::from_json`]) or `Config::default()` for embedding.

use serde::Deserialize;
use thiserror::Error;

/// Errors produced while loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON document failed to parse or did not match the schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Root configuration for the model.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Emit `tracing` events for handshake transfers and stalls.
    pub trace_decode: bool,
}

impl Config {
    /// Loads a configuration from a JSON document.
    ///
    /// Absent fields take their defaults; unknown fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or
    /// contains unknown fields.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }
}
