//! Stylesheet loading errors.

use thiserror::Error;

/// Error returned when a stylesheet document cannot be loaded into a registry.
///
/// Resolution never fails; only parsing a stylesheet document can.
#[derive(Debug, Error)]
pub enum StylesheetError {
    /// The YAML document is malformed or is not a flat `name: css` mapping
    #[error("invalid YAML stylesheet: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The JSON document is malformed or is not a flat `{"name": "css"}` object
    #[error("invalid JSON stylesheet: {0}")]
    Json(#[from] serde_json::Error),
}
