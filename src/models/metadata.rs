// file: src/models/metadata.rs
// description: per-asset file listing and metadata document models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat list of asset URLs served at an item's `href`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetFileListing(pub Vec<String>);

/// Flat key/value metadata served for an asset (`metadata.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataDocument(pub Map<String, Value>);

impl AssetFileListing {
    /// First entry containing `suffix`. Listing URLs may carry query strings,
    /// so this is containment rather than `ends_with`.
    pub fn find_containing(&self, suffix: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|entry| entry.contains(suffix))
            .map(String::as_str)
    }
}

impl MetadataDocument {
    /// String value of `field`; non-string values count as absent.
    pub fn field_str(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(Value::as_str)
    }
}
