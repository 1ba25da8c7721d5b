//! Typed manifest shapes read by the pruners.

use crate::error::CleanerError;
use crate::manifest::json;
use serde::Deserialize;
use std::path::Path;

/// `metadata.json` (V2)
#[derive(Debug, Clone, Deserialize)]
pub struct Metadata {
    pub sections: Vec<Section>,
}

/// One guide page. Only the fields the cleaner needs are read.
#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub id: String,

    #[serde(rename = "content-file", default)]
    pub content_file: Option<String>,
}

impl Metadata {
    pub fn load(path: &Path) -> Result<Self, CleanerError> {
        json::read_typed(path)
    }
}

/// Per-directory `index.json` in a V3 content tree.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentIndex {
    pub order: Vec<String>,
}

impl ContentIndex {
    pub fn load(path: &Path) -> Result<Self, CleanerError> {
        json::read_typed(path)
    }
}
