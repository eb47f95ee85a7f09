use std::fs;
use std::path::PathBuf;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{DashError, DashResult};

pub const REGION_DESCRIPTIONS_DOCUMENT: &str = "region_descriptions.json";
pub const WEIGHTS_DOCUMENT: &str = "sensitivity_weights.json";
pub const BASE_GEOGRAPHY_DOCUMENT: &str = "json/china.geojson";
pub const OVERLAY_GEOGRAPHY_DOCUMENT: &str = "json/jilin_county5.geojson";

/// Transport seam for the static JSON bundle.
///
/// The engine never touches a transport directly; deployments pick a source
/// (filesystem, HTTP behind the `http-source` feature, or an in-memory map
/// in tests) and the load pass stays identical.
pub trait DocumentSource {
    fn fetch(&self, name: &str) -> DashResult<Value>;
}

/// Reads the bundle from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DocumentSource for DirectorySource {
    fn fetch(&self, name: &str) -> DashResult<Value> {
        let path = self.root.join(name);
        let raw = fs::read_to_string(&path).map_err(|e| DashError::fetch(name, e))?;
        serde_json::from_str(&raw).map_err(|e| DashError::fetch(name, e))
    }
}

/// In-memory source for tests and embedded bundles.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: IndexMap<String, Value>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, document: Value) -> &mut Self {
        self.documents.insert(name.into(), document);
        self
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.documents.shift_remove(name)
    }
}

impl DocumentSource for MemorySource {
    fn fetch(&self, name: &str) -> DashResult<Value> {
        self.documents
            .get(name)
            .cloned()
            .ok_or_else(|| DashError::fetch(name, "document not provided"))
    }
}

/// Fetches the bundle from a base URL with a blocking client.
#[cfg(feature = "http-source")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http-source")]
impl HttpSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

#[cfg(feature = "http-source")]
impl DocumentSource for HttpSource {
    fn fetch(&self, name: &str) -> DashResult<Value> {
        let url = format!("{}/{name}", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DashError::fetch(name, e))?;
        if !response.status().is_success() {
            return Err(DashError::fetch(
                name,
                format!("unexpected status {}", response.status()),
            ));
        }
        response.json().map_err(|e| DashError::fetch(name, e))
    }
}
