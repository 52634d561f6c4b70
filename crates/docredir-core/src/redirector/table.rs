//! The static redirect table.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Immutable mapping from lookup key to target URL.
///
/// Serialized as a flat JSON object. Ordered so rendered scripts are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RedirectTable(BTreeMap<String, String>);

impl RedirectTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parse redirect table JSON")
    }

    /// Loads a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read redirect table: {}", path.display()))?;
        let table: Self = serde_json::from_str(&data)
            .with_context(|| format!("parse redirect table JSON: {}", path.display()))?;
        tracing::debug!("loaded {} redirects from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RedirectTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
