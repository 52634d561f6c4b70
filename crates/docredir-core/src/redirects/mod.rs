//! Redirect declarations: which historical locations moved where.
//!
//! Declarations map each identifier (an anchor defined in the docs source) to
//! its locations. The first location is where the identifier lives now; the
//! rest are places it used to live. `path#anchor` entries become client-side
//! redirects served by the embedded script; bare paths are whole pages that
//! moved and are expected to be handled server-side.
//!
//! Tables for the redirect script can only be derived from a
//! [`ValidatedRedirects`], which [`Redirects::validate`] produces.

mod error;
mod validate;

pub use error::RedirectError;
pub use validate::ValidatedRedirects;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Where an identifier is rendered in the current build.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct XrefTarget {
    /// Output path of the page defining the identifier, e.g. `index.html`.
    pub path: String,
}

impl XrefTarget {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// Identifier -> output path, for every identifier in the docs source.
pub type XrefTargets = BTreeMap<String, XrefTarget>;

/// Raw, unvalidated redirect declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Redirects {
    raw: BTreeMap<String, Vec<String>>,
}

impl Redirects {
    pub fn new(raw: BTreeMap<String, Vec<String>>) -> Self {
        Self { raw }
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parse redirects JSON")
    }

    /// Loads declarations from a JSON file of `{ "identifier": ["current.html", ...] }`.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read redirects file: {}", path.display()))?;
        let redirects: Self = serde_json::from_str(&data)
            .with_context(|| format!("parse redirects JSON: {}", path.display()))?;
        tracing::debug!(
            "loaded {} redirect declarations from {}",
            redirects.len(),
            path.display()
        );
        Ok(redirects)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn locations(&self, identifier: &str) -> Option<&[String]> {
        self.raw.get(identifier).map(Vec::as_slice)
    }
}

/// Loads xref targets from a JSON file of `{ "identifier": "output.html" }`.
pub fn load_targets(path: &Path) -> Result<XrefTargets> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read xref targets: {}", path.display()))?;
    let targets: XrefTargets = serde_json::from_str(&data)
        .with_context(|| format!("parse xref targets JSON: {}", path.display()))?;
    tracing::debug!("loaded {} xref targets from {}", targets.len(), path.display());
    Ok(targets)
}
