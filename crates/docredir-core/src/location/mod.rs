//! Current-location descriptor and lookup-key normalization.
//!
//! A [`Location`] is derived from the page URL (or from an explicit
//! pathname/hash pair), used to build one lookup key, and then dropped.

mod fragment;
mod path;

pub use fragment::strip_hash;
pub use path::{normalize_filename, INDEX_FILENAME};

use url::Url;

use crate::redirector::Variant;

/// Base used to resolve bare paths such as `/manual/foo/` into a full URL.
const DUMMY_BASE: &str = "http://localhost/";

/// Path and fragment of the page being looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    path: String,
    fragment: String,
}

impl Location {
    /// Builds a location from browser-style parts, e.g. `("/manual/bar.html", "#baz")`.
    /// The hash may be given with or without its leading `#`.
    pub fn new(pathname: &str, hash: &str) -> Self {
        Self {
            path: pathname.to_string(),
            fragment: strip_hash(hash).to_string(),
        }
    }

    /// Parses an absolute URL, or a bare path resolved against a dummy origin.
    ///
    /// The query string is discarded; path and fragment are kept exactly as
    /// the URL parser serializes them (percent-encoded, like the browser).
    pub fn parse(href: &str) -> Result<Self, url::ParseError> {
        let url = match Url::parse(href) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(DUMMY_BASE)?.join(href)?,
            Err(e) => return Err(e),
        };
        Ok(Self {
            path: url.path().to_string(),
            fragment: url.fragment().unwrap_or_default().to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fragment without the leading `#`; empty when the URL has none.
    pub fn anchor(&self) -> &str {
        &self.fragment
    }

    /// Normalized filename of the last path segment.
    pub fn filename(&self) -> String {
        normalize_filename(&self.path)
    }

    /// Key to query the redirect table with, for the given variant.
    pub fn lookup_key(&self, variant: Variant) -> String {
        match variant {
            Variant::Page => format!("{}#{}", self.filename(), self.fragment),
            Variant::Anchor => self.fragment.clone(),
        }
    }
}
