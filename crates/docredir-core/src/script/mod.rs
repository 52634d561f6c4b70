//! Embeddable redirect scripts.
//!
//! Each variant has a JavaScript source with a `__DOCREDIR_TABLE__`
//! placeholder. The table goes in as a string literal holding its JSON and is
//! decoded with `JSON.parse`, so every key (even `__proto__`) becomes an own
//! property. Lookups only follow own properties, never inherited ones.

use anyhow::Result;

use crate::redirector::{RedirectTable, Variant};

const TABLE_PLACEHOLDER: &str = "__DOCREDIR_TABLE__";

/// Script source for one lookup variant.
#[derive(Debug, Clone, Copy)]
pub struct RedirectScript {
    pub variant: Variant,
    source: &'static str,
}

/// Site-wide script keyed by `<file>#<anchor>`.
pub const PAGE_SCRIPT: RedirectScript = RedirectScript {
    variant: Variant::Page,
    source: include_str!("assets/page_redirects.js"),
};

/// Per-page script keyed by `<anchor>`.
pub const ANCHOR_SCRIPT: RedirectScript = RedirectScript {
    variant: Variant::Anchor,
    source: include_str!("assets/anchor_redirects.js"),
};

impl RedirectScript {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Page => PAGE_SCRIPT,
            Variant::Anchor => ANCHOR_SCRIPT,
        }
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Substitutes `table` into the source.
    pub fn render(&self, table: &RedirectTable) -> Result<String> {
        let literal = serde_json::to_string(&table.to_json()?)?;
        Ok(self.source.replace(TABLE_PLACEHOLDER, &literal))
    }
}

/// Renders the script for `variant` with `table` embedded.
pub fn render(variant: Variant, table: &RedirectTable) -> Result<String> {
    RedirectScript::for_variant(variant).render(table)
}
