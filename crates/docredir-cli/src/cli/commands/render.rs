//! `docredir render` – emit the redirect script with its table embedded.

use anyhow::{Context, Result};
use docredir_core::redirector::Variant;
use docredir_core::redirects::{self, Redirects};
use docredir_core::script;
use std::fs;
use std::path::Path;

/// With `page`, renders the anchor-keyed script for that output page;
/// otherwise the site-wide script keyed by `<file>#<anchor>`.
pub fn run_render(
    redirects_path: &Path,
    targets_path: &Path,
    page: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let validated = Redirects::load(redirects_path)?
        .validate(redirects::load_targets(targets_path)?)
        .with_context(|| format!("invalid redirects in {}", redirects_path.display()))?;

    let (variant, table) = match page {
        Some(page) => (Variant::Anchor, validated.client_redirects(page)),
        None => (Variant::Page, validated.client_side_table()),
    };
    let js = script::render(variant, &table)?;
    tracing::debug!("rendered {:?} script with {} redirects", variant, table.len());

    match out {
        Some(path) => {
            fs::write(path, js).with_context(|| format!("write script: {}", path.display()))?;
            tracing::info!("wrote redirect script to {}", path.display());
        }
        None => print!("{js}"),
    }
    Ok(())
}
