//! `docredir check` – validate redirect declarations.

use anyhow::{Context, Result};
use docredir_core::redirects::{self, Redirects};
use std::path::Path;

pub fn run_check(redirects_path: &Path, targets_path: &Path) -> Result<()> {
    let declared = Redirects::load(redirects_path)?;
    let targets = redirects::load_targets(targets_path)?;
    if declared.is_empty() {
        tracing::warn!("no redirect declarations in {}", redirects_path.display());
    }
    let count = declared.len();
    let validated = declared
        .validate(targets)
        .with_context(|| format!("invalid redirects in {}", redirects_path.display()))?;
    println!(
        "{count} identifiers ok: {} client-side, {} server-side redirects",
        validated.client_side_len(),
        validated.server_side_redirects().len()
    );
    Ok(())
}
