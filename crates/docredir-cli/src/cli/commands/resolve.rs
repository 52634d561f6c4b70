//! `docredir resolve <url> --table <file>` – evaluate one URL against a table.

use anyhow::{Context, Result};
use docredir_core::location::Location;
use docredir_core::redirector::{RecordingNavigator, RedirectTable, Redirector, Variant};
use std::path::Path;

pub fn run_resolve(
    url: &str,
    table: &Path,
    variant: Variant,
    fragment: Option<&str>,
) -> Result<()> {
    let table = RedirectTable::load(table)?;
    let mut location = Location::parse(url).with_context(|| format!("parse URL: {url}"))?;
    if let Some(fragment) = fragment {
        location = Location::new(location.path(), fragment);
    }

    let mut navigator = RecordingNavigator::default();
    Redirector::new(&table, variant).run(&location, &mut navigator);
    match navigator.target {
        Some(target) => {
            tracing::info!("{url} -> {target} ({variant:?})");
            println!("{target}");
        }
        None => tracing::info!(
            "no redirect for {url} (key {:?})",
            location.lookup_key(variant)
        ),
    }
    Ok(())
}
