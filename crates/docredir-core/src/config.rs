use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::redirector::Variant;

/// Global configuration loaded from `~/.config/docredir/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocredirConfig {
    /// Lookup variant used when the CLI is not told otherwise: "page" or "anchor".
    #[serde(default)]
    pub variant: Variant,
    /// Redirect declarations (`{ "identifier": ["current.html", "old.html#x"] }`).
    pub redirects_file: PathBuf,
    /// Xref targets (`{ "identifier": "current.html" }`).
    pub targets_file: PathBuf,
}

impl Default for DocredirConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Page,
            redirects_file: PathBuf::from("redirects.json"),
            targets_file: PathBuf::from("xref-targets.json"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docredir")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocredirConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DocredirConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: DocredirConfig = toml::from_str(&data)?;
    Ok(cfg)
}
