//! CLI for docredir.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use docredir_core::config::{self, DocredirConfig};
use docredir_core::redirector::Variant;
use std::path::PathBuf;

use commands::{run_check, run_completions, run_man, run_render, run_resolve};

/// Top-level CLI for docredir.
#[derive(Debug, Parser)]
#[command(name = "docredir")]
#[command(about = "docredir: client-side redirects for moved documentation content", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Lookup key shape, as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// `<file>.html#<anchor>` keys (site-wide table).
    Page,
    /// `<anchor>` keys (per-page table).
    Anchor,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Page => Variant::Page,
            VariantArg::Anchor => Variant::Anchor,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the redirect target for a URL, if the table has one.
    Resolve {
        /// Page URL or path, e.g. `https://host/manual/bar.html#baz` or `/manual/foo/`.
        url: String,
        /// Redirect table JSON file.
        #[arg(long, value_name = "FILE")]
        table: PathBuf,
        /// Key shape to look up (defaults to the configured variant).
        #[arg(long, value_enum)]
        variant: Option<VariantArg>,
        /// Use this fragment instead of the one in the URL.
        #[arg(long)]
        fragment: Option<String>,
    },

    /// Validate redirect declarations against the identifiers in the docs source.
    Check {
        /// Redirect declarations JSON (defaults to the configured file).
        #[arg(long, value_name = "FILE")]
        redirects: Option<PathBuf>,
        /// Xref targets JSON (defaults to the configured file).
        #[arg(long, value_name = "FILE")]
        targets: Option<PathBuf>,
    },

    /// Render the redirect script with its table embedded.
    Render {
        #[arg(long, value_name = "FILE")]
        redirects: Option<PathBuf>,
        #[arg(long, value_name = "FILE")]
        targets: Option<PathBuf>,
        /// Render the per-page anchor script for this output page instead of the site-wide one.
        #[arg(long)]
        page: Option<String>,
        /// Write the script here instead of stdout.
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        shell: clap_complete::Shell,
    },

    /// Print the man page.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Resolve {
                url,
                table,
                variant,
                fragment,
            } => {
                let variant = resolve_variant(variant, load_config)?;
                run_resolve(&url, &table, variant, fragment.as_deref())?;
            }
            CliCommand::Check { redirects, targets } => {
                let cfg = load_config()?;
                let redirects = redirects.unwrap_or(cfg.redirects_file);
                let targets = targets.unwrap_or(cfg.targets_file);
                run_check(&redirects, &targets)?;
            }
            CliCommand::Render {
                redirects,
                targets,
                page,
                out,
            } => {
                let cfg = load_config()?;
                let redirects = redirects.unwrap_or(cfg.redirects_file);
                let targets = targets.unwrap_or(cfg.targets_file);
                run_render(&redirects, &targets, page.as_deref(), out.as_deref())?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

/// Uses the explicit `--variant` when given; the config is only read (and
/// possibly created) when it is not.
pub(crate) fn resolve_variant(
    arg: Option<VariantArg>,
    load: impl FnOnce() -> Result<DocredirConfig>,
) -> Result<Variant> {
    match arg {
        Some(arg) => Ok(arg.into()),
        None => Ok(load()?.variant),
    }
}

fn load_config() -> Result<DocredirConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
