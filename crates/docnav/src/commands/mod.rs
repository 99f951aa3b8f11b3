//! CLI command implementations.

pub(crate) mod build;
pub(crate) mod check;
pub(crate) mod tree;

use std::path::PathBuf;

use clap::Args;
use docnav_catalog_fs::FsCatalog;
use docnav_config::{CliSettings, Config};
use docnav_site::{SiteManifest, build_site};

use crate::error::CliError;
use crate::output::Output;

pub(crate) use build::BuildArgs;
pub(crate) use check::CheckArgs;
pub(crate) use tree::TreeArgs;

/// Arguments shared by every command that builds the site.
#[derive(Args)]
pub(crate) struct SiteArgs {
    /// Path to configuration file (default: auto-discover docnav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory slugs are looked up in (overrides config).
    #[arg(long, env = "DOCNAV_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Maximum sidebar group nesting depth (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,

    /// Base path the site is served under (overrides config).
    #[arg(long)]
    base: Option<String>,

    /// Enable verbose output (debug logs for each build stage).
    #[arg(short, long)]
    pub verbose: bool,
}

impl SiteArgs {
    /// Load config, scan content and run the build pipeline.
    pub(crate) fn build(&self, output: &Output) -> Result<SiteManifest, CliError> {
        let cli_settings = CliSettings {
            content_dir: self.content_dir.clone(),
            max_depth: self.max_depth,
            base: self.base.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if let Some(path) = &config.config_path {
            output.info(&format!("Config: {}", path.display()));
        }
        output.info(&format!(
            "Content: {}",
            config.build_resolved.content_dir.display()
        ));

        let catalog = FsCatalog::scan(config.build_resolved.content_dir.clone());
        tracing::debug!(pages = catalog.len(), "content catalog ready");

        let manifest = build_site(&config, &catalog)?;
        for warning in &manifest.warnings {
            output.warning(&format!("Warning: {warning}"));
        }
        Ok(manifest)
    }
}
