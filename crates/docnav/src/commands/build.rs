//! `docnav build` command implementation.

use std::path::PathBuf;

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    #[command(flatten)]
    pub site: SiteArgs,

    /// Write the manifest to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl BuildArgs {
    /// Build the site manifest and emit it as JSON.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let manifest = self.site.build(&output)?;
        let json = serde_json::to_string_pretty(&manifest)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, format!("{json}\n"))?;
                output.success(&format!("Manifest written to {}", path.display()));
            }
            None => output.data(&json)?,
        }
        Ok(())
    }
}
