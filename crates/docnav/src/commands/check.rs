//! `docnav check` command implementation.

use clap::Args;

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl CheckArgs {
    /// Validate the configuration and every sidebar reference.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let manifest = self.site.build(&output)?;

        output.success(&format!(
            "{}: {} links in {} top-level entries (depth {})",
            manifest.identity.title,
            manifest.navigation.link_count(),
            manifest.navigation.len(),
            manifest.navigation.depth(),
        ));
        Ok(())
    }
}
