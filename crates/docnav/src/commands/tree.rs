//! `docnav tree` command implementation.

use std::fmt::Write as _;

use clap::Args;
use docnav_site::{BasePath, NavEntry, ResolvedLink, SiteManifest};

use super::SiteArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tree command.
#[derive(Args)]
pub(crate) struct TreeArgs {
    #[command(flatten)]
    pub site: SiteArgs,
}

impl TreeArgs {
    /// Print the resolved sidebar as an indented outline.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let manifest = self.site.build(&output)?;

        output.highlight(&format!(
            "{} ({})",
            manifest.identity.title,
            manifest.identity.href("/")
        ));
        output.data(render_tree(&manifest).trim_end())?;
        Ok(())
    }
}

fn render_tree(manifest: &SiteManifest) -> String {
    let mut out = String::new();
    render_entries(
        &mut out,
        manifest.navigation.entries(),
        &manifest.identity.base,
        0,
    );
    out
}

fn render_entries(
    out: &mut String,
    entries: &[NavEntry<ResolvedLink>],
    base: &BasePath,
    indent: usize,
) {
    let pad = "  ".repeat(indent);
    for entry in entries {
        match entry {
            NavEntry::Link { label, target } => {
                let _ = writeln!(out, "{pad}{label} -> {}", target.href(base));
            }
            NavEntry::Group {
                label,
                collapsed,
                children,
            } => {
                let marker = if *collapsed { " (collapsed)" } else { "" };
                let _ = writeln!(out, "{pad}{label}/{marker}");
                render_entries(out, children, base, indent + 1);
            }
        }
    }
}
