//! docnav CLI - Documentation sidebar builder.
//!
//! Provides commands for:
//! - `check`: Validate identity, sidebar and slug references
//! - `build`: Emit the site manifest as JSON
//! - `tree`: Print the resolved sidebar

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs, TreeArgs};
use output::Output;

/// docnav - Documentation sidebar builder.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the site configuration against the content directory.
    Check(CheckArgs),
    /// Build the site manifest.
    Build(BuildArgs),
    /// Print the resolved sidebar.
    Tree(TreeArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Check(args) => args.site.verbose,
        Commands::Build(args) => args.site.verbose,
        Commands::Tree(args) => args.site.verbose,
    };

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Build(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
