//! # dsync CLI Entry Point
//!
//! Parses arguments and dispatches to the validation handler.

use clap::Parser;

/// Data sync JSON config file validator.
///
/// Validates sync-list configuration files against the sync-list JSON
/// Schema (Draft 2020-12, with format assertions enforced). Prints one
/// success line per file and stops at the first failure with a non-zero
/// exit status.
#[derive(Parser, Debug)]
#[command(name = "dsync", version, about)]
struct Cli {
    #[command(flatten)]
    args: dsync_cli::validate::ValidateArgs,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    dsync_cli::validate::run(&cli.args)
}
