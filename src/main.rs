#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::Parser;
use dirtree::cli::Args;
use dirtree::tree::WalkdirSource;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "DIRTREE_LOG";

fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(e) = run_app(&args) {
        eprintln!("dirtree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app(args: &Args) -> Result<()> {
    debug!(path = %args.path.display(), files = args.files, "starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dirtree::render_tree(&WalkdirSource, &mut out, &args.path, &args.tree_config())
        .context("failed to render directory tree")?;
    Ok(())
}

/// Log to stderr so stdout carries only the tree.
fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
