//! crime-tree: interactive exploration of crime incidents indexed in a 2-d tree.

mod args;
mod menu;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crime_tree::ingest::load_or_empty;
use log::info;

use crate::args::Args;
use crate::menu::Menu;

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args);

    info!("Starting crime-tree {}", env!("CARGO_PKG_VERSION"));
    let tree = load_or_empty(&args.data);
    info!("Tree holds {} crimes, height {}", tree.len(), tree.height());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&tree, stdin.lock(), stdout.lock(), &args.kml)
        .run()
        .context("interactive session failed")?;
    Ok(())
}

/// Log to stderr, honoring `RUST_LOG` and falling back to `--debug`.
fn setup_logging(args: &Args) {
    let default_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}
