// File: crates/calwall-server/src/main.rs
// Summary: Binary entry point; resolves configuration and runs the worker pool until killed.

use std::process;

use anyhow::Result;
use clap::Parser;

use calwall_core::FontHandle;
use calwall_server::cli::Cli;
use calwall_server::{logging, RunningServer, ServerConfig};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = ServerConfig::resolve(cli)?;
    tracing::debug!(?cfg, "resolved configuration");

    // Loaded once; workers only read it.
    let fonts = FontHandle::load_dir(&cfg.font_dir);
    if fonts.is_system_only() {
        tracing::warn!(dir = %cfg.font_dir.display(), "no caption fonts loaded, using system default");
    }

    RunningServer::start(&cfg, fonts)?.join();
    Ok(())
}
