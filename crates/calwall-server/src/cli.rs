// File: crates/calwall-server/src/cli.rs
// Summary: Command-line flags; each overrides the matching config-file value.

use std::path::PathBuf;

use clap::Parser;

/// Calendar-progress wallpaper server.
#[derive(Parser, Debug)]
#[command(
    name = "calwall-server",
    version,
    about = "Serves calendar-progress wallpapers as PNG"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, env = "CALWALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override listen address from config.
    #[arg(short, long)]
    pub bind: Option<String>,

    /// Override worker thread count from config.
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Override font directory from config.
    #[arg(long = "font-dir")]
    pub font_dir: Option<PathBuf>,

    /// Override maximum canvas width/height from config.
    #[arg(long = "max-dimension")]
    pub max_dimension: Option<u32>,
}
