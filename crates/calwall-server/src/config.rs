// File: crates/calwall-server/src/config.rs
// Summary: TOML server configuration with per-field defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cli::Cli;

/// Server configuration, read from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Listen address.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Render worker threads.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Directory holding the caption font files.
    #[serde(default = "default_font_dir")]
    pub font_dir: PathBuf,

    /// Largest accepted canvas width or height, in pixels.
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            workers: default_workers(),
            font_dir: default_font_dir(),
            max_dimension: default_max_dimension(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}
fn default_workers() -> usize {
    num_cpus::get().max(1)
}
fn default_font_dir() -> PathBuf {
    PathBuf::from("fonts")
}
fn default_max_dimension() -> u32 {
    8192
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse TOML config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml_str(&s)
    }

    /// Load the file named on the command line (if any) and apply CLI overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut cfg = match &cli.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(bind) = &cli.bind {
            cfg.bind = bind.clone();
        }
        if let Some(workers) = cli.workers {
            cfg.workers = workers;
        }
        if let Some(dir) = &cli.font_dir {
            cfg.font_dir = dir.clone();
        }
        if let Some(max) = cli.max_dimension {
            cfg.max_dimension = max;
        }
        cfg.workers = cfg.workers.max(1);
        Ok(cfg)
    }
}
