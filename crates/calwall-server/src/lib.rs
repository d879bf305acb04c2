// File: crates/calwall-server/src/lib.rs
// Summary: HTTP front end for the wallpaper engine; serves `GET /api/wallpaper/getCalWall`
// from a pool of render workers.

pub mod cli;
pub mod config;
pub mod handler;
pub mod logging;
pub mod server;

pub use config::ServerConfig;
pub use handler::{handle, Limits, Reply};
pub use server::RunningServer;
