// File: crates/calwall-preview/src/lib.rs
// Summary: Preview adapter library: presets, editable state, and frame scaling for the window.

pub mod blit;
pub mod presets;
pub mod state;

pub use state::{Command, PreviewState};
