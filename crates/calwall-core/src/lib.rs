// File: crates/calwall-core/src/lib.rs
// Summary: Engine entry point; exports the parameter model, the period/layout solvers and the rasterizer.

pub mod error;
pub mod layout;
pub mod params;
pub mod period;
pub mod query;
pub mod render;
pub mod text;
pub mod types;

pub use error::{ParamError, RenderError};
pub use layout::{classify, compute_grid_geometry, DotState, GridGeometry};
pub use params::{Mode, Palette, RenderParameters, Rgb};
pub use period::PeriodState;
pub use query::{parse_query, request_url, to_query_string, ENDPOINT_PATH};
pub use render::{Frame, RenderOptions, Renderer, Wallpaper};
pub use text::{FontHandle, TextShaper};
pub use types::Insets;
