// File: crates/calwall-core/src/error.rs
// Summary: Error types for parameter validation and rasterization.

use std::path::PathBuf;

/// A parameter set that the engine refuses to render.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// Canvas width or height was zero.
    #[error("canvas size must be positive (got {width}x{height})")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("column count must be positive")]
    NoColumns,

    /// Dot radius multiplier was zero, negative or not finite.
    #[error("dot radius multiplier must be a positive finite number (got {0})")]
    DotRadius(f64),

    /// Timezone offset was not finite or further than a day from UTC.
    #[error("timezone offset must be finite and within ±24h (got {0})")]
    Timezone(f64),

    /// Color string was not 6 hex digits.
    #[error("invalid color {0:?} (expected 6 hex digits)")]
    Color(String),
}

/// Failure while turning a planned wallpaper into pixels or bytes.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Params(#[from] ParamError),

    /// Skia could not allocate a raster surface of the requested size.
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to read back surface pixels")]
    Readback,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_error_messages() {
        assert_eq!(
            ParamError::EmptyCanvas { width: 0, height: 10 }.to_string(),
            "canvas size must be positive (got 0x10)"
        );
        assert_eq!(ParamError::Color("zz".into()).to_string(), "invalid color \"zz\" (expected 6 hex digits)");
    }

    #[test]
    fn render_error_wraps_params() {
        let err: RenderError = ParamError::NoColumns.into();
        assert_eq!(err.to_string(), "column count must be positive");
    }

    #[test]
    fn errors_are_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<ParamError>();
        assert_impl::<RenderError>();
    }
}
