// File: crates/calwall-server/src/handler.rs
// Summary: Request routing and response building, independent of the socket layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use calwall_core::{parse_query, RenderError, RenderOptions, RenderParameters, Renderer, Wallpaper, ENDPOINT_PATH};

/// Headers sent with every wallpaper: each response reflects the current clock.
pub const NO_CACHE_HEADERS: &[(&str, &str)] = &[
    ("Cache-Control", "no-cache, no-store, must-revalidate"),
    ("Pragma", "no-cache"),
    ("Expires", "0"),
];

/// Limits applied before any rendering work.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    pub max_dimension: u32,
}

/// A fully built response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Vec<u8>,
}

/// Why a request did not produce an image.
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    #[error("no route for {0}")]
    NotFound(String),

    #[error("method {0} not allowed")]
    MethodNotAllowed(String),

    #[error("canvas {width}x{height} exceeds the {max}px limit")]
    TooLarge { width: u32, height: u32, max: u32 },

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl HandlerError {
    pub fn status(&self) -> u16 {
        match self {
            HandlerError::NotFound(_) => 404,
            HandlerError::MethodNotAllowed(_) => 405,
            HandlerError::TooLarge { .. } => 400,
            HandlerError::Render(RenderError::Params(_)) => 400,
            HandlerError::Render(_) => 500,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            HandlerError::NotFound(_) => "Not found",
            HandlerError::MethodNotAllowed(_) => "Method not allowed",
            HandlerError::TooLarge { .. } | HandlerError::Render(RenderError::Params(_)) => "Invalid parameters",
            HandlerError::Render(_) => "Failed to generate wallpaper",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

/// Route one request. `url` is the request target (path plus optional query).
pub fn handle(method: &str, url: &str, now: DateTime<Utc>, renderer: &Renderer, limits: Limits) -> Reply {
    match serve(method, url, now, renderer, limits) {
        Ok(png) => Reply {
            status: 200,
            content_type: "image/png",
            headers: NO_CACHE_HEADERS.to_vec(),
            body: png,
        },
        Err(err) => {
            if err.status() >= 500 {
                tracing::error!(%err, url, "error generating wallpaper");
            } else {
                tracing::info!(%err, url, status = err.status(), "rejected request");
            }
            error_reply(&err)
        }
    }
}

fn serve(method: &str, url: &str, now: DateTime<Utc>, renderer: &Renderer, limits: Limits) -> Result<Vec<u8>, HandlerError> {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));
    if path != ENDPOINT_PATH {
        return Err(HandlerError::NotFound(path.to_string()));
    }
    if !method.eq_ignore_ascii_case("GET") {
        return Err(HandlerError::MethodNotAllowed(method.to_string()));
    }

    let params = parse_query(query);
    check_limits(&params, limits)?;

    let wp = Wallpaper::plan(params, now)?;
    let period = &wp.period;
    let left = period.time_until_rollover();
    tracing::debug!(
        local = %period.local,
        title = %period.title,
        elapsed = period.units_elapsed,
        total = period.total_units,
        "dot status: {}h {}m {}s until the dot changes",
        left.num_hours(),
        left.num_minutes() % 60,
        left.num_seconds() % 60,
    );

    Ok(renderer.render_png(&wp, &RenderOptions::default())?)
}

fn check_limits(params: &RenderParameters, limits: Limits) -> Result<(), HandlerError> {
    if params.width > limits.max_dimension || params.height > limits.max_dimension {
        return Err(HandlerError::TooLarge {
            width: params.width,
            height: params.height,
            max: limits.max_dimension,
        });
    }
    Ok(())
}

fn error_reply(err: &HandlerError) -> Reply {
    let body = ErrorBody { error: err.label(), message: err.to_string() };
    Reply {
        status: err.status(),
        content_type: "application/json",
        headers: Vec::new(),
        body: serde_json::to_vec(&body).unwrap_or_else(|_| b"{}".to_vec()),
    }
}
