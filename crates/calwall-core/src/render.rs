// File: crates/calwall-core/src/render.rs
// Summary: Wallpaper plan and headless rendering pipeline using Skia CPU raster surfaces.

use std::path::Path;

use chrono::{DateTime, Utc};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use skia_safe as skia;

use crate::error::RenderError;
use crate::layout::{classify, compute_grid_geometry, DotState, GridGeometry};
use crate::params::{Palette, RenderParameters};
use crate::period::PeriodState;
use crate::text::{FontHandle, TextShaper};

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    /// Draw the "Nd left • P%" line. Golden tests turn this off to avoid font variance.
    pub draw_caption: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_caption: true }
    }
}

/// Everything needed to paint one wallpaper: validated inputs plus derived state.
#[derive(Clone, Debug, PartialEq)]
pub struct Wallpaper {
    pub params: RenderParameters,
    pub period: PeriodState,
    pub geometry: GridGeometry,
}

impl Wallpaper {
    /// Validate `params` and solve period and layout for the instant `now`.
    pub fn plan(params: RenderParameters, now: DateTime<Utc>) -> Result<Self, RenderError> {
        params.validate()?;
        let period = PeriodState::compute(now, params.timezone_offset_hours, params.mode);
        let geometry = compute_grid_geometry(
            params.width,
            params.height,
            params.padding,
            params.columns,
            period.total_units,
            params.dot_radius_multiplier,
        );
        tracing::trace!(?geometry, total = period.total_units, elapsed = period.units_elapsed, "planned wallpaper");
        Ok(Self { params, period, geometry })
    }

    pub fn caption(&self) -> String {
        format!("{}d left • {}%", self.period.units_remaining, self.period.percent_complete)
    }

    pub fn dot_state(&self, index: u32) -> DotState {
        classify(index, self.period.units_elapsed)
    }
}

/// RGBA8 (unpremultiplied) pixels of a rendered wallpaper.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

impl Frame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.stride + x as usize * 4;
        self.pixels.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out).write_image(&self.pixels, self.width, self.height, ExtendedColorType::Rgba8)?;
        Ok(out)
    }
}

/// Rasterizer bound to one thread's text shaper.
pub struct Renderer {
    text: TextShaper,
}

impl Renderer {
    pub fn new(fonts: &FontHandle) -> Self {
        Self { text: TextShaper::new(fonts) }
    }

    /// Render to an RGBA8 buffer using a CPU raster surface.
    pub fn render_rgba8(&self, wp: &Wallpaper, opts: &RenderOptions) -> Result<Frame, RenderError> {
        let (width, height) = (wp.params.width, wp.params.height);
        let size = (width as i32, height as i32);
        let mut surface = skia::surfaces::raster_n32_premul(size)
            .ok_or(RenderError::Surface { width, height })?;

        paint(surface.canvas(), wp, opts, &self.text);

        let info = skia::ImageInfo::new(size, skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Readback);
        }
        Ok(Frame { pixels, width, height, stride })
    }

    pub fn render_png(&self, wp: &Wallpaper, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        self.render_rgba8(wp, opts)?.encode_png()
    }

    /// Render to a PNG at `path`, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        wp: &Wallpaper,
        opts: &RenderOptions,
        path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let path = path.as_ref();
        let bytes = self.render_png(wp, opts)?;
        let io_err = |source| RenderError::Io { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, bytes).map_err(io_err)
    }
}

// ---- helpers ----------------------------------------------------------------

fn paint(canvas: &skia::Canvas, wp: &Wallpaper, opts: &RenderOptions, text: &TextShaper) {
    let palette = &wp.params.palette;
    canvas.clear(palette.background.to_skia());

    draw_dots(canvas, wp, palette);

    if opts.draw_caption {
        let g = &wp.geometry;
        text.draw_centered(
            canvas,
            &wp.caption(),
            wp.params.width as f32,
            g.caption_baseline_y as f32,
            g.font_size as f32,
            palette.text.to_skia(),
        );
    }
}

fn draw_dots(canvas: &skia::Canvas, wp: &Wallpaper, palette: &Palette) {
    let g = &wp.geometry;
    if g.is_degenerate() {
        return;
    }

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);

    let radius = g.dot_radius() as f32;
    for i in 0..wp.period.total_units {
        let color = match wp.dot_state(i) {
            DotState::Past => palette.past,
            DotState::Current => palette.current,
            DotState::Future => palette.future,
        };
        fill.set_color(color.to_skia());
        let (x, y) = g.dot_center(i);
        canvas.draw_circle((x as f32, y as f32), radius, &fill);
    }
}
