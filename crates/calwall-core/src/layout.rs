// File: crates/calwall-core/src/layout.rs
// Summary: Layout solver mapping canvas size, paddings and unit count to dot-grid geometry.
// Notes:
// - All integer steps use floor division, including negative numerators produced
//   by paddings larger than the canvas.
// - Non-positive available space clamps spacing to 0; the grid then has no
//   visible dots but the call still succeeds.

use crate::types::Insets;

/// Dot grid placement for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    pub columns: u32,
    pub row_count: u32,
    /// Side of one square cell, in pixels. Always >= 0.
    pub spacing: i64,
    pub dot_diameter: f64,
    pub grid_width: i64,
    pub grid_height: i64,
    pub grid_origin_x: i64,
    pub grid_origin_y: i64,
    /// Caption font size, `floor(width / 25)`.
    pub font_size: i64,
    /// Vertical band kept free below the grid for the caption.
    pub caption_reserved: i64,
    /// Vertical center of the caption line.
    pub caption_baseline_y: i64,
}

/// How a dot is colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotState {
    Past,
    Current,
    Future,
}

/// Classify dot `index` (0-based) given the 1-based elapsed count.
pub fn classify(index: u32, units_elapsed: u32) -> DotState {
    let current = units_elapsed as i64 - 1;
    match (index as i64).cmp(&current) {
        std::cmp::Ordering::Less => DotState::Past,
        std::cmp::Ordering::Equal => DotState::Current,
        std::cmp::Ordering::Greater => DotState::Future,
    }
}

/// Caption font size for a canvas of `width` pixels.
pub const fn caption_font_size(width: u32) -> i64 {
    width as i64 / 25
}

/// Solve the grid for `total_units` dots laid out in `columns` columns.
///
/// `columns` of zero is treated as one; callers validate parameters first.
pub fn compute_grid_geometry(
    width: u32,
    height: u32,
    padding: Insets,
    columns: u32,
    total_units: u32,
    dot_radius_multiplier: f64,
) -> GridGeometry {
    let columns = columns.max(1);
    let cols = columns as i64;
    let row_count = total_units.div_ceil(columns);
    let rows = row_count as i64;

    let available_width = width as i64 - padding.hsum();
    let available_height = height as i64 - padding.vsum();

    // Font height plus a margin above and below, folded into one constant.
    let font_size = caption_font_size(width);
    let caption_reserved = font_size * 3;

    // "+1": half a cell of margin on each side of the grid.
    let spacing_w = available_width.div_euclid(cols + 1);
    let spacing_h = (available_height - caption_reserved).div_euclid(rows + 1);
    let spacing = spacing_w.min(spacing_h).max(0);

    // 0.6 is applied before the multiplier, so 1.0 leaves gaps between dots.
    let dot_diameter = (spacing as f64 * 0.6).floor() * dot_radius_multiplier;

    let grid_width = cols * spacing;
    let grid_height = rows * spacing;

    let grid_origin_x = padding.left as i64 + (available_width - grid_width).div_euclid(2);
    let grid_origin_y =
        padding.top as i64 + (available_height - grid_height - caption_reserved).div_euclid(2);
    let caption_baseline_y = grid_origin_y + grid_height + caption_reserved.div_euclid(2);

    GridGeometry {
        columns,
        row_count,
        spacing,
        dot_diameter,
        grid_width,
        grid_height,
        grid_origin_x,
        grid_origin_y,
        font_size,
        caption_reserved,
        caption_baseline_y,
    }
}

impl GridGeometry {
    /// Center of dot `index`, in canvas pixels. Dots fill rows left to right.
    pub fn dot_center(&self, index: u32) -> (f64, f64) {
        let row = (index / self.columns) as f64;
        let col = (index % self.columns) as f64;
        let s = self.spacing as f64;
        (
            self.grid_origin_x as f64 + col * s + s / 2.0,
            self.grid_origin_y as f64 + row * s + s / 2.0,
        )
    }

    pub fn dot_radius(&self) -> f64 {
        self.dot_diameter / 2.0
    }

    /// The dot size left nothing to draw.
    pub fn is_degenerate(&self) -> bool {
        self.spacing == 0 || self.dot_diameter <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(0, 1), DotState::Current);
        assert_eq!(classify(1, 1), DotState::Future);
        assert_eq!(classify(13, 15), DotState::Past);
        assert_eq!(classify(14, 15), DotState::Current);
        assert_eq!(classify(15, 15), DotState::Future);
    }

    #[test]
    fn paddings_larger_than_canvas_clamp_spacing() {
        let g = compute_grid_geometry(100, 100, Insets::new(80, 80, 0, 0), 5, 30, 1.0);
        assert_eq!(g.spacing, 0);
        assert_eq!(g.dot_diameter, 0.0);
        assert!(g.is_degenerate());
        // Floor division on the negative available width (-60 / 2).
        assert_eq!(g.grid_origin_x, 80 - 30);
    }

    #[test]
    fn dot_center_walks_rows() {
        let g = compute_grid_geometry(1080, 2400, Insets::default(), 15, 31, 1.0);
        let (x0, y0) = g.dot_center(0);
        let (x15, y15) = g.dot_center(15);
        assert_eq!(x0, x15);
        assert_eq!(y15 - y0, g.spacing as f64);
    }
}
