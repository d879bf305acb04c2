// File: crates/calwall-preview/src/blit.rs
// Summary: Scale a full-resolution RGBA frame into a window-sized 0RGB pixel buffer.

use calwall_core::Frame;

/// Width of the on-screen phone mockup, in logical pixels.
pub const DISPLAY_WIDTH: f64 = 288.0;

/// Window size for a canvas: fixed width, height following the canvas aspect ratio.
pub fn display_size(width: u32, height: u32) -> (f64, f64) {
    let w = width.max(1) as f64;
    (DISPLAY_WIDTH, DISPLAY_WIDTH * height as f64 / w)
}

/// Nearest-neighbour downscale of `frame` into `out` (`out_w * out_h` pixels,
/// `0x00RRGGBB` per pixel as softbuffer expects).
pub fn blit_scaled(frame: &Frame, out: &mut [u32], out_w: u32, out_h: u32) {
    if frame.width == 0 || frame.height == 0 || out_w == 0 || out_h == 0 {
        return;
    }
    for oy in 0..out_h {
        let sy = (oy as u64 * frame.height as u64 / out_h as u64) as u32;
        for ox in 0..out_w {
            let sx = (ox as u64 * frame.width as u64 / out_w as u64) as u32;
            let i = (oy * out_w + ox) as usize;
            let Some(dst) = out.get_mut(i) else { return };
            if let Some([r, g, b, _]) = frame.pixel(sx, sy) {
                *dst = (r as u32) << 16 | (g as u32) << 8 | b as u32;
            }
        }
    }
}
