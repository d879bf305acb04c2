// File: crates/calwall-preview/tests/blit.rs
// Purpose: Window sizing and nearest-neighbour scaling of RGBA frames into 0RGB buffers.

use calwall_core::Frame;
use calwall_preview::blit::{blit_scaled, display_size, DISPLAY_WIDTH};

fn checker(width: u32, height: u32) -> Frame {
    let stride = width as usize * 4;
    let mut pixels = vec![0u8; stride * height as usize];
    for y in 0..height {
        for x in 0..width {
            let i = y as usize * stride + x as usize * 4;
            let px = if (x + y) % 2 == 0 { [255, 0, 0, 255] } else { [0, 0, 255, 255] };
            pixels[i..i + 4].copy_from_slice(&px);
        }
    }
    Frame { pixels, width, height, stride }
}

#[test]
fn display_size_keeps_aspect_ratio() {
    let (w, h) = display_size(1080, 2400);
    assert_eq!(w, DISPLAY_WIDTH);
    assert_eq!(h, 640.0);
}

#[test]
fn identity_blit_copies_pixels() {
    let frame = checker(4, 4);
    let mut out = vec![0u32; 16];
    blit_scaled(&frame, &mut out, 4, 4);
    assert_eq!(out[0], 0x00ff0000);
    assert_eq!(out[1], 0x000000ff);
    assert_eq!(out[5], 0x00ff0000);
}

#[test]
fn downscale_samples_top_left_of_each_block() {
    let frame = checker(4, 4);
    let mut out = vec![0u32; 4];
    blit_scaled(&frame, &mut out, 2, 2);
    // Source (0,0), (2,0), (0,2), (2,2) are all even-parity.
    assert!(out.iter().all(|&p| p == 0x00ff0000), "{out:x?}");
}

#[test]
fn short_buffer_is_not_overrun() {
    let frame = checker(4, 4);
    let mut out = vec![7u32; 3];
    blit_scaled(&frame, &mut out, 4, 4);
    assert_eq!(out, vec![0x00ff0000, 0x000000ff, 0x00ff0000]);
}
