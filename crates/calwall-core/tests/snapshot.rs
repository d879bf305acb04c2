// File: crates/calwall-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders deterministic wallpapers (fixed instant, caption off) to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, records the snapshot for later runs. Before any write, every render is
//   checked against its plan (dot centers carry their state color, margins are
//   background), so a missing golden still asserts the geometry.

use calwall_core::{DotState, FontHandle, Insets, Mode, RenderOptions, RenderParameters, Renderer, Rgb, Wallpaper};
use chrono::{TimeZone, Utc};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("record snapshot");
        eprintln!("[snapshot] Recorded new {}; commit it to pin the pixels.", path.display());
    }
}

/// Decoded PNG must agree with the plan it was rendered from.
fn check_against_plan(wp: &Wallpaper, bytes: &[u8]) {
    let img = image::load_from_memory(bytes).expect("decode render").to_rgba8();
    assert_eq!(img.dimensions(), (wp.params.width, wp.params.height));
    let pal = wp.params.palette;
    let rgba = |c: Rgb| [c.r, c.g, c.b, 255];

    assert!(!wp.geometry.is_degenerate(), "golden layouts must draw dots");
    for i in 0..wp.period.total_units {
        let want = match wp.dot_state(i) {
            DotState::Past => pal.past,
            DotState::Current => pal.current,
            DotState::Future => pal.future,
        };
        let (x, y) = wp.geometry.dot_center(i);
        assert_eq!(img.get_pixel(x as u32, y as u32).0, rgba(want), "dot {i} at ({x}, {y})");
    }

    let g = &wp.geometry;
    let margin_y = (g.grid_origin_y - 1).max(0) as u32;
    assert_eq!(img.get_pixel(wp.params.width / 2, margin_y).0, rgba(pal.background), "margin above grid");
    assert_eq!(img.get_pixel(0, wp.params.height - 1).0, rgba(pal.background), "bottom-left corner");
}

fn render_bytes(params: RenderParameters) -> Vec<u8> {
    let now = Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap();
    let wp = Wallpaper::plan(params, now).expect("plan");
    let bytes = Renderer::new(&FontHandle::system())
        .render_png(&wp, &RenderOptions { draw_caption: false })
        .expect("render bytes");
    check_against_plan(&wp, &bytes);
    bytes
}

#[test]
fn golden_month() {
    let params = RenderParameters { width: 360, height: 800, ..RenderParameters::default() };
    write_or_compare("month.png", &render_bytes(params));
}

#[test]
fn golden_year_padded() {
    let mut params = RenderParameters {
        width: 360,
        height: 800,
        mode: Mode::Year,
        padding: Insets::new(0, 0, 133, 33),
        columns: 20,
        dot_radius_multiplier: 1.4,
        ..RenderParameters::default()
    };
    params.palette.background = Rgb::new(0x0b, 0x0b, 0x0f);
    write_or_compare("year_padded.png", &render_bytes(params));
}
