// File: crates/calwall-core/benches/render_bench.rs
// Summary: Criterion benchmark for full wallpaper rendering to PNG bytes.

use anyhow::Result;
use calwall_core::{FontHandle, Mode, RenderOptions, RenderParameters, Renderer, Wallpaper};
use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_render(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
    let renderer = Renderer::new(&FontHandle::system());
    let mut group = c.benchmark_group("render_png_bytes");
    for mode in [Mode::Month, Mode::Year] {
        group.bench_function(format!("phone_{mode}"), |b| {
            let params = RenderParameters { mode, ..RenderParameters::default() };
            let wp = Wallpaper::plan(params, now).expect("plan");
            b.iter(|| -> Result<()> {
                let bytes = renderer.render_png(&wp, &RenderOptions::default())?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
