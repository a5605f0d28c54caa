use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use scatter_core::{ChartConfig, ChartRenderer, Container, InlineSource, Viewport};
use scatter_render_skia::{RasterOptions, SkiaSurface};

fn dataset(n: usize) -> String {
    let mut csv = String::from("state,abbr,poverty,healthcare\n");
    for i in 0..n {
        let poverty = 8.0 + (i as f64 * 0.37).sin().abs() * 14.0;
        let healthcare = 4.0 + (i as f64 * 0.11).cos().abs() * 18.0;
        csv.push_str(&format!("State {i},S{},{poverty:.1},{healthcare:.1}\n", i % 100));
    }
    csv
}

fn bench_raster(c: &mut Criterion) {
    let mut group = c.benchmark_group("raster_png_bytes");
    for &n in &[51usize, 2_000usize] {
        let renderer = ChartRenderer::new(InlineSource::new("bench", dataset(n)), ChartConfig::responsive());
        let mut container = Container::default();
        renderer.render(&mut container, Viewport::new(1280, 720));
        let Some(scene) = container.surface() else { continue };
        let mut surface = SkiaSurface::new(RasterOptions { draw_labels: false, ..RasterOptions::default() });
        group.bench_function(format!("points_{n}"), |b| {
            b.iter(|| -> Result<()> {
                let bytes = surface.render_to_png_bytes(scene)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_raster);
criterion_main!(benches);
