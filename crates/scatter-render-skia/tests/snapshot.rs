// File: crates/scatter-render-skia/tests/snapshot.rs
// Purpose: Golden PNG snapshot with bless flow; pixels compared after decoding.

use scatter_core::{ChartConfig, ChartRenderer, Container, FileSource, Theme, Viewport};
use scatter_render_skia::{RasterOptions, SkiaSurface};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.dimensions(), want_img.dimensions(), "Size differs: {}", path.display());
        assert!(got_img.as_raw() == want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render_bytes(cfg: ChartConfig) -> Vec<u8> {
    let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/data.csv");
    let renderer = ChartRenderer::new(FileSource::new(data), cfg);
    let mut container = Container::default();
    assert!(renderer.render(&mut container, Viewport::new(480, 320)).is_rendered());
    let scene = container.surface().expect("surface");
    // Labels off: glyph rasterization differs between platforms.
    let mut surface = SkiaSurface::new(RasterOptions { draw_labels: false, ..RasterOptions::default() });
    surface.render_to_png_bytes(scene).expect("render bytes")
}

#[test]
fn golden_light_chart() {
    let bytes = render_bytes(ChartConfig::responsive());
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (480, 320));
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 255]);
    // Some pixel carries the solid point fill
    assert!(img.pixels().any(|p| p.0 == [0, 0, 255, 255]));
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/light.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_dark_chart() {
    let cfg = ChartConfig { theme: Theme::dark(), ..ChartConfig::responsive() };
    let bytes = render_bytes(cfg);
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (480, 320));
    assert_eq!(img.get_pixel(0, 0).0, [18, 18, 20, 255]);
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/dark.png");
    write_or_compare(&path, &bytes);
}
