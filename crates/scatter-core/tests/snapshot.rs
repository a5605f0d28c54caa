// File: crates/scatter-core/tests/snapshot.rs
// Purpose: Golden SVG snapshot harness with bless flow.
// Behavior:
// - Renders the fixture dataset at a fixed viewport to SVG text.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares text for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use scatter_core::{ChartConfig, ChartRenderer, Container, FileSource, SvgSurface, Surface, Viewport};

fn render_svg(cfg: ChartConfig) -> String {
    let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data.csv");
    let renderer = ChartRenderer::new(FileSource::new(data), cfg);
    let mut container = Container::default();
    assert!(renderer.render(&mut container, Viewport::new(960, 500)).is_rendered());
    SvgSurface::standalone().flush(container.surface().expect("surface")).expect("svg")
}

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, got: &str) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), got.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read_to_string(&path).expect("read snapshot");
        assert_eq!(got, want, "rendered SVG differs from golden snapshot: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

#[test]
fn golden_responsive_chart() {
    let svg = render_svg(ChartConfig::responsive());
    assert_eq!(svg.matches("<circle").count(), 20);
    assert!(svg.contains(">In Poverty (%)</text>"));
    write_or_compare("responsive.svg", &svg);
}

#[test]
fn golden_static_chart() {
    let svg = render_svg(ChartConfig::fixed());
    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"960\" height=\"500\">"));
    write_or_compare("static.svg", &svg);
}

#[test]
fn renders_are_deterministic() {
    assert_eq!(render_svg(ChartConfig::responsive()), render_svg(ChartConfig::responsive()));
}
