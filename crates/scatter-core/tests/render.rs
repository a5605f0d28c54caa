// File: crates/scatter-core/tests/render.rs
// Purpose: End-to-end renders: scale endpoints, idempotent re-render, degenerate viewports.

use scatter_core::{
    ChartConfig, ChartRenderer, Container, DrawCommand, FileSource, InlineSource, RenderOutcome, Viewport,
};

const THREE: &str = "state,abbr,poverty,healthcare\nOne,O1,10,5\nTwo,T2,15,10\nThree,T3,20,8\n";

fn data_csv() -> FileSource {
    FileSource::new(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data.csv"))
}

#[test]
fn scales_map_domain_ends_onto_chart_area() {
    let r = ChartRenderer::new(data_csv(), ChartConfig::responsive());
    let mut c = Container::default();
    let RenderOutcome::Rendered { points, layout } = r.render(&mut c, Viewport::new(1200, 700)) else {
        panic!("render failed");
    };
    assert_eq!(points, 20);
    assert_eq!(layout.x.domain(), [7.0, 21.5]);
    assert_eq!(layout.y.domain(), [0.0, 22.1]);
    assert_eq!(layout.x.apply(7.0), 0.0);
    assert_eq!(layout.x.apply(21.5), layout.width);
    assert_eq!(layout.y.apply(0.0), layout.height);
    assert_eq!(layout.y.apply(22.1), 0.0);
}

#[test]
fn three_record_sample_resolves_expected_domains() {
    let r = ChartRenderer::new(InlineSource::new("three", THREE), ChartConfig::responsive());
    let mut c = Container::default();
    let RenderOutcome::Rendered { layout, .. } = r.render(&mut c, Viewport::new(960, 500)) else {
        panic!("render failed");
    };
    assert_eq!(layout.x.domain(), [7.0, 20.0]);
    assert_eq!(layout.y.domain(), [0.0, 10.0]);

    let scene = c.surface().expect("surface");
    let xs = scene
        .circles()
        .map(|cmd| match cmd {
            DrawCommand::Circle { center, radius, .. } => {
                assert_eq!(*radius, 10.0);
                center.x
            }
            _ => unreachable!(),
        })
        .collect::<Vec<_>>();
    let rightmost = xs.iter().cloned().fold(f64::MIN, f64::max);
    assert_eq!(xs[2], layout.width);
    assert_eq!(rightmost, layout.width);
}

#[test]
fn repeated_renders_keep_exactly_one_surface() {
    let r = ChartRenderer::new(data_csv(), ChartConfig::responsive());
    let mut c = Container::default();
    for (w, h) in [(800, 600), (1024, 768), (640, 480)] {
        assert!(r.render(&mut c, Viewport::new(w, h)).is_rendered());
        assert_eq!(c.surface_count(), 1);
    }
}

#[test]
fn degenerate_viewports_do_not_panic() {
    let r = ChartRenderer::new(InlineSource::new("three", THREE), ChartConfig::responsive());
    let mut c = Container::default();
    for vp in [
        Viewport::new(0, 0),
        Viewport::new(-10, 30),
        Viewport::new(100, 100),
        Viewport::new(i32::MIN, i32::MIN),
        Viewport::new(i32::MAX, i32::MAX),
    ] {
        assert!(r.render(&mut c, vp).is_rendered());
        assert_eq!(c.surface().map(|s| s.circle_count()), Some(3));
    }
}

#[test]
fn empty_dataset_renders_axes_only() {
    let r = ChartRenderer::new(InlineSource::new("empty", "state,abbr,poverty,healthcare\n"), ChartConfig::responsive());
    let mut c = Container::default();
    let RenderOutcome::Rendered { points, layout } = r.render(&mut c, Viewport::new(800, 600)) else {
        panic!("render failed");
    };
    assert_eq!(points, 0);
    assert!(layout.x.domain()[1].is_nan());
    assert_eq!(c.surface().map(|s| s.circle_count()), Some(0));
}

#[test]
fn static_variant_uses_fixed_canvas() {
    let r = ChartRenderer::new(data_csv(), ChartConfig::fixed());
    let mut c = Container::default();
    let RenderOutcome::Rendered { layout, .. } = r.render(&mut c, Viewport::new(1920, 1080)) else {
        panic!("render failed");
    };
    assert_eq!(layout.viewport, Viewport::new(960, 500));
    assert_eq!((layout.width, layout.height), (860.0, 400.0));
    assert!(c.surface().is_some_and(|s| s.overlays().is_empty() && s.listeners().is_empty()));
}

#[test]
fn file_source_failure_empties_the_container() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data.csv");
    std::fs::write(&path, THREE).expect("write csv");

    let r = ChartRenderer::new(FileSource::new(&path), ChartConfig::responsive());
    let mut c = Container::default();
    assert!(r.render(&mut c, Viewport::new(800, 600)).is_rendered());
    assert_eq!(c.surface_count(), 1);

    std::fs::remove_file(&path).expect("remove csv");
    assert_eq!(r.render(&mut c, Viewport::new(800, 600)), RenderOutcome::LoadFailed);
    assert_eq!(c.surface_count(), 0);
}

#[test]
fn malformed_csv_is_a_load_failure() {
    let r = ChartRenderer::new(InlineSource::new("bad", b"st\xffate,abbr\nA,AA\n".to_vec()), ChartConfig::responsive());
    let mut c = Container::default();
    assert_eq!(r.render(&mut c, Viewport::new(800, 600)), RenderOutcome::LoadFailed);
    assert!(c.surface().is_none());
}
