// File: crates/demo/src/main.rs
// Summary: Demo drives the scatter page (load, resizes, hover) and writes HTML/SVG/PNG outputs.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use scatter_core::theme;
use scatter_core::{
    html_document, ChartConfig, ChartRenderer, DrawCommand, FileSource, Page, PageEvent, Point, Surface, SvgSurface,
    Variant, Viewport,
};
use scatter_render_skia::{RasterOptions, SkiaSurface};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Census poverty vs. healthcare scatterplot renderer", long_about = None)]
struct Cli {
    /// Census CSV with state, abbr, poverty and healthcare columns
    #[arg(default_value = "data/data.csv", value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Page variant to render
    #[arg(long, value_enum, default_value_t = VariantOpt::Responsive)]
    variant: VariantOpt,

    /// Initial viewport width
    #[arg(long, default_value_t = 960)]
    width: i32,

    /// Initial viewport height
    #[arg(long, default_value_t = 500)]
    height: i32,

    /// Window resizes to replay after load, e.g. `--resize 640x480`
    #[arg(long, value_parser = parse_viewport)]
    resize: Vec<Viewport>,

    /// Hover the point for this state abbreviation before writing outputs
    #[arg(long)]
    hover: Option<String>,

    /// Colour theme (light, dark, high-contrast-dark)
    #[arg(long, default_value = "light")]
    theme: String,

    /// Output directory
    #[arg(short, long, default_value = "target/out", value_hint = ValueHint::DirPath)]
    out: PathBuf,

    /// Also rasterize to PNG
    #[arg(long, action = ArgAction::SetTrue)]
    png: bool,

    /// Device pixel ratio for the PNG
    #[arg(long, default_value_t = 1.0)]
    dpr: f32,

    /// Debug-level logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum VariantOpt {
    Responsive,
    Static,
}

impl From<VariantOpt> for Variant {
    fn from(v: VariantOpt) -> Self {
        match v {
            VariantOpt::Responsive => Variant::Responsive,
            VariantOpt::Static => Variant::Static,
        }
    }
}

fn parse_viewport(s: &str) -> Result<Viewport, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.trim().parse::<i32>().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse::<i32>().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Viewport::new(w, h))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();

    let mut config = ChartConfig::for_variant(cli.variant.into());
    config.theme = theme::find(&cli.theme);
    info!(input = %cli.input.display(), variant = ?cli.variant, theme = config.theme.name, "starting");

    let renderer = ChartRenderer::new(FileSource::new(&cli.input), config);
    let mut page = Page::new(renderer, Viewport::new(cli.width, cli.height));
    page.post(PageEvent::Load);
    for vp in &cli.resize {
        page.post(PageEvent::Resize(*vp));
    }
    page.run_pending();

    if let Some(abbr) = cli.hover.as_deref() {
        match point_for(&page, abbr) {
            Some(p) => {
                page.handle(PageEvent::PointerMove(p));
                if page.hovered().is_none() {
                    warn!(abbr, "point for state is not hoverable");
                }
            }
            None => warn!(abbr, "no plotted point for state"),
        }
    }

    std::fs::create_dir_all(&cli.out).with_context(|| format!("creating {}", cli.out.display()))?;

    let html = html_document(page.container(), "Poverty vs. Healthcare").context("formatting HTML page")?;
    write_output(&cli.out.join("scatter.html"), html.as_bytes())?;

    let Some(scene) = page.container().surface() else {
        warn!("no chart rendered; wrote empty page only");
        return Ok(());
    };

    let svg = SvgSurface::standalone().flush(scene).context("formatting SVG")?;
    write_output(&cli.out.join("scatter.svg"), svg.as_bytes())?;

    if cli.png {
        let mut skia = SkiaSurface::new(RasterOptions { dpr: cli.dpr, ..RasterOptions::default() });
        let out = cli.out.join("scatter.png");
        skia.render_to_png(scene, &out).with_context(|| format!("rasterizing {}", out.display()))?;
        info!(path = %out.display(), "wrote");
    }

    info!(renders = page.render_count(), points = scene.circle_count(), "done");
    Ok(())
}

/// Page-space center of the point whose label is `abbr`.
fn point_for<S>(page: &Page<S>, abbr: &str) -> Option<Point>
where
    S: scatter_core::DataSource,
{
    let scene = page.container().surface()?;
    let config = page.renderer().config();
    let datum = scene
        .data()
        .iter()
        .position(|r| r.text(&config.label_field).is_some_and(|t| t.eq_ignore_ascii_case(abbr)))?;
    scene.circles().find_map(|c| match c {
        DrawCommand::Circle { center, datum: Some(d), .. } if *d == datum => Some(Point::new(
            center.x + config.margin.left as f64,
            center.y + config.margin.top as f64,
        )),
        _ => None,
    })
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "wrote");
    Ok(())
}
