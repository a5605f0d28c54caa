// File: crates/scatter-render-skia/src/lib.rs
// Summary: Skia CPU raster surface: flushes a scatter scene into PNG bytes or an RGBA8 buffer.

pub mod text;

use anyhow::Result;
use scatter_core::geometry::Transform;
use scatter_core::{DrawCommand, Rgba, Scene, Surface};
use skia_safe as skia;

pub use text::TextShaper;

pub struct RasterOptions {
    /// Device pixel ratio; the scene is laid out in CSS pixels.
    pub dpr: f32,
    /// Skip text for pixel-exact output across platforms.
    pub draw_labels: bool,
    /// Used when the scene has no background of its own.
    pub fallback_background: Rgba,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { dpr: 1.0, draw_labels: true, fallback_background: Rgba::rgb(255, 255, 255) }
    }
}

pub struct SkiaSurface {
    pub opts: RasterOptions,
    shaper: Option<TextShaper>,
}

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn finite(v: f64) -> bool {
    v.is_finite()
}

impl SkiaSurface {
    pub fn new(opts: RasterOptions) -> Self {
        Self { opts, shaper: None }
    }

    /// Pixel size of the raster for `scene`; never below 1x1.
    pub fn pixel_size(&self, scene: &Scene) -> (i32, i32) {
        let dpr = self.opts.dpr.max(0.1) as f64;
        let w = (scene.width * dpr).ceil();
        let h = (scene.height * dpr).ceil();
        let clamp = |v: f64| if v.is_finite() && v >= 1.0 { v as i32 } else { 1 };
        (clamp(w), clamp(h))
    }

    fn raster(&mut self, scene: &Scene) -> Result<skia::Surface> {
        let (w, h) = self.pixel_size(scene);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {w}x{h}"))?;
        if self.opts.draw_labels && self.shaper.is_none() {
            self.shaper = Some(TextShaper::new());
        }
        let canvas = surface.canvas();
        canvas.clear(color(scene.background.unwrap_or(self.opts.fallback_background)));
        canvas.save();
        canvas.scale((self.opts.dpr, self.opts.dpr));
        self.paint(canvas, scene);
        canvas.restore();
        tracing::debug!(width = w, height = h, "rasterized scene");
        Ok(surface)
    }

    fn paint(&self, canvas: &skia::Canvas, scene: &Scene) {
        for cmd in scene.all_commands() {
            match cmd {
                DrawCommand::BeginGroup { transform, .. } => {
                    canvas.save();
                    if let Some(t) = transform {
                        apply_transform(canvas, t);
                    }
                }
                DrawCommand::EndGroup => {
                    canvas.restore();
                }
                DrawCommand::Circle { center, radius, fill, stroke, .. } => {
                    if !finite(center.x) || !finite(center.y) {
                        continue;
                    }
                    let c = (center.x as f32, center.y as f32);
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_style(skia::paint::Style::Fill);
                    paint.set_color(color(fill));
                    canvas.draw_circle(c, radius as f32, &paint);
                    if let Some(s) = stroke {
                        paint.set_style(skia::paint::Style::Stroke);
                        paint.set_stroke_width(s.width as f32);
                        paint.set_color(color(s.color));
                        canvas.draw_circle(c, radius as f32, &paint);
                    }
                }
                DrawCommand::Text { at, dy, content, style, transform, .. } => {
                    let Some(shaper) = self.shaper.as_ref().filter(|_| self.opts.draw_labels) else {
                        continue;
                    };
                    let baseline = at.y + dy * style.size;
                    if !finite(at.x) || !finite(baseline) {
                        continue;
                    }
                    canvas.save();
                    if let Some(t) = transform {
                        apply_transform(canvas, t);
                    }
                    shaper.draw_anchored(
                        canvas,
                        &content,
                        at.x as f32,
                        baseline as f32,
                        style.size as f32,
                        color(style.color),
                        style.anchor,
                    );
                    canvas.restore();
                }
                DrawCommand::Line { from, to, stroke } => {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_stroke_width(stroke.width as f32);
                    paint.set_color(color(stroke.color));
                    canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &paint);
                }
                DrawCommand::Path { points, stroke, .. } => {
                    let mut it = points.iter().filter(|p| finite(p.x) && finite(p.y));
                    let Some(first) = it.next() else { continue };
                    let mut path = skia::Path::new();
                    path.move_to((first.x as f32, first.y as f32));
                    for p in it {
                        path.line_to((p.x as f32, p.y as f32));
                    }
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_style(skia::paint::Style::Stroke);
                    paint.set_stroke_width(stroke.width as f32);
                    paint.set_color(color(stroke.color));
                    canvas.draw_path(&path, &paint);
                }
                DrawCommand::Rect { rect, fill, radius } => {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_color(color(fill));
                    let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                    canvas.draw_round_rect(r, radius as f32, radius as f32, &paint);
                }
            }
        }
    }

    /// Render the scene into PNG bytes.
    pub fn render_to_png_bytes(&mut self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.raster(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(&mut self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to unpremultiplied RGBA8. Returns `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(&mut self, scene: &Scene) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.raster(scene)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed for {w}x{h} surface");
        }
        Ok((px, w, h, stride))
    }
}

impl Default for SkiaSurface {
    fn default() -> Self {
        Self::new(RasterOptions::default())
    }
}

impl Surface for SkiaSurface {
    type Output = Vec<u8>;
    type Error = anyhow::Error;

    fn flush(&mut self, scene: &Scene) -> Result<Vec<u8>> {
        self.render_to_png_bytes(scene)
    }
}

fn apply_transform(canvas: &skia::Canvas, t: Transform) {
    match t {
        Transform::Translate(x, y) => {
            canvas.translate((x as f32, y as f32));
        }
        Transform::Rotate(deg) => {
            canvas.rotate(deg as f32, None);
        }
    }
}
