// File: crates/scatter-render-skia/src/text.rs
// Summary: Text shaper/renderer using Skia textlayout; supports start/middle/end anchoring.

use scatter_core::scene::TextAnchor;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Helvetica", "Arial", "Segoe UI", "Roboto", "DejaVu Sans", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`, positioned horizontally by `anchor`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        anchor: TextAnchor,
    ) {
        let p = self.layout(text, size, color);
        let w = p.longest_line();
        let left = match anchor {
            TextAnchor::Start => x,
            TextAnchor::Middle => x - w * 0.5,
            TextAnchor::End => x - w,
        };
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (left, y - size * 0.8));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}
