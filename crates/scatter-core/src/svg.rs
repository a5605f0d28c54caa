// File: crates/scatter-core/src/svg.rs
// Summary: SVG surface (scene -> SVG markup) and the standalone HTML page wrapper.

use std::fmt::{self, Write as _};

use v_htmlescape::escape;

use crate::chart::Container;
use crate::geometry::{Point, Transform};
use crate::record::format_number;
use crate::scene::{DrawCommand, Scene, Surface};

/// Writes the scene, overlays included, as an `<svg>` element.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgSurface {
    /// Add `xmlns` so the output stands alone as an `.svg` file.
    pub standalone: bool,
}

impl SvgSurface {
    pub fn standalone() -> Self {
        Self { standalone: true }
    }

    pub fn inline() -> Self {
        Self { standalone: false }
    }
}

impl Surface for SvgSurface {
    type Output = String;
    type Error = fmt::Error;

    fn flush(&mut self, scene: &Scene) -> Result<String, fmt::Error> {
        let mut out = String::new();
        let xmlns = if self.standalone { " xmlns=\"http://www.w3.org/2000/svg\"" } else { "" };
        writeln!(out, "<svg{} width=\"{}\" height=\"{}\">", xmlns, num(scene.width), num(scene.height))?;
        if let Some(bg) = scene.background {
            writeln!(out, "<rect class=\"background\" width=\"100%\" height=\"100%\" fill=\"{}\"/>", bg.to_css())?;
        }
        let mut depth = 0usize;
        for cmd in scene.all_commands() {
            if matches!(cmd, DrawCommand::EndGroup) {
                depth = depth.saturating_sub(1);
            }
            for _ in 0..depth {
                out.push_str("  ");
            }
            write_command(&mut out, &cmd)?;
            out.push('\n');
            if matches!(cmd, DrawCommand::BeginGroup { .. }) {
                depth += 1;
            }
        }
        out.push_str("</svg>\n");
        Ok(out)
    }
}

fn write_command(out: &mut String, cmd: &DrawCommand) -> fmt::Result {
    match cmd {
        DrawCommand::BeginGroup { transform, class } => {
            out.push_str("<g");
            if let Some(t) = transform {
                write!(out, " transform=\"{}\"", transform_attr(t))?;
            }
            if let Some(c) = class {
                write!(out, " class=\"{}\"", escape(c))?;
            }
            out.push('>');
        }
        DrawCommand::EndGroup => out.push_str("</g>"),
        DrawCommand::Circle { center, radius, fill, stroke, datum } => {
            write!(out, "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"", num(center.x), num(center.y), num(*radius), fill.to_css())?;
            if let Some(s) = stroke {
                write!(out, " stroke=\"{}\" stroke-width=\"{}\"", s.color.to_css(), num(s.width))?;
            }
            if let Some(d) = datum {
                write!(out, " data-index=\"{d}\"")?;
            }
            out.push_str("/>");
        }
        DrawCommand::Text { at, dy, content, style, transform, .. } => {
            out.push_str("<text");
            if let Some(t) = transform {
                write!(out, " transform=\"{}\"", transform_attr(t))?;
            }
            write!(out, " x=\"{}\" y=\"{}\"", num(at.x), num(at.y))?;
            if *dy != 0.0 {
                write!(out, " dy=\"{}em\"", num(*dy))?;
            }
            write!(
                out,
                " text-anchor=\"{}\" font-size=\"{}\" fill=\"{}\"",
                style.anchor.as_str(),
                num(style.size),
                style.color.to_css()
            )?;
            if let Some(c) = &style.class {
                write!(out, " class=\"{}\"", escape(c))?;
            }
            write!(out, ">{}</text>", escape(content))?;
        }
        DrawCommand::Line { from, to, stroke } => {
            write!(
                out,
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y),
                stroke.color.to_css(),
                num(stroke.width)
            )?;
        }
        DrawCommand::Path { points, stroke, class } => {
            write!(out, "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"", path_data(points), stroke.color.to_css(), num(stroke.width))?;
            if let Some(c) = class {
                write!(out, " class=\"{}\"", escape(c))?;
            }
            out.push_str("/>");
        }
        DrawCommand::Rect { rect, fill, radius } => {
            write!(
                out,
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>",
                num(rect.left),
                num(rect.top),
                num(rect.width()),
                num(rect.height()),
                num(*radius),
                fill.to_css()
            )?;
        }
    }
    Ok(())
}

fn transform_attr(t: &Transform) -> String {
    match t {
        Transform::Translate(x, y) => format!("translate({}, {})", num(*x), num(*y)),
        Transform::Rotate(deg) => format!("rotate({})", num(*deg)),
    }
}

fn path_data(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{}{},{}", cmd, num(p.x), num(p.y));
    }
    d
}

/// Attribute number: up to 3 decimals, trailing zeros dropped.
pub fn num(v: f64) -> String {
    if !v.is_finite() {
        return format_number(v);
    }
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

const PAGE_STYLE: &str = "body{margin:0;font-family:sans-serif}\
.axis-text{font-weight:bold}\
.point-label{pointer-events:none}";

/// Full HTML page with the container's current surface inside `<div id=…>`.
pub fn html_document(container: &Container, title: &str) -> Result<String, fmt::Error> {
    let mut body = String::new();
    if let Some(scene) = container.surface() {
        body = SvgSurface::inline().flush(scene)?;
    }
    let id = container.selector().trim_start_matches('#');
    let mut out = String::new();
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>{}</title>", escape(title))?;
    writeln!(out, "<style>{PAGE_STYLE}</style>")?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<div id=\"{}\">", escape(id))?;
    out.push_str(&body);
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")?;
    Ok(out)
}
