// File: crates/scatter-core/src/plugin.rs
// Summary: Overlay trait (hover annotations drawn above the scene) and the tooltip overlay.

use crate::config::TooltipConfig;
use crate::geometry::{Point, Rect};
use crate::record::Record;
use crate::scene::{DrawCommand, TextAnchor, TextStyle};
use crate::theme::Rgba;

/// Overlay event raised by the scene's hover listeners.
pub enum OverlayEvent<'a> {
    Show { record: &'a Record, at: Point },
    Hide,
}

/// Overlays render extra visuals on top of a scene and react to hover.
pub trait Overlay: std::fmt::Debug {
    fn id(&self) -> &'static str;
    fn handle_event(&mut self, evt: &OverlayEvent<'_>);
    /// Draw commands in surface pixels; empty while inactive.
    fn compute(&self, surface_width: f64, surface_height: f64) -> Vec<DrawCommand>;
    /// Currently displayed annotation, if any.
    fn annotation(&self) -> Option<&Annotation>;
}

/// Visible annotation content and placement.
#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub lines: Vec<String>,
    /// Top-left corner in surface pixels.
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Annotation {
    /// Markup form, lines joined by `<br>`.
    pub fn html(&self) -> String {
        self.lines.iter().map(|l| v_htmlescape::escape(l).to_string()).collect::<Vec<_>>().join("<br>")
    }
}

/// Tooltip naming the hovered state and its two plotted percentages.
#[derive(Debug)]
pub struct Tooltip {
    config: TooltipConfig,
    name_field: String,
    x_field: String,
    y_field: String,
    fill: Rgba,
    text: Rgba,
    current: Option<Annotation>,
}

impl Tooltip {
    pub fn new(config: TooltipConfig, name_field: &str, x_field: &str, y_field: &str, fill: Rgba, text: Rgba) -> Self {
        Self {
            config,
            name_field: name_field.to_string(),
            x_field: x_field.to_string(),
            y_field: y_field.to_string(),
            fill,
            text,
            current: None,
        }
    }

    pub fn lines_for(&self, record: &Record) -> Vec<String> {
        vec![
            record.display(&self.name_field),
            format!("In Poverty: {}%", record.display(&self.x_field)),
            format!("Lacks Healthcare: {}%", record.display(&self.y_field)),
        ]
    }

    // Box sits above the pointer, centered, then shifted by the [top, left] offset.
    fn place(&self, lines: Vec<String>, at: Point) -> Annotation {
        let size = self.config.font_size;
        let pad = self.config.padding;
        let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as f64;
        let width = longest * size * 0.6 + pad * 2.0;
        let height = lines.len() as f64 * size * 1.2 + pad * 2.0;
        let [off_top, off_left] = self.config.offset;
        let origin = Point::new(at.x - width / 2.0 + off_left, at.y - height + off_top);
        Annotation { lines, origin, width, height }
    }
}

impl Overlay for Tooltip {
    fn id(&self) -> &'static str { "tooltip" }

    fn handle_event(&mut self, evt: &OverlayEvent<'_>) {
        match evt {
            OverlayEvent::Show { record, at } => {
                let lines = self.lines_for(record);
                self.current = Some(self.place(lines, *at));
            }
            OverlayEvent::Hide => self.current = None,
        }
    }

    fn compute(&self, _surface_width: f64, _surface_height: f64) -> Vec<DrawCommand> {
        let Some(a) = &self.current else { return Vec::new() };
        let size = self.config.font_size;
        let pad = self.config.padding;
        let mut out = Vec::with_capacity(a.lines.len() + 3);
        out.push(DrawCommand::BeginGroup { transform: None, class: Some("tooltip".into()) });
        out.push(DrawCommand::Rect {
            rect: Rect::from_ltwh(a.origin.x, a.origin.y, a.width, a.height),
            fill: self.fill,
            radius: 4.0,
        });
        for (i, line) in a.lines.iter().enumerate() {
            out.push(DrawCommand::Text {
                at: Point::new(a.origin.x + a.width / 2.0, a.origin.y + pad + (i as f64 + 1.0) * size * 1.2 - size * 0.2),
                dy: 0.0,
                content: line.clone(),
                style: TextStyle { size, color: self.text, anchor: TextAnchor::Middle, class: Some("tooltip-line".into()) },
                transform: None,
                datum: None,
            });
        }
        out.push(DrawCommand::EndGroup);
        out
    }

    fn annotation(&self) -> Option<&Annotation> {
        self.current.as_ref()
    }
}
