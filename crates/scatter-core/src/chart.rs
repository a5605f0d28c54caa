// File: crates/scatter-core/src/chart.rs
// Summary: Chart renderer: load -> coerce -> scales -> draw-command scene, installed into a container.

use crate::axis::Axis;
use crate::config::ChartConfig;
use crate::extent::domain_from;
use crate::geometry::{Point, Transform};
use crate::plugin::Tooltip;
use crate::record::Record;
use crate::scale::LinearScale;
use crate::scene::{DrawCommand, HoverAction, PointerEventKind, Scene, Stroke, TextAnchor, TextStyle};
use crate::source::{self, DataSource};
use crate::types::Viewport;

/// Page element that holds drawing surfaces (`#scatter`).
#[derive(Debug)]
pub struct Container {
    selector: String,
    surfaces: Vec<Scene>,
}

impl Container {
    pub fn new(selector: impl Into<String>) -> Self {
        Self { selector: selector.into(), surfaces: Vec::new() }
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn surface(&self) -> Option<&Scene> {
        self.surfaces.last()
    }

    pub fn surface_mut(&mut self) -> Option<&mut Scene> {
        self.surfaces.last_mut()
    }

    /// Remove every surface; returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let n = self.surfaces.len();
        self.surfaces.clear();
        n
    }

    pub fn append(&mut self, scene: Scene) {
        self.surfaces.push(scene);
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new("#scatter")
    }
}

/// Geometry resolved for one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    /// Chart area size (viewport minus margins); may be zero or negative.
    pub width: f64,
    pub height: f64,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartLayout {
    pub fn resolve(config: &ChartConfig, host: Viewport, records: &[Record]) -> Self {
        let viewport = config.effective_viewport(host);
        let (w, h) = viewport.inner(&config.margin);
        let (width, height) = (w as f64, h as f64);
        let x = LinearScale::new(domain_from(records, config.x_min, &config.x_field), [0.0, width]);
        let y = LinearScale::new(domain_from(records, config.y_min, &config.y_field), [height, 0.0]);
        Self { viewport, width, height, x, y }
    }

    /// Chart-area position of a record.
    pub fn project(&self, config: &ChartConfig, record: &Record) -> Point {
        Point::new(self.x.apply(record.number(&config.x_field)), self.y.apply(record.number(&config.y_field)))
    }
}

/// Build the full draw-command list for already-coerced `records`.
pub fn build_scene(config: &ChartConfig, layout: &ChartLayout, records: Vec<Record>) -> Scene {
    let theme = &config.theme;
    let margin = config.margin;
    let (width, height) = (layout.width, layout.height);

    let points = records.iter().map(|r| layout.project(config, r)).collect::<Vec<_>>();
    let labels = records.iter().map(|r| r.display(&config.label_field)).collect::<Vec<_>>();

    let mut scene = Scene::new(layout.viewport.width as f64, layout.viewport.height as f64, records);
    scene.background = theme.background;

    scene.push(DrawCommand::BeginGroup {
        transform: Some(Transform::Translate(margin.left as f64, margin.top as f64)),
        class: Some("chart".into()),
    });

    let mut x_axis = Axis::bottom(layout.x);
    let mut y_axis = Axis::left(layout.y);
    for axis in [&mut x_axis, &mut y_axis] {
        axis.tick_count = config.tick_count;
        axis.font_size = config.tick_font_size;
        axis.line_color = theme.axis_line;
        axis.label_color = theme.tick_label;
    }
    scene.extend(x_axis.commands(Some(Transform::Translate(0.0, height))));
    scene.extend(y_axis.commands(None));

    let stroke = Some(Stroke { color: theme.point_stroke, width: 1.0 });
    for (i, center) in points.iter().enumerate() {
        scene.push(DrawCommand::Circle {
            center: *center,
            radius: config.point_radius,
            fill: theme.point_fill,
            stroke,
            datum: Some(i),
        });
    }
    for (i, (center, label)) in points.iter().zip(labels).enumerate() {
        scene.push(DrawCommand::Text {
            at: *center,
            dy: 0.0,
            content: label,
            style: TextStyle {
                size: config.label_font_size,
                color: theme.point_label,
                anchor: TextAnchor::Start,
                class: Some("point-label".into()),
            },
            transform: None,
            datum: Some(i),
        });
    }

    let caption_style = TextStyle {
        size: config.caption_font_size,
        color: theme.caption,
        anchor: TextAnchor::Middle,
        class: Some("axis-text".into()),
    };
    scene.push(DrawCommand::Text {
        at: Point::default(),
        dy: 0.0,
        content: config.x_caption.clone(),
        style: caption_style.clone(),
        transform: Some(Transform::Translate(width / 2.0, height + margin.top as f64 + config.x_caption_offset)),
        datum: None,
    });
    scene.push(DrawCommand::Text {
        at: Point::new(-(height / 2.0), -(margin.left as f64) + config.y_caption_offset),
        dy: 1.0,
        content: config.y_caption.clone(),
        style: caption_style,
        transform: Some(Transform::Rotate(-90.0)),
        datum: None,
    });
    scene.push(DrawCommand::EndGroup);

    if let Some(tip) = config.tooltip {
        scene.add_overlay(Box::new(Tooltip::new(
            tip,
            &config.name_field,
            &config.x_field,
            &config.y_field,
            theme.tooltip_fill,
            theme.tooltip_text,
        )));
        scene.on(PointerEventKind::Enter, HoverAction::Show);
        scene.on(PointerEventKind::Leave, HoverAction::Hide);
    }
    scene
}

/// Result of one render call. Load failures are already logged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenderOutcome {
    Rendered { points: usize, layout: ChartLayout },
    LoadFailed,
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered { .. })
    }
}

pub struct ChartRenderer<S> {
    source: S,
    config: ChartConfig,
}

impl<S: DataSource> ChartRenderer<S> {
    pub fn new(source: S, config: ChartConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Discard whatever `container` holds, then load, lay out and install a
    /// fresh scene. On a load failure the container is left empty.
    pub fn render(&self, container: &mut Container, host: Viewport) -> RenderOutcome {
        let removed = container.clear();
        if removed > 0 {
            tracing::debug!(removed, container = container.selector(), "discarded previous surface");
        }

        let resource = self.source.describe();
        let mut records = match source::load(&self.source) {
            Ok(records) => records,
            Err(err) => {
                tracing::error!(error = %err, resource = %resource, "data load failed; render aborted");
                return RenderOutcome::LoadFailed;
            }
        };
        tracing::info!(rows = records.len(), resource = %resource, "loaded dataset");

        let fields = self.config.numeric_field_refs();
        for r in records.iter_mut() {
            r.coerce(&fields);
        }
        tracing::info!(fields = fields.len(), "coerced numeric fields");

        let layout = ChartLayout::resolve(&self.config, host, &records);
        tracing::info!(
            width = layout.width,
            height = layout.height,
            x_domain = ?layout.x.domain(),
            y_domain = ?layout.y.domain(),
            "built scales"
        );

        let points = records.len();
        let scene = build_scene(&self.config, &layout, records);
        tracing::info!(points, commands = scene.commands.len(), "scene built");
        container.append(scene);
        RenderOutcome::Rendered { points, layout }
    }
}
