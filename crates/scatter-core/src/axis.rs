// File: crates/scatter-core/src/axis.rs
// Summary: Bottom/left axis model: tick layout and draw commands (domain path, tick marks, labels).

use crate::geometry::{Point, Transform};
use crate::scale::LinearScale;
use crate::scene::{DrawCommand, Stroke, TextAnchor, TextStyle};
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub value: f64,
    /// Pixel position along the axis, half-pixel offset included.
    pub position: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: AxisOrient,
    pub scale: LinearScale,
    pub tick_count: usize,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
    /// Crisp-edge offset for 1px strokes.
    pub offset: f64,
    pub font_size: f64,
    pub line_color: Rgba,
    pub label_color: Rgba,
}

impl Axis {
    pub fn new(orient: AxisOrient, scale: LinearScale) -> Self {
        Self {
            orient,
            scale,
            tick_count: 10,
            tick_size_inner: 6.0,
            tick_size_outer: 6.0,
            tick_padding: 3.0,
            offset: 0.5,
            font_size: 10.0,
            line_color: Rgba::rgb(0, 0, 0),
            label_color: Rgba::rgb(0, 0, 0),
        }
    }

    pub fn bottom(scale: LinearScale) -> Self {
        Self::new(AxisOrient::Bottom, scale)
    }

    pub fn left(scale: LinearScale) -> Self {
        Self::new(AxisOrient::Left, scale)
    }

    pub fn ticks(&self) -> Vec<AxisTick> {
        let format = self.scale.tick_format(self.tick_count);
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| AxisTick { value, position: self.scale.apply(value) + self.offset, label: format.format(value) })
            .collect()
    }

    // +1 pointing away from the chart on the bottom axis, -1 on the left axis
    fn direction(&self) -> f64 {
        match self.orient {
            AxisOrient::Bottom => 1.0,
            AxisOrient::Left => -1.0,
        }
    }

    fn domain_path(&self) -> Vec<Point> {
        let k = self.direction();
        let o = self.offset;
        let [r0, r1] = self.scale.range();
        let outer = k * self.tick_size_outer;
        match self.orient {
            AxisOrient::Bottom => vec![
                Point::new(r0 + o, outer),
                Point::new(r0 + o, o),
                Point::new(r1 + o, o),
                Point::new(r1 + o, outer),
            ],
            AxisOrient::Left => vec![
                Point::new(outer, r0 + o),
                Point::new(o, r0 + o),
                Point::new(o, r1 + o),
                Point::new(outer, r1 + o),
            ],
        }
    }

    /// Commands for the axis group, wrapped in a group placed at `origin`.
    pub fn commands(&self, origin: Option<Transform>) -> Vec<DrawCommand> {
        let k = self.direction();
        let stroke = Stroke { color: self.line_color, width: 1.0 };
        let spacing = self.tick_size_inner.max(0.0) + self.tick_padding;
        let class = match self.orient {
            AxisOrient::Bottom => "axis axis-bottom",
            AxisOrient::Left => "axis axis-left",
        };

        let mut out = vec![
            DrawCommand::BeginGroup { transform: origin, class: Some(class.into()) },
            DrawCommand::Path { points: self.domain_path(), stroke, class: Some("domain".into()) },
        ];
        for tick in self.ticks() {
            let (group_at, mark_end, label_at, dy, anchor) = match self.orient {
                AxisOrient::Bottom => (
                    Transform::Translate(tick.position, 0.0),
                    Point::new(0.0, k * self.tick_size_inner),
                    Point::new(0.0, k * spacing),
                    0.71,
                    TextAnchor::Middle,
                ),
                AxisOrient::Left => (
                    Transform::Translate(0.0, tick.position),
                    Point::new(k * self.tick_size_inner, 0.0),
                    Point::new(k * spacing, 0.0),
                    0.32,
                    TextAnchor::End,
                ),
            };
            out.push(DrawCommand::BeginGroup { transform: Some(group_at), class: Some("tick".into()) });
            out.push(DrawCommand::Line { from: Point::default(), to: mark_end, stroke });
            out.push(DrawCommand::Text {
                at: label_at,
                dy,
                content: tick.label,
                style: TextStyle {
                    size: self.font_size,
                    color: self.label_color,
                    anchor,
                    class: Some("tick-label".into()),
                },
                transform: None,
                datum: None,
            });
            out.push(DrawCommand::EndGroup);
        }
        out.push(DrawCommand::EndGroup);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_ticks_cover_domain() {
        let axis = Axis::bottom(LinearScale::new([7.0, 20.0], [0.0, 130.0]));
        let ticks = axis.ticks();
        assert_eq!(ticks.len(), 14);
        assert_eq!(ticks[0].label, "7");
        assert_eq!(ticks[0].position, 0.5);
        assert_eq!(ticks[13].position, 130.5);
    }

    #[test]
    fn left_axis_labels_point_outward() {
        let axis = Axis::left(LinearScale::new([0.0, 10.0], [100.0, 0.0]));
        let cmds = axis.commands(None);
        let label = cmds.iter().find_map(|c| match c {
            DrawCommand::Text { at, style, .. } => Some((*at, style.anchor)),
            _ => None,
        });
        assert_eq!(label, Some((Point::new(-9.0, 0.0), TextAnchor::End)));
    }

    #[test]
    fn groups_are_balanced() {
        let axis = Axis::bottom(LinearScale::new([0.0, 1.0], [0.0, 100.0]));
        let cmds = axis.commands(Some(Transform::Translate(0.0, 400.0)));
        let opens = cmds.iter().filter(|c| matches!(c, DrawCommand::BeginGroup { .. })).count();
        let closes = cmds.iter().filter(|c| matches!(c, DrawCommand::EndGroup)).count();
        assert_eq!(opens, closes);
        assert_eq!(opens, 1 + 11);
    }
}
