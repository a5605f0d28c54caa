// File: crates/scatter-core/src/scene.rs
// Summary: Drawing surface model: a flat list of draw commands plus bound data,
// hover listeners and overlays. Surfaces consume it in a single flush.

use crate::geometry::{Affine, Point, Rect, Transform};
use crate::plugin::{Overlay, OverlayEvent};
use crate::record::Record;
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Rgba,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub color: Rgba,
    pub anchor: TextAnchor,
    pub class: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Opens a group; everything until the matching `EndGroup` is drawn
    /// through `transform`.
    BeginGroup { transform: Option<Transform>, class: Option<String> },
    EndGroup,
    Circle { center: Point, radius: f64, fill: Rgba, stroke: Option<Stroke>, datum: Option<usize> },
    Text {
        at: Point,
        /// Baseline shift in em units.
        dy: f64,
        content: String,
        style: TextStyle,
        transform: Option<Transform>,
        datum: Option<usize>,
    },
    Line { from: Point, to: Point, stroke: Stroke },
    Path { points: Vec<Point>, stroke: Stroke, class: Option<String> },
    Rect { rect: Rect, fill: Rgba, radius: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Enter,
    Leave,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverAction {
    Show,
    Hide,
}

/// A handler registration on the scene's data points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Listener {
    pub kind: PointerEventKind,
    pub action: HoverAction,
}

/// Pointer event targeted at the data point bound to `datum`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub datum: usize,
    /// Pointer position in surface pixels.
    pub at: Point,
}

#[derive(Debug)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Option<Rgba>,
    pub commands: Vec<DrawCommand>,
    data: Vec<Record>,
    listeners: Vec<Listener>,
    overlays: Vec<Box<dyn Overlay>>,
}

impl Scene {
    pub fn new(width: f64, height: f64, data: Vec<Record>) -> Self {
        Self {
            width,
            height,
            background: None,
            commands: Vec::new(),
            data,
            listeners: Vec::new(),
            overlays: Vec::new(),
        }
    }

    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn extend(&mut self, cmds: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(cmds);
    }

    /// Records bound to the scene's data points, indexed by `datum`.
    pub fn data(&self) -> &[Record] {
        &self.data
    }

    /// Register a hover handler on every data point.
    pub fn on(&mut self, kind: PointerEventKind, action: HoverAction) {
        self.listeners.push(Listener { kind, action });
    }

    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    pub fn add_overlay(&mut self, overlay: Box<dyn Overlay>) {
        self.overlays.push(overlay);
    }

    pub fn overlays(&self) -> &[Box<dyn Overlay>] {
        &self.overlays
    }

    /// Run the listeners registered for `evt.kind`. Returns whether any
    /// handler ran.
    pub fn dispatch(&mut self, evt: PointerEvent) -> bool {
        let Some(record) = self.data.get(evt.datum) else {
            return false;
        };
        let mut handled = false;
        for l in self.listeners.iter().filter(|l| l.kind == evt.kind) {
            let overlay_evt = match l.action {
                HoverAction::Show => OverlayEvent::Show { record, at: evt.at },
                HoverAction::Hide => OverlayEvent::Hide,
            };
            for o in self.overlays.iter_mut() {
                o.handle_event(&overlay_evt);
            }
            handled = true;
        }
        handled
    }

    /// Commands from active overlays, drawn after the scene body.
    pub fn overlay_commands(&self) -> Vec<DrawCommand> {
        self.overlays.iter().flat_map(|o| o.compute(self.width, self.height)).collect()
    }

    /// Body commands followed by overlay commands.
    pub fn all_commands(&self) -> Vec<DrawCommand> {
        let mut out = self.commands.clone();
        out.extend(self.overlay_commands());
        out
    }

    /// Topmost data point whose circle contains `p` (surface pixels).
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        let mut stack = vec![Affine::IDENTITY];
        let mut hit = None;
        for cmd in &self.commands {
            match cmd {
                DrawCommand::BeginGroup { transform, .. } => {
                    let top = *stack.last().unwrap_or(&Affine::IDENTITY);
                    let next = match transform {
                        Some(t) => top.then(&t.to_affine()),
                        None => top,
                    };
                    stack.push(next);
                }
                DrawCommand::EndGroup => {
                    if stack.len() > 1 {
                        stack.pop();
                    }
                }
                DrawCommand::Circle { center, radius, datum: Some(d), .. } => {
                    let top = stack.last().unwrap_or(&Affine::IDENTITY);
                    let c = top.apply(*center);
                    // NaN centers never compare <=, so they are never hit
                    if c.distance(p) <= *radius {
                        hit = Some(*d);
                    }
                }
                _ => {}
            }
        }
        hit
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn circle_count(&self) -> usize {
        self.circles().count()
    }

    /// Text contents carrying `class`, in draw order.
    pub fn texts_with_class(&self, class: &str) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { content, style, .. } if style.class.as_deref() == Some(class) => {
                    Some(content.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

/// A rendering target that consumes a whole scene in one flush.
pub trait Surface {
    type Output;
    type Error;
    fn flush(&mut self, scene: &Scene) -> Result<Self::Output, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(x: f64, y: f64, datum: usize) -> DrawCommand {
        DrawCommand::Circle { center: Point::new(x, y), radius: 10.0, fill: Rgba::rgb(0, 0, 255), stroke: None, datum: Some(datum) }
    }

    #[test]
    fn hit_test_respects_group_transform_and_z_order() {
        let mut scene = Scene::new(200.0, 200.0, Vec::new());
        scene.push(DrawCommand::BeginGroup { transform: Some(Transform::Translate(50.0, 50.0)), class: None });
        scene.push(dot(0.0, 0.0, 0));
        scene.push(dot(5.0, 0.0, 1));
        scene.push(DrawCommand::EndGroup);
        assert_eq!(scene.hit_test(Point::new(52.0, 50.0)), Some(1));
        assert_eq!(scene.hit_test(Point::new(41.0, 50.0)), Some(0));
        assert_eq!(scene.hit_test(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn nan_circles_are_never_hit() {
        let mut scene = Scene::new(10.0, 10.0, Vec::new());
        scene.push(dot(f64::NAN, 0.0, 0));
        assert_eq!(scene.hit_test(Point::new(0.0, 0.0)), None);
        assert_eq!(scene.circle_count(), 1);
    }
}
