// File: crates/scatter-core/src/page.rs
// Summary: Single-threaded page host: queues load/resize/pointer events and drives the renderer.

use std::collections::VecDeque;

use crate::chart::{ChartRenderer, Container, RenderOutcome};
use crate::geometry::Point;
use crate::scene::{PointerEvent, PointerEventKind};
use crate::source::DataSource;
use crate::types::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PageEvent {
    Load,
    Resize(Viewport),
    /// Pointer position in surface pixels.
    PointerMove(Point),
    /// Pointer left the page.
    PointerExit,
}

/// Owns the container and processes events strictly in arrival order; a
/// render always completes before the next event is looked at.
pub struct Page<S> {
    renderer: ChartRenderer<S>,
    container: Container,
    viewport: Viewport,
    queue: VecDeque<PageEvent>,
    hovered: Option<usize>,
    renders: usize,
}

impl<S: DataSource> Page<S> {
    pub fn new(renderer: ChartRenderer<S>, viewport: Viewport) -> Self {
        Self {
            renderer,
            container: Container::default(),
            viewport,
            queue: VecDeque::new(),
            hovered: None,
            renders: 0,
        }
    }

    pub fn container(&self) -> &Container {
        &self.container
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn renderer(&self) -> &ChartRenderer<S> {
        &self.renderer
    }

    /// Index of the data point currently under the pointer.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Number of renders started so far.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    pub fn post(&mut self, evt: PageEvent) {
        self.queue.push_back(evt);
    }

    /// Drain the queue; returns how many events were handled.
    pub fn run_pending(&mut self) -> usize {
        let mut n = 0;
        while let Some(evt) = self.queue.pop_front() {
            self.handle(evt);
            n += 1;
        }
        n
    }

    pub fn handle(&mut self, evt: PageEvent) {
        match evt {
            PageEvent::Load => {
                self.render();
            }
            PageEvent::Resize(vp) => {
                self.viewport = vp;
                if self.renderer.config().follows_resize() {
                    self.render();
                } else {
                    tracing::debug!(width = vp.width, height = vp.height, "resize ignored by static page");
                }
            }
            PageEvent::PointerMove(p) => self.pointer_move(p),
            PageEvent::PointerExit => self.pointer_exit(),
        }
    }

    fn render(&mut self) -> RenderOutcome {
        self.renders += 1;
        self.hovered = None;
        tracing::info!(render = self.renders, width = self.viewport.width, height = self.viewport.height, "render");
        self.renderer.render(&mut self.container, self.viewport)
    }

    fn pointer_move(&mut self, p: Point) {
        let Some(scene) = self.container.surface_mut() else { return };
        let hit = scene.hit_test(p);
        if hit == self.hovered {
            return;
        }
        if let Some(prev) = self.hovered {
            scene.dispatch(PointerEvent { kind: PointerEventKind::Leave, datum: prev, at: p });
        }
        if let Some(next) = hit {
            scene.dispatch(PointerEvent { kind: PointerEventKind::Enter, datum: next, at: p });
            tracing::debug!(datum = next, "pointer entered point");
        }
        self.hovered = hit;
    }

    fn pointer_exit(&mut self) {
        if let (Some(prev), Some(scene)) = (self.hovered.take(), self.container.surface_mut()) {
            scene.dispatch(PointerEvent { kind: PointerEventKind::Leave, datum: prev, at: Point::default() });
        }
    }
}
