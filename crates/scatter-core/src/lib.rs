// File: crates/scatter-core/src/lib.rs
// Summary: Core library entry point; exports the census scatterplot pipeline
// (load, coerce, scale, scene, SVG) and the page event host.

pub mod axis;
pub mod chart;
pub mod config;
pub mod extent;
pub mod geometry;
pub mod page;
pub mod plugin;
pub mod record;
pub mod scale;
pub mod scene;
pub mod source;
pub mod svg;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::{Axis, AxisOrient};
pub use chart::{build_scene, ChartLayout, ChartRenderer, Container, RenderOutcome};
pub use config::{ChartConfig, TooltipConfig, Variant};
pub use geometry::{Point, Transform};
pub use page::{Page, PageEvent};
pub use plugin::{Annotation, Overlay, OverlayEvent, Tooltip};
pub use record::{Record, Value};
pub use scale::LinearScale;
pub use scene::{DrawCommand, PointerEvent, PointerEventKind, Scene, Surface};
pub use source::{DataSource, FileSource, InlineSource, LoadError};
pub use svg::{html_document, SvgSurface};
pub use theme::{Rgba, Theme};
pub use types::{Insets, Viewport};
