// File: crates/scatter-core/src/config.rs
// Summary: Explicit layout/behavior configuration passed into every render.

use crate::theme::Theme;
use crate::types::{Insets, Viewport};

/// The two historical page variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Sized to the live viewport, re-renders on resize, hover tooltips.
    Responsive,
    /// Fixed 960x500 canvas, reduced coercion list, no tooltip, no resize.
    Static,
}

/// Fields coerced to numbers by the responsive page.
pub const RESPONSIVE_NUMERIC_FIELDS: &[&str] = &[
    "poverty",
    "povertyMoe",
    "age",
    "ageMoe",
    "income",
    "incomeMoe",
    "healthcare",
    "healthcareLow",
    "healthcareHigh",
    "obesity",
    "obesityLow",
    "obesityHigh",
    "smokes",
    "smokesLow",
    "smokesHigh",
];

/// Fields coerced by the static page: headline measures only.
pub const STATIC_NUMERIC_FIELDS: &[&str] = &["poverty", "age", "income", "healthcare", "obesity", "smokes"];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipConfig {
    /// `[top, left]` pixel offset from the pointer.
    pub offset: [f64; 2],
    pub font_size: f64,
    pub padding: f64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { offset: [80.0, -60.0], font_size: 12.0, padding: 6.0 }
    }
}

#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub variant: Variant,
    pub margin: Insets,
    /// Viewport used by the static variant regardless of the host size.
    pub fixed_viewport: Viewport,
    pub numeric_fields: Vec<String>,
    pub x_field: String,
    pub y_field: String,
    pub label_field: String,
    pub name_field: String,
    /// Lower domain bound of the x scale; the upper bound is the data max.
    pub x_min: f64,
    pub y_min: f64,
    pub point_radius: f64,
    pub tick_count: usize,
    pub x_caption: String,
    pub y_caption: String,
    /// Added to `height + margin.top` for the x caption baseline.
    pub x_caption_offset: f64,
    /// Added to `-margin.left` for the rotated y caption.
    pub y_caption_offset: f64,
    pub label_font_size: f64,
    pub tick_font_size: f64,
    pub caption_font_size: f64,
    pub tooltip: Option<TooltipConfig>,
    pub theme: Theme,
}

impl ChartConfig {
    pub fn responsive() -> Self {
        Self {
            variant: Variant::Responsive,
            margin: Insets::default(),
            fixed_viewport: Viewport::fixed(),
            numeric_fields: RESPONSIVE_NUMERIC_FIELDS.iter().map(|s| s.to_string()).collect(),
            x_field: "poverty".into(),
            y_field: "healthcare".into(),
            label_field: "abbr".into(),
            name_field: "state".into(),
            x_min: 7.0,
            y_min: 0.0,
            point_radius: 10.0,
            tick_count: 10,
            x_caption: "In Poverty (%)".into(),
            y_caption: "Lacks Healthcare (%)".into(),
            x_caption_offset: 37.0,
            y_caption_offset: 10.0,
            label_font_size: 10.0,
            tick_font_size: 10.0,
            caption_font_size: 16.0,
            tooltip: Some(TooltipConfig::default()),
            theme: Theme::default(),
        }
    }

    pub fn fixed() -> Self {
        Self {
            variant: Variant::Static,
            numeric_fields: STATIC_NUMERIC_FIELDS.iter().map(|s| s.to_string()).collect(),
            tooltip: None,
            ..Self::responsive()
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Responsive => Self::responsive(),
            Variant::Static => Self::fixed(),
        }
    }

    /// Viewport a render actually lays out against.
    pub fn effective_viewport(&self, host: Viewport) -> Viewport {
        match self.variant {
            Variant::Responsive => host,
            Variant::Static => self.fixed_viewport,
        }
    }

    pub fn follows_resize(&self) -> bool {
        self.variant == Variant::Responsive
    }

    pub fn numeric_field_refs(&self) -> Vec<&str> {
        self.numeric_fields.iter().map(String::as_str).collect()
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::responsive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_variant_ignores_host_size() {
        let cfg = ChartConfig::fixed();
        assert_eq!(cfg.effective_viewport(Viewport::new(1920, 1080)), Viewport::new(960, 500));
        assert!(!cfg.follows_resize());
        assert!(cfg.tooltip.is_none());
    }

    #[test]
    fn static_coerces_a_subset() {
        let full = ChartConfig::responsive().numeric_fields;
        let reduced = ChartConfig::fixed().numeric_fields;
        assert!(reduced.len() < full.len());
        assert!(reduced.iter().all(|f| full.contains(f)));
        assert!(!full.iter().any(|f| f == "state" || f == "abbr"));
    }
}
