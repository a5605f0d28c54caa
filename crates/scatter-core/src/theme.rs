// File: crates/scatter-core/src/theme.rs
// Summary: Light/Dark theming for scatterplot colors.

/// 8-bit RGBA color, backend-neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// CSS color string; opaque colors print as `#rrggbb`.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// `None` leaves the surface transparent, like a bare page.
    pub background: Option<Rgba>,
    pub point_fill: Rgba,
    pub point_stroke: Rgba,
    pub point_label: Rgba,
    pub axis_line: Rgba,
    pub tick_label: Rgba,
    pub caption: Rgba,
    pub tooltip_fill: Rgba,
    pub tooltip_text: Rgba,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Some(Rgba::rgb(255, 255, 255)),
            point_fill: Rgba::rgb(0, 0, 255), // "blue"
            point_stroke: Rgba::rgb(255, 255, 255),
            point_label: Rgba::rgb(255, 255, 255),
            axis_line: Rgba::rgb(0, 0, 0),
            tick_label: Rgba::rgb(0, 0, 0),
            caption: Rgba::rgb(0, 0, 0),
            tooltip_fill: Rgba::argb(204, 0, 0, 0),
            tooltip_text: Rgba::rgb(255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Some(Rgba::rgb(18, 18, 20)),
            point_fill: Rgba::rgb(64, 160, 255),
            point_stroke: Rgba::rgb(18, 18, 20),
            point_label: Rgba::rgb(18, 18, 20),
            axis_line: Rgba::rgb(180, 180, 190),
            tick_label: Rgba::rgb(150, 150, 160),
            caption: Rgba::rgb(235, 235, 245),
            tooltip_fill: Rgba::argb(230, 250, 250, 252),
            tooltip_text: Rgba::rgb(20, 20, 30),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Some(Rgba::rgb(0x00, 0x00, 0x00)),
            point_fill: Rgba::rgb(0x00, 0xff, 0xff),
            point_stroke: Rgba::rgb(0xff, 0xff, 0xff),
            point_label: Rgba::rgb(0x00, 0x00, 0x00),
            axis_line: Rgba::rgb(0xff, 0xff, 0xff),
            tick_label: Rgba::rgb(0xcc, 0xcc, 0xcc),
            caption: Rgba::rgb(0xff, 0xff, 0xff),
            tooltip_fill: Rgba::rgb(0xff, 0xff, 0x00),
            tooltip_text: Rgba::rgb(0x00, 0x00, 0x00),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
