// File: crates/scatter-core/src/types.rs
// Summary: Shared types and constants (viewport sizes, margins).

/// Viewport width used by the static variant.
pub const STATIC_WIDTH: i32 = 960;
/// Viewport height used by the static variant.
pub const STATIC_HEIGHT: i32 = 500;
/// Margin applied on every side of the chart area, in pixels.
pub const MARGIN: i32 = 50;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self { left, right, top, bottom }
    }
    pub const fn uniform(v: i32) -> Self {
        Self::new(v, v, v, v)
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> i32 { self.left.saturating_add(self.right) }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> i32 { self.top.saturating_add(self.bottom) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(MARGIN)
    }
}

/// Host viewport size in pixels. Not validated: zero or negative sizes
/// yield a degenerate chart area rather than an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub const fn fixed() -> Self {
        Self::new(STATIC_WIDTH, STATIC_HEIGHT)
    }

    /// Chart area size once `insets` are removed; may be negative,
    /// saturating at the `i32` bounds.
    pub const fn inner(&self, insets: &Insets) -> (i32, i32) {
        (self.width.saturating_sub(insets.hsum()), self.height.saturating_sub(insets.vsum()))
    }
}
