// File: crates/scatter-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (points, rects, affine transforms).

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }
}

/// Element transform as written on a group or text node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate(f64, f64),
    /// Clockwise rotation in degrees about the origin.
    Rotate(f64),
}

impl Transform {
    pub fn to_affine(self) -> Affine {
        match self {
            Transform::Translate(x, y) => Affine::translate(x, y),
            Transform::Rotate(deg) => Affine::rotate(deg),
        }
    }
}

/// 2D affine matrix `[a c e; b d f]`, applied as `x' = a*x + c*y + e`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine {
    pub const IDENTITY: Self = Self { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    pub const fn translate(x: f64, y: f64) -> Self {
        Self { e: x, f: y, ..Self::IDENTITY }
    }

    pub fn rotate(deg: f64) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        Self { a: c, b: s, c: -s, d: c, e: 0.0, f: 0.0 }
    }

    /// `self` applied after `inner`: points go through `inner` first.
    pub fn then(&self, inner: &Affine) -> Affine {
        Affine {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.a * p.x + self.c * p.y + self.e, self.b * p.x + self.d * p.y + self.f)
    }
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_translate_accumulates() {
        let outer = Affine::translate(50.0, 50.0);
        let inner = Affine::translate(0.0, 400.0);
        let p = outer.then(&inner).apply(Point::new(10.0, 0.0));
        assert_eq!(p, Point::new(60.0, 450.0));
    }

    #[test]
    fn rotate_minus_90_swaps_axes() {
        let p = Affine::rotate(-90.0).apply(Point::new(-200.0, -40.0));
        assert!((p.x - -40.0).abs() < 1e-9);
        assert!((p.y - 200.0).abs() < 1e-9);
    }
}
