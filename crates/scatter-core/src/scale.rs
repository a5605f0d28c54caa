// File: crates/scatter-core/src/scale.rs
// Summary: Linear domain -> pixel range scale with nice ticks and tick label formatting.

use crate::ticks;

/// Linear map from a data `domain` onto a pixel `range`. The range may be
/// inverted (`[height, 0]`) so larger values plot higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a domain value to a pixel. A zero-width domain maps everything
    /// to the middle of the range; NaN anywhere propagates.
    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = d1 - d0;
        let t = if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            0.5
        } else {
            (v - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Map a pixel back into the domain.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let span = r1 - r0;
        let t = if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            0.5
        } else {
            (px - r0) / span
        };
        d0 + t * (d1 - d0)
    }

    /// Roughly `count` human-friendly tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain[0], self.domain[1], count)
    }

    /// Label formatter matching the precision of `ticks(count)`.
    pub fn tick_format(&self, count: usize) -> TickFormat {
        let step = ticks::tick_step(self.domain[0], self.domain[1], count);
        TickFormat { precision: ticks::precision_fixed(step) }
    }
}

/// Fixed-point tick label format with thousands grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickFormat {
    pub precision: usize,
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        if !v.is_finite() {
            return crate::record::format_number(v);
        }
        let s = format!("{:.*}", self.precision, v.abs());
        let (int_part, frac_part) = match s.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (s.as_str(), None),
        };
        let mut grouped = String::with_capacity(s.len() + int_part.len() / 3);
        for (i, c) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if let Some(f) = frac_part {
            grouped.push('.');
            grouped.push_str(f);
        }
        // negative zero after rounding prints without a sign
        let is_zero = grouped.chars().all(|c| c == '0' || c == '.' || c == ',');
        if v < 0.0 && !is_zero {
            format!("\u{2212}{grouped}")
        } else {
            grouped
        }
    }
}
