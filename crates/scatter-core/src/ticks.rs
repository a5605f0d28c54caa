// File: crates/scatter-core/src/ticks.rs
// Summary: Nice tick layout helpers (1/2/5 x 10^k steps) and label precision.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

fn nice_factor(error: f64) -> f64 {
    if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    }
}

/// Signed increment between ticks. Positive values are the step itself;
/// negative values are `-1/step` so sub-unit steps stay exact.
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    if power >= 0.0 {
        nice_factor(error) * 10f64.powf(power)
    } else {
        -10f64.powf(-power) / nice_factor(error)
    }
}

/// Absolute distance between ticks, signed by domain direction.
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let step0 = (stop - start).abs() / count as f64;
    let base = 10f64.powf(step0.log10().floor());
    let step1 = base * nice_factor(step0 / base);
    if stop < start { -step1 } else { step1 }
}

/// Roughly `count` evenly spaced round values covering `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if start == stop && count > 0 {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let step = tick_increment(lo, hi, count);
    if step == 0.0 || !step.is_finite() {
        return Vec::new();
    }

    let mut out = if step > 0.0 {
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let n = (last - first + 1.0).ceil().max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) * step).collect::<Vec<_>>()
    } else {
        let inv = -step;
        let first = (lo * inv).ceil();
        let last = (hi * inv).floor();
        let n = (last - first + 1.0).ceil().max(0.0) as usize;
        (0..n).map(|i| (first + i as f64) / inv).collect::<Vec<_>>()
    };
    if reverse {
        out.reverse();
    }
    out
}

/// Decimal places needed to tell apart values `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}
