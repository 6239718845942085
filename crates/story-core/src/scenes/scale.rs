// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Continuous scales mapping data values to surface pixels.

/// Tick spacing of roughly `count` ticks over `[start, stop]`, snapped to
/// 1, 2 or 5 times a power of ten.
fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start).abs() / count.max(1) as f64;
    if raw == 0.0 || !raw.is_finite() {
        return 0.0;
    }
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

fn lerp(range: [f64; 2], t: f64) -> f64 {
    range[0] + (range[1] - range[0]) * t
}

/// Linear scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Scale mapping `domain` onto `range`.
    pub const fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Current domain.
    pub const fn domain(&self) -> [f64; 2] {
        self.domain
    }

    /// Extend the domain outwards to round tick values.
    #[must_use]
    pub fn nice(mut self, count: usize) -> Self {
        let [mut start, mut stop] = self.domain;
        let mut previous = None;
        for _ in 0..10 {
            let step = tick_step(start, stop, count);
            if step == 0.0 || previous == Some(step) {
                break;
            }
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
            previous = Some(step);
        }
        self.domain = [start, stop];
        self
    }

    /// Map a domain value to the range. A collapsed domain maps to the range midpoint.
    pub fn map(&self, value: f64) -> f64 {
        let span = self.domain[1] - self.domain[0];
        if span == 0.0 {
            return lerp(self.range, 0.5);
        }
        lerp(self.range, (value - self.domain[0]) / span)
    }

    /// Round tick values inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let [start, stop] = self.domain;
        let step = tick_step(start, stop, count);
        if step == 0.0 {
            return vec![start];
        }
        let first = (start / step).ceil() as i64;
        let last = (stop / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

/// Logarithmic scale (base 10).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogScale {
    domain: [f64; 2],
    range: [f64; 2],
    clamp: bool,
}

impl LogScale {
    /// Scale mapping a strictly positive `domain` onto `range`.
    pub const fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Clamp outputs to the range.
    #[must_use]
    pub const fn clamped(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Normalized position of `value` in the domain; NaN for non-positive input.
    pub fn normalize(&self, value: f64) -> f64 {
        let lo = self.domain[0].ln();
        let span = self.domain[1].ln() - lo;
        let t = if span == 0.0 { 0.5 } else { (value.ln() - lo) / span };
        if self.clamp && !t.is_nan() {
            t.clamp(0.0, 1.0)
        } else {
            t
        }
    }

    /// Map a domain value to the range.
    pub fn map(&self, value: f64) -> f64 {
        lerp(self.range, self.normalize(value))
    }

    /// Powers of ten inside the domain.
    pub fn ticks(&self) -> Vec<f64> {
        let lo = self.domain[0].min(self.domain[1]);
        let hi = self.domain[0].max(self.domain[1]);
        if lo <= 0.0 || !hi.is_finite() {
            return Vec::new();
        }
        let first = lo.log10().ceil() as i32;
        let last = hi.log10().floor() as i32;
        (first..=last).map(|p| 10f64.powi(p)).collect()
    }
}

/// Square-root scale, used for areas encoded as radii.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SqrtScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl SqrtScale {
    /// Scale mapping a non-negative `domain` onto `range`.
    pub const fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range.
    pub fn map(&self, value: f64) -> f64 {
        let lo = self.domain[0].sqrt();
        let span = self.domain[1].sqrt() - lo;
        if span == 0.0 {
            return lerp(self.range, 0.5);
        }
        lerp(self.range, (value.max(0.0).sqrt() - lo) / span)
    }
}
