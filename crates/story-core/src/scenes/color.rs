// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Palette constants and the sequential yellow-orange-red colour scale.

use story_scene_port::ColorRgba8;

use super::scale::LogScale;

/// Opaque colour from a `0xRRGGBB` literal.
pub const fn rgb(hex: u32) -> ColorRgba8 {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 0xff]
}

/// Fill for regions without a usable value.
pub const NEUTRAL: ColorRgba8 = rgb(0xeeeeee);
/// Region outlines.
pub const BORDER: ColorRgba8 = rgb(0x333333);
/// Axis lines and labels.
pub const INK: ColorRgba8 = rgb(0x222222);
/// Aggregate trajectory and unselected scatter marks.
pub const RED: ColorRgba8 = rgb(0xff0000);
/// Selected scatter mark.
pub const BLUE: ColorRgba8 = rgb(0x0000ff);
/// Selected entity trajectory and selected region outline.
pub const HIGHLIGHT: ColorRgba8 = rgb(0x1f77b4);

/// Nine-class YlOrRd stops, light to dark.
const YL_OR_RD: [u32; 9] = [
    0xffffcc, 0xffeda0, 0xfed976, 0xfeb24c, 0xfd8d3c, 0xfc4e2a, 0xe31a1c, 0xbd0026, 0x800026,
];

/// Interpolate YlOrRd at `t` in `[0, 1]` (clamped; NaN maps to the lightest stop).
pub fn yl_or_rd(t: f64) -> ColorRgba8 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let last = YL_OR_RD.len() - 1;
    let pos = t * last as f64;
    let i = (pos.floor() as usize).min(last - 1);
    let frac = pos - i as f64;
    let a = rgb(YL_OR_RD[i]);
    let b = rgb(YL_OR_RD[i + 1]);
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * frac).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]), 0xff]
}

/// Sequential-log colour scale over `[1, max]`, clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialLog {
    scale: LogScale,
}

impl SequentialLog {
    /// Scale for values up to `max`.
    pub fn new(max: f64) -> Self {
        Self {
            scale: LogScale::new([1.0, max.max(1.0)], [0.0, 1.0]).clamped(),
        }
    }

    /// Colour for `value`.
    pub fn color(&self, value: f64) -> ColorRgba8 {
        yl_or_rd(self.scale.normalize(value))
    }
}
