// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Number formatting for tick labels and tooltips.

/// Integer with thousands separators (`37149.4` → `"37,149"`).
pub fn grouped(value: f64) -> String {
    let n = value.round() as i64;
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One significant digit with an SI suffix (`20000` → `"20k"`).
pub fn si(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return "0".to_owned();
    }
    let magnitude = 10f64.powf(value.abs().log10().floor());
    let rounded = (value / magnitude).round() * magnitude;
    let exponent = (rounded.abs().log10().floor() as i32).div_euclid(3).clamp(0, 4);
    let suffix = ["", "k", "M", "G", "T"][exponent as usize];
    let scaled = rounded / 10f64.powi(exponent * 3);
    format!("{}{suffix}", scaled.round() as i64)
}

/// Axis tick label: integers grouped, fractions to one decimal.
pub fn tick(value: f64) -> String {
    if value.fract() == 0.0 {
        grouped(value)
    } else {
        format!("{value:.1}")
    }
}
