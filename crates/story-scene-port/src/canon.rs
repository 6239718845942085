// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Coordinate canonicalization for deterministic output.
//!
//! Encoders run every coordinate through these functions so that equal
//! drawings serialize to equal bytes.

/// Canonicalize a coordinate to millipixel precision.
///
/// Non-finite input maps to `0.0`; renderers are expected to clamp their
/// scales, so this only guards the encoder.
pub fn canonicalize_f32(x: f32) -> f32 {
    if !x.is_finite() {
        return 0.0;
    }
    let truncated = ((x * 1_000.0) as i64) as f32 / 1_000.0;
    if truncated == 0.0 {
        0.0
    } else {
        truncated
    }
}

/// Canonicalize a point.
pub fn canonicalize_point(p: [f32; 2]) -> [f32; 2] {
    [canonicalize_f32(p[0]), canonicalize_f32(p[1])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_zero() {
        assert_eq!(canonicalize_f32(-0.0).to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn test_truncation() {
        assert_eq!(canonicalize_f32(1.234_567), 1.234);
    }

    #[test]
    fn test_non_finite_is_zeroed() {
        assert_eq!(canonicalize_f32(f32::NAN), 0.0);
        assert_eq!(canonicalize_point([f32::INFINITY, 2.5]), [0.0, 2.5]);
    }
}
