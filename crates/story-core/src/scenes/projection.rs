// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Spherical Mercator projection for the map scene.

use std::f64::consts::FRAC_PI_4;

use story_scene_port::Point;

/// Latitude where Web-Mercator tiles are cut off; keeps `y` finite at the poles.
const MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Mercator projection with a scale and a pixel translation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mercator {
    scale: f64,
    translate: [f64; 2],
}

impl Mercator {
    /// Projection with `scale` (pixels per radian) centred on `translate`.
    pub const fn new(scale: f64, translate: [f64; 2]) -> Self {
        Self { scale, translate }
    }

    /// Project `[lon, lat]` degrees to surface pixels.
    pub fn project(&self, [lon, lat]: [f64; 2]) -> [f64; 2] {
        let lambda = lon.to_radians();
        let phi = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        [
            self.translate[0] + self.scale * lambda,
            self.translate[1] - self.scale * (FRAC_PI_4 + phi / 2.0).tan().ln(),
        ]
    }

    /// Project to a surface point.
    pub fn point(&self, lon_lat: [f64; 2]) -> Point {
        let [x, y] = self.project(lon_lat);
        [x as f32, y as f32]
    }
}
